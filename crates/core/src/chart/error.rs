use thiserror::Error;

/// # Summary
/// 文本图表配置错误。
///
/// # Invariants
/// - 只在配置非法时产生，合法配置下渲染不会失败。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    // 图表至少需要顶行与底行两行
    #[error("Chart height must be at least 2, got {0}")]
    Height(u8),
    // 固定量程的下界必须严格小于上界
    #[error("Invalid fixed range: min {min} must be below max {max}")]
    Range { min: i32, max: i32 },
}
