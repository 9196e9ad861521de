use elpris_core::price::error::PriceError;
use thiserror::Error;

/// # Summary
/// 菜单循环的致命错误。
///
/// # Invariants
/// - 可在命令级恢复的情况（非法选项、非法数字、输入提前结束、图表配置非法）不会出现在这里。
#[derive(Error, Debug)]
pub enum MenuError {
    // 标准输入/输出不可用
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Price input error: {0}")]
    Price(#[from] PriceError),
}
