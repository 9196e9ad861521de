use crate::chart::error::ChartError;
use serde::{Deserialize, Serialize};

/// # Summary
/// 电价到图表行号的归一化策略。
///
/// # Invariants
/// - `Fixed` 要求 `min < max`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Normalization {
    /// 固定量程，与序列内容无关
    Fixed { min: i32, max: i32 },
    /// 以序列自身的最低价与最高价为量程
    Dynamic,
}

/// # Summary
/// 文本柱状图配置。
///
/// # Invariants
/// - `height >= 2`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    // 图表行数
    pub height: u8,
    pub normalization: Normalization,
}

impl ChartConfig {
    /// # Summary
    /// 校验配置合法性。
    ///
    /// # Returns
    /// 行数不足或固定量程倒置时返回 `ChartError`。
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.height < 2 {
            return Err(ChartError::Height(self.height));
        }
        if let Normalization::Fixed { min, max } = self.normalization
            && min >= max
        {
            return Err(ChartError::Range { min, max });
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 5,
            normalization: Normalization::Fixed { min: -12, max: 100 },
        }
    }
}
