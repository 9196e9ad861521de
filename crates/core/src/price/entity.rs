use crate::price::error::PriceError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 一天的小时数，也是电价序列的固定长度。
pub const HOURS_IN_DAY: usize = 24;

/// # Summary
/// 一天 24 个小时的电价序列，下标 i 对应时段 [i, i+1)。
///
/// # Invariants
/// - 长度恒为 24，由定长数组在类型上保证。
/// - 未录入的小时隐式为 0。
/// - 只有录入流程会整体改写序列，其余操作只读。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    // 每小时电价（öre/kWh）
    prices: [i32; HOURS_IN_DAY],
}

impl PriceSeries {
    /// 创建一条全部为 0 的序列。
    pub fn new() -> Self {
        Self::default()
    }

    /// 按小时顺序返回全部电价。
    pub fn prices(&self) -> &[i32; HOURS_IN_DAY] {
        &self.prices
    }

    /// 读取指定小时的电价，越界返回 None。
    pub fn get(&self, hour: usize) -> Option<i32> {
        self.prices.get(hour).copied()
    }

    /// # Summary
    /// 以 (小时, 电价) 的形式遍历序列。
    ///
    /// # Returns
    /// 按小时 0..23 顺序产出的迭代器。
    pub fn iter(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.prices.iter().copied().enumerate()
    }

    // 录入流程按顺序覆盖各小时
    pub(crate) fn slots_mut(&mut self) -> impl Iterator<Item = &mut i32> {
        self.prices.iter_mut()
    }
}

impl From<[i32; HOURS_IN_DAY]> for PriceSeries {
    fn from(prices: [i32; HOURS_IN_DAY]) -> Self {
        Self { prices }
    }
}

impl TryFrom<&[i32]> for PriceSeries {
    type Error = PriceError;

    /// # Summary
    /// 从切片构造序列。
    ///
    /// # Logic
    /// 1. 校验切片长度必须恰好为 24。
    /// 2. 拷贝为定长数组。
    ///
    /// # Returns
    /// 长度不符时返回 `PriceError::Length`。
    fn try_from(prices: &[i32]) -> Result<Self, Self::Error> {
        let prices: [i32; HOURS_IN_DAY] = prices
            .try_into()
            .map_err(|_| PriceError::Length(prices.len()))?;
        Ok(Self { prices })
    }
}

impl TryFrom<Vec<i32>> for PriceSeries {
    type Error = PriceError;

    fn try_from(prices: Vec<i32>) -> Result<Self, Self::Error> {
        Self::try_from(prices.as_slice())
    }
}

/// # Summary
/// 形如 `07-08` 的小时区间标签。
///
/// # Invariants
/// - `start` 位于 0..24。
/// - 报表中结束小时直接取 `start + 1`（`23-24`），录入提示中按 24 取模回绕（`23-00`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourSpan {
    start: usize,
    end: usize,
}

impl HourSpan {
    /// 报表使用的区间，结束小时不回绕。
    pub fn report(hour: usize) -> Self {
        Self {
            start: hour,
            end: hour + 1,
        }
    }

    /// 录入提示使用的区间，结束小时回绕到 00。
    pub fn wrapping(hour: usize) -> Self {
        Self {
            start: hour,
            end: (hour + 1) % HOURS_IN_DAY,
        }
    }
}

impl fmt::Display for HourSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.start, self.end)
    }
}

/// # Summary
/// 排序结果中的一项：某小时及其电价。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    // 小时 (0..23)
    pub hour: usize,
    // 该小时电价
    pub price: i32,
}

/// # Summary
/// 连续若干小时组成的时间窗口及其平均电价。
///
/// # Invariants
/// - `start_hour + hours <= 24`。
/// - `average` 为窗口内电价之和除以 `hours` 的精确值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    // 窗口起始小时
    pub start_hour: usize,
    // 窗口长度（小时）
    pub hours: usize,
    // 窗口平均电价
    pub average: Decimal,
}

/// # Summary
/// 最低价、最高价及日均价。
///
/// # Invariants
/// - `min_price <= average <= max_price`。
/// - 出现并列时 `min_hour` 与 `max_hour` 取最早的小时。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceStats {
    pub min_price: i32,
    pub min_hour: usize,
    pub max_price: i32,
    pub max_hour: usize,
    // 24 小时电价之和 / 24
    pub average: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_rejects_wrong_length() {
        let err = PriceSeries::try_from(vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, PriceError::Length(3)));

        let ok = PriceSeries::try_from((0..24).collect::<Vec<i32>>()).unwrap();
        assert_eq!(ok.get(23), Some(23));
        assert_eq!(ok.get(24), None);
    }

    #[test]
    fn test_hour_span_display() {
        assert_eq!(HourSpan::report(7).to_string(), "07-08");
        assert_eq!(HourSpan::report(23).to_string(), "23-24");
        assert_eq!(HourSpan::wrapping(23).to_string(), "23-00");
    }
}
