use crate::price::entity::{HOURS_IN_DAY, PriceSeries, Window};
use rust_decimal::Decimal;
use tracing::debug;

/// 充电窗口的固定长度（小时）。
pub const CHARGE_WINDOW_HOURS: usize = 4;

/// # Summary
/// 查找平均电价最低的连续 4 小时充电窗口。
///
/// # Logic
/// 扫描起点 0..=20 的全部 21 个窗口，规则同 [`cheapest_window`]。
/// 未录入的小时按电价 0 参与计算。
///
/// # Returns
/// 最佳窗口。
pub fn best_charging_window(series: &PriceSeries) -> Window {
    scan(series, CHARGE_WINDOW_HOURS)
}

/// # Summary
/// 查找平均电价最低的连续 `hours` 小时窗口。
///
/// # Logic
/// 1. 长度必须位于 1..=24，否则无解。
/// 2. 按起点升序扫描，仅在均价严格更低时替换，并列时保留最早的起点。
///
/// # Arguments
/// * `series`: 电价序列。
/// * `hours`: 窗口长度。
///
/// # Returns
/// 长度合法时返回最佳窗口，否则返回 None。
pub fn cheapest_window(series: &PriceSeries, hours: usize) -> Option<Window> {
    if hours == 0 || hours > HOURS_IN_DAY {
        return None;
    }
    Some(scan(series, hours))
}

// 调用方保证 1 <= hours <= 24
fn scan(series: &PriceSeries, hours: usize) -> Window {
    let width = Decimal::from(hours);
    let mut best = Window {
        start_hour: 0,
        hours,
        average: Decimal::MAX,
    };

    for (start, slice) in series.prices().windows(hours).enumerate() {
        let sum: i64 = slice.iter().copied().map(i64::from).sum();
        let average = Decimal::from(sum) / width;
        if average < best.average {
            best.start_hour = start;
            best.average = average;
        }
    }

    debug!(?best, "Cheapest window found");
    best
}
