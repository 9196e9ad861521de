use rust_decimal::{Decimal, RoundingStrategy};

/// # Summary
/// 与运行时区域设置无关的十进制格式化。
///
/// # Logic
/// 1. 按“四舍五入、中点远离零”保留 `decimals` 位小数。
/// 2. 以 `.` 作为小数点输出，并补足末尾的 0（例如 `5.00`）。
///
/// # Arguments
/// * `value`: 待格式化的数值。
/// * `decimals`: 小数位数。
///
/// # Returns
/// 格式化后的字符串。
pub fn format_decimal(value: Decimal, decimals: u8) -> String {
    let rounded =
        value.round_dp_with_strategy(u32::from(decimals), RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", usize::from(decimals), rounded)
}
