use crate::price::entity::{HOURS_IN_DAY, PriceSeries, PriceStats};
use rust_decimal::Decimal;
use tracing::debug;

/// # Summary
/// 计算序列的最低价、最高价及日均价。
///
/// # Logic
/// 1. 以第 0 小时作为初始极值，按 1..23 顺序扫描。
/// 2. 仅在严格更低 / 严格更高时替换，保证并列时取最早的小时。
/// 3. 以 i64 累加总和，均价为总和 / 24 的精确十进制值。
///
/// # Arguments
/// * `series`: 电价序列。
///
/// # Returns
/// 统计结果 `PriceStats`。
pub fn summarize(series: &PriceSeries) -> PriceStats {
    let prices = series.prices();
    let mut stats = PriceStats {
        min_price: prices[0],
        min_hour: 0,
        max_price: prices[0],
        max_hour: 0,
        average: Decimal::ZERO,
    };

    let mut sum: i64 = 0;
    for (hour, price) in series.iter() {
        if price < stats.min_price {
            stats.min_price = price;
            stats.min_hour = hour;
        }
        if price > stats.max_price {
            stats.max_price = price;
            stats.max_hour = hour;
        }
        sum += i64::from(price);
    }

    stats.average = Decimal::from(sum) / Decimal::from(HOURS_IN_DAY);
    debug!(?stats, "Summarized price series");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_all_equal_prices() {
        let stats = summarize(&PriceSeries::from([5; HOURS_IN_DAY]));
        assert_eq!(stats.min_price, 5);
        assert_eq!(stats.min_hour, 0);
        assert_eq!(stats.max_price, 5);
        assert_eq!(stats.max_hour, 0);
        assert_eq!(stats.average, dec!(5));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut prices = [50; HOURS_IN_DAY];
        prices[3] = 10;
        prices[17] = 10;
        prices[8] = 90;
        prices[20] = 90;
        let stats = summarize(&PriceSeries::from(prices));
        assert_eq!((stats.min_price, stats.min_hour), (10, 3));
        assert_eq!((stats.max_price, stats.max_hour), (90, 8));
    }

    #[test]
    fn test_average_handles_negative_prices() {
        let mut prices = [0; HOURS_IN_DAY];
        prices[0] = -12;
        prices[1] = 0;
        prices[2] = 6;
        let stats = summarize(&PriceSeries::from(prices));
        assert_eq!(stats.average, dec!(-0.25));
        assert_eq!((stats.min_price, stats.min_hour), (-12, 0));
        assert_eq!((stats.max_price, stats.max_hour), (6, 2));
    }
}
