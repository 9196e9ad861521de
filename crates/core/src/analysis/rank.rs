use crate::price::entity::{PriceSeries, RankedEntry};

/// # Summary
/// 将 24 个小时按电价从高到低排序。
///
/// # Logic
/// 使用稳定排序，电价相同的小时保持原有的小时先后顺序。
///
/// # Returns
/// 包含全部 24 项的排序结果。
pub fn rank_descending(series: &PriceSeries) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = series
        .iter()
        .map(|(hour, price)| RankedEntry { hour, price })
        .collect();
    entries.sort_by(|a, b| b.price.cmp(&a.price));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::entity::HOURS_IN_DAY;

    #[test]
    fn test_ties_keep_hour_order() {
        let mut prices = [1; HOURS_IN_DAY];
        prices[5] = 9;
        prices[2] = 9;
        let ranked = rank_descending(&PriceSeries::from(prices));

        assert_eq!(ranked.len(), HOURS_IN_DAY);
        assert_eq!(ranked[0], RankedEntry { hour: 2, price: 9 });
        assert_eq!(ranked[1], RankedEntry { hour: 5, price: 9 });
        assert_eq!(ranked[2], RankedEntry { hour: 0, price: 1 });
        assert_eq!(ranked[23], RankedEntry { hour: 23, price: 1 });
    }
}
