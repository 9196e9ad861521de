use elpris_core::common::format::format_decimal;
use elpris_core::config::ReportConfig;
use elpris_core::price::entity::{HourSpan, PriceStats, RankedEntry, Window};

/// # Summary
/// 最低价、最高价及日均价报表。
///
/// # Logic
/// 极值附带所在时段（`HH-HH`），均价按配置的小数位输出。
pub fn stats_report(stats: &PriceStats, config: &ReportConfig) -> String {
    let unit = &config.unit;
    format!(
        "Lägsta pris: {}, {} {unit}\nHögsta pris: {}, {} {unit}\nMedelpris: {} {unit}\n",
        HourSpan::report(stats.min_hour),
        stats.min_price,
        HourSpan::report(stats.max_hour),
        stats.max_price,
        format_decimal(stats.average, config.average_decimals),
    )
}

/// 从高到低的排序报表，每行一个时段。
pub fn ranking_report(entries: &[RankedEntry]) -> String {
    let mut out = String::from("Timmar sorterade från dyrast till billigast:\n");
    for entry in entries {
        out.push_str(&format!(
            "{} {} öre\n",
            HourSpan::report(entry.hour),
            entry.price
        ));
    }
    out
}

/// 充电窗口报表：起始小时及窗口均价。
pub fn window_report(window: &Window, config: &ReportConfig) -> String {
    format!(
        "Påbörja laddning klockan {}\nMedelpris {}h: {} {}\n",
        window.start_hour,
        window.hours,
        format_decimal(window.average, config.window_decimals),
        config.unit,
    )
}
