use crate::analysis::stats::summarize;
use crate::chart::entity::{ChartConfig, Normalization};
use crate::chart::error::ChartError;
use crate::price::entity::{HOURS_IN_DAY, PriceSeries};

// 每个小时列占用的字符宽度
const COLUMN_WIDTH: usize = 3;
// 行首刻度区 `%4d|` 的宽度
const AXIS: &str = "    |";

/// # Summary
/// 将电价序列渲染为固定高度的 ASCII 柱状图。
///
/// # Logic
/// 1. 校验配置，按归一化策略确定量程 [min, max]。
/// 2. 每小时的层级为 `floor((price - min) * (height - 1) / (max - min))`。
///    低于量程的电价层级为负，不显示任何标记；高于量程的电价占满所有行。
/// 3. 自顶行 (height - 1) 至底行 0 输出，层级不低于行号的小时标记 `x`。
///    顶行刻度为 max，底行刻度为 min。
/// 4. 输出横线及 `00 01 … 23` 小时标签行。
///
/// 动态量程下若全部电价相同，所有小时都落在底行。
///
/// # Arguments
/// * `series`: 电价序列。
/// * `config`: 图表配置。
///
/// # Returns
/// 以换行结尾的多行文本，配置非法时返回 `ChartError`。
pub fn render(series: &PriceSeries, config: &ChartConfig) -> Result<String, ChartError> {
    config.validate()?;

    let (min, max) = match config.normalization {
        Normalization::Fixed { min, max } => (min, max),
        Normalization::Dynamic => {
            let stats = summarize(series);
            (stats.min_price, stats.max_price)
        }
    };

    let top = i64::from(config.height) - 1;
    let range = i64::from(max) - i64::from(min);
    let levels: Vec<i64> = series
        .iter()
        .map(|(_, price)| {
            if range == 0 {
                0
            } else {
                ((i64::from(price) - i64::from(min)) * top).div_euclid(range)
            }
        })
        .collect();

    let mut out = String::new();
    for row in (0..=top).rev() {
        let mut line = if row == top {
            format!("{max:4}|")
        } else if row == 0 {
            format!("{min:4}|")
        } else {
            AXIS.to_string()
        };
        for level in &levels {
            line.push_str(if *level >= row { "  x" } else { "   " });
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(AXIS);
    out.push_str(&"-".repeat(HOURS_IN_DAY * COLUMN_WIDTH));
    out.push('\n');

    out.push_str(&" ".repeat(AXIS.len()));
    for hour in 0..HOURS_IN_DAY {
        out.push_str(&format!(" {hour:02}"));
    }
    out.push('\n');

    Ok(out)
}
