use crate::price::entity::{HourSpan, PriceSeries};
use crate::price::error::PriceError;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// # Summary
/// 一次录入命令的结束方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// 24 个小时全部录入完成
    Complete,
    /// 输入流提前结束，`filled` 为已写入的小时数
    Exhausted { filled: usize },
}

/// # Summary
/// 从按行输入的流中依次读取 24 个小时的电价，写入序列。
///
/// # Logic
/// 1. 输出录入标题。
/// 2. 对每个小时输出 `Pris för timme HH-HH:` 提示并读取一行。
/// 3. 流结束时立即返回 `Exhausted`，剩余小时保持原值。
/// 4. 去除首尾空白后解析为整数，失败（含非 UTF-8 内容）时中止录入并返回 `InvalidNumber`，已写入的小时保留。
///
/// # Arguments
/// * `reader`: 行输入流。
/// * `writer`: 提示输出流。
/// * `series`: 被覆盖的电价序列。
///
/// # Returns
/// 成功返回录入结束方式，解析失败或流错误返回 `PriceError`。
pub fn collect_prices<R, W>(
    reader: &mut R,
    writer: &mut W,
    series: &mut PriceSeries,
) -> Result<InputOutcome, PriceError>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        writer,
        "Ange elpriser för varje timme på dygnet (i öre per kWh):"
    )?;

    let mut buf = Vec::new();
    for (hour, slot) in series.slots_mut().enumerate() {
        writeln!(writer, "Pris för timme {}:", HourSpan::wrapping(hour))?;
        writer.flush()?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            info!("Input exhausted after {} hours", hour);
            return Ok(InputOutcome::Exhausted { filled: hour });
        }

        // 非 UTF-8 字节按替换字符解码，随后作为非法数字处理
        let line = String::from_utf8_lossy(&buf);
        let token = line.trim();
        *slot = token.parse::<i32>().map_err(|_| {
            warn!("Rejected price {:?} for hour {:02}", token, hour);
            PriceError::InvalidNumber {
                hour,
                input: token.to_string(),
            }
        })?;
    }

    info!("Collected prices for all hours");
    Ok(InputOutcome::Complete)
}
