use crate::command::Command;
use crate::error::MenuError;
use crate::report::{ranking_report, stats_report, window_report};
use elpris_core::analysis::rank::rank_descending;
use elpris_core::analysis::stats::summarize;
use elpris_core::analysis::window::best_charging_window;
use elpris_core::chart::render::render;
use elpris_core::config::AppConfig;
use elpris_core::price::entity::{HourSpan, PriceSeries};
use elpris_core::price::error::PriceError;
use elpris_core::price::input::{InputOutcome, collect_prices};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// # Summary
/// 处理函数执行后菜单循环的走向。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// 命令处理函数签名。
pub type Handler<R, W> = fn(&mut Menu<R, W>) -> Result<Flow, MenuError>;

/// # Summary
/// 单线程、同步的读取-执行菜单循环。
///
/// # Invariants
/// - 电价序列由菜单独占，只有录入命令会改写它。
/// - 只有输入/输出流错误会终止循环并向上传播，其余错误在命令级处理。
pub struct Menu<R, W> {
    // 行输入流（菜单选项与电价共用）
    reader: R,
    // 文本输出流
    writer: W,
    // 当前电价序列
    series: PriceSeries,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(reader: R, writer: W, config: AppConfig) -> Self {
        Self {
            reader,
            writer,
            series: PriceSeries::new(),
            config,
        }
    }

    /// 当前电价序列。
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    /// 结束会话并取回输出流。
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// # Summary
    /// 运行菜单循环直到用户退出或输入流结束。
    ///
    /// # Logic
    /// 1. 输出菜单并读取一行选项，输入流结束时正常返回。
    /// 2. 选项解析为 `Command` 后经 [`Menu::handler`] 分发，非法选项（含非 UTF-8 内容）提示后重新显示菜单。
    /// 3. 处理函数返回 `Flow::Exit` 时结束循环。
    ///
    /// # Returns
    /// 正常结束返回 Ok，流错误返回 `MenuError`。
    pub fn run(&mut self) -> Result<(), MenuError> {
        let mut buf = Vec::new();
        loop {
            self.print_menu()?;

            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                info!("Input stream closed, leaving menu");
                return Ok(());
            }

            let flow = match String::from_utf8_lossy(&buf).parse::<Command>() {
                Ok(command) => {
                    debug!(%command, "Dispatching menu command");
                    (Self::handler(command))(self)?
                }
                Err(reason) => {
                    debug!("{}", reason);
                    writeln!(self.writer, "Ogiltigt val, vänligen försök igen.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// 命令到处理函数的映射。
    pub fn handler(command: Command) -> Handler<R, W> {
        match command {
            Command::Input => Self::input,
            Command::Stats => Self::stats,
            Command::Rank => Self::rank,
            Command::BestWindow => Self::best_window,
            Command::Visualize => Self::visualize,
            Command::Exit => Self::exit,
        }
    }

    fn print_menu(&mut self) -> Result<(), MenuError> {
        writeln!(self.writer, "Elpriser")?;
        writeln!(self.writer, "========")?;
        for command in Command::ALL {
            writeln!(self.writer, "{}. {}", command, command.label())?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// # Summary
    /// 录入电价。
    ///
    /// # Logic
    /// - 输入提前结束：提示后返回菜单，已录入的小时保留。
    /// - 非法数字：提示后中止本次录入，不重新询问，已录入的小时保留。
    fn input(&mut self) -> Result<Flow, MenuError> {
        match collect_prices(&mut self.reader, &mut self.writer, &mut self.series) {
            Ok(InputOutcome::Complete) => {}
            Ok(InputOutcome::Exhausted { .. }) => {
                writeln!(self.writer, "Ingen ytterligare inmatning hittades.")?;
            }
            Err(PriceError::InvalidNumber { hour, input }) => {
                writeln!(
                    self.writer,
                    "Ogiltigt tal för timme {}: \"{}\". Inmatningen avbröts.",
                    HourSpan::wrapping(hour),
                    input
                )?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    fn stats(&mut self) -> Result<Flow, MenuError> {
        let stats = summarize(&self.series);
        self.writer
            .write_all(stats_report(&stats, &self.config.report).as_bytes())?;
        Ok(Flow::Continue)
    }

    fn rank(&mut self) -> Result<Flow, MenuError> {
        let ranked = rank_descending(&self.series);
        self.writer.write_all(ranking_report(&ranked).as_bytes())?;
        Ok(Flow::Continue)
    }

    fn best_window(&mut self) -> Result<Flow, MenuError> {
        let window = best_charging_window(&self.series);
        self.writer
            .write_all(window_report(&window, &self.config.report).as_bytes())?;
        Ok(Flow::Continue)
    }

    // 图表配置非法时提示后返回菜单
    fn visualize(&mut self) -> Result<Flow, MenuError> {
        match render(&self.series, &self.config.chart) {
            Ok(chart) => self.writer.write_all(chart.as_bytes())?,
            Err(err) => {
                warn!(%err, "Chart rendering rejected");
                writeln!(self.writer, "Diagrammet kan inte ritas: {err}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> Result<Flow, MenuError> {
        writeln!(self.writer, "Goodbye!")?;
        Ok(Flow::Exit)
    }
}
