use thiserror::Error;

/// # Summary
/// 电价序列域错误枚举，覆盖输入解析、长度校验及底层流错误。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
/// - `InvalidNumber` 只中止当前录入命令，已写入的小时保持不变。
#[derive(Error, Debug)]
pub enum PriceError {
    // 某一小时的输入无法解析为整数
    #[error("Invalid price for hour {hour:02}: {input:?}")]
    InvalidNumber { hour: usize, input: String },
    // 构造序列时给出的价格数量不是 24
    #[error("Expected 24 hourly prices, got {0}")]
    Length(usize),
    // 读取输入或写出提示时的流错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
