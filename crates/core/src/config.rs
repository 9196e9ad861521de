use crate::chart::entity::ChartConfig;
use crate::chart::error::ChartError;
use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub chart: ChartConfig,
    pub report: ReportConfig,
}

/// 报表输出格式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    // 日均价保留的小数位
    pub average_decimals: u8,
    // 充电窗口均价保留的小数位
    pub window_decimals: u8,
    // 电价单位
    pub unit: String,
}

impl AppConfig {
    /// 启动时校验配置，目前只有图表部分存在非法取值。
    pub fn validate(&self) -> Result<(), ChartError> {
        self.chart.validate()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chart: ChartConfig::default(),
            report: ReportConfig {
                average_decimals: 2,
                window_decimals: 1,
                unit: "öre/kWh".to_string(),
            },
        }
    }
}
