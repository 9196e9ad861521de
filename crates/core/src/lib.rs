pub mod analysis;
pub mod chart;
pub mod common;
pub mod config;
pub mod price;
