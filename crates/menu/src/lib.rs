pub mod command;
pub mod error;
pub mod menu;
pub mod report;
