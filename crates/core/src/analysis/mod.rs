pub mod rank;
pub mod stats;
pub mod window;
