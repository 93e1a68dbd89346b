//! aegle-cli: training orchestration and the interactive prediction prompt.
pub mod config;
pub mod interactive;
pub mod train;
