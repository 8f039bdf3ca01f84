//! CLI layer - Command-line interface

pub mod commands;
pub mod logging;
pub mod output;

pub use commands::Cli;
pub use logging::init_tracing;
pub use output::format_report;
