use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;

use crate::commands::Commands;

/// Verbosity of the diagnostic log on stderr. `RUST_LOG` directives win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "namelint",
    author,
    version,
    about = "Naming-convention checks for JavaScript/TypeScript",
    long_about = "namelint checks JavaScript and TypeScript sources for naming conventions.\n\n\
                  It reports anonymous hook callbacks, async functions without an 'Async'\n\
                  suffix, lower-case module constants and SVG imports not named as icons."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}
