use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Cli, LogLevel};

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// report output on stdout.
pub fn init_logging(cli: &Cli) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let registry = tracing_subscriber::registry().with(build_filter(cli.log_level, &env));
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    if cli.log_json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }
}

/// `--log-level` is the default; directives from `RUST_LOG` refine it.
fn build_filter(level: LogLevel, env_directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .parse_lossy(env_directives)
}
