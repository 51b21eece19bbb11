//! Terminal logging using simplelog

use anyhow::{Context, Result};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Initialize stderr logging
///
/// `RUST_LOG` accepts a single level name (`off`, `error` .. `trace`, any
/// case). Unset or unrecognised values log at info.
pub fn init() -> Result<()> {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logger")
}
