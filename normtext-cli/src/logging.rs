//! Log output: `<timestamp> <LEVEL> <message>` lines on stderr.

use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use tracing::warn;

pub fn init(level: &str) {
    let parsed = level.parse::<LevelFilter>().ok();

    tracing_subscriber::fmt()
        .with_max_level(parsed.unwrap_or(LevelFilter::INFO))
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();

    if parsed.is_none() {
        warn!("Unknown log level '{}', using info", level);
    }
}
