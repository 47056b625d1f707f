#![cfg(feature = "std")]

//! Stderr logger for the terminal binaries. Stdout carries the board.

use log::{LevelFilter, Log, Metadata, Record};

pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Writes `LEVEL [module] message` lines for records from this crate.
/// Records from other crates are dropped below `warn`.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > log::max_level() {
            return false;
        }
        metadata.target().starts_with("broadside") || metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record
            .target()
            .rsplit("::")
            .next()
            .unwrap_or_else(|| record.target());
        eprintln!("{:<5} [{}] {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`, falling back to `info` when missing or invalid.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger at the level named by `BROADSIDE_LOG`. Calling it again
/// only adjusts the level.
pub fn init_logging() {
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level);
}
