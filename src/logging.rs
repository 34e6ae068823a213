#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "TANK_DUEL_LOG";

/// Writes `LEVEL [module] message` lines to stderr, keeping stdout free for
/// the board and for machine-readable output.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = record.target().trim_start_matches("tank_duel::");
            eprintln!("{:<5} [{}] {}", record.level(), target, record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name such as `debug`; `None` for anything unrecognised.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Initialize logging with a level taken from `TANK_DUEL_LOG`, defaulting to
/// `info`. Returns the level in effect. Calling it again keeps the first
/// logger but still updates the level.
pub fn init_logging() -> LevelFilter {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| parse_level(&lvl))
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
    level
}
