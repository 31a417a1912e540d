//! Logger setup.
//!
//! The terminal UI owns stdout, so UI sessions log to a file through log4rs.
//! One-shot commands log to stderr through env_logger.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::LoggingSettings;

const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

/// Initializes file logging for the terminal UI.
///
/// A log4rs YAML file at `override_file` takes precedence; otherwise a single
/// file appender is built from `settings`.
pub fn init_file_logging(settings: &LoggingSettings, override_file: &Path) -> Result<()> {
    if override_file.is_file() {
        log4rs::init_file(override_file, Default::default())
            .with_context(|| format!("failed to load {}", override_file.display()))?;
        return Ok(());
    }

    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(&settings.file)
        .with_context(|| format!("failed to open log file {}", settings.file.display()))?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(parse_level(&settings.level)))
        .context("invalid logging configuration")?;
    log4rs::init_config(config).context("logger already initialized")?;
    Ok(())
}

/// Initializes stderr logging for one-shot commands (`RUST_LOG`, default `warn`).
pub fn init_stderr_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}
