use mfl::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Warnings only unless overridden through the environment.
pub fn init_logging() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
