use std::error::Error;

use flexi_logger::{
  style, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Record, WriteMode, TS_DASHES_BLANK_COLONS_DOT_BLANK,
};

use crate::settings::Settings;

fn log_format(
  w: &mut dyn std::io::Write,
  now: &mut DeferredNow,
  record: &Record,
) -> Result<(), std::io::Error> {
  let level = record.level();
  write!(
      w,
      "[{}] {} [{}:{}] {}",
      style(level).paint(now.format(TS_DASHES_BLANK_COLONS_DOT_BLANK).to_string()),
      style(level).paint(level.to_string()),
      record.file().unwrap_or("<unnamed>"),
      record.line().unwrap_or(0),
      style(level).paint(&record.args().to_string())
  )
}

// stdout carries the result line, so everything goes to stderr or a file.
pub fn init(settings: &Settings) -> Result<LoggerHandle, Box<dyn Error>> {
  let logger = Logger::try_with_str(&settings.log_level)?
    .format(log_format);

  let handle = if settings.log_to_file {
    logger.log_to_file(FileSpec::default())
      .append()
      .write_mode(WriteMode::BufferAndFlush)
      .duplicate_to_stderr(Duplicate::Warn)
      .start()?
  } else {
    logger.start()?
  };

  Ok(handle)
}
