use std::{fs, path::Path};

use serde::Deserialize;

use crate::CliError;

pub const CONFIG_VAR: &str = "CLA_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
  pub log_level: String,
  pub log_to_file: bool,
  pub carry_in: bool,
  /// Print the real carry out instead of the customary leading '0'.
  pub report_overflow: bool,
  /// Check every sum against the ripple-carry adder.
  pub verify: bool,
  pub dump_binary: bool,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      log_level: "warn".into(),
      log_to_file: false,
      carry_in: false,
      report_overflow: false,
      verify: false,
      dump_binary: false,
    }
  }
}

impl Settings {
  /// Defaults, then the file named by `CLA_CONFIG` if set, then `CLA_*`
  /// variables on top.
  pub fn load() -> Result<Settings, CliError> {
    let mut settings = match std::env::var(CONFIG_VAR) {
      Ok(path) => Self::from_file(path)?,
      Err(_) => Self::default(),
    };
    settings.apply_env(|key| std::env::var(key).ok());
    Ok(settings)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Settings, CliError> {
    let f = fs::File::open(path.as_ref())?;
    Ok(serde_yaml::from_reader(f)?)
  }

  pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(level) = lookup("CLA_LOG") {
      self.log_level = level;
    }
    flag(&lookup, "CLA_LOG_TO_FILE", &mut self.log_to_file);
    flag(&lookup, "CLA_CARRY_IN", &mut self.carry_in);
    flag(&lookup, "CLA_REPORT_OVERFLOW", &mut self.report_overflow);
    flag(&lookup, "CLA_VERIFY", &mut self.verify);
    flag(&lookup, "CLA_DUMP_BINARY", &mut self.dump_binary);
  }
}

// Garbage leaves the current value alone.
fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, current: &mut bool) {
  if let Some(v) = lookup(key) {
    match v.trim() {
      "1" | "true" | "yes" | "on" => *current = true,
      "0" | "false" | "no" | "off" => *current = false,
      _ => {}
    }
  }
}
