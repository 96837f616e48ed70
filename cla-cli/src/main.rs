use std::{error::Error, fmt::Display, io::{self, Write}};

use cla::{
  codec::{binary_string, Endian},
  error::AdderError,
  ripple, LookaheadAdder,
};
use common::widths::HEX_DIGITS;
use log::{debug, error, info};
use settings::Settings;
use structopt::{clap::AppSettings, StructOpt};

mod input;
mod logging;
mod output;
mod settings;

/// Adds two 4096-bit hex numbers read from stdin, one per line.
///
/// Takes no arguments. Configure with CLA_CONFIG and CLA_* environment variables.
#[derive(StructOpt, Debug)]
#[structopt(
  name = "cla",
  global_settings = &[AppSettings::DisableHelpFlags, AppSettings::DisableVersion]
)]
struct Cli {}

#[derive(Debug)]
pub enum CliError {
  Io(io::Error),
  Config(serde_yaml::Error),
  Adder(AdderError),
  Mismatch { lookahead: String, ripple: String },
}

impl Error for CliError {}

impl Display for CliError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      CliError::Io(e) => write!(f, "io: {}", e),
      CliError::Config(e) => write!(f, "config: {}", e),
      CliError::Adder(e) => write!(f, "{}", e),
      CliError::Mismatch { lookahead, ripple } => 
        write!(f, "lookahead and ripple-carry disagree:\n{}\n{}", lookahead, ripple),
    }
  }
}

impl From<io::Error> for CliError {
  fn from(e: io::Error) -> Self {
    CliError::Io(e)
  }
}

impl From<serde_yaml::Error> for CliError {
  fn from(e: serde_yaml::Error) -> Self {
    CliError::Config(e)
  }
}

impl From<AdderError> for CliError {
  fn from(e: AdderError) -> Self {
    CliError::Adder(e)
  }
}

fn run(settings: &Settings) -> Result<String, CliError> {
  let (hex1, hex2) = input::read_operands(&mut io::stdin().lock(), HEX_DIGITS)?;

  let adder = LookaheadAdder::new().carry_in(settings.carry_in);
  let a = adder.parse(&hex1)?;
  let b = adder.parse(&hex2)?;
  let sum = adder.add(&a, &b)?;

  if settings.dump_binary {
    debug!("a (big endian):   {}", binary_string(a.bits(), Endian::Big));
    debug!("b (big endian):   {}", binary_string(b.bits(), Endian::Big));
    debug!("sum (big endian): {}", binary_string(sum.bits(), Endian::Big));
  }

  if settings.verify {
    let reference = ripple::add(a.bits(), b.bits(), settings.carry_in as u8);
    if reference != sum {
      return Err(CliError::Mismatch { lookahead: sum.to_hex()?, ripple: reference.to_hex()? });
    }
    info!("ripple-carry check passed");
  }

  Ok(output::render(&sum, settings.report_overflow)?)
}

fn main() -> Result<(), Box<dyn Error>> {
  let _cli = Cli::from_args();
  let settings = Settings::load()?;
  let _logger = logging::init(&settings)?;
  debug!("settings: {:?}", settings);

  let line = run(&settings).map_err(|e| {
    error!("{}", e);
    e
  })?;

  let stdout = io::stdout();
  let mut out = stdout.lock();
  writeln!(out, "{}", line)?;
  out.flush()?;

  Ok(())
}
