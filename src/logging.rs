// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use log::LevelFilter;
use std::{env, io};


/// Environment variable overriding the log level given on the command line.
pub const LOG_LEVEL_VAR: &str = "RACELOG_LOG";


/// Sets up logging to stderr, stdout belongs to the classification.
///
/// The level is taken from `RACELOG_LOG` if set, otherwise from the number of
/// `-v` flags, see `level_from_verbosity`.
pub fn setup_logging(verbosity: u8) -> Result<(), fern::InitError> {
  let level = env::var(LOG_LEVEL_VAR).ok()
                                     .and_then(|var| level_from_str(&var))
                                     .unwrap_or_else(|| {
                                       level_from_verbosity(verbosity)
                                     });

  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!("{} [{}][{}] {}",
                              chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                              record.target(),
                              record.level(),
                              message))
    })
    .level(level)
    .chain(io::stderr())
    .apply()?;

  Ok(())
}

pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
  match verbosity {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

/// `None` for anything that isn't a level name.
pub fn level_from_str(level: &str) -> Option<LevelFilter> {
  match level.trim().to_uppercase().as_str() {
    "OFF" => Some(LevelFilter::Off),
    "ERROR" => Some(LevelFilter::Error),
    "WARN" => Some(LevelFilter::Warn),
    "INFO" => Some(LevelFilter::Info),
    "DEBUG" => Some(LevelFilter::Debug),
    "TRACE" => Some(LevelFilter::Trace),
    _ => None,
  }
}
