// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use clap::Parser;
use eyre::{Result, WrapErr};
use log::info;
use racelog::{group_laps_by_pilot, input, logging, parse_laps, Classification};
use std::{path::PathBuf, process};


/// Ranks the pilots of a race from the lap timing log of the race.
#[derive(Parser, Debug)]
#[command(name = "racelog", version, about, long_about = None)]
struct Cli {
  /// Path to the timing log; read from stdin if omitted
  #[arg(value_name = "LOG_PATH")]
  path: Option<PathBuf>,

  /// Number of leading lines to skip, e.g. the header of the log
  #[arg(long, value_name = "N", default_value_t = 1)]
  skip: usize,

  /// More output on stderr (-v, -vv, -vvv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}


fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse();
  logging::setup_logging(cli.verbose)?;

  let lines = match input::log_content(cli.path.as_deref()) {
    Ok(lines) => lines,
    Err(err) if err.is_usage() => {
      eprintln!("{}", err);
      process::exit(2);
    }
    Err(err) => return Err(err.into()),
  };

  let laps = parse_laps(&lines, cli.skip).wrap_err("invalid timing log")?;
  let pilot_laps = group_laps_by_pilot(laps).wrap_err("invalid timing log")?;
  let classification = Classification::rank(pilot_laps);
  info!("classified {} pilot(s)", classification.len());

  print!("{}", classification);
  Ok(())
}
