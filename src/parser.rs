// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

//! Turns the lines of a timing log into `Lap`s. A line looks like this:
//!
//! ```text
//! 23:49:08.277 038 – F.MASSA 1 1:02.852 44,275
//! ```
//!
//! i.e. time of day, pilot code, an en dash, pilot name, lap number, lap time
//! and average speed (with a decimal comma), separated by whitespace. The
//! parser is strict: the first line not matching this grammar fails the whole
//! parse.

use super::{fubar::{Fubar, Result},
            Lap,
            Pilot};
use chrono::{Duration, NaiveTime};
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;


const TIME_PATTERN: &str = "HH:MM:SS.fff";


lazy_static! {
  static ref LAP_LINE: Regex = Regex::new(
    r"^(?P<time>[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{1,3})\s+(?P<code>[0-9]+)\s+–\s+(?P<name>[^\p{Cc}]+?)\s+(?P<number>[0-9]+)\s+(?P<duration>[0-9]+:[0-9]{2}\.[0-9]{0,3})\s+(?P<speed>[0-9]+,[0-9]+)$"
  ).expect("lap line pattern does not compile");

  // the duration capture of `LAP_LINE` lets an empty fraction through, this
  // one doesn't
  static ref LAP_DURATION: Regex = Regex::new(
    r"^(?P<minutes>[0-9]+):(?P<seconds>[0-9]{2})\.(?P<millis>[0-9]{1,3})$"
  ).expect("lap duration pattern does not compile");
}


/// Parse all lines of a timing log after discarding the first `skip` lines,
/// which are not looked at at all.
///
/// Fails on the first line that isn't a valid lap line; there is no partial
/// result.
pub fn parse_laps<S: AsRef<str>>(lines: &[S], skip: usize) -> Result<Vec<Lap>> {
  debug!("skipping {} leading line(s) of {}", skip, lines.len());

  let laps = lines.iter()
                  .skip(skip)
                  .map(|line| parse_lap(line.as_ref()))
                  .collect::<Result<Vec<Lap>>>()?;

  debug!("parsed {} lap(s)", laps.len());
  Ok(laps)
}

/// Parse a single, trimmed line of a timing log.
pub fn parse_lap(line: &str) -> Result<Lap> {
  let caps = LAP_LINE.captures(line)
                     .ok_or_else(|| Fubar::format(line, LAP_LINE.as_str()))?;

  let pilot = Pilot::new(&caps["code"], &caps["name"]);
  let number = caps["number"].parse::<usize>()
                             .map_err(|_| Fubar::format(line, LAP_LINE.as_str()))?;
  let lap = Lap::new(pilot,
                     number,
                     parse_time(&caps["time"])?,
                     parse_duration(&caps["duration"])?,
                     parse_speed(&caps["speed"])?);

  trace!("parsed lap {} of pilot {}", lap.number(), lap.pilot().code());
  Ok(lap)
}

/// Parse a time of day like `23:49:08.277`. Fractions shorter than three
/// digits are milliseconds padded with zeros on the right, i.e. `08.2` is
/// 8 seconds and 200 milliseconds.
pub fn parse_time(raw: &str) -> Result<NaiveTime> {
  let padded = format!("{:0<12}", raw);
  NaiveTime::parse_from_str(&padded, "%H:%M:%S%.f")
    .map_err(|_| Fubar::format(raw, TIME_PATTERN))
}

/// Parse a lap time like `1:02.852` (minutes, two digit seconds, one to three
/// digits of milliseconds). Unlike the time of day the milliseconds are not
/// padded: `1:02.8` is 62 seconds and 8 milliseconds.
pub fn parse_duration(raw: &str) -> Result<Duration> {
  let invalid = || Fubar::format(raw, LAP_DURATION.as_str());
  let caps = LAP_DURATION.captures(raw).ok_or_else(invalid)?;

  let minutes = caps["minutes"].parse::<i64>().map_err(|_| invalid())?;
  let seconds = caps["seconds"].parse::<i64>().map_err(|_| invalid())?;
  let millis = caps["millis"].parse::<i64>().map_err(|_| invalid())?;

  let total = minutes.checked_mul(60_000)
                     .and_then(|ms| ms.checked_add(seconds * 1_000 + millis))
                     .ok_or_else(invalid)?;
  Ok(Duration::milliseconds(total))
}

/// Parse a speed written with a decimal comma, like `44,275`.
pub fn parse_speed(raw: &str) -> Result<f64> {
  raw.replace(',', ".")
     .parse::<f64>()
     .map_err(|_| Fubar::format(raw, "digits,digits"))
}
