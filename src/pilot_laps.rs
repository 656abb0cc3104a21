// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{fubar::{Fubar, Result},
            Lap,
            Pilot};
use chrono::Duration;
use getset::{CopyGetters, Getters};


const TOTAL_TIME_PATTERN: &str = "a total race time of at most i64::MAX ms";


/// All laps of one pilot, rolled up into lap count and total race time.
#[derive(Clone, Debug, PartialEq, CopyGetters, Getters)]
pub struct PilotLaps {
  #[getset(get = "pub")]
  pilot:      Pilot,
  #[getset(get = "pub")]
  laps:       Vec<Lap>,
  #[getset(get_copy = "pub")]
  qty_laps:   usize,
  #[getset(get_copy = "pub")]
  total_time: Duration,
}

impl PilotLaps {
  /// The laps are kept in the order they are passed in. Fails with a
  /// `Fubar::Format` naming the lap at which the total race time no longer
  /// fits a `Duration`.
  pub fn new(pilot: Pilot, laps: Vec<Lap>) -> Result<Self> {
    let qty_laps = laps.len();

    let mut total_time = Duration::zero();
    for lap in &laps {
      total_time = total_time.checked_add(&lap.duration()).ok_or_else(|| {
                               Fubar::format(&format!("lap {} of pilot {}",
                                                      lap.number(),
                                                      lap.pilot().code()),
                                             TOTAL_TIME_PATTERN)
                             })?;
    }

    Ok(Self { pilot,
              laps,
              qty_laps,
              total_time })
  }
}
