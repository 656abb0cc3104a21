// Copyright 2020 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Jonas Reitemeyer <jonas@bmc-labs.com>
//   Florian Eich <florian@bmc-labs.com>

use super::Pilot;
use chrono::{Duration, NaiveTime};
use getset::{CopyGetters, Getters};


/// One completed lap of one pilot, as reported by the timing device.
#[derive(Clone, Debug, PartialEq, CopyGetters, Getters)]
pub struct Lap {
  #[getset(get = "pub")]
  pilot:     Pilot,
  /// lap number as counted by the device; neither unique nor contiguous
  #[getset(get_copy = "pub")]
  number:    usize,
  /// time of day the lap was recorded at
  #[getset(get_copy = "pub")]
  time:      NaiveTime,
  #[getset(get_copy = "pub")]
  duration:  Duration,
  /// in km/h; informational only
  #[getset(get_copy = "pub")]
  avg_speed: f64,
}

impl Lap {
  pub fn new(pilot: Pilot,
             number: usize,
             time: NaiveTime,
             duration: Duration,
             avg_speed: f64)
             -> Self {
    Self { pilot,
           number,
           time,
           duration,
           avg_speed }
  }
}
