// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{fubar::Result, Lap, PilotLaps};
use log::debug;


/// Group laps by pilot, yielding exactly one `PilotLaps` per distinct pilot.
///
/// The laps are sorted by pilot code and lap number first and then cut into
/// runs of the same pilot, so the result is ordered by pilot code and the laps
/// of each pilot by lap number. A sort rather than a hash map makes the
/// outcome independent of the order the laps come in.
///
/// Fails only if the total race time of a pilot overflows, see
/// `PilotLaps::new`.
pub fn group_laps_by_pilot(laps: Vec<Lap>) -> Result<Vec<PilotLaps>> {
  let laps = sort_laps(laps);

  let mut groups: Vec<Vec<Lap>> = Vec::new();
  for lap in laps {
    match groups.last_mut() {
      Some(group) if group[0].pilot() == lap.pilot() => group.push(lap),
      _ => groups.push(vec![lap]),
    }
  }

  let pilot_laps =
    groups.into_iter()
          .map(|group| PilotLaps::new(group[0].pilot().clone(), group))
          .collect::<Result<Vec<PilotLaps>>>()?;

  debug!("grouped laps of {} pilot(s)", pilot_laps.len());
  Ok(pilot_laps)
}

/// Sort laps by pilot code, then lap number. The sort is stable.
pub fn sort_laps(mut laps: Vec<Lap>) -> Vec<Lap> {
  laps.sort_by(|a, b| {
        a.pilot()
         .code()
         .cmp(b.pilot().code())
         .then(a.number().cmp(&b.number()))
      });
  laps
}


#[cfg(test)]
mod tests {
  use super::{super::{parser::parse_laps, Fubar, Pilot},
              *};
  use chrono::{Duration, NaiveTime};
  use pretty_assertions::assert_eq;


  fn lap(code: &str, name: &str, number: usize, millis: i64) -> Lap {
    Lap::new(Pilot::new(code, name),
             number,
             NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
             Duration::milliseconds(millis),
             0.0)
  }

  fn codes(pilot_laps: &[PilotLaps]) -> Vec<&str> {
    pilot_laps.iter()
              .map(|p| p.pilot().code().as_str())
              .collect()
  }

  #[test]
  fn group_laps_by_pilot_test() {
    let laps = vec![lap("038", "F.MASSA", 1, 62_852),
                    lap("033", "R.BARRICHELLO", 1, 64_352),
                    lap("038", "F.MASSA", 2, 63_170),
                    lap("002", "K.RAIKKONEN", 1, 64_108)];
    let grouped = group_laps_by_pilot(laps).unwrap();

    assert_eq!(vec!["002", "033", "038"], codes(&grouped));
    assert_eq!(&Pilot::new("002", "K.RAIKKONEN"), grouped[0].pilot());
    assert_eq!(&Pilot::new("033", "R.BARRICHELLO"), grouped[1].pilot());
    assert_eq!(&Pilot::new("038", "F.MASSA"), grouped[2].pilot());

    assert_eq!(vec![1, 1, 2],
               grouped.iter().map(|p| p.qty_laps()).collect::<Vec<_>>());
    assert_eq!(Duration::milliseconds(62_852 + 63_170),
               grouped[2].total_time());
  }

  #[test]
  fn group_laps_orders_laps_by_number_test() {
    let laps = vec![lap("038", "F.MASSA", 3, 3),
                    lap("038", "F.MASSA", 1, 1),
                    lap("038", "F.MASSA", 2, 2)];
    let grouped = group_laps_by_pilot(laps).unwrap();

    assert_eq!(1, grouped.len());
    assert_eq!(vec![1, 2, 3],
               grouped[0].laps()
                         .iter()
                         .map(|l| l.number())
                         .collect::<Vec<_>>());
  }

  #[test]
  fn group_laps_by_code_only_test() {
    // the device misspelled the name on the last lap; still the same pilot
    let laps = vec![lap("038", "F.MASSA", 1, 62_852),
                    lap("038", "F.MASSA", 2, 63_170),
                    lap("038", "F.MASS", 3, 62_787)];
    let grouped = group_laps_by_pilot(laps).unwrap();

    assert_eq!(1, grouped.len());
    assert_eq!("F.MASSA", grouped[0].pilot().name());
    assert_eq!(3, grouped[0].qty_laps());
    assert_eq!(Duration::milliseconds(188_809), grouped[0].total_time());
  }

  #[test]
  fn group_laps_is_order_independent_test() {
    let laps = vec![lap("023", "M.WEBBER", 2, 64_805),
                    lap("015", "F.ALONSO", 1, 78_456),
                    lap("023", "M.WEBBER", 1, 64_414),
                    lap("015", "F.ALONSO", 2, 109_775),
                    lap("011", "S.VETTEL", 1, 211_315)];
    let mut reversed = laps.clone();
    reversed.reverse();

    assert_eq!(group_laps_by_pilot(laps).unwrap(),
               group_laps_by_pilot(reversed).unwrap());
  }

  #[test]
  fn group_laps_empty_test() {
    assert_eq!(Vec::<PilotLaps>::new(), group_laps_by_pilot(vec![]).unwrap());
  }

  #[test]
  fn group_laps_total_time_overflow_test() {
    // every lap parses on its own, only the sum overflows
    let lines = ["00:00:00.000 038 – F.MASSA 1 153722867280912:00.000 1,0",
                 "00:00:01.000 038 – F.MASSA 2 153722867280912:00.000 1,0"];
    let laps = parse_laps(&lines, 0).unwrap();

    match group_laps_by_pilot(laps) {
      Err(Fubar::Format { text, .. }) => assert_eq!("lap 2 of pilot 038", &text),
      other => panic!("expected format error, got {:?}", other),
    }
  }

  #[test]
  fn sort_laps_test() {
    let laps = vec![lap("038", "F.MASSA", 2, 0),
                    lap("002", "K.RAIKKONEN", 2, 0),
                    lap("038", "F.MASSA", 1, 0),
                    lap("002", "K.RAIKKONEN", 1, 0)];
    let sorted = sort_laps(laps);

    assert_eq!(vec![("002", 1), ("002", 2), ("038", 1), ("038", 2)],
               sorted.iter()
                     .map(|l| (l.pilot().code().as_str(), l.number()))
                     .collect::<Vec<_>>());
  }
}
