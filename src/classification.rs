// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::PilotLaps;
use chrono::Duration;
use log::debug;
use std::fmt;


const HEADER: [&str; 5] = ["Posição Chegada",
                           "Código Piloto",
                           "Nome Piloto",
                           "Qtde Voltas Completadas",
                           "Tempo Total de Prova"];


/// Final ranking of a race: most laps first, on equal laps the lowest total
/// race time first.
///
/// Pilots with equal laps and equal total time keep the order they were
/// handed in, so feeding this the output of `group_laps_by_pilot` ranks them
/// by pilot code.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
  ranking: Vec<PilotLaps>,
}

impl Classification {
  pub fn rank(mut pilot_laps: Vec<PilotLaps>) -> Self {
    // `sort_by` is stable, which is what makes exact ties deterministic
    pilot_laps.sort_by(|a, b| {
                b.qty_laps()
                 .cmp(&a.qty_laps())
                 .then(a.total_time().cmp(&b.total_time()))
              });
    debug!("ranked {} pilot(s)", pilot_laps.len());

    Self { ranking: pilot_laps }
  }

  /// Finishing positions, starting at 1, with the pilot's laps.
  pub fn positions(&self) -> impl Iterator<Item = (usize, &PilotLaps)> {
    self.ranking
        .iter()
        .enumerate()
        .map(|(idx, pilot_laps)| (idx + 1, pilot_laps))
  }

  pub fn ranking(&self) -> &[PilotLaps] {
    &self.ranking
  }

  pub fn len(&self) -> usize {
    self.ranking.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ranking.is_empty()
  }
}

/// Renders the classification as a table, a header row and one row per
/// pilot, each terminated by a newline.
impl fmt::Display for Classification {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "{}", row(&HEADER))?;
    for (position, pilot_laps) in self.positions() {
      let pilot = pilot_laps.pilot();
      writeln!(f,
               "{}",
               row(&[&position.to_string(),
                     pilot.code().as_str(),
                     pilot.name(),
                     &pilot_laps.qty_laps().to_string(),
                     &format_duration(pilot_laps.total_time())]))?;
    }
    Ok(())
  }
}

fn row(columns: &[&str; 5]) -> String {
  format!("{:<15} {:<13} {:<20} {:<23} {:<20}",
          columns[0], columns[1], columns[2], columns[3], columns[4]).trim_end()
                                                                      .to_string()
}

/// Format a duration as `M:SS.mmm`; minutes are right aligned in a field of
/// two and not limited to 59.
pub fn format_duration(duration: Duration) -> String {
  let millis = duration.num_milliseconds();
  format!("{:2}:{:02}.{:03}",
          millis / 60_000,
          millis / 1_000 % 60,
          millis % 1_000)
}
