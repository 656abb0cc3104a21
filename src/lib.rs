// Copyright 2020 bmc::labs Gmbh. All rights reserved.
//
// Author: Florian Eich <florian@bmc-labs.com>

pub mod fubar;
pub mod classification;
pub mod grouping;
pub mod input;
mod lap;
pub mod logging;
pub mod parser;
mod pilot;
mod pilot_laps;

pub use classification::Classification;
pub use fubar::{Fubar, Result};
pub use grouping::group_laps_by_pilot;
pub use lap::Lap;
pub use parser::parse_laps;
pub use pilot::{Pilot, PilotCode};
pub use pilot_laps::PilotLaps;
