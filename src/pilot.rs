// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use getset::Getters;
use std::{fmt,
          hash::{Hash, Hasher}};


/// The code a timing device assigns to a pilot, e.g. "038".
///
/// This is an identity token, not a number: leading zeros are significant and
/// codes compare as strings.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PilotCode(String);

impl PilotCode {
  pub fn new(code: &str) -> Self {
    Self(code.to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for PilotCode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}


/// A race participant.
///
/// Two pilots are the same pilot iff their codes are equal. The name is for
/// display only, the device may well spell it differently from lap to lap.
#[derive(Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct Pilot {
  code: PilotCode,
  name: String,
}

impl Pilot {
  pub fn new(code: &str, name: &str) -> Self {
    Self { code: PilotCode::new(code),
           name: name.to_string(), }
  }
}

impl PartialEq for Pilot {
  fn eq(&self, other: &Self) -> bool {
    self.code == other.code
  }
}

impl Eq for Pilot {}

// must agree with `PartialEq`, so only the code goes into the hash
impl Hash for Pilot {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.code.hash(state);
  }
}
