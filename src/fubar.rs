// Copyright 2020 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <jonas@bmc-labs.com>
//   Jannik Schütz <jannik@bmc-labs.com>

use std::{error, fmt, io, result};


/// racelog's result type `Result` will work with any error type
/// implementing the `std::error::Error` trait.
pub type Result<T> = result::Result<T, Fubar>;


#[derive(Clone, Debug, PartialEq)]
/// Error to be used throughout racelog to bubble errors back to `main`.
///
/// - `Usage` means no usable input source was found; the user has to invoke
///   the program again, differently.
/// - `Format` means a line of the timing log (or its lap time field) does not
///   match the grammar of the log. It carries the offending text and the
///   pattern that text was expected to match.
/// - `Io` wraps whatever went wrong while reading the log.
///
/// Usage and I/O errors are most easily returned through the `fubar!` macro,
/// which accepts the variant followed by the same parameters as the
/// `format!` macro and returns an `Err(Fubar)`. See the macro documentation
/// for a code example.
///
/// FUBAR: Fucked Up Beyond All {Recognition, Repair, Reason}
pub enum Fubar {
  Usage(String),
  Format { text: String, pattern: String },
  Io(String),
}

impl Fubar {
  pub fn format(text: &str, pattern: &str) -> Self {
    Self::Format { text:    text.to_string(),
                   pattern: pattern.to_string(), }
  }

  pub fn is_usage(&self) -> bool {
    matches!(self, Self::Usage(_))
  }
}

/// The following traits - `fmt::Display` and `error::Error` - are required in
/// addition to deriving the `Debug` trait for `Fubar` to implement the
/// `error::Error` trait fully.
impl fmt::Display for Fubar {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Usage(msg) => write!(f, "{}", msg),
      Self::Format { text, pattern } => {
        write!(f, "\"{}\" does not match {}", text, pattern)
      }
      Self::Io(msg) => write!(f, "could not read timing log: {}", msg),
    }
  }
}

impl error::Error for Fubar {}


/// This macro - internal use only - generates the implementation of the
/// `From` trait for `Fubar` for a given list of types, all of which end up as
/// `Fubar::Io`.
macro_rules! implement_from {
  ($($ErrType:ty),*) => {$(
    impl From<$ErrType> for Fubar {
      fn from(error: $ErrType) -> Self {
        Self::Io(error.to_string())
      }
    }
  )*}
}

// here the macro is called with a list of types used in our codebase
implement_from!(io::Error);


/// The `fubar!` macro provides an easy way to return formatted errors
/// from functions returning a `Result`. It takes the `Fubar` variant and
/// something which can be formatted using the `format!` macro and returns an
/// `Err(Fubar)`. You can use it in your code as follows:
///
/// ```ignore
/// match something {
///   Some(path) => Ok(path),  // the world is a happy place
///   None => fubar!(Usage, "usage: {} <log_path>", bin),
/// }
/// ```
#[macro_export]
macro_rules! fubar {
  ($kind:ident, $($arg:tt)*) => {
      Err($crate::fubar::Fubar::$kind(format!($($arg)*)))
  }
}
