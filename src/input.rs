// Copyright 2020 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <jonas@bmc-labs.com>

use super::{fubar, fubar::Result};
use log::{debug, warn};
use std::{fs::File,
          io::{self, BufRead, BufReader, IsTerminal},
          path::Path};


/// Reads the timing log, either from the file at `path` or - if there is no
/// such file - from stdin, as long as stdin isn't a terminal. With neither
/// available this fails with a `Fubar::Usage` explaining how to invoke the
/// program.
///
/// # Returns
/// all lines of the log, trimmed on both ends.
pub fn log_content(path: Option<&Path>) -> Result<Vec<String>> {
  if let Some(path) = path {
    if path.is_file() {
      debug!("reading timing log from '{}'", path.display());
      return read_lines(BufReader::new(File::open(path)?));
    }
    warn!("'{}' is not a file, trying stdin", path.display());
  }

  let stdin = io::stdin();
  if !stdin.is_terminal() {
    debug!("reading timing log from stdin");
    return read_lines(stdin.lock());
  }

  fubar!(Usage, "{}", usage())
}

/// Collects all lines from `reader`, trimming whitespace on both ends. Lines
/// are kept even if empty, it's up to the parser to reject them.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
  let mut lines = Vec::new();
  for line in reader.lines() {
    lines.push(line?.trim().to_string());
  }
  Ok(lines)
}

/// The two ways of calling the program.
pub fn usage() -> String {
  let bin = env!("CARGO_PKG_NAME");
  format!("Usage:\n\n  Using arguments:\n    {bin} [log_path]\n\n  Using \
           STDIN:\n    cat [log_path] | {bin}",
          bin = bin)
}


#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::io::{Cursor, Write};
  use tempfile::NamedTempFile;


  #[test]
  fn read_lines_test() {
    let reader = Cursor::new("line 0\nline 1\t\n\tline 2\nline 3");
    assert_eq!(vec!["line 0", "line 1", "line 2", "line 3"],
               read_lines(reader).unwrap());

    let reader = Cursor::new("  padded  \r\n\n");
    assert_eq!(vec!["padded", ""], read_lines(reader).unwrap());

    assert_eq!(Vec::<String>::new(), read_lines(Cursor::new("")).unwrap());
  }

  #[test]
  fn read_lines_invalid_utf8_test() {
    let reader = Cursor::new(vec![0xffu8, 0xfe, b'\n']);
    assert!(matches!(read_lines(reader), Err(fubar::Fubar::Io(_))));
  }

  #[test]
  fn log_content_from_file_test() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "line 0\nline 1\t\n\tline 2\nline 3").unwrap();
    file.flush().unwrap();

    assert_eq!(vec!["line 0", "line 1", "line 2", "line 3"],
               log_content(Some(file.path())).unwrap());
  }

  #[test]
  fn usage_test() {
    let usage = usage();
    assert!(usage.contains("racelog [log_path]"));
    assert!(usage.contains("cat [log_path] | racelog"));
  }
}
