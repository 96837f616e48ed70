use std::io::BufRead;

use cla::error::AdderError;
use log::debug;

use crate::CliError;

/// Reads the two operand lines. Line terminators (`\n` or `\r\n`) are
/// stripped; anything else stays and is judged by the expander.
pub fn read_operands(r: &mut impl BufRead, digits: usize) -> Result<(String, String), CliError> {
  let mut lines = r.lines();
  let mut next = |which: &str| -> Result<String, CliError> {
    match lines.next() {
      Some(line) => {
        let mut line = line?;
        if line.ends_with('\r') {
          line.pop();
        }
        debug!("read {} operand: {} chars", which, line.chars().count());
        Ok(line)
      }
      None => Err(CliError::Adder(AdderError::InvalidLength { expected: digits, found: 0 })),
    }
  };

  let first = next("first")?;
  let second = next("second")?;
  Ok((first, second))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  #[test]
  fn two_lines() {
    let mut r = Cursor::new("ABC\n123\n");
    assert_eq!(read_operands(&mut r, 3).unwrap(), ("ABC".to_string(), "123".to_string()));
  }

  #[test]
  fn crlf_and_missing_final_newline() {
    let mut r = Cursor::new("ABC\r\n123");
    assert_eq!(read_operands(&mut r, 3).unwrap(), ("ABC".to_string(), "123".to_string()));
  }

  #[test]
  fn missing_line() {
    let mut r = Cursor::new("ABC\n");
    match read_operands(&mut r, 3) {
      Err(CliError::Adder(AdderError::InvalidLength { expected: 3, found: 0 })) => {}
      other => panic!("unexpected: {:?}", other),
    }
  }

  #[test]
  fn empty_input() {
    let mut r = Cursor::new("");
    assert!(read_operands(&mut r, 3).is_err());
  }
}
