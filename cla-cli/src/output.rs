use cla::{error::AdderError, Sum};

/// The result line: one leading digit, then the sum in big-endian hex. The
/// leading digit is a literal '0' unless the real carry out was asked for.
pub fn render(sum: &Sum, report_overflow: bool) -> Result<String, AdderError> {
  let lead = if report_overflow && sum.overflowed() { '1' } else { '0' };
  let mut line = String::with_capacity(sum.width() / 4 + 1);
  line.push(lead);
  line.push_str(&sum.to_hex()?);
  Ok(line)
}
