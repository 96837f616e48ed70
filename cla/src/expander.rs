use log::debug;

use crate::{codec, error::AdderError, geometry::Geometry, Bit};
use common::widths::NIBBLE_BITS;

/// An unsigned integer as little-endian bits; `bits()[0]` is 2^0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand(Box<[Bit]>);

impl Operand {
  /// A 4096-bit operand from exactly 1024 uppercase hex digits.
  pub fn from_hex(hex: &str) -> Result<Operand, AdderError> {
    expand(hex, Geometry::STANDARD)
  }

  pub fn bits(&self) -> &[Bit] {
    &self.0
  }

  pub fn width(&self) -> usize {
    self.0.len()
  }

  pub fn to_hex(&self) -> Result<String, AdderError> {
    codec::to_hex(&self.0)
  }
}

impl std::ops::Index<usize> for Operand {
  type Output = Bit;

  fn index(&self, index: usize) -> &Bit {
    &self.0[index]
  }
}

/// Expands a big-endian hex string into `geometry.width()` little-endian bits.
/// Digit `i`, counted from the right, lands on bits `[4i, 4i + 4)`.
pub fn expand(hex: &str, geometry: Geometry) -> Result<Operand, AdderError> {
  let digits: Vec<char> = hex.chars().collect();
  if digits.len() != geometry.hex_digits() {
    return Err(AdderError::InvalidLength { expected: geometry.hex_digits(), found: digits.len() });
  }

  let mut bits = vec![0; geometry.width()].into_boxed_slice();
  for (i, &digit) in digits.iter().rev().enumerate() {
    let nibble = codec::decode(digit).map_err(|e| {
      debug!("bad digit {:?} at position {}", digit, digits.len() - 1 - i);
      e
    })?;

    // nibble is big endian, bits are little endian
    let base = NIBBLE_BITS * i;
    for (j, bit) in nibble.iter().rev().enumerate() {
      bits[base + j] = *bit;
    }
  }

  Ok(Operand(bits))
}
