use phf::phf_map;

use crate::{error::AdderError, Bit};
use common::widths::NIBBLE_BITS;

/// A hex digit as 4 bits, most significant first.
pub type Nibble = [Bit; NIBBLE_BITS];

// Uppercase only.
static NIBBLES: phf::Map<char, Nibble> = phf_map! {
  '0' => [0, 0, 0, 0],
  '1' => [0, 0, 0, 1],
  '2' => [0, 0, 1, 0],
  '3' => [0, 0, 1, 1],
  '4' => [0, 1, 0, 0],
  '5' => [0, 1, 0, 1],
  '6' => [0, 1, 1, 0],
  '7' => [0, 1, 1, 1],
  '8' => [1, 0, 0, 0],
  '9' => [1, 0, 0, 1],
  'A' => [1, 0, 1, 0],
  'B' => [1, 0, 1, 1],
  'C' => [1, 1, 0, 0],
  'D' => [1, 1, 0, 1],
  'E' => [1, 1, 1, 0],
  'F' => [1, 1, 1, 1],
};

const DIGITS: [char; 16] = [
  '0', '1', '2', '3', '4', '5', '6', '7',
  '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
  Big,
  Little,
}

pub fn decode(digit: char) -> Result<Nibble, AdderError> {
  NIBBLES.get(&digit).copied().ok_or(AdderError::InvalidDigit(digit))
}

pub fn encode(nibble: Nibble) -> Result<char, AdderError> {
  let mut value = 0usize;
  for bit in nibble {
    if bit > 1 {
      return Err(AdderError::InvalidBitPattern(nibble));
    }
    value = (value << 1) | bit as usize;
  }
  Ok(DIGITS[value])
}

/// Little-endian bits to a big-endian hex string. `bits.len()` must be a
/// multiple of 4.
pub fn to_hex(bits: &[Bit]) -> Result<String, AdderError> {
  if bits.len() % NIBBLE_BITS != 0 {
    let found = bits.len() / NIBBLE_BITS;
    return Err(AdderError::InvalidLength { expected: found + 1, found });
  }

  let mut digits = bits
    .chunks(NIBBLE_BITS)
    .map(|chunk| encode([chunk[3], chunk[2], chunk[1], chunk[0]]))
    .collect::<Result<Vec<char>, AdderError>>()?;
  digits.reverse();
  Ok(digits.into_iter().collect())
}

/// Renders little-endian bits as a string of '0'/'1'.
pub fn binary_string(bits: &[Bit], endian: Endian) -> String {
  let digit = |b: &Bit| if *b == 0 { '0' } else { '1' };
  match endian {
    Endian::Little => bits.iter().map(digit).collect(),
    Endian::Big => bits.iter().rev().map(digit).collect(),
  }
}
