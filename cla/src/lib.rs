pub use common::widths;

mod signal;

pub mod codec;
pub mod expander;
pub mod geometry;
pub mod hierarchy;
pub mod resolver;
pub mod sum;
pub mod ripple;
pub mod adder;

pub use adder::{LookaheadAdder, Trace};
pub use expander::Operand;
pub use geometry::Geometry;
pub use signal::{combine, Signal};
pub use sum::Sum;

/// A single binary digit, always 0 or 1.
pub type Bit = u8;

pub mod error {
  use crate::Bit;

  #[derive(Debug, Clone, PartialEq, Eq)]
  pub enum AdderError {
    InvalidLength { expected: usize, found: usize },
    InvalidDigit(char),
    InvalidBitPattern([Bit; 4]),
    InvalidGeometry { width: usize, block: usize },
  }

  impl std::error::Error for AdderError {}

  impl std::fmt::Display for AdderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      match self {
        AdderError::InvalidLength { expected, found } => 
          write!(f, "invalid length: expected {} hex digits, found {}", expected, found),
        AdderError::InvalidDigit(c) => write!(f, "invalid hex digit: {:?}", c),
        AdderError::InvalidBitPattern(bits) => write!(f, "invalid bit pattern: {:?}", bits),
        AdderError::InvalidGeometry { width, block } => 
          write!(f, "invalid geometry: {} bits is not a power of block factor {}", width, block),
      }
    }
  }
}
