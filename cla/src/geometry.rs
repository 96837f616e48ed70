use common::widths::{self, BIT_WIDTH, BLOCK_SIZE, NIBBLE_BITS};

use crate::error::AdderError;

/// Shape of a lookahead hierarchy: total bit width and the fan-in of every
/// parent block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
  width: usize,
  block: usize,
}

impl Geometry {
  pub const STANDARD: Geometry = Geometry { width: BIT_WIDTH, block: BLOCK_SIZE };

  pub fn new(width: usize, block: usize) -> Result<Geometry, AdderError> {
    if width % NIBBLE_BITS != 0 || !widths::is_power_of(width, block) {
      return Err(AdderError::InvalidGeometry { width, block });
    }
    Ok(Geometry { width, block })
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn block(&self) -> usize {
    self.block
  }

  pub fn levels(&self) -> usize {
    widths::depth(self.width, self.block)
  }

  pub fn level_len(&self, level: usize) -> usize {
    self.width / self.block.pow(level as u32)
  }

  pub fn hex_digits(&self) -> usize {
    self.width / NIBBLE_BITS
  }
}

impl Default for Geometry {
  fn default() -> Self {
    Self::STANDARD
  }
}
