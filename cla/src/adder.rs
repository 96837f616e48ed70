use log::{debug, warn};

use crate::{
  error::AdderError,
  expander::{self, Operand},
  geometry::Geometry,
  hierarchy::Hierarchy,
  resolver::Carries,
  sum::Sum,
  Bit,
};

/// Every intermediate array of one addition.
#[derive(Debug, Clone)]
pub struct Trace {
  pub hierarchy: Hierarchy,
  pub carries: Carries,
  pub sum: Sum,
}

/// Carry-lookahead adder. Defaults to 4096 bits in blocks of 8 with no carry in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LookaheadAdder {
  geometry: Geometry,
  carry_in: Bit,
}

impl LookaheadAdder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_geometry(geometry: Geometry) -> Self {
    Self { geometry, carry_in: 0 }
  }

  pub fn carry_in(mut self, carry_in: bool) -> Self {
    self.carry_in = carry_in as Bit;
    self
  }

  pub fn geometry(&self) -> Geometry {
    self.geometry
  }

  pub fn parse(&self, hex: &str) -> Result<Operand, AdderError> {
    expander::expand(hex, self.geometry)
  }

  pub fn add(&self, a: &Operand, b: &Operand) -> Result<Sum, AdderError> {
    Ok(self.trace(a, b)?.sum)
  }

  pub fn add_hex(&self, a: &str, b: &str) -> Result<Sum, AdderError> {
    self.add(&self.parse(a)?, &self.parse(b)?)
  }

  pub fn trace(&self, a: &Operand, b: &Operand) -> Result<Trace, AdderError> {
    for op in [a, b] {
      if op.width() != self.geometry.width() {
        return Err(AdderError::InvalidLength {
          expected: self.geometry.hex_digits(),
          found: op.width() / common::widths::NIBBLE_BITS,
        });
      }
    }

    debug!("building {} level hierarchy", self.geometry.levels());
    let hierarchy = Hierarchy::build(self.geometry, a.bits(), b.bits());

    debug!("resolving carries, carry in: {}", self.carry_in);
    let carries = Carries::resolve(&hierarchy, self.carry_in);

    let sum = Sum::assemble(a.bits(), b.bits(), &carries, self.carry_in);
    if sum.overflowed() {
      warn!("carry out of bit {} dropped", self.geometry.width() - 1);
    }

    Ok(Trace { hierarchy, carries, sum })
  }
}
