use log::trace;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{hierarchy::Hierarchy, signal::Signal, Bit};

/// Carry out of every block at every level, bits first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carries {
  levels: Vec<Vec<Bit>>,
}

impl Carries {
  /// Walks the hierarchy from the top level down. Every level runs one chain
  /// per parent block; the first block of a chain takes the carry out of the
  /// previous parent, or `carry_in` when it is the very first block.
  pub fn resolve(hierarchy: &Hierarchy, carry_in: Bit) -> Carries {
    let block = hierarchy.geometry().block();
    let mut resolved: Vec<Vec<Bit>> = Vec::with_capacity(hierarchy.depth());

    for level in (0..hierarchy.depth()).rev() {
      let parents = resolved.last().map(Vec::as_slice).unwrap_or(&[]);
      let carries = resolve_level(hierarchy.level(level), parents, block, carry_in);
      trace!("resolved {} carries on level {}", carries.len(), level);
      resolved.push(carries);
    }

    resolved.reverse();
    Carries { levels: resolved }
  }

  pub fn level(&self, level: usize) -> &[Bit] {
    &self.levels[level]
  }

  pub fn bits(&self) -> &[Bit] {
    self.level(0)
  }

  /// Carry leaving the most significant bit.
  pub fn carry_out(&self) -> Bit {
    self.bits().last().copied().unwrap_or(0)
  }
}

fn resolve_level(signals: &[Signal], parents: &[Bit], block: usize, carry_in: Bit) -> Vec<Bit> {
  let mut carries = vec![0; signals.len()];

  let chain = |(k, (out, sigs)): (usize, (&mut [Bit], &[Signal]))| {
    let mut carry = if k == 0 { carry_in } else { parents[k - 1] };
    for (c, s) in out.iter_mut().zip(sigs) {
      carry = s.carry_out(carry);
      *c = carry;
    }
  };

  #[cfg(feature = "parallel")]
  carries.par_chunks_mut(block).zip(signals.par_chunks(block)).enumerate().for_each(chain);

  #[cfg(not(feature = "parallel"))]
  carries.chunks_mut(block).zip(signals.chunks(block)).enumerate().for_each(chain);

  carries
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geometry::Geometry;
  use common::widths::{BIT_WIDTH, GROUPS, SECTIONS, SUPER_SECTIONS};

  fn resolve(a: &[Bit], b: &[Bit], carry_in: Bit) -> Carries {
    Carries::resolve(&Hierarchy::build(Geometry::STANDARD, a, b), carry_in)
  }

  #[test]
  fn level_sizes() {
    let c = resolve(&[0; BIT_WIDTH], &[0; BIT_WIDTH], 0);
    assert_eq!(c.level(0).len(), BIT_WIDTH);
    assert_eq!(c.level(1).len(), GROUPS);
    assert_eq!(c.level(2).len(), SECTIONS);
    assert_eq!(c.level(3).len(), SUPER_SECTIONS);
  }

  #[test]
  fn zeros_never_carry() {
    let c = resolve(&[0; BIT_WIDTH], &[0; BIT_WIDTH], 0);
    for level in 0..4 {
      assert!(c.level(level).iter().all(|b| *b == 0));
    }
    assert_eq!(c.carry_out(), 0);
  }

  #[test]
  fn carry_in_crosses_every_boundary() {
    // Everything propagates, nothing generates: only carry_in can feed the chain.
    let c = resolve(&[1; BIT_WIDTH], &[0; BIT_WIDTH], 1);
    for level in 0..4 {
      assert!(c.level(level).iter().all(|b| *b == 1), "level {}", level);
    }
    assert_eq!(c.carry_out(), 1);

    let c = resolve(&[1; BIT_WIDTH], &[0; BIT_WIDTH], 0);
    assert!(c.bits().iter().all(|b| *b == 0));
  }

  #[test]
  fn carry_enters_new_section_from_previous_section() {
    // Bit 63 generates (last bit of group 7, section 0), bits 64..=71 propagate.
    let mut a = [0; BIT_WIDTH];
    let mut b = [0; BIT_WIDTH];
    a[63] = 1;
    b[63] = 1;
    for i in 64..72 {
      a[i] = 1;
    }
    let c = resolve(&a, &b, 0);
    assert_eq!(c.level(2)[0], 1);
    assert_eq!(c.level(1)[8], 1);
    assert!(c.bits()[63..72].iter().all(|b| *b == 1));
    assert_eq!(c.bits()[62], 0);
    assert_eq!(c.bits()[72], 0);
  }

  #[test]
  fn top_level_is_a_single_chain() {
    let g = Geometry::new(8, 8).unwrap();
    // 0b1111_1111 + 0b0000_0001
    let h = Hierarchy::build(g, &[1; 8], &[1, 0, 0, 0, 0, 0, 0, 0]);
    let c = Carries::resolve(&h, 0);
    assert_eq!(c.bits(), &[1; 8]);
    assert_eq!(c.carry_out(), 1);
  }
}
