use log::trace;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{geometry::Geometry, signal::{combine, Signal}, Bit};

/// Generate/propagate signals for every level, bits first. With the standard
/// geometry that is 4096 bits, 512 groups, 64 sections and 8 super sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy {
  geometry: Geometry,
  levels: Vec<Vec<Signal>>,
}

impl Hierarchy {
  pub fn build(geometry: Geometry, a: &[Bit], b: &[Bit]) -> Hierarchy {
    assert_eq!(a.len(), geometry.width(), "operand a has the wrong width");
    assert_eq!(b.len(), geometry.width(), "operand b has the wrong width");

    let mut levels = Vec::with_capacity(geometry.levels());
    levels.push(bit_signals(a, b));

    for level in 1..geometry.levels() {
      let parents = aggregate(&levels[level - 1], geometry.block());
      trace!("level {}: {} blocks", level, parents.len());
      levels.push(parents);
    }

    Hierarchy { geometry, levels }
  }

  pub fn geometry(&self) -> Geometry {
    self.geometry
  }

  pub fn depth(&self) -> usize {
    self.levels.len()
  }

  pub fn level(&self, level: usize) -> &[Signal] {
    &self.levels[level]
  }

  pub fn bits(&self) -> &[Signal] {
    self.level(0)
  }

  pub fn top(&self) -> &[Signal] {
    self.level(self.depth() - 1)
  }
}

fn bit_signals(a: &[Bit], b: &[Bit]) -> Vec<Signal> {
  #[cfg(feature = "parallel")]
  {
    a.par_iter().zip(b.par_iter()).map(|(&x, &y)| Signal::of_bits(x, y)).collect()
  }

  #[cfg(not(feature = "parallel"))]
  {
    a.iter().zip(b.iter()).map(|(&x, &y)| Signal::of_bits(x, y)).collect()
  }
}

// Each parent depends only on its own children.
fn aggregate(children: &[Signal], block: usize) -> Vec<Signal> {
  #[cfg(feature = "parallel")]
  {
    children.par_chunks(block).map(combine).collect()
  }

  #[cfg(not(feature = "parallel"))]
  {
    children.chunks(block).map(combine).collect()
  }
}
