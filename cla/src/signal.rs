use bitflags::bitflags;

use crate::Bit;

bitflags! {
  /// Generate/propagate pair of a bit or of an aligned block of bits.
  #[derive(Default)]
  pub struct Signal: u8 {
    const GENERATE = 1;       // Emits a carry whatever comes in
    const PROPAGATE = 1 << 1; // Passes an incoming carry through
  }
}

impl Signal {
  pub fn of_bits(a: Bit, b: Bit) -> Signal {
    let mut s = Signal::empty();
    s.set(Signal::GENERATE, a & b == 1);
    s.set(Signal::PROPAGATE, a | b == 1);
    s
  }

  pub fn generate(&self) -> Bit {
    self.contains(Signal::GENERATE) as Bit
  }

  pub fn propagate(&self) -> Bit {
    self.contains(Signal::PROPAGATE) as Bit
  }

  pub fn carry_out(&self, carry_in: Bit) -> Bit {
    self.generate() | (self.propagate() & carry_in)
  }
}

/// Parent signal of a run of children, least significant child first.
///
/// G is set when some child generates and every more significant child
/// propagates. P is set when every child propagates. For eight children this
/// is the usual sum of products `g7 | p7&g6 | p7&p6&g5 | ...`, written as a
/// fold so the same code serves any block factor.
pub fn combine(children: &[Signal]) -> Signal {
  children.iter().fold(Signal::PROPAGATE, |lower, upper| {
    let mut s = Signal::empty();
    s.set(Signal::GENERATE, upper.carry_out(lower.generate()) == 1);
    s.set(Signal::PROPAGATE, upper.propagate() & lower.propagate() == 1);
    s
  })
}
