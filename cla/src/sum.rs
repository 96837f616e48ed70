use crate::{codec, error::AdderError, resolver::Carries, Bit};

/// Result of an addition: little-endian sum bits plus the carry out of the
/// most significant bit, which the bits themselves do not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sum {
  bits: Box<[Bit]>,
  carry_out: Bit,
}

impl Sum {
  pub(crate) fn new(bits: Box<[Bit]>, carry_out: Bit) -> Self {
    Self { bits, carry_out }
  }

  /// `sum[i] = a[i] ^ b[i] ^ carry into i`, where the carry into bit 0 is
  /// `carry_in` and the carry into bit i is the resolved carry out of bit i-1.
  pub fn assemble(a: &[Bit], b: &[Bit], carries: &Carries, carry_in: Bit) -> Sum {
    let bit_carries = carries.bits();
    let bits = a
      .iter()
      .zip(b)
      .enumerate()
      .map(|(i, (x, y))| {
        let incoming = if i == 0 { carry_in } else { bit_carries[i - 1] };
        x ^ y ^ incoming
      })
      .collect();

    Sum::new(bits, carries.carry_out())
  }

  pub fn bits(&self) -> &[Bit] {
    &self.bits
  }

  pub fn width(&self) -> usize {
    self.bits.len()
  }

  pub fn carry_out(&self) -> Bit {
    self.carry_out
  }

  pub fn overflowed(&self) -> bool {
    self.carry_out == 1
  }

  /// Big-endian hex of the sum bits. The carry out is not part of it.
  pub fn to_hex(&self) -> Result<String, AdderError> {
    codec::to_hex(&self.bits)
  }
}
