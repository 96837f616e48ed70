//! Plain ripple-carry addition. One carry per bit, strictly in order; this is
//! what the lookahead adder must agree with bit for bit.

use crate::{sum::Sum, Bit};

pub fn add(a: &[Bit], b: &[Bit], carry_in: Bit) -> Sum {
  assert_eq!(a.len(), b.len(), "operands differ in width");

  let mut carry = carry_in;
  let bits = a
    .iter()
    .zip(b)
    .map(|(x, y)| {
      let s = x ^ y ^ carry;
      carry = (x & y) | (carry & (x ^ y));
      s
    })
    .collect();

  Sum::new(bits, carry)
}
