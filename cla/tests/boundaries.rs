use cla::{
  error::AdderError,
  widths::{BIT_WIDTH, HEX_DIGITS},
  LookaheadAdder, Operand,
};
use rand::Rng;

fn padded(tail: &str) -> String {
  format!("{}{}", "0".repeat(HEX_DIGITS - tail.len()), tail)
}

fn zeros() -> String {
  "0".repeat(HEX_DIGITS)
}

fn ones() -> String {
  "F".repeat(HEX_DIGITS)
}

#[test]
fn zero_plus_zero() {
  let sum = LookaheadAdder::new().add_hex(&zeros(), &zeros()).unwrap();
  assert!(sum.bits().iter().all(|b| *b == 0));
  assert!(!sum.overflowed());
  assert_eq!(sum.to_hex().unwrap(), zeros());
}

#[test]
fn all_ones_plus_one_carries_through_every_block() {
  let adder = LookaheadAdder::new();
  let a = adder.parse(&ones()).unwrap();
  let b = adder.parse(&padded("1")).unwrap();
  let trace = adder.trace(&a, &b).unwrap();

  assert_eq!(trace.sum.to_hex().unwrap(), zeros());
  assert!(trace.sum.overflowed());
  for level in 0..trace.hierarchy.depth() {
    assert!(
      trace.carries.level(level).iter().all(|c| *c == 1),
      "carry dropped on level {}", level
    );
  }
}

#[test]
fn adding_zero_is_identity() {
  let sum = LookaheadAdder::new().add_hex(&ones(), &zeros()).unwrap();
  assert_eq!(sum.to_hex().unwrap(), ones());
  assert!(!sum.overflowed());
}

#[test]
fn one_plus_one_is_two() {
  let sum = LookaheadAdder::new().add_hex(&padded("1"), &padded("1")).unwrap();
  assert_eq!(sum.to_hex().unwrap(), padded("2"));
}

#[test]
fn expand_then_add_zero_round_trips() {
  let mut rng = rand::thread_rng();
  let digits = b"0123456789ABCDEF";
  for _ in 0..16 {
    let hex: String = (0..HEX_DIGITS).map(|_| digits[rng.gen_range(0..16)] as char).collect();
    let sum = LookaheadAdder::new().add_hex(&hex, &zeros()).unwrap();
    assert_eq!(sum.to_hex().unwrap(), hex);
  }
}

#[test]
fn complement_plus_carry_in_wraps_to_zero() {
  let mut rng = rand::thread_rng();
  let digits = b"0123456789ABCDEF";
  for _ in 0..16 {
    let a: Vec<u8> = (0..HEX_DIGITS).map(|_| rng.gen_range(0..16)).collect();
    let hex_a: String = a.iter().map(|d| digits[*d as usize] as char).collect();
    let hex_b: String = a.iter().map(|d| digits[(15 - d) as usize] as char).collect();

    let no_carry = LookaheadAdder::new().add_hex(&hex_a, &hex_b).unwrap();
    assert_eq!(no_carry.to_hex().unwrap(), ones());
    assert!(!no_carry.overflowed());

    let carry = LookaheadAdder::new().carry_in(true).add_hex(&hex_a, &hex_b).unwrap();
    assert_eq!(carry.to_hex().unwrap(), zeros());
    assert!(carry.overflowed());
  }
}

#[test]
fn sum_width_is_fixed() {
  let sum = LookaheadAdder::new().add_hex(&ones(), &ones()).unwrap();
  assert_eq!(sum.width(), BIT_WIDTH);
  assert_eq!(sum.to_hex().unwrap(), format!("{}E", "F".repeat(HEX_DIGITS - 1)));
}

#[test]
fn wrong_lengths_are_rejected() {
  for len in [HEX_DIGITS - 1, HEX_DIGITS + 1] {
    let err = Operand::from_hex(&"1".repeat(len)).unwrap_err();
    assert_eq!(err, AdderError::InvalidLength { expected: HEX_DIGITS, found: len });
  }
}

#[test]
fn non_hex_is_rejected() {
  let lower = padded("abc");
  assert_eq!(Operand::from_hex(&lower).unwrap_err(), AdderError::InvalidDigit('c'));
  let junk = padded("1G");
  assert_eq!(Operand::from_hex(&junk).unwrap_err(), AdderError::InvalidDigit('G'));
  assert!(LookaheadAdder::new().add_hex(&zeros(), &padded("-1")).is_err());
}
