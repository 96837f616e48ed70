use std::time::Instant;

use cla::{ripple, LookaheadAdder};
use common::widths::HEX_DIGITS;

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

const ROUNDS: usize = 10_000;

// Long propagate runs with the odd generate, so carries travel far.
fn operand(seed: usize) -> String {
  (0..HEX_DIGITS)
    .map(|i| if (i * 31 + seed) % 97 == 0 { '8' } else { 'F' })
    .collect()
}

#[allow(unreachable_code)]
fn main() {
  #[cfg(debug_assertions)]
  panic!("run bench with --release");

  let _profiler = dhat::Profiler::new_heap();

  let adder = LookaheadAdder::new();
  let a = adder.parse(&operand(1)).unwrap();
  let b = adder.parse(&operand(2)).unwrap();

  let start = Instant::now();
  for _ in 0..ROUNDS {
    adder.add(&a, &b).unwrap();
  }
  let lookahead = start.elapsed();

  let start = Instant::now();
  for _ in 0..ROUNDS {
    ripple::add(a.bits(), b.bits(), 0);
  }
  let reference = start.elapsed();

  println!("{} rounds: lookahead {:?}, ripple {:?}", ROUNDS, lookahead, reference);
}
