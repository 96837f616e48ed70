#![no_std]

pub mod widths {
  pub const BIT_WIDTH: usize = 4096;
  pub const BLOCK_SIZE: usize = 8;
  pub const NIBBLE_BITS: usize = 4;
  pub const HEX_DIGITS: usize = BIT_WIDTH / NIBBLE_BITS;

  pub const GROUPS: usize = BIT_WIDTH / BLOCK_SIZE;
  pub const SECTIONS: usize = GROUPS / BLOCK_SIZE;
  pub const SUPER_SECTIONS: usize = SECTIONS / BLOCK_SIZE;

  // bits, groups, sections, super sections
  pub const LEVELS: usize = depth(BIT_WIDTH, BLOCK_SIZE);

  const _: () = assert!(BLOCK_SIZE.pow(LEVELS as u32) == BIT_WIDTH);
  const _: () = assert!(SUPER_SECTIONS == BLOCK_SIZE);

  /// Number of hierarchy levels needed for `width` bits when every parent has
  /// `block` children. Only meaningful when `width` is a power of `block`.
  pub const fn depth(width: usize, block: usize) -> usize {
    let mut n = width;
    let mut levels = 0;
    while n > 1 {
      n /= block;
      levels += 1;
    }
    levels
  }

  pub const fn is_power_of(width: usize, block: usize) -> bool {
    if block < 2 || width < block {
      return false;
    }
    let mut n = width;
    while n % block == 0 {
      n /= block;
    }
    n == 1
  }
}
