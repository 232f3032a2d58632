/// Width of every operand and result.
pub const WORD_BITS: usize = 8;
pub const WORD_MASK: u16 = 0xFF;
pub const SIGN_BIT: u8 = 0b1000_0000;

// Step layout: load, latch, one step per bit, output.
pub const STEP_LOAD: usize = 0;
pub const STEP_LATCH: usize = 1;
pub const FIRST_BIT_STEP: usize = 2;
pub const TOTAL_STEPS: usize = FIRST_BIT_STEP + WORD_BITS + 1;
pub const LAST_STEP: usize = TOTAL_STEPS - 1;

/// Length of a ripple carry chain: the carry-in plus one carry-out per bit.
pub const CARRY_CHAIN_LEN: usize = WORD_BITS + 1;

pub const HISTORY_CAPACITY: usize = 10;
