use crate::constants::*;

/// One stage of the replayed computation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Operands are loaded into the input latches.
    Load,
    /// The control signal for the operation is latched.
    Latch,
    /// One bit position, 0 = LSB.
    Bit(usize),
    /// The assembled result is driven to the output.
    Output,
}

impl Step {
    /// Maps a step index to its stage. Indices past the end clamp to `Output`.
    pub fn from_index(index: usize) -> Self {
        match index {
            STEP_LOAD => Step::Load,
            STEP_LATCH => Step::Latch,
            i if i < LAST_STEP => Step::Bit(i - FIRST_BIT_STEP),
            _ => Step::Output,
        }
    }

    /// Bit positions past the MSB count as the MSB.
    pub fn index(self) -> usize {
        match self {
            Step::Load => STEP_LOAD,
            Step::Latch => STEP_LATCH,
            Step::Bit(bit) => FIRST_BIT_STEP + bit.min(WORD_BITS - 1),
            Step::Output => LAST_STEP,
        }
    }

    /// Bit positions already processed once this step is reached.
    pub fn highlight_mask(self) -> u8 {
        match self {
            Step::Load | Step::Latch => 0,
            // All bits up to and including `bit`.
            Step::Bit(bit) => ((1u16 << (bit.min(WORD_BITS - 1) + 1)) - 1) as u8,
            Step::Output => 0xFF,
        }
    }
}
