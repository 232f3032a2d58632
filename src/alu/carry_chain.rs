use crate::constants::*;
use std::fmt;

/// Ripple carry of an 8-bit addition.
/// Entry `i` is the carry into bit `i`; entry 8 is the carry out of bit 7.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarryChain {
    carries: [u8; CARRY_CHAIN_LEN],
}

impl CarryChain {
    /// Simulates the adder bit by bit, from LSB to MSB.
    pub fn ripple(a: u8, b: u8) -> Self {
        let mut carries = [0u8; CARRY_CHAIN_LEN];
        let mut carry = 0;
        for bit in 0..WORD_BITS {
            let sum = ((a >> bit) & 1) + ((b >> bit) & 1) + carry;
            carry = sum >> 1;
            carries[bit + 1] = carry;
        }
        CarryChain { carries }
    }

    pub fn carry_in(&self, bit: usize) -> u8 {
        self.carries[bit]
    }

    pub fn carry_out(&self, bit: usize) -> u8 {
        self.carries[bit + 1]
    }

    /// Carry out of the most significant bit.
    pub fn final_carry(&self) -> bool {
        self.carries[WORD_BITS] == 1
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.carries
    }

    pub fn len(&self) -> usize {
        self.carries.len()
    }
}

// Carries printed MSB first, the same way operands are written.
impl fmt::Debug for CarryChain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bits: String = self
            .carries
            .iter()
            .rev()
            .map(|c| format!("{}", c))
            .collect();
        write!(f, "CarryChain({})", bits)
    }
}
