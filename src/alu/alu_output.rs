use crate::constants::*;
use crate::operations::Alu;

/// Represents an Arithmic operation, and it's result
/// The purpose is to make the underlying operations pure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AluOutput {
    pub value: u8,
    // (Z) -> Set if the value is zero
    pub zero: bool,
    // (N) -> Set if the 2-complement value is negative (copy of MSB)
    pub negative: bool,
    // (C) -> Carry out of bit 7 for ADD, borrow for SUB
    pub carry: bool,
    // (V) -> Set if the 2-complement result does not fit in 8 bits (ADD only)
    pub overflow: bool,
}

impl AluOutput {
    /// Builds an output, deriving Zero and Negative from the value.
    pub fn from_value(value: u8, carry: bool, overflow: bool) -> Self {
        AluOutput {
            value,
            zero: value == 0,
            negative: value & SIGN_BIT != 0,
            carry,
            overflow,
        }
    }

    /// The value read as a two's-complement signed byte.
    pub fn signed_value(&self) -> i8 {
        self.value as i8
    }

    /// Flag register in Z N C V order, e.g. `[Z-C-]`.
    pub fn pretty_format_flags(&self) -> String {
        let mut string = String::new();
        string.push('[');

        let mut lambda = |set: bool, letter: char| {
            if set {
                string.push(letter);
            } else {
                string.push('-');
            }
        };

        lambda(self.zero, 'Z');
        lambda(self.negative, 'N');
        lambda(self.carry, 'C');
        lambda(self.overflow, 'V');

        string.push(']');
        string
    }
}

impl Alu for AluOutput {
    fn alu_add(a: u8, b: u8) -> Self {
        // Use u16 to detect the 8-bit Carry (result > 0xFF)
        let res = (a as u16) + (b as u16);
        let res_u8 = (res & WORD_MASK) as u8;

        // Overflow: both operands share a sign and the result does not.
        let v_bit = (!(a ^ b) & (a ^ res_u8) & SIGN_BIT) != 0;

        AluOutput::from_value(res_u8, res > WORD_MASK, v_bit)
    }

    fn alu_sub(a: u8, b: u8) -> Self {
        let res = (a as i16) - (b as i16);
        // Truncation of a negative i16 is the two's-complement wraparound.
        let res_u8 = res as u8;

        // Carry (Borrow): Set if the result is negative.
        // Overflow is never reported for SUB.
        AluOutput::from_value(res_u8, res < 0, false)
    }

    fn alu_and(a: u8, b: u8) -> Self {
        AluOutput::from_value(a & b, false, false)
    }

    fn alu_or(a: u8, b: u8) -> Self {
        AluOutput::from_value(a | b, false, false)
    }

    fn alu_xor(a: u8, b: u8) -> Self {
        AluOutput::from_value(a ^ b, false, false)
    }

    fn alu_not(a: u8) -> Self {
        AluOutput::from_value(!a, false, false)
    }
}
