use crate::constants::*;
use crate::error::Error;
use std::num::IntErrorKind;

/// Eight binary digits, MSB first.
pub fn to_binary(val: u8) -> String {
    format!("{:01$b}", val, WORD_BITS)
}

/// The digit of `val` at bit position `bit` (0 = LSB).
pub fn bit_at(val: u8, bit: usize) -> u8 {
    (val >> bit) & 1
}

/// Parses an operand the way the input widgets accept them.
///
/// Decimal input is clamped into 0..=255. Binary (`0b`) and hex (`0x`)
/// literals must fit in 8 bits, since clamping a bit pattern is meaningless.
pub fn parse_operand(input: &str) -> Result<u8, Error> {
    let trimmed = input.trim().replace('_', "");
    let invalid = |reason: &'static str| Error::InvalidOperand {
        input: input.to_string(),
        reason,
    };

    let radix_literal = trimmed
        .strip_prefix("0b")
        .map(|digits| (digits, 2u32))
        .or_else(|| trimmed.strip_prefix("0x").map(|digits| (digits, 16)));

    if let Some((digits, radix)) = radix_literal {
        let wide = u32::from_str_radix(digits, radix).map_err(|_| invalid("not a number"))?;
        return u8::try_from(wide).map_err(|_| invalid("wider than 8 bits"));
    }

    match trimmed.parse::<i64>() {
        Ok(decimal) => Ok(decimal.clamp(0, 255) as u8),
        // Digits too long for i64 still clamp by sign.
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u8::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(0),
        Err(_) => Err(invalid("not a number")),
    }
}

/// clap value parser for operands.
pub fn operand_value_parser(input: &str) -> Result<u8, String> {
    parse_operand(input).map_err(|e| e.to_string())
}
