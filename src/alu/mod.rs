mod alu_output;
mod carry_chain;

pub use alu_output::AluOutput;
pub use carry_chain::CarryChain;

use crate::operations::Operation;
use log::trace;

/// Runs one operation through the ALU.
/// Pure: the same inputs always produce the same output.
pub fn compute(a: u8, b: u8, op: Operation) -> AluOutput {
    let out: AluOutput = op.apply(a, b);
    trace!(
        "{} a={:08b} b={:08b} -> {:08b} {}",
        op,
        a,
        b,
        out.value,
        out.pretty_format_flags()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_matches_masked_sum() {
        for a in 0..=255u16 {
            for b in 0..=255u16 {
                let out = compute(a as u8, b as u8, Operation::Add);
                assert_eq!(out.value as u16, (a + b) & 0xFF);
                assert_eq!(out.carry, a + b > 255);
            }
        }
    }

    #[test]
    fn test_not_ignores_operand_b() {
        for a in 0..=255u8 {
            for b in [0u8, 1, 0x55, 0xFF] {
                assert_eq!(compute(a, b, Operation::Not).value, 255 - a);
            }
        }
    }

    #[test]
    fn test_zero_and_negative_follow_value() {
        for op in Operation::ALL {
            for (a, b) in [(0u8, 0u8), (42, 15), (200, 100), (5, 10), (0x80, 0x7F)] {
                let out = compute(a, b, op);
                assert_eq!(out.zero, out.value == 0);
                assert_eq!(out.negative, (out.value >> 7) & 1 == 1);
            }
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        for op in Operation::ALL {
            assert_eq!(compute(173, 91, op), compute(173, 91, op));
        }
    }

    #[test]
    fn test_only_arithmetic_sets_carry() {
        for op in Operation::ALL {
            let out = compute(0xFF, 0xFF, op);
            if !op.is_arithmetic() {
                assert!(!out.carry, "{} must not set carry", op);
                assert!(!out.overflow, "{} must not set overflow", op);
            }
        }
    }

    #[test]
    fn test_scenario_add_small() {
        let out = compute(42, 15, Operation::Add);
        assert_eq!(out.value, 57);
        assert_eq!(out.value, 0b0011_1001);
        assert!(!out.carry);
        assert!(!out.overflow);
        assert!(!out.zero);
        assert!(!out.negative);
    }

    #[test]
    fn test_scenario_add_wraps() {
        let out = compute(200, 100, Operation::Add);
        assert_eq!(out.value, 44);
        assert!(out.carry);
    }

    #[test]
    fn test_scenario_sub_borrows() {
        let out = compute(5, 10, Operation::Sub);
        assert_eq!(out.value, 0xFB);
        assert!(out.carry);
        assert!(!out.overflow);
    }

    #[test]
    fn test_scenario_not() {
        let out = compute(0b1100_1010, 0, Operation::Not);
        assert_eq!(out.value, 0b0011_0101);
    }

    #[test]
    fn test_scenario_and_disjoint() {
        let out = compute(15, 240, Operation::And);
        assert_eq!(out.value, 0);
        assert!(out.zero);
    }
}
