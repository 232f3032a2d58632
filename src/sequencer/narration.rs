use super::Step;
use crate::alu::{CarryChain, compute};
use crate::constants::*;
use crate::operations::Operation;
use crate::utils::{bit_at, to_binary};
use log::warn;

/// What a single step shows: the explanation, the lit bit positions and,
/// for addition, the ripple carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDescription {
    pub step: Step,
    pub label: String,
    // Bit `i` set means bit position `i` is highlighted.
    pub highlighted: u8,
    pub carry_chain: Option<CarryChain>,
}

impl StepDescription {
    pub fn is_highlighted(&self, bit: usize) -> bool {
        bit_at(self.highlighted, bit) == 1
    }

    /// Highlighted bit positions in ascending order.
    pub fn highlighted_bits(&self) -> Vec<usize> {
        (0..WORD_BITS).filter(|bit| self.is_highlighted(*bit)).collect()
    }
}

/// Describes step `index` of computing `op` on `a` and `b`.
/// Every call re-derives its facts from the operands.
pub fn describe_step(a: u8, b: u8, op: Operation, index: usize) -> StepDescription {
    if index > LAST_STEP {
        warn!(
            "Step index {} is past the last step, showing step {}",
            index, LAST_STEP
        );
    }
    let step = Step::from_index(index);
    let number = step.index() + 1;

    let label = match step {
        Step::Load => format!(
            "Step {}: Load inputs - A = {} ({}), B = {} ({})",
            number,
            to_binary(a),
            a,
            to_binary(b),
            b
        ),
        Step::Latch => format!(
            "Step {}: Control signal {:03b} set for {} operation (LSB to MSB processing)",
            number,
            op.control_code(),
            op
        ),
        Step::Bit(bit) => format!(
            "Step {}: Bit {} (LSB→MSB): {}",
            number,
            bit,
            narrate_bit(a, b, op, bit)
        ),
        Step::Output => narrate_output(a, b, op, number),
    };

    // The carry row only appears once the bit sweep has started.
    let carry_chain = match (op, step) {
        (Operation::Add, Step::Bit(_) | Step::Output) => Some(CarryChain::ripple(a, b)),
        _ => None,
    };

    StepDescription {
        step,
        label,
        highlighted: step.highlight_mask(),
        carry_chain,
    }
}

fn narrate_bit(a: u8, b: u8, op: Operation, bit: usize) -> String {
    let bit_a = bit_at(a, bit);
    let bit_b = bit_at(b, bit);
    let result_bit = bit_at(compute(a, b, op).value, bit);

    match op {
        Operation::Add => {
            let chain = CarryChain::ripple(a, b);
            let carry_in = chain.carry_in(bit);
            let sum = bit_a + bit_b + carry_in;
            format!(
                "{} + {} + carry({}) = {}, carry out = {}",
                bit_a,
                bit_b,
                carry_in,
                sum % 2,
                chain.carry_out(bit)
            )
        }
        Operation::Sub => {
            let suffix = if bit == WORD_BITS - 1 {
                " (2's complement if negative)"
            } else {
                ""
            };
            format!("{} - {} = {}{}", bit_a, bit_b, result_bit, suffix)
        }
        Operation::And | Operation::Or | Operation::Xor => {
            format!("{} {} {} = {}", bit_a, op, bit_b, result_bit)
        }
        Operation::Not => format!("{} {} = {}", op, bit_a, result_bit),
    }
}

fn narrate_output(a: u8, b: u8, op: Operation, number: usize) -> String {
    let out = compute(a, b, op);
    let negative_difference = op == Operation::Sub && (a as i16) - (b as i16) < 0;

    if negative_difference {
        format!(
            "Step {}: Output = {} ({} in unsigned, {} in signed 2's complement)",
            number,
            to_binary(out.value),
            out.value,
            out.signed_value()
        )
    } else {
        format!(
            "Step {}: Output = {} ({} in unsigned)",
            number,
            to_binary(out.value),
            out.value
        )
    }
}
