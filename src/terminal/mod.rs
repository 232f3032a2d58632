use crate::alu::{AluOutput, compute};
use crate::constants::*;
use crate::history::History;
use crate::operations::Operation;
use crate::sequencer::{StepDescription, total_steps};
use crate::utils::{bit_at, to_binary};

// Placeholder for a bit the sweep has not reached yet.
const DIM: char = '·';

/// The result of an immediate execution, with its flag register.
pub fn display_result(a: u8, b: u8, op: Operation, out: &AluOutput) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} ({}) control={:03b}\n",
        op,
        op.info().description,
        op.control_code()
    ));
    output.push_str(&format!("A:      {} ({})\n", to_binary(a), a));
    if op.uses_operand_b() {
        output.push_str(&format!("B:      {} ({})\n", to_binary(b), b));
    }
    output.push_str(&format!(
        "Result: {} ({} unsigned, {} signed, 0x{:02X})\n",
        to_binary(out.value),
        out.value,
        out.signed_value(),
        out.value
    ));
    output.push_str(&display_flags(out));
    output
}

pub fn display_flags(out: &AluOutput) -> String {
    let flags = [
        ("Z", "Zero", out.zero),
        ("N", "Negative", out.negative),
        ("C", "Carry", out.carry),
        ("V", "Overflow", out.overflow),
    ];
    let mut output = format!("Flags:  {}\n", out.pretty_format_flags());
    for (name, label, active) in flags {
        output.push_str(&format!("  {} {:<8} {}\n", name, label, active as u8));
    }
    output
}

/// One step of the bit-by-bit replay, rows written MSB first.
pub fn display_step(a: u8, b: u8, op: Operation, desc: &StepDescription) -> String {
    let mut output = String::new();
    let result = compute(a, b, op).value;

    output.push_str(&format!(
        "Progress: {} / {}\n",
        desc.step.index() + 1,
        total_steps()
    ));

    if let Some(chain) = &desc.carry_chain {
        let row: Vec<String> = (0..WORD_BITS)
            .rev()
            .map(|bit| {
                if desc.is_highlighted(bit) {
                    chain.carry_out(bit).to_string()
                } else {
                    DIM.to_string()
                }
            })
            .collect();
        output.push_str(&format!("carry: {}\n", row.join(" ")));
    }

    output.push_str(&format!("A:     {}\n", spaced(a)));
    if op.uses_operand_b() {
        output.push_str(&format!("{:<6} {}\n", format!("{}:", op.info().symbol), spaced(b)));
    }
    output.push_str(&format!("{}\n", "-".repeat(6 + WORD_BITS * 2)));

    let row: Vec<String> = (0..WORD_BITS)
        .rev()
        .map(|bit| {
            if desc.is_highlighted(bit) {
                bit_at(result, bit).to_string()
            } else {
                DIM.to_string()
            }
        })
        .collect();
    output.push_str(&format!("=:     {}\n", row.join(" ")));
    output.push_str(&desc.label);
    output.push('\n');
    output
}

pub fn display_history(history: &History) -> String {
    if history.is_empty() {
        return "No operations yet. Execute an operation to see history.\n".to_string();
    }
    let mut output = String::new();
    for (index, entry) in history.iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. [{}] {}\n",
            index + 1,
            entry.time_of_day(),
            entry
        ));
    }
    output
}

fn spaced(val: u8) -> String {
    let bits: Vec<String> = to_binary(val).chars().map(|c| c.to_string()).collect();
    bits.join(" ")
}
