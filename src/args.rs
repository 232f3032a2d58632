use std::path::PathBuf;

use clap::Parser;

use crate::operations::Operation;
use crate::utils::operand_value_parser;

/// Runs an 8-bit ALU operation and explains it bit by bit.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Operand A: decimal (clamped to 0-255), 0b binary or 0x hex.
    #[arg(short, long, value_parser = operand_value_parser)]
    pub a: u8,

    /// Operand B, ignored by NOT.
    #[arg(short, long, value_parser = operand_value_parser, default_value = "0")]
    pub b: u8,

    /// One of ADD, SUB, AND, OR, XOR, NOT.
    #[arg(short, long)]
    pub op: Operation,

    // Replay the computation one step at a time instead of executing it.
    #[arg(long)]
    pub step_mode: bool,

    // Keep reading commands from stdin. In step mode: enter, r, q between
    // steps. Otherwise: further `OP A [B]` lines, history, clear and q.
    #[arg(long)]
    pub interactive: bool,

    // Artificial delay before an immediate execution shows its result.
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,
}
