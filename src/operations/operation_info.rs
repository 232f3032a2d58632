use super::*;

/// One row of the ALU control-code table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OperationInfo {
    pub operation: Operation,
    pub mnemonic: &'static str,
    pub description: &'static str,
    // Infix symbol used when rendering, e.g. "+" or "xor".
    pub symbol: &'static str,
    pub control_code: u8,
    pub arity: u8,
}
