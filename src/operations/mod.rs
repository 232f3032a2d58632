mod operation_info;

pub use operation_info::OperationInfo;

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

// Generated code is included here: the `Operation` enum, the `OPERATIONS`
// table, the `Alu` trait and the `Operation::apply` dispatcher.
include!(concat!(env!("OUT_DIR"), "/operations_generated.rs"));

impl Operation {
    /// Static metadata for this operation, as declared in operations.json.
    pub fn info(self) -> &'static OperationInfo {
        // The table is generated in the same order as the enum.
        &OPERATIONS[self as usize]
    }

    pub fn mnemonic(self) -> &'static str {
        self.info().mnemonic
    }

    /// The 3-bit ALU control code, s2 s1 s0.
    pub fn control_code(self) -> u8 {
        self.info().control_code
    }

    /// Control lines as [s2, s1, s0].
    pub fn control_bits(self) -> [u8; 3] {
        let code = self.control_code();
        [(code >> 2) & 1, (code >> 1) & 1, code & 1]
    }

    /// Whether operand B takes part in the operation.
    pub fn uses_operand_b(self) -> bool {
        self.info().arity == 2
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(self, Operation::Add | Operation::Sub)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OPERATIONS
            .iter()
            .find(|info| info.mnemonic.eq_ignore_ascii_case(wanted))
            .map(|info| info.operation)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}
