use crate::alu::AluOutput;
use crate::constants::*;
use crate::operations::Operation;
use crate::utils::to_binary;
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub operation: Operation,
    pub a: u8,
    pub b: u8,
    pub output: AluOutput,
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(operation: Operation, a: u8, b: u8, output: AluOutput) -> Self {
        Self::at(operation, a, b, output, Local::now())
    }

    pub fn at(
        operation: Operation,
        a: u8,
        b: u8,
        output: AluOutput,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            operation,
            a,
            b,
            output,
            timestamp,
        }
    }

    /// Wall-clock time of the execution, e.g. `14:03:27`.
    pub fn time_of_day(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.operation;
        let symbol = op.info().symbol;

        if op.uses_operand_b() {
            write!(
                f,
                "{} {} {} = {} ({} {} {} = {}",
                to_binary(self.a),
                symbol,
                to_binary(self.b),
                to_binary(self.output.value),
                self.a,
                symbol,
                self.b,
                self.output.value
            )?;
        } else {
            write!(
                f,
                "{} {} = {} ({} {} = {}",
                symbol,
                to_binary(self.a),
                to_binary(self.output.value),
                symbol,
                self.a,
                self.output.value
            )?;
        }

        let difference = (self.a as i16) - (self.b as i16);
        if op == Operation::Sub && difference < 0 {
            write!(f, " -> 2's complement of {}", difference)?;
        }
        write!(f, ")")
    }
}

/// The most recent executions, newest first.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds an entry at the front, dropping the oldest once full.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
