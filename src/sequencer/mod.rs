mod narration;
mod step;

pub use narration::{StepDescription, describe_step};
pub use step::Step;

use crate::constants::*;
use crate::operations::Operation;
use log::debug;

/// Number of steps in every replay, whatever the operation.
pub fn total_steps() -> usize {
    TOTAL_STEPS
}

/// Replays one computation step by step.
///
/// The inputs are fixed for the lifetime of the sequencer; the cursor is its
/// only mutable state. It starts at 0, moves forward one step per `advance`,
/// stays put on the last step and returns to 0 on `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequencer {
    a: u8,
    b: u8,
    op: Operation,
    cursor: usize,
}

impl StepSequencer {
    pub fn new(a: u8, b: u8, op: Operation) -> Self {
        Self {
            a,
            b,
            op,
            cursor: STEP_LOAD,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn operation(&self) -> Operation {
        self.op
    }

    pub fn operands(&self) -> (u8, u8) {
        (self.a, self.b)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == LAST_STEP
    }

    /// Moves to the next step. Returns false, leaving the cursor alone,
    /// when already on the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            debug!("Sequencer already at step {}, advance ignored", self.cursor);
            return false;
        }
        self.cursor += 1;
        debug!("Sequencer advanced to step {}", self.cursor);
        true
    }

    pub fn reset(&mut self) {
        debug!("Sequencer reset from step {}", self.cursor);
        self.cursor = STEP_LOAD;
    }

    pub fn describe_current(&self) -> StepDescription {
        describe_step(self.a, self.b, self.op, self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let seq = StepSequencer::new(42, 15, Operation::Add);
        assert_eq!(seq.cursor(), 0);
        assert!(!seq.is_finished());
        assert_eq!(total_steps(), 11);
    }

    #[test]
    fn test_advance_clamps_at_last_step() {
        let mut seq = StepSequencer::new(42, 15, Operation::Add);
        for expected in 1..=10 {
            assert!(seq.advance());
            assert_eq!(seq.cursor(), expected);
        }
        assert!(seq.is_finished());
        assert!(!seq.advance());
        assert_eq!(seq.cursor(), 10);
    }

    #[test]
    fn test_reset_then_ten_advances_always_finishes() {
        for start in 0..=10 {
            let mut seq = StepSequencer::new(3, 4, Operation::Sub);
            for _ in 0..start {
                seq.advance();
            }
            seq.reset();
            assert_eq!(seq.cursor(), 0);
            for _ in 0..10 {
                seq.advance();
            }
            assert_eq!(seq.cursor(), 10, "starting from step {}", start);
        }
    }

    #[test]
    fn test_unary_not_keeps_step_count() {
        let mut seq = StepSequencer::new(0b1100_1010, 0, Operation::Not);
        let mut seen = 1;
        while seq.advance() {
            seen += 1;
        }
        assert_eq!(seen, total_steps());
    }

    #[test]
    fn test_describe_current_tracks_cursor() {
        let mut seq = StepSequencer::new(1, 1, Operation::Add);
        seq.advance();
        seq.advance();
        let desc = seq.describe_current();
        assert_eq!(desc.step, Step::Bit(0));
        assert_eq!(desc, describe_step(1, 1, Operation::Add, 2));
    }
}
