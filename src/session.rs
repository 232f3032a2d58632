use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use crate::alu::{AluOutput, compute};
use crate::args::Args;
use crate::error::Error;
use crate::history::{History, HistoryEntry};
use crate::operations::Operation;
use crate::sequencer::StepSequencer;
use crate::terminal::{display_history, display_result, display_step};
use crate::utils::parse_operand;

pub trait SessionHandler {
    fn next(&mut self) -> Result<(), Error>;
    fn is_finished(&self) -> bool;
}

/// A request read by an interactive execute session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteCommand {
    Execute(u8, u8, Operation),
    ShowHistory,
    ClearHistory,
    Quit,
}

impl ExecuteCommand {
    /// Parses `OP A [B]`, `history`, `clear` or `q`.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(ExecuteCommand::ShowHistory);
        };
        match first.to_ascii_lowercase().as_str() {
            "h" | "history" => return Ok(ExecuteCommand::ShowHistory),
            "c" | "clear" => return Ok(ExecuteCommand::ClearHistory),
            "q" | "quit" => return Ok(ExecuteCommand::Quit),
            _ => {}
        }

        let op: Operation = first.parse()?;
        let a = match words.next() {
            Some(word) => parse_operand(word)?,
            None => {
                return Err(Error::InvalidOperand {
                    input: line.trim().to_string(),
                    reason: "missing operand A",
                });
            }
        };
        let b = match words.next() {
            Some(word) => parse_operand(word)?,
            None => 0,
        };
        Ok(ExecuteCommand::Execute(a, b, op))
    }
}

/// Drives immediate executions: wait, compute, record, show.
/// Queued executions run first; with an input source, further commands
/// are read until `q` or end of input.
pub struct ExecuteSession<R: BufRead, W: Write> {
    pending: VecDeque<(u8, u8, Operation)>,
    delay: Duration,
    history: History,
    input: Option<R>,
    out: W,
    quit: bool,
}

impl<R: BufRead, W: Write> ExecuteSession<R, W> {
    pub fn new(input: Option<R>, out: W, delay: Duration) -> Self {
        Self {
            pending: VecDeque::new(),
            delay,
            history: History::new(),
            input,
            out,
            quit: false,
        }
    }

    pub fn queue(&mut self, a: u8, b: u8, op: Operation) {
        self.pending.push_back((a, b, op));
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        info!("History cleared");
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn execute(&mut self, a: u8, b: u8, op: Operation) -> Result<AluOutput, Error> {
        if !self.delay.is_zero() {
            info!("Processing operation...");
            thread::sleep(self.delay);
        }
        let out = compute(a, b, op);
        self.history.push(HistoryEntry::new(op, a, b, out));

        self.out.write_all(display_result(a, b, op, &out).as_bytes())?;
        info!("Operation complete! Result: {}", out.value);
        self.show_history()?;
        Ok(out)
    }

    fn show_history(&mut self) -> Result<(), Error> {
        self.out.write_all(b"History:\n")?;
        self.out
            .write_all(display_history(&self.history).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Reads one command line; `None` at end of input.
    fn read_command(&mut self) -> Result<Option<String>, Error> {
        let Some(input) = self.input.as_mut() else {
            return Ok(None);
        };
        self.out
            .write_all(b"[OP A B] execute, [history], [clear], [q] quit > ")?;
        self.out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> SessionHandler for ExecuteSession<R, W> {
    fn next(&mut self) -> Result<(), Error> {
        if let Some((a, b, op)) = self.pending.pop_front() {
            self.execute(a, b, op)?;
            return Ok(());
        }

        let Some(line) = self.read_command()? else {
            self.quit = true;
            return Ok(());
        };
        match ExecuteCommand::parse(&line) {
            Ok(ExecuteCommand::Execute(a, b, op)) => {
                self.execute(a, b, op)?;
            }
            Ok(ExecuteCommand::ShowHistory) => self.show_history()?,
            Ok(ExecuteCommand::ClearHistory) => {
                self.clear_history();
                self.show_history()?;
            }
            Ok(ExecuteCommand::Quit) => self.quit = true,
            // A typo should not end the session.
            Err(e) => warn!("{}", e),
        }
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.pending.is_empty() && (self.input.is_none() || self.quit)
    }
}

/// What the user asked for between two steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepCommand {
    Advance,
    Reset,
    Quit,
    Unknown(String),
}

impl StepCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "next" => StepCommand::Advance,
            "r" | "reset" => StepCommand::Reset,
            "q" | "quit" => StepCommand::Quit,
            other => StepCommand::Unknown(other.to_string()),
        }
    }
}

/// Drives a step-by-step replay. With an input source, progression waits
/// for a command per step; without one it runs straight to the output.
pub struct StepSession<R: BufRead, W: Write> {
    sequencer: StepSequencer,
    input: Option<R>,
    out: W,
    finished: bool,
}

impl<R: BufRead, W: Write> StepSession<R, W> {
    pub fn new(sequencer: StepSequencer, input: Option<R>, out: W) -> Self {
        Self {
            sequencer,
            input,
            out,
            finished: false,
        }
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn read_command(&mut self) -> Result<StepCommand, Error> {
        let Some(input) = self.input.as_mut() else {
            return Ok(StepCommand::Advance);
        };
        self.out
            .write_all(b"[enter] next step, [r] reset, [q] quit > ")?;
        self.out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input.
            return Ok(StepCommand::Quit);
        }
        Ok(StepCommand::parse(&line))
    }
}

impl<R: BufRead, W: Write> SessionHandler for StepSession<R, W> {
    fn next(&mut self) -> Result<(), Error> {
        let (a, b) = self.sequencer.operands();
        let op = self.sequencer.operation();
        let desc = self.sequencer.describe_current();
        self.out
            .write_all(display_step(a, b, op, &desc).as_bytes())?;
        debug!("{}", desc.label);

        match self.read_command()? {
            StepCommand::Advance => {
                if !self.sequencer.advance() {
                    self.finished = true;
                }
            }
            StepCommand::Reset => self.sequencer.reset(),
            StepCommand::Quit => self.finished = true,
            StepCommand::Unknown(cmd) => warn!("Unknown command '{}', expected enter, r or q", cmd),
        }
        self.out.flush()?;
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

pub enum SessionType {
    Execute(ExecuteSession<io::StdinLock<'static>, io::Stdout>),
    Step(StepSession<io::StdinLock<'static>, io::Stdout>),
}

// Implement the trait for the Enum itself
impl SessionHandler for SessionType {
    fn next(&mut self) -> Result<(), Error> {
        match self {
            SessionType::Execute(s) => s.next()?,
            SessionType::Step(s) => s.next()?,
        }
        Ok(())
    }

    fn is_finished(&self) -> bool {
        match self {
            SessionType::Execute(s) => s.is_finished(),
            SessionType::Step(s) => s.is_finished(),
        }
    }
}

pub fn select_session_impl(args: &Args) -> SessionType {
    let input = args.interactive.then(|| io::stdin().lock());
    if args.step_mode {
        let sequencer = StepSequencer::new(args.a, args.b, args.op);
        SessionType::Step(StepSession::new(sequencer, input, io::stdout()))
    } else {
        let delay = Duration::from_millis(args.delay_ms);
        let mut session = ExecuteSession::new(input, io::stdout(), delay);
        session.queue(args.a, args.b, args.op);
        SessionType::Execute(session)
    }
}
