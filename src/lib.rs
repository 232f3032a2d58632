pub mod alu;
pub mod args;
pub mod constants;
pub mod error;
pub mod history;
pub mod operations;
pub mod sequencer;
pub mod session;
pub mod terminal;
pub mod utils;

use crate::error::Error;
use crate::session::{SessionHandler, select_session_impl};

use std::io;
use std::io::Write;
use std::path::PathBuf;

pub use alu::{AluOutput, CarryChain, compute};
pub use operations::Operation;
pub use sequencer::{StepDescription, StepSequencer, describe_step, total_steps};

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    // Plain messages, the narration is the log.
    builder.format(|buf, record| writeln!(buf, "{}", record.args()));

    // If a path is provided, redirect output to the file
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Runs the session selected by the command line until it finishes.
pub fn run(args: args::Args) -> Result<(), Error> {
    setup_logging(&args.log_path)?;
    let mut session = select_session_impl(&args);
    while !session.is_finished() {
        session.next()?;
    }
    Ok(())
}
