use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::Mutex;

// Enough for a full replay plus its cursor transitions.
const RING_BUFFER_SIZE: usize = 60;

lazy_static::lazy_static! {
    static ref LOG_BUFFER: Mutex<VecDeque<String>> = Mutex::new(VecDeque::with_capacity(RING_BUFFER_SIZE));
}

struct RingLogger;

impl log::Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut buffer = LOG_BUFFER.lock().unwrap();
            if buffer.len() >= RING_BUFFER_SIZE {
                buffer.pop_front();
            }
            buffer.push_back(format!("{}: {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

pub fn init_logger() -> Result<(), SetLoggerError> {
    log::set_logger(&RingLogger).map(|()| log::set_max_level(LevelFilter::Trace))
}

/// Everything logged so far, oldest first.
pub fn captured() -> Vec<String> {
    LOG_BUFFER.lock().unwrap().iter().cloned().collect()
}

pub fn clear_log() {
    LOG_BUFFER.lock().unwrap().clear();
}
