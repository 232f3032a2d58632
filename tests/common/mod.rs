#![allow(dead_code)]

pub mod ring_logger;
pub mod scenario;

pub use ring_logger::{captured, clear_log, init_logger};
pub use scenario::Scenario;
