pub mod mocks;

pub use mocks::{LogEntry, MockLogger, MockProfiler};
