//! Scanner integration tests
//!
//! - Event-stream lifecycle and error reporting
//! - End-to-end documentation of small VHDL files
//! - JSON-encoded event streams

pub mod tests_documentation;
pub mod tests_scanner;
