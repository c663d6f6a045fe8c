//! Output handling for the CLI.
//!
//! This module provides:
//! - The JSON envelope used by `--json`
//! - Consistent exit codes

pub mod envelope;
pub mod exit_code;

pub use envelope::{Envelope, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;
