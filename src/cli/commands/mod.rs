//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module.

pub mod calculate;
pub mod demo;
pub mod init;

use serde::Serialize;

use crate::io::{Envelope, ExitCode};

/// Print an envelope as pretty JSON, returning the exit code it carries.
pub fn print_envelope<T: Serialize>(envelope: &Envelope<T>) -> ExitCode {
    match envelope.to_json() {
        Ok(json) => {
            println!("{json}");
            envelope.exit_code
        }
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            ExitCode::GeneralError
        }
    }
}
