//! Calculate command - run a single operation.

use crate::calculator::Calculator;
use crate::config::OutputFormat;
use crate::io::{Envelope, ExitCode};

use super::print_envelope;

/// Run calculate command, printing the rendered result.
pub fn run(calculator: &Calculator, operation: &str, a: f64, b: f64, format: OutputFormat) -> ExitCode {
    let result = calculator.calculate_named(operation, a, b);

    match format {
        OutputFormat::Json => print_envelope(&Envelope::from_result(&result)),
        OutputFormat::Text => {
            println!("{result}");
            ExitCode::for_success(result.success())
        }
    }
}
