//! Demo command - print a fixed set of sample calculations.

use crate::calculator::Calculator;
use crate::config::OutputFormat;
use crate::io::{Envelope, ExitCode};
use crate::result::CalculationResult;
use crate::types::OperationKind;

use super::print_envelope;

/// Inputs shown by `calc demo`, one per line of output.
pub const SAMPLES: [(OperationKind, f64, f64); 5] = [
    (OperationKind::Addition, 5.0, 3.0),
    (OperationKind::Subtraction, 5.0, 3.0),
    (OperationKind::Multiplication, 5.0, 3.0),
    (OperationKind::Division, 6.0, 3.0),
    (OperationKind::Division, 6.0, 0.0),
];

pub fn sample_results(calculator: &Calculator) -> Vec<CalculationResult> {
    SAMPLES
        .iter()
        .map(|&(kind, a, b)| calculator.calculate(kind, a, b))
        .collect()
}

/// Run demo command. The division-by-zero sample is expected, so the
/// command exits successfully in both output formats.
pub fn run(calculator: &Calculator, format: OutputFormat) -> ExitCode {
    let results = sample_results(calculator);

    match format {
        OutputFormat::Json => {
            print_envelope(&Envelope::from_results(&results).with_exit_code(ExitCode::Success))
        }
        OutputFormat::Text => {
            for result in &results {
                println!("{result}");
            }
            ExitCode::Success
        }
    }
}
