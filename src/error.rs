use thiserror::Error;

/// Domain failures reported inside a `CalculationResult`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Error: Division by zero")]
    DivisionByZero,

    #[error("Error: Unsupported operation {0}")]
    UnsupportedOperation(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseOperationError {
    #[error("Unknown operation '{0}'. Expected one of: addition, subtraction, multiplication, division, +, -, *, /")]
    UnknownOperation(String),
}
