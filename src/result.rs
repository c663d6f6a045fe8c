//! The value returned by every calculation.

use std::fmt;

use serde::Serialize;

use crate::error::CalcError;
use crate::types::Operator;

/// Inputs of one calculation together with its outcome.
///
/// `success()` is derived from `outcome`, so the flag and the value slot
/// always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub operation: Operator,
    pub operand1: f64,
    pub operand2: f64,
    pub outcome: Result<f64, CalcError>,
}

impl CalculationResult {
    pub fn ok(operation: impl Into<Operator>, operand1: f64, operand2: f64, value: f64) -> Self {
        Self {
            operation: operation.into(),
            operand1,
            operand2,
            outcome: Ok(value),
        }
    }

    pub fn failed(
        operation: impl Into<Operator>,
        operand1: f64,
        operand2: f64,
        error: CalcError,
    ) -> Self {
        Self {
            operation: operation.into(),
            operand1,
            operand2,
            outcome: Err(error),
        }
    }

    pub fn success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn value(&self) -> Option<f64> {
        self.outcome.as_ref().ok().copied()
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.outcome.as_ref().err()
    }

    /// Human-readable error message, if the calculation failed.
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn view(&self) -> CalculationView {
        CalculationView {
            operation: self.operation.to_string(),
            symbol: self.operation.symbol().to_string(),
            operand1: self.operand1,
            operand2: self.operand2,
            result: self.value(),
            error: self.message(),
            success: self.success(),
        }
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.operation.symbol();
        match &self.outcome {
            Ok(value) => write!(f, "{} {symbol} {} = {value}", self.operand1, self.operand2),
            Err(error) => write!(f, "{} {symbol} {}: {error}", self.operand1, self.operand2),
        }
    }
}

/// Render a result the way the CLI prints it.
///
/// Success reads `5 + 3 = 8`, failure reads `5 / 0: Error: Division by zero`.
pub fn format(result: &CalculationResult) -> String {
    result.to_string()
}

/// Flat, serializable form of a result for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationView {
    pub operation: String,
    pub symbol: String,
    pub operand1: f64,
    pub operand2: f64,
    pub result: Option<f64>,
    pub error: Option<String>,
    pub success: bool,
}
