//! Stateless implementations of the four arithmetic operations.

use crate::error::CalcError;
use crate::result::CalculationResult;
use crate::types::OperationKind;

/// One arithmetic operation.
///
/// Implementations hold no state; `execute` is a pure function of its
/// operands and reports domain failures inside the returned result.
pub trait Operation: Send + Sync {
    fn kind(&self) -> OperationKind;

    fn execute(&self, a: f64, b: f64) -> CalculationResult;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AddOperation;

#[derive(Debug, Default, Clone, Copy)]
pub struct SubtractOperation;

#[derive(Debug, Default, Clone, Copy)]
pub struct MultiplyOperation;

#[derive(Debug, Default, Clone, Copy)]
pub struct DivideOperation;

impl Operation for AddOperation {
    fn kind(&self) -> OperationKind {
        OperationKind::Addition
    }

    fn execute(&self, a: f64, b: f64) -> CalculationResult {
        CalculationResult::ok(self.kind(), a, b, a + b)
    }
}

impl Operation for SubtractOperation {
    fn kind(&self) -> OperationKind {
        OperationKind::Subtraction
    }

    fn execute(&self, a: f64, b: f64) -> CalculationResult {
        CalculationResult::ok(self.kind(), a, b, a - b)
    }
}

impl Operation for MultiplyOperation {
    fn kind(&self) -> OperationKind {
        OperationKind::Multiplication
    }

    fn execute(&self, a: f64, b: f64) -> CalculationResult {
        CalculationResult::ok(self.kind(), a, b, a * b)
    }
}

impl Operation for DivideOperation {
    fn kind(&self) -> OperationKind {
        OperationKind::Division
    }

    fn execute(&self, a: f64, b: f64) -> CalculationResult {
        // -0.0 compares equal to 0.0
        if b == 0.0 {
            return CalculationResult::failed(self.kind(), a, b, CalcError::DivisionByZero);
        }
        CalculationResult::ok(self.kind(), a, b, a / b)
    }
}

static ADD: AddOperation = AddOperation;
static SUBTRACT: SubtractOperation = SubtractOperation;
static MULTIPLY: MultiplyOperation = MultiplyOperation;
static DIVIDE: DivideOperation = DivideOperation;

/// Shared implementation for `kind`.
pub fn operation_for(kind: OperationKind) -> &'static dyn Operation {
    match kind {
        OperationKind::Addition => &ADD,
        OperationKind::Subtraction => &SUBTRACT,
        OperationKind::Multiplication => &MULTIPLY,
        OperationKind::Division => &DIVIDE,
    }
}
