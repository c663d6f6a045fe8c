//! Operation registry and dispatcher.

use std::collections::HashMap;

use crate::debug_event;
use crate::error::CalcError;
use crate::operation::{Operation, operation_for};
use crate::result::CalculationResult;
use crate::types::{OperationKind, Operator};

/// Routes a two-operand request to the operation registered for its kind.
///
/// The registry is filled once in [`Calculator::new`] and never mutated,
/// so a shared `&Calculator` can be used from any number of threads.
pub struct Calculator {
    operations: HashMap<OperationKind, &'static dyn Operation>,
}

impl Calculator {
    /// Create a calculator with every kind registered.
    pub fn new() -> Self {
        let operations = OperationKind::ALL
            .into_iter()
            .map(|kind| (kind, operation_for(kind)))
            .collect();
        Self { operations }
    }

    /// Run `operation` on `a` and `b`.
    ///
    /// Never panics: a divisor of zero or an operator with no registered
    /// implementation comes back as a failed result.
    pub fn calculate(&self, operation: impl Into<Operator>, a: f64, b: f64) -> CalculationResult {
        let operation = operation.into();
        let registered = operation
            .kind()
            .and_then(|kind| self.operations.get(&kind));

        match registered {
            Some(implementation) => {
                let result = implementation.execute(a, b);
                debug_event!("calculator", "dispatched", "{result}");
                result
            }
            None => {
                tracing::warn!("[calculator] unsupported operation '{operation}'");
                let identifier = operation.to_string();
                CalculationResult::failed(
                    operation,
                    a,
                    b,
                    CalcError::UnsupportedOperation(identifier),
                )
            }
        }
    }

    /// Dispatch by label (`"division"`) or symbol (`"/"`).
    pub fn calculate_named(&self, name: &str, a: f64, b: f64) -> CalculationResult {
        self.calculate(Operator::parse(name), a, b)
    }

    pub fn supports(&self, kind: OperationKind) -> bool {
        self.operations.contains_key(&kind)
    }

    /// Registered kinds in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = OperationKind> + '_ {
        OperationKind::ALL
            .into_iter()
            .filter(|kind| self.supports(*kind))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
