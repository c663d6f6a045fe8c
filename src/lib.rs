//! Four-operation arithmetic dispatcher.
//!
//! [`Calculator`] maps each [`OperationKind`] to a stateless [`Operation`]
//! and returns a [`CalculationResult`] for every request. Domain failures
//! (division by zero, an operator with no implementation) are values in the
//! result, never panics.
//!
//! ```
//! use calculator::{Calculator, OperationKind};
//!
//! let calculator = Calculator::new();
//! assert_eq!(calculator.calculate(OperationKind::Addition, 5.0, 3.0).to_string(), "5 + 3 = 8");
//! assert_eq!(
//!     calculator.calculate(OperationKind::Division, 5.0, 0.0).to_string(),
//!     "5 / 0: Error: Division by zero"
//! );
//! ```

pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod operation;
pub mod result;
pub mod types;

pub use calculator::Calculator;
pub use config::Settings;
pub use error::{CalcError, ParseOperationError};
pub use operation::{
    AddOperation, DivideOperation, MultiplyOperation, Operation, SubtractOperation, operation_for,
};
pub use result::{CalculationResult, CalculationView, format};
pub use types::{OperationKind, Operator};
