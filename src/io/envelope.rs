//! JSON output envelope shared by the CLI commands.
//!
//! Every `--json` response has the same outer shape so scripts can branch
//! on `status` and `code` without inspecting the payload.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::io::ExitCode;
use crate::result::{CalculationResult, CalculationView};

/// Schema version for this envelope format.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Every calculation succeeded
    Success,
    /// Some calculations succeeded, some failed
    PartialSuccess,
    /// Operation failed
    Error,
}

/// Machine-readable result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Ok,
    DivisionByZero,
    UnsupportedOperation,
    ConfigError,
}

impl From<&CalcError> for ResultCode {
    fn from(error: &CalcError) -> Self {
        match error {
            CalcError::DivisionByZero => Self::DivisionByZero,
            CalcError::UnsupportedOperation(_) => Self::UnsupportedOperation,
        }
    }
}

/// Unified JSON output envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    /// Operation outcome
    pub status: Status,

    /// Machine-readable result code
    pub code: ResultCode,

    /// Exit code the process reports alongside this envelope
    pub exit_code: ExitCode,

    /// Human-readable message
    pub message: String,

    /// Result payload (null on error)
    pub data: Option<T>,

    pub schema_version: String,
}

impl<T> Envelope<T> {
    /// Create a success envelope with data.
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            code: ResultCode::Ok,
            exit_code: ExitCode::Success,
            message: "Operation completed successfully".to_string(),
            data: Some(data),
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    /// Create an envelope for a calculation that failed but still has a payload.
    pub fn failure(code: ResultCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status::Error,
            code,
            exit_code: ExitCode::CalculationFailed,
            message: message.into(),
            data: Some(data),
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    /// Create an error envelope without data.
    pub fn error(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            code,
            exit_code: ExitCode::GeneralError,
            message: message.into(),
            data: None,
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_exit_code(mut self, exit_code: ExitCode) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error>
    where
        T: Serialize,
    {
        serde_json::to_string_pretty(self)
    }
}

impl Envelope<CalculationView> {
    /// Wrap a single calculation.
    pub fn from_result(result: &CalculationResult) -> Self {
        match result.error() {
            None => Self::success(result.view()).with_message(result.to_string()),
            Some(error) => Self::failure(error.into(), error.to_string(), result.view()),
        }
    }
}

impl Envelope<Vec<CalculationView>> {
    /// Wrap a batch of calculations; any failure makes the batch partial.
    pub fn from_results(results: &[CalculationResult]) -> Self {
        let views: Vec<CalculationView> = results.iter().map(CalculationResult::view).collect();

        let Some(code) = results.iter().find_map(|r| r.error().map(ResultCode::from)) else {
            return Self::success(views)
                .with_message(format!("{} calculations succeeded", results.len()));
        };

        let failed = results.iter().filter(|r| !r.success()).count();
        let status = if failed == results.len() {
            Status::Error
        } else {
            Status::PartialSuccess
        };

        Self::failure(
            code,
            format!("{failed} of {} calculations failed", results.len()),
            views,
        )
        .with_status(status)
    }
}
