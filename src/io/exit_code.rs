//! Process exit codes for the CLI.

use serde::{Deserialize, Serialize};

/// Exit status reported by every command.
///
/// Serialized as its numeric value so JSON output carries the same code the
/// process exits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed and every calculation succeeded
    Success = 0,
    /// A calculation returned a domain failure
    CalculationFailed = 1,
    /// Bad configuration or I/O failure outside the calculation itself
    GeneralError = 2,
}

impl ExitCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Exit code for a finished calculation.
    pub fn for_success(success: bool) -> Self {
        if success {
            Self::Success
        } else {
            Self::CalculationFailed
        }
    }
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code.as_u8()
    }
}

impl TryFrom<u8> for ExitCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::CalculationFailed),
            2 => Ok(Self::GeneralError),
            other => Err(format!("unknown exit code {other}")),
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.as_u8())
    }
}
