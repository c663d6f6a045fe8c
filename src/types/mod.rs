//! Operation identifiers.
//!
//! `OperationKind` is the closed set of supported operations. `Operator` is
//! what a caller actually asked for, which may name no kind at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseOperationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl OperationKind {
    /// Every kind, in declaration order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Addition,
        OperationKind::Subtraction,
        OperationKind::Multiplication,
        OperationKind::Division,
    ];

    /// Operator symbol used when rendering a result.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
        }
    }

    /// Canonical identifier of the kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OperationKind {
    type Err = ParseOperationError;

    /// Accepts a label (any case) or a symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.symbol() == name || kind.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseOperationError::UnknownOperation(name.to_string()))
    }
}

/// The operation slot of a request or result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Known(OperationKind),
    /// A foreign identifier that names no kind
    Unrecognized(String),
}

impl Operator {
    /// Resolve a name to a kind, keeping it verbatim when nothing matches.
    pub fn parse(name: &str) -> Self {
        match name.parse::<OperationKind>() {
            Ok(kind) => Self::Known(kind),
            Err(_) => Self::Unrecognized(name.trim().to_string()),
        }
    }

    pub fn kind(&self) -> Option<OperationKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Unrecognized(_) => None,
        }
    }

    /// Kind symbol, or `?` for an unrecognized identifier.
    pub fn symbol(&self) -> &str {
        match self {
            Self::Known(kind) => kind.symbol(),
            Self::Unrecognized(_) => "?",
        }
    }
}

impl From<OperationKind> for Operator {
    fn from(kind: OperationKind) -> Self {
        Self::Known(kind)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(kind) => kind.fmt(f),
            Self::Unrecognized(name) => f.write_str(name),
        }
    }
}
