use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the ecolens workspace.
///
/// Contract violations (too few points, unequal paired lengths, bad parameters)
/// and data/source failures are reported here. Non-finite numeric results such
/// as the correlation of a constant series are ordinary values, never errors.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EcolensError {
    /// Fewer observations than the operation requires.
    #[error("insufficient data for {what}: need at least {required}, got {actual}")]
    InsufficientData {
        /// Operation or series that lacked data (e.g. "correlation").
        what: String,
        /// Minimum number of observations required.
        required: usize,
        /// Number of observations supplied.
        actual: usize,
    },

    /// A paired-series operation received inputs of unequal length.
    #[error("length mismatch: left has {left} values, right has {right}")]
    LengthMismatch {
        /// Length of the first input.
        left: usize,
        /// Length of the second input.
        right: usize,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Malformed input data (unparseable rows, unsorted or duplicate dates).
    #[error("data issue: {0}")]
    Data(String),

    /// A series could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "series for cpi".
        what: String,
    },

    /// An individual series source returned an error.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Source name that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// All eligible sources failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<EcolensError>),
}

impl EcolensError {
    /// Helper: build an `InsufficientData` error.
    pub fn insufficient(what: impl Into<String>, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            what: what.into(),
            required,
            actual,
        }
    }

    /// Helper: build a `LengthMismatch` error.
    #[must_use]
    pub const fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Returns true if this error reports a caller contract violation
    /// (`InsufficientData`, `LengthMismatch`, `InvalidArg`).
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::LengthMismatch { .. } | Self::InvalidArg(_)
        )
    }

    /// Flatten nested `AllSourcesFailed` structures into a plain vector.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllSourcesFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
