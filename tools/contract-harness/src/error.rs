use std::fmt;

/// Why a contract case did not pass.
///
/// Transport failures are kept apart from contract violations so a report can
/// tell "service unreachable" from "contract broken".
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContractError {
    /// Non-200 status, network failure or timeout.
    #[error("transport error: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
    /// Body is not JSON, or lacks the expected top-level shape.
    #[error("schema error: {0}")]
    Schema(String),
    #[error("assertion failed: {0}")]
    Assertion(#[from] AssertionFailure),
}

impl ContractError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "TRANSPORT",
            Self::Schema(_) => "SCHEMA",
            Self::Assertion(_) => "ASSERTION",
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub(crate) fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }
}

/// A single violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    /// Index into the result array; `None` for whole-body checks.
    pub record: Option<usize>,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl AssertionFailure {
    pub fn body(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            record: None,
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn record(
        index: usize,
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            record: Some(index),
            ..Self::body(field, expected, actual)
        }
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(i) = self.record {
            write!(f, "record[{i}].")?;
        }
        write!(
            f,
            "{}: expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

impl std::error::Error for AssertionFailure {}
