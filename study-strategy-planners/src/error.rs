//! Planner Error Types
//!
//! Every planner failure is one of three kinds, each with a stable
//! machine-readable code:
//!
//! | Code | Description | Recovery |
//! |------|-------------|----------|
//! | INVALID_INPUT | A precondition on the request failed | Fix the request |
//! | MISSING_FIELD | A required field was absent | Provide the field |
//! | ARITHMETIC_FAULT | A computation precondition failed | Adjust the inputs |
//!
//! The HTTP layer maps these deliberately: `InvalidInput` and
//! `MissingField` are client errors (400), `ArithmeticFault` is an
//! unprocessable computation (422).

use thiserror::Error;

/// Errors produced by planner validation and execution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// A request precondition failed (empty sequence, non-positive budget,
    /// missing trait key, wrong shape).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required field was absent from a request element.
    #[error("missing field: {0}")]
    MissingField(String),

    /// The inputs make the computation undefined (e.g. a zero divisor).
    #[error("arithmetic fault: {0}")]
    ArithmeticFault(String),
}

impl PlannerError {
    /// Stable error code for logs and machine consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::ArithmeticFault(_) => "ARITHMETIC_FAULT",
        }
    }
}

impl From<validator::ValidationErrors> for PlannerError {
    fn from(err: validator::ValidationErrors) -> Self {
        PlannerError::InvalidInput(err.to_string())
    }
}
