use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinearModelError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinearModelError {
    #[error("shape mismatch in {operation}: expected {expected}, found {found}")]
    ShapeMismatch {
        operation: &'static str,
        expected: String,
        found: String,
    },
    #[error("{0} not fitted. Call fit() first.")]
    NotFitted(&'static str),
    #[error("division by zero: {0}")]
    DivisionByZero(String),
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

impl LinearModelError {
    pub fn shape(
        operation: &'static str,
        expected: impl std::fmt::Display,
        found: impl std::fmt::Display,
    ) -> Self {
        LinearModelError::ShapeMismatch {
            operation,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn division_by_zero(message: impl Into<String>) -> Self {
        LinearModelError::DivisionByZero(message.into())
    }
}
