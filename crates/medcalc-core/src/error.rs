use thiserror::Error;

/// Failure raised by a calculator.
///
/// Everything except [`CalcError::UnknownScore`] and [`CalcError::Internal`]
/// is an invalid-argument condition: it is raised before any computation and
/// names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("missing required parameter: {0}")]
    MissingField(String),

    #[error("{field} must be {expected}")]
    InvalidType { field: String, expected: String },

    #[error("{field} must be one of [{allowed}], got '{value}'")]
    InvalidChoice {
        field: String,
        value: String,
        allowed: String,
    },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("{0}")]
    Constraint(String),

    #[error("unknown score: {0}")]
    UnknownScore(String),

    #[error("internal calculation error: {0}")]
    Internal(String),
}

impl CalcError {
    /// Cross-field or logical rule violation.
    pub fn constraint(message: impl Into<String>) -> Self {
        CalcError::Constraint(message.into())
    }

    pub fn out_of_range<T: std::fmt::Display>(field: &str, value: T, min: T, max: T) -> Self {
        CalcError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// True for the client-correctable kinds (bad type, vocabulary, range or
    /// logical constraint).
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, CalcError::UnknownScore(_) | CalcError::Internal(_))
    }
}
