use thiserror::Error;

use crate::domain::Field;

/// Raised when form input cannot become a [`crate::domain::Product`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be {expected} (got {input:?})")]
    Format {
        field: Field,
        expected: &'static str,
        input: String,
    },
}

impl ValidationError {
    pub fn price(input: &str) -> Self {
        ValidationError::Format {
            field: Field::Price,
            expected: "decimal",
            input: input.to_string(),
        }
    }

    pub fn quantity(input: &str) -> Self {
        ValidationError::Format {
            field: Field::Quantity,
            expected: "integer",
            input: input.to_string(),
        }
    }

    /// The field whose input was rejected.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Format { field, .. } => *field,
        }
    }
}
