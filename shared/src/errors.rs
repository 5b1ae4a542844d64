//! Error types for the calorie estimator

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The estimator input that could not be accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    Weight,
    Sex,
    Activity,
}

impl InputField {
    /// Field name as used in API payloads and CLI flags
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::Weight => "weight",
            InputField::Sex => "sex",
            InputField::Activity => "activity",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimation error
///
/// There is a single kind. The offending field is carried for diagnostics,
/// but the rendered message is the same for every cause so callers can
/// show one generic prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    #[error("Invalid input: provide a valid weight, sex and activity level")]
    InvalidInput { field: InputField },
}

impl EstimateError {
    pub fn invalid(field: InputField) -> Self {
        EstimateError::InvalidInput { field }
    }

    /// Which input was rejected
    pub fn field(&self) -> InputField {
        match self {
            EstimateError::InvalidInput { field } => *field,
        }
    }
}
