//! Error type of the JSON scripting driver

use crate::error::CapacityError;
use std::fmt;

/// Failure that aborts a whole driver run.
///
/// Per-step problems (unknown command, missing operand, bad slot) do
/// not abort; they skip the step with a diagnostic on stderr.
#[derive(Debug)]
pub enum ScriptError {
    /// The input is not well-formed JSON.
    Json(serde_json::Error),
    /// The top-level JSON value is not an array of steps.
    NotAnArray,
    /// A cube list could not grow.
    Capacity(CapacityError),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Json(err) => write!(f, "JSON read error: {}", err),
            ScriptError::NotAnArray => write!(f, "JSON input must be an array of step objects"),
            ScriptError::Capacity(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Json(err) => Some(err),
            ScriptError::Capacity(err) => Some(err),
            ScriptError::NotAnArray => None,
        }
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(err: serde_json::Error) -> Self {
        ScriptError::Json(err)
    }
}

impl From<CapacityError> for ScriptError {
    fn from(err: CapacityError) -> Self {
        ScriptError::Capacity(err)
    }
}
