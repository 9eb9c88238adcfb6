//! Error types for the view stage
//!
//! This module defines the errors surfaced by the stager and the bindings.
//! Under the default slot policy the stager itself never fails.

use std::fmt;

/// Result type for view stage operations
pub type Result<T> = std::result::Result<T, Error>;

/// View stage errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A named slot could not be resolved on the program (strict policy only)
    MissingSlot {
        /// Slot name as declared in the shader
        slot: &'static str,
        /// Stager operation that needed the slot
        operation: &'static str,
    },

    /// Program handle unknown to the binding
    InvalidProgram(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingSlot { slot, operation } => {
                write!(f, "Missing parameter slot '{}' (required by {})", slot, operation)
            }
            Error::InvalidProgram(msg) => write!(f, "Invalid program: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an error and log it at ERROR severity with file:line
///
/// # Example
///
/// ```ignore
/// let err = stage_err!("viewstage::MemoryBinding", Error::InvalidProgram("removed".to_string()));
/// ```
#[macro_export]
macro_rules! stage_err {
    ($source:expr, $error:expr) => {{
        let error: $crate::viewstage::Error = $error;
        $crate::viewstage::Logging::log_detailed(
            $crate::viewstage::log::LogSeverity::Error,
            $source,
            error.to_string(),
            file!(),
            line!(),
        );
        error
    }};
}

/// Log an error and return it from the enclosing function
#[macro_export]
macro_rules! stage_bail {
    ($source:expr, $error:expr) => {
        return Err($crate::stage_err!($source, $error))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
