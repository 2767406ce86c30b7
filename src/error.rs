//! Error types for the value bridge.
//!
//! Formatting itself never fails: a malformed specifier is emitted as literal
//! text and a missing argument renders as an empty or `NaN` value. Errors only
//! arise at the edges of the crate:
//!
//! - **Serialization**: converting a `T: Serialize` into a [`Value`](crate::Value)
//!   (e.g. map keys that are not strings)
//! - **Extraction**: `TryFrom<Value>` for primitive types
//!
//! ## Examples
//!
//! ```rust
//! use strformat::{Error, Value};
//! use std::convert::TryFrom;
//!
//! let result = i64::try_from(Value::from("not a number"));
//! assert!(matches!(result, Err(Error::TypeMismatch { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors produced by the value bridge.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Type mismatch while extracting a primitive from a [`Value`](crate::Value)
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Unsupported type for conversion into a value
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strformat::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error for types that cannot become a value.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strformat::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
