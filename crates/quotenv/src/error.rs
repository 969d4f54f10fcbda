use thiserror::Error;

/// A statement that could not be parsed.
///
/// Offsets are byte positions in the (CR-LF normalized) input. The message
/// never echoes the input itself, so a malformed secret cannot end up in a
/// log line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The key is empty, missing its `=`, or breaks the key grammar.
    #[error("invalid key at byte {offset}")]
    Key {
        /// Start of the offending statement.
        offset: usize,
    },
    /// The value after `=` is missing or not properly quoted.
    #[error("{fault} at byte {offset}")]
    Value {
        /// What was wrong with the value.
        fault: ValueFault,
        /// Start of the value token.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset the error refers to.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            ParseError::Key { offset } | ParseError::Value { offset, .. } => offset,
        }
    }

    /// Whether the key grammar was violated.
    #[must_use]
    pub fn is_key_error(&self) -> bool {
        matches!(self, ParseError::Key { .. })
    }

    /// Whether the value was missing, unquoted or unterminated.
    #[must_use]
    pub fn is_value_error(&self) -> bool {
        matches!(self, ParseError::Value { .. })
    }
}

/// Why a value was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFault {
    /// Nothing follows the `=`.
    #[error("no value")]
    Missing,
    /// The value does not start with `'` or `"`.
    #[error("invalid value: expected opening quote")]
    Unquoted,
    /// No closing quote of the same kind before the end of input.
    #[error("invalid value: unterminated quote")]
    Unterminated,
}

/// Failure of a `read` or `load` call.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum LoadError {
    /// The backing file or reader could not be read.
    #[error("source unavailable: {0}")]
    Source(#[from] std::io::Error),
    /// The content was read but is malformed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// A parsed entry that the process environment cannot hold, such as a
    /// value with a NUL byte.
    #[error("variable {key} cannot be stored in the environment")]
    Unrepresentable {
        /// The offending key.
        key: std::string::String,
    },
}
