//! Parse loop: drive the [`Scanner`] over a whole buffer and collect the
//! statements into a map.
//!
//! The loop has two terminal states. It is `Complete` when the input is
//! exhausted, or `Failed` at the first malformed statement; there is no
//! resynchronization. A failed parse still reports every statement accepted
//! before the faulty one.

use alloc::{borrow::Cow, collections::BTreeMap, string::String};

use bstr::ByteSlice;
use tracing::{debug, trace};

use crate::{error::ParseError, options::ParserOptions, scanner::Scanner};

/// Parsed variables, keyed by name. Later duplicates overwrite earlier ones.
pub type EnvMap = BTreeMap<String, String>;

/// Result of parsing a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every statement was accepted.
    Complete(EnvMap),
    /// Parsing stopped at a malformed statement.
    Failed {
        /// Statements accepted before the error.
        partial: EnvMap,
        /// The first error encountered.
        error: ParseError,
    },
}

impl ParseOutcome {
    /// The accepted statements, complete or not.
    #[must_use]
    pub fn map(&self) -> &EnvMap {
        match self {
            ParseOutcome::Complete(map) | ParseOutcome::Failed { partial: map, .. } => map,
        }
    }

    /// The error that stopped parsing, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ParseError> {
        match self {
            ParseOutcome::Complete(_) => None,
            ParseOutcome::Failed { error, .. } => Some(error),
        }
    }

    /// Whether the whole buffer parsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, ParseOutcome::Complete(_))
    }

    /// Split into the accepted statements and the error, if any.
    #[must_use]
    pub fn into_parts(self) -> (EnvMap, Option<ParseError>) {
        match self {
            ParseOutcome::Complete(map) => (map, None),
            ParseOutcome::Failed { partial, error } => (partial, Some(error)),
        }
    }

    /// Discard the partial map on failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] if any statement was malformed.
    pub fn into_result(self) -> Result<EnvMap, ParseError> {
        match self {
            ParseOutcome::Complete(map) => Ok(map),
            ParseOutcome::Failed { error, .. } => Err(error),
        }
    }
}

/// Parse `src` with the default options.
#[must_use]
pub fn parse(src: &[u8]) -> ParseOutcome {
    parse_with_options(src, ParserOptions::default())
}

/// Parse `src` into a map of variables.
///
/// ```rust
/// use quotenv::{ParseOutcome, ParserOptions, parse_with_options};
///
/// let outcome = parse_with_options(b"A='1' B=2", ParserOptions::default());
/// let ParseOutcome::Failed { partial, error } = outcome else {
///     panic!("expected failure");
/// };
/// assert_eq!(partial["A"], "1");
/// assert!(error.is_value_error());
/// ```
#[must_use]
pub fn parse_with_options(src: &[u8], options: ParserOptions) -> ParseOutcome {
    let src = normalize_line_endings(src, options);
    let mut map = EnvMap::new();

    for statement in Scanner::new(&src) {
        match statement {
            Ok(statement) => {
                trace!(key = statement.key, consumed = statement.consumed, "statement");
                map.insert(statement.key.into(), statement.value.into_owned());
            }
            Err(error) => {
                #[cfg(any(test, feature = "fuzzing"))]
                if options.panic_on_error {
                    panic!("{error}");
                }
                debug!(%error, accepted = map.len(), "parse failed");
                return ParseOutcome::Failed {
                    partial: map,
                    error,
                };
            }
        }
    }

    ParseOutcome::Complete(map)
}

/// Collapse every `\r\n` to `\r`, borrowing when there is nothing to do.
fn normalize_line_endings(src: &[u8], options: ParserOptions) -> Cow<'_, [u8]> {
    if options.preserve_crlf || src.find(b"\r\n").is_none() {
        Cow::Borrowed(src)
    } else {
        Cow::Owned(src.replace(b"\r\n", b"\r"))
    }
}
