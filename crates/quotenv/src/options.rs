/// Configuration options for the statement parser.
///
/// # Examples
///
/// ```rust
/// use quotenv::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     preserve_crlf: true,
///     ..Default::default()
/// };
/// let outcome = parse_with_options(b"A='1'\r\nB='2'\r\n", options);
/// assert!(outcome.is_complete());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Whether to keep CR-LF pairs as they are.
    ///
    /// By default every `\r\n` in the input is collapsed to a single `\r`
    /// before scanning. Lone `\r` and `\n` bytes are never touched. The
    /// normalization matters for line breaks between `=` and the opening
    /// quote: a carriage return is skipped there, a line feed is not.
    ///
    /// # Default
    ///
    /// `false`
    pub preserve_crlf: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on parse failures.
    pub panic_on_error: bool,
}

/// File read by [`crate::read`] and [`crate::load`].
#[cfg(feature = "std")]
pub const DEFAULT_PATH: &str = ".env";

/// Configuration for the file-backed loader.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Path of the file to read, relative to the working directory unless
    /// absolute.
    ///
    /// # Default
    ///
    /// `.env`
    pub path: std::path::PathBuf,

    /// Options handed to the parser.
    pub parser: ParserOptions,
}

#[cfg(feature = "std")]
impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH.into(),
            parser: ParserOptions::default(),
        }
    }
}

#[cfg(feature = "std")]
impl LoadOptions {
    /// Read from `path` instead of `.env`.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Replace the parser options.
    #[must_use]
    pub fn with_parser_options(mut self, parser: ParserOptions) -> Self {
        self.parser = parser;
        self
    }
}
