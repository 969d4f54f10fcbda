//! Scanner: owner of the unconsumed input and the statement grammar.
//!
//! A statement is `<key> = <quoted value>`. Statements are separated by any
//! Unicode whitespace, so `A='1' B='2'` on one line is two statements.
//!
//! Two whitespace classes are in play:
//! - separators between statements and the tail of a key use Unicode
//!   `White_Space` (this includes `\n`);
//! - the head of a key and the gap between `=` and the opening quote use
//!   [`is_inline_space`], a Latin-1 set that excludes `\n`.
//!
//! The value grammar has no escapes: a value runs from its opening quote to
//! the next quote byte of the same kind. Quotes are ASCII and UTF-8
//! continuation bytes are always `>= 0x80`, so the byte search never splits
//! a multi-byte character.
//!
//! Invariants
//! - `rest` is always a suffix of the input handed to [`Scanner::new`] and
//!   `offset` is its position in that input.
//! - After the first error the scanner yields nothing further.

use alloc::borrow::Cow;
use core::iter::FusedIterator;

use bstr::ByteSlice;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::{ParseError, ValueFault};

const SINGLE_QUOTE: u8 = b'\'';
const DOUBLE_QUOTE: u8 = b'"';

/// One `key=value` unit extracted from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'src> {
    /// The validated key.
    pub key: &'src str,
    /// The text strictly between the quotes.
    pub value: Cow<'src, str>,
    /// Bytes from the start of the key to just past the closing quote.
    pub consumed: usize,
}

/// Iterates over the statements of a byte buffer.
///
/// ```rust
/// use quotenv::Scanner;
///
/// let mut scanner = Scanner::new(b"A='1'  B=\"two\"");
/// let first = scanner.next().unwrap().unwrap();
/// assert_eq!((first.key, &*first.value), ("A", "1"));
/// let second = scanner.next().unwrap().unwrap();
/// assert_eq!((second.key, &*second.value), ("B", "two"));
/// assert!(scanner.next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    rest: &'src [u8],
    offset: usize,
    failed: bool,
}

impl<'src> Scanner<'src> {
    /// Start scanning `src` from its first byte.
    #[must_use]
    pub fn new(src: &'src [u8]) -> Self {
        Self {
            rest: src,
            offset: 0,
            failed: false,
        }
    }

    /// The input not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &'src [u8] {
        self.rest
    }

    /// Position of [`Self::remaining`] within the original input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn advance_to(&mut self, rest: &'src [u8]) {
        debug_assert!(rest.len() <= self.rest.len());
        self.offset += self.rest.len() - rest.len();
        self.rest = rest;
    }

    /// Skip to the first non-whitespace byte. Returns `false` once the input
    /// is exhausted.
    fn seek_statement(&mut self) -> bool {
        let rest = self.rest;
        self.advance_to(rest.trim_start_with(char::is_whitespace));
        !self.rest.is_empty()
    }

    fn statement(&mut self) -> Result<Statement<'src>, ParseError> {
        let start = self.offset;
        let key = self.key()?;
        let value = self.value()?;
        Ok(Statement {
            key,
            value,
            consumed: self.offset - start,
        })
    }

    /// Split off everything up to the first `=` and validate it as a key.
    /// On success the scanner sits on the first byte of the value token.
    fn key(&mut self) -> Result<&'src str, ParseError> {
        let invalid = ParseError::Key {
            offset: self.offset,
        };
        let rest = self.rest;
        let src = rest.trim_start_with(is_inline_space);
        let eq = src.find_byte(b'=').ok_or(invalid)?;

        let key = src[..eq]
            .trim_end_with(char::is_whitespace)
            .to_str()
            .map_err(|_| invalid)?;
        if !is_valid_key(key) {
            return Err(invalid);
        }

        self.advance_to(src[eq + 1..].trim_start_with(is_inline_space));
        Ok(key)
    }

    fn value(&mut self) -> Result<Cow<'src, str>, ParseError> {
        let offset = self.offset;
        let fail = |fault| ParseError::Value { fault, offset };

        let rest = self.rest;
        let (&quote, body) = rest.split_first().ok_or(fail(ValueFault::Missing))?;
        if quote != SINGLE_QUOTE && quote != DOUBLE_QUOTE {
            return Err(fail(ValueFault::Unquoted));
        }
        let end = body
            .find_byte(quote)
            .ok_or(fail(ValueFault::Unterminated))?;

        self.advance_to(&body[end + 1..]);
        Ok(body[..end].to_str_lossy())
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Statement<'src>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.seek_statement() {
            return None;
        }
        let statement = self.statement();
        self.failed = statement.is_err();
        Some(statement)
    }
}

impl FusedIterator for Scanner<'_> {}

/// A letter, then any number of letters, numbers or underscores.
pub(crate) fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next().is_some_and(is_letter)
        && chars.all(|c| is_letter(c) || c.is_numeric() || c == '_')
}

/// General category L. Narrower than [`char::is_alphabetic`], which also
/// admits letter numbers and some combining marks.
pub(crate) fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Whitespace allowed before a key and between `=` and the value.
///
/// Line feed is deliberately absent.
pub(crate) fn is_inline_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{85}' | '\u{A0}'
    )
}
