//! Load strictly quoted `KEY='value'` pairs from a `.env` file into the
//! process environment, without overriding variables that are already set.
//!
//! The parsing core works on raw bytes and needs only `alloc`; reading files
//! and touching the process environment live behind the default `std`
//! feature.
//!
//! ```rust
//! use quotenv::parse;
//!
//! let outcome = parse(b"GREETING='hello world' NAME=\"quotenv\"");
//! let map = outcome.into_result().unwrap();
//! assert_eq!(map["GREETING"], "hello world");
//! assert_eq!(map["NAME"], "quotenv");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod options;
mod parser;
mod scanner;

#[cfg(feature = "std")]
mod env;
#[cfg(feature = "std")]
mod loader;
#[cfg(feature = "std")]
mod source;

pub use error::{ParseError, ValueFault};
pub use options::ParserOptions;
pub use parser::{EnvMap, ParseOutcome, parse, parse_with_options};
pub use scanner::{Scanner, Statement};

#[cfg(feature = "std")]
pub use env::{Environment, ProcessEnv};
#[cfg(feature = "std")]
pub use error::LoadError;
#[cfg(feature = "std")]
pub use loader::{
    LoadReport, apply, load, load_from, load_path, load_with, read, read_from, read_path,
};
#[cfg(feature = "std")]
pub use options::{DEFAULT_PATH, LoadOptions};
#[cfg(feature = "std")]
pub use source::{FileSource, ReaderSource, Source};
