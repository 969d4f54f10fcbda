//! `read` and `load`: the file-backed entry points.
//!
//! Loading never overrides a variable that is already defined, and applies
//! nothing at all when the file fails to parse.

use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::{
    env::{Environment, ProcessEnv},
    error::LoadError,
    options::{LoadOptions, ParserOptions},
    parser::{EnvMap, ParseOutcome, parse_with_options},
    scanner::is_valid_key,
    source::{FileSource, Source},
};

/// Counts from a [`load`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Variables written to the environment.
    pub loaded: usize,
    /// Variables left alone because they were already defined.
    pub skipped_existing: usize,
}

/// Parse `.env` in the working directory without touching the environment.
///
/// # Errors
///
/// [`LoadError::Source`] if the file cannot be read. Parse failures are
/// reported inside the [`ParseOutcome`], together with the statements
/// accepted before them.
pub fn read() -> Result<ParseOutcome, LoadError> {
    read_path(LoadOptions::default().path)
}

/// Parse the file at `path`.
///
/// # Errors
///
/// See [`read`].
pub fn read_path(path: impl AsRef<Path>) -> Result<ParseOutcome, LoadError> {
    read_from(
        &mut FileSource::new(path.as_ref()),
        ParserOptions::default(),
    )
}

/// Fetch everything from `source`, then parse it.
///
/// # Errors
///
/// See [`read`].
pub fn read_from<S: Source + ?Sized>(
    source: &mut S,
    options: ParserOptions,
) -> Result<ParseOutcome, LoadError> {
    let bytes = source.fetch()?;
    Ok(parse_with_options(&bytes, options))
}

/// Load `.env` from the working directory into the process environment.
///
/// ```no_run
/// fn main() -> Result<(), quotenv::LoadError> {
///     quotenv::load()?;
///     // ...
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// [`LoadError::Source`] if the file cannot be read, [`LoadError::Parse`] if
/// it is malformed, [`LoadError::Unrepresentable`] if a value holds a NUL
/// byte. Nothing is set in any of these cases.
pub fn load() -> Result<LoadReport, LoadError> {
    load_with(&LoadOptions::default(), &mut ProcessEnv)
}

/// Load the file at `path` into the process environment.
///
/// # Errors
///
/// See [`load`].
pub fn load_path(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    load_with(
        &LoadOptions::default().with_path(path.as_ref()),
        &mut ProcessEnv,
    )
}

/// Load the file named by `options` into `env`.
///
/// # Errors
///
/// See [`load`].
#[instrument(level = "debug", skip_all, fields(path = %options.path.display()))]
pub fn load_with<E: Environment + ?Sized>(
    options: &LoadOptions,
    env: &mut E,
) -> Result<LoadReport, LoadError> {
    load_from(&mut FileSource::new(&options.path), options.parser, env)
}

/// Fetch and parse `source`, then apply the result to `env`.
///
/// # Errors
///
/// See [`load`].
pub fn load_from<S, E>(
    source: &mut S,
    options: ParserOptions,
    env: &mut E,
) -> Result<LoadReport, LoadError>
where
    S: Source + ?Sized,
    E: Environment + ?Sized,
{
    let outcome = read_from(source, options).inspect_err(|error| {
        warn!(%error, "could not read source");
    })?;
    let map = outcome.into_result().inspect_err(|error| {
        warn!(%error, "source is malformed, nothing loaded");
    })?;
    apply(&map, env)
}

/// Set every entry of `map` whose key is not yet defined in `env`.
///
/// Every entry is checked before anything is set, then the existing keys are
/// enumerated once.
///
/// # Errors
///
/// [`LoadError::Unrepresentable`] if a key breaks the key grammar or a value
/// holds a NUL byte. The environment is left untouched.
pub fn apply<E: Environment + ?Sized>(
    map: &EnvMap,
    env: &mut E,
) -> Result<LoadReport, LoadError> {
    if let Some((key, _)) = map
        .iter()
        .find(|(key, value)| !is_valid_key(key) || value.contains('\0'))
    {
        warn!(key = key.as_str(), "variable cannot be stored, nothing loaded");
        return Err(LoadError::Unrepresentable { key: key.clone() });
    }

    let existing = env.keys();
    let mut report = LoadReport::default();

    for (key, value) in map {
        if existing.contains(key) {
            report.skipped_existing += 1;
        } else {
            env.set(key, value);
            report.loaded += 1;
        }
    }

    debug!(
        loaded = report.loaded,
        skipped_existing = report.skipped_existing,
        "applied variables"
    );
    Ok(report)
}
