#![allow(missing_docs, dead_code)]

use std::{fs, path::Path};

/// A representative `.env` file: CR-LF and LF line endings, both quote
/// kinds, padding, an empty value and two statements sharing a line.
pub const SAMPLE: &str = "DATABASE_URL='postgres://localhost/app'\r\n\
    API_TOKEN = \"s3cr3t'token\"\n\
    \tEMPTY=''\n\
    GREETING='hello\r\nworld'   PORT=\"8080\"\n";

pub const SAMPLE_ENTRIES: [(&str, &str); 5] = [
    ("API_TOKEN", "s3cr3t'token"),
    ("DATABASE_URL", "postgres://localhost/app"),
    ("EMPTY", ""),
    ("GREETING", "hello\rworld"),
    ("PORT", "8080"),
];

/// Same shape, but the third statement is malformed.
pub const BROKEN: &str = "FIRST='1'\nSECOND='2'\nTHIRD=3\nFOURTH='4'\n";

pub fn write_env(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join(".env");
    fs::write(&path, contents).expect("write .env");
    path
}

/// Route the crate's `tracing` output through the test harness. Filter with
/// `RUST_LOG`, e.g. `RUST_LOG=quotenv=trace`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
