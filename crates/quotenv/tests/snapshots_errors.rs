#![expect(missing_docs)]

use core::fmt::Write;

use insta::assert_snapshot;
use quotenv::{LoadError, ParseOutcome, parse};

mod common;

fn render(src: &str) -> String {
    let mut out = String::new();
    match parse(src.as_bytes()) {
        ParseOutcome::Complete(map) => {
            for (key, value) in &map {
                writeln!(out, "{key}={value:?}").unwrap();
            }
        }
        ParseOutcome::Failed { partial, error } => {
            for (key, value) in &partial {
                writeln!(out, "{key}={value:?}").unwrap();
            }
            writeln!(out, "error: {error}").unwrap();
        }
    }
    out
}

#[test]
fn snapshot_sample_file() {
    assert_snapshot!(render(common::SAMPLE), @r#"
    API_TOKEN="s3cr3t'token"
    DATABASE_URL="postgres://localhost/app"
    EMPTY=""
    GREETING="hello\rworld"
    PORT="8080"
    "#);
}

#[test]
fn snapshot_error_messages() {
    assert_snapshot!(render(common::BROKEN), @r#"
    FIRST="1"
    SECOND="2"
    error: invalid value: expected opening quote at byte 27
    "#);
    assert_snapshot!(render("A='1' _B='2'"), @r#"
    A="1"
    error: invalid key at byte 6
    "#);
    assert_snapshot!(render("A=   "), @"error: no value at byte 5");
    assert_snapshot!(render("A='unterminated\""), @"error: invalid value: unterminated quote at byte 2");
}

#[test]
fn snapshot_errors_do_not_echo_values() {
    let secret = "hunter2";
    let rendered = render(&format!("PASSWORD='{secret}\""));
    assert!(!rendered.contains(secret));

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    assert_snapshot!(LoadError::from(io).to_string(), @"source unavailable: no such file");
}
