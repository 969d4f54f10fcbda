#![no_main]
use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quotenv::{ParseOutcome, ParserOptions, parse_with_options};

static WS_TABLE: &[&str] = &[
    " ", "\t", "\n", "\r", "\r\n", "\u{0B}", "\u{0C}", "\u{85}", "\u{A0}", "\u{1680}",
    "\u{2000}", "\u{2003}", "\u{2028}", "\u{2029}", "\u{3000}",
];

/// Whitespace allowed around `=`; no line feed, no CR-LF.
static INLINE_WS_TABLE: &[&str] = &[" ", "\t", "\r", "\u{0B}", "\u{0C}", "\u{85}", "\u{A0}"];

#[derive(Debug, Arbitrary)]
struct Statement {
    key_tail: String,
    value: String,
    double_quoted: bool,
    pads: [u8; 3],
    separator: u8,
}

#[derive(Debug, Arbitrary)]
enum Input {
    /// Raw bytes: must never panic and must be deterministic.
    Raw { preserve_crlf: bool, bytes: Vec<u8> },
    /// Generated well-formed statements: must parse back exactly.
    Statements(Vec<Statement>),
}

fn pick(table: &'static [&'static str], seed: u8) -> &'static str {
    table[usize::from(seed) % table.len()]
}

fn render(statements: &[Statement]) -> (String, BTreeMap<String, String>) {
    let mut src = String::new();
    let mut expected = BTreeMap::new();

    for st in statements {
        let quote = if st.double_quoted { '"' } else { '\'' };
        let mut key = String::from("K");
        // ASCII only: `is_alphanumeric` admits characters the key grammar rejects.
        key.extend(st.key_tail.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_'));
        // CR-LF inside a value would be normalized; keep values byte-stable.
        let value: String = st.value.chars().filter(|c| *c != quote && *c != '\r').collect();

        src.push_str(pick(INLINE_WS_TABLE, st.pads[0]));
        src.push_str(&key);
        src.push_str(pick(WS_TABLE, st.pads[1]));
        src.push('=');
        src.push_str(pick(INLINE_WS_TABLE, st.pads[2]));
        src.push(quote);
        src.push_str(&value);
        src.push(quote);
        src.push_str(pick(WS_TABLE, st.separator));

        expected.insert(key, value);
    }

    (src, expected)
}

fn run(input: Input) {
    match input {
        Input::Raw { preserve_crlf, bytes } => {
            let options = ParserOptions {
                preserve_crlf,
                panic_on_error: false,
            };
            let first = parse_with_options(&bytes, options);
            let second = parse_with_options(&bytes, options);
            assert_eq!(first, second);
            if let Some(error) = first.error() {
                assert!(error.offset() <= bytes.len());
            }
        }
        Input::Statements(statements) => {
            let (src, expected) = render(&statements);
            let outcome = parse_with_options(
                src.as_bytes(),
                ParserOptions {
                    preserve_crlf: false,
                    panic_on_error: true,
                },
            );
            assert_eq!(outcome, ParseOutcome::Complete(expected), "{src:?}");
        }
    }
}

fuzz_target!(|input: Input| run(input));
