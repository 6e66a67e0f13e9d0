// SPDX-FileCopyrightText: 2026 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use pretty_assertions::assert_eq;
use pyoutfmt::error::Error;
use pyoutfmt::formatter::reformat;
use pyoutfmt::lexer::{self, Error as LexError};
use pyoutfmt::options::FormatOptions;
use pyoutfmt::token::TokenKind;

fn fmt(input: &str) -> String {
    reformat(input, &FormatOptions::default()).unwrap()
}

#[test]
fn idempotence() {
    let input = "{'a':1,'b':{'c':[1,2,{'d':'e'}]}}";
    let once = fmt(input);
    let twice = fmt(&once);
    assert_eq!(once, twice);
}

#[test]
fn bracket_balance_and_string_contents_preserved() {
    let input = "{'key': [1, 2, '}]['], 'other': 3}";
    let output = fmt(input);
    for bracket in ['{', '}', '[', ']'] {
        assert_eq!(
            input.matches(bracket).count(),
            output.matches(bracket).count(),
            "count of '{bracket}' changed",
        );
    }
    assert!(output.contains("'}]['"));
}

#[test]
fn every_colon_is_followed_by_a_single_space() {
    let output = fmt("{1: [2, 3], 4: {5: 6}}");
    assert_eq!(
        output.matches(':').count(),
        output.matches(": ").count()
    );
    assert!(!output.contains(":\n"));
    assert!(!output.contains(":  "));
}

#[test]
fn every_comma_ends_its_line() {
    let output = fmt("[1, 2, [3, 4], 5]");
    assert_eq!(
        output.matches(',').count(),
        output.matches(",\n").count()
    );
}

#[test]
fn exactly_one_trailing_newline_and_no_trailing_spaces() {
    let output = fmt("{'a': 1}\n\n\n");
    assert!(output.ends_with('\n'));
    assert!(!output.ends_with("\n\n"));
    assert!(output.lines().all(|line| !line.ends_with([' ', '\t'])));
}

#[test]
fn unterminated_bracket_is_surfaced() {
    let err = reformat("{'a': 1, 'b': [2, 3", &FormatOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Lex(LexError::UnterminatedBracket { open: '[', line: 1 })
    ));
}

#[test]
fn unterminated_string_is_surfaced() {
    let err = reformat("['abc", &FormatOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Lex(LexError::UnterminatedString { line: 1 })
    ));
}

#[test]
fn unmatched_closing_bracket_is_surfaced() {
    let err = reformat("}", &FormatOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Lex(LexError::UnmatchedClosingBracket { close: '}', line: 1 })
    ));
}

#[test]
fn mismatched_brackets_are_surfaced() {
    let err = reformat("[1, 2}", &FormatOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Lex(LexError::MismatchedBracket {
            open: '[',
            close: '}',
            ..
        })
    ));
}

#[test]
fn empty_braces() {
    assert_eq!(fmt("{}"), "{\n}\n");
}

#[test]
fn empty_input() {
    assert_eq!(fmt(""), "\n");
}

#[test]
fn depth_resets_between_invocations() {
    let first = fmt("[1]");
    let second = fmt("[1]");
    assert_eq!(first, "[\n    1\n]\n");
    assert_eq!(first, second);
}

#[test]
fn lexer_classifies_punctuation_exactly() {
    let tokens = lexer::tokenize("{'a': 1}").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenBrace,
            TokenKind::Str,
            TokenKind::Colon,
            TokenKind::Number,
            TokenKind::CloseBrace,
        ]
    );
    let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_ref()).collect();
    assert_eq!(texts, vec!["{", "'a'", ":", "1", "}"]);
}

#[test]
fn lexer_keeps_prefixed_strings_whole() {
    let tokens = lexer::tokenize(r"rb'\x00'").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, r"rb'\x00'");
}

#[test]
fn lexer_distinguishes_soft_and_logical_newlines() {
    let tokens = lexer::tokenize("[1,\n2]\n").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenBracket,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::SoftNewline,
            TokenKind::Number,
            TokenKind::CloseBracket,
            TokenKind::Newline,
        ]
    );
}

#[test]
fn lexer_keeps_exponent_numbers_whole() {
    let tokens = lexer::tokenize("1.5e-3").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "1.5e-3");
}

#[test]
fn multi_line_input_collapses_to_one_element_per_line() {
    let output = fmt("{'a':\n    1,\n        'b': 2}");
    assert_eq!(output, "{\n    'a': 1,\n    'b': 2\n}\n");
}
