// SPDX-FileCopyrightText: 2026 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use regex::Regex;
use std::borrow::Cow;
use std::fmt::Write;
use std::sync::LazyLock;

use crate::context::Context;
use crate::error::FmtResult;
use crate::lexer;
use crate::options::FormatOptions;
use crate::token::{Token, TokenKind};

/// The regex to match a single trailing space at the end of a line,
/// optionally followed by a comma.
/// Such spaces are artifacts of the renderer
/// keeping names and numbers lexically distinct.
static RE_EXTRA_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m) (,?)$").unwrap());

/// Does the actual formatting/pretty-printing:
/// lexes the input,
/// rewrites the token sequence so that every bracketed construct
/// spans multiple indented lines with one element per line,
/// renders it back to text and cleans up trailing whitespace.
///
/// Indentation depth is local to one call;
/// independent spans always start at depth zero.
///
/// # Errors
///
/// Fails when the input cannot be fully tokenized
/// (unterminated string, unbalanced brackets);
/// in that case no output is produced.
pub fn reformat(text: &str, options: &FormatOptions) -> FmtResult<String> {
    let tokens = lexer::tokenize(text)?;
    tracing::debug!("{tokens:#?}");
    let rewritten = layout(tokens, &options.indentation);
    let mut output = String::new();
    let mut context = Context::new(&mut output);
    render(&mut context, &rewritten)?;
    let output = fix_extra_spaces(&output);
    Ok(fix_ending_newlines(&output))
}

/// Rewrites the token sequence in a single forward pass,
/// tracking the bracket-nesting depth.
///
/// - `{` and `[` start a new, further indented block;
/// - `}` and `]` de-indent and start their own line,
///   unless the output already is at a line start;
/// - every comma ends its line,
///   so each collection element gets a line of its own;
/// - every colon is followed by a single space;
/// - every other non-operator token is prefixed with
///   the indentation at the current depth.
fn layout<'src>(tokens: Vec<Token<'src>>, indentation: &str) -> Vec<Token<'src>> {
    let mut depth: usize = 0;
    let mut result = Vec::with_capacity(tokens.len() * 2);
    for token in tokens {
        match token.kind {
            TokenKind::OpenBrace | TokenKind::OpenBracket => {
                result.push(Token::indent(indentation, depth));
                result.push(token);
                result.push(Token::newline());
                depth += 1;
            }
            TokenKind::CloseBrace | TokenKind::CloseBracket => {
                if result
                    .last()
                    .is_none_or(|last| last.kind != TokenKind::Newline)
                {
                    result.push(Token::newline());
                }
                depth = depth.saturating_sub(1);
                result.push(Token::indent(indentation, depth));
                result.push(token);
            }
            TokenKind::Colon => {
                result.push(token);
                result.push(Token::space());
            }
            TokenKind::Comma => {
                result.push(token);
                result.push(Token::newline());
            }
            TokenKind::Op => result.push(token),
            TokenKind::SoftNewline => (),
            TokenKind::Comment => {
                // A comment gets a line of its own,
                // so it can not swallow the tokens following it.
                result.push(Token::indent(indentation, depth));
                result.push(token);
                result.push(Token::newline());
            }
            TokenKind::Name
            | TokenKind::Number
            | TokenKind::Str
            | TokenKind::Newline
            | TokenKind::Indent => {
                result.push(Token::indent(indentation, depth));
                result.push(token);
            }
        }
    }
    result
}

/// Converts the rewritten token sequence back into literal text.
///
/// Indent tokens do not print where they stand;
/// they replace the pending indentation,
/// which is written once at the start of the next line.
/// Names and numbers get one trailing space
/// to stay lexically distinct from a following token.
fn render<W: Write>(context: &mut Context<W>, tokens: &[Token<'_>]) -> FmtResult<()> {
    for token in tokens {
        match token.kind {
            TokenKind::Indent => {
                context.indent.clear();
                context.indent.push_str(&token.text);
            }
            TokenKind::Newline | TokenKind::SoftNewline => {
                write!(context.output, "{}", token.text)?;
                context.line_start = true;
            }
            TokenKind::OpenBrace
            | TokenKind::CloseBrace
            | TokenKind::OpenBracket
            | TokenKind::CloseBracket
            | TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::Op
            | TokenKind::Name
            | TokenKind::Number
            | TokenKind::Str
            | TokenKind::Comment => {
                if context.line_start {
                    write!(context.output, "{}", context.indent)?;
                    context.line_start = false;
                }
                write!(context.output, "{}", token.text)?;
                if matches!(token.kind, TokenKind::Name | TokenKind::Number) {
                    write!(context.output, " ")?;
                }
            }
        }
    }
    Ok(())
}

/// Removes the extra trailing spaces inserted by the renderer.
fn fix_extra_spaces(text: &str) -> Cow<'_, str> {
    RE_EXTRA_SPACES.replace_all(text, "$1")
}

/// Removes any excess trailing whitespace
/// and makes sure the result ends with exactly one newline.
fn fix_ending_newlines(text: &str) -> String {
    let mut result = text.trim_end().to_string();
    result.push('\n');
    result
}
