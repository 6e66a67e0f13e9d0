// SPDX-FileCopyrightText: 2026 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::token::{Token, TokenKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unterminated string literal starting on line {line}")]
    UnterminatedString { line: usize },

    #[error("unterminated '{open}' opened on line {line}")]
    UnterminatedBracket { open: char, line: usize },

    #[error("unmatched closing '{close}' on line {line}")]
    UnmatchedClosingBracket { close: char, line: usize },

    #[error("closing '{close}' on line {close_line} does not match '{open}' opened on line {open_line}")]
    MismatchedBracket {
        open: char,
        close: char,
        open_line: usize,
        close_line: usize,
    },
}

/// Cursor over the source text,
/// advancing one `char` at a time.
struct Cursor<'src> {
    input: &'src str,
    i: usize,
    line: usize,
}

impl<'src> Cursor<'src> {
    const fn new(input: &'src str) -> Self {
        Self { input, i: 0, line: 1 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.i..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.i..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        if c == '\n' {
            self.line += 1;
        }
        self.i += c.len_utf8();
        Some(c)
    }

    fn text_from(&self, start: usize) -> &'src str {
        &self.input[start..self.i]
    }
}

const fn matching_close(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// String literal prefixes as accepted by Python (`r`, `b`, `f`, `u`
/// and their two-letter combinations, in any casing).
fn is_string_prefix(text: &str) -> bool {
    !text.is_empty()
        && text.len() <= 2
        && text
            .chars()
            .all(|c| matches!(c, 'r' | 'R' | 'b' | 'B' | 'f' | 'F' | 'u' | 'U'))
}

fn has_radix_prefix(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next() == Some('0')
        && chars
            .next()
            .is_some_and(|c| matches!(c, 'x' | 'X' | 'b' | 'B' | 'o' | 'O'))
}

/// Consumes a string literal,
/// with the cursor standing on the opening quote.
///
/// The literal text is kept verbatim,
/// so string contents can never be corrupted by the reformatting.
fn lex_string(cursor: &mut Cursor<'_>) -> Result<(), Error> {
    let line = cursor.line;
    let Some(quote) = cursor.bump() else {
        return Err(Error::UnterminatedString { line });
    };
    let triple = cursor.peek() == Some(quote) && cursor.peek_second() == Some(quote);
    if triple {
        cursor.bump();
        cursor.bump();
    }
    loop {
        match cursor.peek() {
            None => return Err(Error::UnterminatedString { line }),
            Some('\\') => {
                cursor.bump();
                if cursor.bump().is_none() {
                    return Err(Error::UnterminatedString { line });
                }
            }
            Some('\n') if !triple => return Err(Error::UnterminatedString { line }),
            Some(c) if c == quote => {
                cursor.bump();
                if !triple {
                    return Ok(());
                }
                if cursor.peek() == Some(quote) && cursor.peek_second() == Some(quote) {
                    cursor.bump();
                    cursor.bump();
                    return Ok(());
                }
                // a lone quote inside a triple-quoted string
            }
            Some(_) => {
                cursor.bump();
            }
        }
    }
}

/// Consumes a numeric literal,
/// with the cursor standing on its first character.
///
/// This is intentionally greedy rather than grammar-exact:
/// it accepts everything Python's number forms use
/// (radix prefixes, underscores, decimal points, exponents,
/// the imaginary suffix).
fn lex_number(cursor: &mut Cursor<'_>, start: usize) {
    let mut prev = '\0';
    while let Some(c) = cursor.peek() {
        let exponent_sign = (c == '+' || c == '-')
            && matches!(prev, 'e' | 'E')
            && !has_radix_prefix(cursor.text_from(start));
        if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
            prev = c;
            cursor.bump();
        } else {
            break;
        }
    }
}

/// Tokenizes the whole input into a flat token sequence.
///
/// Physical newlines are classified by bracket context:
/// inside `(`/`[`/`{` they are [`TokenKind::SoftNewline`]
/// (droppable line continuations),
/// outside they are logical [`TokenKind::Newline`]s.
/// Horizontal whitespace between tokens is not preserved;
/// the renderer reconstructs it.
///
/// # Errors
///
/// Fails when the input cannot be fully lexed:
/// an unterminated string literal,
/// a bracket left open at the end of the input,
/// or a closing bracket with no (or the wrong) open counterpart.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, Error> {
    let mut cursor = Cursor::new(input);
    let mut open_brackets: Vec<(char, usize)> = Vec::new();
    let mut tokens = Vec::new();

    while let Some(c) = cursor.peek() {
        let start = cursor.i;
        match c {
            '\n' => {
                cursor.bump();
                let kind = if open_brackets.is_empty() {
                    TokenKind::Newline
                } else {
                    TokenKind::SoftNewline
                };
                tokens.push(Token::new(kind, cursor.text_from(start)));
            }
            ' ' | '\t' | '\r' | '\x0C' => {
                cursor.bump();
            }
            '\\' if cursor.peek_second() == Some('\n') => {
                // explicit line continuation
                cursor.bump();
                cursor.bump();
            }
            '#' => {
                while cursor.peek().is_some_and(|next| next != '\n') {
                    cursor.bump();
                }
                tokens.push(Token::new(TokenKind::Comment, cursor.text_from(start)));
            }
            '\'' | '"' => {
                lex_string(&mut cursor)?;
                tokens.push(Token::new(TokenKind::Str, cursor.text_from(start)));
            }
            '0'..='9' => {
                lex_number(&mut cursor, start);
                tokens.push(Token::new(TokenKind::Number, cursor.text_from(start)));
            }
            '.' if cursor.peek_second().is_some_and(|next| next.is_ascii_digit()) => {
                lex_number(&mut cursor, start);
                tokens.push(Token::new(TokenKind::Number, cursor.text_from(start)));
            }
            '(' | '[' | '{' => {
                open_brackets.push((c, cursor.line));
                cursor.bump();
                let kind = match c {
                    '{' => TokenKind::OpenBrace,
                    '[' => TokenKind::OpenBracket,
                    _ => TokenKind::Op,
                };
                tokens.push(Token::new(kind, cursor.text_from(start)));
            }
            ')' | ']' | '}' => {
                match open_brackets.pop() {
                    Some((open, _)) if matching_close(open) == c => (),
                    Some((open, open_line)) => {
                        return Err(Error::MismatchedBracket {
                            open,
                            close: c,
                            open_line,
                            close_line: cursor.line,
                        });
                    }
                    None => {
                        return Err(Error::UnmatchedClosingBracket {
                            close: c,
                            line: cursor.line,
                        });
                    }
                }
                cursor.bump();
                let kind = match c {
                    '}' => TokenKind::CloseBrace,
                    ']' => TokenKind::CloseBracket,
                    _ => TokenKind::Op,
                };
                tokens.push(Token::new(kind, cursor.text_from(start)));
            }
            ':' => {
                cursor.bump();
                tokens.push(Token::new(TokenKind::Colon, cursor.text_from(start)));
            }
            ',' => {
                cursor.bump();
                tokens.push(Token::new(TokenKind::Comma, cursor.text_from(start)));
            }
            c if c == '_' || c.is_alphabetic() => {
                while cursor
                    .peek()
                    .is_some_and(|next| next == '_' || next.is_alphanumeric())
                {
                    cursor.bump();
                }
                let kind = if is_string_prefix(cursor.text_from(start))
                    && matches!(cursor.peek(), Some('\'' | '"'))
                {
                    lex_string(&mut cursor)?;
                    TokenKind::Str
                } else {
                    TokenKind::Name
                };
                tokens.push(Token::new(kind, cursor.text_from(start)));
            }
            _ => {
                // Anything else (`$`, `?`, ...) carries no structure for us;
                // pass it through unchanged.
                cursor.bump();
                tokens.push(Token::new(TokenKind::Op, cursor.text_from(start)));
            }
        }
    }

    if let Some(&(open, line)) = open_brackets.last() {
        return Err(Error::UnterminatedBracket { open, line });
    }

    Ok(tokens)
}
