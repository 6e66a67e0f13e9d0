// SPDX-FileCopyrightText: 2026 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// Any other operator or punctuation, including parentheses.
    Op,
    /// Identifier or keyword.
    Name,
    /// Numeric literal.
    Number,
    /// String literal, including its quotes and any prefix (`r"..."`).
    Str,
    /// Line comment (`# ...`).
    Comment,
    /// A physical newline inside a bracketed construct.
    /// These carry no structure and get dropped during layout.
    SoftNewline,
    /// A logical line break:
    /// either a physical newline outside of any bracketed construct,
    /// or one synthesized by the layout engine.
    Newline,
    /// Synthesized indentation for the line that the next rendered token starts.
    Indent,
}

/// The smallest lexical unit:
/// a [`TokenKind`] paired with the literal text to emit for it.
///
/// Tokens produced by the lexer borrow their text from the source;
/// tokens synthesized by the layout engine own theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: Cow<'src, str>,
}

impl<'src> Token<'src> {
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'src str) -> Self {
        Self {
            kind,
            text: Cow::Borrowed(text),
        }
    }

    /// Indentation for one output line at the given nesting `level`.
    #[must_use]
    pub fn indent(indentation: &str, level: usize) -> Self {
        Self {
            kind: TokenKind::Indent,
            text: Cow::Owned(indentation.repeat(level)),
        }
    }

    /// A synthesized logical line break.
    #[must_use]
    pub const fn newline() -> Self {
        Self {
            kind: TokenKind::Newline,
            text: Cow::Borrowed("\n"),
        }
    }

    /// The single space following a colon.
    #[must_use]
    pub const fn space() -> Self {
        Self {
            kind: TokenKind::Op,
            text: Cow::Borrowed(" "),
        }
    }
}
