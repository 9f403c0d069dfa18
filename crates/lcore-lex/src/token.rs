//! Token types produced by the lexer.

use lcore_util::Span;

/// The keyword set of L. Any identifier lexeme matching one of these
/// spellings is reclassified as [`TokenKind::Keyword`] rather than
/// [`TokenKind::Identifier`].
pub const KEYWORDS: &[&str] = &["if", "else", "for", "return", "call", "Double", "String"];

/// The category a [`Token`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// One of the reserved words in [`KEYWORDS`].
    Keyword,
    /// `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword.
    Identifier,
    /// `[0-9]+(\.[0-9]+)?`.
    Number,
    /// A double-quoted string literal, lexeme includes the quotes.
    String,
    /// A one- or two-character operator or punctuator.
    Operator,
}

/// A single lexical token: its kind, its exact source slice, and its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// 1-based source line the token starts on.
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// 1-based source column the token starts on.
    pub fn column(&self) -> u32 {
        self.span.column
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == text
    }

    pub fn is_operator(&self, text: &str) -> bool {
        self.kind == TokenKind::Operator && self.lexeme == text
    }
}
