//! lcore-lex - Lexical analyzer for L.
//!
//! Turns a source string into the token stream [`lcore_par`] parses, plus
//! any lexical diagnostics encountered along the way (§4.1). The lexer
//! never fails hard: an unrecognized byte is reported and skipped so the
//! rest of the source still gets tokenized.

pub mod cursor;
pub mod token;

use cursor::Cursor;
use lcore_util::diagnostic::DiagnosticCode;
use lcore_util::{Diagnostic, Handler, Span};
pub use token::{Token, TokenKind, KEYWORDS};

/// Two-character operators, tried before falling back to single-character ones.
const TWO_CHAR_OPERATORS: &[&str] = &["==", "!=", "<=", ">=", "&&", "||"];

/// Single-character operators and punctuation L accepts.
const ONE_CHAR_OPERATORS: &[char] = &[
    '+', '-', '*', '/', '%', '=', '(', ')', '{', '}', '<', '>', ';', ',', '.', '[', ']',
];

/// Scans one L source string into tokens, collecting lexical diagnostics
/// along the way. This is the batch entry point the driver uses; see
/// [`Lexer`] for the incremental, iterator-based form the parser and
/// property tests drive directly.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut handler = Handler::new();
    let tokens = Lexer::new(source, &mut handler).collect();
    (tokens, handler.diagnostics())
}

/// Scans L source text one token at a time.
///
/// `Lexer` implements [`Iterator<Item = Token>`], yielding tokens until the
/// source is exhausted; diagnostics are written into the [`Handler`] it was
/// constructed with as scanning encounters them. Whitespace is never yielded
/// as a token — it is skipped as part of scanning the next one.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    handler: &'a mut Handler,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
        }
    }

    fn span_from(&self, start: usize, line: u32, column: u32) -> Span {
        Span::new(start, self.cursor.position(), line, column)
    }

    /// Scans and returns the next token, or `None` at end of input.
    ///
    /// Skips whitespace first (per §4.1, "Whitespace is skipped"); an
    /// unterminated string or an unrecognized byte records a diagnostic
    /// and continues scanning rather than stopping the lexer.
    fn scan_token(&mut self) -> Option<Token> {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_at_end() {
                return None;
            }

            let start = self.cursor.position();
            let line = self.cursor.line();
            let column = self.cursor.column();
            let c = self.cursor.current_char();

            // Two-character operators are tried before single-character ones.
            let two: String = [self.cursor.char_at(0), self.cursor.char_at(1)]
                .iter()
                .collect();
            if TWO_CHAR_OPERATORS.contains(&two.as_str()) {
                self.cursor.advance();
                self.cursor.advance();
                return Some(Token::new(TokenKind::Operator, two, self.span_from(start, line, column)));
            }

            if c == '"' {
                return Some(self.scan_string(start, line, column));
            }

            if c.is_ascii_digit() {
                return Some(self.scan_number(start, line, column));
            }

            if c.is_ascii_alphabetic() || c == '_' {
                return Some(self.scan_identifier(start, line, column));
            }

            if ONE_CHAR_OPERATORS.contains(&c) {
                self.cursor.advance();
                return Some(Token::new(
                    TokenKind::Operator,
                    c.to_string(),
                    self.span_from(start, line, column),
                ));
            }

            self.handler.emit_diagnostic(
                Diagnostic::error(format!("Unexpected character: {c}"), self.span_from(start, line, column))
                    .with_code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR),
            );
            self.cursor.advance();
            // Keep scanning — an unrecognized byte is skipped, not fatal (§4.1).
        }
    }

    fn scan_identifier(&mut self, start: usize, line: u32, column: u32) -> Token {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c.is_ascii_alphanumeric() || c == '_' {
                self.cursor.advance();
            } else {
                break;
            }
        }
        let lexeme = self.cursor.slice_from(start).to_string();
        let kind = if KEYWORDS.contains(&lexeme.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, lexeme, self.span_from(start, line, column))
    }

    fn scan_number(&mut self, start: usize, line: u32, column: u32) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        if self.cursor.current_char() == '.' && self.cursor.char_at(1).is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }
        let lexeme = self.cursor.slice_from(start).to_string();
        Token::new(TokenKind::Number, lexeme, self.span_from(start, line, column))
    }

    /// Scans a `"`-delimited string literal. The lexeme includes both
    /// quotes. A missing closing quote abandons the rest of the current
    /// line, per §4.1.
    fn scan_string(&mut self, start: usize, line: u32, column: u32) -> Token {
        self.cursor.advance(); // opening quote
        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '"' {
            self.cursor.advance(); // closing quote
            let lexeme = self.cursor.slice_from(start).to_string();
            Token::new(TokenKind::String, lexeme, self.span_from(start, line, column))
        } else {
            self.handler.emit_diagnostic(
                Diagnostic::error("Unterminated string literal", self.span_from(start, line, column))
                    .with_code(DiagnosticCode::E_LEX_UNTERMINATED_STRING),
            );
            // Abandon the rest of the line: consume through the newline (if any)
            // so the next token starts cleanly on the following line.
            if self.cursor.current_char() == '\n' {
                self.cursor.advance();
            }
            let lexeme = self.cursor.slice_from(start).to_string();
            Token::new(TokenKind::String, lexeme, self.span_from(start, line, column))
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.scan_token()
    }
}
