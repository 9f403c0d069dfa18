//! lcore-par - Recursive-descent parser for L (§4.2).
//!
//! Consumes the token stream [`lcore_lex`] produces and builds the [`ast`]
//! tree. Single-token lookahead, with a small bounded peek used only to
//! disambiguate a top-level `IDENT` between a function definition and an
//! assignment. The parser never panics or returns `Result::Err` — a
//! malformed construct is recorded as a diagnostic and the parser
//! resynchronizes (§4.2 "Error strategy") so later, unrelated constructs
//! still get parsed.

pub mod ast;
mod expr;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use ast::*;

use lcore_lex::{Token, TokenKind};
use lcore_util::diagnostic::DiagnosticCode;
use lcore_util::{Diagnostic, Handler, Span};

/// Parses a full token stream into a [`Program`], collecting syntactic
/// diagnostics. This is the batch entry point the driver calls; see
/// [`Parser`] for incremental use by tests.
pub fn parse(tokens: Vec<Token>) -> (Program, Vec<Diagnostic>) {
    let mut handler = Handler::new();
    let mut parser = Parser::new(tokens, &mut handler);
    let program = parser.parse_program();
    (program, handler.diagnostics())
}

pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    handler: &'a mut Handler,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, handler: &'a mut Handler) -> Self {
        Self {
            tokens,
            pos: 0,
            handler,
        }
    }

    // ---- token-stream primitives ----------------------------------------

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// The span to attach to a diagnostic about input that ran out: the
    /// last token's span if there is one, otherwise a zeroed span.
    fn eof_span(&self) -> Span {
        self.tokens.last().map(|t| t.span).unwrap_or(Span::DUMMY)
    }

    fn current_span(&self) -> Span {
        self.current().map(|t| t.span).unwrap_or_else(|| self.eof_span())
    }

    fn is_operator(&self, text: &str) -> bool {
        self.current().is_some_and(|t| t.is_operator(text))
    }

    fn is_keyword(&self, text: &str) -> bool {
        self.current().is_some_and(|t| t.is_keyword(text))
    }

    fn is_identifier(&self) -> bool {
        self.current().is_some_and(|t| t.kind == TokenKind::Identifier)
    }

    /// Consumes the current token if it's the given operator; returns
    /// whether it matched.
    fn eat_operator(&mut self, text: &str) -> bool {
        if self.is_operator(text) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Requires the current token to be the given operator, consuming it.
    /// On mismatch, records a missing-delimiter/operator diagnostic and
    /// does *not* consume — the caller's resync logic takes over.
    fn expect_operator(&mut self, text: &str) -> bool {
        if self.eat_operator(text) {
            return true;
        }
        let code = if matches!(text, ";" | ")" | "}" | "(" | "{") {
            DiagnosticCode::E_PARSE_MISSING_DELIMITER
        } else {
            DiagnosticCode::E_PARSE_MISSING_OPERATOR
        };
        self.handler.emit_diagnostic(
            Diagnostic::error(format!("Expected '{text}'"), self.current_span()).with_code(code),
        );
        false
    }

    fn expect_keyword(&mut self, text: &str) -> bool {
        if self.is_keyword(text) {
            self.advance();
            true
        } else {
            self.handler.emit_diagnostic(
                Diagnostic::error(format!("Expected keyword '{text}'"), self.current_span())
                    .with_code(DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN),
            );
            false
        }
    }

    /// Consumes an identifier, returning its name. On mismatch, records a
    /// diagnostic and returns a placeholder name so the caller can still
    /// link a (malformed) node, per §4.2 "Node construction".
    fn expect_identifier(&mut self) -> String {
        if self.is_identifier() {
            self.advance().unwrap().lexeme
        } else {
            self.handler.emit_diagnostic(
                Diagnostic::error("Expected identifier", self.current_span())
                    .with_code(DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN),
            );
            String::new()
        }
    }

    /// Top-level resync: advance past the next `;`, or to the next `}`/EOF
    /// if none is found first (§4.2 "advance to the next `;` at the top level").
    fn resync_top_level(&mut self) {
        while let Some(tok) = self.current() {
            if tok.is_operator(";") {
                self.advance();
                return;
            }
            if tok.is_operator("}") {
                return;
            }
            self.advance();
        }
    }

    /// Block-level resync: skip exactly one token (§4.2 "inside blocks,
    /// skip one token").
    fn resync_in_block(&mut self) {
        self.advance();
    }

    // ---- program structure ------------------------------------------------

    pub fn parse_program(&mut self) -> Program {
        let mut elements = Vec::new();
        while !self.is_at_end() {
            if let Some(element) = self.parse_program_element() {
                elements.push(element);
            }
        }
        Program { elements }
    }

    /// `program_element := function_definition | var_decl | statement`.
    ///
    /// Disambiguates a leading `IDENT` between a function definition and an
    /// assignment by peeking one token ahead for `(` (§4.2
    /// "Function-vs-assignment disambiguation").
    fn parse_program_element(&mut self) -> Option<ProgramElement> {
        if self.is_keyword("Double") || self.is_keyword("String") {
            return Some(ProgramElement::Stmt(self.parse_var_decl()));
        }

        if self.is_identifier() && self.peek(1).is_some_and(|t| t.is_operator("(")) {
            return Some(ProgramElement::Function(self.parse_function_definition()));
        }

        if let Some(stmt) = self.parse_statement() {
            return Some(ProgramElement::Stmt(stmt));
        }

        // Neither a declaration, function, nor recognizable statement —
        // a structural error (§7 taxonomy category 5).
        let span = self.current_span();
        let found = self
            .current()
            .map(|t| t.lexeme.clone())
            .unwrap_or_else(|| "end of input".to_string());
        self.handler.emit_diagnostic(
            Diagnostic::error(
                format!("Unexpected top-level construct near '{found}'"),
                span,
            )
            .with_code(DiagnosticCode::E_PARSE_STRUCTURAL),
        );
        self.resync_top_level();
        None
    }

    fn parse_function_definition(&mut self) -> Function {
        let start_span = self.current_span();
        let name = self.expect_identifier();
        self.expect_operator("(");
        let mut params = Vec::new();
        if self.is_identifier() {
            params.push(self.advance().unwrap().lexeme);
            while self.eat_operator(",") {
                params.push(self.expect_identifier());
            }
        }
        self.expect_operator(")");
        self.expect_operator("{");
        let mut body = Vec::new();
        while !self.is_operator("}") && !self.is_at_end() {
            if let Some(stmt) = self.parse_statement() {
                body.push(stmt);
            } else {
                self.resync_in_block();
            }
        }
        self.expect_operator("}");
        Function {
            name,
            params,
            body,
            span: start_span,
        }
    }

    fn parse_var_decl(&mut self) -> Stmt {
        let start_span = self.current_span();
        let declared_type = if self.is_keyword("Double") {
            self.advance();
            ast::DeclType::Double
        } else {
            self.advance();
            ast::DeclType::String
        };
        let name = self.expect_identifier();
        self.expect_operator(";");
        Stmt::VariableDeclaration {
            name,
            declared_type,
            span: start_span,
        }
    }
}
