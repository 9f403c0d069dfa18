//! Statement parsing: `assignment | call_stmt | return_stmt | if_stmt |
//! for_stmt | var_decl` (§4.2 grammar).

use crate::ast::*;
use crate::Parser;
use lcore_util::diagnostic::DiagnosticCode;
use lcore_util::Diagnostic;

impl<'a> Parser<'a> {
    /// Parses one `statement`, or records a diagnostic and returns `None`
    /// if the current token starts none of the statement productions.
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        if self.is_keyword("Double") || self.is_keyword("String") {
            return Some(self.parse_var_decl());
        }
        if self.is_keyword("call") {
            return Some(self.parse_call_stmt());
        }
        if self.is_keyword("return") {
            return Some(self.parse_return_stmt());
        }
        if self.is_keyword("if") {
            return Some(self.parse_if_stmt());
        }
        if self.is_keyword("for") {
            return Some(self.parse_for_stmt());
        }
        if self.is_identifier() && self.peek(1).is_some_and(|t| t.is_operator("=")) {
            return Some(self.parse_assignment(true));
        }

        let span = self.current_span();
        let found = self
            .current()
            .map(|t| t.lexeme.clone())
            .unwrap_or_else(|| "end of input".to_string());
        self.handler.emit_diagnostic(
            Diagnostic::error(format!("Unexpected token '{found}' in statement"), span)
                .with_code(DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN),
        );
        None
    }

    /// `assignment := IDENT "=" expression ";"`.
    ///
    /// `require_semicolon` is `false` only for a `for_stmt`'s update
    /// assignment, which is immediately followed by `)` rather than `;`
    /// (see the worked example in §8 scenario 5).
    pub(crate) fn parse_assignment(&mut self, require_semicolon: bool) -> Stmt {
        let start_span = self.current_span();
        let target = self.expect_identifier();
        self.expect_operator("=");
        let value = self.parse_expression();
        if require_semicolon {
            self.expect_operator(";");
        }
        Stmt::Assignment {
            target,
            value,
            span: start_span,
        }
    }

    /// `call_stmt := "call" IDENT "(" [arg_list] ")" ";"`.
    fn parse_call_stmt(&mut self) -> Stmt {
        let start_span = self.current_span();
        self.advance(); // "call"
        let callee = self.expect_identifier();
        self.expect_operator("(");
        let args = self.parse_arg_list();
        self.expect_operator(")");
        self.expect_operator(";");
        Stmt::Call {
            callee,
            args,
            span: start_span,
        }
    }

    /// `return_stmt := "return" expression ";"`.
    ///
    /// The grammar requires an expression, but a bare `return;` is
    /// accepted and recorded with no value rather than cascading further
    /// diagnostics (§4.2 "A missing optional terminal ... produces a
    /// diagnostic but the partial node is still linked").
    fn parse_return_stmt(&mut self) -> Stmt {
        let start_span = self.current_span();
        self.advance(); // "return"
        let value = if self.is_operator(";") {
            None
        } else {
            Some(self.parse_expression())
        };
        self.expect_operator(";");
        Stmt::Return {
            value,
            span: start_span,
        }
    }

    /// `if_stmt := "if" "(" expression ")" "{" {statement} "}" [ "else" "{" {statement} "}" ]`.
    fn parse_if_stmt(&mut self) -> Stmt {
        let start_span = self.current_span();
        self.advance(); // "if"
        self.expect_operator("(");
        let cond = self.parse_expression();
        self.expect_operator(")");
        self.expect_operator("{");
        let then_block = self.parse_block_statements();
        self.expect_operator("}");

        let else_block = if self.is_keyword("else") {
            self.advance();
            self.expect_operator("{");
            let block = self.parse_block_statements();
            self.expect_operator("}");
            Some(block)
        } else {
            None
        };

        Stmt::If {
            cond,
            then_block,
            else_block,
            span: start_span,
        }
    }

    /// `for_stmt := "for" "(" assignment expression ";" assignment ")" "{" {statement} "}"`.
    fn parse_for_stmt(&mut self) -> Stmt {
        let start_span = self.current_span();
        self.advance(); // "for"
        self.expect_operator("(");
        let init = Box::new(self.parse_assignment(true));
        let cond = self.parse_expression();
        self.expect_operator(";");
        let update = Box::new(self.parse_assignment(false));
        self.expect_operator(")");
        self.expect_operator("{");
        let body = self.parse_block_statements();
        self.expect_operator("}");

        Stmt::For {
            init,
            cond,
            update,
            body,
            span: start_span,
        }
    }

    /// Parses statements up to (but not consuming) the closing `}`,
    /// resynchronizing by skipping one token per §4.2 block-level recovery.
    fn parse_block_statements(&mut self) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        while !self.is_operator("}") && !self.is_at_end() {
            if let Some(stmt) = self.parse_statement() {
                stmts.push(stmt);
            } else {
                self.resync_in_block();
            }
        }
        stmts
    }
}
