//! Expression parsing: one explicit recursive-descent function per
//! precedence level in the EBNF (§4.2 "Ambient behavior" — an explicit
//! ladder rather than a generic Pratt core, since the grammar here is
//! small and fixed and an explicit ladder keeps each production auditable
//! against its EBNF line).
//!
//! ```text
//! expression    := logical_expr
//! logical_expr  := cmp_expr { ("AND"|"OR") cmp_expr }
//! cmp_expr      := add_expr [ rel_op add_expr ]
//! add_expr      := mul_expr { ("+"|"-") mul_expr }
//! mul_expr      := factor   { ("*"|"/"|"%") factor }
//! factor        := NUMBER | STRING | call_expr | IDENT ["[" expression "]"] | "(" expression ")"
//! ```
//!
//! Comparison is non-associative: at most one `rel_op` is accepted per
//! `cmp_expr`, so `a < b < c` does not parse as a chained comparison.

use crate::ast::*;
use crate::Parser;
use lcore_lex::TokenKind;
use lcore_util::diagnostic::DiagnosticCode;
use lcore_util::Diagnostic;

impl<'a> Parser<'a> {
    pub(crate) fn parse_expression(&mut self) -> Expr {
        self.parse_logical_expr()
    }

    fn parse_logical_expr(&mut self) -> Expr {
        let mut lhs = self.parse_cmp_expr();
        loop {
            let op = if self.is_operator("&&") {
                LogicalOp::And
            } else if self.is_operator("||") {
                LogicalOp::Or
            } else {
                break;
            };
            let span = self.current_span();
            self.advance();
            let rhs = self.parse_cmp_expr();
            lhs = Expr::LogicalOp {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            };
        }
        lhs
    }

    fn parse_cmp_expr(&mut self) -> Expr {
        let lhs = self.parse_add_expr();
        let op = if self.is_operator("==") {
            CmpOp::Eq
        } else if self.is_operator("!=") {
            CmpOp::Ne
        } else if self.is_operator("<=") {
            CmpOp::Le
        } else if self.is_operator(">=") {
            CmpOp::Ge
        } else if self.is_operator("<") {
            CmpOp::Lt
        } else if self.is_operator(">") {
            CmpOp::Gt
        } else {
            return lhs;
        };
        let span = self.current_span();
        self.advance();
        let rhs = self.parse_add_expr();
        Expr::Comparison {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span,
        }
    }

    fn parse_add_expr(&mut self) -> Expr {
        let mut lhs = self.parse_mul_expr();
        loop {
            let op = if self.is_operator("+") {
                BinOp::Add
            } else if self.is_operator("-") {
                BinOp::Sub
            } else {
                break;
            };
            let span = self.current_span();
            self.advance();
            let rhs = self.parse_mul_expr();
            lhs = Expr::BinaryOp {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            };
        }
        lhs
    }

    fn parse_mul_expr(&mut self) -> Expr {
        let mut lhs = self.parse_factor();
        loop {
            let op = if self.is_operator("*") {
                BinOp::Mul
            } else if self.is_operator("/") {
                BinOp::Div
            } else if self.is_operator("%") {
                BinOp::Mod
            } else {
                break;
            };
            let span = self.current_span();
            self.advance();
            let rhs = self.parse_factor();
            lhs = Expr::BinaryOp {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            };
        }
        lhs
    }

    /// `factor := NUMBER | STRING | call_expr | IDENT ["[" expression "]"] | "(" expression ")"`.
    fn parse_factor(&mut self) -> Expr {
        let span = self.current_span();

        if self.is_keyword("call") {
            return self.parse_call_expr();
        }

        if let Some(tok) = self.current() {
            match tok.kind {
                TokenKind::Number | TokenKind::String => {
                    let text = self.advance().unwrap().lexeme;
                    return Expr::Literal { text, span };
                }
                TokenKind::Identifier => {
                    let name = self.advance().unwrap().lexeme;
                    if self.eat_operator("[") {
                        let index = self.parse_expression();
                        self.expect_operator("]");
                        return Expr::StringIndex {
                            name,
                            index: Box::new(index),
                            span,
                        };
                    }
                    return Expr::Variable { name, span };
                }
                _ => {}
            }
        }

        if self.eat_operator("(") {
            let inner = self.parse_expression();
            self.expect_operator(")");
            return inner;
        }

        let found = self
            .current()
            .map(|t| t.lexeme.clone())
            .unwrap_or_else(|| "end of input".to_string());
        self.handler.emit_diagnostic(
            Diagnostic::error(format!("Unexpected token '{found}' in expression"), span)
                .with_code(DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN),
        );
        // Don't loop forever on a token no production can consume.
        if !self.is_at_end() && !self.is_operator(")") && !self.is_operator(";") && !self.is_operator("}") {
            self.advance();
        }
        Expr::Literal {
            text: String::new(),
            span,
        }
    }

    /// `call_expr := "call" IDENT "(" [arg_list] ")"`.
    fn parse_call_expr(&mut self) -> Expr {
        let span = self.current_span();
        self.advance(); // "call"
        let callee = self.expect_identifier();
        self.expect_operator("(");
        let args = self.parse_arg_list();
        self.expect_operator(")");
        Expr::FunctionCall { callee, args, span }
    }

    /// `arg_list := expression { "," expression }`.
    pub(crate) fn parse_arg_list(&mut self) -> Vec<Expr> {
        let mut args = Vec::new();
        if self.is_operator(")") {
            return args;
        }
        args.push(self.parse_expression());
        while self.eat_operator(",") {
            args.push(self.parse_expression());
        }
        args
    }
}
