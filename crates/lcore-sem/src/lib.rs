//! lcore-sem - Semantic analysis for L (§4.4).
//!
//! Walks the AST [`lcore_par`] builds, populating a [`SymbolTable`] with
//! user-defined functions and every assignment target's inferred type,
//! and reports name-resolution and type diagnostics along the way. The
//! walk is a single top-down pass: a function's signature (parameter and
//! return types) is registered the moment its definition is reached, and
//! its body is analyzed immediately after, so a call to a function must
//! appear at or after that function's definition to resolve — matching
//! the reference's last-write-wins, single-pass symbol table (§3, §9
//! "SymbolTable defaults").

pub mod builtins;
pub mod symbol_table;
pub mod types;

#[cfg(test)]
mod edge_cases;

pub use symbol_table::{DeclSite, SymbolTable};
pub use types::Type;

use lcore_par::{BinOp, DeclType, Expr, Function, Program, ProgramElement, Stmt};
use lcore_util::diagnostic::DiagnosticCode;
use lcore_util::{Diagnostic, Handler, Span};

/// Analyzes a full program, returning the finalized symbol table (read by
/// the code generator) and the accumulated semantic diagnostics. This is
/// the batch entry point the driver calls.
pub fn analyze(program: &Program) -> (SymbolTable, Vec<Diagnostic>) {
    let mut handler = Handler::new();
    let symbols = {
        let mut analyzer = SemanticAnalyzer::new(&mut handler);
        analyzer.analyze_program(program);
        analyzer.symbols
    };
    (symbols, handler.diagnostics())
}

/// Infers an expression's type against a finalized [`SymbolTable`] without
/// recording diagnostics — the non-diagnostic half of §4.4 "Expression
/// type inference", exposed so the code generator (which consumes an
/// already-validated tree) can decide how to render a value (e.g. whether
/// a `print` argument needs the `Double` formatting helper) without
/// duplicating the analyzer's type rules.
pub fn infer_expr_type(expr: &Expr, symbols: &SymbolTable) -> Type {
    match expr {
        Expr::Literal { text, .. } => literal_type(text),
        Expr::Variable { name, .. } => {
            if symbols.contains(name) {
                symbols.get_type(name)
            } else {
                Type::Unknown
            }
        }
        Expr::FunctionCall { callee, .. } => {
            if callee == "print" {
                Type::Void
            } else if symbols.is_callable(callee) {
                symbols.get_function_return(callee)
            } else {
                Type::Unknown
            }
        }
        Expr::StringIndex { .. } => Type::String,
        Expr::BinaryOp { op, lhs, rhs, .. } => binary_op_result_type(
            *op,
            infer_expr_type(lhs, symbols),
            infer_expr_type(rhs, symbols),
        ),
        Expr::Comparison { .. } | Expr::LogicalOp { .. } => Type::Boolean,
    }
}

struct SemanticAnalyzer<'a> {
    symbols: SymbolTable,
    handler: &'a mut Handler,
}

impl<'a> SemanticAnalyzer<'a> {
    fn new(handler: &'a mut Handler) -> Self {
        Self {
            symbols: SymbolTable::new(),
            handler,
        }
    }

    fn analyze_program(&mut self, program: &Program) {
        for element in &program.elements {
            match element {
                ProgramElement::Function(f) => self.analyze_function(f),
                ProgramElement::Stmt(s) => self.analyze_stmt(s),
            }
        }
    }

    /// Registers a user function's signature (§4.4 "Parameter-type
    /// inference" and "Return-type inference") and then walks its body.
    fn analyze_function(&mut self, f: &Function) {
        let site = DeclSite::from(f.span);

        let param_type = builtins::heuristic_param_type(&f.name);
        let param_types: Vec<Type> = f.params.iter().map(|_| param_type).collect();
        self.symbols.add_function_params(&f.name, param_types.clone());
        for (name, ty) in f.params.iter().zip(param_types.iter()) {
            self.symbols.add(name, *ty, site);
        }

        let return_type = builtins::heuristic_return_type(&f.name)
            .or_else(|| self.first_return_expr(&f.body).map(|e| self.peek_type(e)))
            .unwrap_or(Type::Double);
        self.symbols.add_function_return(&f.name, return_type);

        self.analyze_block(&f.body);
    }

    fn analyze_block(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.analyze_stmt(stmt);
        }
    }

    fn analyze_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VariableDeclaration { name, declared_type, span } => {
                let ty = match declared_type {
                    DeclType::Double => Type::Double,
                    DeclType::String => Type::String,
                };
                self.symbols.add(name, ty, DeclSite::from(*span));
            }
            Stmt::Assignment { target, value, span } => {
                let ty = self.infer_type(value);
                self.symbols.add(target, ty, DeclSite::from(*span));
            }
            Stmt::Call { callee, args, span } => {
                self.check_call(callee, args, *span);
            }
            Stmt::Return { value, .. } => {
                if let Some(expr) = value {
                    self.infer_type(expr);
                }
            }
            Stmt::If { cond, then_block, else_block, .. } => {
                self.check_condition(cond);
                self.analyze_block(then_block);
                if let Some(else_block) = else_block {
                    self.analyze_block(else_block);
                }
            }
            Stmt::For { init, cond, update, body, .. } => {
                self.analyze_stmt(init);
                self.check_condition(cond);
                self.analyze_stmt(update);
                self.analyze_block(body);
            }
        }
    }

    /// `if`/`for` conditions must be `Boolean` (§4.4 (d)). An `Unknown`
    /// condition (already diagnosed at its own undefined name/call) isn't
    /// re-reported here, to keep the diagnostic count matching the number
    /// of distinct problems (§8 "Error monotonicity").
    fn check_condition(&mut self, cond: &Expr) {
        let ty = self.infer_type(cond);
        if ty != Type::Boolean && ty != Type::Unknown {
            self.handler.emit_diagnostic(
                Diagnostic::error(
                    format!("Condition must be Boolean, found {ty}"),
                    cond.span(),
                )
                .with_code(DiagnosticCode::E_SEM_CONDITION_NOT_BOOLEAN),
            );
        }
    }

    /// Infers an expression's type, recording any diagnostics it surfaces
    /// along the way (§4.4 "Expression type inference").
    fn infer_type(&mut self, expr: &Expr) -> Type {
        match expr {
            Expr::Literal { text, .. } => literal_type(text),
            Expr::Variable { name, span } => {
                if self.symbols.contains(name) {
                    self.symbols.get_type(name)
                } else {
                    self.handler.emit_diagnostic(
                        Diagnostic::error(format!("Undefined variable '{name}'"), *span)
                            .with_code(DiagnosticCode::E_SEM_UNDEFINED_VARIABLE),
                    );
                    Type::Unknown
                }
            }
            Expr::FunctionCall { callee, args, span } => self.check_call(callee, args, *span),
            Expr::StringIndex { name, index, span } => {
                if !self.symbols.contains(name) {
                    self.handler.emit_diagnostic(
                        Diagnostic::error(format!("Undefined variable '{name}'"), *span)
                            .with_code(DiagnosticCode::E_SEM_UNDEFINED_VARIABLE),
                    );
                }
                self.infer_type(index);
                Type::String
            }
            Expr::BinaryOp { op, lhs, rhs, span } => {
                let lt = self.infer_type(lhs);
                let rt = self.infer_type(rhs);
                self.check_binary_op(*op, lt, rt, *span);
                binary_op_result_type(*op, lt, rt)
            }
            Expr::Comparison { lhs, rhs, span, .. } => {
                let lt = self.infer_type(lhs);
                let rt = self.infer_type(rhs);
                if lt != Type::Double || rt != Type::Double {
                    if lt != Type::Unknown && rt != Type::Unknown {
                        self.handler.emit_diagnostic(
                            Diagnostic::error(
                                format!("Comparison requires Double operands, found {lt} and {rt}"),
                                *span,
                            )
                            .with_code(DiagnosticCode::E_SEM_OPERAND_TYPE_MISMATCH),
                        );
                    }
                }
                Type::Boolean
            }
            // §9 open question 1: operand types for AND/OR are not checked,
            // matching the reference's best-effort treatment.
            Expr::LogicalOp { lhs, rhs, .. } => {
                self.infer_type(lhs);
                self.infer_type(rhs);
                Type::Boolean
            }
        }
    }

    /// Non-diagnostic expression type probe, used only to infer a
    /// function's return type from its first `return`'s expression
    /// (§4.4 "Return-type inference") without re-reporting problems the
    /// real walk over the same expression will already surface.
    fn peek_type(&self, expr: &Expr) -> Type {
        infer_expr_type(expr, &self.symbols)
    }

    /// The first `return`'s expression in a pre-order walk of `stmts`,
    /// descending into `if`/`for` bodies. A bare `return;` (no
    /// expression) counts as "first" and stops the search with no
    /// expression to infer from, falling back to `Double`.
    fn first_return_expr<'a>(&self, stmts: &'a [Stmt]) -> Option<&'a Expr> {
        for stmt in stmts {
            match stmt {
                Stmt::Return { value, .. } => return value.as_ref(),
                Stmt::If { then_block, else_block, .. } => {
                    if let Some(e) = self.first_return_expr(then_block) {
                        return Some(e);
                    }
                    if let Some(else_block) = else_block {
                        if let Some(e) = self.first_return_expr(else_block) {
                            return Some(e);
                        }
                    }
                }
                Stmt::For { body, .. } => {
                    if let Some(e) = self.first_return_expr(body) {
                        return Some(e);
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn check_binary_op(&mut self, op: BinOp, lhs: Type, rhs: Type, span: Span) {
        if lhs == Type::Unknown || rhs == Type::Unknown {
            return;
        }
        let ok = match op {
            // `+` permits Double+Double or any pairing with a String operand.
            BinOp::Add => (lhs == Type::Double && rhs == Type::Double) || lhs == Type::String || rhs == Type::String,
            // `-`, `*`, `/`, `%` require Double on both sides (§4.4, §9 open question 3).
            BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Mod => lhs == Type::Double && rhs == Type::Double,
        };
        if !ok {
            self.handler.emit_diagnostic(
                Diagnostic::error(
                    format!(
                        "Operator '{}' cannot be applied to {lhs} and {rhs}",
                        op.as_str()
                    ),
                    span,
                )
                .with_code(DiagnosticCode::E_SEM_OPERAND_TYPE_MISMATCH),
            );
        }
    }

    /// Checks a call site and returns the callee's return type
    /// (`Unknown` if the callee doesn't resolve). `print` is variadic
    /// and special-cased (§4.4 "Call-site checks").
    fn check_call(&mut self, callee: &str, args: &[Expr], span: Span) -> Type {
        if callee == "print" {
            for arg in args {
                let ty = self.infer_type(arg);
                if !matches!(ty, Type::String | Type::Double | Type::Unknown) {
                    self.handler.emit_diagnostic(
                        Diagnostic::error(
                            format!("Argument to 'print' must be String or Double, found {ty}"),
                            arg.span(),
                        )
                        .with_code(DiagnosticCode::E_SEM_CALL_ARGUMENT_TYPE_MISMATCH),
                    );
                }
            }
            return Type::Void;
        }

        if !self.symbols.is_callable(callee) {
            self.handler.emit_diagnostic(
                Diagnostic::error(format!("Undefined function '{callee}'"), span)
                    .with_code(DiagnosticCode::E_SEM_UNDEFINED_FUNCTION),
            );
            for arg in args {
                self.infer_type(arg);
            }
            return Type::Unknown;
        }

        let params = self.symbols.get_function_params(callee).to_vec();
        if params.len() != args.len() {
            self.handler.emit_diagnostic(
                Diagnostic::error(
                    format!(
                        "Function '{callee}' expects {} argument(s), found {}",
                        params.len(),
                        args.len()
                    ),
                    span,
                )
                .with_code(DiagnosticCode::E_SEM_CALL_ARITY_MISMATCH),
            );
        }

        for (i, arg) in args.iter().enumerate() {
            let arg_ty = self.infer_type(arg);
            if let Some(expected) = params.get(i) {
                if arg_ty != Type::Unknown && arg_ty != *expected {
                    self.handler.emit_diagnostic(
                        Diagnostic::error(
                            format!(
                                "Argument {} to '{callee}' expected {expected}, found {arg_ty}",
                                i + 1
                            ),
                            arg.span(),
                        )
                        .with_code(DiagnosticCode::E_SEM_CALL_ARGUMENT_TYPE_MISMATCH),
                    );
                }
            }
        }

        self.symbols.get_function_return(callee)
    }
}

fn binary_op_result_type(op: BinOp, lhs: Type, rhs: Type) -> Type {
    match op {
        BinOp::Add if lhs == Type::String || rhs == Type::String => Type::String,
        _ if lhs == Type::Double && rhs == Type::Double => Type::Double,
        _ => Type::Unknown,
    }
}

/// Classifies a `Literal` node's raw lexeme (§4.4 "Expression type
/// inference"). Quoted text is `String`; `true`/`false` is `Boolean`;
/// text matching the lexer's number regex is `Double`; anything else is
/// `Unknown`. The grammar's `factor` production has no boolean-literal
/// token, so the `true`/`false` arm is unreachable through the parser
/// today — kept because §4.4 documents it as the reference's rule.
fn literal_type(text: &str) -> Type {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        Type::String
    } else if text == "true" || text == "false" {
        Type::Boolean
    } else if is_number_literal(text) {
        Type::Double
    } else {
        Type::Unknown
    }
}

/// `[0-9]+(\.[0-9]+)?`, matching the lexer's number-scanning rule exactly.
fn is_number_literal(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    let mut int_digits = 0;
    while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
        chars.next();
        int_digits += 1;
    }
    if int_digits == 0 {
        return false;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        let mut frac_digits = 0;
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            frac_digits += 1;
        }
        if frac_digits == 0 {
            return false;
        }
    }
    chars.next().is_none()
}
