//! AST node definitions for L (§3, §9 "AST polymorphism").
//!
//! The reference compiler tags every node with a string kind and indexes
//! into an untyped child vector by convention. This port replaces that with
//! one Rust variant per node kind, each carrying its own named fields —
//! exhaustive `match` on [`Expr`]/[`Stmt`] replaces string comparisons, and
//! a missing child is a missing field rather than an out-of-bounds index.
//! The grammar's pure grouping nodes (`Parameters`, `Arguments`, `ThenBlock`,
//! `ElseBlock`, `ForBody`) don't get their own variant — they become a plain
//! `Vec` field on whichever node owns them, since Rust doesn't need a node
//! just to hold a list.

use lcore_util::Span;

/// The declared type in a `var_decl` (`Double x;` / `String s;`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclType {
    Double,
    String,
}

/// A binary arithmetic operator: `+ - * / %`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
        }
    }
}

/// A relational operator: `== != <= >= < >`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Le,
    Ge,
    Lt,
    Gt,
}

impl CmpOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Le => "<=",
            CmpOp::Ge => ">=",
            CmpOp::Lt => "<",
            CmpOp::Gt => ">",
        }
    }
}

/// A short-circuiting logical operator, spelled `AND`/`OR` in the grammar
/// but tokenized as `&&`/`||` (§6 "L lexical surface").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

/// An expression node (§3: `Literal`, `Variable`, `FunctionCall`,
/// `BinaryOp`, `Comparison`, `LogicalOp`, `StringIndex`).
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A number, string, or boolean literal. `text` is the raw source
    /// lexeme (quotes included for strings) — type inference (§4.4)
    /// classifies it from this text rather than a pre-tagged kind.
    Literal { text: String, span: Span },
    Variable { name: String, span: Span },
    FunctionCall { callee: String, args: Vec<Expr>, span: Span },
    BinaryOp { op: BinOp, lhs: Box<Expr>, rhs: Box<Expr>, span: Span },
    Comparison { op: CmpOp, lhs: Box<Expr>, rhs: Box<Expr>, span: Span },
    LogicalOp { op: LogicalOp, lhs: Box<Expr>, rhs: Box<Expr>, span: Span },
    /// `name[index]` — character-indexing a string variable.
    StringIndex { name: String, index: Box<Expr>, span: Span },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal { span, .. }
            | Expr::Variable { span, .. }
            | Expr::FunctionCall { span, .. }
            | Expr::BinaryOp { span, .. }
            | Expr::Comparison { span, .. }
            | Expr::LogicalOp { span, .. }
            | Expr::StringIndex { span, .. } => *span,
        }
    }
}

/// A statement node (§3: `VariableDeclaration`, `Assignment`,
/// `FunctionCall` (as a statement, `call_stmt`), `Return`, `If`, `For`).
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    VariableDeclaration { name: String, declared_type: DeclType, span: Span },
    Assignment { target: String, value: Expr, span: Span },
    /// `call IDENT(args);` used as a statement (its value, if any, is discarded).
    Call { callee: String, args: Vec<Expr>, span: Span },
    Return { value: Option<Expr>, span: Span },
    If {
        cond: Expr,
        then_block: Vec<Stmt>,
        else_block: Option<Vec<Stmt>>,
        span: Span,
    },
    For {
        /// Always an `Assignment`, per the grammar's `for_stmt` production.
        init: Box<Stmt>,
        cond: Expr,
        /// Always an `Assignment`.
        update: Box<Stmt>,
        body: Vec<Stmt>,
        span: Span,
    },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::VariableDeclaration { span, .. }
            | Stmt::Assignment { span, .. }
            | Stmt::Call { span, .. }
            | Stmt::Return { span, .. }
            | Stmt::If { span, .. }
            | Stmt::For { span, .. } => *span,
        }
    }
}

/// A top-level `function_definition`.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// A `program_element`: a function definition, or any statement
/// (`var_decl` included) appearing directly at the top level.
#[derive(Clone, Debug, PartialEq)]
pub enum ProgramElement {
    Function(Function),
    Stmt(Stmt),
}

/// The root AST node: a source file is an ordered list of top-level elements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub elements: Vec<ProgramElement>,
}
