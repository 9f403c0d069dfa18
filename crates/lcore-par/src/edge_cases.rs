//! Edge-case tests for the parser: malformed input, resynchronization,
//! and the function-vs-assignment disambiguation.

use crate::{ast::*, parse};
use lcore_lex::tokenize;

fn parse_source(source: &str) -> (Program, Vec<lcore_util::Diagnostic>) {
    let (tokens, lex_diags) = tokenize(source);
    assert!(lex_diags.is_empty(), "unexpected lex diagnostics: {lex_diags:?}");
    parse(tokens)
}

#[test]
fn empty_program_parses_to_no_elements() {
    let (program, diags) = parse_source("");
    assert!(diags.is_empty());
    assert!(program.elements.is_empty());
}

#[test]
fn function_vs_assignment_disambiguation() {
    let (program, diags) = parse_source("square(n) { return n * n; }\nx = 1;");
    assert!(diags.is_empty());
    assert_eq!(program.elements.len(), 2);
    assert!(matches!(program.elements[0], ProgramElement::Function(_)));
    assert!(matches!(
        program.elements[1],
        ProgramElement::Stmt(Stmt::Assignment { .. })
    ));
}

#[test]
fn var_decl_at_top_level() {
    let (program, diags) = parse_source("Double x;\nString s;");
    assert!(diags.is_empty());
    assert_eq!(program.elements.len(), 2);
    match &program.elements[0] {
        ProgramElement::Stmt(Stmt::VariableDeclaration { name, declared_type, .. }) => {
            assert_eq!(name, "x");
            assert_eq!(*declared_type, DeclType::Double);
        }
        other => panic!("expected var decl, got {other:?}"),
    }
}

#[test]
fn missing_semicolon_is_diagnosed_but_tree_still_links() {
    let (program, diags) = parse_source("x = 1\ny = 2;");
    assert!(!diags.is_empty());
    // The malformed assignment is still linked (§4.2 "Node construction").
    assert!(program
        .elements
        .iter()
        .any(|e| matches!(e, ProgramElement::Stmt(Stmt::Assignment { target, .. }) if target == "x")));
}

#[test]
fn unexpected_top_level_token_resyncs_to_next_statement() {
    let (program, diags) = parse_source("@@@;\nx = 1;");
    assert_eq!(diags.len(), 1);
    assert!(program
        .elements
        .iter()
        .any(|e| matches!(e, ProgramElement::Stmt(Stmt::Assignment { target, .. }) if target == "x")));
}

#[test]
fn for_loop_update_has_no_trailing_semicolon() {
    let (program, diags) = parse_source("for (i = 0; i < 5; i = i + 1) { }");
    assert!(diags.is_empty());
    match &program.elements[0] {
        ProgramElement::Stmt(Stmt::For { init, update, .. }) => {
            assert!(matches!(**init, Stmt::Assignment { .. }));
            assert!(matches!(**update, Stmt::Assignment { .. }));
        }
        other => panic!("expected for loop, got {other:?}"),
    }
}

#[test]
fn if_else_both_blocks_parsed() {
    let (program, diags) = parse_source("if (x < 1) { y = 1; } else { y = 2; }");
    assert!(diags.is_empty());
    match &program.elements[0] {
        ProgramElement::Stmt(Stmt::If { then_block, else_block, .. }) => {
            assert_eq!(then_block.len(), 1);
            assert_eq!(else_block.as_ref().unwrap().len(), 1);
        }
        other => panic!("expected if, got {other:?}"),
    }
}

#[test]
fn comparison_is_non_associative() {
    // `a < b < c` parses as `a < b` at the cmp_expr level, with the
    // trailing `< c` left unconsumed by parse_expression — the caller
    // (here, the assignment's trailing ";") triggers a diagnostic.
    let (_, diags) = parse_source("x = a < b < c;");
    assert!(!diags.is_empty());
}

#[test]
fn string_index_expression() {
    let (program, diags) = parse_source("x = s[0];");
    assert!(diags.is_empty());
    match &program.elements[0] {
        ProgramElement::Stmt(Stmt::Assignment { value: Expr::StringIndex { name, .. }, .. }) => {
            assert_eq!(name, "s");
        }
        other => panic!("expected string index assignment, got {other:?}"),
    }
}

#[test]
fn nested_call_expression_in_arithmetic() {
    let (program, diags) = parse_source("x = call add(1, call square(2));");
    assert!(diags.is_empty());
    match &program.elements[0] {
        ProgramElement::Stmt(Stmt::Assignment { value: Expr::FunctionCall { callee, args, .. }, .. }) => {
            assert_eq!(callee, "add");
            assert_eq!(args.len(), 2);
        }
        other => panic!("expected call expression, got {other:?}"),
    }
}

#[test]
fn precedence_multiplicative_over_additive() {
    let (program, _) = parse_source("x = 2 + 3 * 4;");
    match &program.elements[0] {
        ProgramElement::Stmt(Stmt::Assignment {
            value: Expr::BinaryOp { op: BinOp::Add, rhs, .. },
            ..
        }) => {
            assert!(matches!(**rhs, Expr::BinaryOp { op: BinOp::Mul, .. }));
        }
        other => panic!("expected additive-over-multiplicative tree, got {other:?}"),
    }
}

#[test]
fn logical_and_or_left_associative() {
    let (program, diags) = parse_source("x = a == 1 && b == 2 || c == 3;");
    assert!(diags.is_empty());
    match &program.elements[0] {
        ProgramElement::Stmt(Stmt::Assignment { value: Expr::LogicalOp { op: LogicalOp::Or, lhs, .. }, .. }) => {
            assert!(matches!(**lhs, Expr::LogicalOp { op: LogicalOp::And, .. }));
        }
        other => panic!("expected left-associative logical tree, got {other:?}"),
    }
}

#[test]
fn unterminated_function_body_reports_missing_delimiter() {
    let (_, diags) = parse_source("f(a) { return a;");
    assert!(!diags.is_empty());
}
