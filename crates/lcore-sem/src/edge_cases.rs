//! Edge-case tests for semantic analysis: the end-to-end scenarios from
//! §8 plus the name-based heuristics and diagnostic-suppression rules
//! that don't show up in the happy-path tests.

use crate::{analyze, Type};
use lcore_lex::tokenize;
use lcore_par::parse;

fn analyze_source(source: &str) -> (crate::SymbolTable, Vec<lcore_util::Diagnostic>) {
    let (tokens, lex_diags) = tokenize(source);
    assert!(lex_diags.is_empty(), "unexpected lex diagnostics: {lex_diags:?}");
    let (program, parse_diags) = parse(tokens);
    assert!(parse_diags.is_empty(), "unexpected parse diagnostics: {parse_diags:?}");
    analyze(&program)
}

#[test]
fn scenario_arithmetic_and_print_has_no_diagnostics() {
    let (_, diags) = analyze_source("x = 2 + 3 * 4;\ncall print(x);");
    assert!(diags.is_empty(), "{diags:?}");
}

#[test]
fn scenario_user_function_with_return() {
    let (symbols, diags) = analyze_source(
        "square(n) { return n * n; }\ny = square(5);\ncall print(y);",
    );
    assert!(diags.is_empty(), "{diags:?}");
    assert_eq!(symbols.get_function_return("square"), Type::Double);
    assert_eq!(symbols.get_function_params("square"), &[Type::Double]);
    assert_eq!(symbols.get_type("y"), Type::Double);
}

#[test]
fn scenario_type_mismatch_in_call() {
    let (_, diags) = analyze_source(
        "f(a) { return a + 1; }\ncall f(\"hello\");",
    );
    assert_eq!(diags.len(), 1, "{diags:?}");
    assert!(diags[0].message.contains("expected Double"));
}

#[test]
fn scenario_undefined_function() {
    let (_, diags) = analyze_source("call mystery(1);");
    assert_eq!(diags.len(), 1, "{diags:?}");
    assert_eq!(diags[0].message, "Undefined function 'mystery'");
}

#[test]
fn scenario_if_and_for_control_flow() {
    let (_, diags) = analyze_source(
        "s = 0;\nfor (i = 0; i < 5; i = i + 1) { s = s + i; }\ncall print(s);",
    );
    assert!(diags.is_empty(), "{diags:?}");
}

#[test]
fn string_param_heuristic_from_builtin_name_collision() {
    let (symbols, diags) = analyze_source(
        "concat(a, b) { return a; }\ncall print(call concat(\"x\", \"y\"));",
    );
    assert!(diags.is_empty(), "{diags:?}");
    assert_eq!(symbols.get_function_params("concat"), &[Type::String, Type::String]);
}

#[test]
fn boolean_return_heuristic_from_builtin_name_collision() {
    let (symbols, _) = analyze_source("is_even(n) { return n; }\n");
    assert_eq!(symbols.get_function_return("is_even"), Type::Boolean);
}

#[test]
fn condition_must_be_boolean() {
    let (_, diags) = analyze_source("if (1) { call print(1); }");
    assert_eq!(diags.len(), 1, "{diags:?}");
    assert!(diags[0].message.contains("Condition must be Boolean"));
}

#[test]
fn undefined_variable_in_condition_is_not_double_reported() {
    let (_, diags) = analyze_source("if (missing) { call print(1); }");
    assert_eq!(diags.len(), 1, "{diags:?}");
    assert_eq!(diags[0].message, "Undefined variable 'missing'");
}

#[test]
fn call_arity_mismatch() {
    let (_, diags) = analyze_source("call add(1);");
    assert_eq!(diags.len(), 1, "{diags:?}");
    assert!(diags[0].message.contains("expects 2 argument"));
}

#[test]
fn string_concatenation_with_plus() {
    let (symbols, diags) = analyze_source("s = \"a\" + \"b\";");
    assert!(diags.is_empty(), "{diags:?}");
    assert_eq!(symbols.get_type("s"), Type::String);
}

#[test]
fn string_plus_double_coerces_to_string() {
    let (symbols, diags) = analyze_source("s = \"count: \" + 5;");
    assert!(diags.is_empty(), "{diags:?}");
    assert_eq!(symbols.get_type("s"), Type::String);
}

#[test]
fn subtraction_requires_double_on_both_sides() {
    let (_, diags) = analyze_source("x = \"a\" - 1;");
    assert_eq!(diags.len(), 1, "{diags:?}");
    assert!(diags[0].message.contains("cannot be applied"));
}

#[test]
fn string_index_always_yields_string() {
    let (symbols, diags) = analyze_source(
        "String s;\ns = \"hi\";\nc = s[0];\ncall print(c);",
    );
    assert!(diags.is_empty(), "{diags:?}");
    assert_eq!(symbols.get_type("c"), Type::String);
}

#[test]
fn var_decl_then_assignment_preserves_declared_type() {
    let (symbols, diags) = analyze_source("Double x;\nx = 5;\n");
    assert!(diags.is_empty(), "{diags:?}");
    assert_eq!(symbols.get_type("x"), Type::Double);
}

#[test]
fn last_write_wins_across_redeclaration() {
    let (symbols, diags) = analyze_source("x = 1;\nx = \"now a string\";\n");
    assert!(diags.is_empty(), "{diags:?}");
    assert_eq!(symbols.get_type("x"), Type::String);
}

#[test]
fn forward_call_to_undeclared_function_is_diagnosed() {
    // Single top-down pass: a call before the callee's definition doesn't
    // resolve, matching the reference's last-write-wins single pass (§9).
    let (_, diags) = analyze_source("call later(1);\nlater(n) { return n; }\n");
    assert_eq!(diags.len(), 1, "{diags:?}");
    assert_eq!(diags[0].message, "Undefined function 'later'");
}

#[test]
fn bare_return_defaults_function_to_double() {
    let (symbols, diags) = analyze_source("noop() { return; }\n");
    assert!(diags.is_empty(), "{diags:?}");
    assert_eq!(symbols.get_function_return("noop"), Type::Double);
}

#[test]
fn print_accepts_zero_or_many_string_and_double_args() {
    let (_, diags) = analyze_source("call print();\ncall print(\"a\", 1, \"b\");");
    assert!(diags.is_empty(), "{diags:?}");
}

#[test]
fn symbol_population_invariant_holds_for_every_user_function() {
    let (symbols, diags) = analyze_source(
        "add_one(n) { return n + 1; }\ngreet(name) { return name; }\n",
    );
    assert!(diags.is_empty(), "{diags:?}");
    assert!(symbols.is_callable("add_one"));
    assert_eq!(symbols.get_function_params("add_one").len(), 1);
    assert!(symbols.is_callable("greet"));
    assert_eq!(symbols.get_function_params("greet").len(), 1);
}
