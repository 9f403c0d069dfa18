//! The six literal end-to-end scenarios a complete L compiler must
//! satisfy: three clean compiles, two diagnostic-producing programs, and
//! one lexical failure.

use lcore_drv::compile;

#[test]
fn arithmetic_and_print() {
    let result = compile("x = 2 + 3 * 4;\ncall print(x);");
    assert!(result.succeeded, "diagnostics: {:?}", result.diagnostics);
    assert!(result.text.contains("fn main()"));
    assert!(result.text.contains("x = (2.0 + (3.0 * 4.0));"));
    assert!(result.text.contains("println!(\"{}\", fmt_double(x));"));
}

#[test]
fn user_function_with_return() {
    let result = compile("square(n) { return n * n; }\ny = square(5);\ncall print(y);");
    assert!(result.succeeded, "diagnostics: {:?}", result.diagnostics);
    assert!(result.text.contains("fn square(mut n: f64) -> f64"));
    assert!(result.text.contains("y = square(5.0);"));
}

#[test]
fn type_mismatch_in_call_blocks_generation() {
    let result = compile("f(a) { return a + 1; }\ncall f(\"hello\");");
    assert!(!result.succeeded);
    assert_eq!(result.diagnostics.len(), 1, "{:?}", result.diagnostics);
    assert!(!result.text.contains("fn main"));
    assert!(result.text.contains("expected Double, found String"));
}

#[test]
fn undefined_function_reports_and_emits_nothing() {
    let result = compile("call mystery(1);");
    assert!(!result.succeeded);
    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.text.contains("Undefined function 'mystery'"));
    assert!(!result.text.contains("fn main"));
}

#[test]
fn if_and_for_control_flow() {
    let result = compile("s = 0;\nfor (i = 0; i < 5; i = i + 1) { s = s + i; }\ncall print(s);");
    assert!(result.succeeded, "diagnostics: {:?}", result.diagnostics);
    assert!(result.text.contains("while (i < 5.0) {"));
}

#[test]
fn unterminated_string_reports_lexical_diagnostic_first() {
    let result = compile("msg = \"hello;");
    assert!(!result.succeeded);
    assert_eq!(result.diagnostics[0].message, "Unterminated string literal");
    assert!(result.text.starts_with(lcore_drv::FAILURE_HEADER));
}
