//! Full-pipeline integration tests exercising a broader slice of L than
//! the six literal §8 scenarios: nested control flow, the built-in
//! catalogue, the name-based parameter/return heuristics, and recursion.

use lcore_drv::compile;

fn ok(src: &str) -> String {
    let result = compile(src);
    assert!(result.succeeded, "diagnostics: {:?}", result.diagnostics);
    result.text
}

fn err(src: &str) -> Vec<String> {
    let result = compile(src);
    assert!(!result.succeeded);
    result.diagnostics.iter().map(|d| d.message.clone()).collect()
}

#[test]
fn nested_if_inside_for_inside_function() {
    let out = ok(
        "classify(n) {\n\
           result = 0;\n\
           for (i = 0; i < n; i = i + 1) {\n\
             if (call is_even(i)) {\n\
               result = result + 1;\n\
             } else {\n\
               result = result - 1;\n\
             }\n\
           }\n\
           return result;\n\
         }\n\
         call print(classify(10));\n",
    );
    assert!(out.contains("fn classify(mut n: f64) -> f64"));
    assert!(out.contains("if (i % 2.0 == 0.0) {"));
}

#[test]
fn recursive_user_function_compiles() {
    let out = ok("fact(n) {\n  if (n <= 1) { return 1; }\n  return n * fact(n - 1);\n}\ncall print(fact(5));\n");
    assert!(out.contains("fn fact(mut n: f64) -> f64"));
    assert!(out.contains("fact((n - 1.0))"));
}

#[test]
fn string_builtin_catalogue_round_trips() {
    let out = ok(
        "s = \"hello\";\n\
         call print(call uppercase(s));\n\
         call print(call length(s));\n\
         call print(call reverse(s));\n\
         call print(call is_palindrome(s));\n",
    );
    assert!(out.contains("to_uppercase"));
    assert!(out.contains("chars().count()"));
    assert!(out.contains("fn is_palindrome"));
}

#[test]
fn user_function_named_like_string_builtin_takes_string_params() {
    // `concat` collides with the built-in string-param heuristic name
    // (§4.4): every parameter on the user's own `concat` is `String`.
    let out = ok("concat(a, b) {\n  return a;\n}\ncall print(concat(\"x\", \"y\"));\n");
    assert!(out.contains("fn concat(mut a: String, mut b: String) -> String"));
}

#[test]
fn user_function_named_like_boolean_builtin_returns_boolean() {
    let out = ok("is_even(n) {\n  return n == 2;\n}\nif (is_even(2)) {\n  call print(\"yes\");\n}\n");
    assert!(out.contains("fn is_even(mut n: f64) -> bool"));
}

#[test]
fn call_arity_mismatch_is_reported() {
    let msgs = err("call add(1);");
    assert!(msgs.iter().any(|m| m.contains("expects 2 argument(s), found 1")));
}

#[test]
fn condition_must_be_boolean() {
    let msgs = err("if (1 + 1) {\n  call print(\"no\");\n}\n");
    assert!(msgs.iter().any(|m| m.contains("Condition must be Boolean")));
}

#[test]
fn string_concatenation_with_plus_is_accepted() {
    let out = ok("greeting = \"hello, \" + \"world\";\ncall print(greeting);\n");
    assert!(out.contains("let mut greeting: String"));
}

#[test]
fn arithmetic_minus_on_strings_is_rejected() {
    let msgs = err("x = \"a\" - \"b\";\ncall print(x);\n");
    assert!(msgs.iter().any(|m| m.contains("cannot be applied to String and String")));
}
