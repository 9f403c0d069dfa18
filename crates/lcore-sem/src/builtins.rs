//! The frozen built-in function catalogue (§4.3): roughly fifty
//! pre-declared callables the [`crate::symbol_table::SymbolTable`] seeds
//! before analysis begins, spanning string manipulation, arithmetic,
//! filesystem, and process/environment access.
//!
//! `print` is variadic and is special-cased by the analyzer and the code
//! generator rather than carried here with a fixed arity.

use crate::types::Type;

/// One catalogue entry: a name, its parameter types in order, and its
/// return type.
pub struct Builtin {
    pub name: &'static str,
    pub params: &'static [Type],
    pub return_type: Type,
}

use Type::{Boolean, Double, String as Str, Void};

pub const BUILTINS: &[Builtin] = &[
    // ---- string manipulation ----
    Builtin { name: "length", params: &[Str], return_type: Double },
    Builtin { name: "capitalize", params: &[Str], return_type: Str },
    Builtin { name: "uppercase", params: &[Str], return_type: Str },
    Builtin { name: "lowercase", params: &[Str], return_type: Str },
    Builtin { name: "is_empty", params: &[Str], return_type: Boolean },
    Builtin { name: "is_numeric", params: &[Str], return_type: Boolean },
    Builtin { name: "concat", params: &[Str, Str], return_type: Str },
    Builtin { name: "contains", params: &[Str, Str], return_type: Boolean },
    Builtin { name: "index_of", params: &[Str, Str], return_type: Double },
    Builtin { name: "repeat_string", params: &[Str, Double], return_type: Str },
    Builtin { name: "reverse", params: &[Str], return_type: Str },
    // ---- arithmetic ----
    Builtin { name: "add", params: &[Double, Double], return_type: Double },
    Builtin { name: "subtract", params: &[Double, Double], return_type: Double },
    Builtin { name: "multiply", params: &[Double, Double], return_type: Double },
    Builtin { name: "divide", params: &[Double, Double], return_type: Double },
    Builtin { name: "max", params: &[Double, Double], return_type: Double },
    Builtin { name: "min", params: &[Double, Double], return_type: Double },
    Builtin { name: "abs", params: &[Double], return_type: Double },
    Builtin { name: "compare", params: &[Double, Double], return_type: Double },
    Builtin { name: "factorial", params: &[Double], return_type: Double },
    Builtin { name: "is_prime", params: &[Double], return_type: Boolean },
    Builtin { name: "average", params: &[Double, Double], return_type: Double },
    Builtin { name: "round", params: &[Double], return_type: Double },
    Builtin { name: "floor", params: &[Double], return_type: Double },
    Builtin { name: "ceil", params: &[Double], return_type: Double },
    Builtin { name: "is_even", params: &[Double], return_type: Boolean },
    Builtin { name: "is_odd", params: &[Double], return_type: Boolean },
    Builtin { name: "digit_sum", params: &[Double], return_type: Double },
    Builtin { name: "is_divisible", params: &[Double, Double], return_type: Boolean },
    Builtin { name: "modulus", params: &[Double, Double], return_type: Double },
    Builtin { name: "in_range", params: &[Double, Double, Double], return_type: Boolean },
    Builtin { name: "random_num", params: &[Double, Double], return_type: Double },
    Builtin { name: "square", params: &[Double], return_type: Double },
    Builtin { name: "cube", params: &[Double], return_type: Double },
    Builtin { name: "percent_of", params: &[Double, Double], return_type: Double },
    Builtin { name: "roll_dice", params: &[Double], return_type: Double },
    Builtin { name: "distance", params: &[Double, Double, Double, Double], return_type: Double },
    Builtin { name: "is_positive", params: &[Double], return_type: Boolean },
    Builtin { name: "is_greater", params: &[Double, Double], return_type: Boolean },
    // ---- filesystem ----
    Builtin { name: "create_file", params: &[Str], return_type: Void },
    Builtin { name: "delete_file", params: &[Str], return_type: Void },
    Builtin { name: "copy_file", params: &[Str, Str], return_type: Void },
    Builtin { name: "move_file", params: &[Str, Str], return_type: Void },
    // ---- process / environment ----
    Builtin { name: "exec", params: &[Str], return_type: Str },
    Builtin { name: "get_wd", params: &[], return_type: Str },
    Builtin { name: "get_username", params: &[], return_type: Str },
    Builtin { name: "get_user_home_dir", params: &[], return_type: Str },
    Builtin { name: "change_dir", params: &[Str], return_type: Void },
    Builtin { name: "get_env", params: &[Str], return_type: Str },
    // ---- misc ----
    Builtin { name: "is_palindrome", params: &[Str], return_type: Boolean },
];

pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

/// Built-in names whose user-defined namesakes take `String` parameters
/// under the name-based heuristic (§4.4 "Parameter-type inference for
/// user functions"). Every other user function takes `Double` parameters.
pub const STRING_PARAM_HEURISTIC_NAMES: &[&str] = &[
    "concat",
    "reverse",
    "uppercase",
    "lowercase",
    "is_empty",
    "is_numeric",
    "create_file",
    "delete_file",
    "copy_file",
    "move_file",
    "get_wd",
    "get_username",
    "get_user_home_dir",
    "change_dir",
    "get_env",
    "contains",
    "index_of",
    "repeat_string",
    "capitalize",
];

/// Built-in names whose user-defined namesakes return `Boolean` under the
/// return-type heuristic (§4.4 "Return-type inference for user functions").
pub const BOOLEAN_RETURN_HEURISTIC_NAMES: &[&str] = &[
    "is_empty",
    "is_numeric",
    "contains",
    "is_prime",
    "is_even",
    "is_odd",
    "is_divisible",
    "in_range",
    "is_positive",
    "is_greater",
    "is_palindrome",
];

/// Built-in names whose user-defined namesakes return `String` under the
/// return-type heuristic.
pub const STRING_RETURN_HEURISTIC_NAMES: &[&str] = &[
    "capitalize",
    "uppercase",
    "lowercase",
    "concat",
    "reverse",
    "repeat_string",
    "get_wd",
    "get_username",
    "get_user_home_dir",
    "get_env",
    "exec",
];

/// Applies the name-based parameter-type heuristic to a user function:
/// every parameter is `String` if the name matches a known
/// string-oriented built-in, otherwise every parameter is `Double`.
pub fn heuristic_param_type(function_name: &str) -> Type {
    if STRING_PARAM_HEURISTIC_NAMES.contains(&function_name) {
        Type::String
    } else {
        Type::Double
    }
}

/// Applies the name-based return-type heuristic to a user function, or
/// `None` if the name doesn't match the catalogue (the caller then falls
/// back to inferring from the first `return`, and finally to `Double`).
pub fn heuristic_return_type(function_name: &str) -> Option<Type> {
    if BOOLEAN_RETURN_HEURISTIC_NAMES.contains(&function_name) {
        Some(Type::Boolean)
    } else if STRING_RETURN_HEURISTIC_NAMES.contains(&function_name) {
        Some(Type::String)
    } else if lookup(function_name).is_some() {
        // A built-in name not in either heuristic list (e.g. "add",
        // "factorial") still names its catalogue return type.
        Some(lookup(function_name).unwrap().return_type)
    } else {
        None
    }
}
