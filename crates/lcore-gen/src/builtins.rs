//! Built-in dispatch table (§4.5 rule 7): maps each built-in name to
//! either a direct inline host-language expression or a call into a
//! generated adapter function, plus the adapter and helper function
//! source text the generator emits only for built-ins actually
//! referenced in the AST (§4.5 rule 1b/1c — "one per built-in *actually
//! referenced*").

/// How a built-in call lowers to Rust.
pub enum Dispatch {
    /// Inlined at the call site. The function receives the already-emitted
    /// Rust expression text for each argument, in order.
    Direct(fn(&[String]) -> String),
    /// Routed through a free function of this name, emitted once per
    /// program if any referenced built-in dispatches to it.
    Adapter(&'static str),
}

/// Looks up how built-in `name` should be lowered. `None` means `name`
/// isn't in the catalogue — the generator then assumes it's a
/// user-defined function and emits a direct call (§4.5 rule 7, "Unknown
/// callees pass through as direct calls").
pub fn dispatch(name: &str) -> Option<Dispatch> {
    use Dispatch::{Adapter, Direct};
    Some(match name {
        // ---- string manipulation ----
        "length" => Direct(|a| format!("(({}).chars().count() as f64)", a[0])),
        "capitalize" => Adapter("capitalize"),
        "uppercase" => Direct(|a| format!("({}).to_uppercase()", a[0])),
        "lowercase" => Direct(|a| format!("({}).to_lowercase()", a[0])),
        "is_empty" => Direct(|a| format!("({}).is_empty()", a[0])),
        "is_numeric" => Adapter("is_numeric"),
        "concat" => Direct(|a| format!("format!(\"{{}}{{}}\", {}, {})", a[0], a[1])),
        "contains" => Direct(|a| format!("({}).contains({}.as_str())", a[0], a[1])),
        "index_of" => Direct(|a| {
            format!(
                "(({}).find({}.as_str()).map(|i| i as f64).unwrap_or(-1.0))",
                a[0], a[1]
            )
        }),
        "repeat_string" => Adapter("repeat_string"),
        "reverse" => Direct(|a| format!("({}).chars().rev().collect::<String>()", a[0])),

        // ---- arithmetic ----
        "add" => Direct(|a| format!("({} + {})", a[0], a[1])),
        "subtract" => Direct(|a| format!("({} - {})", a[0], a[1])),
        "multiply" => Direct(|a| format!("({} * {})", a[0], a[1])),
        "divide" => Direct(|a| format!("({} / {})", a[0], a[1])),
        "max" => Direct(|a| format!("f64::max({}, {})", a[0], a[1])),
        "min" => Direct(|a| format!("f64::min({}, {})", a[0], a[1])),
        "abs" => Direct(|a| format!("({}).abs()", a[0])),
        "compare" => Adapter("compare"),
        "factorial" => Adapter("factorial"),
        "is_prime" => Adapter("is_prime"),
        "average" => Direct(|a| format!("(({} + {}) / 2.0)", a[0], a[1])),
        "round" => Direct(|a| format!("({}).round()", a[0])),
        "floor" => Direct(|a| format!("({}).floor()", a[0])),
        "ceil" => Direct(|a| format!("({}).ceil()", a[0])),
        "is_even" => Direct(|a| format!("({} % 2.0 == 0.0)", a[0])),
        "is_odd" => Direct(|a| format!("({} % 2.0 != 0.0)", a[0])),
        "digit_sum" => Adapter("digit_sum"),
        "is_divisible" => Direct(|a| format!("({} % {} == 0.0)", a[0], a[1])),
        "modulus" => Direct(|a| format!("({} % {})", a[0], a[1])),
        "in_range" => Direct(|a| format!("({} >= {} && {} <= {})", a[0], a[1], a[0], a[2])),
        "random_num" => Adapter("random_num"),
        "square" => Direct(|a| format!("({} * {})", a[0], a[0])),
        "cube" => Direct(|a| format!("({} * {} * {})", a[0], a[0], a[0])),
        "percent_of" => Direct(|a| format!("(({} / 100.0) * {})", a[0], a[1])),
        "roll_dice" => Adapter("roll_dice"),
        "distance" => Adapter("distance"),
        "is_positive" => Direct(|a| format!("({} > 0.0)", a[0])),
        "is_greater" => Direct(|a| format!("({} > {})", a[0], a[1])),

        // ---- filesystem ----
        "create_file" => Direct(|a| format!("{{ let _ = std::fs::File::create({}); }}", a[0])),
        "delete_file" => Direct(|a| format!("{{ let _ = std::fs::remove_file({}); }}", a[0])),
        "copy_file" => Direct(|a| format!("{{ let _ = std::fs::copy({}, {}); }}", a[0], a[1])),
        "move_file" => Direct(|a| format!("{{ let _ = std::fs::rename({}, {}); }}", a[0], a[1])),

        // ---- process / environment ----
        "exec" => Adapter("exec"),
        "get_wd" => Direct(|_| {
            "std::env::current_dir().map(|p| p.display().to_string()).unwrap_or_default()"
                .to_string()
        }),
        "get_username" => Direct(|_| "std::env::var(\"USER\").unwrap_or_default()".to_string()),
        "get_user_home_dir" => Direct(|_| "std::env::var(\"HOME\").unwrap_or_default()".to_string()),
        "change_dir" => Direct(|a| format!("{{ let _ = std::env::set_current_dir({}); }}", a[0])),
        "get_env" => Direct(|a| format!("std::env::var({}).unwrap_or_default()", a[0])),

        // ---- misc ----
        "is_palindrome" => Adapter("is_palindrome"),

        _ => return None,
    })
}

/// Source text for a generated adapter function, keyed by the name
/// [`dispatch`] routes to. Four of these (`compare`, `random_num`,
/// `roll_dice`, `distance`, `exec`) are adapters proper; the other five
/// (`factorial`, `is_prime`, `digit_sum`, `is_palindrome`, `is_numeric`,
/// `repeat_string`) are exactly the fixed helper routines from §4.5 rule
/// 1c — their built-in's signature matches the helper's, so the helper
/// doubles as its own adapter.
pub fn adapter_source(fn_name: &str) -> &'static str {
    match fn_name {
        "factorial" => {
            "fn factorial(n: f64) -> f64 {\n    let mut result = 1.0;\n    let mut i = 2.0;\n    while i <= n {\n        result = result * i;\n        i = i + 1.0;\n    }\n    result\n}"
        }
        "is_prime" => {
            "fn is_prime(n: f64) -> bool {\n    if n < 2.0 {\n        return false;\n    }\n    let mut i = 2.0;\n    while i * i <= n {\n        if n % i == 0.0 {\n            return false;\n        }\n        i = i + 1.0;\n    }\n    true\n}"
        }
        "digit_sum" => {
            "fn digit_sum(n: f64) -> f64 {\n    let mut total = 0.0;\n    let mut value = n.abs();\n    while value >= 1.0 {\n        total = total + (value % 10.0);\n        value = (value / 10.0).floor();\n    }\n    total\n}"
        }
        "is_palindrome" => {
            "fn is_palindrome(s: String) -> bool {\n    let reversed: String = s.chars().rev().collect();\n    s == reversed\n}"
        }
        "is_numeric" => "fn is_numeric(s: String) -> bool {\n    s.parse::<f64>().is_ok()\n}",
        "repeat_string" => {
            "fn repeat_string(s: String, count: f64) -> String {\n    let mut out = String::new();\n    let mut i = 0.0;\n    while i < count {\n        out.push_str(&s);\n        i = i + 1.0;\n    }\n    out\n}"
        }
        "capitalize" => {
            "fn capitalize(s: String) -> String {\n    let mut chars = s.chars();\n    match chars.next() {\n        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),\n        None => s,\n    }\n}"
        }
        "compare" => {
            "fn compare(a: f64, b: f64) -> f64 {\n    if a < b {\n        -1.0\n    } else if a > b {\n        1.0\n    } else {\n        0.0\n    }\n}"
        }
        "random_num" => {
            "fn random_num(lo: f64, hi: f64) -> f64 {\n    lo + next_random() * (hi - lo)\n}"
        }
        "roll_dice" => {
            "fn roll_dice(sides: f64) -> f64 {\n    (next_random() * sides).floor() + 1.0\n}"
        }
        "distance" => {
            "fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {\n    let dx = x2 - x1;\n    let dy = y2 - y1;\n    (dx * dx + dy * dy).sqrt()\n}"
        }
        "exec" => {
            "fn exec(cmd: String) -> String {\n    std::process::Command::new(\"/bin/sh\")\n        .arg(\"-c\")\n        .arg(&cmd)\n        .output()\n        .map(|o| String::from_utf8_lossy(&o.stdout).to_string())\n        .unwrap_or_default()\n}"
        }
        other => unreachable!("no adapter source registered for '{other}'"),
    }
}

/// Adapters that need the shared pseudo-random generator emitted in the
/// preamble.
pub fn needs_rng(fn_name: &str) -> bool {
    matches!(fn_name, "random_num" | "roll_dice")
}

/// Source text for the self-contained xorshift64* generator emitted once
/// if any referenced built-in needs randomness (§4.5's host-language
/// choice carries no external RNG crate into *generated* text, since the
/// generated program is standalone source with no declared dependencies
/// of its own).
pub const RNG_PREAMBLE: &str = "static RNG_STATE: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0x2545_F491_4F6C_DD1D);\n\nfn next_random() -> f64 {\n    use std::sync::atomic::Ordering;\n    let mut x = RNG_STATE.load(Ordering::Relaxed);\n    if x == 0 {\n        x = std::time::SystemTime::now()\n            .duration_since(std::time::UNIX_EPOCH)\n            .map(|d| d.as_nanos() as u64)\n            .unwrap_or(0x2545_F491_4F6C_DD1D)\n            | 1;\n    }\n    x ^= x << 13;\n    x ^= x >> 7;\n    x ^= x << 17;\n    RNG_STATE.store(x, Ordering::Relaxed);\n    (x >> 11) as f64 / (1u64 << 53) as f64\n}";
