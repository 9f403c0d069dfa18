//! lcore-gen - Code generation for L (§4.5).
//!
//! Takes a validated [`Program`] and the [`SymbolTable`] the analyzer left
//! behind, and emits one Rust-flavored source string. The contract is
//! deliberately permissive: this crate does not re-check types — a
//! well-formed, analyzer-approved tree always lowers to something
//! compilable, but a malformed one may lower to uncompilable text rather
//! than panic (§4.5 "Contract").

pub mod builtins;

#[cfg(test)]
mod edge_cases;

use indexmap::{IndexMap, IndexSet};
use lcore_par::{Expr, Function, LogicalOp, Program, ProgramElement, Stmt};
use lcore_sem::{infer_expr_type, SymbolTable, Type};

const FMT_DOUBLE_PREAMBLE: &str = "fn fmt_double(value: f64) -> String {\n    if value.fract() == 0.0 {\n        format!(\"{:.1}\", value)\n    } else {\n        value.to_string()\n    }\n}";

/// Generates one Rust translation unit for `program`, using `symbols` (the
/// finalized table the analyzer produced) to type every hoisted
/// declaration, function signature, and `print` argument.
///
/// Deterministic: the same `(program, symbols)` always produces the same
/// string, byte for byte — functions emit in source order, hoisted
/// declarations emit in first-occurrence order, and referenced built-in
/// adapters emit in the order they are first reached by the traversal
/// (§4.5 "The emitter must be deterministic").
pub fn generate(program: &Program, symbols: &SymbolTable) -> String {
    let mut referenced: IndexSet<&'static str> = IndexSet::new();

    let mut functions_src = String::new();
    for element in &program.elements {
        if let ProgramElement::Function(f) = element {
            functions_src.push_str(&gen_function(f, symbols, &mut referenced));
            functions_src.push('\n');
        }
    }

    let top_stmts: Vec<&Stmt> = program
        .elements
        .iter()
        .filter_map(|e| match e {
            ProgramElement::Stmt(s) => Some(s),
            ProgramElement::Function(_) => None,
        })
        .collect();

    let mut decls: IndexMap<String, Type> = IndexMap::new();
    for s in &top_stmts {
        collect_decl_stmt(s, symbols, &mut decls);
    }

    let mut main_body = String::new();
    for (name, ty) in &decls {
        main_body.push_str(&format!(
            "    let mut {name}: {} = {};\n",
            rust_type(*ty),
            default_value(*ty)
        ));
    }
    for s in &top_stmts {
        main_body.push_str(&emit_stmt(s, 1, symbols, &mut referenced));
    }

    let needs_rng = referenced.iter().any(|n| builtins::needs_rng(n));

    let mut adapters_src = String::new();
    for name in &referenced {
        adapters_src.push_str(builtins::adapter_source(name));
        adapters_src.push_str("\n\n");
    }

    let mut out = String::new();
    out.push_str(FMT_DOUBLE_PREAMBLE);
    out.push_str("\n\n");
    if needs_rng {
        out.push_str(builtins::RNG_PREAMBLE);
        out.push_str("\n\n");
    }
    out.push_str(&functions_src);
    out.push_str(&adapters_src);
    out.push_str("fn main() {\n");
    out.push_str(&main_body);
    out.push_str("}\n");
    out
}

/// Emits one user-defined function (§4.5 rule 1a): typed parameters and
/// return type come from the symbol table the analyzer populated via the
/// name-based heuristics (§4.4).
fn gen_function(f: &Function, symbols: &SymbolTable, referenced: &mut IndexSet<&'static str>) -> String {
    let param_types = symbols.get_function_params(&f.name).to_vec();
    let return_type = symbols.get_function_return(&f.name);

    let params_str = f
        .params
        .iter()
        .zip(param_types.iter())
        .map(|(name, ty)| format!("mut {name}: {}", rust_type(*ty)))
        .collect::<Vec<_>>()
        .join(", ");

    let mut decls: IndexMap<String, Type> = IndexMap::new();
    collect_decls(&f.body, symbols, &mut decls);
    for p in &f.params {
        decls.shift_remove(p);
    }

    let mut body = String::new();
    for (name, ty) in &decls {
        body.push_str(&format!(
            "    let mut {name}: {} = {};\n",
            rust_type(*ty),
            default_value(*ty)
        ));
    }
    for stmt in &f.body {
        body.push_str(&emit_stmt(stmt, 1, symbols, referenced));
    }

    format!(
        "fn {}({params_str}) -> {} {{\n{body}}}\n",
        f.name,
        rust_type(return_type)
    )
}

/// Local-variable hoisting (§4.5 rule 2): walks `stmts` (descending into
/// `if`/`for` bodies, which don't scope in L) collecting every assignment
/// target and variable declaration, deduped by first occurrence, typed
/// from the finalized symbol table rather than the declaration site —
/// a name's type can change between its `var_decl` and the symbol table's
/// final record of it (L has no block scoping; "last write wins", §4.3).
fn collect_decls(stmts: &[Stmt], symbols: &SymbolTable, order: &mut IndexMap<String, Type>) {
    for stmt in stmts {
        collect_decl_stmt(stmt, symbols, order);
    }
}

fn collect_decl_stmt(stmt: &Stmt, symbols: &SymbolTable, order: &mut IndexMap<String, Type>) {
    match stmt {
        Stmt::VariableDeclaration { name, .. } => {
            order.entry(name.clone()).or_insert_with(|| symbols.get_type(name));
        }
        Stmt::Assignment { target, .. } => {
            order.entry(target.clone()).or_insert_with(|| symbols.get_type(target));
        }
        Stmt::If { then_block, else_block, .. } => {
            collect_decls(then_block, symbols, order);
            if let Some(else_block) = else_block {
                collect_decls(else_block, symbols, order);
            }
        }
        Stmt::For { init, update, body, .. } => {
            collect_decl_stmt(init, symbols, order);
            collect_decl_stmt(update, symbols, order);
            collect_decls(body, symbols, order);
        }
        Stmt::Call { .. } | Stmt::Return { .. } => {}
    }
}

/// Translates one statement at `depth` levels of indentation. A bare
/// `VariableDeclaration` contributes no runtime statement — its slot was
/// already hoisted and default-initialized (§4.5 rule 2, "subsequent
/// assignments use plain assignment, not declaration").
fn emit_stmt(stmt: &Stmt, depth: usize, symbols: &SymbolTable, referenced: &mut IndexSet<&'static str>) -> String {
    let indent = "    ".repeat(depth);
    match stmt {
        Stmt::VariableDeclaration { .. } => String::new(),
        Stmt::Assignment { target, value, .. } => {
            format!("{indent}{target} = {};\n", emit_expr(value, symbols, referenced))
        }
        Stmt::Call { callee, args, .. } => {
            if callee == "print" {
                format!("{indent}{}\n", emit_print(args, symbols, referenced))
            } else {
                format!("{indent}{}\n", emit_call_stmt(callee, args, symbols, referenced))
            }
        }
        Stmt::Return { value, .. } => match value {
            Some(e) => format!("{indent}return {};\n", emit_expr(e, symbols, referenced)),
            None => format!("{indent}return;\n"),
        },
        // §4.5 rule 9.
        Stmt::If { cond, then_block, else_block, .. } => {
            let mut s = format!("{indent}if {} {{\n", emit_expr(cond, symbols, referenced));
            for st in then_block {
                s.push_str(&emit_stmt(st, depth + 1, symbols, referenced));
            }
            s.push_str(&indent);
            s.push('}');
            if let Some(else_block) = else_block {
                s.push_str(" else {\n");
                for st in else_block {
                    s.push_str(&emit_stmt(st, depth + 1, symbols, referenced));
                }
                s.push_str(&indent);
                s.push('}');
            }
            s.push('\n');
            s
        }
        // Rust has no C-style `for`; lowered to the init assignment
        // followed by a `while` carrying the condition and the update
        // assignment at the end of the loop body (§4.5 rule 8, adapted to
        // the chosen host per §4.5 "Host-language choice").
        Stmt::For { init, cond, update, body, .. } => {
            let mut s = emit_stmt(init, depth, symbols, referenced);
            s.push_str(&format!("{indent}while {} {{\n", emit_expr(cond, symbols, referenced)));
            for st in body {
                s.push_str(&emit_stmt(st, depth + 1, symbols, referenced));
            }
            s.push_str(&emit_stmt(update, depth + 1, symbols, referenced));
            s.push_str(&indent);
            s.push_str("}\n");
            s
        }
    }
}

/// A built-in or user-defined call used as a statement, its value (if
/// any) discarded — the grammar's `call_stmt` production.
fn emit_call_stmt(callee: &str, args: &[Expr], symbols: &SymbolTable, referenced: &mut IndexSet<&'static str>) -> String {
    format!("{};", dispatch_call(callee, args, symbols, referenced))
}

/// §4.5 rule 7: resolves one call (built-in or, on a catalogue miss,
/// assumed user-defined) to Rust expression text, recording any adapter
/// this call pulls in so it gets emitted exactly once.
fn dispatch_call(callee: &str, args: &[Expr], symbols: &SymbolTable, referenced: &mut IndexSet<&'static str>) -> String {
    let arg_strs: Vec<String> = args.iter().map(|a| emit_expr(a, symbols, referenced)).collect();
    match builtins::dispatch(callee) {
        Some(builtins::Dispatch::Direct(f)) => f(&arg_strs),
        Some(builtins::Dispatch::Adapter(name)) => {
            referenced.insert(name);
            format!("{name}({})", arg_strs.join(", "))
        }
        None => format!("{callee}({})", arg_strs.join(", ")),
    }
}

/// `print` special-case (§4.5 rule 4): zero arguments emits an empty
/// print; one or more are joined by a single space, each `Double`
/// argument wrapped in `fmt_double` (§4.5 "Host-language choice") so the
/// textual output matches the reference byte for byte.
fn emit_print(args: &[Expr], symbols: &SymbolTable, referenced: &mut IndexSet<&'static str>) -> String {
    if args.is_empty() {
        return "println!();".to_string();
    }
    let mut placeholders = Vec::with_capacity(args.len());
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        let text = emit_expr(arg, symbols, referenced);
        placeholders.push("{}");
        if infer_expr_type(arg, symbols) == Type::Double {
            values.push(format!("fmt_double({text})"));
        } else {
            values.push(text);
        }
    }
    format!("println!(\"{}\", {});", placeholders.join(" "), values.join(", "))
}

/// Translates one expression to a Rust expression string (§4.5 rules 3,
/// 5, 6, 7).
fn emit_expr(expr: &Expr, symbols: &SymbolTable, referenced: &mut IndexSet<&'static str>) -> String {
    match expr {
        Expr::Literal { text, .. } => emit_literal(text),
        Expr::Variable { name, .. } => name.clone(),
        Expr::FunctionCall { callee, args, .. } => {
            if callee == "print" {
                // `print` used in expression position (legal per the
                // grammar's `call_expr`, though semantically `Void`):
                // evaluate for its side effect in a block.
                format!("{{ {} }}", emit_print(args, symbols, referenced))
            } else {
                dispatch_call(callee, args, symbols, referenced)
            }
        }
        Expr::BinaryOp { op, lhs, rhs, .. } => format!(
            "({} {} {})",
            emit_expr(lhs, symbols, referenced),
            op.as_str(),
            emit_expr(rhs, symbols, referenced)
        ),
        Expr::Comparison { op, lhs, rhs, .. } => format!(
            "({} {} {})",
            emit_expr(lhs, symbols, referenced),
            op.as_str(),
            emit_expr(rhs, symbols, referenced)
        ),
        Expr::LogicalOp { op, lhs, rhs, .. } => {
            let sym = match op {
                LogicalOp::And => "&&",
                LogicalOp::Or => "||",
            };
            format!(
                "({} {sym} {})",
                emit_expr(lhs, symbols, referenced),
                emit_expr(rhs, symbols, referenced)
            )
        }
        // §4.5 rule 6: character at an integer-coerced index, as a
        // one-character String (§4.4 "StringIndex: String").
        Expr::StringIndex { name, index, .. } => format!(
            "({name}.chars().nth(({}) as usize).map(|c| c.to_string()).unwrap_or_default())",
            emit_expr(index, symbols, referenced)
        ),
    }
}

/// §4.5 rule 3: a bare integer literal gets `.0` appended so it types as
/// a Rust float literal; boolean lexemes pass through as-is. A quoted
/// literal is turned into an owned `String` (rather than left as a `&str`
/// literal) so it lines up with the `String` type every `String`-typed
/// variable, parameter, and built-in adapter already expects.
fn emit_literal(text: &str) -> String {
    if text.starts_with('"') {
        format!("{text}.to_string()")
    } else if text == "true" || text == "false" {
        text.to_string()
    } else if text.contains('.') {
        text.to_string()
    } else {
        format!("{text}.0")
    }
}

fn rust_type(ty: Type) -> &'static str {
    match ty {
        Type::Double => "f64",
        Type::String => "String",
        Type::Boolean => "bool",
        Type::Void => "()",
        // The generator runs only on an analyzer-approved tree; an
        // `Unknown` slipping through still needs *some* concrete type to
        // keep the emitted text syntactically well-formed.
        Type::Unknown => "f64",
    }
}

fn default_value(ty: Type) -> &'static str {
    match ty {
        Type::Double | Type::Unknown => "0.0",
        Type::String => "String::new()",
        Type::Boolean => "false",
        Type::Void => "()",
    }
}
