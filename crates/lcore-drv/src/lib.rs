//! lcore-drv - Compiler driver for L (§4.6, §6a).
//!
//! Wires the four pipeline stages together — lex, parse, analyze, generate
//! — into the single [`compile`] entry point the CLI binary and the test
//! suite both call. The pipeline core here stays logging-free; the `lcorec`
//! binary (`main.rs`) owns the `tracing` subscriber and file I/O, per §6a
//! "The pipeline core itself stays logging-free — it returns data, it does
//! not have side effects".

pub mod cli;
pub mod error;

pub use cli::Cli;
pub use error::DriverError;

use lcore_lex::Token;
use lcore_util::Diagnostic;

/// The fixed preamble the reference prepends to a failed compilation's
/// diagnostic report (§4.6).
pub const FAILURE_HEADER: &str = "Compilation failed due to the following errors:\n";

/// The result of one [`compile`] invocation: either the generated
/// target-language source, or the concatenated diagnostic report — never
/// both, per §4.6 ("if the combined diagnostic list is non-empty, returns
/// the report; otherwise invokes the code generator").
///
/// The token stream and the full diagnostic list are carried alongside as
/// structured side channels (§6 "Optionally also the token list and the
/// diagnostic list ... for tests") even on success, since a test may want
/// to assert against them without re-running the lexer.
#[derive(Debug, Clone)]
pub struct CompileResult {
    /// `true` if the combined diagnostic list was empty and `text` holds
    /// generated source; `false` if `text` holds the failure report.
    pub succeeded: bool,
    /// The generated source on success, or the failure report on failure.
    pub text: String,
    /// Every diagnostic raised across all three stages, in lexer-then-
    /// parser-then-analyzer order (§5 "Ordering guarantees").
    pub diagnostics: Vec<Diagnostic>,
    /// The token stream the lexer produced, exposed for tests that want
    /// to inspect tokenization without re-lexing (§6a).
    pub tokens: Vec<Token>,
}

/// Compiles one L source string (§6 "Primary API").
///
/// Runs lexer → parser → analyzer unconditionally (§7 "Propagation":
/// "stages after the first error still run ... to surface as many
/// diagnostics as possible"), then gates code generation on the combined
/// diagnostic list being empty.
pub fn compile(source: &str) -> CompileResult {
    let (tokens, mut diagnostics) = lcore_lex::tokenize(source);
    let (program, parse_diags) = lcore_par::parse(tokens.clone());
    diagnostics.extend(parse_diags);
    let (symbols, sem_diags) = lcore_sem::analyze(&program);
    diagnostics.extend(sem_diags);

    if diagnostics.is_empty() {
        let generated = lcore_gen::generate(&program, &symbols);
        CompileResult {
            succeeded: true,
            text: generated,
            diagnostics,
            tokens,
        }
    } else {
        CompileResult {
            succeeded: false,
            text: render_report(&diagnostics),
            diagnostics,
            tokens,
        }
    }
}

/// Renders the stable failure report (§4.6, §6 "Diagnostic format"):
/// the fixed header followed by one `report_line()` per diagnostic.
pub fn render_report(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::from(FAILURE_HEADER);
    for diag in diagnostics {
        out.push_str(&diag.report_line());
        out.push('\n');
    }
    out
}
