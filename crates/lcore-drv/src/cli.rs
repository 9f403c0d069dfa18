//! The `lcorec` command-line surface (§6a "Configuration"): a thin,
//! `clap`-derived argument struct plus the file I/O and logging glue that
//! sits outside the pipeline core. L has no project-level configuration —
//! every run is a single source string in, a single result out.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info, trace};

use crate::error::DriverError;
use crate::{compile, render_report};

/// `compile <input-file> [<output-file>]` (§6 "CLI surface").
#[derive(Parser, Debug)]
#[command(name = "lcorec", author, version, about = "Compiles L source to a host-language program")]
pub struct Cli {
    /// L source file to compile.
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    /// Where to write the generated source. Defaults to the input's stem
    /// with a `.rs` extension.
    pub output: Option<PathBuf>,

    /// Also append every diagnostic to this log file (§6 "The core may
    /// also append each diagnostic to an auxiliary errors.txt log file").
    #[arg(long, value_name = "PATH")]
    pub emit_errors_log: Option<PathBuf>,

    /// Raise the tracing filter to `debug` (or `trace` if passed twice).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| self.input.with_extension("rs"))
    }
}

/// Runs one compilation from CLI arguments: reads `cli.input`, compiles
/// it, and writes the generated source to the resolved output path (or
/// the diagnostic report to stderr on failure). Returns
/// [`DriverError::CompilationFailed`] so `main` can map it to a non-zero
/// exit code without duplicating the report text.
pub fn run(cli: &Cli) -> Result<(), DriverError> {
    info!(input = %cli.input.display(), "reading source");
    let source = fs::read_to_string(&cli.input).map_err(|source| DriverError::ReadInput {
        path: cli.input.clone(),
        source,
    })?;

    debug!(bytes = source.len(), "running pipeline");
    let result = compile(&source);
    trace!(diagnostics = result.diagnostics.len(), tokens = result.tokens.len(), "pipeline finished");

    if let Some(log_path) = &cli.emit_errors_log {
        append_errors_log(log_path, &result.diagnostics)?;
    }

    if result.succeeded {
        let output_path = cli.output_path();
        info!(output = %output_path.display(), "writing generated source");
        write_output(&output_path, &result.text)?;
        Ok(())
    } else {
        info!(count = result.diagnostics.len(), "compilation failed");
        eprint!("{}", result.text);
        Err(DriverError::CompilationFailed)
    }
}

fn write_output(path: &Path, contents: &str) -> Result<(), DriverError> {
    fs::write(path, contents).map_err(|source| DriverError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

fn append_errors_log(path: &Path, diagnostics: &[lcore_util::Diagnostic]) -> Result<(), DriverError> {
    use std::io::Write;
    let report = render_report(diagnostics);
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| DriverError::WriteOutput { path: path.to_path_buf(), source })?;
    file.write_all(report.as_bytes())
        .map_err(|source| DriverError::WriteOutput { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_path_derives_from_input_stem() {
        let cli = Cli {
            input: PathBuf::from("program.txt"),
            output: None,
            emit_errors_log: None,
            verbose: 0,
        };
        assert_eq!(cli.output_path(), PathBuf::from("program.rs"));
    }

    #[test]
    fn explicit_output_path_wins() {
        let cli = Cli {
            input: PathBuf::from("program.txt"),
            output: Some(PathBuf::from("out.rs")),
            emit_errors_log: None,
            verbose: 0,
        };
        assert_eq!(cli.output_path(), PathBuf::from("out.rs"));
    }
}
