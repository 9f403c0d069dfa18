//! lcore-util - Diagnostics and source-location infrastructure shared by the
//! lexer, parser, analyzer, code generator, and driver.
//!
//! Every compiler stage reports problems as [`diagnostic::Diagnostic`] values
//! located by a [`span::Span`], and collects them into a [`diagnostic::Handler`]
//! rather than raising Rust errors — compilation failure is data to be reported,
//! not an exception to unwind. Internal plumbing failures (a caller asking a
//! [`span::SourceMap`] for a span it doesn't have) use the `thiserror`-derived
//! types in [`error`].

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use span::{FileId, SourceFile, SourceMap, Span};
