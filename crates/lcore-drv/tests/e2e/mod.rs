//! End-to-end tests for the L compiler driver.
//!
//! Covers the full pipeline from source text to generated program
//! (`compilation_tests`), the `lcorec` binary's argument surface
//! (`cli_tests`), and byte-for-byte determinism of the generated output
//! (`snapshot_tests`).

mod compilation_tests;
mod cli_tests;
mod snapshot_tests;