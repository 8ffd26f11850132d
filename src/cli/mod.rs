//! Command Line Interface (CLI) layer for PRIMEFAC.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-value and batch
//! factorization flows. It wires user-provided options to the underlying
//! library functionality exposed via `primefac::api`.
//!
//! If you are embedding PRIMEFAC into another application, prefer using
//! the high-level `primefac::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
