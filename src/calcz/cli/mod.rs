//! # CLI Behavior
//!
//! This is **one possible UI client** for calcz. The CLI is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Invocation Forms
//!
//! - `calcz add --num1 1 --num2 2` and `calcz sub --num1 1 --num2 2`
//! - `calcz --num1 1 --num2 2`: the flat form, which adds
//!
//! Flat operands and a subcommand cannot be combined.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, dispatch through the API, logging setup
//! - `print`: Output formatting (results to stdout, messages to stderr)
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
