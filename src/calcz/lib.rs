//! # Calcz Architecture
//!
//! Calcz is a tiny calculator with subcommands (`add`, `sub`). The arithmetic is
//! trivial on purpose; the crate is laid out as a library with a thin CLI client
//! so each concern stays in one place.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments with clap, prints results               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Routes an `Operation` to exactly one handler             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure arithmetic under an overflow policy                 │
//! │  - Returns `CmdResult`, no I/O                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//!
//! Operands are fixed-width (`u16` for `add`, `i16` for `sub`). What happens when a
//! result does not fit is decided by [`model::OverflowPolicy`]: fail (the default),
//! wrap, or saturate.
//!
//! ## Module Overview
//!
//! - [`api`]: The router, entry point for all operations
//! - [`commands`]: One handler per subcommand
//! - [`model`]: `Operation`, `Calculation` and the policy enums
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
