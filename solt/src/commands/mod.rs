//! Command modules for the solt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand lives in its own file and exposes an args struct and a
//! `run_*` function.

pub mod common;

pub mod detect;
pub mod highlight;
pub mod init;
pub mod tokens;

// Re-export command types and functions
pub use detect::{run_detect, DetectArgs};
pub use highlight::{run_highlight, HighlightArgs};
pub use init::{run_init, InitArgs};
pub use tokens::{run_tokens, TokensArgs};
