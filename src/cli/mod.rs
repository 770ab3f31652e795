//! Command-line entry points
//!
//! Logic behind the `bidder-tokens` binary, kept in the library so it can be
//! tested without spawning a process.

pub mod generate;

pub use generate::{GenerateArgs, load_settings, run_generate_mode};
