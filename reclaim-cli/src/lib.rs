//! Reclaim CLI Library
//!
//! Operator interface to the claim-resolution ledger: seal resolved
//! claims, inspect the chain head, list records, and re-verify the
//! whole chain.
//!
//! Command handlers live in `commands/`, argument definitions in
//! `argument_parsing`, rendering in `output`, and structured errors in
//! `error`.

pub mod argument_parsing;
pub mod commands;
pub mod error;
pub mod output;

pub use argument_parsing::{run_cli, ReclaimCli, ReclaimCommand};
pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// Reclaim CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
