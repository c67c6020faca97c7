//! Reclaim CLI
//!
//! Command-line interface for the claim-resolution ledger: seals
//! resolved claims into the chain and exposes the read side (head,
//! listing, verification) against the same sled database.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::commands;
use crate::output::OutputFormat;

/// Reclaim ledger CLI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "reclaim-cli")]
pub struct ReclaimCli {
    /// Ledger database directory
    #[arg(long, default_value = "reclaim-ledger", env = "RECLAIM_DB")]
    pub db: String,

    /// User directory JSON file (user id -> email/name/phone)
    #[arg(long, default_value = "users.json", env = "RECLAIM_USERS")]
    pub users: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", env = "RECLAIM_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: ReclaimCommand,
}

/// Reclaim ledger commands
#[derive(Subcommand, Debug, Clone)]
pub enum ReclaimCommand {
    /// Seal a resolved claim as the new chain head
    Seal(SealArgs),

    /// Show the current chain head
    Head(HeadArgs),

    /// List chain records in order
    List(ListArgs),

    /// Re-verify the whole chain
    Verify(VerifyArgs),
}

/// Arguments for sealing a resolved claim
#[derive(Args, Debug, Clone)]
pub struct SealArgs {
    /// Found item identifier
    #[arg(long)]
    pub item: String,

    /// Approved claim identifier
    #[arg(long)]
    pub claim: String,

    /// User id of the finder
    #[arg(long)]
    pub finder: String,

    /// User id of the claimant whose claim was approved
    #[arg(long)]
    pub loser: String,

    /// Item name as posted
    #[arg(long)]
    pub product: String,

    /// Where the item was found
    #[arg(long)]
    pub location: String,

    /// Item category
    #[arg(long)]
    pub category: String,

    /// Free-text message the claimant attached
    #[arg(long)]
    pub message: Option<String>,

    /// Reference to the uploaded ownership proof
    #[arg(long)]
    pub proof_url: Option<String>,
}

/// Arguments for showing the chain head
#[derive(Args, Debug, Clone)]
pub struct HeadArgs {}

/// Arguments for listing chain records
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Only records whose category contains this substring
    #[arg(long)]
    pub category: Option<String>,

    /// Only records whose location contains this substring
    #[arg(long)]
    pub location: Option<String>,
}

/// Arguments for chain verification
#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {}

/// Main CLI runner
pub fn run_cli() -> Result<()> {
    let cli = ReclaimCli::parse();

    match &cli.command {
        ReclaimCommand::Seal(args) => {
            commands::seal::handle_seal_command(args.clone(), &cli)?
        }
        ReclaimCommand::Head(args) => {
            commands::chain::handle_head_command(args.clone(), &cli)?
        }
        ReclaimCommand::List(args) => {
            commands::chain::handle_list_command(args.clone(), &cli)?
        }
        ReclaimCommand::Verify(args) => {
            commands::chain::handle_verify_command(args.clone(), &cli)?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_arguments_parse() {
        let cli = ReclaimCli::try_parse_from([
            "reclaim-cli",
            "--db",
            "/tmp/ledger",
            "seal",
            "--item",
            "i1",
            "--claim",
            "c1",
            "--finder",
            "u1",
            "--loser",
            "u2",
            "--product",
            "Wallet",
            "--location",
            "Library",
            "--category",
            "Accessories",
            "--message",
            "blue leather",
        ])
        .unwrap();

        assert_eq!(cli.db, "/tmp/ledger");
        assert_eq!(cli.format, OutputFormat::Table);
        match cli.command {
            ReclaimCommand::Seal(args) => {
                assert_eq!(args.item, "i1");
                assert_eq!(args.loser, "u2");
                assert_eq!(args.message.as_deref(), Some("blue leather"));
                assert_eq!(args.proof_url, None);
            }
            other => panic!("expected seal command, got {:?}", other),
        }
    }

    #[test]
    fn test_seal_requires_subject_fields() {
        let result = ReclaimCli::try_parse_from(["reclaim-cli", "seal", "--item", "i1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_filters_parse() {
        let cli = ReclaimCli::try_parse_from([
            "reclaim-cli",
            "--format",
            "json",
            "list",
            "--category",
            "Acc",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            ReclaimCommand::List(args) => {
                assert_eq!(args.category.as_deref(), Some("Acc"));
                assert_eq!(args.location, None);
            }
            other => panic!("expected list command, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_parses_bare() {
        let cli = ReclaimCli::try_parse_from(["reclaim-cli", "verify"]).unwrap();
        assert!(matches!(cli.command, ReclaimCommand::Verify(_)));
    }
}
