//! Seal command
//!
//! Seals one resolved claim into the ledger: loads the user directory,
//! opens the sled-backed chain, runs the sealing engine, and prints the
//! appended record.

use lib_ledger::{ClaimSubject, JsonDirectory, SealConfig, SealEngine, SledStore};

use crate::argument_parsing::{ReclaimCli, SealArgs};
use crate::error::CliResult;
use crate::output::render_record;

/// Handle the `seal` subcommand
pub fn handle_seal_command(args: SealArgs, cli: &ReclaimCli) -> CliResult<()> {
    let store = SledStore::open(&cli.db)?;
    let directory = JsonDirectory::load(&cli.users)?;
    let engine = SealEngine::with_config(store, directory, SealConfig::from_env());

    let subject = ClaimSubject {
        item_id: args.item,
        claim_id: args.claim,
        finder_id: args.finder,
        loser_id: args.loser,
        product_name: args.product,
        location: args.location,
        category: args.category,
        claim_message: args.message,
        proof_file_url: args.proof_url,
    };

    let record = engine.seal_record(subject)?;

    if record.degraded {
        eprintln!(
            "warning: attempt ceiling hit, record {} sealed without meeting difficulty {}",
            record.index, record.difficulty
        );
    }

    println!("{}", render_record(&record, cli.format)?);
    Ok(())
}
