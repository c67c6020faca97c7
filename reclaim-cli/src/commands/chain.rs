//! Chain inspection commands
//!
//! The read side of the ledger: `head` prints the latest record,
//! `list` walks the chain with optional substring filters, and
//! `verify` recomputes every digest and link the way an independent
//! consumer would.

use lib_ledger::{verify_chain, LedgerRecord, LedgerStore, SledStore};

use crate::argument_parsing::{HeadArgs, ListArgs, ReclaimCli, VerifyArgs};
use crate::error::CliResult;
use crate::output::{render_record, render_records};

/// Handle the `head` subcommand
pub fn handle_head_command(_args: HeadArgs, cli: &ReclaimCli) -> CliResult<()> {
    let store = SledStore::open(&cli.db)?;

    match store.head()? {
        Some(record) => println!("{}", render_record(&record, cli.format)?),
        None => println!("ledger is empty"),
    }
    Ok(())
}

/// Handle the `list` subcommand
pub fn handle_list_command(args: ListArgs, cli: &ReclaimCli) -> CliResult<()> {
    let store = SledStore::open(&cli.db)?;
    let records = filter_records(store.records()?, &args);

    if records.is_empty() {
        println!("no matching records");
        return Ok(());
    }
    println!("{}", render_records(&records, cli.format)?);
    Ok(())
}

/// Handle the `verify` subcommand
pub fn handle_verify_command(_args: VerifyArgs, cli: &ReclaimCli) -> CliResult<()> {
    let store = SledStore::open(&cli.db)?;
    let records = store.records()?;

    verify_chain(&records)?;

    let degraded = records.iter().filter(|r| r.degraded).count();
    if degraded > 0 {
        println!(
            "chain OK: {} records, {} degraded seals",
            records.len(),
            degraded
        );
    } else {
        println!("chain OK: {} records", records.len());
    }
    Ok(())
}

/// Apply the list filters, case-insensitive substring match
fn filter_records(records: Vec<LedgerRecord>, args: &ListArgs) -> Vec<LedgerRecord> {
    records
        .into_iter()
        .filter(|record| {
            matches_filter(&record.category, args.category.as_deref())
                && matches_filter(&record.location, args.location.as_deref())
        })
        .collect()
}

fn matches_filter(value: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(filter) => value.to_lowercase().contains(&filter.to_lowercase()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_ledger::{
        ClaimSubject, IdentityProfile, MemoryDirectory, SealEngine,
    };
    use std::io::Write;

    fn seeded_ledger(dir: &std::path::Path) {
        let mut directory = MemoryDirectory::new();
        let profile = IdentityProfile {
            email: "user@example.com".to_string(),
            full_name: "User".to_string(),
            phone: None,
        };
        directory.insert("u1", profile.clone());
        directory.insert("u2", profile);

        let engine = SealEngine::new(SledStore::open(dir).unwrap(), directory);
        for (n, category, location) in
            [(1, "Accessories", "Library"), (2, "Electronics", "Cafeteria")]
        {
            engine
                .seal_record(ClaimSubject {
                    item_id: format!("i{}", n),
                    claim_id: format!("c{}", n),
                    finder_id: "u1".to_string(),
                    loser_id: "u2".to_string(),
                    product_name: "Thing".to_string(),
                    location: location.to_string(),
                    category: category.to_string(),
                    claim_message: None,
                    proof_file_url: None,
                })
                .unwrap();
        }
    }

    fn cli_for(db: &std::path::Path, tail: &[&str]) -> ReclaimCli {
        use clap::Parser;
        let mut argv = vec![
            "reclaim-cli".to_string(),
            "--db".to_string(),
            db.display().to_string(),
        ];
        argv.extend(tail.iter().map(|s| s.to_string()));
        ReclaimCli::parse_from(argv)
    }

    #[test]
    fn test_head_and_verify_on_seeded_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("ledger");
        seeded_ledger(&db);

        let cli = cli_for(&db, &["head"]);
        handle_head_command(HeadArgs {}, &cli).unwrap();

        let cli = cli_for(&db, &["verify"]);
        handle_verify_command(VerifyArgs {}, &cli).unwrap();
    }

    #[test]
    fn test_verify_ignores_user_directory() {
        // the read side never consults the users file
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("ledger");
        seeded_ledger(&db);

        let mut users = tempfile::NamedTempFile::new().unwrap();
        write!(users, "{{}}").unwrap();

        let cli = cli_for(
            &db,
            &["--users", &users.path().display().to_string(), "verify"],
        );
        assert!(handle_verify_command(VerifyArgs {}, &cli).is_ok());
    }

    #[test]
    fn test_list_filters() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("ledger");
        seeded_ledger(&db);

        let store = SledStore::open(&db).unwrap();
        let records = store.records().unwrap();

        let filtered = filter_records(
            records.clone(),
            &ListArgs {
                category: Some("acc".to_string()),
                location: None,
            },
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category, "Accessories");

        let filtered = filter_records(
            records.clone(),
            &ListArgs {
                category: None,
                location: Some("cafe".to_string()),
            },
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].location, "Cafeteria");

        let filtered = filter_records(
            records,
            &ListArgs {
                category: Some("nothing".to_string()),
                location: None,
            },
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_verify_reports_tampering() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("ledger");
        seeded_ledger(&db);

        // Verification is over the record sequence; tamper in memory
        let store = SledStore::open(&db).unwrap();
        let mut records = store.records().unwrap();
        records[0].product_name = "Forged".to_string();
        assert!(verify_chain(&records).is_err());
    }
}
