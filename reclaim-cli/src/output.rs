//! Record rendering
//!
//! Table output for humans, pretty JSON for scripts. The JSON form is
//! the record's serde encoding, so digests come out as the same
//! 64-character hex strings stored on the chain.

use clap::ValueEnum;
use lib_ledger::LedgerRecord;

use crate::error::CliResult;

/// Output format selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned key/value table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Render one record in the selected format
pub fn render_record(record: &LedgerRecord, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Table => Ok(record_table(record)),
    }
}

/// Render a record sequence in the selected format
pub fn render_records(records: &[LedgerRecord], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Table => {
            let mut out = String::new();
            for (i, record) in records.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&record_table(record));
            }
            Ok(out)
        }
    }
}

fn record_table(record: &LedgerRecord) -> String {
    let mut out = String::new();
    let mut row = |key: &str, value: &str| {
        out.push_str(&format!("{:<18} {}\n", key, value));
    };

    row("index", &record.index.to_string());
    row("digest", &record.digest.to_hex());
    row("previous_digest", &record.previous_digest.to_hex());
    row("timestamp", &record.timestamp.to_string());
    row("item", &record.item_id);
    row("claim", &record.claim_id);
    row(
        "finder",
        &format!(
            "{} <{}> ({})",
            record.finder_name, record.finder_email, record.finder_id
        ),
    );
    row(
        "claimant",
        &format!(
            "{} <{}> ({})",
            record.loser_name, record.loser_email, record.loser_id
        ),
    );
    row("product", &record.product_name);
    row("location", &record.location);
    row("category", &record.category);
    if let Some(message) = &record.claim_message {
        row("message", message);
    }
    if let Some(url) = &record.proof_file_url {
        row("proof", url);
    }
    row("nonce", &record.nonce.to_string());
    row("difficulty", &record.difficulty.to_string());
    row("status", &record.verification_status.to_string());
    if record.degraded {
        row("degraded", "true (attempt ceiling hit)");
    }

    out
}
