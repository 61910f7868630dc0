//! Demonstration driver for the stockroom inventory system.

use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use stockroom_core::ItemName;
use stockroom_ledger::{DEFAULT_LOW_STOCK_THRESHOLD, InMemoryAuditLog, Ledger};
use stockroom_store::JsonStore;

/// Run the fixed demonstration sequence against the snapshot at `path`.
///
/// Adds two items, removes stock (one miss included), prints a stock query
/// and the low-stock list, saves, reloads, and prints the full report.
pub fn run(path: &Path) -> anyhow::Result<()> {
    let audit = Arc::new(InMemoryAuditLog::new());
    let mut ledger = Ledger::with_audit(audit.clone());
    let store = JsonStore::new(path);

    let apple = ItemName::new("apple")?;
    let banana = ItemName::new("banana")?;
    let orange = ItemName::new("orange")?;

    ledger.add(&apple, 10);
    ledger.add(&banana, 5);
    ledger.remove(&apple, 3);
    ledger.remove(&orange, 1); // miss: reported, nothing changes

    println!("Apple stock: {}", ledger.quantity(&apple));
    println!(
        "Low items: {}",
        render_names(&ledger.low_items(DEFAULT_LOW_STOCK_THRESHOLD))
    );

    store.save(&ledger).context("saving inventory snapshot")?;
    let snapshot = store
        .load_or_empty()
        .context("reloading inventory snapshot")?;
    ledger.replace(snapshot);

    let stdout = io::stdout();
    ledger
        .write_report(stdout.lock())
        .context("writing inventory report")?;

    for entry in audit.entries() {
        tracing::debug!(%entry, "stock movement");
    }

    Ok(())
}

fn render_names(names: &[ItemName]) -> String {
    let joined = names
        .iter()
        .map(ItemName::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
