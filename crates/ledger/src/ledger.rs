//! The inventory ledger: item quantities and the operations over them.

use std::collections::BTreeMap;
use std::io;
use std::sync::Arc;

use stockroom_core::ItemName;

use crate::audit::{AuditEntry, AuditSink};

/// Conventional restock threshold used by the demonstration flow.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Result of a removal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Stock was reduced; carries the remaining quantity.
    Reduced(u64),
    /// The removal consumed the entry (requested at least the held quantity).
    Depleted,
    /// The item was not in the ledger; nothing changed.
    NotFound,
}

/// Mapping from item name to on-hand quantity.
///
/// Invariant: no entry holds a zero quantity. Entries reaching zero are
/// deleted outright, so "present with 0" is indistinguishable from absent in
/// queries and omitted from reports. Iteration is in name order.
pub struct Ledger {
    items: BTreeMap<ItemName, u64>,
    audit: Option<Arc<dyn AuditSink>>,
}

impl Ledger {
    /// Create an empty ledger with no audit sink.
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            audit: None,
        }
    }

    /// Create an empty ledger that reports every movement to `sink`.
    pub fn with_audit(sink: Arc<dyn AuditSink>) -> Self {
        Self {
            items: BTreeMap::new(),
            audit: Some(sink),
        }
    }

    /// Rebuild a ledger from a persisted snapshot.
    pub fn from_snapshot(snapshot: BTreeMap<ItemName, u64>) -> Self {
        let mut ledger = Self::new();
        ledger.replace(snapshot);
        ledger
    }

    /// Replace the entire ledger content with `snapshot`.
    ///
    /// This is the load path: prior in-memory state is discarded, the audit
    /// sink (if any) is kept. Zero-quantity entries are dropped on ingest so
    /// the no-zero-entries invariant survives a hand-edited snapshot file.
    pub fn replace(&mut self, snapshot: BTreeMap<ItemName, u64>) {
        self.items = snapshot.into_iter().filter(|(_, qty)| *qty > 0).collect();
    }

    /// Borrow the current content for externalization.
    pub fn snapshot(&self) -> &BTreeMap<ItemName, u64> {
        &self.items
    }

    /// Add `qty` units of `item`, creating the entry if absent.
    ///
    /// Adding zero changes nothing observable: existing quantities stay put
    /// and no empty entry is created.
    pub fn add(&mut self, item: &ItemName, qty: u64) {
        if qty > 0 {
            let entry = self.items.entry(item.clone()).or_insert(0);
            *entry = entry.saturating_add(qty);
        }
        self.record(AuditEntry::added(item.clone(), qty));
    }

    /// Remove `qty` units of `item`.
    ///
    /// Removing at least the held quantity deletes the entry outright;
    /// overshoot is not an error. Removing from an absent item changes
    /// nothing and reports the miss.
    pub fn remove(&mut self, item: &ItemName, qty: u64) -> RemoveOutcome {
        let Some(current) = self.items.get(item).copied() else {
            tracing::warn!(item = %item, "item not found in inventory");
            return RemoveOutcome::NotFound;
        };

        let outcome = if qty >= current {
            self.items.remove(item);
            RemoveOutcome::Depleted
        } else {
            let remaining = current - qty;
            self.items.insert(item.clone(), remaining);
            RemoveOutcome::Reduced(remaining)
        };

        self.record(AuditEntry::removed(item.clone(), qty));
        outcome
    }

    /// Current quantity of `item`, zero if absent.
    pub fn quantity(&self, item: &ItemName) -> u64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Every item with quantity strictly below `threshold`, in name order.
    pub fn low_items(&self, threshold: u64) -> Vec<ItemName> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Number of distinct items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, u64)> {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    /// Write the inventory report: a header line, then one `<item> -> <qty>`
    /// line per entry in name order.
    pub fn write_report<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "Items Report")?;
        for (name, qty) in &self.items {
            writeln!(out, "{name} -> {qty}")?;
        }
        Ok(())
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(sink) = &self.audit {
            sink.record(entry);
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ledger")
            .field("items", &self.items)
            .field("audited", &self.audit.is_some())
            .finish()
    }
}
