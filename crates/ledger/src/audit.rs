//! Audit trail for stock movements.
//!
//! The ledger keeps no movement history of its own; it only offers a seam
//! where a caller-owned sink can observe each mutation as it happens. Sinks
//! are write-only from the ledger's point of view and never read back.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use stockroom_core::ItemName;

/// Direction of a recorded stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MovementKind {
    Added,
    Removed,
}

/// A single recorded stock movement.
///
/// Entries are ephemeral observability data: business time plus a
/// human-readable rendering. They are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub occurred_at: DateTime<Utc>,
    pub kind: MovementKind,
    pub item: ItemName,
    pub qty: u64,
}

impl AuditEntry {
    pub fn added(item: ItemName, qty: u64) -> Self {
        Self {
            occurred_at: Utc::now(),
            kind: MovementKind::Added,
            item,
            qty,
        }
    }

    pub fn removed(item: ItemName, qty: u64) -> Self {
        Self {
            occurred_at: Utc::now(),
            kind: MovementKind::Removed,
            item,
            qty,
        }
    }
}

impl core::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let verb = match self.kind {
            MovementKind::Added => "Added",
            MovementKind::Removed => "Removed",
        };
        write!(f, "{}: {} {} of {}", self.occurred_at, verb, self.qty, self.item)
    }
}

/// Observer for stock movements.
///
/// Implementations must tolerate being shared across threads; the ledger
/// never blocks on a sink beyond the `record` call itself.
pub trait AuditSink: Send + Sync {
    fn record(&self, entry: AuditEntry);
}

impl<S> AuditSink for Arc<S>
where
    S: AuditSink + ?Sized,
{
    fn record(&self, entry: AuditEntry) {
        (**self).record(entry)
    }
}

/// In-memory audit log.
///
/// Intended for tests/dev. Entries accumulate unbounded.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl AuditSink for InMemoryAuditLog {
    fn record(&self, entry: AuditEntry) {
        // If the lock is poisoned the entry is dropped; audit is best-effort.
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }
}
