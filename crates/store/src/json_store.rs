//! JSON snapshot persistence.
//!
//! On disk the inventory is a flat JSON object of item name to quantity,
//! pretty-printed with two-space indentation:
//!
//! ```json
//! {
//!   "apple": 7,
//!   "banana": 5
//! }
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use stockroom_core::ItemName;
use stockroom_ledger::Ledger;

use crate::error::StoreError;

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Ledger content as persisted on disk.
///
/// Item names re-validate on deserialization, so a snapshot can never hand
/// the ledger an empty key; negative quantities fail the `u64` parse.
pub type Snapshot = BTreeMap<ItemName, u64>;

/// Handle on a JSON snapshot file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot file.
    ///
    /// Distinguishes the three failure classes a caller may want to treat
    /// differently: missing file, unparseable content, other io faults.
    pub fn load(&self) -> Result<Snapshot, StoreError> {
        let file = File::open(&self.path).map_err(|source| self.read_error(source))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the snapshot file, treating a missing file as an empty inventory.
    ///
    /// The miss is reported, not swallowed silently. Malformed content and
    /// other io faults still propagate.
    pub fn load_or_empty(&self) -> Result<Snapshot, StoreError> {
        match self.load() {
            Ok(snapshot) => Ok(snapshot),
            Err(StoreError::NotFound { path }) => {
                tracing::warn!(
                    path = %path.display(),
                    "inventory file not found, starting with empty inventory"
                );
                Ok(Snapshot::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Write the ledger's current content to the snapshot file.
    ///
    /// The file is overwritten unconditionally and written in place; a crash
    /// mid-write can leave a truncated snapshot behind.
    pub fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let file = File::create(&self.path).map_err(|source| self.write_error(source))?;
        let mut writer = BufWriter::new(file);
        // A serde_json failure here can only be an io fault: the snapshot
        // itself always serializes.
        serde_json::to_writer_pretty(&mut writer, ledger.snapshot())
            .map_err(|source| self.write_error(io::Error::other(source)))?;
        writer.flush().map_err(|source| self.write_error(source))
    }

    fn read_error(&self, source: io::Error) -> StoreError {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound {
                path: self.path.clone(),
            }
        } else {
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        }
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn name(s: &str) -> ItemName {
        ItemName::new(s).unwrap()
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("inventory.json"));

        let mut ledger = Ledger::new();
        ledger.add(&name("apple"), 7);
        ledger.add(&name("banana"), 5);

        store.save(&ledger).unwrap();
        let snapshot = store.load().unwrap();

        assert_eq!(&snapshot, ledger.snapshot());
    }

    #[test]
    fn saved_snapshot_is_indented_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let store = JsonStore::new(&path);

        let mut ledger = Ledger::new();
        ledger.add(&name("apple"), 7);
        store.save(&ledger).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{\n  \"apple\": 7\n}");
    }

    #[test]
    fn save_overwrites_unconditionally() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("inventory.json"));

        let mut first = Ledger::new();
        first.add(&name("apple"), 7);
        store.save(&first).unwrap();

        let mut second = Ledger::new();
        second.add(&name("banana"), 2);
        store.save(&second).unwrap();

        assert_eq!(&store.load().unwrap(), second.snapshot());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("absent.json"));

        assert!(matches!(store.load(), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn load_or_empty_absorbs_missing_file() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("absent.json"));

        assert!(store.load_or_empty().unwrap().is_empty());
    }

    #[test]
    fn load_rejects_malformed_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            JsonStore::new(&path).load(),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn load_or_empty_still_propagates_malformed_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            JsonStore::new(&path).load_or_empty(),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn load_rejects_empty_item_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, r#"{"": 3}"#).unwrap();

        assert!(matches!(
            JsonStore::new(&path).load(),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn load_rejects_negative_quantities() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, r#"{"apple": -2}"#).unwrap();

        assert!(matches!(
            JsonStore::new(&path).load(),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn zero_quantity_snapshot_entries_are_dropped_by_the_ledger() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, r#"{"apple": 7, "husk": 0}"#).unwrap();

        let snapshot = JsonStore::new(&path).load().unwrap();
        let ledger = Ledger::from_snapshot(snapshot);

        assert_eq!(ledger.quantity(&name("apple")), 7);
        assert_eq!(ledger.len(), 1);
    }
}
