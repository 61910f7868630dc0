//! `stockroom-store` — snapshot persistence for the inventory ledger.
//!
//! Thin serialization layer: the ledger owns the business rules, this crate
//! only translates its content to and from a JSON file on disk.

pub mod error;
pub mod json_store;

pub use error::StoreError;
pub use json_store::{DEFAULT_INVENTORY_PATH, JsonStore, Snapshot};
