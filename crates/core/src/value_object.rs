//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two instances
/// with the same attributes are interchangeable. `ItemName` is the canonical
/// example here: the ledger does not care *which* `ItemName("apple")` it was
/// handed, only that the value says "apple".
///
/// To "modify" a value object, construct a new one; construction is where
/// validation lives, so a value object that exists is a value object that is
/// valid.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
