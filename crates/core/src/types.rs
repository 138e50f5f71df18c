//! Record and identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a record within one store.
///
/// Assigned by the store on insert, starting at 1. Identifiers are strictly
/// increasing within a store and are never reused, even after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// The first identifier a fresh store hands out.
    pub const FIRST: RecordId = RecordId(1);

    /// Wrap a raw identifier
    pub const fn new(raw: u64) -> Self {
        RecordId(raw)
    }

    /// Raw numeric value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one
    pub const fn next(&self) -> Self {
        RecordId(self.0 + 1)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        RecordId(raw)
    }
}

/// Identity of a record store.
///
/// Minted once per store so that logs and callers can tell stores apart
/// without comparing pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(Uuid);

impl StoreId {
    /// Create a new random store id
    pub fn new() -> Self {
        StoreId(Uuid::new_v4())
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for StoreId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single row held by a record store.
///
/// `id` is fixed by the store at insert time. Only `name` and `age` change,
/// and only through the owning store's update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned identifier
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
}

impl Record {
    /// Build a record. Stores are the only callers that mint ids.
    pub fn new(id: RecordId, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record [ID={}, Name={}, Age={}]", self.id, self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_ordering() {
        let first = RecordId::FIRST;
        assert_eq!(first.as_u64(), 1);
        assert!(first.next() > first);
        assert_eq!(first.next(), RecordId::new(2));
    }

    #[test]
    fn test_record_display() {
        let record = Record::new(RecordId::new(7), "Ala", 20);
        assert_eq!(record.to_string(), "Record [ID=7, Name=Ala, Age=20]");
    }

    #[test]
    fn test_store_ids_are_unique() {
        let a = StoreId::new();
        let b = StoreId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_id_serializes_as_number() {
        let json = serde_json::to_string(&Record::new(RecordId::new(3), "Kaja", 25)).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Kaja","age":25}"#);
    }
}
