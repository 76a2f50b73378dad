//! Row cell values read from the database

use rusqlite::types::ValueRef;
use serde::{Serialize, Serializer};

/// A single column value of a row.
///
/// Serializes as the bare JSON scalar. Blobs are exported as text: the bytes
/// are reinterpreted as UTF-8, with invalid sequences replaced by U+FFFD.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            // SQLite does not enforce the text encoding of stored values
            ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Real(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Blob(bytes) => serializer.serialize_str(&String::from_utf8_lossy(bytes)),
        }
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
