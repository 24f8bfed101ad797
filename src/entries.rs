// src/entries.rs
//! Entry index (`contents.js`) decoding
//!
//! The index is a JSON array of positional rows:
//! `[id, type, title, site, date, unknown1, unknown2, unknown3]`.
//! Rows are checked up front and the parse fails as a whole on the first bad one.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::consts::ENTRY_ARITY;
use crate::error::FormatError;

/// One row of the entry index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: String,
    pub entry_type: String,
    pub title: String,
    pub site: String,
    /// Unix seconds
    pub date: i64,
    pub unknown1: String,
    pub unknown2: i64,
    pub unknown3: String,
}

impl EntryRecord {
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }

    fn from_row(index: usize, row: &Value) -> Result<Self, FormatError> {
        let fields = row.as_array().ok_or_else(|| malformed(index, "row is not an array"))?;
        if fields.len() != ENTRY_ARITY {
            return Err(malformed(
                index,
                format!("expected {ENTRY_ARITY} fields, found {}", fields.len()),
            ));
        }

        let text = |pos: usize| -> Result<String, FormatError> {
            fields[pos]
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| malformed(index, format!("field {pos} is not a string")))
        };
        let integer = |pos: usize| -> Result<i64, FormatError> {
            fields[pos]
                .as_i64()
                .ok_or_else(|| malformed(index, format!("field {pos} is not an integer")))
        };

        Ok(Self {
            id: text(0)?,
            entry_type: text(1)?,
            title: text(2)?,
            site: text(3)?,
            date: integer(4)?,
            unknown1: text(5)?,
            unknown2: integer(6)?,
            unknown3: text(7)?,
        })
    }
}

/// Decode the entry index, preserving source order
pub fn parse_entries(raw_json: &str) -> Result<Vec<EntryRecord>, FormatError> {
    let doc: Value =
        serde_json::from_str(raw_json).map_err(|e| FormatError::InvalidJson(e.to_string()))?;
    let rows = doc
        .as_array()
        .ok_or_else(|| FormatError::InvalidJson("entry index is not an array".into()))?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| EntryRecord::from_row(index, row))
        .collect()
}

fn malformed(index: usize, reason: impl Into<String>) -> FormatError {
    FormatError::MalformedEntry {
        index,
        reason: reason.into(),
    }
}
