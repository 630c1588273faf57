// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sparse key/value payloads for reads and writes.
//!
//! [`PetValues`] is the payload handed to insert/update and also the row
//! representation returned by queries: a cursor row is a column→value map
//! holding only the projected columns. A column can be present-with-null,
//! which the validator treats differently from absent.

use std::collections::BTreeMap;

use crate::contract::{self, Gender};

/// A single field value: SQL null, integer, or text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

/// Sparse column→value mapping with deterministic column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetValues {
    values: BTreeMap<String, FieldValue>,
}

impl PetValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column to an arbitrary value. Replaces any previous value.
    pub fn put(&mut self, column: &str, value: FieldValue) {
        self.values.insert(column.to_string(), value);
    }

    /// Set a column to SQL null (present, not absent).
    pub fn put_null(&mut self, column: &str) {
        self.put(column, FieldValue::Null);
    }

    pub fn put_name(&mut self, name: &str) {
        self.put(contract::COLUMN_NAME, name.into());
    }

    /// Set the breed; `None` stores null, the "unknown breed" state.
    pub fn put_breed(&mut self, breed: Option<&str>) {
        match breed {
            Some(b) => self.put(contract::COLUMN_BREED, b.into()),
            None => self.put_null(contract::COLUMN_BREED),
        }
    }

    pub fn put_gender(&mut self, gender: Gender) {
        self.put(contract::COLUMN_GENDER, gender.code().into());
    }

    pub fn put_weight(&mut self, weight: i64) {
        self.put(contract::COLUMN_WEIGHT, weight.into());
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.values.get(column)
    }

    /// Integer value of a column; `None` when absent, null, or not an integer.
    pub fn get_integer(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(FieldValue::as_integer)
    }

    /// Text value of a column; `None` when absent, null, or not text.
    pub fn get_text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(FieldValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Columns present in this payload, in deterministic order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_null_is_distinct_from_absent() {
        let mut values = PetValues::new();
        values.put_null(contract::COLUMN_BREED);

        assert!(values.contains(contract::COLUMN_BREED));
        assert!(!values.contains(contract::COLUMN_NAME));
        assert_eq!(values.get_text(contract::COLUMN_BREED), None);
        assert!(values
            .get(contract::COLUMN_BREED)
            .is_some_and(FieldValue::is_null));
    }

    #[test]
    fn typed_accessors_round_trip() {
        let mut values = PetValues::new();
        values.put_name("TOTO");
        values.put_breed(Some("TERRIER"));
        values.put_gender(Gender::Male);
        values.put_weight(7);

        assert_eq!(values.get_text(contract::COLUMN_NAME), Some("TOTO"));
        assert_eq!(values.get_text(contract::COLUMN_BREED), Some("TERRIER"));
        assert_eq!(values.get_integer(contract::COLUMN_GENDER), Some(1));
        assert_eq!(values.get_integer(contract::COLUMN_WEIGHT), Some(7));
        assert_eq!(values.len(), 4);
    }

    #[test]
    fn put_replaces_previous_value() {
        let mut values = PetValues::new();
        values.put_weight(7);
        values.put_weight(9);

        assert_eq!(values.get_integer(contract::COLUMN_WEIGHT), Some(9));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn columns_are_deterministically_ordered() {
        let mut values = PetValues::new();
        values.put_weight(7);
        values.put_name("TOTO");

        let columns: Vec<&str> = values.columns().collect();
        assert_eq!(columns, vec!["name", "weight"]);
    }
}
