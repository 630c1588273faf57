// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The record contract: single source of truth for the table name, column
//! identifiers, the resource-URI scheme, the registered URI shapes, and the
//! gender enumeration with its validity predicate.
//!
//! Everything in this module is a constant or a pure function; the route
//! table returned by [`uri_matcher`] is built once and consulted read-only.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::uri::{UriKind, UriMatcher, UriPattern};

/// URI scheme for all record addresses.
pub const SCHEME: &str = "shelter";

/// Authority under which the pet collection is published.
pub const AUTHORITY: &str = "app.shelter";

/// Path of the pet collection under [`AUTHORITY`].
pub const PATH_PETS: &str = "pets";

/// Name of the pets table.
pub const TABLE_PETS: &str = "pets";

/// Row id column (integer, primary key, auto-assigned).
pub const COLUMN_ID: &str = "_id";
/// Pet name column (text, never null for a stored row).
pub const COLUMN_NAME: &str = "name";
/// Pet breed column (text, nullable; null means "unknown breed").
pub const COLUMN_BREED: &str = "breed";
/// Pet gender column (integer code, see [`Gender`]).
pub const COLUMN_GENDER: &str = "gender";
/// Pet weight column (integer, non-negative).
pub const COLUMN_WEIGHT: &str = "weight";

/// Every column of the pets table, in schema order.
pub const ALL_COLUMNS: [&str; 5] = [
    COLUMN_ID,
    COLUMN_NAME,
    COLUMN_BREED,
    COLUMN_GENDER,
    COLUMN_WEIGHT,
];

/// Content type reported for a whole-collection response.
///
/// Derived as `vnd.shelter.dir/<authority>/<path>`.
pub const CONTENT_LIST_TYPE: &str = "vnd.shelter.dir/app.shelter/pets";

/// Content type reported for a single-record response.
///
/// Derived as `vnd.shelter.item/<authority>/<path>`.
pub const CONTENT_ITEM_TYPE: &str = "vnd.shelter.item/app.shelter/pets";

/// Build the route table for the two valid URI shapes.
///
/// Route order matters: the exact collection path is registered before the
/// collection-plus-numeric-id shape.
pub fn uri_matcher() -> UriMatcher {
    UriMatcher::new(vec![
        (UriPattern::new(AUTHORITY, PATH_PETS), UriKind::PetCollection),
        (
            UriPattern::new(AUTHORITY, &format!("{PATH_PETS}/#")),
            UriKind::PetItem,
        ),
    ])
}

/// Pet gender, stored as an integer code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Unknown,
    Male,
    Female,
}

impl Gender {
    /// The integer code persisted in the gender column.
    pub const fn code(self) -> i64 {
        match self {
            Gender::Unknown => 0,
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }

    /// Decode a stored gender code, or `None` if the code is out of range.
    pub const fn from_code(code: i64) -> Option<Gender> {
        match code {
            0 => Some(Gender::Unknown),
            1 => Some(Gender::Male),
            2 => Some(Gender::Female),
            _ => None,
        }
    }

    /// The validity predicate for gender codes: `code ∈ {0, 1, 2}`.
    pub const fn is_valid_code(code: i64) -> bool {
        matches!(code, 0 | 1 | 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn gender_codes_round_trip() {
        for gender in [Gender::Unknown, Gender::Male, Gender::Female] {
            assert_eq!(Gender::from_code(gender.code()), Some(gender));
        }
        assert_eq!(Gender::Unknown.code(), 0);
        assert_eq!(Gender::Male.code(), 1);
        assert_eq!(Gender::Female.code(), 2);
    }

    #[test]
    fn gender_validity_predicate_matches_code_set() {
        for code in -3..6_i64 {
            assert_eq!(
                Gender::is_valid_code(code),
                (0..=2).contains(&code),
                "code {code}"
            );
        }
    }

    #[test]
    fn gender_display_and_from_str_round_trip() {
        for gender in [Gender::Unknown, Gender::Male, Gender::Female] {
            let s = gender.to_string();
            assert_eq!(Gender::from_str(&s).expect("should parse back"), gender);
        }
        assert_eq!(Gender::Male.to_string(), "male");
    }

    #[test]
    fn gender_serializes_lowercase() {
        let json = serde_json::to_string(&Gender::Female).expect("should serialize");
        assert_eq!(json, "\"female\"");
        let parsed: Gender = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(parsed, Gender::Female);
    }

    #[test]
    fn content_types_are_derived_from_authority_and_path() {
        assert_eq!(
            CONTENT_LIST_TYPE,
            format!("vnd.shelter.dir/{AUTHORITY}/{PATH_PETS}")
        );
        assert_eq!(
            CONTENT_ITEM_TYPE,
            format!("vnd.shelter.item/{AUTHORITY}/{PATH_PETS}")
        );
    }
}
