// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the facade boundary.

use serde::{Deserialize, Serialize};

use crate::contract::{self, Gender};
use crate::error::ShelterError;
use crate::values::PetValues;

/// A fully materialized pet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    /// `None` is the "unknown breed" state.
    pub breed: Option<String>,
    pub gender: Gender,
    pub weight: i64,
}

impl TryFrom<&PetValues> for Pet {
    type Error = ShelterError;

    /// Convert a fully projected row into a typed record.
    ///
    /// Requires `_id`, `name`, `gender`, and `weight` to be present; breed may
    /// be null or an empty string, both of which collapse to `None`.
    fn try_from(row: &PetValues) -> Result<Self, Self::Error> {
        let id = row
            .get_integer(contract::COLUMN_ID)
            .ok_or_else(|| ShelterError::InvalidRecord("row is missing _id".into()))?;
        let name = row
            .get_text(contract::COLUMN_NAME)
            .ok_or_else(|| ShelterError::InvalidRecord("row is missing name".into()))?
            .to_string();
        let gender_code = row
            .get_integer(contract::COLUMN_GENDER)
            .ok_or_else(|| ShelterError::InvalidRecord("row is missing gender".into()))?;
        let gender = Gender::from_code(gender_code).ok_or_else(|| {
            ShelterError::InvalidRecord(format!("row has gender code {gender_code} out of range"))
        })?;
        let weight = row
            .get_integer(contract::COLUMN_WEIGHT)
            .ok_or_else(|| ShelterError::InvalidRecord("row is missing weight".into()))?;
        let breed = row
            .get_text(contract::COLUMN_BREED)
            .filter(|b| !b.is_empty())
            .map(str::to_string);

        Ok(Pet {
            id,
            name,
            breed,
            gender,
            weight,
        })
    }
}
