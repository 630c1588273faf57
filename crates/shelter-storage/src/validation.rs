// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Write-payload validation applied before anything reaches the database.
//!
//! Two modes: strict for insert (required fields must be present), partial
//! for update (each field is checked only if the sparse payload carries it).

use shelter_core::contract::{self, Gender};
use shelter_core::{FieldValue, PetValues, ShelterError};

/// Validate a complete insert payload.
///
/// `name` and `gender` are required; `weight` is checked only when present
/// (the upstream caller supplies 0 for an empty field, never omits it by
/// contract, but absence is legal at this layer).
pub fn validate_insert(values: &PetValues) -> Result<(), ShelterError> {
    if !matches!(values.get(contract::COLUMN_NAME), Some(FieldValue::Text(_))) {
        return Err(ShelterError::InvalidRecord("pet requires a name".into()));
    }
    match values.get_integer(contract::COLUMN_GENDER) {
        Some(code) if Gender::is_valid_code(code) => {}
        _ => {
            return Err(ShelterError::InvalidRecord(
                "pet requires a valid gender".into(),
            ))
        }
    }
    validate_weight_if_present(values)
}

/// Validate a sparse update payload.
///
/// Each rule from strict mode applies only to fields the payload carries.
/// An empty payload passes; the facade turns it into a no-op reporting zero
/// affected rows.
pub fn validate_update(values: &PetValues) -> Result<(), ShelterError> {
    if values.contains(contract::COLUMN_NAME)
        && !matches!(values.get(contract::COLUMN_NAME), Some(FieldValue::Text(_)))
    {
        return Err(ShelterError::InvalidRecord("pet requires a name".into()));
    }
    if values.contains(contract::COLUMN_GENDER) {
        match values.get_integer(contract::COLUMN_GENDER) {
            Some(code) if Gender::is_valid_code(code) => {}
            _ => {
                return Err(ShelterError::InvalidRecord(
                    "pet requires a valid gender".into(),
                ))
            }
        }
    }
    validate_weight_if_present(values)
}

fn validate_weight_if_present(values: &PetValues) -> Result<(), ShelterError> {
    if !values.contains(contract::COLUMN_WEIGHT) {
        return Ok(());
    }
    match values.get_integer(contract::COLUMN_WEIGHT) {
        Some(weight) if weight >= 0 => Ok(()),
        _ => Err(ShelterError::InvalidRecord(
            "pet requires a valid weight".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_insert_payload() -> PetValues {
        let mut values = PetValues::new();
        values.put_name("TOTO");
        values.put_breed(Some("TERRIER"));
        values.put_gender(Gender::Male);
        values.put_weight(7);
        values
    }

    #[test]
    fn valid_payload_passes_both_modes() {
        let values = valid_insert_payload();
        assert!(validate_insert(&values).is_ok());
        assert!(validate_update(&values).is_ok());
    }

    #[test]
    fn insert_requires_name() {
        let mut values = valid_insert_payload();
        values.put_null(contract::COLUMN_NAME);
        assert!(matches!(
            validate_insert(&values),
            Err(ShelterError::InvalidRecord(msg)) if msg.contains("name")
        ));

        let mut values = PetValues::new();
        values.put_gender(Gender::Female);
        assert!(validate_insert(&values).is_err());
    }

    #[test]
    fn insert_requires_valid_gender() {
        let mut values = valid_insert_payload();
        values.put(contract::COLUMN_GENDER, 3.into());
        assert!(matches!(
            validate_insert(&values),
            Err(ShelterError::InvalidRecord(msg)) if msg.contains("gender")
        ));

        // Missing gender is rejected too -- no silent default substitution.
        let mut values = PetValues::new();
        values.put_name("TOTO");
        assert!(validate_insert(&values).is_err());

        // Present-but-null gender is equally invalid.
        let mut values = valid_insert_payload();
        values.put_null(contract::COLUMN_GENDER);
        assert!(validate_insert(&values).is_err());
    }

    #[test]
    fn weight_sign_rule_applies_in_both_modes() {
        for weight in [0_i64, 1, 7, i64::MAX] {
            let mut values = valid_insert_payload();
            values.put_weight(weight);
            assert!(validate_insert(&values).is_ok(), "weight {weight}");
            assert!(validate_update(&values).is_ok(), "weight {weight}");
        }
        for weight in [-1_i64, -7, i64::MIN] {
            let mut values = valid_insert_payload();
            values.put_weight(weight);
            assert!(validate_insert(&values).is_err(), "weight {weight}");

            let mut patch = PetValues::new();
            patch.put_weight(weight);
            assert!(validate_update(&patch).is_err(), "weight {weight}");
        }
    }

    #[test]
    fn insert_allows_absent_weight() {
        let mut values = PetValues::new();
        values.put_name("TOTO");
        values.put_gender(Gender::Unknown);
        assert!(validate_insert(&values).is_ok());
    }

    #[test]
    fn update_checks_only_present_fields() {
        let mut patch = PetValues::new();
        patch.put_breed(None);
        assert!(validate_update(&patch).is_ok());

        patch.put_null(contract::COLUMN_NAME);
        assert!(validate_update(&patch).is_err());
    }

    #[test]
    fn empty_update_payload_passes_validation() {
        assert!(validate_update(&PetValues::new()).is_ok());
    }
}
