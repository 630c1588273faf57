// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand handlers over the record-access facade.

use shelter_core::contract;
use shelter_core::{Gender, Pet, PetStore, PetUri, PetValues, ShelterError};
use shelter_storage::SqlitePetStore;
use tracing::info;

/// Columns shown in the list view.
const LIST_PROJECTION: [&str; 3] = [
    contract::COLUMN_ID,
    contract::COLUMN_NAME,
    contract::COLUMN_BREED,
];

/// List all pets, name and breed per line.
pub async fn list(store: &SqlitePetStore) -> Result<(), ShelterError> {
    let rows = store
        .query(
            &PetUri::collection(),
            Some(&LIST_PROJECTION),
            None,
            &[],
            Some(contract::COLUMN_ID),
        )
        .await?;

    if rows.is_empty() {
        println!("The shelter is empty. Add a pet with `shelter add`.");
        return Ok(());
    }
    for row in &rows {
        let id = row.get_integer(contract::COLUMN_ID).unwrap_or_default();
        let name = row.get_text(contract::COLUMN_NAME).unwrap_or_default();
        println!("{id:>4}  {name}  ({})", breed_label(row));
    }
    Ok(())
}

/// Show one pet with every field.
pub async fn show(store: &SqlitePetStore, id: i64) -> Result<(), ShelterError> {
    let rows = store
        .query(&PetUri::record(id), None, None, &[], None)
        .await?;

    let Some(row) = rows.first() else {
        println!("No pet with id {id}.");
        return Ok(());
    };
    let pet = Pet::try_from(row)?;
    println!("id:     {}", pet.id);
    println!("name:   {}", pet.name);
    println!("breed:  {}", pet.breed.as_deref().unwrap_or("Unknown Breed"));
    println!("gender: {}", pet.gender);
    println!("weight: {}", pet.weight);
    Ok(())
}

/// Add a new pet.
pub async fn add(
    store: &SqlitePetStore,
    name: &str,
    breed: Option<&str>,
    gender: Gender,
    weight: i64,
) -> Result<(), ShelterError> {
    let mut values = PetValues::new();
    values.put_name(name);
    values.put_breed(breed);
    values.put_gender(gender);
    values.put_weight(weight);

    let id = store.insert(&PetUri::collection(), &values).await?;
    info!(id, "pet saved");
    println!("Saved pet {id}.");
    Ok(())
}

/// Patch an existing pet; only the given fields change.
pub async fn edit(
    store: &SqlitePetStore,
    id: i64,
    name: Option<&str>,
    breed: Option<&str>,
    gender: Option<Gender>,
    weight: Option<i64>,
) -> Result<(), ShelterError> {
    let mut values = PetValues::new();
    if let Some(name) = name {
        values.put_name(name);
    }
    if let Some(breed) = breed {
        values.put_breed(Some(breed));
    }
    if let Some(gender) = gender {
        values.put_gender(gender);
    }
    if let Some(weight) = weight {
        values.put_weight(weight);
    }

    let affected = store
        .update(&PetUri::record(id), &values, None, &[])
        .await?;
    if affected == 0 {
        println!("Nothing to update for pet {id}.");
    } else {
        println!("Updated pet {id}.");
    }
    Ok(())
}

/// Delete one pet.
pub async fn delete(store: &SqlitePetStore, id: i64) -> Result<(), ShelterError> {
    let affected = store.delete(&PetUri::record(id), None, &[]).await?;
    if affected == 0 {
        println!("No pet with id {id}.");
    } else {
        println!("Deleted pet {id}.");
    }
    Ok(())
}

/// Insert the fixed sample pet.
pub async fn seed(store: &SqlitePetStore) -> Result<(), ShelterError> {
    let mut values = PetValues::new();
    values.put_name("TOTO");
    values.put_breed(Some("TERRIER"));
    values.put_weight(7);
    values.put_gender(Gender::Male);

    let id = store.insert(&PetUri::collection(), &values).await?;
    println!("Saved sample pet {id}.");
    Ok(())
}

/// Delete every pet.
pub async fn clear(store: &SqlitePetStore) -> Result<(), ShelterError> {
    let affected = store.delete(&PetUri::collection(), None, &[]).await?;
    info!(rows = affected, "pets deleted from the database");
    println!("Deleted {affected} pets.");
    Ok(())
}

/// Breed shown in list output; empty and null both read "Unknown Breed".
fn breed_label(row: &PetValues) -> &str {
    match row.get_text(contract::COLUMN_BREED) {
        Some(breed) if !breed.is_empty() => breed,
        _ => "Unknown Breed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breed_label_falls_back_for_null_and_empty() {
        let mut row = PetValues::new();
        assert_eq!(breed_label(&row), "Unknown Breed");

        row.put_null(contract::COLUMN_BREED);
        assert_eq!(breed_label(&row), "Unknown Breed");

        row.put_breed(Some(""));
        assert_eq!(breed_label(&row), "Unknown Breed");

        row.put_breed(Some("TERRIER"));
        assert_eq!(breed_label(&row), "TERRIER");
    }
}
