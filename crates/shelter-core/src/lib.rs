// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Shelter pet record store.
//!
//! This crate defines the record contract (table, columns, URI shapes,
//! content types, gender codes), the resource-URI matcher, sparse field
//! payloads, the shared error type, and the [`PetStore`] facade trait that
//! storage backends implement.

pub mod contract;
pub mod error;
pub mod traits;
pub mod types;
pub mod uri;
pub mod values;

// Re-export key items at crate root for ergonomic imports.
pub use contract::Gender;
pub use error::ShelterError;
pub use traits::PetStore;
pub use types::Pet;
pub use uri::{PetUri, UriKind, UriMatcher, UriPattern};
pub use values::{FieldValue, PetValues};
