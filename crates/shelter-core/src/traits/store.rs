// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The record-access facade trait.

use async_trait::async_trait;

use crate::error::ShelterError;
use crate::uri::PetUri;
use crate::values::{FieldValue, PetValues};

/// The public contract of the data-access layer.
///
/// Every operation resolves its URI against the registered shapes first;
/// writes are validated before they reach the storage engine. Calls are
/// atomic on their own (no transaction spans multiple facade calls), and
/// cancellation is dropping the returned future.
#[async_trait]
pub trait PetStore: Send + Sync {
    /// Opens the backing store (creating the database file and schema on
    /// first use).
    async fn initialize(&self) -> Result<(), ShelterError>;

    /// Flushes and closes the backing store.
    async fn close(&self) -> Result<(), ShelterError>;

    /// Resolve a URI to its content type: collection vs single record.
    fn resolve_type(&self, uri: &PetUri) -> Result<&'static str, ShelterError>;

    /// Query the collection or a single record.
    ///
    /// `projection` narrows the returned columns (all columns when `None`);
    /// `selection` is an opaque filter expression with `?n` placeholders
    /// bound from `selection_args`. For a single-record URI the filter is
    /// rewritten to match the id suffix and the caller's selection is ignored.
    async fn query(
        &self,
        uri: &PetUri,
        projection: Option<&[&str]>,
        selection: Option<&str>,
        selection_args: &[FieldValue],
        sort_order: Option<&str>,
    ) -> Result<Vec<PetValues>, ShelterError>;

    /// Insert a new record at the collection URI; returns the new row id.
    ///
    /// Single-record URIs are rejected with
    /// [`ShelterError::UnsupportedOperation`].
    async fn insert(&self, uri: &PetUri, values: &PetValues) -> Result<i64, ShelterError>;

    /// Update records in place; returns the affected row count.
    ///
    /// An empty payload is accepted as a no-op reporting zero affected rows.
    async fn update(
        &self,
        uri: &PetUri,
        values: &PetValues,
        selection: Option<&str>,
        selection_args: &[FieldValue],
    ) -> Result<u64, ShelterError>;

    /// Delete records; returns the affected row count.
    async fn delete(
        &self,
        uri: &PetUri,
        selection: Option<&str>,
        selection_args: &[FieldValue],
    ) -> Result<u64, ShelterError>;
}
