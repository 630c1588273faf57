// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the [`PetStore`] facade.
//!
//! Every call resolves its URI against the registered shapes first; a
//! single-record URI is rewritten into a collection request filtered by
//! `_id = ?` with the id bound as a parameter. Writes pass validation before
//! reaching the database, and successful mutations fan out change
//! notifications to subscribers.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, error};

use shelter_config::StorageConfig;
use shelter_core::contract;
use shelter_core::{FieldValue, PetStore, PetUri, PetValues, ShelterError, UriKind, UriMatcher};

use crate::database::Database;
use crate::notify::{ChangeNotifier, SubscriptionId};
use crate::queries;
use crate::validation;

/// SQLite-backed pet store.
///
/// Wraps a [`Database`] handle and delegates SQL to the typed query module.
/// The database is lazily opened on the first call to
/// [`PetStore::initialize`].
pub struct SqlitePetStore {
    config: StorageConfig,
    db: OnceCell<Database>,
    matcher: UriMatcher,
    notifier: ChangeNotifier,
}

impl SqlitePetStore {
    /// Create a new store with the given configuration.
    ///
    /// The database file is not opened until [`PetStore::initialize`] is
    /// called. The route table is built here, once, and consulted read-only.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
            matcher: contract::uri_matcher(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Register a callback for changes at or under `uri`.
    pub fn subscribe(
        &self,
        uri: PetUri,
        callback: impl Fn(&PetUri) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.notifier.subscribe(uri, callback)
    }

    /// Remove a subscription. Returns whether it was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Returns the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, ShelterError> {
        self.db.get().ok_or_else(|| ShelterError::Storage {
            source: "store not initialized -- call initialize() first".into(),
        })
    }

    fn resolve(&self, operation: &str, uri: &PetUri) -> Result<UriKind, ShelterError> {
        self.matcher
            .match_uri(uri)
            .ok_or_else(|| ShelterError::unsupported_uri(operation, uri))
    }

    /// The rewritten filter for a single-record URI: `_id = ?` with the id
    /// suffix bound positionally.
    fn id_filter(
        operation: &str,
        uri: &PetUri,
    ) -> Result<(Option<String>, Vec<FieldValue>), ShelterError> {
        let id = uri
            .record_id()
            .ok_or_else(|| ShelterError::unsupported_uri(operation, uri))?;
        Ok((
            Some(format!("{} = ?", contract::COLUMN_ID)),
            vec![FieldValue::Integer(id)],
        ))
    }
}

#[async_trait]
impl PetStore for SqlitePetStore {
    async fn initialize(&self) -> Result<(), ShelterError> {
        let db = Database::open_with(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| ShelterError::Storage {
            source: "store already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "sqlite pet store initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), ShelterError> {
        self.db()?.close().await
    }

    fn resolve_type(&self, uri: &PetUri) -> Result<&'static str, ShelterError> {
        match self.resolve("resolve type for", uri)? {
            UriKind::PetCollection => Ok(contract::CONTENT_LIST_TYPE),
            UriKind::PetItem => Ok(contract::CONTENT_ITEM_TYPE),
        }
    }

    async fn query(
        &self,
        uri: &PetUri,
        projection: Option<&[&str]>,
        selection: Option<&str>,
        selection_args: &[FieldValue],
        sort_order: Option<&str>,
    ) -> Result<Vec<PetValues>, ShelterError> {
        let (selection, selection_args) = match self.resolve("query", uri)? {
            UriKind::PetCollection => (
                selection.map(str::to_string),
                selection_args.to_vec(),
            ),
            UriKind::PetItem => Self::id_filter("query", uri)?,
        };
        queries::pets::query_pets(
            self.db()?,
            projection.map(|cols| cols.iter().map(|c| c.to_string()).collect()),
            selection,
            selection_args,
            sort_order.map(str::to_string),
        )
        .await
    }

    async fn insert(&self, uri: &PetUri, values: &PetValues) -> Result<i64, ShelterError> {
        match self.resolve("insert into", uri)? {
            UriKind::PetCollection => {}
            UriKind::PetItem => {
                return Err(ShelterError::unsupported_operation("insert", uri));
            }
        }
        validation::validate_insert(values)?;

        let id = queries::pets::insert_pet(self.db()?, values)
            .await
            .inspect_err(|e| error!(uri = %uri, error = %e, "failed to insert pet row"))?;

        self.notifier.notify(uri);
        Ok(id)
    }

    async fn update(
        &self,
        uri: &PetUri,
        values: &PetValues,
        selection: Option<&str>,
        selection_args: &[FieldValue],
    ) -> Result<u64, ShelterError> {
        let (selection, selection_args) = match self.resolve("update", uri)? {
            UriKind::PetCollection => (
                selection.map(str::to_string),
                selection_args.to_vec(),
            ),
            UriKind::PetItem => Self::id_filter("update", uri)?,
        };
        validation::validate_update(values)?;
        if values.is_empty() {
            return Ok(0);
        }

        let affected =
            queries::pets::update_pets(self.db()?, values, selection, selection_args).await?;
        if affected > 0 {
            self.notifier.notify(uri);
        }
        Ok(affected)
    }

    async fn delete(
        &self,
        uri: &PetUri,
        selection: Option<&str>,
        selection_args: &[FieldValue],
    ) -> Result<u64, ShelterError> {
        let (selection, selection_args) = match self.resolve("delete from", uri)? {
            UriKind::PetCollection => (
                selection.map(str::to_string),
                selection_args.to_vec(),
            ),
            UriKind::PetItem => Self::id_filter("delete from", uri)?,
        };

        let affected = queries::pets::delete_pets(self.db()?, selection, selection_args).await?;
        if affected > 0 {
            self.notifier.notify(uri);
        }
        Ok(affected)
    }
}
