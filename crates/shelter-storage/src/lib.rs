// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Shelter pet store.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a single-writer
//! concurrency model via `tokio-rusqlite`, and the [`SqlitePetStore`] facade:
//! URI dispatch, write validation, CRUD, and change notification.

pub mod database;
pub mod migrations;
pub mod models;
pub mod notify;
pub mod provider;
pub mod queries;
pub mod validation;

pub use database::Database;
pub use notify::{ChangeNotifier, SubscriptionId};
pub use provider::SqlitePetStore;
