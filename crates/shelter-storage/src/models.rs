// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `shelter-core` for use across the
//! facade boundary. This module re-exports them for convenience within the
//! storage crate.

pub use shelter_core::{Gender, Pet, PetValues};
