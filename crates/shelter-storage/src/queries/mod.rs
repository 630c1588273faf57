// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query modules for CRUD operations on storage entities.

pub mod pets;
