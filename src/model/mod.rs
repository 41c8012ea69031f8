// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A catalog holds categories, each with an ordered list of entries. The model is immutable
//! once built; everything else derives views over it.

pub mod catalog;
pub(crate) mod fixtures;
pub mod ids;

pub use catalog::{Catalog, CatalogError, Category, Entry};
pub use ids::{CategoryId, EntryId, Id};
