// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Catalog loading.
//!
//! Reads the catalog JSON format (an array of categories with nested `groups`) from disk and
//! validates it into a [`crate::model::Catalog`].

pub mod catalog_file;

pub use catalog_file::{
    parse_catalog_json, CatalogFile, CategoryRecord, EntryRecord, ImageRecord, StoreError,
};
