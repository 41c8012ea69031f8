// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{Catalog, CatalogError, Category, CategoryId, Entry, EntryId};

/// Wire shape of one category: `{id, name, image: {link}, url, groups: [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub image: ImageRecord,
    pub url: String,
    pub groups: Vec<EntryRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub link: String,
}

/// Wire shape of one entry (called a group on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: EntryId,
    pub name: String,
    pub url: String,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        let entries = record
            .groups
            .into_iter()
            .map(|group| Entry::new(group.id, group.name, group.url))
            .collect();
        Category::new(record.id, record.name, record.image.link.trim(), record.url, entries)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Decodes a JSON array of category records into a validated catalog.
pub fn parse_catalog_json(json: &str) -> Result<Catalog, StoreError> {
    let records: Vec<CategoryRecord> = serde_json::from_str(json)?;
    let catalog = Catalog::new(records.into_iter().map(Category::from).collect())?;
    Ok(catalog)
}

/// A catalog stored as a single JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Catalog, StoreError> {
        let json = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        match parse_catalog_json(&json) {
            Ok(catalog) => {
                tracing::info!(
                    path = %self.path.display(),
                    categories = catalog.len(),
                    entries = catalog.entry_count(),
                    "catalog loaded"
                );
                Ok(catalog)
            }
            Err(err) => {
                tracing::error!(path = %self.path.display(), error = %err, "catalog rejected");
                Err(err)
            }
        }
    }
}
