// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::ids::{CategoryId, EntryId};

/// A leaf item of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    name: String,
    url: String,
}

impl Entry {
    pub fn new(id: EntryId, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A top-level menu group with its own target URL and an ordered list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    image_ref: String,
    url: String,
    entries: Vec<Entry>,
}

impl Category {
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        image_ref: impl Into<String>,
        url: impl Into<String>,
        entries: Vec<Entry>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image_ref: image_ref.into(),
            url: url.into(),
            entries,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// The full, immutable menu content.
///
/// Categories are shared behind `Arc` so derived views can hold on to them without copying
/// names and URLs on every query edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Arc<Category>>,
}

impl Catalog {
    /// Builds a catalog, checking that category ids are unique and that entry ids are unique
    /// within each category.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut category_ids = BTreeSet::new();
        for category in &categories {
            if !category_ids.insert(category.id()) {
                return Err(CatalogError::DuplicateCategoryId(category.id()));
            }

            let mut entry_ids = BTreeSet::new();
            for entry in category.entries() {
                if !entry_ids.insert(entry.id()) {
                    return Err(CatalogError::DuplicateEntryId {
                        category: category.id(),
                        entry: entry.id(),
                    });
                }
            }
        }

        Ok(Self {
            categories: categories.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Arc<Category>] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|category| category.entry_count()).sum()
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.id() == id)
            .map(|category| category.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate category id {0}")]
    DuplicateCategoryId(CategoryId),
    #[error("duplicate entry id {entry} in category {category}")]
    DuplicateEntryId { category: CategoryId, entry: EntryId },
}
