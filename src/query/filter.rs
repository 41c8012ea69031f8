// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use super::needle::contains_ci;
use crate::model::{Catalog, Category, CategoryId, Entry, EntryId};

/// A row address inside a [`VisibleModel`].
///
/// `slot == 0` is the category header, `slot == k` is the `k`-th visible entry (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlatPosition {
    pub category: usize,
    pub slot: usize,
}

impl FlatPosition {
    pub const FIRST: Self = Self::new(0, 0);

    pub const fn new(category: usize, slot: usize) -> Self {
        Self { category, slot }
    }

    pub const fn is_header(self) -> bool {
        self.slot == 0
    }
}

/// Stable identity of a rendered row: the category plus, for entry rows, the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FocusKey {
    pub category: CategoryId,
    pub entry: Option<EntryId>,
}

/// A category that survived filtering, with the entries that matched on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleCategory {
    category: Arc<Category>,
    entry_indices: Vec<usize>,
}

impl VisibleCategory {
    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn visible_entry_count(&self) -> usize {
        self.entry_indices.len()
    }

    /// Visible entries in catalog order.
    pub fn visible_entries(&self) -> impl ExactSizeIterator<Item = &Entry> + '_ {
        let entries = self.category.entries();
        self.entry_indices.iter().map(move |&idx| &entries[idx])
    }

    /// The `k`-th visible entry, 1-based to line up with [`FlatPosition::slot`].
    pub fn entry_at_slot(&self, slot: usize) -> Option<&Entry> {
        let idx = *self.entry_indices.get(slot.checked_sub(1)?)?;
        self.category.entries().get(idx)
    }

    /// Number of rows this category occupies (header plus visible entries).
    pub fn position_count(&self) -> usize {
        1 + self.entry_indices.len()
    }
}

/// The filtered, ordered view of a catalog for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleModel {
    categories: Vec<VisibleCategory>,
}

impl VisibleModel {
    pub fn categories(&self) -> &[VisibleCategory] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// `T`: every visible category contributes its header plus its visible entries.
    pub fn total_positions(&self) -> usize {
        self.categories.iter().map(VisibleCategory::position_count).sum()
    }

    pub fn first_position(&self) -> Option<FlatPosition> {
        (!self.categories.is_empty()).then_some(FlatPosition::FIRST)
    }

    pub fn is_valid(&self, position: FlatPosition) -> bool {
        self.categories
            .get(position.category)
            .is_some_and(|category| position.slot <= category.visible_entry_count())
    }

    /// Row index of `position` in the flattened list.
    pub fn flat_index(&self, position: FlatPosition) -> Option<usize> {
        if !self.is_valid(position) {
            return None;
        }
        let before = self.categories[..position.category]
            .iter()
            .map(VisibleCategory::position_count)
            .sum::<usize>();
        Some(before + position.slot)
    }

    /// Inverse of [`Self::flat_index`].
    pub fn position_at(&self, mut index: usize) -> Option<FlatPosition> {
        for (category, visible) in self.categories.iter().enumerate() {
            let count = visible.position_count();
            if index < count {
                return Some(FlatPosition::new(category, index));
            }
            index -= count;
        }
        None
    }

    pub fn focus_key(&self, position: FlatPosition) -> Option<FocusKey> {
        let visible = self.categories.get(position.category)?;
        let entry = if position.is_header() {
            None
        } else {
            Some(visible.entry_at_slot(position.slot)?.id())
        };
        Some(FocusKey {
            category: visible.category().id(),
            entry,
        })
    }

    /// Identity of every row, in render order.
    pub fn focus_keys(&self) -> impl Iterator<Item = FocusKey> + '_ {
        self.categories.iter().flat_map(|visible| {
            let category = visible.category().id();
            std::iter::once(FocusKey {
                category,
                entry: None,
            })
            .chain(visible.visible_entries().map(move |entry| FocusKey {
                category,
                entry: Some(entry.id()),
            }))
        })
    }

    /// URL of the item at `position`: the category's own URL for headers, otherwise the entry's.
    pub fn url_at(&self, position: FlatPosition) -> Option<&str> {
        let visible = self.categories.get(position.category)?;
        if position.is_header() {
            Some(visible.category().url())
        } else {
            visible.entry_at_slot(position.slot).map(Entry::url)
        }
    }

    /// Display name of the item at `position`.
    pub fn name_at(&self, position: FlatPosition) -> Option<&str> {
        let visible = self.categories.get(position.category)?;
        if position.is_header() {
            Some(visible.category().name())
        } else {
            visible.entry_at_slot(position.slot).map(Entry::name)
        }
    }
}

/// Derives the visible model for `query`.
///
/// A category is kept when its own name matches or when at least one entry matches; its visible
/// entries are exactly the matching ones, so a category kept for its name alone may show none.
pub fn filter(catalog: &Catalog, query: &str) -> VisibleModel {
    let categories = catalog
        .categories()
        .iter()
        .filter_map(|category| {
            let entry_indices = category
                .entries()
                .iter()
                .enumerate()
                .filter(|(_, entry)| contains_ci(entry.name(), query))
                .map(|(idx, _)| idx)
                .collect::<Vec<_>>();

            let visible = !entry_indices.is_empty() || contains_ci(category.name(), query);
            visible.then(|| VisibleCategory {
                category: Arc::clone(category),
                entry_indices,
            })
        })
        .collect();

    VisibleModel { categories }
}
