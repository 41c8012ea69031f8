// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Owned menu session state.
//!
//! One `MenuState` belongs to one open dropdown. Query edits and key events are applied in
//! arrival order; each one finishes (recompute, cursor update) before the next is accepted.

use crate::model::Catalog;
use crate::nav::cursor::{self, MenuEvent, Transition};
use crate::query::{filter, FlatPosition, VisibleModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    rev: u64,
    catalog: Catalog,
    query: String,
    visible: VisibleModel,
    cursor: Option<FlatPosition>,
}

impl MenuState {
    pub fn new(catalog: Catalog) -> Self {
        let visible = filter(&catalog, "");
        let cursor = cursor::reset(&visible);
        Self {
            rev: 0,
            catalog,
            query: String::new(),
            visible,
            cursor,
        }
    }

    /// Bumped whenever the visible model is recomputed.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &VisibleModel {
        &self.visible
    }

    pub fn cursor(&self) -> Option<FlatPosition> {
        self.cursor
    }

    /// Replaces the query. Setting the current query again is a no-op; any other value
    /// recomputes the visible model and moves the cursor back to the first row.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if self.query == query {
            return false;
        }

        self.query = query;
        self.recompute();
        tracing::debug!(
            query = %self.query,
            positions = self.visible.total_positions(),
            "menu query changed"
        );
        true
    }

    /// Swaps in a reloaded catalog, keeping the query.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.recompute();
    }

    pub fn apply(&mut self, event: MenuEvent) -> Transition {
        let transition = cursor::reduce(self.cursor, &self.visible, event);
        self.cursor = transition.cursor;
        transition
    }

    /// URL that activating the current row would open.
    pub fn activation_target(&self) -> Option<&str> {
        cursor::activate(self.cursor, &self.visible)
    }

    fn recompute(&mut self) {
        self.visible = filter(&self.catalog, &self.query);
        self.cursor = cursor::reset(&self.visible);
        self.rev = self.rev.wrapping_add(1);
    }
}
