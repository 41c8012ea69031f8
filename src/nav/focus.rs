// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bridge between the cursor and whatever draws the menu.
//!
//! The synchronizer is the only place that touches the rendering layer: after each cursor
//! change it moves focus to the control for the cursor row, and on activation it hands the
//! target URL to a [`UrlOpener`].

use std::collections::HashMap;

use super::cursor::MenuEvent;
use super::opener::{OpenError, UrlOpener};
use crate::menu::MenuState;
use crate::model::Catalog;
use crate::query::{FlatPosition, FocusKey, VisibleModel};

/// Handle of a focusable control in the rendering layer (its row in the drawn list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FocusHandle(usize);

impl FocusHandle {
    pub const fn new(row: usize) -> Self {
        Self(row)
    }

    pub const fn row(self) -> usize {
        self.0
    }
}

/// Receives focus changes.
pub trait FocusSink {
    fn focus(&mut self, handle: FocusHandle);
    fn clear_focus(&mut self);
}

/// Lookup from stable row identity to control handle.
///
/// The map is rebuilt only when the set of visible identities changes, so a query edit that
/// keeps the same rows (for example typing a character every visible name still contains)
/// leaves the handles untouched.
#[derive(Debug, Default)]
pub struct FocusMap {
    keys: Vec<FocusKey>,
    handles: HashMap<FocusKey, FocusHandle>,
    rebuilds: u64,
}

impl FocusMap {
    /// Rebuilds the map if `model` shows a different identity sequence. Returns whether it did.
    pub fn rebuild_if_changed(&mut self, model: &VisibleModel) -> bool {
        if model.focus_keys().eq(self.keys.iter().copied()) {
            return false;
        }

        self.keys = model.focus_keys().collect();
        self.handles = self
            .keys
            .iter()
            .enumerate()
            .map(|(row, key)| (*key, FocusHandle::new(row)))
            .collect();
        self.rebuilds = self.rebuilds.wrapping_add(1);
        true
    }

    pub fn handle(&self, key: &FocusKey) -> Option<FocusHandle> {
        self.handles.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}

pub struct FocusSynchronizer<S, O> {
    sink: S,
    opener: O,
    map: FocusMap,
    focused: Option<FocusHandle>,
}

impl<S: FocusSink, O: UrlOpener> FocusSynchronizer<S, O> {
    pub fn new(sink: S, opener: O) -> Self {
        Self {
            sink,
            opener,
            map: FocusMap::default(),
            focused: None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Releases the synchronizer, handing back the opener for the next session.
    pub fn into_opener(self) -> O {
        self.opener
    }

    pub fn focus_map(&self) -> &FocusMap {
        &self.map
    }

    pub fn focused(&self) -> Option<FocusHandle> {
        self.focused
    }

    /// Points the sink at the control for `cursor`, refreshing the lookup first if the visible
    /// rows changed.
    pub fn sync(&mut self, model: &VisibleModel, cursor: Option<FlatPosition>) {
        self.map.rebuild_if_changed(model);

        let handle = cursor
            .and_then(|position| model.focus_key(position))
            .and_then(|key| self.map.handle(&key));
        match handle {
            Some(handle) => self.sink.focus(handle),
            None => self.sink.clear_focus(),
        }
        self.focused = handle;
    }

    /// Applies a query edit to `menu` and re-focuses. Returns whether the query changed.
    pub fn set_query(&mut self, menu: &mut MenuState, query: impl Into<String>) -> bool {
        let changed = menu.set_query(query);
        if changed {
            self.sync(menu.visible(), menu.cursor());
        }
        changed
    }

    /// Swaps a reloaded catalog into `menu` and re-focuses the reset cursor.
    pub fn replace_catalog(&mut self, menu: &mut MenuState, catalog: Catalog) {
        menu.replace_catalog(catalog);
        self.sync(menu.visible(), menu.cursor());
    }

    /// Runs one menu event to completion: cursor transition, then focus or navigation.
    pub fn dispatch(&mut self, menu: &mut MenuState, event: MenuEvent) -> Result<(), OpenError> {
        let transition = menu.apply(event);
        if let Some(url) = transition.activate {
            tracing::info!(%url, "activating menu item");
            return self.opener.open(&url);
        }

        tracing::trace!(cursor = ?transition.cursor, "cursor moved");
        self.sync(menu.visible(), transition.cursor);
        Ok(())
    }
}
