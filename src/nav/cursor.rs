// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::query::{FlatPosition, VisibleModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Menu-level input after key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Navigate(Direction),
    Activate,
}

impl MenuEvent {
    pub const NEXT: Self = Self::Navigate(Direction::Next);
    pub const PREV: Self = Self::Navigate(Direction::Prev);
}

/// Result of feeding one [`MenuEvent`] to [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub cursor: Option<FlatPosition>,
    pub activate: Option<String>,
}

/// Cursor after a model change: the first row, or `None` when nothing is visible.
pub fn reset(model: &VisibleModel) -> Option<FlatPosition> {
    model.first_position()
}

/// Moves the cursor one row in `direction`, wrapping around both ends.
///
/// The walk is circular over exactly `model.total_positions()` rows. A `None` cursor stays
/// `None`; a cursor that does not address a row of `model` snaps back to the first row.
pub fn advance(
    cursor: Option<FlatPosition>,
    model: &VisibleModel,
    direction: Direction,
) -> Option<FlatPosition> {
    let categories = model.categories();
    if categories.is_empty() {
        return None;
    }
    let position = cursor?;
    if !model.is_valid(position) {
        return model.first_position();
    }

    let last_slot = |category: usize| categories[category].visible_entry_count();
    let next = match direction {
        Direction::Next => {
            if position.slot < last_slot(position.category) {
                FlatPosition::new(position.category, position.slot + 1)
            } else {
                FlatPosition::new((position.category + 1) % categories.len(), 0)
            }
        }
        Direction::Prev => {
            if position.slot > 0 {
                FlatPosition::new(position.category, position.slot - 1)
            } else {
                let category = position.category.checked_sub(1).unwrap_or(categories.len() - 1);
                FlatPosition::new(category, last_slot(category))
            }
        }
    };

    Some(next)
}

/// URL that activating `cursor` navigates to: the category URL on a header row, the entry URL
/// otherwise.
pub fn activate(cursor: Option<FlatPosition>, model: &VisibleModel) -> Option<&str> {
    model.url_at(cursor?)
}

/// Pure `(cursor, event) -> cursor'` step.
pub fn reduce(cursor: Option<FlatPosition>, model: &VisibleModel, event: MenuEvent) -> Transition {
    match event {
        MenuEvent::Navigate(direction) => Transition {
            cursor: advance(cursor, model, direction),
            activate: None,
        },
        MenuEvent::Activate => Transition {
            cursor,
            activate: activate(cursor, model).map(str::to_owned),
        },
    }
}
