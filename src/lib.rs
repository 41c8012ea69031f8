// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad: a searchable, keyboard-navigable two-level dropdown menu.
//!
//! - [`model`]: the catalog of categories and their entries.
//! - [`query`]: filtering a catalog by a search query and highlighting the matched text.
//! - [`nav`]: the cursor over the visible rows and the focus/open side effects.
//! - [`menu`]: the state one open dropdown carries between key presses.
//! - [`store`]: loading catalogs from JSON.
//! - [`tui`]: the terminal host.

pub mod menu;
pub mod model;
pub mod nav;
pub mod query;
pub mod store;
pub mod tui;
