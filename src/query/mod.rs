// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over a catalog.
//!
//! Filtering derives the visible model for a search string; highlighting splits a visible name
//! around its match. Both are pure and share one matching routine.

pub mod filter;
pub mod highlight;
pub mod needle;

pub use filter::{filter, FlatPosition, FocusKey, VisibleCategory, VisibleModel};
pub use highlight::{highlight, HighlightSpan};
pub use needle::{contains_ci, find_ci};
