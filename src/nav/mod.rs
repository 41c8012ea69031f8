// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Keyboard navigation over the visible model.
//!
//! `cursor` holds the pure transition function; `focus` and `opener` are the side-effecting
//! edge that moves focus and opens activated URLs.

pub mod cursor;
pub mod focus;
pub mod opener;

pub use cursor::{activate, advance, reduce, reset, Direction, MenuEvent, Transition};
pub use focus::{FocusHandle, FocusMap, FocusSink, FocusSynchronizer};
pub use opener::{OpenError, RecordingOpener, SystemOpener, UrlOpener};
