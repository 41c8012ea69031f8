// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::needle::find_ci;

/// How a name should be drawn for the current query.
///
/// All parts borrow from the original name, so casing is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightSpan<'a> {
    NoMatch,
    Match {
        before: &'a str,
        matched: &'a str,
        after: &'a str,
    },
}

impl<'a> HighlightSpan<'a> {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    /// `(before, matched, after)`, or `None` when the name renders verbatim.
    pub fn parts(&self) -> Option<(&'a str, &'a str, &'a str)> {
        match *self {
            Self::NoMatch => None,
            Self::Match {
                before,
                matched,
                after,
            } => Some((before, matched, after)),
        }
    }
}

/// Splits `name` around the first case-insensitive occurrence of `query`.
///
/// An empty query never highlights. Only the first occurrence is marked.
pub fn highlight<'a>(name: &'a str, query: &str) -> HighlightSpan<'a> {
    if query.is_empty() {
        return HighlightSpan::NoMatch;
    }

    let Some(start) = find_ci(name, query) else {
        return HighlightSpan::NoMatch;
    };
    let end = start + query.len();

    HighlightSpan::Match {
        before: &name[..start],
        matched: &name[start..end],
        after: &name[end..],
    }
}
