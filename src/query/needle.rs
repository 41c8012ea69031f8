// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Literal, ASCII case-insensitive substring search.
//!
//! Both filtering and highlighting go through [`find_ci`], so a name kept by the filter always
//! has a highlight for the same query.

/// Returns the byte offset of the first occurrence of `needle` in `haystack`, comparing ASCII
/// letters without regard to case. Non-ASCII bytes must match exactly.
///
/// An empty needle matches at offset `0`.
///
/// The returned offset and `offset + needle.len()` are always char boundaries of `haystack`: a
/// valid UTF-8 needle can only line up with whole encoded chars.
pub fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.is_empty() {
        return Some(0);
    }
    if pat.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - pat.len())
        .find(|&start| hay[start..start + pat.len()].eq_ignore_ascii_case(pat))
}

/// `name.toLowerCase().includes(query.toLowerCase())` with ASCII case folding.
pub fn contains_ci(name: &str, query: &str) -> bool {
    find_ci(name, query).is_some()
}

#[cfg(test)]
mod tests {
    use super::{contains_ci, find_ci};

    #[test]
    fn empty_needle_matches_everything() {
        assert_eq!(find_ci("Systems", ""), Some(0));
        assert_eq!(find_ci("", ""), Some(0));
        assert!(contains_ci("", ""));
    }

    #[test]
    fn finds_first_occurrence_ignoring_ascii_case() {
        assert_eq!(find_ci("Epiphany", "EPI"), Some(0));
        assert_eq!(find_ci("User Agents", "a"), Some(5));
        assert_eq!(find_ci("banana", "AN"), Some(1));
    }

    #[test]
    fn needle_longer_than_haystack_never_matches() {
        assert_eq!(find_ci("API", "APIs"), None);
        assert!(!contains_ci("", "a"));
    }

    #[test]
    fn non_ascii_bytes_match_exactly() {
        assert_eq!(find_ci("Café Noir", "é n"), Some(3));
        assert_eq!(find_ci("Café", "É"), None);
        let offset = find_ci("αβγ", "β").expect("match");
        assert!("αβγ".is_char_boundary(offset));
        assert!("αβγ".is_char_boundary(offset + "β".len()));
    }

    #[test]
    fn pattern_characters_are_literal() {
        assert!(!contains_ci("Development", "d.v"));
        assert!(contains_ci("a.b*c", ".B*"));
    }
}
