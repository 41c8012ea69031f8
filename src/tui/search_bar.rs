// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regex::Regex;

/// Outcome of a text-editing key in the search line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum QueryEdit {
    /// The edit produced a new, acceptable query.
    Accepted(String),
    /// The edit would have produced a tag-like query; the current query stays.
    Rejected(String),
    /// The key is an edit key but changes nothing (e.g. backspace on an empty query).
    Unchanged,
}

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<(.|\n)*?>").expect("tag pattern compiles"))
}

/// Whether `query` may be forwarded to the menu. Anything that looks like an HTML tag is refused.
pub(crate) fn validate_search(query: &str) -> bool {
    !tag_pattern().is_match(query)
}

/// Applies a search-line key to `current`. Returns `None` for keys that are not text edits.
pub(crate) fn apply_search_key(current: &str, key: KeyEvent) -> Option<QueryEdit> {
    let candidate = match key.code {
        KeyCode::Backspace => {
            let mut query = current.to_owned();
            if query.pop().is_none() {
                return Some(QueryEdit::Unchanged);
            }
            query
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if current.is_empty() {
                return Some(QueryEdit::Unchanged);
            }
            String::new()
        }
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut query = current.to_owned();
            query.push(ch);
            query
        }
        _ => return None,
    };

    if validate_search(&candidate) {
        Some(QueryEdit::Accepted(candidate))
    } else {
        Some(QueryEdit::Rejected(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_search_key, validate_search, QueryEdit};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn plain_text_is_valid() {
        assert!(validate_search(""));
        assert!(validate_search("epi"));
        assert!(validate_search("a < b"));
        assert!(validate_search("x>y"));
    }

    #[test]
    fn tag_like_text_is_rejected() {
        assert!(!validate_search("<b>"));
        assert!(!validate_search("see <script src=x>"));
        assert!(!validate_search("<\n>"));
        assert!(!validate_search("<>"));
    }

    #[test]
    fn typing_appends_and_backspace_removes() {
        assert_eq!(
            apply_search_key("ep", key(KeyCode::Char('i'))),
            Some(QueryEdit::Accepted("epi".to_owned()))
        );
        assert_eq!(
            apply_search_key("epi", key(KeyCode::Backspace)),
            Some(QueryEdit::Accepted("ep".to_owned()))
        );
        assert_eq!(apply_search_key("", key(KeyCode::Backspace)), Some(QueryEdit::Unchanged));
    }

    #[test]
    fn closing_a_tag_is_rejected() {
        assert_eq!(
            apply_search_key("<b", key(KeyCode::Char('>'))),
            Some(QueryEdit::Rejected("<b>".to_owned()))
        );
    }

    #[test]
    fn ctrl_u_clears_and_other_chords_are_ignored() {
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(apply_search_key("epi", ctrl_u), Some(QueryEdit::Accepted(String::new())));
        assert_eq!(apply_search_key("", ctrl_u), Some(QueryEdit::Unchanged));

        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(apply_search_key("epi", ctrl_x), None);
        assert_eq!(apply_search_key("epi", key(KeyCode::Down)), None);
    }

    #[test]
    fn shifted_characters_are_typed() {
        let shift_e = KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT);
        assert_eq!(apply_search_key("", shift_e), Some(QueryEdit::Accepted("E".to_owned())));
    }
}
