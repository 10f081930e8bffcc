// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cheap candidate pass before fuzzy scoring.
//!
//! A plain substring test: keep an entry if its normalized name contains the
//! whole normalized query, or any inflection variant (3+ chars) of any query
//! token. Everything else is dropped before the expensive scorer runs.
//!
//! This is lossy. Two kinds of match never reach the scorer:
//!
//! - names that only match through the sequence ratio (typos, transposed
//!   letters);
//! - names whose word form is shorter than the query's, so a name variant
//!   sits inside a query variant but no query form is a substring of the name
//!   ("дверями" against "дверь.pdf": "двер" is inside "дверям", not the other
//!   way round).
//!
//! Recovering the second kind would mean matching on almost any 3-char
//! fragment. Use it on corpora large enough that full fuzzy scoring is too
//! slow.

use crate::fuzzy::variants;
use crate::tokenize::tokenize_query;
use crate::types::SearchableEntry;
use crate::util::normalize::normalize;

/// Needles shorter than this (in chars) would match almost anything.
const MIN_NEEDLE_CHARS: usize = 3;

/// Substrings an entry name must contain one of to be a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needles {
    phrase: String,
    fragments: Vec<String>,
}

impl Needles {
    /// Derive needles from a raw query.
    pub fn from_query(query: &str) -> Self {
        let phrase = normalize(query);
        let mut fragments: Vec<String> = Vec::new();

        for token in tokenize_query(&phrase) {
            for form in variants(&token) {
                if form.chars().count() >= MIN_NEEDLE_CHARS && !fragments.contains(&form) {
                    fragments.push(form);
                }
            }
        }

        Self { phrase, fragments }
    }

    /// True when the query normalized to nothing; no entry can be a candidate.
    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }

    /// Does this (raw) entry name contain any needle?
    pub fn matches(&self, entry_name: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let name = normalize(entry_name);
        name.contains(&self.phrase) || self.fragments.iter().any(|f| name.contains(f.as_str()))
    }
}

/// Entries that survive the substring pass, in input order.
pub fn candidates<'a>(query: &str, entries: &'a [SearchableEntry]) -> Vec<&'a SearchableEntry> {
    let needles = Needles::from_query(query);
    entries
        .iter()
        .filter(|entry| needles.matches(&entry.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needles_include_variants() {
        let needles = Needles::from_query("Двери");
        assert!(needles.matches("Дверь_входная.pdf"));
        assert!(needles.matches("ДВЕРИ.pdf"));
        assert!(!needles.matches("Стол.pdf"));
    }

    #[test]
    fn test_phrase_needle_survives_stop_words() {
        let needles = Needles::from_query("для");
        assert!(needles.matches("Инструкция для монтажа"));
        assert!(!needles.matches("Инструкция монтажа"));
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let needles = Needles::from_query("  ");
        assert!(needles.is_empty());
        assert!(!needles.matches("anything"));
    }

    #[test]
    fn test_candidates_keep_order() {
        let entries = vec![
            SearchableEntry::new("дверь b.pdf", "disk:/b"),
            SearchableEntry::new("окно.pdf", "disk:/o"),
            SearchableEntry::new("двери a.pdf", "disk:/a"),
        ];
        let found: Vec<&str> = candidates("двери", &entries)
            .iter()
            .map(|e| e.path.as_str())
            .collect();
        assert_eq!(found, vec!["disk:/b", "disk:/a"]);
    }

    #[test]
    fn test_typos_are_dropped() {
        // The fuzzy scorer would match this through the sequence ratio; the
        // prefilter does not.
        let entries = vec![SearchableEntry::new("инструкуия.pdf", "disk:/i")];
        assert!(candidates("инструкция", &entries).is_empty());
    }
}
