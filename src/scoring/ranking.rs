// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score everything, keep what clears the bar, sort.
//!
//! Scoring is independent per entry, so with the `parallel` feature the
//! corpus is scored on the rayon pool. The parallel map preserves input order,
//! and the sort is stable, so equal scores come out in corpus order either way.
//! A parallel run and a sequential run return the same list.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::core::score;
use crate::types::{ScoredEntry, SearchableEntry};

/// Below this many entries the parallel path is not worth the fork/join.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_ENTRIES: usize = 256;

/// Compare two results for ranking: higher relevance first.
///
/// Only relevance is compared. Ties are left `Equal` so that a stable sort
/// keeps corpus order.
pub fn compare_results(a: &ScoredEntry<'_>, b: &ScoredEntry<'_>) -> Ordering {
    b.relevance
        .partial_cmp(&a.relevance)
        .unwrap_or(Ordering::Equal)
}

/// Relevance of every entry's name, in input order.
pub fn score_all(query: &str, entries: &[SearchableEntry]) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    if entries.len() >= PARALLEL_MIN_ENTRIES {
        return entries
            .par_iter()
            .map(|entry| score(query, &entry.name))
            .collect();
    }

    entries.iter().map(|entry| score(query, &entry.name)).collect()
}

/// Rank `entries` for `query`.
///
/// Keeps entries scoring strictly above `threshold`, sorts by relevance
/// (stable, descending) and truncates to `limit`. Inputs are not touched.
pub fn rank<'a>(
    query: &str,
    entries: &'a [SearchableEntry],
    threshold: f64,
    limit: usize,
) -> Vec<ScoredEntry<'a>> {
    let scores = score_all(query, entries);
    let mut results: Vec<ScoredEntry<'a>> = entries
        .iter()
        .zip(scores)
        .filter(|(_, relevance)| *relevance > threshold)
        .map(|(entry, relevance)| ScoredEntry { entry, relevance })
        .collect();

    results.sort_by(compare_results);
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<SearchableEntry> {
        names
            .iter()
            .map(|name| SearchableEntry::new(*name, format!("disk:/{}", name)))
            .collect()
    }

    #[test]
    fn test_compare_results_higher_first() {
        let corpus = entries(&["a", "b"]);
        let high = ScoredEntry {
            entry: &corpus[0],
            relevance: 90.0,
        };
        let low = ScoredEntry {
            entry: &corpus[1],
            relevance: 40.0,
        };
        assert_eq!(compare_results(&high, &low), Ordering::Less);
        assert_eq!(compare_results(&low, &high), Ordering::Greater);
        assert_eq!(compare_results(&high, &high), Ordering::Equal);
    }

    #[test]
    fn test_rank_door_scenario() {
        let corpus = entries(&["двери1.pdf", "дверь.pdf", "стол.pdf"]);
        let results = rank("двери", &corpus, 5.0, 100);

        let names: Vec<&str> = results.iter().map(|r| r.entry.name.as_str()).collect();
        assert_eq!(names, vec!["двери1.pdf", "дверь.pdf"]);
        assert_eq!(results[0].relevance, 100.0);
    }

    #[test]
    fn test_rank_threshold_is_exclusive() {
        let corpus = entries(&["двери стеклянные.pdf"]);
        // "двери" + unmatched "алюминиевые" → 40 exactly
        let query = "двери алюминиевые";
        assert!((score(query, &corpus[0].name) - 40.0).abs() < 1e-9);
        assert!(rank(query, &corpus, 40.0, 100).is_empty());
        assert_eq!(rank(query, &corpus, 39.9, 100).len(), 1);
    }

    #[test]
    fn test_rank_limit() {
        let corpus = entries(&["дверь 1", "дверь 2", "дверь 3", "дверь 4", "дверь 5"]);
        let results = rank("дверь", &corpus, 5.0, 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.name, "дверь 1");
    }

    #[test]
    fn test_rank_stable_on_ties() {
        let corpus = entries(&["отчет b", "отчет a", "отчет c"]);
        let results = rank("отчет", &corpus, 5.0, 100);
        let names: Vec<&str> = results.iter().map(|r| r.entry.name.as_str()).collect();
        assert_eq!(names, vec!["отчет b", "отчет a", "отчет c"]);
    }

    #[test]
    fn test_rank_empty_query() {
        let corpus = entries(&["дверь.pdf"]);
        assert!(rank("", &corpus, 5.0, 100).is_empty());
        assert!(rank("   ", &corpus, 5.0, 100).is_empty());
    }

    #[test]
    fn test_rank_empty_corpus() {
        assert!(rank("дверь", &[], 5.0, 100).is_empty());
    }
}
