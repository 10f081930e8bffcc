// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search entry point every front end calls.
//!
//! Web view, JSON API, chat bot and CLI all end up here: a query, a corpus,
//! and options. Out comes a ranked list. Nothing in this module does I/O; the
//! corpus is handed in through [`EntrySource`].

pub mod prefilter;

use std::time::Instant;

use tracing::debug;

use crate::scoring::ranking::{compare_results, rank};
use crate::scoring::score;
use crate::types::{ScoredEntry, SearchableEntry};

/// Relevance threshold the web view uses. Low, so more files show up.
pub const DEFAULT_THRESHOLD: f64 = 5.0;

/// Relevance threshold the JSON API uses.
pub const API_THRESHOLD: f64 = 10.0;

/// Result cap for every front end.
pub const DEFAULT_LIMIT: usize = 100;

/// Knobs for one search call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Entries must score strictly above this.
    pub threshold: f64,
    /// Maximum results returned.
    pub limit: usize,
    /// Run the lossy substring pass before fuzzy scoring.
    pub prefilter: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
            prefilter: false,
        }
    }
}

impl SearchOptions {
    /// Preset matching the JSON API: stricter threshold.
    pub fn api() -> Self {
        Self {
            threshold: API_THRESHOLD,
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_prefilter(mut self, prefilter: bool) -> Self {
        self.prefilter = prefilter;
        self
    }
}

/// Anything that can hand search the full current corpus.
pub trait EntrySource {
    fn entries(&self) -> &[SearchableEntry];
}

impl EntrySource for [SearchableEntry] {
    fn entries(&self) -> &[SearchableEntry] {
        self
    }
}

impl EntrySource for Vec<SearchableEntry> {
    fn entries(&self) -> &[SearchableEntry] {
        self
    }
}

/// Search `source` for `query`, best matches first.
///
/// An empty or all-punctuation query returns no results. So does a query made
/// only of stop words, unless it appears verbatim in a file name.
pub fn search<'a, S>(query: &str, source: &'a S, options: &SearchOptions) -> Vec<ScoredEntry<'a>>
where
    S: EntrySource + ?Sized,
{
    let started = Instant::now();
    let entries = source.entries();

    let results = if options.prefilter {
        search_candidates(query, entries, options)
    } else {
        rank(query, entries, options.threshold, options.limit)
    };

    debug!(
        query,
        corpus = entries.len(),
        hits = results.len(),
        top = results.first().map_or(0.0, |r| r.relevance),
        prefilter = options.prefilter,
        elapsed_us = started.elapsed().as_micros() as u64,
        "search finished"
    );

    results
}

/// Prefilter path: substring pass, then fuzzy scoring of the survivors.
fn search_candidates<'a>(
    query: &str,
    entries: &'a [SearchableEntry],
    options: &SearchOptions,
) -> Vec<ScoredEntry<'a>> {
    let candidates = prefilter::candidates(query, entries);
    debug!(query, candidates = candidates.len(), "prefilter narrowed corpus");

    let mut results: Vec<ScoredEntry<'a>> = candidates
        .into_iter()
        .map(|entry| ScoredEntry {
            entry,
            relevance: score(query, &entry.name),
        })
        .filter(|r| r.relevance > options.threshold)
        .collect();

    results.sort_by(compare_results);
    results.truncate(options.limit);
    results
}
