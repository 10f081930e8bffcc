// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, in `[0, 100]`, and deterministic. `explain` must
//! agree with `score`, and ranking must respect threshold and limit.

#![no_main]

use arbitrary::Arbitrary;
use diskfind::{explain, rank, score, SearchableEntry};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    names: Vec<String>,
    threshold: u8,
    limit: u8,
}

fuzz_target!(|input: Input| {
    // Cap sizes; the sequence ratio is quadratic in word length.
    let query: String = input.query.chars().take(200).collect();
    let names: Vec<String> = input
        .names
        .iter()
        .take(32)
        .map(|n| n.chars().take(200).collect())
        .collect();

    for name in &names {
        let first = score(&query, name);
        let second = score(&query, name);

        // INVARIANT 1: finite and in range
        assert!(first.is_finite(), "non-finite score for {:?} / {:?}", query, name);
        assert!((0.0..=100.0).contains(&first), "score {} out of range", first);

        // INVARIANT 2: deterministic
        assert_eq!(first, second);

        // INVARIANT 3: explain agrees
        assert_eq!(explain(&query, name).score, first);
    }

    // INVARIANT 4: ranking respects threshold and limit, sorted descending
    let entries: Vec<SearchableEntry> = names
        .iter()
        .enumerate()
        .map(|(i, n)| SearchableEntry::new(n.clone(), format!("disk:/{}", i)))
        .collect();
    let threshold = f64::from(input.threshold % 101);
    let limit = usize::from(input.limit);
    let results = rank(&query, &entries, threshold, limit);

    assert!(results.len() <= limit);
    assert!(results.iter().all(|r| r.relevance > threshold));
    assert!(results.windows(2).all(|p| p[0].relevance >= p[1].relevance));
});
