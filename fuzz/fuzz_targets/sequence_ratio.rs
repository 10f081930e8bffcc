// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the matching-block sequence ratio.
//!
//! The ratio is `2 * M / (|a| + |b|)`, so it must stay in `[0, 1]` and `M`
//! can never exceed the shorter side. Identical input scores 1 below the
//! popular-character cutoff; above it a block may seed off the diagonal.

#![no_main]

use diskfind::fuzzy::{matching_chars, sequence_ratio};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (a, b) = data;
    let a: String = a.chars().take(400).collect();
    let b: String = b.chars().take(400).collect();

    let ratio = sequence_ratio(&a, &b);
    assert!(ratio.is_finite());
    assert!((0.0..=1.0).contains(&ratio), "ratio {} out of range", ratio);

    let a_chars: Vec<char> = a.chars().collect();
    if a_chars.len() < 200 {
        assert_eq!(sequence_ratio(&a, &a), 1.0);
    }

    let b_chars: Vec<char> = b.chars().collect();
    let matched = matching_chars(&a_chars, &b_chars);
    assert!(matched <= a_chars.len().min(b_chars.len()));
});
