// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-to-word similarity: the ladder every token comparison climbs.
//!
//! Four rungs, checked in order, first hit wins:
//!
//! | Rung                               | Similarity |
//! |------------------------------------|------------|
//! | identical                          | 1.0        |
//! | shared inflection variant          | 0.95       |
//! | one variant contains another (≥3)  | 0.8        |
//! | sequence ratio, if above 0.7       | ratio      |
//!
//! Anything below the last cutoff is 0. The values feed the weight tiers in
//! `scoring::core`, so they are part of the ranking contract.

use super::sequence::sequence_ratio;
use super::variants::variants;

/// Two words share an inflection variant ("двери" / "дверь").
pub const VARIANT_MATCH: f64 = 0.95;

/// One word's variant contains the other's ("дверь" in "дверь.pdf").
pub const CONTAINMENT_MATCH: f64 = 0.8;

/// Variants shorter than this (in chars) never count as contained.
pub const MIN_CONTAINED_CHARS: usize = 3;

/// Sequence ratios at or below this are discarded.
pub const RATIO_CUTOFF: f64 = 0.7;

/// Similarity of two normalized words in `[0, 1]`.
///
/// Empty words are never similar to anything, including each other.
pub fn similarity(word1: &str, word2: &str) -> f64 {
    if word1.is_empty() || word2.is_empty() {
        return 0.0;
    }
    if word1 == word2 {
        return 1.0;
    }

    let forms1 = variants(word1);
    let forms2 = variants(word2);

    if forms1.iter().any(|v1| forms2.contains(v1)) {
        return VARIANT_MATCH;
    }

    let contained = forms1.iter().any(|v1| {
        forms2.iter().any(|v2| {
            (v2.contains(v1.as_str()) || v1.contains(v2.as_str()))
                && v1.chars().count() >= MIN_CONTAINED_CHARS
                && v2.chars().count() >= MIN_CONTAINED_CHARS
        })
    });
    if contained {
        return CONTAINMENT_MATCH;
    }

    let ratio = sequence_ratio(word1, word2);
    if ratio > RATIO_CUTOFF {
        ratio
    } else {
        0.0
    }
}
