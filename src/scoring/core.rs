// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance: one query against one file name.
//!
//! Whole-phrase containment dominates everything. If the normalized query
//! appears verbatim in the normalized name, the file scores 100 and nothing
//! else is computed. Otherwise each query token hunts for its best partner
//! among the name's tokens, and the per-token weights are averaged.
//!
//! # Weight tiers
//!
//! | Word similarity | Token weight |
//! |-----------------|--------------|
//! | > 0.9           | 1.0 (scan stops) |
//! | (0.8, 0.9]      | 0.8          |
//! | (0.7, 0.8]      | 0.6          |
//! | (0.6, 0.7]      | 0.4          |
//! | ≤ 0.6           | none         |
//!
//! # Aggregation
//!
//! ```text
//! score = min(100, mean(weights) * 80 + (20 if every token matched))
//! ```
//!
//! where the mean divides by the number of query tokens, matched or not.
//! The tiers and weights are a fixed contract: every ranking test and every
//! user's muscle memory depends on them.

use crate::fuzzy::similarity;
use crate::tokenize::{tokenize_entry, tokenize_query};
use crate::util::normalize::normalize;

/// Maximum relevance; also the containment score.
pub const MAX_SCORE: f64 = 100.0;

/// Share of the score carried by the mean token weight.
pub const WEIGHT_SCALE: f64 = 80.0;

/// Bonus when every query token found a partner.
pub const ALL_MATCHED_BONUS: f64 = 20.0;

/// Similarity tiers as (exclusive lower bound, weight), best first.
pub const WEIGHT_TIERS: [(f64, f64); 4] = [(0.9, 1.0), (0.8, 0.8), (0.7, 0.6), (0.6, 0.4)];

/// Weight for a similarity value, or 0 when it falls below every tier.
pub fn tier_weight(similarity: f64) -> f64 {
    WEIGHT_TIERS
        .iter()
        .find(|(bound, _)| similarity > *bound)
        .map_or(0.0, |(_, weight)| *weight)
}

/// How a score was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPath {
    /// Query or name was empty after normalization.
    Empty,
    /// Whole normalized query found inside the normalized name.
    Containment,
    /// Query had no tokens left after stop-word and length filtering.
    NoTokens,
    /// Scored token by token.
    Tokens,
}

/// Best partner found for one query token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMatch {
    pub query_token: String,
    /// Entry token that produced the best weight, if any did.
    pub best_entry_token: Option<String>,
    pub similarity: f64,
    pub weight: f64,
}

/// A score together with the work that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub path: MatchPath,
    pub tokens: Vec<TokenMatch>,
}

impl ScoreBreakdown {
    fn without_tokens(score: f64, path: MatchPath) -> Self {
        Self {
            score,
            path,
            tokens: Vec::new(),
        }
    }

    /// Query tokens that found a partner.
    pub fn matched(&self) -> usize {
        self.tokens.iter().filter(|t| t.weight > 0.0).count()
    }
}

/// Relevance of `entry_name` for `query`, in `[0, 100]`.
///
/// Never fails. Empty query or empty name scores 0.
pub fn score(query: &str, entry_name: &str) -> f64 {
    explain(query, entry_name).score
}

/// Score with per-token detail. Same number as [`score`], always.
pub fn explain(query: &str, entry_name: &str) -> ScoreBreakdown {
    let query_norm = normalize(query);
    let name_norm = normalize(entry_name);

    if query_norm.is_empty() || name_norm.is_empty() {
        return ScoreBreakdown::without_tokens(0.0, MatchPath::Empty);
    }
    if name_norm.contains(&query_norm) {
        return ScoreBreakdown::without_tokens(MAX_SCORE, MatchPath::Containment);
    }

    let query_tokens = tokenize_query(&query_norm);
    if query_tokens.is_empty() {
        return ScoreBreakdown::without_tokens(0.0, MatchPath::NoTokens);
    }
    let entry_tokens = tokenize_entry(&name_norm);

    let tokens: Vec<TokenMatch> = query_tokens
        .into_iter()
        .map(|query_token| best_match(query_token, &entry_tokens))
        .collect();
    let weights: Vec<f64> = tokens.iter().map(|t| t.weight).collect();

    ScoreBreakdown {
        score: aggregate(&weights),
        path: MatchPath::Tokens,
        tokens,
    }
}

/// Scan entry tokens for the best weight tier; stop at the top tier.
fn best_match(query_token: String, entry_tokens: &[String]) -> TokenMatch {
    let mut best = TokenMatch {
        query_token,
        best_entry_token: None,
        similarity: 0.0,
        weight: 0.0,
    };

    for entry_token in entry_tokens {
        let sim = similarity(&best.query_token, entry_token);
        let weight = tier_weight(sim);
        if weight > best.weight {
            best.weight = weight;
            best.similarity = sim;
            best.best_entry_token = Some(entry_token.clone());
        }
        if weight >= WEIGHT_TIERS[0].1 {
            break;
        }
    }

    best
}

/// Combine per-query-token weights into one score.
///
/// One weight per query token, 0 for tokens without a partner. No tokens, or
/// no matched tokens, gives 0.
pub fn aggregate(weights: &[f64]) -> f64 {
    let matched = weights.iter().filter(|w| **w > 0.0).count();
    if matched == 0 {
        return 0.0;
    }

    let total: f64 = weights.iter().sum();
    let mut base = total / weights.len() as f64 * WEIGHT_SCALE;
    if matched == weights.len() {
        base += ALL_MATCHED_BONUS;
    }

    base.min(MAX_SCORE)
}
