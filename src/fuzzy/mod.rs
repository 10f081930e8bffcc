// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy word matching: inflections, containment, and near-miss spellings.
//!
//! Three pieces, composed bottom-up: a fixed table of Russian suffix swaps
//! (`variants`), a matching-block sequence ratio for typos (`sequence`), and
//! the similarity ladder that combines them (`similarity`).

mod sequence;
mod similarity;
mod variants;

pub use sequence::{matching_chars, sequence_ratio};
pub use similarity::*;
pub use variants::variants;
