// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how file names get their numbers and their order.
//!
//! `core` turns one (query, name) pair into a relevance in `[0, 100]`.
//! `ranking` applies it to a whole corpus, drops what falls under the
//! threshold, and sorts the rest.

mod core;
pub mod ranking;

pub use self::core::*;
