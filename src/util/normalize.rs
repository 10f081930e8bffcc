// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by queries and file names.
//!
//! Both sides of every comparison go through [`normalize`], so a query and a
//! file name only ever meet in the same shape: lowercase, punctuation turned
//! into spaces, whitespace collapsed. Hyphens and dots survive because they
//! carry meaning in file names (`из-за`, `v1.2`, `report.pdf`).

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip punctuation, collapse whitespace.
///
/// - "ALTA_Распашная_дверь.pdf" → "alta распашная дверь.pdf"
/// - "  Отчёт (финал)!! " → "отчёт финал"
/// - "" → ""
///
/// Every character that is not a letter, digit, whitespace, `-` or `.` becomes
/// a space. Underscores count as punctuation, so snake_case file names split
/// into separate words.
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFC compose (decomposed `й` = `и` + U+0306 becomes one char again)
/// 2. Lowercase
/// 3. Replace punctuation with spaces
/// 4. Collapse whitespace and trim
///
/// Without the feature step 1 is skipped; input is assumed to be composed.
pub fn normalize(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    #[cfg(feature = "unicode-normalization")]
    let lowered = value.nfc().collect::<String>().to_lowercase();
    #[cfg(not(feature = "unicode-normalization"))]
    let lowered = value.to_lowercase();

    lowered
        .chars()
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Characters that survive normalization untouched.
fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '.'
}
