// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting normalized text into tokens.
//!
//! Queries and file names are tokenized differently on purpose. A query is
//! something a person typed, so prepositions and pronouns ("инструкция *для*
//! дверей") are noise and get dropped. A file name is literal; only the
//! length filter applies there. Both sides drop tokens of two characters or
//! fewer, counted in chars rather than bytes (Cyrillic is two bytes a letter).

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tokens must be strictly longer than this many chars to survive.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Russian and English function words ignored in queries.
///
/// Prepositions, conjunctions, particles and pronouns. `"не считая"` is a
/// two-word entry and never equals a single token; it stays for parity with
/// the list users have been searching against.
const STOP_WORDS: &[&str] = &[
    // Russian prepositions
    "для", "на", "в", "с", "по", "из", "у", "о", "от", "до", "за", "к", "со", "во", "не", "ни",
    "об", "под", "над", "при", "про", "после", "через", "между", "среди", "вокруг",
    "перед", "возле", "около", "вдоль", "поперек", "сквозь", "благодаря", "вопреки", "согласно",
    "вследствие", "ввиду", "насчет", "вроде", "включая", "исключая", "не считая", "спустя",
    "из-за", "из-под", "по-над", "по-под",
    // English
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    // Conjunctions and particles
    "и", "или", "да", "но", "зато", "однако", "же", "ведь",
    // Question words and pronouns
    "что", "как", "когда", "где", "куда", "откуда", "почему", "зачем", "сколько", "который",
    "какой", "чей", "кто", "это", "то", "все", "всё", "весь", "каждый", "любой", "никакой",
    "некий", "некоторый", "мой", "твой", "его", "её", "наш", "ваш", "их", "свой", "сам", "самый",
    "другой", "иной", "каковой", "столько", "такой", "эдакий", "оный", "сей", "всякий",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Is this token a stop word?
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}

/// Does this token pass the length filter?
pub fn is_long_enough(token: &str) -> bool {
    token.chars().count() > MIN_TOKEN_CHARS
}

/// Tokenize normalized query text: drop stop words and short tokens.
///
/// Expects input already passed through [`normalize`](crate::normalize).
pub fn tokenize_query(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|token| is_long_enough(token) && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Tokenize a normalized file name: drop short tokens only.
///
/// Stop words are kept: "Двери для дома" tokenizes to `["двери", "для",
/// "дома"]`. Queries never produce stop-word tokens, so a kept "для" can only
/// pair with a query word through the similarity fallback, never as a match
/// of its own.
pub fn tokenize_entry(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|token| is_long_enough(token))
        .map(str::to_string)
        .collect()
}
