// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inflection variants for Russian nouns and adjectives.
//!
//! Not a stemmer. A handful of suffix swaps that cover how people actually
//! type file searches: plural vs. singular ("двери" / "дверь"), adjective
//! gender ("дверной" / "дверная"), a couple of case endings. Two words match
//! as variants when any of their forms coincide.
//!
//! The table is fixed. Adding a rule changes which files rank where, so the
//! rules below are pinned by tests.

/// Words this short (in chars) are their own only variant.
const MIN_INFLECTED_CHARS: usize = 3;

/// Words must be longer than this (in chars) to get a base form.
const MIN_BASE_SOURCE_CHARS: usize = 4;

/// A base form must be longer than this (in chars) to be kept.
const MIN_BASE_CHARS: usize = 3;

/// Suffix swaps: (ending, replacements). Each replacement is appended to the
/// word with `ending` removed.
const SUFFIX_RULES: &[(&str, &[&str])] = &[
    ("ь", &[""]),         // дверь → двер
    ("и", &["а", "ь"]),   // двери → двера, дверь
    ("ой", &["ая"]),      // дверной → дверная
    ("ая", &["ой"]),      // дверная → дверной
    ("ый", &["ая"]),      // входный → входная
    ("ом", &[""]),        // шкафом → шкаф
    ("ам", &[""]),        // дверям → двер
];

/// Two-char endings stripped to form the base.
const BASE_ENDINGS_2: &[&str] = &["ой", "ая", "ое", "ые", "ий", "ый"];

/// One-char endings stripped to form the base (checked after the two-char ones).
const BASE_ENDINGS_1: &[char] = &['ь', 'и', 'ы', 'а', 'я', 'о', 'е', 'у', 'ю'];

/// All heuristic forms of a word, the word itself first.
///
/// ```ignore
/// assert!(variants("двери").contains(&"дверь".to_string()));
/// assert_eq!(variants("дом"), vec!["дом"]);
/// ```
pub fn variants(word: &str) -> Vec<String> {
    let mut forms = vec![word.to_string()];
    let len = word.chars().count();
    if len <= MIN_INFLECTED_CHARS {
        return forms;
    }

    for (ending, replacements) in SUFFIX_RULES {
        if let Some(stem) = word.strip_suffix(ending) {
            for replacement in *replacements {
                push_unique(&mut forms, format!("{}{}", stem, replacement));
            }
        }
    }

    if len > MIN_BASE_SOURCE_CHARS {
        if let Some(base) = base_form(word) {
            if base.chars().count() > MIN_BASE_CHARS {
                push_unique(&mut forms, base.to_string());
            }
        }
    }

    forms
}

/// Strip one recognised ending, preferring two-char adjective endings.
fn base_form(word: &str) -> Option<&str> {
    BASE_ENDINGS_2
        .iter()
        .find_map(|ending| word.strip_suffix(ending))
        .or_else(|| word.strip_suffix(BASE_ENDINGS_1))
}

fn push_unique(forms: &mut Vec<String>, form: String) {
    if !forms.contains(&form) {
        forms.push(form);
    }
}
