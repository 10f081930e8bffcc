//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::corpus::Corpus;
use crate::types::SearchableEntry;

/// Entry under `disk:/` named `name`, everything else defaulted.
pub fn make_entry(name: &str) -> SearchableEntry {
    SearchableEntry::new(name, format!("disk:/{}", name))
}

/// Entry with a size and media type, for stats and display tests.
pub fn make_entry_sized(name: &str, size: u64, media_type: &str) -> SearchableEntry {
    SearchableEntry {
        size,
        media_type: media_type.to_string(),
        modified: "2024-03-01T10:00:00+00:00".to_string(),
        ..make_entry(name)
    }
}

/// One entry per name, in order.
pub fn make_entries(names: &[&str]) -> Vec<SearchableEntry> {
    names.iter().map(|name| make_entry(name)).collect()
}

pub fn make_corpus(names: &[&str]) -> Corpus {
    Corpus::new(make_entries(names))
}

/// Synthetic catalogue names for benches and property tests.
///
/// Deterministic: entry `i` is always the same name.
pub fn catalogue_names(count: usize) -> Vec<String> {
    const PRODUCTS: [&str; 8] = [
        "Дверь",
        "Распашная_дверь",
        "Каталог",
        "Инструкция_по_установке",
        "Стол",
        "Фасад",
        "Прайс-лист",
        "Смета",
    ];
    const BRANDS: [&str; 5] = ["ALTA", "Nord", "Verda", "Классик", "Модерн"];
    const EXTENSIONS: [&str; 4] = ["pdf", "docx", "xlsx", "jpg"];

    (0..count)
        .map(|i| {
            format!(
                "{}_{}_{}.{}",
                PRODUCTS[i % PRODUCTS.len()],
                BRANDS[(i / PRODUCTS.len()) % BRANDS.len()],
                2000 + (i % 25),
                EXTENSIONS[i % EXTENSIONS.len()]
            )
        })
        .collect()
}

/// Entries for [`catalogue_names`].
pub fn catalogue(count: usize) -> Vec<SearchableEntry> {
    catalogue_names(count)
        .iter()
        .map(|name| make_entry(name))
        .collect()
}
