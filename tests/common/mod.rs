//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use diskfind::SearchableEntry;

// Re-export canonical test utilities from diskfind::testing
pub use diskfind::testing::{catalogue, make_entries, make_entry, make_entry_sized};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small catalogue export shaped like the real one.
pub fn door_catalogue() -> Vec<SearchableEntry> {
    vec![
        make_entry_sized("ALTA_Распашная_дверь_инструкция.pdf", 2_400_000, "document"),
        make_entry_sized("Двери_межкомнатные_2024.pdf", 8_100_000, "document"),
        make_entry_sized("Каталог_2024.pdf", 15_000_000, "document"),
        make_entry_sized("Прайс-лист дверей.xlsx", 48_000, "spreadsheet"),
        make_entry_sized("Фасад дома.jpg", 3_200_000, "image"),
        make_entry_sized("Стол обеденный.pdf", 900_000, "document"),
        make_entry_sized("Инструкция по монтажу.docx", 120_000, "document"),
        make_entry_sized("readme.txt", 512, "text"),
    ]
}

// ============================================================================
// ON-DISK CORPORA
// ============================================================================

/// Write `entries` as one JSON array at `dir/name`.
pub fn write_entries(dir: &Path, name: &str, entries: &[SearchableEntry]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string(entries).unwrap()).unwrap();
    path
}

/// Write a sharded export: one shard per chunk plus `manifest.json`.
pub fn write_sharded(
    dir: &Path,
    chunks: &[&[SearchableEntry]],
    root_folder: Option<&str>,
) -> PathBuf {
    let shards: Vec<String> = chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let name = format!("part-{}.json", i);
            write_entries(dir, &name, chunk);
            name
        })
        .collect();

    let manifest = serde_json::json!({
        "version": 1,
        "shards": shards,
        "root_folder": root_folder,
    });
    fs::write(dir.join("manifest.json"), manifest.to_string()).unwrap();
    dir.to_path_buf()
}

/// Names of results, in rank order.
pub fn names<'a>(results: &[diskfind::ScoredEntry<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.entry.name.as_str()).collect()
}
