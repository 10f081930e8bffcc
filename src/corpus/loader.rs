// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel loading of exported entry shards.
//!
//! A full disk export runs to hundreds of thousands of entries, split into
//! shards by the indexer. Reading and parsing each shard is independent, so
//! rayon's `par_iter()` handles them concurrently. `collect()` on an indexed
//! parallel iterator keeps manifest order, which keeps corpus order (and so
//! tie order in rankings) the same from load to load.

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::warn;

use super::CorpusManifest;
use crate::error::{Error, Result};
use crate::types::SearchableEntry;

/// Read one JSON array of entries.
pub fn load_entries_file(path: &Path) -> Result<Vec<SearchableEntry>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| Error::json(path, e))
}

/// Read one shard named by the manifest.
fn load_shard(dir: &Path, shard: &str) -> Result<Vec<SearchableEntry>> {
    let entries = load_entries_file(&dir.join(shard))?;
    if entries.is_empty() {
        warn!(shard, "shard has no entries");
    }
    Ok(entries)
}

/// Read the manifest in `dir`.
pub fn load_manifest(dir: &Path) -> Result<CorpusManifest> {
    let path = dir.join(super::MANIFEST_FILE);
    let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let manifest: CorpusManifest =
        serde_json::from_str(&content).map_err(|e| Error::json(&path, e))?;
    if !manifest.is_supported() {
        return Err(Error::UnsupportedManifest(manifest.version));
    }
    Ok(manifest)
}

/// Create the progress style for shard loading.
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Load every shard listed in `manifest`, concatenated in manifest order.
///
/// The first shard that fails to read or parse fails the whole load; a corpus
/// with a silently missing shard would return wrong search results.
#[cfg(feature = "parallel")]
pub fn load_shards(dir: &Path, manifest: &CorpusManifest, show_progress: bool) -> Result<Vec<SearchableEntry>> {
    let progress = if show_progress {
        ProgressBar::new(manifest.shards.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(create_progress_style());
    progress.set_prefix("Loading");
    progress.set_message("shards...");

    let shards = manifest
        .shards
        .par_iter()
        .map(|shard| {
            let entries = load_shard(dir, shard);
            progress.inc(1);
            entries
        })
        .collect::<Result<Vec<Vec<SearchableEntry>>>>()?;

    let entries: Vec<SearchableEntry> = shards.into_iter().flatten().collect();
    progress.finish_with_message(format!("loaded {} entries", entries.len()));
    Ok(entries)
}

/// Load every shard listed in `manifest`, concatenated in manifest order.
/// Sequential fallback (no progress display).
#[cfg(not(feature = "parallel"))]
pub fn load_shards(dir: &Path, manifest: &CorpusManifest, _show_progress: bool) -> Result<Vec<SearchableEntry>> {
    let mut entries = Vec::new();
    for shard in &manifest.shards {
        entries.extend(load_shard(dir, shard)?);
    }
    Ok(entries)
}
