// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The in-memory corpus search runs against.
//!
//! The indexer exports every file it saw as JSON, either one array or a
//! directory of shards with a `manifest.json`. [`load_corpus`] reads either
//! form. [`SharedCorpus`] holds the current corpus for long-running front ends
//! and swaps in a new one on reindex.

mod loader;
mod manifest;
mod shared;

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::search::EntrySource;
use crate::types::{FileKind, SearchableEntry};

pub use loader::{load_entries_file, load_manifest, load_shards};
pub use manifest::{CorpusManifest, MANIFEST_FILE, MANIFEST_VERSION};
pub use shared::SharedCorpus;

/// Every indexed entry, in export order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    entries: Vec<SearchableEntry>,
    root_folder: Option<String>,
}

/// Summary numbers for a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusStats {
    pub entries: usize,
    pub total_size: u64,
    /// Count per kind; kinds with no entries are absent.
    pub by_kind: BTreeMap<FileKind, usize>,
}

impl Corpus {
    pub fn new(entries: Vec<SearchableEntry>) -> Self {
        Self {
            entries,
            root_folder: None,
        }
    }

    pub fn with_root_folder(mut self, root_folder: impl Into<String>) -> Self {
        self.root_folder = Some(root_folder.into());
        self
    }

    /// Folder on the disk the export was taken from, if the manifest said.
    pub fn root_folder(&self) -> Option<&str> {
        self.root_folder.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with exactly this path.
    pub fn get(&self, path: &str) -> Result<&SearchableEntry> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .ok_or_else(|| Error::EntryNotFound(path.to_string()))
    }

    pub fn stats(&self) -> CorpusStats {
        let mut by_kind = BTreeMap::new();
        let mut total_size = 0u64;
        for entry in &self.entries {
            total_size = total_size.saturating_add(entry.size);
            *by_kind.entry(entry.kind()).or_insert(0) += 1;
        }
        CorpusStats {
            entries: self.entries.len(),
            total_size,
            by_kind,
        }
    }
}

impl EntrySource for Corpus {
    fn entries(&self) -> &[SearchableEntry] {
        &self.entries
    }
}

impl From<Vec<SearchableEntry>> for Corpus {
    fn from(entries: Vec<SearchableEntry>) -> Self {
        Self::new(entries)
    }
}

/// Load a corpus from a JSON array file or a sharded export directory.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    load_corpus_with_progress(path, false)
}

/// [`load_corpus`], optionally drawing a progress bar while shards load.
pub fn load_corpus_with_progress(path: &Path, show_progress: bool) -> Result<Corpus> {
    let corpus = if path.is_dir() {
        let manifest = load_manifest(path)?;
        let entries = load_shards(path, &manifest, show_progress)?;
        Corpus {
            entries,
            root_folder: manifest.root_folder,
        }
    } else {
        let entries = load_entries_file(path)?;
        if entries.is_empty() {
            warn!(path = %path.display(), "corpus file has no entries");
        }
        Corpus::new(entries)
    };

    info!(
        path = %path.display(),
        entries = corpus.len(),
        "corpus loaded"
    );
    Ok(corpus)
}
