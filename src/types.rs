// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records search works on.
//!
//! Entries come from the indexing side fully formed. Search reads them, never
//! writes them. A `ScoredEntry` borrows its entry from the corpus, so ranking a
//! hundred thousand files allocates scores, not copies.
//!
//! # Invariants
//!
//! - **SearchableEntry**: identity is `path`; two entries with the same path
//!   are the same file.
//! - **ScoredEntry**: `0.0 <= relevance <= 100.0`.

use serde::{Deserialize, Serialize};

/// One indexed file as exported by the disk indexer.
///
/// Only `name` and `path` are required in JSON. Links are opaque to search and
/// passed through to whoever renders results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableEntry {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub size: u64,
    /// Timestamp as the disk API reports it (ISO 8601, kept as text).
    #[serde(default)]
    pub modified: String,
    #[serde(default = "default_media_type")]
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,
}

fn default_media_type() -> String {
    "file".to_string()
}

impl SearchableEntry {
    /// Entry with just a name and path; everything else defaulted.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size: 0,
            modified: String::new(),
            media_type: default_media_type(),
            public_link: None,
            download_link: None,
        }
    }

    /// What kind of file this is, for icons and grouping.
    pub fn kind(&self) -> FileKind {
        FileKind::classify(&self.name, &self.media_type)
    }

    /// Date part of `modified` (first ten chars: `YYYY-MM-DD`).
    pub fn modified_date(&self) -> &str {
        match self.modified.char_indices().nth(10) {
            Some((idx, _)) => &self.modified[..idx],
            None => &self.modified,
        }
    }
}

/// An entry paired with its relevance for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a SearchableEntry,
    /// Relevance in `[0, 100]`.
    pub relevance: f64,
}

/// Coarse file category.
///
/// Media type wins for images, video and audio; everything else goes by
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Video,
    Audio,
    Pdf,
    Word,
    Excel,
    Archive,
    Text,
    File,
}

impl FileKind {
    /// Every kind, in display order.
    pub const ALL: [FileKind; 9] = [
        FileKind::Image,
        FileKind::Video,
        FileKind::Audio,
        FileKind::Pdf,
        FileKind::Word,
        FileKind::Excel,
        FileKind::Archive,
        FileKind::Text,
        FileKind::File,
    ];

    /// Classify a file by media type, then by extension.
    pub fn classify(name: &str, media_type: &str) -> Self {
        if media_type.starts_with("image") {
            return FileKind::Image;
        }
        if media_type.starts_with("video") {
            return FileKind::Video;
        }
        if media_type.starts_with("audio") {
            return FileKind::Audio;
        }

        let extension = match name.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => return FileKind::File,
        };

        match extension.as_str() {
            "pdf" => FileKind::Pdf,
            "doc" | "docx" => FileKind::Word,
            "xls" | "xlsx" => FileKind::Excel,
            "zip" | "rar" => FileKind::Archive,
            "txt" | "md" => FileKind::Text,
            _ => FileKind::File,
        }
    }

    /// Lowercase name, as used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Video => "video",
            FileKind::Audio => "audio",
            FileKind::Pdf => "pdf",
            FileKind::Word => "word",
            FileKind::Excel => "excel",
            FileKind::Archive => "archive",
            FileKind::Text => "text",
            FileKind::File => "file",
        }
    }
}
