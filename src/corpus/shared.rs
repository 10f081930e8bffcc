// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hot-swappable corpus handle.
//!
//! Readers clone an `Arc` under a short read lock and search their snapshot
//! with no lock held. A reindex builds the new corpus first, then swaps the
//! `Arc` under a write lock. Searches in flight keep the old snapshot until
//! they drop it.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use super::{load_corpus, Corpus};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct SharedCorpus {
    current: RwLock<Arc<Corpus>>,
}

impl SharedCorpus {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            current: RwLock::new(Arc::new(corpus)),
        }
    }

    /// The corpus as of now.
    pub fn snapshot(&self) -> Arc<Corpus> {
        Arc::clone(&self.current.read())
    }

    /// Swap in `corpus`, returning the one it replaced.
    pub fn replace(&self, corpus: Corpus) -> Arc<Corpus> {
        let next = Arc::new(corpus);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        info!(
            previous = previous.len(),
            current = self.snapshot().len(),
            "corpus replaced"
        );
        previous
    }

    /// Load `path` and swap it in. On error the current corpus stays.
    pub fn reload(&self, path: &Path) -> Result<Arc<Corpus>> {
        let corpus = load_corpus(path)?;
        self.replace(corpus);
        Ok(self.snapshot())
    }
}

impl From<Corpus> for SharedCorpus {
    fn from(corpus: Corpus) -> Self {
        Self::new(corpus)
    }
}
