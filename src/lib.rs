//! Typo- and inflection-tolerant file-name search.
//!
//! Given a free-text query and a corpus of indexed file entries, this crate
//! scores every entry's name by fuzzy relevance and returns the best matches.
//! It is built for Russian catalogue names ("Распашная_дверь_ALTA.pdf") where
//! users type a different case ending, a typo, or a partial word.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │util/normalize│────▶│  tokenize.rs │────▶│ fuzzy/       │
//! │ (lowercase,  │     │ (stop words, │     │ (variants,   │
//! │  separators) │     │  min length) │     │  similarity) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                                                  ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus/     │────▶│  search/     │◀────│  scoring/    │
//! │ (load, swap) │     │ (options,    │     │ (score, rank)│
//! │              │     │  prefilter)  │     │              │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Scoring and ranking are pure and never fail. Only loading a corpus or a
//! config file returns [`Error`].
//!
//! # Usage
//!
//! ```
//! use diskfind::{search, SearchOptions, SearchableEntry};
//!
//! let entries = vec![
//!     SearchableEntry::new("двери1.pdf", "disk:/двери1.pdf"),
//!     SearchableEntry::new("дверь.pdf", "disk:/дверь.pdf"),
//!     SearchableEntry::new("стол.pdf", "disk:/стол.pdf"),
//! ];
//!
//! let results = search("двери", &entries, &SearchOptions::default());
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].entry.name, "двери1.pdf");
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod tokenize;
mod types;
pub mod util;

// Re-exports for public API
pub use config::SearchConfig;
pub use corpus::{load_corpus, Corpus, CorpusStats, SharedCorpus};
pub use error::{Error, Result};
pub use fuzzy::{sequence_ratio, similarity, variants};
pub use scoring::ranking::rank;
pub use scoring::{aggregate, explain, score, MatchPath, ScoreBreakdown, TokenMatch};
pub use search::{search, EntrySource, SearchOptions};
pub use types::{FileKind, ScoredEntry, SearchableEntry};
pub use util::format::{display_folder, format_size, relative_path};
pub use util::normalize::normalize;
