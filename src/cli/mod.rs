// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the diskfind command-line interface.
//!
//! Five subcommands: `search` to query an exported corpus, `info` to look up
//! one entry by path, `stats` to summarize a corpus, `explain` to show how a
//! single name scored, and `shell` for an interactive loop that can reload the
//! corpus without restarting.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "diskfind",
    about = "Fuzzy file-name search over an exported disk index",
    version
)]
pub struct Cli {
    /// Search settings file (JSON). Defaults to $DISKFIND_CONFIG if set.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and print ranked results
    Search {
        /// Corpus JSON file, or a directory with manifest.json
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Keep only results scoring strictly above this (0-100)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Narrow the corpus by substring match before fuzzy scoring
        ///
        /// Faster on large corpora but drops names that only match through
        /// typo tolerance, and names whose word stem is shorter than the
        /// query's inflected form.
        #[arg(long)]
        prefilter: bool,

        /// Use the API preset (threshold 10) instead of the web preset (5)
        #[arg(long, conflicts_with = "threshold")]
        api: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one entry by its full disk path
    Info {
        /// Corpus JSON file, or a directory with manifest.json
        corpus: PathBuf,

        /// Full path, e.g. "disk:/Каталоги/alta.pdf"
        path: String,

        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a corpus: entry count, total size, counts per file kind
    Stats {
        /// Corpus JSON file, or a directory with manifest.json
        corpus: PathBuf,
    },

    /// Show how one file name scores against a query
    Explain {
        /// Search query
        query: String,

        /// File name to score
        name: String,
    },

    /// Read queries from stdin; `:reload` re-reads the corpus, `:quit` exits
    Shell {
        /// Corpus JSON file, or a directory with manifest.json
        corpus: PathBuf,

        /// Maximum number of results per query
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
