// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search settings read from a JSON file.
//!
//! Every field is optional:
//!
//! ```json
//! {
//!   "threshold": 10,
//!   "limit": 50,
//!   "prefilter": false,
//!   "root_folder": "Каталоги",
//!   "root_label": "Корневая папка"
//! }
//! ```
//!
//! The CLI reads `--config FILE`, else the file named by `DISKFIND_CONFIG`,
//! else uses the defaults. Command-line flags override whatever was loaded.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::{SearchOptions, DEFAULT_LIMIT, DEFAULT_THRESHOLD};

/// Environment variable naming the default config file.
pub const CONFIG_ENV: &str = "DISKFIND_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub threshold: f64,
    pub limit: usize,
    pub prefilter: bool,
    /// Folder stripped from paths for display. Falls back to the corpus
    /// manifest's `root_folder` when unset.
    pub root_folder: Option<String>,
    /// Shown instead of an empty folder for files at the root.
    pub root_label: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
            prefilter: false,
            root_folder: None,
            root_label: "Root folder".to_string(),
        }
    }
}

impl SearchConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: SearchConfig = serde_json::from_str(&content).map_err(|e| Error::json(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// `explicit` if given, else `$DISKFIND_CONFIG` if set, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(env_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=100.0).contains(&self.threshold) {
            return Err(Error::Config(format!(
                "threshold must be between 0 and 100, got {}",
                self.threshold
            )));
        }
        if self.limit == 0 {
            return Err(Error::Config("limit must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::default()
            .with_threshold(self.threshold)
            .with_limit(self.limit)
            .with_prefilter(self.prefilter)
    }
}

fn env_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
