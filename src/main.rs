use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use diskfind::corpus::load_corpus_with_progress;
use diskfind::{
    display_folder, explain, format_size, search, Corpus, SearchConfig, SearchOptions,
    SearchableEntry, ScoredEntry, SharedCorpus,
};

mod cli;
use cli::display::{self, FolderView};
use cli::{Cli, Commands};

/// Log filter variable; `RUST_LOG` is read when it is unset.
const LOG_ENV: &str = "DISKFIND_LOG";

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays machine-readable.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = SearchConfig::resolve(cli.config.as_deref()).context("loading search config")?;

    match cli.command {
        Commands::Search {
            corpus,
            query,
            threshold,
            limit,
            prefilter,
            api,
            json,
        } => {
            let overrides = Overrides {
                threshold: if api { Some(SearchOptions::api().threshold) } else { threshold },
                limit,
                prefilter,
            };
            let options = overrides.apply(&config).context("invalid search flags")?;
            run_search(&corpus, &query, &options, &config, json)
        }
        Commands::Info { corpus, path, json } => run_info(&corpus, &path, &config, json),
        Commands::Stats { corpus } => {
            let corpus = open_corpus(&corpus, true)?;
            display::print_stats(&corpus.stats(), corpus.root_folder());
            Ok(())
        }
        Commands::Explain { query, name } => {
            display::print_breakdown(&query, &name, &explain(&query, &name));
            Ok(())
        }
        Commands::Shell { corpus, limit } => {
            let overrides = Overrides {
                limit,
                ..Overrides::default()
            };
            let options = overrides.apply(&config).context("invalid shell flags")?;
            run_shell(&corpus, &options, &config)
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
struct Overrides {
    threshold: Option<f64>,
    limit: Option<usize>,
    prefilter: bool,
}

impl Overrides {
    /// Merge onto `config` and check the result with the config file's rules.
    fn apply(&self, config: &SearchConfig) -> diskfind::Result<SearchOptions> {
        let mut merged = config.clone();
        if let Some(threshold) = self.threshold {
            merged.threshold = threshold;
        }
        if let Some(limit) = self.limit {
            merged.limit = limit;
        }
        merged.prefilter |= self.prefilter;
        merged.validate()?;
        Ok(merged.search_options())
    }
}

fn open_corpus(path: &Path, show_progress: bool) -> Result<Corpus> {
    let show_progress = show_progress && atty::is(atty::Stream::Stderr);
    load_corpus_with_progress(path, show_progress)
        .with_context(|| format!("loading corpus {}", path.display()))
}

/// Config's root folder wins over the one recorded in the manifest.
fn root_folder<'a>(config: &'a SearchConfig, corpus: &'a Corpus) -> &'a str {
    config
        .root_folder
        .as_deref()
        .or_else(|| corpus.root_folder())
        .unwrap_or("")
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    results_count: usize,
    results: Vec<ResultJson<'a>>,
}

#[derive(Serialize)]
struct ResultJson<'a> {
    name: &'a str,
    /// Containing folder for display, not the full path.
    path: String,
    full_path: &'a str,
    size: u64,
    size_formatted: String,
    modified: &'a str,
    download_link: Option<&'a str>,
    public_link: Option<&'a str>,
    media_type: &'a str,
    file_type: &'static str,
    relevance: f64,
}

impl<'a> ResultJson<'a> {
    fn new(result: &ScoredEntry<'a>, folders: &FolderView<'_>) -> Self {
        let entry = result.entry;
        Self {
            name: &entry.name,
            path: display_folder(&entry.path, folders.root_folder, folders.root_label),
            full_path: &entry.path,
            size: entry.size,
            size_formatted: format_size(entry.size),
            modified: &entry.modified,
            download_link: entry.download_link.as_deref(),
            public_link: entry.public_link.as_deref(),
            media_type: &entry.media_type,
            file_type: entry.kind().as_str(),
            relevance: result.relevance,
        }
    }
}

fn run_search(
    corpus_path: &Path,
    query: &str,
    options: &SearchOptions,
    config: &SearchConfig,
    json: bool,
) -> Result<()> {
    let corpus = open_corpus(corpus_path, !json)?;
    let folders = FolderView {
        root_folder: root_folder(config, &corpus),
        root_label: &config.root_label,
    };

    let results = search(query.trim(), &corpus, options);

    if json {
        let response = SearchResponse {
            query: query.trim(),
            results_count: results.len(),
            results: results.iter().map(|r| ResultJson::new(r, &folders)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display::print_results(query.trim(), &results, &folders);
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// INFO
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct InfoResponse<'a> {
    file: FileJson<'a>,
}

#[derive(Serialize)]
struct FileJson<'a> {
    #[serde(flatten)]
    entry: &'a SearchableEntry,
    size_formatted: String,
    file_type: &'static str,
}

fn run_info(corpus_path: &Path, path: &str, config: &SearchConfig, json: bool) -> Result<()> {
    let corpus = open_corpus(corpus_path, !json)?;
    let entry = corpus.get(path)?;

    if json {
        let response = InfoResponse {
            file: FileJson {
                entry,
                size_formatted: format_size(entry.size),
                file_type: entry.kind().as_str(),
            },
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let folders = FolderView {
            root_folder: root_folder(config, &corpus),
            root_label: &config.root_label,
        };
        display::print_entry(entry, &folders);
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SHELL
// ═══════════════════════════════════════════════════════════════════════════

/// What one line of shell input asks for.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand<'a> {
    Query(&'a str),
    Reload,
    Quit,
    Empty,
}

fn parse_shell_line(line: &str) -> ShellCommand<'_> {
    match line.trim() {
        "" => ShellCommand::Empty,
        ":reload" | ":r" => ShellCommand::Reload,
        ":quit" | ":q" | ":exit" => ShellCommand::Quit,
        query => ShellCommand::Query(query),
    }
}

fn run_shell(corpus_path: &Path, options: &SearchOptions, config: &SearchConfig) -> Result<()> {
    let shared = SharedCorpus::new(open_corpus(corpus_path, true)?);
    eprintln!(
        "{} entries loaded. Type a query, :reload or :quit.",
        shared.snapshot().len()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        eprint!("diskfind> ");
        io::stderr().flush()?;

        let line = match lines.next() {
            Some(line) => line.context("reading stdin")?,
            None => break,
        };

        match parse_shell_line(&line) {
            ShellCommand::Empty => continue,
            ShellCommand::Quit => break,
            ShellCommand::Reload => match shared.reload(corpus_path) {
                Ok(corpus) => {
                    info!(entries = corpus.len(), "shell reloaded corpus");
                    eprintln!("{} entries loaded.", corpus.len());
                }
                Err(e) => eprintln!("❌ reload failed, keeping current corpus: {}", e),
            },
            ShellCommand::Query(query) => {
                let corpus = shared.snapshot();
                let folders = FolderView {
                    root_folder: root_folder(config, &corpus),
                    root_label: &config.root_label,
                };
                let results = search(query, &*corpus, options);
                display::print_results(query, &results, &folders);
            }
        }
    }
    Ok(())
}
