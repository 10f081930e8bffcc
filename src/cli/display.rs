// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the diskfind CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `DISKFIND_THEME` first, then `COLORFGBG`, then macOS system appearance,
//! then falls back to dark. Respects `NO_COLOR` and prints plain text when
//! stdout is not a terminal, so piping results into `grep` stays clean.
//!
//! # Theme detection order
//!
//! 1. `DISKFIND_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use diskfind::{
    display_folder, format_size, CorpusStats, FileKind, MatchPath, ScoreBreakdown, ScoredEntry,
    SearchableEntry,
};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Labels shown in the key column of `info` and `stats`.
const KEY_WIDTH: usize = 14;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DISKFIND_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": colors 0-6 and 8 are dark backgrounds
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off.
fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Visible length in chars, excluding ANSI codes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max_chars`, ending with `…` if anything was dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

fn key_value_row(key: &str, value: &str) {
    let key = pad_right(&themed(GRAY, &[], key), KEY_WIDTH);
    row(&format!(" {}{}", key, value));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded relevance (bright green = containment hit, gray = weak)
pub fn score_value(score: f64) -> String {
    if !use_colors() {
        return format!("{:>5.1}", score);
    }
    let color = if score >= 100.0 {
        BRIGHT_GREEN()
    } else if score >= 50.0 {
        GREEN()
    } else if score >= 20.0 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{:>5.1}{}", color, score, RESET)
}

/// Color-coded word similarity in `[0, 1]`
pub fn similarity_value(similarity: f64) -> String {
    if !use_colors() {
        return format!("{:.3}", similarity);
    }
    let color = if similarity >= 0.9 {
        GREEN()
    } else if similarity > 0.6 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{:.3}{}", color, similarity, RESET)
}

/// Fixed-width badge for a file kind
pub fn kind_badge(kind: FileKind) -> String {
    let label = format!("{:<7}", kind.as_str());
    if !use_colors() {
        return label;
    }
    let color = match kind {
        FileKind::Pdf => RED(),
        FileKind::Word => BLUE(),
        FileKind::Excel => GREEN(),
        FileKind::Image | FileKind::Video | FileKind::Audio => MAGENTA(),
        FileKind::Archive => YELLOW(),
        FileKind::Text | FileKind::File => GRAY(),
    };
    format!("{}{}{}", color, label, RESET)
}

fn match_path_label(path: MatchPath) -> &'static str {
    match path {
        MatchPath::Empty => "empty query or name",
        MatchPath::Containment => "whole query contained in name",
        MatchPath::NoTokens => "no query tokens after filtering",
        MatchPath::Tokens => "token by token",
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Where paths are shown relative to, and what to call the root itself.
pub struct FolderView<'a> {
    pub root_folder: &'a str,
    pub root_label: &'a str,
}

/// Ranked results as a boxed table: score, kind, name, folder.
pub fn print_results(query: &str, results: &[ScoredEntry<'_>], folders: &FolderView<'_>) {
    section_top(&format!("RESULTS for \"{}\"", truncate_chars(query, 40)));
    if results.is_empty() {
        row(&format!(" {}", themed(GRAY, &[DIM], "no matches")));
    }
    for result in results {
        let entry = result.entry;
        let name = truncate_chars(&entry.name, 42);
        let folder = display_folder(&entry.path, folders.root_folder, folders.root_label);
        row(&format!(
            " {}  {} {}  {}",
            score_value(result.relevance),
            kind_badge(entry.kind()),
            pad_right(&name, 42),
            themed(GRAY, &[], &truncate_chars(&folder, 18))
        ));
    }
    section_bot();
    println!(
        "{}",
        themed(GRAY, &[DIM], &format!("{} result(s)", results.len()))
    );
}

/// One entry's metadata.
pub fn print_entry(entry: &SearchableEntry, folders: &FolderView<'_>) {
    section_top(&truncate_chars(&entry.name, 60));
    key_value_row("path", &entry.path);
    key_value_row(
        "folder",
        &display_folder(&entry.path, folders.root_folder, folders.root_label),
    );
    key_value_row("kind", &kind_badge(entry.kind()));
    key_value_row("size", &format_size(entry.size));
    key_value_row("modified", entry.modified_date());
    key_value_row("media type", &entry.media_type);
    if let Some(link) = &entry.public_link {
        key_value_row("public link", &truncate_chars(link, BOX_WIDTH - KEY_WIDTH - 2));
    }
    if let Some(link) = &entry.download_link {
        key_value_row("download", &truncate_chars(link, BOX_WIDTH - KEY_WIDTH - 2));
    }
    section_bot();
}

/// Corpus summary.
pub fn print_stats(stats: &CorpusStats, root_folder: Option<&str>) {
    section_top("CORPUS");
    key_value_row("entries", &stats.entries.to_string());
    key_value_row("total size", &format_size(stats.total_size));
    if let Some(root) = root_folder {
        key_value_row("root folder", root);
    }
    for kind in FileKind::ALL {
        if let Some(count) = stats.by_kind.get(&kind) {
            key_value_row("", &format!("{} {}", kind_badge(kind), count));
        }
    }
    section_bot();
}

/// Per-token score breakdown.
pub fn print_breakdown(query: &str, name: &str, breakdown: &ScoreBreakdown) {
    section_top("EXPLAIN");
    key_value_row("query", query);
    key_value_row("name", name);
    key_value_row("score", score_value(breakdown.score).trim_start());
    key_value_row("path", match_path_label(breakdown.path));
    if !breakdown.tokens.is_empty() {
        key_value_row(
            "matched",
            &format!("{}/{}", breakdown.matched(), breakdown.tokens.len()),
        );
        for token in &breakdown.tokens {
            let partner = token.best_entry_token.as_deref().unwrap_or("-");
            row(&format!(
                "   {} → {}  sim {}  weight {:.1}",
                pad_right(&themed(BRIGHT_CYAN, &[], &token.query_token), 16),
                pad_right(partner, 16),
                similarity_value(token.similarity),
                token.weight
            ));
        }
    }
    section_bot();
}
