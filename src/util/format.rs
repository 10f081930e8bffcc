// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Presentation helpers for search results.
//!
//! Sizes and folder paths the way the web view, the HTTP API and the chat bot
//! all show them. Kept in the library so every front end prints the same thing.

/// Prefix the disk API puts in front of every absolute path.
pub const DISK_PREFIX: &str = "disk:/";

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format bytes as a human-readable size with two decimals.
///
/// `0` → `"0 B"`, `1536` → `"1.50 KB"`. Units stop at TB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, SIZE_UNITS[unit])
}

/// Path of a file relative to the mirrored root folder.
///
/// Strips the `disk:/` prefix, then the root folder and any leading slashes.
/// Paths outside the root come back with only the prefix removed.
pub fn relative_path<'a>(full_path: &'a str, root_folder: &str) -> &'a str {
    let path = full_path.strip_prefix(DISK_PREFIX).unwrap_or(full_path);

    match path.strip_prefix(root_folder) {
        Some(rest) => rest.trim_start_matches('/'),
        None => path,
    }
}

/// Folder a file lives in, for display: `"Проекты / 2024"`.
///
/// Files directly in the root folder get `root_label` instead.
pub fn display_folder(full_path: &str, root_folder: &str, root_label: &str) -> String {
    let relative = relative_path(full_path, root_folder);
    let parts: Vec<&str> = relative.split('/').collect();

    if parts.len() > 1 {
        parts[..parts.len() - 1].join(" / ")
    } else {
        root_label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512.00 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_format_size_caps_at_terabytes() {
        let huge = 2048u64 * 1024 * 1024 * 1024 * 1024;
        assert_eq!(format_size(huge), "2048.00 TB");
    }

    #[test]
    fn test_relative_path_strips_prefix_and_root() {
        assert_eq!(
            relative_path("disk:/Каталоги/Двери/alta.pdf", "Каталоги"),
            "Двери/alta.pdf"
        );
        assert_eq!(relative_path("Каталоги/alta.pdf", "Каталоги"), "alta.pdf");
    }

    #[test]
    fn test_relative_path_outside_root() {
        assert_eq!(relative_path("disk:/Другое/x.pdf", "Каталоги"), "Другое/x.pdf");
        assert_eq!(relative_path("disk:/x.pdf", ""), "x.pdf");
    }

    #[test]
    fn test_display_folder() {
        assert_eq!(
            display_folder("disk:/Каталоги/Двери/2024/alta.pdf", "Каталоги", "Root folder"),
            "Двери / 2024"
        );
        assert_eq!(
            display_folder("disk:/Каталоги/alta.pdf", "Каталоги", "Root folder"),
            "Root folder"
        );
    }
}
