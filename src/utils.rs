/// Utility functions used throughout the application
use std::path::PathBuf;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("mergetui-debug.log");
    path
}

/// Format bytes into human-readable string (e.g., "1.2 KB", "5.3 MB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Truncate a file name to a display width, appending an ellipsis.
/// Width-aware so wide characters do not overflow the list column.
pub fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut width = 0;
    let mut out = String::new();
    for c in name.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bytes_picks_the_right_unit() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(truncate_name("a.pdf", 20), "a.pdf");
    }

    #[test]
    fn long_names_end_with_ellipsis_within_budget() {
        let out = truncate_name("a-very-long-document-name.pdf", 10);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 10);
    }
}
