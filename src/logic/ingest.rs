//! File ingestion
//!
//! Validation and path handling for the two ways files enter the queue:
//! the add prompt (path or glob pattern) and terminal paste (dropping a
//! file onto most terminal emulators pastes its path). Validation is
//! per-file and non-fatal: a rejected file never aborts processing of
//! its siblings.

use std::path::{Path, PathBuf};

use crate::model::{EntryId, FileListModel};

/// Result of ingesting a single candidate file.
#[derive(Debug)]
pub enum IngestOutcome {
    /// Queued, with the id of the new entry.
    Added(EntryId),
    /// The file does not declare itself as PDF content.
    NotPdf(PathBuf),
    /// The path could not be read (missing, directory, permissions).
    Unreadable(PathBuf, String),
}

/// Whether a file declares itself as PDF content.
///
/// Matches the `.pdf` extension case-insensitively; the actual content
/// is never inspected, exactly like the declared-type check the merge
/// service itself performs.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Validate one candidate file and queue it if acceptable.
pub fn ingest_file(files: &mut FileListModel, path: &Path) -> IngestOutcome {
    if !is_pdf(path) {
        return IngestOutcome::NotPdf(path.to_path_buf());
    }

    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => IngestOutcome::Added(files.add(path.to_path_buf(), meta.len())),
        Ok(_) => IngestOutcome::Unreadable(path.to_path_buf(), "not a regular file".to_string()),
        Err(e) => IngestOutcome::Unreadable(path.to_path_buf(), e.to_string()),
    }
}

/// Expand prompt input into candidate paths.
///
/// Input containing glob metacharacters is expanded against the
/// filesystem (matches come back in the sorted order glob yields);
/// anything else is taken as a literal path so the caller can report a
/// precise per-file error for it.
pub fn expand_input(input: &str) -> Vec<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.contains('*') || trimmed.contains('?') || trimmed.contains('[') {
        match glob::glob(trimmed) {
            Ok(paths) => paths.filter_map(Result::ok).collect(),
            Err(_) => Vec::new(),
        }
    } else {
        vec![PathBuf::from(trimmed)]
    }
}

/// Parse pasted text into candidate paths, one per line.
///
/// Terminals paste dropped files as their paths, often `file://`
/// prefixed or shell-quoted; both decorations are stripped.
pub fn paths_from_paste(data: &str) -> Vec<PathBuf> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let line = line.strip_prefix("file://").unwrap_or(line);
            let line = line
                .strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
                .unwrap_or(line);
            let line = line
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or(line);
            PathBuf::from(line)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_pdf_matches_extension_case_insensitively() {
        assert!(is_pdf(Path::new("/docs/report.pdf")));
        assert!(is_pdf(Path::new("/docs/REPORT.PDF")));
        assert!(!is_pdf(Path::new("/docs/notes.txt")));
        assert!(!is_pdf(Path::new("/docs/noextension")));
    }

    #[test]
    fn non_pdf_is_rejected_before_touching_the_filesystem() {
        let mut files = FileListModel::new();
        let outcome = ingest_file(&mut files, Path::new("/does/not/exist/notes.txt"));
        assert!(matches!(outcome, IngestOutcome::NotPdf(_)));
        assert!(files.is_empty());
    }

    #[test]
    fn empty_input_expands_to_nothing() {
        assert!(expand_input("   ").is_empty());
    }

    #[test]
    fn literal_path_passes_through_untouched() {
        let paths = expand_input("/docs/a.pdf");
        assert_eq!(paths, vec![PathBuf::from("/docs/a.pdf")]);
    }

    #[test]
    fn paste_strips_uri_prefix_and_quotes() {
        let paths = paths_from_paste("file:///docs/a.pdf\n'/docs/b b.pdf'\n\n\"/docs/c.pdf\"\n");
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/docs/a.pdf"),
                PathBuf::from("/docs/b b.pdf"),
                PathBuf::from("/docs/c.pdf"),
            ]
        );
    }
}
