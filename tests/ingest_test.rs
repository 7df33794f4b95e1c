//! Tests for file ingestion: declared-type validation, per-file
//! rejection isolation, glob expansion, and pasted-path parsing.

use std::fs;
use std::path::PathBuf;

use mergetui::logic::ingest::{expand_input, ingest_file, paths_from_paste, IngestOutcome};
use mergetui::model::FileListModel;

#[test]
fn non_pdf_file_is_rejected_and_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, b"just some notes").unwrap();

    let mut files = FileListModel::new();
    let outcome = ingest_file(&mut files, &notes);

    assert!(matches!(outcome, IngestOutcome::NotPdf(_)));
    assert!(files.is_empty());
}

#[test]
fn rejection_does_not_affect_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.pdf");
    let notes = dir.path().join("notes.txt");
    let b = dir.path().join("b.pdf");
    fs::write(&a, b"%PDF-1.4").unwrap();
    fs::write(&notes, b"text").unwrap();
    fs::write(&b, b"%PDF-1.4").unwrap();

    let mut files = FileListModel::new();
    for path in [&a, &notes, &b] {
        let _ = ingest_file(&mut files, path);
    }

    let names: Vec<_> = files
        .entries()
        .iter()
        .map(|e| e.display_name.clone())
        .collect();
    assert_eq!(names, vec!["a.pdf", "b.pdf"]);
}

#[test]
fn missing_pdf_is_unreadable_not_queued() {
    let dir = tempfile::tempdir().unwrap();
    let ghost = dir.path().join("ghost.pdf");

    let mut files = FileListModel::new();
    let outcome = ingest_file(&mut files, &ghost);

    assert!(matches!(outcome, IngestOutcome::Unreadable(_, _)));
    assert!(files.is_empty());
}

#[test]
fn directory_with_pdf_extension_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let odd = dir.path().join("folder.pdf");
    fs::create_dir(&odd).unwrap();

    let mut files = FileListModel::new();
    let outcome = ingest_file(&mut files, &odd);

    assert!(matches!(outcome, IngestOutcome::Unreadable(_, _)));
}

#[test]
fn entry_size_comes_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.pdf");
    fs::write(&a, vec![0u8; 1234]).unwrap();

    let mut files = FileListModel::new();
    let outcome = ingest_file(&mut files, &a);

    let IngestOutcome::Added(id) = outcome else {
        panic!("expected file to be queued");
    };
    assert_eq!(files.get(id).unwrap().size, 1234);
}

#[test]
fn glob_pattern_expands_to_matching_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("x1.pdf"), b"%PDF").unwrap();
    fs::write(dir.path().join("x2.pdf"), b"%PDF").unwrap();
    fs::write(dir.path().join("skip.txt"), b"no").unwrap();

    let pattern = format!("{}/*.pdf", dir.path().display());
    let paths = expand_input(&pattern);

    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| p.extension().unwrap() == "pdf"));
}

#[test]
fn glob_with_no_matches_expands_to_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = format!("{}/*.pdf", dir.path().display());
    assert!(expand_input(&pattern).is_empty());
}

#[test]
fn pasted_drop_data_parses_into_paths() {
    let pasted = "file:///docs/report.pdf\n'/docs/with space.pdf'\n";
    let paths = paths_from_paste(pasted);
    assert_eq!(
        paths,
        vec![
            PathBuf::from("/docs/report.pdf"),
            PathBuf::from("/docs/with space.pdf"),
        ]
    );
}
