//! End-to-end scan properties over a fixture tree.

mod common;

use common::{encrypted_zip_bytes, pseudo_random, write_file};
use lockscan::{DetectionPipeline, DetectionResult, ExecutionMode, LockscanError, ScanScheduler};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "readme.txt", b"plain readable text, repeated a bit\n");
    write_file(dir.path(), "empty.dat", b"");
    write_file(dir.path(), "vault.gpg", &pseudo_random(8192));
    write_file(dir.path(), "nested/deeper/archive.zip", &encrypted_zip_bytes());
    write_file(dir.path(), "nested/notes.md", b"# heading\nsome notes\n");
    dir
}

fn verdict_set(results: &[DetectionResult]) -> BTreeSet<(PathBuf, bool, bool, String)> {
    results
        .iter()
        .map(|r| {
            (
                r.file.clone(),
                r.password_protected,
                r.encrypted,
                format!("{:.6}", r.confidence),
            )
        })
        .collect()
}

#[test]
fn sequential_and_concurrent_modes_agree() {
    let dir = fixture_tree();
    let sequential = ScanScheduler::new(DetectionPipeline::new(), ExecutionMode::Sequential)
        .scan(dir.path())
        .unwrap();
    let concurrent = ScanScheduler::new(DetectionPipeline::new(), ExecutionMode::Concurrent)
        .scan(dir.path())
        .unwrap();

    assert_eq!(sequential.len(), 5);
    assert_eq!(verdict_set(&sequential), verdict_set(&concurrent));
}

#[test]
fn confidence_invariants_hold_for_every_file() {
    let dir = fixture_tree();
    let results = ScanScheduler::new(DetectionPipeline::new(), ExecutionMode::Concurrent)
        .scan(dir.path())
        .unwrap();

    for result in &results {
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "confidence out of range for {}",
            result.file.display()
        );
        if result.confidence == 0.0 {
            assert!(!result.password_protected);
            assert!(!result.encrypted);
        }
    }
}

#[test]
fn empty_and_missing_files_yield_no_signal() {
    let dir = fixture_tree();
    let pipeline = DetectionPipeline::new();

    let empty = pipeline.analyze_file(&dir.path().join("empty.dat"));
    assert!(!empty.password_protected);
    assert!(!empty.encrypted);
    assert_eq!(empty.confidence, 0.0);

    let missing = pipeline.analyze_file(Path::new("/no/such/file.xlsx"));
    assert!(!missing.password_protected);
    assert!(!missing.encrypted);
    assert_eq!(missing.confidence, 0.0);
}

#[test]
fn repeat_scans_are_idempotent() {
    let dir = fixture_tree();
    let scheduler = ScanScheduler::new(DetectionPipeline::new(), ExecutionMode::Sequential);
    let first = scheduler.scan(dir.path()).unwrap();
    let second = scheduler.scan(dir.path()).unwrap();
    assert_eq!(verdict_set(&first), verdict_set(&second));
}

#[test]
fn sequential_mode_preserves_walk_order() {
    let dir = fixture_tree();
    let results = DetectionPipeline::new().scan_directory(dir.path()).unwrap();
    let walked: Vec<PathBuf> = walkdir::WalkDir::new(dir.path())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    let reported: Vec<PathBuf> = results.into_iter().map(|r| r.file).collect();
    assert_eq!(reported, walked);
}

#[test]
fn scanning_a_file_path_is_a_usage_error() {
    let dir = fixture_tree();
    let file = dir.path().join("readme.txt");
    for mode in [ExecutionMode::Sequential, ExecutionMode::Concurrent] {
        let scheduler = ScanScheduler::new(DetectionPipeline::new(), mode);
        assert!(matches!(
            scheduler.scan(&file),
            Err(LockscanError::InvalidTarget(_))
        ));
    }
}

#[test]
fn gpg_random_content_is_flagged_encrypted_with_high_confidence() {
    let dir = fixture_tree();
    let result = DetectionPipeline::new().analyze_file(&dir.path().join("vault.gpg"));
    assert!(!result.password_protected);
    assert!(result.encrypted);
    assert!(result.confidence >= 0.9);
}

#[test]
fn plain_text_is_low_confidence_and_not_encrypted() {
    let dir = fixture_tree();
    let result = DetectionPipeline::new().analyze_file(&dir.path().join("readme.txt"));
    assert!(!result.password_protected);
    assert!(!result.encrypted);
    assert!(result.confidence < 0.5);
}

#[cfg(feature = "parsers-archive")]
#[test]
fn flag_encrypted_zip_wins_over_entropy() {
    // The stored entry is tiny and low-entropy; the header bit alone must
    // carry the verdict.
    let dir = fixture_tree();
    let result = DetectionPipeline::new()
        .analyze_file(&dir.path().join("nested/deeper/archive.zip"));
    assert!(result.password_protected);
    assert!(result.encrypted);
    assert_eq!(result.confidence, 1.0);
}
