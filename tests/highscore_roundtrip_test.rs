//! Integration test: high-score persistence across sessions.

use skybird::highscores::{HighScoreStore, HighScoreTable};
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn test_scores_survive_across_store_instances() {
    let path = temp_path("skybird_cross_session_highscores.json");
    fs::remove_file(&path).ok();

    // First run: fresh table, one completed session.
    let store = HighScoreStore::at(&path);
    let mut table = store.load();
    assert_eq!(table.entries(), &[0, 0, 0]);
    table.record(12);
    store.save(&table).expect("save should succeed");

    // Second run: a new store instance sees the recorded score.
    let store = HighScoreStore::at(&path);
    let mut table = store.load();
    assert_eq!(table.best(), 12);
    table.record(7);
    store.save(&table).expect("save should succeed");

    // Third run: descending, deduplicated, capped at three.
    let store = HighScoreStore::at(&path);
    let table = store.load();
    assert_eq!(table.entries(), &[12, 7, 0]);

    fs::remove_file(&path).ok();
}

#[test]
fn test_reload_preserves_normal_form() {
    let path = temp_path("skybird_normal_form_highscores.json");
    fs::remove_file(&path).ok();

    let store = HighScoreStore::at(&path);
    let mut table = HighScoreTable::from_entries(vec![10, 5, 0]);
    table.record(9);
    store.save(&table).expect("save should succeed");

    let reloaded = store.load();
    assert_eq!(reloaded, table);
    assert_eq!(reloaded.entries(), &[10, 9, 5]);

    fs::remove_file(&path).ok();
}

#[test]
fn test_corrupt_file_resets_to_default() {
    let path = temp_path("skybird_corrupt_roundtrip_highscores.json");
    fs::write(&path, "{\"not\": \"a score list\"}").unwrap();

    let store = HighScoreStore::at(&path);
    assert_eq!(store.load(), HighScoreTable::default());

    fs::remove_file(&path).ok();
}
