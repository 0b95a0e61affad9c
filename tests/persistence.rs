//! Recent-search persistence round trips against real files.

use dashsea::app::persist::{load_recent, maybe_flush_recent};
use dashsea::app::recent::record_recent;
use dashsea::state::AppState;

#[test]
/// What: Submissions flush to disk and reload in the same order.
///
/// Inputs:
/// - Three recorded queries flushed into a temp directory.
///
/// Output:
/// - A fresh `AppState` loading that file sees the same newest-first list.
fn record_flush_reload_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("recent_searches.json");

    let mut app = AppState::default();
    app.recent_path = path.clone();
    for q in ["oversteer", "la carrera", "heel toe"] {
        record_recent(&mut app, q);
    }
    maybe_flush_recent(&mut app);
    assert!(!app.recent_dirty);

    let mut fresh = AppState::default();
    fresh.recent_path = path.clone();
    fresh.load_recent_items(&load_recent(&path));
    assert_eq!(
        fresh.recent_values(),
        vec!["heel toe", "la carrera", "oversteer"]
    );
}

#[test]
/// What: The persisted file never holds more than the capacity.
///
/// Inputs:
/// - Eight submissions flushed after each record.
///
/// Output:
/// - The JSON array on disk has exactly five entries, newest first.
fn persisted_file_respects_capacity() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("recent_searches.json");

    let mut app = AppState::default();
    app.recent_path = path.clone();
    for i in 0..8 {
        record_recent(&mut app, &format!("query{i}"));
        maybe_flush_recent(&mut app);
    }

    let body = std::fs::read_to_string(&path).expect("persisted file");
    let values: Vec<String> = serde_json::from_str(&body).expect("valid JSON array");
    assert_eq!(values.len(), 5);
    assert_eq!(values.first().map(String::as_str), Some("query7"));
    assert_eq!(values.last().map(String::as_str), Some("query3"));
}

#[test]
/// What: Corrupt persisted state degrades to an empty list, not a crash.
///
/// Inputs:
/// - A recents file containing garbage bytes.
///
/// Output:
/// - `load_recent` yields an empty list; the next flush overwrites the
///   garbage with valid JSON.
fn corrupt_file_fails_soft_and_recovers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("recent_searches.json");
    std::fs::write(&path, b"\x00{]]garbage").expect("write corrupt file");

    assert!(load_recent(&path).is_empty());

    let mut app = AppState::default();
    app.recent_path = path.clone();
    record_recent(&mut app, "fresh start");
    maybe_flush_recent(&mut app);
    assert_eq!(load_recent(&path), vec!["fresh start"]);
}
