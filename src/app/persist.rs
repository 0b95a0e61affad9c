//! Persistence for the recent-searches list.
//!
//! Recents are the only client-owned durable state: a single JSON array of up
//! to five strings, newest first. Writes go through a dirty flag so callers
//! can flush after every mutation (the list is small and submissions are rare)
//! and once more on exit.

use std::fs;
use std::path::Path;

use crate::state::AppState;

/// What: Persist the recent searches list to disk if marked dirty.
///
/// Inputs:
/// - `app`: Application state containing `recent` and `recent_path`
///
/// Output:
/// - Writes the recent values as a JSON array to `recent_path` and clears the
///   dirty flag.
pub fn maybe_flush_recent(app: &mut AppState) {
    if !app.recent_dirty {
        return;
    }
    let recent_values = app.recent_values();
    if let Ok(s) = serde_json::to_string(&recent_values) {
        tracing::debug!(
            path = %app.recent_path.display(),
            bytes = s.len(),
            "[Persist] Writing recent searches to disk"
        );
        match fs::write(&app.recent_path, &s) {
            Ok(()) => {
                tracing::debug!(
                    path = %app.recent_path.display(),
                    "[Persist] Recent searches persisted"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %app.recent_path.display(),
                    error = %e,
                    "[Persist] Failed to write recent searches"
                );
            }
        }
        app.recent_dirty = false;
    }
}

/// What: Load persisted recent searches.
///
/// Inputs:
/// - `path`: File previously written by [`maybe_flush_recent`]
///
/// Output:
/// - The stored strings, or an empty list when the file is absent or corrupt.
///
/// Details:
/// - Corrupt JSON fails soft: a warning is logged and the UI starts with an
///   empty recents list instead of crashing.
#[must_use]
pub fn load_recent(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(body) => match serde_json::from_str::<Vec<String>>(&body) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "[Persist] Ignoring corrupt recent searches file"
                );
                Vec::new()
            }
        },
        Err(_) => Vec::new(),
    }
}
