//! Recording rules for the recent-searches list.

use crate::state::AppState;

/// What: Record a manually submitted query into the recent list.
///
/// Inputs:
/// - `app`: Mutable application state owning the recent cache
/// - `query`: Query text as submitted (Enter, or picking a recent/suggestion)
///
/// Output:
/// - Inserts at the front, removes any prior occurrence of the exact same
///   string, lets the LRU bound enforce the capacity, and marks the list
///   dirty. Blank queries are ignored.
///
/// Details:
/// - Dedup is exact-string: `"JDM"` and `"jdm"` are distinct entries.
/// - Only manual submissions call this; the debounced as-you-type pipeline
///   never records.
pub fn record_recent(app: &mut AppState, query: &str) {
    let value = query.trim();
    if value.is_empty() {
        return;
    }
    app.recent.put(value.to_owned(), value.to_owned());
    app.recent_dirty = true;
}
