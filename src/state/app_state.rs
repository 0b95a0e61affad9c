//! Application state owned by the event loop.
//!
//! All mutation happens on the event-loop task; background workers only ever
//! communicate through channels. Persistence uses dirty flags plus explicit
//! flush helpers in [`crate::app::persist`].

use std::num::NonZeroUsize;
use std::path::PathBuf;

use lru::LruCache;
use ratatui::widgets::ListState;

use super::modal::Modal;
use super::types::{BlogPost, Category, ContactField, ContactForm, View};

/// Popular searches offered as chips in the search modal.
pub const POPULAR_SEARCHES: [&str; 8] = [
    "engine tuning",
    "car maintenance",
    "performance parts",
    "racing tips",
    "classic cars",
    "electric vehicles",
    "turbocharging",
    "drift techniques",
];

/// Trending topics offered as chips in the search modal.
pub const TRENDING_TOPICS: [&str; 8] = [
    "JDM culture",
    "engine swaps",
    "suspension setup",
    "brake systems",
    "aerodynamics",
    "fuel efficiency",
    "track days",
    "car shows",
];

/// Default bound on the recent-searches list.
pub const DEFAULT_RECENT_CAPACITY: usize = 5;

/// Return the default recent-list capacity as a `NonZeroUsize`.
#[must_use]
pub fn recent_capacity() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_RECENT_CAPACITY).unwrap_or(NonZeroUsize::MIN)
}

/// Mutable application state for the whole TUI.
pub struct AppState {
    /// Currently displayed page.
    pub view: View,
    /// Active modal overlay, if any.
    pub modal: Modal,

    // --- Home feed ---
    /// Posts shown in the home recent-posts section.
    pub home_posts: Vec<BlogPost>,
    /// Whether the home feed fetch is still in flight.
    pub home_loading: bool,
    /// Error message when the home feed fetch failed.
    pub home_error: Option<String>,

    // --- Blogs view ---
    /// Posts shown in the Blogs listing (already category-filtered server-side).
    pub posts: Vec<BlogPost>,
    /// Whether the listing fetch is still in flight.
    pub posts_loading: bool,
    /// Error message when the listing fetch failed.
    pub posts_error: Option<String>,
    /// Fetched categories for the sidebar filter.
    pub categories: Vec<Category>,
    /// Selected category name; `None` means All.
    pub selected_category: Option<String>,
    /// Selected row in the post list.
    pub selected: usize,
    /// Ratatui list state for the post list.
    pub list_state: ListState,

    // --- Search pipeline ---
    /// Current search input text.
    pub input: String,
    /// Caret position in `input`, counted in chars.
    pub caret: usize,
    /// Results for the latest applied query.
    pub search_results: Vec<BlogPost>,
    /// Whether a search fetch is outstanding.
    pub searching: bool,
    /// Next query identifier to assign.
    pub next_query_id: u64,
    /// Identifier of the most recently issued query; stale responses are
    /// discarded by comparing against this.
    pub latest_query_id: u64,
    /// Recent queries, newest first, keyed by the exact query string.
    pub recent: LruCache<String, String>,
    /// Whether `recent` has unsaved changes.
    pub recent_dirty: bool,
    /// Path of the persisted recent-searches file.
    pub recent_path: PathBuf,

    // --- Contact form ---
    /// Form field contents.
    pub contact: ContactForm,
    /// Field with keyboard focus.
    pub contact_focus: ContactField,
    /// Whether a submission is in flight.
    pub contact_sending: bool,
    /// Last submission status: `Ok(message)` or `Err(message)` (validation or
    /// server error). `None` when nothing to show.
    pub contact_status: Option<Result<String, String>>,

    /// Base URL of the blog API.
    pub api_base_url: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::Home,
            modal: Modal::None,
            home_posts: Vec::new(),
            home_loading: true,
            home_error: None,
            posts: Vec::new(),
            posts_loading: true,
            posts_error: None,
            categories: Vec::new(),
            selected_category: None,
            selected: 0,
            list_state: ListState::default(),
            input: String::new(),
            caret: 0,
            search_results: Vec::new(),
            searching: false,
            next_query_id: 0,
            latest_query_id: 0,
            recent: LruCache::new(recent_capacity()),
            recent_dirty: false,
            recent_path: crate::theme::config_dir().join("recent_searches.json"),
            contact: ContactForm::default(),
            contact_focus: ContactField::Name,
            contact_sending: false,
            contact_status: None,
            api_base_url: crate::theme::DEFAULT_API_BASE_URL.to_owned(),
        }
    }
}

impl AppState {
    /// Recent query strings, newest first.
    #[must_use]
    pub fn recent_values(&self) -> Vec<String> {
        self.recent.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Replace the recent list with persisted values (oldest inserted first so
    /// the newest ends up at the front of the cache).
    pub fn load_recent_items(&mut self, values: &[String]) {
        self.recent.clear();
        for v in values.iter().rev() {
            self.recent.put(v.clone(), v.clone());
        }
    }

    /// Rows shown in the search modal when there are no results to list.
    ///
    /// With an empty (or single-char) input: recents first, then every
    /// suggestion chip. With two or more typed characters: only suggestion
    /// chips, fuzzy-ranked against the input, non-matching ones dropped;
    /// these accompany the "no results" state as alternate queries to try.
    #[must_use]
    pub fn search_shortcuts(&self) -> Vec<String> {
        let suggestions = POPULAR_SEARCHES.iter().chain(TRENDING_TOPICS.iter());
        let typed = self.input.trim();
        if typed.len() < 2 {
            let mut rows = self.recent_values();
            rows.extend(suggestions.map(|s| (*s).to_owned()));
            return rows;
        }
        let matcher = fuzzy_matcher::skim::SkimMatcherV2::default();
        let mut ranked: Vec<(i64, &str)> = suggestions
            .filter_map(|s| crate::util::fuzzy_rank(s, typed, &matcher).map(|r| (r, *s)))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked.into_iter().map(|(_, s)| s.to_owned()).collect()
    }

    /// Clamp the Blogs list selection to the current post count and sync the
    /// ratatui list state.
    pub fn clamp_selection(&mut self) {
        if self.posts.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(self.posts.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Loading persisted recents preserves newest-first ordering
    ///
    /// - Input: Persisted list `["newest", "older", "oldest"]`
    /// - Output: `recent_values` returns the same order
    fn load_recent_preserves_order() {
        let mut app = AppState::default();
        let saved = vec![
            "newest".to_string(),
            "older".to_string(),
            "oldest".to_string(),
        ];
        app.load_recent_items(&saved);
        assert_eq!(app.recent_values(), saved);
    }

    #[test]
    /// What: Search shortcuts list recents before suggestions when input is empty
    ///
    /// - Input: One recorded recent and an empty input
    /// - Output: First row is the recent, suggestion chips follow
    fn shortcuts_put_recents_first() {
        let mut app = AppState::default();
        app.recent.put("exhaust note".into(), "exhaust note".into());
        let rows = app.search_shortcuts();
        assert_eq!(rows.first().map(String::as_str), Some("exhaust note"));
        assert!(rows.len() > POPULAR_SEARCHES.len());
    }

    #[test]
    /// What: Typed input narrows suggestion chips by fuzzy rank
    ///
    /// - Input: Input `"turbo"`
    /// - Output: `turbocharging` survives, unrelated chips are filtered out
    fn shortcuts_filter_by_fuzzy_rank() {
        let mut app = AppState::default();
        app.input = "turbo".into();
        let rows = app.search_shortcuts();
        assert!(rows.iter().any(|r| r == "turbocharging"));
        assert!(!rows.iter().any(|r| r == "car shows"));
    }

    #[test]
    /// What: Selection clamping handles empty and shrunken lists
    ///
    /// - Input: Selection beyond the list length; then an empty list
    /// - Output: Clamped to last row; deselected when empty
    fn clamp_selection_bounds() {
        let mut app = AppState::default();
        app.posts = vec![BlogPost::default(), BlogPost::default()];
        app.selected = 9;
        app.clamp_selection();
        assert_eq!(app.selected, 1);
        assert_eq!(app.list_state.selected(), Some(1));
        app.posts.clear();
        app.clamp_selection();
        assert_eq!(app.list_state.selected(), None);
    }
}
