//! Modularized state module.
//!
//! Splits application state into value types, modal overlays, and the main
//! [`AppState`] struct while keeping the public API under `crate::state::*`
//! via re-exports.

pub mod app_state;
pub mod modal;
pub mod types;

// Public re-exports to keep paths short at call sites
pub use app_state::AppState;
pub use modal::{Modal, SearchSelection};
pub use types::{
    BlogPost, Category, ContactField, ContactForm, ContactOutcome, PostsRequest, PostsResponse,
    QueryInput, SearchResults, View,
};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
