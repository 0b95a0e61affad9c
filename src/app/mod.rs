//! Dashsea application module.
//!
//! Organizes the TUI runtime into small files: persistence, recent-search
//! bookkeeping, terminal setup, and the event loop with its background
//! workers.

/// Persistence layer for saving and loading recent searches.
pub mod persist;
/// Recent-search recording rules.
pub mod recent;
/// Runtime event loop and background workers.
pub mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
