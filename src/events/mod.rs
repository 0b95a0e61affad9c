//! Event handling layer for Dashsea's TUI.
//!
//! Centralizes keyboard input handling for the page views and modal
//! overlays:
//!
//! - Global chrome: view switching, opening the search modal, quitting
//! - Search modal: query editing, recents/suggestions, result selection
//! - Contact form: field traversal, text entry, submission
//! - Detail overlay: scrolling and dismissal
//!
//! All functions here are synchronous and mutate the provided [`AppState`];
//! network work is delegated to background workers via the channel senders.
//! Modal handling has precedence: while an overlay is open it captures every
//! key before the underlying view sees anything.

mod contact;
mod global;
mod search;

pub use search::send_query;

use crossterm::event::{Event as CEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::state::{AppState, ContactForm, Modal, PostsRequest, QueryInput, SearchSelection};

/// What: Dispatch a single input event.
///
/// Inputs:
/// - `ev`: Raw `crossterm` event
/// - `app`: Mutable application state
/// - `query_tx`: Sends search queries when the modal input changes
/// - `posts_req_tx`: Re-issues list fetches on filter changes and refresh
/// - `detail_req_tx`: Requests slug resolution for opened posts
/// - `contact_req_tx`: Sends validated contact submissions
///
/// Output:
/// - `true` to signal the application should exit; `false` otherwise.
///
/// Details:
/// - Only key presses (`KeyEventKind::Press`) are handled.
/// - Open modals capture all keys; the search modal, detail overlay, and
///   alerts each have their own handler.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    posts_req_tx: &mpsc::UnboundedSender<PostsRequest>,
    detail_req_tx: &mpsc::UnboundedSender<String>,
    contact_req_tx: &mpsc::UnboundedSender<ContactForm>,
) -> bool {
    let CEvent::Key(key) = ev else {
        return false;
    };
    if key.kind != KeyEventKind::Press {
        return false;
    }

    match &app.modal {
        Modal::Alert { .. } | Modal::DetailError { .. } => {
            // Any key dismisses a transient overlay.
            app.modal = Modal::None;
            false
        }
        Modal::Detail { .. } => {
            handle_detail_key(key, app);
            false
        }
        Modal::Search { .. } => {
            search::handle_search_key(key, app, query_tx, detail_req_tx);
            false
        }
        Modal::None => global::handle_global_key(key, app, posts_req_tx, detail_req_tx, contact_req_tx),
    }
}

/// What: Handle keys while the detail overlay is open.
///
/// Inputs:
/// - `key`: Pressed key
/// - `app`: Mutable application state
///
/// Details:
/// - `Esc`/`q` close the overlay, returning to the search modal when the
///   post was opened from there; `j`/`k`, arrows, and paging keys scroll.
fn handle_detail_key(key: crossterm::event::KeyEvent, app: &mut AppState) {
    use crossterm::event::KeyCode;
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        let from_search = matches!(app.modal, Modal::Detail { from_search: true, .. });
        app.modal = if from_search {
            Modal::Search {
                selection: if app.search_results.is_empty() {
                    SearchSelection::None
                } else {
                    SearchSelection::Result(0)
                },
            }
        } else {
            Modal::None
        };
        return;
    }
    let Modal::Detail { scroll, .. } = &mut app.modal else {
        return;
    };
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::PageDown => *scroll = scroll.saturating_add(10),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
        KeyCode::Home => *scroll = 0,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use crate::state::BlogPost;

    fn channels() -> (
        mpsc::UnboundedSender<QueryInput>,
        mpsc::UnboundedSender<PostsRequest>,
        mpsc::UnboundedSender<String>,
        mpsc::UnboundedSender<ContactForm>,
    ) {
        let (q, _) = mpsc::unbounded_channel();
        let (p, _) = mpsc::unbounded_channel();
        let (d, _) = mpsc::unbounded_channel();
        let (c, _) = mpsc::unbounded_channel();
        (q, p, d, c)
    }

    fn press(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    /// What: Alerts close on any key without exiting the app
    ///
    /// - Input: Open alert and a random key press
    /// - Output: Modal cleared, no exit
    fn alert_dismissed_by_any_key() {
        let (q, p, d, c) = channels();
        let mut app = AppState::default();
        app.modal = Modal::Alert {
            message: "Search unavailable".into(),
        };
        let exit = handle_event(press(KeyCode::Char('x')), &mut app, &q, &p, &d, &c);
        assert!(!exit);
        assert!(!app.modal.is_open());
    }

    #[test]
    /// What: Closing a search-opened detail returns to the search modal
    ///
    /// - Input: Detail overlay with `from_search` and Esc
    /// - Output: Search modal restored with the first result highlighted
    fn detail_esc_returns_to_search() {
        let (q, p, d, c) = channels();
        let mut app = AppState::default();
        app.search_results = vec![BlogPost::default()];
        app.modal = Modal::Detail {
            post: Box::new(BlogPost::default()),
            scroll: 4,
            from_search: true,
        };
        let _ = handle_event(press(KeyCode::Esc), &mut app, &q, &p, &d, &c);
        assert!(matches!(
            app.modal,
            Modal::Search {
                selection: SearchSelection::Result(0)
            }
        ));
    }

    #[test]
    /// What: Detail scrolling never underflows
    ///
    /// - Input: Fresh overlay and repeated scroll-up presses
    /// - Output: Scroll stays at zero
    fn detail_scroll_saturates() {
        let (q, p, d, c) = channels();
        let mut app = AppState::default();
        app.modal = Modal::Detail {
            post: Box::new(BlogPost::default()),
            scroll: 0,
            from_search: false,
        };
        let _ = handle_event(press(KeyCode::Up), &mut app, &q, &p, &d, &c);
        match app.modal {
            Modal::Detail { scroll, .. } => assert_eq!(scroll, 0),
            ref other => panic!("unexpected modal: {other:?}"),
        }
    }
}
