//! Key handling for the search modal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::recent::record_recent;
use crate::state::{AppState, Modal, QueryInput, SearchSelection};

/// What: Issue the current input as a search query.
///
/// Inputs:
/// - `app`: Application state providing the input text and id counters
/// - `query_tx`: Channel into the debounced search worker
///
/// Output:
/// - Assigns a fresh monotonic id, records it as the latest, and forwards
///   the query text. The worker echoes the id so the results handler can
///   drop anything stale.
pub fn send_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    let _ = query_tx.send(QueryInput {
        id,
        text: app.input.clone(),
    });
}

/// Byte offset of the caret (a char index) into the input string.
fn caret_byte(app: &AppState) -> usize {
    app.input
        .char_indices()
        .nth(app.caret)
        .map_or(app.input.len(), |(i, _)| i)
}

/// Re-issue the query after an edit and reset loading/selection state.
fn input_changed(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    app.searching = !app.input.trim().is_empty();
    if let Modal::Search { selection } = &mut app.modal {
        *selection = SearchSelection::None;
    }
    send_query(app, query_tx);
}

/// What: Submit a query manually (Enter or picking a recent/suggestion).
///
/// Inputs:
/// - `app`: Application state
/// - `query_tx`: Channel into the search worker
///
/// Details:
/// - Manual submission is what records recents; the as-you-type pipeline
///   never does.
fn submit_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    if app.input.trim().is_empty() {
        return;
    }
    let query = app.input.trim().to_owned();
    record_recent(app, &query);
    app.searching = true;
    send_query(app, query_tx);
}

/// What: Handle a key press while the search modal is open.
///
/// Inputs:
/// - `key`: Pressed key
/// - `app`: Mutable application state
/// - `query_tx`: Channel into the search worker
/// - `detail_req_tx`: Requests slug resolution for an opened result
///
/// Details:
/// - Text edits restart the debounce window downstream; an emptied input
///   clears results without network traffic (the worker short-circuits).
/// - `Up`/`Down` walk the results, or the recents/suggestions rows while the
///   input is empty; `Enter` submits, applies a shortcut, or opens the
///   highlighted result.
pub fn handle_search_key(
    key: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    detail_req_tx: &mpsc::UnboundedSender<String>,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            app.modal = Modal::None;
        }
        KeyCode::Char('u') if ctrl => {
            app.input.clear();
            app.caret = 0;
            input_changed(app, query_tx);
        }
        KeyCode::Char(c) if !ctrl => {
            let at = caret_byte(app);
            app.input.insert(at, c);
            app.caret += 1;
            input_changed(app, query_tx);
        }
        KeyCode::Backspace => {
            if app.caret > 0 {
                app.caret -= 1;
                let at = caret_byte(app);
                app.input.remove(at);
                input_changed(app, query_tx);
            }
        }
        KeyCode::Left => app.caret = app.caret.saturating_sub(1),
        KeyCode::Right => app.caret = (app.caret + 1).min(app.input.chars().count()),
        KeyCode::Home => app.caret = 0,
        KeyCode::End => app.caret = app.input.chars().count(),
        KeyCode::Down => move_selection(app, true),
        KeyCode::Up => move_selection(app, false),
        KeyCode::Enter => activate_selection(app, query_tx, detail_req_tx),
        _ => {}
    }
}

/// Move the highlight through results, or shortcuts when no results exist.
fn move_selection(app: &mut AppState, forward: bool) {
    if app.searching {
        return;
    }
    let results = app.search_results.len();
    let shortcuts = if results == 0 {
        app.search_shortcuts().len()
    } else {
        0
    };
    let Modal::Search { selection } = &mut app.modal else {
        return;
    };
    let step = |len: usize, current: Option<usize>| -> usize {
        let n = len.max(1);
        match current {
            None => {
                if forward {
                    0
                } else {
                    n - 1
                }
            }
            Some(i) => {
                if forward {
                    (i + 1) % n
                } else {
                    (i + n - 1) % n
                }
            }
        }
    };
    if results > 0 {
        let current = match *selection {
            SearchSelection::Result(i) => Some(i),
            _ => None,
        };
        *selection = SearchSelection::Result(step(results, current));
    } else if shortcuts > 0 {
        let current = match *selection {
            SearchSelection::Shortcut(i) => Some(i),
            _ => None,
        };
        *selection = SearchSelection::Shortcut(step(shortcuts, current));
    }
}

/// Apply Enter: open the highlighted result, adopt the highlighted shortcut,
/// or submit the typed query.
fn activate_selection(
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    detail_req_tx: &mpsc::UnboundedSender<String>,
) {
    let selection = match &app.modal {
        Modal::Search { selection } => *selection,
        _ => return,
    };
    match selection {
        SearchSelection::Result(i) => {
            if let Some(post) = app.search_results.get(i).cloned() {
                if !post.slug.is_empty() {
                    let _ = detail_req_tx.send(post.slug.clone());
                }
                app.modal = Modal::Detail {
                    post: Box::new(post),
                    scroll: 0,
                    from_search: true,
                };
            }
        }
        SearchSelection::Shortcut(i) => {
            if let Some(query) = app.search_shortcuts().get(i).cloned() {
                app.caret = query.chars().count();
                app.input = query;
                if let Modal::Search { selection } = &mut app.modal {
                    *selection = SearchSelection::None;
                }
                submit_query(app, query_tx);
            }
        }
        SearchSelection::None => submit_query(app, query_tx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BlogPost;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn search_app() -> (
        AppState,
        mpsc::UnboundedSender<QueryInput>,
        mpsc::UnboundedReceiver<QueryInput>,
        mpsc::UnboundedSender<String>,
    ) {
        let mut app = AppState::default();
        app.modal = Modal::Search {
            selection: SearchSelection::None,
        };
        let (q_tx, q_rx) = mpsc::unbounded_channel();
        let (d_tx, _d_rx) = mpsc::unbounded_channel();
        (app, q_tx, q_rx, d_tx)
    }

    #[test]
    /// What: Ensure `send_query` increments identifiers and forwards the input.
    ///
    /// Inputs:
    /// - `AppState` whose `input` is `"rally"`.
    ///
    /// Output:
    /// - `latest_query_id` advances and the channel receives a matching
    ///   `QueryInput`.
    fn send_query_increments_and_sends() {
        let (mut app, q_tx, mut q_rx, _d) = search_app();
        app.input = "rally".into();
        send_query(&mut app, &q_tx);
        send_query(&mut app, &q_tx);
        assert_eq!(app.latest_query_id, 1);
        assert_eq!(app.next_query_id, 2);
        let first = q_rx.try_recv().expect("first query");
        assert_eq!(first.id, 0);
        assert_eq!(first.text, "rally");
    }

    #[test]
    /// What: Typing edits the input at the caret and issues a query per keystroke
    ///
    /// - Input: Characters `h`, `p` then Left + `m` (insert mid-string)
    /// - Output: Input `"hmp"`, three queries issued, caret tracked in chars
    fn typing_edits_at_caret() {
        let (mut app, q_tx, mut q_rx, d_tx) = search_app();
        handle_search_key(press(KeyCode::Char('h')), &mut app, &q_tx, &d_tx);
        handle_search_key(press(KeyCode::Char('p')), &mut app, &q_tx, &d_tx);
        handle_search_key(press(KeyCode::Left), &mut app, &q_tx, &d_tx);
        handle_search_key(press(KeyCode::Char('m')), &mut app, &q_tx, &d_tx);
        assert_eq!(app.input, "hmp");
        assert_eq!(app.caret, 2);
        let mut count = 0;
        while q_rx.try_recv().is_ok() {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    /// What: Backspacing to empty clears the loading flag (worker clears results)
    ///
    /// - Input: One char typed then backspaced
    /// - Output: Empty input, `searching` false, queries issued for both edits
    fn emptied_input_stops_loading() {
        let (mut app, q_tx, _q_rx, d_tx) = search_app();
        handle_search_key(press(KeyCode::Char('x')), &mut app, &q_tx, &d_tx);
        assert!(app.searching);
        handle_search_key(press(KeyCode::Backspace), &mut app, &q_tx, &d_tx);
        assert!(app.input.is_empty());
        assert!(!app.searching);
    }

    #[test]
    /// What: Enter records the query exactly once and re-issues the search
    ///
    /// - Input: Typed query `"gt"` then Enter
    /// - Output: One recent entry `"gt"`; latest id advanced past the typing ids
    fn enter_records_recent_and_searches() {
        let (mut app, q_tx, mut q_rx, d_tx) = search_app();
        handle_search_key(press(KeyCode::Char('g')), &mut app, &q_tx, &d_tx);
        handle_search_key(press(KeyCode::Char('t')), &mut app, &q_tx, &d_tx);
        handle_search_key(press(KeyCode::Enter), &mut app, &q_tx, &d_tx);
        assert_eq!(app.recent_values(), vec!["gt"]);
        let mut last = None;
        while let Ok(q) = q_rx.try_recv() {
            last = Some(q);
        }
        let last = last.expect("queries issued");
        assert_eq!(last.id, app.latest_query_id);
        assert_eq!(last.text, "gt");
    }

    #[test]
    /// What: Enter with an empty input records nothing
    ///
    /// - Input: Enter on a fresh modal
    /// - Output: Recents stay empty, no query issued
    fn empty_submit_is_ignored() {
        let (mut app, q_tx, mut q_rx, d_tx) = search_app();
        handle_search_key(press(KeyCode::Enter), &mut app, &q_tx, &d_tx);
        assert!(app.recent.is_empty());
        assert!(q_rx.try_recv().is_err());
    }

    #[test]
    /// What: Picking a recent applies it, records it, and re-searches
    ///
    /// - Input: A recorded recent, Down to highlight it, Enter
    /// - Output: Input adopts the query; it moves to the recents front; a
    ///   query is issued
    fn picking_recent_applies_and_records() {
        let (mut app, q_tx, mut q_rx, d_tx) = search_app();
        app.recent.put("old favorite".into(), "old favorite".into());
        handle_search_key(press(KeyCode::Down), &mut app, &q_tx, &d_tx);
        handle_search_key(press(KeyCode::Enter), &mut app, &q_tx, &d_tx);
        assert_eq!(app.input, "old favorite");
        assert_eq!(
            app.recent_values().first().map(String::as_str),
            Some("old favorite")
        );
        let q = q_rx.try_recv().expect("query issued");
        assert_eq!(q.text, "old favorite");
    }

    #[test]
    /// What: Enter on a highlighted result opens the detail overlay
    ///
    /// - Input: One search result highlighted, Enter
    /// - Output: Detail overlay from search; slug refresh requested
    fn enter_on_result_opens_detail() {
        let (mut app, q_tx, _q_rx, _d) = search_app();
        let (d_tx, mut d_rx) = mpsc::unbounded_channel::<String>();
        app.search_results = vec![BlogPost {
            slug: "la-carrera".into(),
            title: "La Carrera".into(),
            content: "<p>race</p>".into(),
            ..BlogPost::default()
        }];
        app.modal = Modal::Search {
            selection: SearchSelection::Result(0),
        };
        handle_search_key(press(KeyCode::Enter), &mut app, &q_tx, &d_tx);
        assert!(matches!(app.modal, Modal::Detail { from_search: true, .. }));
        assert_eq!(d_rx.try_recv().ok().as_deref(), Some("la-carrera"));
    }

    #[test]
    /// What: Selection wraps through results in both directions
    ///
    /// - Input: Two results; Down, Down, Down then Up
    /// - Output: 0 -> 1 -> 0 -> 1
    fn selection_wraps() {
        let (mut app, q_tx, _q_rx, d_tx) = search_app();
        app.search_results = vec![BlogPost::default(), BlogPost::default()];
        let positions: Vec<usize> = [true, true, true, false]
            .into_iter()
            .map(|fwd| {
                handle_search_key(
                    press(if fwd { KeyCode::Down } else { KeyCode::Up }),
                    &mut app,
                    &q_tx,
                    &d_tx,
                );
                match app.modal {
                    Modal::Search {
                        selection: SearchSelection::Result(i),
                    } => i,
                    ref other => panic!("unexpected modal: {other:?}"),
                }
            })
            .collect();
        assert_eq!(positions, vec![0, 1, 0, 1]);
    }
}
