//! Global key handling while no modal is open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use super::contact;
use crate::state::{AppState, ContactForm, Modal, PostsRequest, SearchSelection, View};

/// What: Handle a key press routed to the page chrome and the current view.
///
/// Inputs:
/// - `key`: Pressed key
/// - `app`: Mutable application state
/// - `posts_req_tx`: Re-issues list fetches on filter changes and refresh
/// - `detail_req_tx`: Requests slug resolution for opened posts
/// - `contact_req_tx`: Sends validated contact submissions
///
/// Output:
/// - `true` to exit the application.
///
/// Details:
/// - `Ctrl+K` (or `/`) opens the search modal from any view.
/// - `1`–`4` jump to a view; `Tab`/`BackTab` cycle outside the contact form,
///   which claims them for field traversal.
/// - `q` quits except in the contact form, where it types.
pub fn handle_global_key(
    key: KeyEvent,
    app: &mut AppState,
    posts_req_tx: &mpsc::UnboundedSender<PostsRequest>,
    detail_req_tx: &mpsc::UnboundedSender<String>,
    contact_req_tx: &mpsc::UnboundedSender<ContactForm>,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits; Ctrl+K always opens search.
    if ctrl && key.code == KeyCode::Char('c') {
        return true;
    }
    if ctrl && key.code == KeyCode::Char('k') {
        open_search(app);
        return false;
    }

    // View jumps work everywhere (digits are claimed by no text field except
    // the contact form, which is why these check for Ctrl there).
    if let KeyCode::Char(c @ '1'..='4') = key.code
        && (app.view != View::Contact || ctrl)
    {
        let idx = (c as usize) - ('1' as usize);
        switch_view(app, View::ORDER[idx]);
        return false;
    }

    if app.view == View::Contact {
        return contact::handle_contact_key(key, app, contact_req_tx);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('/') => open_search(app),
        KeyCode::Tab => switch_view(app, app.view.next()),
        KeyCode::BackTab => switch_view(app, app.view.prev()),
        _ => {
            if app.view == View::Blogs {
                handle_blogs_key(key, app, posts_req_tx, detail_req_tx);
            }
        }
    }
    false
}

/// Open the search modal with a clean slate, as the web modal remounts.
fn open_search(app: &mut AppState) {
    app.input.clear();
    app.caret = 0;
    app.search_results.clear();
    app.searching = false;
    app.modal = Modal::Search {
        selection: SearchSelection::None,
    };
}

/// Switch to another view, clearing any stale contact status banner.
fn switch_view(app: &mut AppState, view: View) {
    if app.view != view {
        app.view = view;
        app.contact_status = None;
    }
}

/// What: Handle keys specific to the Blogs view.
///
/// Inputs:
/// - `key`: Pressed key
/// - `app`: Mutable application state
/// - `posts_req_tx`: Re-issues the list fetch on filter changes/refresh
/// - `detail_req_tx`: Requests slug resolution for the opened post
///
/// Details:
/// - `j`/`k`/arrows move the post selection; `Enter` opens the detail
///   overlay from local state and refreshes it by slug in the background.
/// - `[`/`]` cycle the category filter (All ⇄ fetched categories), which
///   re-issues the fetch; `r` refreshes the current list.
fn handle_blogs_key(
    key: KeyEvent,
    app: &mut AppState,
    posts_req_tx: &mpsc::UnboundedSender<PostsRequest>,
    detail_req_tx: &mpsc::UnboundedSender<String>,
) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if !app.posts.is_empty() {
                app.selected = (app.selected + 1).min(app.posts.len() - 1);
                app.list_state.select(Some(app.selected));
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected = app.selected.saturating_sub(1);
            if !app.posts.is_empty() {
                app.list_state.select(Some(app.selected));
            }
        }
        KeyCode::Enter => {
            if let Some(post) = app.posts.get(app.selected).cloned() {
                if !post.slug.is_empty() {
                    let _ = detail_req_tx.send(post.slug.clone());
                }
                app.modal = Modal::Detail {
                    post: Box::new(post),
                    scroll: 0,
                    from_search: false,
                };
            }
        }
        KeyCode::Char(']') => cycle_category(app, posts_req_tx, true),
        KeyCode::Char('[') => cycle_category(app, posts_req_tx, false),
        KeyCode::Char('r') => refetch_posts(app, posts_req_tx),
        _ => {}
    }
}

/// What: Step the category filter forward or backward and re-fetch.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `posts_req_tx`: Channel for the re-issued fetch
/// - `forward`: Direction through `[All, cat1, cat2, ...]`, wrapping
fn cycle_category(
    app: &mut AppState,
    posts_req_tx: &mpsc::UnboundedSender<PostsRequest>,
    forward: bool,
) {
    let names: Vec<Option<String>> = std::iter::once(None)
        .chain(app.categories.iter().map(|c| Some(c.name.clone())))
        .collect();
    if names.len() <= 1 {
        return;
    }
    let current = names
        .iter()
        .position(|n| *n == app.selected_category)
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % names.len()
    } else {
        (current + names.len() - 1) % names.len()
    };
    app.selected_category = names[next].clone();
    app.selected = 0;
    refetch_posts(app, posts_req_tx);
}

/// Mark the listing as loading and re-issue the fetch for the current filter.
fn refetch_posts(app: &mut AppState, posts_req_tx: &mpsc::UnboundedSender<PostsRequest>) {
    app.posts_loading = true;
    app.posts_error = None;
    let _ = posts_req_tx.send(PostsRequest::All {
        category: app.selected_category.clone(),
    });
}
