//! Runtime: initialization, background workers, and the main event loop.

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::state::{AppState, Modal, PostsRequest, View};
use crate::ui::ui;

use super::persist::{load_recent, maybe_flush_recent};
use super::terminal::{restore_terminal, setup_terminal};

mod background;
pub mod handlers;
pub mod workers;

use background::{Channels, spawn_event_thread};
use handlers::{
    handle_categories, handle_contact_outcome, handle_detail_result, handle_posts_response,
    handle_search_results,
};

/// Crate-wide error alias for the runtime entrypoint.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Initialize application state from settings and persisted files.
///
/// Inputs:
/// - `app`: Fresh application state to fill in
/// - `start_view`: View override from the command line, if any
///
/// Details:
/// - Loads `settings.toml` (base URL, recent capacity, startup view) and the
///   persisted recent-searches file; both fail soft to defaults.
fn initialize_app_state(app: &mut AppState, start_view: Option<View>) {
    let settings = crate::theme::load_settings();
    app.api_base_url = settings.base_url();
    if let Some(cap) = std::num::NonZeroUsize::new(settings.recent_capacity) {
        app.recent.resize(cap);
    }
    app.view = start_view.unwrap_or_else(|| settings.startup_view());
    let saved = load_recent(&app.recent_path);
    app.load_recent_items(&saved);
    tracing::info!(
        base_url = %app.api_base_url,
        recents = saved.len(),
        view = ?app.view,
        "state initialized"
    );
}

/// What: Run the Dashsea TUI end-to-end: initialize terminal and state, spawn
/// background workers, drive the event loop, persist recents, and restore the
/// terminal on exit.
///
/// Inputs:
/// - `start_view`: Optional view to open instead of the configured default.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal
///   errors.
///
/// Details:
/// - Config/state: reads `settings.toml` and the persisted recent searches.
/// - Background tasks: debounced search, post lists, categories, slug
///   resolution, and contact submission, all over unbounded channels.
/// - Event loop: renders a frame, then applies exactly one channel message.
/// - Persistence: recents flush after every mutation and once more on exit.
pub async fn run(start_view: Option<View>) -> Result<()> {
    let headless = std::env::var("DASHSEA_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    initialize_app_state(&mut app, start_view);

    let mut channels = Channels::new(&app.api_base_url);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    // Initial fetches: home feed, unfiltered listing, categories.
    let _ = channels.posts_req_tx.send(PostsRequest::Recent);
    let _ = channels.posts_req_tx.send(PostsRequest::All { category: None });
    let _ = channels.categories_req_tx.send(());

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(
                    ev,
                    &mut app,
                    &channels.query_tx,
                    &channels.posts_req_tx,
                    &channels.detail_req_tx,
                    &channels.contact_req_tx,
                ) {
                    break;
                }
            }
            Some(new_results) = channels.results_rx.recv() => {
                handle_search_results(&mut app, new_results);
            }
            Some(resp) = channels.posts_res_rx.recv() => {
                handle_posts_response(&mut app, resp);
            }
            Some(categories) = channels.categories_res_rx.recv() => {
                handle_categories(&mut app, categories);
            }
            Some((slug, result)) = channels.detail_res_rx.recv() => {
                handle_detail_result(&mut app, &slug, result);
            }
            Some(outcome) = channels.contact_res_rx.recv() => {
                handle_contact_outcome(&mut app, outcome);
            }
            Some(msg) = channels.net_err_rx.recv() => {
                // Alerts never replace an open detail or search overlay; those
                // surfaces show their own empty/error states.
                if !app.modal.is_open() {
                    app.modal = Modal::Alert { message: msg };
                }
            }
            else => {}
        }

        // Recents are tiny; flush as soon as a submission dirtied them.
        maybe_flush_recent(&mut app);
    }

    // Signal the input thread to exit immediately
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    maybe_flush_recent(&mut app);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
