//! Channel definitions and background task spawning.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use super::workers;
use crate::state::{
    BlogPost, Category, ContactForm, ContactOutcome, PostsRequest, PostsResponse, QueryInput,
    SearchResults,
};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used for communication
///   between the main event loop and background workers.
pub struct Channels {
    /// Raw terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver half of the terminal event channel.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Cancellation flag observed by the input thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Queries into the debounced search worker.
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
    /// Search results coming back from the worker.
    pub results_rx: mpsc::UnboundedReceiver<SearchResults>,
    /// Requests into the posts worker (home feed / filtered list).
    pub posts_req_tx: mpsc::UnboundedSender<PostsRequest>,
    /// Post lists coming back from the posts worker.
    pub posts_res_rx: mpsc::UnboundedReceiver<PostsResponse>,
    /// Refresh requests into the categories worker.
    pub categories_req_tx: mpsc::UnboundedSender<()>,
    /// Category lists coming back.
    pub categories_res_rx: mpsc::UnboundedReceiver<Vec<Category>>,
    /// Slug lookups into the detail worker.
    pub detail_req_tx: mpsc::UnboundedSender<String>,
    /// Slug resolutions coming back.
    pub detail_res_rx: mpsc::UnboundedReceiver<(String, Result<BlogPost, String>)>,
    /// Validated forms into the contact worker.
    pub contact_req_tx: mpsc::UnboundedSender<ContactForm>,
    /// Submission outcomes coming back.
    pub contact_res_rx: mpsc::UnboundedReceiver<ContactOutcome>,
    /// Human-readable network errors from any worker.
    pub net_err_rx: mpsc::UnboundedReceiver<String>,
}

impl Channels {
    /// What: Create all channels and spawn the background workers.
    ///
    /// Inputs:
    /// - `base_url`: API base URL handed to every worker
    ///
    /// Output:
    /// - A `Channels` struct with every sender and receiver initialized.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();
        let (search_result_tx, results_rx) = mpsc::unbounded_channel::<SearchResults>();
        let (posts_req_tx, posts_req_rx) = mpsc::unbounded_channel::<PostsRequest>();
        let (posts_res_tx, posts_res_rx) = mpsc::unbounded_channel::<PostsResponse>();
        let (categories_req_tx, categories_req_rx) = mpsc::unbounded_channel::<()>();
        let (categories_res_tx, categories_res_rx) = mpsc::unbounded_channel::<Vec<Category>>();
        let (detail_req_tx, detail_req_rx) = mpsc::unbounded_channel::<String>();
        let (detail_res_tx, detail_res_rx) =
            mpsc::unbounded_channel::<(String, Result<BlogPost, String>)>();
        let (contact_req_tx, contact_req_rx) = mpsc::unbounded_channel::<ContactForm>();
        let (contact_res_tx, contact_res_rx) = mpsc::unbounded_channel::<ContactOutcome>();
        let (net_err_tx, net_err_rx) = mpsc::unbounded_channel::<String>();

        workers::search::spawn_search_worker(
            base_url.to_owned(),
            query_rx,
            search_result_tx,
            &net_err_tx,
        );
        workers::posts::spawn_posts_worker(base_url.to_owned(), posts_req_rx, posts_res_tx);
        workers::posts::spawn_categories_worker(
            base_url.to_owned(),
            categories_req_rx,
            categories_res_tx,
        );
        workers::posts::spawn_detail_worker(base_url.to_owned(), detail_req_rx, detail_res_tx);
        workers::contact::spawn_contact_worker(
            base_url.to_owned(),
            contact_req_rx,
            contact_res_tx,
        );

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            query_tx,
            results_rx,
            posts_req_tx,
            posts_res_rx,
            categories_req_tx,
            categories_res_rx,
            detail_req_tx,
            detail_res_rx,
            contact_req_tx,
            contact_res_rx,
            net_err_rx,
        }
    }
}

/// What: Spawn the blocking thread that forwards terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is spawned (tests drive `event_tx`)
/// - `event_tx`: Channel sender for raw events
/// - `event_thread_cancelled`: Cancellation flag checked between polls
///
/// Details:
/// - Polls with a 50ms timeout so cancellation is noticed promptly instead of
///   blocking in `read` after the UI has exited.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // ignore transient read errors and continue
                    }
                },
                Ok(false) => {}
                Err(_) => {
                    // poll failure is unrecoverable for this thread
                    break;
                }
            }
        }
    });
}
