//! Debounced search worker.

use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};

use crate::api;
use crate::state::{QueryInput, SearchResults};

/// Quiet interval a query must survive before it reaches the network.
pub const DEBOUNCE_MS: u64 = 300;

/// What: Spawn the background worker for search queries.
///
/// Inputs:
/// - `base_url`: API base URL without trailing slash
/// - `query_rx`: Channel receiver for search queries
/// - `search_result_tx`: Channel sender for search results
/// - `net_err_tx`: Channel sender for network errors
///
/// Details:
/// - Debounces queries with a 300ms window: every newly arriving query
///   restarts the window, so only the last query typed before a pause fires.
/// - Empty/whitespace queries short-circuit to an empty result set without
///   touching the network.
/// - Each fetch runs on its own task so a slow response never delays newer
///   queries; the results handler drops stale responses by id.
pub fn spawn_search_worker(
    base_url: String,
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    search_result_tx: mpsc::UnboundedSender<SearchResults>,
    net_err_tx: &mpsc::UnboundedSender<String>,
) {
    let net_err_tx_search = net_err_tx.clone();
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = query_rx.recv().await else {
                break;
            };
            loop {
                select! { Some(new_q) = query_rx.recv() => { latest = new_q; } () = sleep(Duration::from_millis(DEBOUNCE_MS)) => { break; } }
            }
            if latest.text.trim().is_empty() {
                let _ = search_result_tx.send(SearchResults {
                    id: latest.id,
                    items: Vec::new(),
                });
                continue;
            }
            let base = base_url.clone();
            let qtext = latest.text.clone();
            let sid = latest.id;
            let tx = search_result_tx.clone();
            let err_tx = net_err_tx_search.clone();
            tokio::spawn(async move {
                let (items, errors) = api::posts::search_posts(&base, &qtext).await;
                for e in errors {
                    tracing::warn!(query = %qtext, error = %e, "[Search] fetch failed");
                    let _ = err_tx.send(e);
                }
                let _ = tx.send(SearchResults { id: sid, items });
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    /// What: Rapid-fire queries collapse to one response for the last query.
    ///
    /// Inputs:
    /// - Three empty-text queries sent within the debounce window (empty text
    ///   keeps the worker off the network so the test stays hermetic).
    ///
    /// Output:
    /// - Exactly one `SearchResults` arrives, echoing the final query id.
    async fn debounce_collapses_to_last_query() {
        let (query_tx, query_rx) = mpsc::unbounded_channel();
        let (result_tx, mut result_rx) = mpsc::unbounded_channel();
        let (err_tx, _err_rx) = mpsc::unbounded_channel();
        spawn_search_worker(
            "http://localhost:8000".into(),
            query_rx,
            result_tx,
            &err_tx,
        );

        for id in 1..=3u64 {
            let _ = query_tx.send(QueryInput {
                id,
                text: String::new(),
            });
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS + 50)).await;

        let first = result_rx.recv().await.expect("one result expected");
        assert_eq!(first.id, 3);
        assert!(first.items.is_empty());
        assert!(result_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    /// What: Whitespace queries clear results without network traffic.
    ///
    /// Inputs:
    /// - A single `"   "` query.
    ///
    /// Output:
    /// - An empty result set echoing the query id; no error messages.
    async fn whitespace_query_short_circuits() {
        let (query_tx, query_rx) = mpsc::unbounded_channel();
        let (result_tx, mut result_rx) = mpsc::unbounded_channel();
        let (err_tx, mut err_rx) = mpsc::unbounded_channel();
        spawn_search_worker(
            "http://localhost:8000".into(),
            query_rx,
            result_tx,
            &err_tx,
        );

        let _ = query_tx.send(QueryInput {
            id: 7,
            text: "   ".into(),
        });
        tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS + 50)).await;

        let res = result_rx.recv().await.expect("one result expected");
        assert_eq!(res.id, 7);
        assert!(res.items.is_empty());
        assert!(err_rx.try_recv().is_err());
    }
}
