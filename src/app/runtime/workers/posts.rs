//! Post, category, and detail fetch workers.

use tokio::sync::mpsc;

use crate::api;
use crate::state::{BlogPost, Category, PostsRequest, PostsResponse};

/// What: Spawn the worker serving home-feed and filtered-list fetches.
///
/// Inputs:
/// - `base_url`: API base URL without trailing slash
/// - `posts_req_rx`: Channel receiver for [`PostsRequest`]s
/// - `posts_res_tx`: Channel sender for [`PostsResponse`]s
///
/// Details:
/// - Each request runs on its own task; responses echo the request so the
///   handler can drop answers for filters the user has already moved past.
pub fn spawn_posts_worker(
    base_url: String,
    mut posts_req_rx: mpsc::UnboundedReceiver<PostsRequest>,
    posts_res_tx: mpsc::UnboundedSender<PostsResponse>,
) {
    tokio::spawn(async move {
        while let Some(request) = posts_req_rx.recv().await {
            let base = base_url.clone();
            let tx = posts_res_tx.clone();
            tokio::spawn(async move {
                let (posts, errors) = match &request {
                    PostsRequest::Recent => api::posts::fetch_recent_posts(&base).await,
                    PostsRequest::All { category } => {
                        api::posts::fetch_all_posts(&base, category.as_deref()).await
                    }
                };
                for e in &errors {
                    tracing::warn!(request = ?request, error = %e, "[Posts] fetch failed");
                }
                let _ = tx.send(PostsResponse {
                    request,
                    posts,
                    errors,
                });
            });
        }
    });
}

/// What: Spawn the worker serving category-list fetches.
///
/// Inputs:
/// - `base_url`: API base URL without trailing slash
/// - `categories_req_rx`: Channel receiver; one unit per refresh request
/// - `categories_res_tx`: Channel sender for the fetched list
///
/// Details:
/// - Failures degrade to an empty list and are logged; the sidebar simply
///   shows only the All filter until a refresh succeeds.
pub fn spawn_categories_worker(
    base_url: String,
    mut categories_req_rx: mpsc::UnboundedReceiver<()>,
    categories_res_tx: mpsc::UnboundedSender<Vec<Category>>,
) {
    tokio::spawn(async move {
        while categories_req_rx.recv().await.is_some() {
            let (categories, errors) = api::posts::fetch_categories(&base_url).await;
            for e in errors {
                tracing::warn!(error = %e, "[Categories] fetch failed");
            }
            let _ = categories_res_tx.send(categories);
        }
    });
}

/// What: Spawn the worker resolving single posts by slug.
///
/// Inputs:
/// - `base_url`: API base URL without trailing slash
/// - `detail_req_rx`: Channel receiver for slugs
/// - `detail_res_tx`: Channel sender for `(slug, result)` pairs
///
/// Details:
/// - The slug is echoed so the handler can ignore resolutions for overlays
///   the user has already closed.
pub fn spawn_detail_worker(
    base_url: String,
    mut detail_req_rx: mpsc::UnboundedReceiver<String>,
    detail_res_tx: mpsc::UnboundedSender<(String, Result<BlogPost, String>)>,
) {
    tokio::spawn(async move {
        while let Some(slug) = detail_req_rx.recv().await {
            let base = base_url.clone();
            let tx = detail_res_tx.clone();
            tokio::spawn(async move {
                let result = match api::posts::fetch_post_by_slug(&base, &slug).await {
                    Ok(post) => Ok(post),
                    Err(e) => {
                        tracing::warn!(slug = %slug, error = %e, "[Detail] fetch failed");
                        Err(format!("Failed to fetch post: {e}"))
                    }
                };
                let _ = tx.send((slug, result));
            });
        }
    });
}
