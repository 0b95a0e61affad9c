//! HTTP data access for the blog API.
//!
//! Thin wrappers over a shared [`reqwest::Client`]. List-shaped calls follow
//! the `(items, errors)` contract: they never propagate failures to callers
//! and instead degrade to empty lists plus human-readable error strings the
//! runtime can log or surface. Only the single-post lookup returns a real
//! `Result`, because the detail view needs an error state of its own.

pub mod contact;
pub mod posts;

use std::sync::OnceLock;

/// Crate-wide error alias for fallible fetch internals.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Shared HTTP client (connection pooling across all workers).
pub(crate) fn client() -> &'static reqwest::Client {
    CLIENT.get_or_init(reqwest::Client::new)
}

/// What: GET a URL and parse the body as JSON.
///
/// Inputs:
/// - `url`: Absolute URL to fetch.
///
/// Output:
/// - Parsed [`serde_json::Value`] on success; an error for transport
///   failures, non-2xx statuses, and unparseable bodies.
pub(crate) async fn get_json(url: &str) -> Result<serde_json::Value> {
    let resp = client().get(url).send().await?;
    if !resp.status().is_success() {
        return Err(format!("request failed: {} for {url}", resp.status()).into());
    }
    Ok(resp.json::<serde_json::Value>().await?)
}
