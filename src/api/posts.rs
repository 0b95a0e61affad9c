//! Post and category fetching plus payload normalization.

use serde_json::Value;

use crate::state::{BlogPost, Category};
use crate::util::{opt_s, percent_encode, s};

/// What: Extract the item array from a list payload.
///
/// Inputs:
/// - `v`: Parsed response body.
///
/// Output:
/// - The items when the payload is a bare array or a paginated
///   `{"results": [...]}` object; an empty slice for any other shape.
#[must_use]
pub fn list_items(v: &Value) -> &[Value] {
    if let Some(arr) = v.as_array() {
        return arr;
    }
    if let Some(arr) = v.get("results").and_then(Value::as_array) {
        return arr;
    }
    &[]
}

/// What: Parse a single post object.
///
/// Inputs:
/// - `v`: JSON object for one post.
///
/// Output:
/// - `Some(BlogPost)` when a title is present; `None` for junk entries.
///
/// Details:
/// - Missing optional fields default to empty; a row with no title renders as
///   nothing useful, so it is skipped rather than surfaced.
#[must_use]
pub fn parse_post(v: &Value) -> Option<BlogPost> {
    let title = s(v, "title");
    if title.is_empty() {
        return None;
    }
    Some(BlogPost {
        id: v.get("id").and_then(Value::as_i64).unwrap_or_default(),
        title,
        content: s(v, "content"),
        image: opt_s(v, "image"),
        created_at: s(v, "created_at"),
        updated_at: s(v, "updated_at"),
        author: s(v, "author"),
        category: s(v, "category"),
        slug: s(v, "slug"),
        excerpt: opt_s(v, "excerpt"),
    })
}

/// What: Normalize a list payload into posts.
///
/// Inputs:
/// - `v`: Parsed response body (array, paginated object, or anything else).
///
/// Output:
/// - Posts in payload order; empty on shape mismatch. Never fails.
#[must_use]
pub fn normalize_posts(v: &Value) -> Vec<BlogPost> {
    list_items(v).iter().filter_map(parse_post).collect()
}

/// What: Normalize a list payload into categories.
///
/// Inputs:
/// - `v`: Parsed response body.
///
/// Output:
/// - Categories with non-empty names; empty on shape mismatch. Never fails.
#[must_use]
pub fn normalize_categories(v: &Value) -> Vec<Category> {
    list_items(v)
        .iter()
        .filter_map(|c| {
            let name = s(c, "name");
            if name.is_empty() {
                return None;
            }
            Some(Category {
                id: c.get("id").and_then(Value::as_i64).unwrap_or_default(),
                name,
            })
        })
        .collect()
}

/// What: Fetch the home feed (newest published posts).
///
/// Inputs:
/// - `base`: API base URL without trailing slash.
///
/// Output:
/// - `(posts, errors)`; empty posts plus one error string on any failure.
pub async fn fetch_recent_posts(base: &str) -> (Vec<BlogPost>, Vec<String>) {
    let url = format!("{base}/api/recent-posts/");
    match super::get_json(&url).await {
        Ok(v) => (normalize_posts(&v), Vec::new()),
        Err(e) => (Vec::new(), vec![format!("Recent posts unavailable: {e}")]),
    }
}

/// What: Fetch the full post listing, optionally filtered by category.
///
/// Inputs:
/// - `base`: API base URL without trailing slash.
/// - `category`: Category name filter; `None` fetches everything.
///
/// Output:
/// - `(posts, errors)`; empty posts plus one error string on any failure.
pub async fn fetch_all_posts(base: &str, category: Option<&str>) -> (Vec<BlogPost>, Vec<String>) {
    let url = category.map_or_else(
        || format!("{base}/api/all-posts/"),
        |c| format!("{base}/api/all-posts/?category={}", percent_encode(c)),
    );
    match super::get_json(&url).await {
        Ok(v) => (normalize_posts(&v), Vec::new()),
        Err(e) => (Vec::new(), vec![format!("Posts unavailable: {e}")]),
    }
}

/// What: Free-text post search.
///
/// Inputs:
/// - `base`: API base URL without trailing slash.
/// - `query`: Raw query text (encoded here).
///
/// Output:
/// - `(posts, errors)`; empty posts plus one error string on any failure.
pub async fn search_posts(base: &str, query: &str) -> (Vec<BlogPost>, Vec<String>) {
    let url = format!(
        "{base}/api/posts/?search={}",
        percent_encode(query.trim())
    );
    match super::get_json(&url).await {
        Ok(v) => (normalize_posts(&v), Vec::new()),
        Err(e) => (Vec::new(), vec![format!("Search unavailable: {e}")]),
    }
}

/// What: Resolve a single post by its slug.
///
/// Inputs:
/// - `base`: API base URL without trailing slash.
/// - `slug`: URL-safe post identifier.
///
/// Output:
/// - The post, or an error for 404s, transport failures, and junk payloads.
pub async fn fetch_post_by_slug(base: &str, slug: &str) -> super::Result<BlogPost> {
    let url = format!("{base}/api/posts/by-slug/{}/", percent_encode(slug));
    let v = super::get_json(&url).await?;
    parse_post(&v).ok_or_else(|| format!("no post found for slug '{slug}'").into())
}

/// What: Fetch the category list.
///
/// Inputs:
/// - `base`: API base URL without trailing slash.
///
/// Output:
/// - `(categories, errors)`; empty plus one error string on any failure.
pub async fn fetch_categories(base: &str) -> (Vec<Category>, Vec<String>) {
    let url = format!("{base}/api/categories/");
    match super::get_json(&url).await {
        Ok(v) => (normalize_categories(&v), Vec::new()),
        Err(e) => (Vec::new(), vec![format!("Categories unavailable: {e}")]),
    }
}
