//! Early-exit command-line modes: fetch once, print, exit.

use crate::api;
use crate::util::{display_date, html_to_text};

/// Base URL from settings, shared by every CLI mode.
fn base_url() -> String {
    crate::theme::load_settings().base_url()
}

/// What: Handle command-line search mode.
///
/// Inputs:
/// - `query`: Search text.
///
/// Output:
/// - Prints one line per match (`date  title  [category]`) and exits; exit
///   code 1 when the fetch failed.
pub async fn handle_search(query: &str) {
    tracing::info!(query = %query, "Search mode requested from CLI");
    let (posts, errors) = api::posts::search_posts(&base_url(), query).await;
    for e in &errors {
        eprintln!("{e}");
    }
    if posts.is_empty() && errors.is_empty() {
        println!("No results found for \"{query}\"");
    }
    for p in &posts {
        let cat = if p.category.is_empty() {
            String::new()
        } else {
            format!("  [{}]", p.category)
        };
        println!("{}  {}{}", display_date(&p.created_at), p.title, cat);
    }
    std::process::exit(i32::from(!errors.is_empty()));
}

/// What: Handle command-line single-post mode.
///
/// Inputs:
/// - `slug`: Post slug to resolve.
///
/// Output:
/// - Prints the post header and plain-text body and exits; exit code 1 when
///   the slug did not resolve.
pub async fn handle_post(slug: &str) {
    tracing::info!(slug = %slug, "Post mode requested from CLI");
    match api::posts::fetch_post_by_slug(&base_url(), slug).await {
        Ok(post) => {
            println!("{}", post.title);
            let mut byline = String::new();
            if !post.author.is_empty() {
                byline.push_str(&format!("By {} ", post.author));
            }
            byline.push_str(&format!("on {}", display_date(&post.created_at)));
            if !post.category.is_empty() {
                byline.push_str(&format!("  |  {}", post.category));
            }
            println!("{byline}");
            println!();
            println!("{}", html_to_text(&post.content));
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Failed to fetch post: {e}");
            std::process::exit(1);
        }
    }
}

/// What: Handle command-line categories mode.
///
/// Output:
/// - Prints one category name per line and exits; exit code 1 on failure.
pub async fn handle_categories() {
    tracing::info!("Categories mode requested from CLI");
    let (categories, errors) = api::posts::fetch_categories(&base_url()).await;
    for e in &errors {
        eprintln!("{e}");
    }
    for c in &categories {
        println!("{}", c.name);
    }
    std::process::exit(i32::from(!errors.is_empty()));
}
