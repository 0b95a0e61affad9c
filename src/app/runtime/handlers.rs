//! Handlers applying worker responses to application state.

use crate::state::{
    AppState, BlogPost, Category, ContactField, ContactForm, ContactOutcome, Modal, PostsRequest,
    PostsResponse, SearchResults, SearchSelection,
};

/// What: Handle a search results update.
///
/// Inputs:
/// - `app`: Application state
/// - `new_results`: Results echoed from the search worker
///
/// Details:
/// - Results whose id does not match the latest issued query are dropped
///   wholesale, so a slow stale response can never clobber a newer one.
/// - A fresh result set resets the modal highlight into the result list.
pub fn handle_search_results(app: &mut AppState, new_results: SearchResults) {
    if new_results.id != app.latest_query_id {
        tracing::debug!(
            stale = new_results.id,
            latest = app.latest_query_id,
            "[Search] dropping stale results"
        );
        return;
    }
    app.searching = false;
    app.search_results = new_results.items;
    if let Modal::Search { selection } = &mut app.modal {
        *selection = if app.search_results.is_empty() {
            SearchSelection::None
        } else {
            SearchSelection::Result(0)
        };
    }
}

/// What: Handle a post-list response for the home feed or the Blogs view.
///
/// Inputs:
/// - `app`: Application state
/// - `resp`: Response echoing its originating request
///
/// Details:
/// - Blogs responses are applied only when their category filter still
///   matches the selected one; answers for abandoned filters are dropped.
/// - Fetch errors surface as the view's error string; a successful fetch
///   clears it.
pub fn handle_posts_response(app: &mut AppState, resp: PostsResponse) {
    match resp.request {
        PostsRequest::Recent => {
            app.home_loading = false;
            app.home_error = resp.errors.first().cloned();
            app.home_posts = resp.posts;
        }
        PostsRequest::All { category } => {
            if category != app.selected_category {
                tracing::debug!(
                    got = ?category,
                    want = ?app.selected_category,
                    "[Posts] dropping list for abandoned filter"
                );
                return;
            }
            app.posts_loading = false;
            app.posts_error = resp.errors.first().cloned();
            app.posts = resp.posts;
            app.clamp_selection();
        }
    }
}

/// What: Handle a categories update.
///
/// Inputs:
/// - `app`: Application state
/// - `categories`: Fetched category list (empty on failure)
pub fn handle_categories(app: &mut AppState, categories: Vec<Category>) {
    app.categories = categories;
}

/// What: Handle a slug resolution for the detail overlay.
///
/// Inputs:
/// - `app`: Application state
/// - `slug`: Slug the resolution answers
/// - `result`: Fresh post or an error message
///
/// Details:
/// - Applies only while a detail overlay for the same slug is open.
/// - A fetch error replaces the overlay with an error state only when the
///   local copy has no body to show; otherwise the stale-but-present copy
///   stays up and the failure is logged.
pub fn handle_detail_result(app: &mut AppState, slug: &str, result: Result<BlogPost, String>) {
    let (scroll, from_search, body_empty) = match &app.modal {
        Modal::Detail {
            post,
            scroll,
            from_search,
        } if post.slug == slug => (*scroll, *from_search, post.content.is_empty()),
        _ => return,
    };
    match result {
        Ok(fresh) => {
            app.modal = Modal::Detail {
                post: Box::new(fresh),
                scroll,
                from_search,
            };
        }
        Err(message) => {
            if body_empty {
                app.modal = Modal::DetailError { message };
            } else {
                tracing::debug!(slug = %slug, error = %message, "[Detail] keeping local copy after refresh failure");
            }
        }
    }
}

/// What: Handle a contact submission outcome.
///
/// Inputs:
/// - `app`: Application state
/// - `outcome`: Success or error text from the contact worker
///
/// Details:
/// - Success clears the form and returns focus to the first field, matching
///   the public site's post-submit reset.
pub fn handle_contact_outcome(app: &mut AppState, outcome: ContactOutcome) {
    app.contact_sending = false;
    if outcome.result.is_ok() {
        app.contact = ContactForm::default();
        app.contact_focus = ContactField::Name;
    }
    app.contact_status = Some(outcome.result);
}
