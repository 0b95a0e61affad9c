//! Payload normalization against realistic and hostile response shapes.

use dashsea::api::posts::{list_items, normalize_categories, normalize_posts, parse_post};

#[test]
/// What: A realistic API page parses fully.
///
/// Inputs:
/// - A paginated body with two complete posts as the backend serializes them.
///
/// Output:
/// - Both posts with ids, slugs, optional image handling, and excerpts intact.
fn realistic_page_parses() {
    let body = serde_json::json!({
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {
                "id": 11,
                "title": "The Evolution of JDM Culture",
                "content": "<p>Exploring the rich history of Japanese domestic market cars.</p>",
                "image": "http://localhost:8000/media/posts/jdm.jpg",
                "created_at": "2025-06-01T09:30:00Z",
                "updated_at": "2025-06-02T10:00:00Z",
                "author": "arjun",
                "category": "Culture",
                "excerpt": "Exploring the rich history...",
                "slug": "evolution-of-jdm-culture",
                "status": "published",
                "published_at": "2025-06-01T09:30:00Z"
            },
            {
                "id": 12,
                "title": "Ultimate Guide to Engine Tuning",
                "content": "<p>Master the art of performance tuning.</p>",
                "image": null,
                "created_at": "2025-06-03T12:00:00Z",
                "updated_at": "2025-06-03T12:00:00Z",
                "author": "",
                "category": "Technical",
                "excerpt": null,
                "slug": "ultimate-guide-engine-tuning",
                "status": "published",
                "published_at": "2025-06-03T12:00:00Z"
            }
        ]
    });
    let posts = normalize_posts(&body);
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].slug, "evolution-of-jdm-culture");
    assert!(posts[0].image.as_deref().is_some_and(|u| u.ends_with("jdm.jpg")));
    assert_eq!(posts[1].image, None);
    assert_eq!(posts[1].excerpt, None);
    assert_eq!(posts[1].category, "Technical");
}

#[test]
/// What: Every non-list shape yields an empty list, never a panic.
///
/// Inputs:
/// - Strings, numbers, null, error objects, and a non-array `results`.
///
/// Output:
/// - Empty post and category lists for each.
fn hostile_shapes_normalize_to_empty() {
    for body in [
        serde_json::json!(null),
        serde_json::json!("<html>gateway timeout</html>"),
        serde_json::json!(503),
        serde_json::json!({"detail": "Not found."}),
        serde_json::json!({"results": {"nested": "object"}}),
        serde_json::json!({"results": null}),
    ] {
        assert!(normalize_posts(&body).is_empty(), "body: {body}");
        assert!(normalize_categories(&body).is_empty(), "body: {body}");
        assert!(list_items(&body).is_empty(), "body: {body}");
    }
}

#[test]
/// What: Single-post parsing tolerates sparse objects and rejects junk.
///
/// Inputs:
/// - A minimal titled object and assorted junk values.
///
/// Output:
/// - The titled object parses with defaults; junk parses to `None`.
fn single_post_parsing_rules() {
    let minimal = serde_json::json!({"title": "Bare Minimum"});
    let post = parse_post(&minimal).expect("titled post parses");
    assert_eq!(post.id, 0);
    assert_eq!(post.slug, "");
    assert_eq!(post.image, None);

    assert!(parse_post(&serde_json::json!({"id": 1})).is_none());
    assert!(parse_post(&serde_json::json!({"title": ""})).is_none());
    assert!(parse_post(&serde_json::json!(42)).is_none());
}

#[test]
/// What: Mixed-quality lists keep the good rows.
///
/// Inputs:
/// - A bare array with one full post, one junk row, and one sparse post.
///
/// Output:
/// - Two parsed posts in payload order.
fn mixed_lists_keep_valid_rows() {
    let body = serde_json::json!([
        {"id": 1, "title": "First", "content": "<p>a</p>", "slug": "first"},
        {"oops": true},
        {"title": "Second"},
    ]);
    let posts = normalize_posts(&body);
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].slug, "first");
    assert_eq!(posts[1].title, "Second");
}
