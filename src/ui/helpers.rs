//! Small shared rendering helpers.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::state::BlogPost;
use crate::theme::theme;
use crate::util::{display_date, excerpt};

/// What: Center a fixed-size rectangle inside an area.
///
/// Inputs:
/// - `width`/`height`: Desired size, clamped to the available area
/// - `area`: Containing rectangle
///
/// Output: Centered sub-rectangle.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// What: Render a post as a two-line list entry (title, then byline and
/// excerpt).
///
/// Inputs:
/// - `post`: Post to summarize
/// - `excerpt_chars`: Excerpt length bound
///
/// Output: Lines for a ratatui `ListItem`.
#[must_use]
pub fn post_lines(post: &BlogPost, excerpt_chars: usize) -> Vec<Line<'static>> {
    let th = theme();
    let mut title = vec![Span::styled(
        post.title.clone(),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )];
    if !post.category.is_empty() {
        title.push(Span::styled(
            format!("  #{}", post.category),
            Style::default().fg(th.yellow),
        ));
    }
    let mut meta: Vec<Span> = Vec::new();
    if !post.author.is_empty() {
        meta.push(Span::styled(
            format!("{} · ", post.author),
            Style::default().fg(th.subtext),
        ));
    }
    meta.push(Span::styled(
        display_date(&post.created_at),
        Style::default().fg(th.subtext),
    ));
    let summary = post
        .excerpt
        .clone()
        .unwrap_or_else(|| excerpt(&post.content, excerpt_chars));
    if !summary.is_empty() {
        meta.push(Span::styled(
            format!("  {summary}"),
            Style::default().fg(th.subtext),
        ));
    }
    vec![Line::from(title), Line::from(meta)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Centered rectangles are clamped and positioned inside the area
    ///
    /// - Input: Area 100x40 with a 60x20 request and an oversized request
    /// - Output: Centered rect; clamped to the area when too large
    fn centered_rect_clamps_and_centers() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(60, 20, area);
        assert_eq!((r.x, r.y, r.width, r.height), (20, 10, 60, 20));
        let big = centered_rect(200, 90, area);
        assert_eq!((big.width, big.height), (100, 40));
    }

    #[test]
    /// What: Post rows prefer the server excerpt and fall back to extraction
    ///
    /// - Input: Post with a server excerpt; post with only HTML content
    /// - Output: Both render two lines with non-empty metadata
    fn post_lines_excerpt_sources() {
        let with_excerpt = BlogPost {
            title: "Alignment Basics".into(),
            excerpt: Some("Camber, caster, toe.".into()),
            created_at: "2025-03-10T08:00:00Z".into(),
            ..BlogPost::default()
        };
        let lines = post_lines(&with_excerpt, 40);
        assert_eq!(lines.len(), 2);

        let html_only = BlogPost {
            title: "Oil Myths".into(),
            content: "<p>Thicker is not always better</p>".into(),
            ..BlogPost::default()
        };
        let lines = post_lines(&html_only, 40);
        let meta: String = lines[1]
            .spans
            .iter()
            .map(|s| s.content.clone().into_owned())
            .collect();
        assert!(meta.contains("Thicker is not always better"));
    }
}
