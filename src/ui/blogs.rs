//! Blogs view: post listing with the category sidebar.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph, Wrap},
};

use super::helpers::post_lines;
use crate::state::AppState;
use crate::theme::theme;

/// Render the Blogs page: listing on the left, sidebar on the right.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(area);

    render_listing(f, app, chunks[0]);
    render_sidebar(f, app, chunks[1]);
}

/// Featured listing with loading / error / empty / success phases.
fn render_listing(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let title = app.selected_category.as_ref().map_or_else(
        || " Featured Blogs ".to_owned(),
        |c| format!(" Featured Blogs: {c} "),
    );
    let block = Block::bordered()
        .title(Span::styled(title, Style::default().fg(th.accent)))
        .border_style(Style::default().fg(th.overlay));

    if app.posts_loading {
        let loading = Paragraph::new(Span::styled(
            "Loading posts...",
            Style::default().fg(th.yellow),
        ))
        .block(block);
        f.render_widget(loading, area);
        return;
    }
    if let Some(err) = &app.posts_error {
        let error = Paragraph::new(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(th.red),
        ))
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(error, area);
        return;
    }
    if app.posts.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No posts available.",
            Style::default().fg(th.subtext),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }
    let items: Vec<ListItem> = app
        .posts
        .iter()
        .map(|p| ListItem::new(post_lines(p, 80)))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .highlight_style(
            Style::default()
                .bg(th.surface)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ")
        .block(block);
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// Sidebar: category filter and the latest post titles.
fn render_sidebar(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    let mut cat_lines: Vec<Line> = Vec::new();
    let all_style = if app.selected_category.is_none() {
        Style::default().fg(th.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.subtext)
    };
    cat_lines.push(Line::from(Span::styled("All", all_style)));
    for cat in &app.categories {
        let style = if app.selected_category.as_deref() == Some(cat.name.as_str()) {
            Style::default().fg(th.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext)
        };
        cat_lines.push(Line::from(Span::styled(cat.name.clone(), style)));
    }
    let categories = Paragraph::new(cat_lines).block(
        Block::bordered()
            .title(Span::styled(" Categories ", Style::default().fg(th.accent)))
            .border_style(Style::default().fg(th.overlay)),
    );
    f.render_widget(categories, chunks[0]);

    let latest: Vec<Line> = app
        .posts
        .iter()
        .take(3)
        .map(|p| Line::from(Span::styled(p.title.clone(), Style::default().fg(th.text))))
        .collect();
    let latest = Paragraph::new(latest).wrap(Wrap { trim: true }).block(
        Block::bordered()
            .title(Span::styled(
                " Latest Posts ",
                Style::default().fg(th.accent),
            ))
            .border_style(Style::default().fg(th.overlay)),
    );
    f.render_widget(latest, chunks[1]);
}
