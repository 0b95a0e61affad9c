//! Home view: hero banner and the recent-posts feed.

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

/// Render the home page.
pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "VAP'D DASHSTEAM",
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your premium destination for automotive culture, performance, and lifestyle",
            Style::default().fg(th.subtext),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::bordered()
            .border_style(Style::default().fg(th.overlay))
            .style(Style::default().bg(th.base)),
    );
    f.render_widget(hero, chunks[0]);

    let block = Block::bordered()
        .title(Span::styled(
            " Recent Posts ",
            Style::default().fg(th.accent),
        ))
        .border_style(Style::default().fg(th.overlay));

    if app.home_loading {
        let loading = Paragraph::new(Span::styled(
            "Loading recent posts...",
            Style::default().fg(th.yellow),
        ))
        .block(block);
        f.render_widget(loading, chunks[1]);
        return;
    }
    if let Some(err) = &app.home_error {
        let error = Paragraph::new(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(th.red),
        ))
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(error, chunks[1]);
        return;
    }
    if app.home_posts.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No posts available.",
            Style::default().fg(th.subtext),
        ))
        .block(block);
        f.render_widget(empty, chunks[1]);
        return;
    }
    let items: Vec<ListItem> = app
        .home_posts
        .iter()
        .map(|p| ListItem::new(post_lines(p, 60)))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block);
    f.render_widget(list, chunks[1]);
}
