//! Search modal and alert overlays.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{centered_rect, post_lines};
use crate::state::{AppState, Modal, SearchSelection};
use crate::theme::theme;

/// Render a small centered alert box.
pub fn render_alert(f: &mut Frame, title: &str, message: &str, area: Rect) {
    let th = theme();
    let rect = centered_rect(60, 7, area);
    f.render_widget(Clear, rect);
    let para = Paragraph::new(message.to_owned())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(th.text).bg(th.surface))
        .block(
            Block::bordered()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(th.red),
                ))
                .title_bottom(Span::styled(
                    " any key to dismiss ",
                    Style::default().fg(th.overlay),
                ))
                .border_style(Style::default().fg(th.red)),
        );
    f.render_widget(para, rect);
}

/// Input text with the caret marked, scrolled so the caret stays visible.
fn input_line(app: &AppState, inner_width: u16) -> String {
    let before: String = app.input.chars().take(app.caret).collect();
    let after: String = app.input.chars().skip(app.caret).collect();
    let mut shown = format!("{before}\u{2588}{after}");
    let avail = inner_width.saturating_sub(2) as usize;
    while shown.width() > avail && !shown.is_empty() {
        shown.remove(0);
    }
    shown
}

/// What: Render the search modal: input, recents/suggestions or results, and
/// the close hint.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state
/// - `area`: Full frame area the modal centers within
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let rect = centered_rect(
        area.width.saturating_sub(12).clamp(40, 90),
        area.height.saturating_sub(6).max(12),
        area,
    );
    f.render_widget(Clear, rect);
    let outer = Block::bordered()
        .title(Span::styled(
            " Search Blogs ",
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            " Press Esc to close ",
            Style::default().fg(th.overlay),
        ))
        .border_style(Style::default().fg(th.accent))
        .style(Style::default().bg(th.surface));
    let inner = outer.inner(rect);
    f.render_widget(outer, rect);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let input = Paragraph::new(input_line(app, chunks[0].width))
        .style(Style::default().fg(th.text))
        .block(
            Block::bordered()
                .title(Span::styled(
                    " Search for blogs, authors, or topics ",
                    Style::default().fg(th.subtext),
                ))
                .border_style(Style::default().fg(th.overlay)),
        );
    f.render_widget(input, chunks[0]);

    if app.searching {
        let loading = Paragraph::new(Span::styled(
            "Searching...",
            Style::default().fg(th.yellow),
        ));
        f.render_widget(loading, chunks[1]);
        return;
    }
    if !app.search_results.is_empty() {
        render_results(f, app, chunks[1]);
        return;
    }
    if app.input.trim().is_empty() {
        render_shortcuts(f, app, chunks[1]);
        return;
    }
    // No results: say so, then offer suggestion chips as alternate queries.
    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(chunks[1]);
    let none = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("No results found for \"{}\"", app.input.trim()),
            Style::default().fg(th.text),
        )),
        Line::from(Span::styled(
            "Try different keywords or check your spelling",
            Style::default().fg(th.subtext),
        )),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(none, body[0]);
    render_shortcuts(f, app, body[1]);
}

/// Result rows with the count header.
fn render_results(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let n = app.search_results.len();
    let plural = if n == 1 { "" } else { "s" };
    let selected = match app.modal {
        Modal::Search {
            selection: SearchSelection::Result(i),
        } => Some(i),
        _ => None,
    };
    let items: Vec<ListItem> = app
        .search_results
        .iter()
        .map(|p| ListItem::new(post_lines(p, 100)))
        .collect();
    let mut state = ratatui::widgets::ListState::default();
    state.select(selected);
    let list = List::new(items)
        .highlight_style(Style::default().bg(th.base).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ")
        .block(
            Block::default().title(Span::styled(
                format!("{n} result{plural} found"),
                Style::default().fg(th.subtext),
            )),
        );
    f.render_stateful_widget(list, area, &mut state);
}

/// Recent searches and suggestion chips; with a typed query only ranked
/// suggestion chips appear (mirroring `AppState::search_shortcuts`).
fn render_shortcuts(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let recents = if app.input.trim().len() < 2 {
        app.recent_values()
    } else {
        Vec::new()
    };
    let rows = app.search_shortcuts();
    let selected = match app.modal {
        Modal::Search {
            selection: SearchSelection::Shortcut(i),
        } => Some(i),
        _ => None,
    };
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i < recents.len() {
                Style::default().fg(th.text)
            } else {
                Style::default().fg(th.accent)
            };
            let prefix = if i < recents.len() { "  " } else { "# " };
            ListItem::new(Line::from(Span::styled(
                format!("{prefix}{row}"),
                style,
            )))
        })
        .collect();
    let title = if recents.is_empty() {
        "Popular Searches & Trending Topics"
    } else {
        "Recent Searches · Popular & Trending"
    };
    let mut state = ratatui::widgets::ListState::default();
    state.select(selected);
    let list = List::new(items)
        .highlight_style(Style::default().bg(th.base).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ")
        .block(
            Block::default().title(Span::styled(title, Style::default().fg(th.subtext))),
        );
    f.render_stateful_widget(list, area, &mut state);
}
