//! Rendering layer: page chrome, per-view content, and modal overlays.

mod about;
mod blogs;
mod contact;
mod detail;
mod helpers;
mod home;
mod modals;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::{AppState, Modal, View};
use crate::theme::theme;

/// What: Render one full frame: header tabs, the current view, the footer
/// hints, and any modal overlay on top.
///
/// Inputs:
/// - `f`: Ratatui frame
/// - `app`: Application state (mutable for list-state widgets)
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    // Background
    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    match app.view {
        View::Home => home::render(f, app, chunks[1]),
        View::Blogs => blogs::render(f, app, chunks[1]),
        View::About => about::render(f, chunks[1]),
        View::Contact => contact::render(f, app, chunks[1]),
    }
    render_footer(f, app, chunks[2]);

    match &app.modal {
        Modal::None => {}
        Modal::Search { .. } => modals::render_search(f, app, area),
        Modal::Detail { .. } => detail::render(f, app, area),
        Modal::DetailError { message } => modals::render_alert(f, "Post", message, area),
        Modal::Alert { message } => modals::render_alert(f, "Notice", message, area),
    }
}

/// Header bar: brand, view tabs, and the search hint.
fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut spans: Vec<Span> = vec![
        Span::styled(
            " VAP'D DASHSTEAM ",
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(th.overlay)),
    ];
    for (i, view) in View::ORDER.iter().enumerate() {
        let style = if *view == app.view {
            Style::default().fg(th.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext)
        };
        spans.push(Span::styled(format!("[{}] {}", i + 1, view.title()), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        "   Ctrl+K Search",
        Style::default().fg(th.overlay),
    ));
    let header = Paragraph::new(Line::from(spans)).block(
        Block::bordered()
            .border_style(Style::default().fg(th.overlay))
            .style(Style::default().bg(th.base)),
    );
    f.render_widget(header, area);
}

/// Footer: one line of key hints for the current context.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let hints = match app.view {
        View::Blogs => "j/k move  Enter open  [ ] category  r refresh  Tab views  q quit",
        View::Contact => "Tab/Enter next field  Ctrl+S send  Esc clear status  Ctrl+C quit",
        _ => "Tab views  Ctrl+K search  q quit",
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(th.overlay),
    )));
    f.render_widget(footer, area);
}
