//! Contact view: the message form and its status banner.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use crate::state::{AppState, ContactField, ContactForm};
use crate::theme::theme;

/// Text of a given form field (render-side counterpart of the event handler).
fn field_text<'a>(form: &'a ContactForm, field: ContactField) -> &'a str {
    match field {
        ContactField::Name => &form.name,
        ContactField::Email => &form.email,
        ContactField::Phone => &form.phone,
        ContactField::Company => &form.company,
        ContactField::Subject => &form.subject,
        ContactField::Message => &form.message,
    }
}

/// Render the contact page.
pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let outer = Block::bordered()
        .title(Span::styled(
            " Send Us Your Message ",
            Style::default().fg(th.accent),
        ))
        .border_style(Style::default().fg(th.overlay))
        .style(Style::default().bg(th.base));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    // One row per single-line field, a taller message box, and the banner.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(inner);

    let single_line = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::Subject,
    ];
    for (i, field) in single_line.into_iter().enumerate() {
        render_field(f, app, field, chunks[i]);
    }
    render_field(f, app, ContactField::Message, chunks[5]);
    render_status(f, app, chunks[6]);
}

/// Render one labeled input box, highlighting the focused field.
fn render_field(f: &mut Frame, app: &AppState, field: ContactField, area: Rect) {
    let th = theme();
    let focused = app.contact_focus == field;
    let border = if focused {
        Style::default().fg(th.accent)
    } else {
        Style::default().fg(th.overlay)
    };
    let label_style = if focused {
        Style::default().fg(th.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.subtext)
    };
    let text = field_text(&app.contact, field);
    let shown = if focused {
        format!("{text}\u{2588}")
    } else {
        text.to_owned()
    };
    let input = Paragraph::new(shown)
        .style(Style::default().fg(th.text))
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .title(Span::styled(format!(" {} ", field.label()), label_style))
                .border_style(border),
        );
    f.render_widget(input, area);
}

/// Render the status banner: sending, success, or error.
fn render_status(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = if app.contact_sending {
        Line::from(Span::styled("Sending...", Style::default().fg(th.yellow)))
    } else {
        match &app.contact_status {
            Some(Ok(msg)) => Line::from(Span::styled(msg.clone(), Style::default().fg(th.green))),
            Some(Err(msg)) => Line::from(Span::styled(msg.clone(), Style::default().fg(th.red))),
            None => Line::from(Span::styled(
                "Ctrl+S to send",
                Style::default().fg(th.overlay),
            )),
        }
    };
    f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}
