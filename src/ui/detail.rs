//! Post detail overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use super::helpers::centered_rect;
use crate::state::{AppState, Modal};
use crate::theme::theme;
use crate::util::{display_date, html_to_text};

/// Render the detail overlay for the currently opened post.
pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let Modal::Detail { post, scroll, .. } = &app.modal else {
        return;
    };
    let th = theme();
    let rect = centered_rect(
        area.width.saturating_sub(8).max(40),
        area.height.saturating_sub(4).max(10),
        area,
    );
    f.render_widget(Clear, rect);

    let mut byline: Vec<Span> = Vec::new();
    if !post.author.is_empty() {
        byline.push(Span::styled(
            format!("By {} ", post.author),
            Style::default().fg(th.subtext),
        ));
    }
    byline.push(Span::styled(
        format!("on {}", display_date(&post.created_at)),
        Style::default().fg(th.subtext),
    ));
    if !post.category.is_empty() {
        byline.push(Span::styled(
            format!("  |  {}", post.category),
            Style::default().fg(th.yellow),
        ));
    }

    let body = html_to_text(&post.content);
    let mut lines = vec![Line::from(byline), Line::from("")];
    if body.is_empty() {
        lines.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(th.yellow),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            body,
            Style::default().fg(th.text),
        )));
    }

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((*scroll, 0))
        .style(Style::default().bg(th.surface))
        .block(
            Block::bordered()
                .title(Span::styled(
                    format!(" {} ", post.title),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Span::styled(
                    " j/k scroll  Esc close ",
                    Style::default().fg(th.overlay),
                ))
                .border_style(Style::default().fg(th.accent)),
        );
    f.render_widget(para, rect);
}
