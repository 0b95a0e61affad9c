//! About view: static page describing the blog.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use crate::theme::theme;

/// Render the about page.
pub fn render(f: &mut Frame, area: Rect) {
    let th = theme();
    let body = vec![
        Line::from(Span::styled(
            "About VAP'D DASHSTEAM",
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "We are a small crew of car enthusiasts writing about automotive \
             culture, performance builds, and the lifestyle around them: from \
             JDM classics and engine tuning to the future of electric \
             performance.",
            Style::default().fg(th.subtext),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Workshop: Basudhara Complex, South Collectoriate Road, Buxar, Bihar, 802103",
            Style::default().fg(th.subtext),
        )),
        Line::from(Span::styled(
            "Email: vapddashsteam@gmail.com   Phone: +91 7488928997",
            Style::default().fg(th.subtext),
        )),
        Line::from(Span::styled(
            "Hours: Mon-Fri 9:00-18:00, Sat 10:00-16:00, Sun closed",
            Style::default().fg(th.subtext),
        )),
    ];
    let about = Paragraph::new(body).wrap(Wrap { trim: true }).block(
        Block::bordered()
            .title(Span::styled(" About us ", Style::default().fg(th.accent)))
            .border_style(Style::default().fg(th.overlay))
            .style(Style::default().bg(th.base)),
    );
    f.render_widget(about, area);
}
