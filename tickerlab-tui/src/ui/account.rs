//! Account — static profile card, display only.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Profile Information", theme::accent_bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Full Name: ", theme::muted()),
            Span::styled("John Doe", theme::text_secondary()),
        ]),
        Line::from(vec![
            Span::styled("      Email: ", theme::muted()),
            Span::styled("john@example.com", theme::text_secondary()),
        ]),
        Line::from(vec![
            Span::styled("       Plan: ", theme::muted()),
            Span::styled("Free tier", theme::text_secondary()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Profile editing is not available in the terminal client.",
            theme::muted(),
        )),
    ];

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
