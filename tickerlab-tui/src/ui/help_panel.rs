//! Help — key reference.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Global", theme::accent_bold())));
    key_line(&mut lines, "Tab / Shift+Tab", "next / previous screen");
    key_line(&mut lines, "Ctrl+C", "quit from anywhere");
    key_line(&mut lines, "q", "quit (outside the dashboard)");
    key_line(&mut lines, "1-4", "jump to screen (outside the dashboard)");
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Dashboard", theme::accent_bold())));
    key_line(&mut lines, "a-z 0-9 ...", "type into the search box");
    key_line(&mut lines, "Backspace", "delete the last character");
    key_line(&mut lines, "Esc", "clear the search box");
    key_line(&mut lines, "Up / Down", "move the cursor");
    key_line(&mut lines, "Enter", "fetch the financial summary");
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("About", theme::accent_bold())));
    key_line(&mut lines, "s", "read the product blurb aloud");
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Help", theme::accent_bold())));
    key_line(&mut lines, "e", "open the error history overlay");

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn key_line<'a>(lines: &mut Vec<Line<'a>>, key: &str, what: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {key:>16}  "), theme::accent()),
        Span::styled(what.to_string(), theme::muted()),
    ]));
}
