//! Overlay widgets — welcome and error history.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to TickerLab ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Type to search the ticker catalog",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Move the cursor with Up/Down",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press Enter to fetch a financial summary",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. The analysis backend must be running locally",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme::negative());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    // One line per record, newest first; the scroll position is highlighted.
    let visible_height = inner.height as usize;
    let start = app.error_scroll;
    let end = (start + visible_height).min(app.error_history.len());

    let lines: Vec<Line> = app
        .error_history
        .iter()
        .enumerate()
        .skip(start)
        .take(end - start)
        .map(|(i, err)| {
            let message_style = if i == app.error_scroll {
                theme::negative().add_modifier(Modifier::BOLD)
            } else {
                theme::muted()
            };

            let mut spans = vec![
                Span::styled(
                    format!("{} ", err.timestamp.format("%H:%M:%S")),
                    theme::muted(),
                ),
                Span::styled(format!("{:<3} ", err.category.label()), theme::warning()),
                Span::styled(&err.message, message_style),
            ];
            if !err.context.is_empty() {
                spans.push(Span::styled(format!("  ({})", err.context), theme::muted()));
            }
            Line::from(spans)
        })
        .collect();

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}
