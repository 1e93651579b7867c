//! About — product blurb with text-to-speech.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use tickerlab_core::speech::PRODUCT_BLURB;

use crate::app::{AppState, SpeechStatus};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("About TickerLab", theme::accent_bold())));
    lines.push(Line::from(""));

    for paragraph in PRODUCT_BLURB.split("\n\n") {
        lines.push(Line::from(Span::styled(
            paragraph.to_string(),
            theme::text_secondary(),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[s] ", theme::accent()),
        Span::styled("read this aloud", theme::muted()),
    ]));
    lines.push(Line::from(""));

    match &app.about.speech {
        SpeechStatus::Idle => {}
        SpeechStatus::Pending => {
            lines.push(Line::from(Span::styled(
                "Generating speech...",
                theme::warning(),
            )));
        }
        SpeechStatus::Ready { audio_url } => {
            lines.push(Line::from(vec![
                Span::styled("Audio ready: ", theme::positive()),
                Span::styled(audio_url.as_str(), theme::accent()),
            ]));
        }
        SpeechStatus::Failed { message } => {
            lines.push(Line::from(vec![
                Span::styled("Speech failed: ", theme::negative()),
                Span::styled(message.as_str(), theme::negative()),
            ]));
        }
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
