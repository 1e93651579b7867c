//! Neon theme tokens — style helpers shared by every renderer.
//!
//! Palette:
//! - **Accent**: electric cyan (focus, highlights, selected rows)
//! - **Positive**: neon green (gains, success)
//! - **Negative**: hot pink (losses, failures)
//! - **Warning**: neon orange (alerts)
//! - **Neutral**: cool purple (secondary info)
//! - **Muted**: steel blue (hints, disabled)

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0, 255, 255);
const POSITIVE: Color = Color::Rgb(0, 255, 128);
const NEGATIVE: Color = Color::Rgb(255, 20, 147);
const WARNING: Color = Color::Rgb(255, 140, 0);
const NEUTRAL: Color = Color::Rgb(147, 112, 219);
const MUTED: Color = Color::Rgb(100, 149, 237);
const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text_secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Color for a signed metric: green for gains, pink for losses.
pub fn metric_color(value: f64) -> Style {
    if value >= 0.0 {
        positive()
    } else {
        negative()
    }
}
