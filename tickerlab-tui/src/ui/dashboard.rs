//! Dashboard — search box and filtered ticker list on the left, the
//! financial summary panel on the right.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use tickerlab_core::summary::SummaryRequestState;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_list(f, halves[0], app);
    render_summary(f, halves[1], app);
}

fn render_list(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::muted());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let dashboard = &app.dashboard;
    let filtered = dashboard.filtered();
    let mut lines: Vec<Line> = Vec::new();

    // Search box
    lines.push(Line::from(vec![
        Span::styled("Search: ", theme::muted()),
        Span::styled(dashboard.search_input.as_str(), theme::accent_bold()),
        Span::styled("_", theme::accent()),
    ]));

    // Match count while a query is active
    if !dashboard.search_input.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Showing {} of {}", filtered.len(), dashboard.catalog.len()),
            theme::muted(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Type to search, Enter to fetch a summary",
            theme::muted(),
        )));
    }
    lines.push(Line::from(""));

    if dashboard.catalog.is_empty() {
        lines.push(Line::from(Span::styled(
            "No catalog data available",
            theme::warning(),
        )));
    } else if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No tickers found matching \"{}\"", dashboard.search_input.trim()),
            theme::warning(),
        )));
        lines.push(Line::from(Span::styled(
            "Try searching by symbol or company name",
            theme::muted(),
        )));
    } else {
        // Window the list so the cursor stays visible.
        let header_rows = lines.len();
        let visible = (inner.height as usize).saturating_sub(header_rows).max(1);
        let start = if dashboard.cursor >= visible {
            dashboard.cursor + 1 - visible
        } else {
            0
        };

        for (i, record) in filtered.iter().enumerate().skip(start).take(visible) {
            let is_cursor = i == dashboard.cursor;
            let symbol_style = if is_cursor {
                theme::accent().add_modifier(Modifier::REVERSED)
            } else {
                theme::accent()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:<6}", record.display_symbol()), symbol_style),
                Span::raw(" "),
                Span::styled(record.display_name().to_string(), theme::text_secondary()),
            ]));
        }
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}

fn render_summary(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Financial Summary",
        theme::accent_bold(),
    )));
    lines.push(Line::from(""));

    match app.dashboard.summary.state() {
        SummaryRequestState::Idle => {
            lines.push(Line::from(Span::styled(
                "Select a ticker and press Enter to view its financial summary.",
                theme::muted(),
            )));
        }
        SummaryRequestState::Loading { ticker, .. } => {
            lines.push(Line::from(vec![
                Span::styled("Loading ", theme::warning()),
                Span::styled(ticker.as_str(), theme::accent_bold()),
                Span::styled("...", theme::warning()),
            ]));
        }
        SummaryRequestState::Failed { message } => {
            lines.push(Line::from(vec![
                Span::styled("Error: ", theme::negative()),
                Span::styled(message.as_str(), theme::negative()),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Select another ticker to retry.",
                theme::muted(),
            )));
        }
        SummaryRequestState::Loaded(summary) => {
            metric_line(&mut lines, "Ticker", summary.ticker.as_str());
            metric_num(&mut lines, "Market Return", summary.market_return * 100.0, true);
            metric_num(
                &mut lines,
                "Portfolio Return",
                summary.portfolio_return * 100.0,
                true,
            );
            metric_num(&mut lines, "Initial Balance", summary.initial_balance, false);
            metric_num(&mut lines, "Final Balance", summary.final_balance, false);
            metric_line(&mut lines, "Episodes", &summary.total_episodes.to_string());
            metric_line(&mut lines, "Data Points", &summary.data_points.to_string());
            metric_line(
                &mut lines,
                "Date Range",
                &format!("{} to {}", summary.start_date, summary.end_date),
            );
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Performance Metrics",
                theme::accent_bold(),
            )));
            if summary.performance_metrics.is_empty() {
                lines.push(Line::from(Span::styled("  (none reported)", theme::muted())));
            } else {
                for (name, value) in &summary.performance_metrics {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {name}: "), theme::muted()),
                        Span::styled(format!("{value:.4}"), theme::metric_color(*value)),
                    ]));
                }
            }
        }
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn metric_line<'a>(lines: &mut Vec<Line<'a>>, label: &str, value: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:>16}: "), theme::muted()),
        Span::styled(value.to_string(), theme::accent()),
    ]));
}

fn metric_num<'a>(lines: &mut Vec<Line<'a>>, label: &str, value: f64, pct: bool) {
    let display = if pct {
        format!("{value:.2}%")
    } else {
        format!("{value:.2}")
    };
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:>16}: "), theme::muted()),
        Span::styled(display, theme::metric_color(value)),
    ]));
}
