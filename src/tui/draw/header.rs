//! Header line: logo, page tabs, spinner, version.

use std::sync::OnceLock;
use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app;

use super::super::app::{App, Page};
use super::super::constants::{ACCENT, SPINNER};

/// Start time for the spinner animation phase.
static HEADER_START: OnceLock<Instant> = OnceLock::new();

fn spinner_frame() -> &'static str {
    let start = HEADER_START.get_or_init(Instant::now);
    let phase = start.elapsed().as_millis() as usize;
    SPINNER[(phase / 80) % SPINNER.len()]
}

fn tab(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!(" {} ", label), style)
}

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(area);

    let logo = if app.waiting { spinner_frame() } else { "❀" };
    let line = Line::from(vec![
        Span::styled(
            format!("{} {} ", logo, app::NAME),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        tab("Analyzer", app.page == Page::Analyzer),
        Span::raw(" "),
        tab("Chatbot", app.page == Page::Chatbot),
    ]);
    f.render_widget(Paragraph::new(line), chunks[0]);

    let version = Paragraph::new(Line::from(Span::styled(
        format!("v{}", app::VERSION),
        Style::default().fg(Color::DarkGray),
    )))
    .right_aligned();
    f.render_widget(version, chunks[1]);
}
