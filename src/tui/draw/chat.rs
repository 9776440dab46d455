//! Chatbot page: transcript with bold-aware bot messages.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::{App, ChatMessage, Sender};
use super::super::constants::{ACCENT, ACCENT_SECONDARY};
use super::super::text::{line_spans, wrap_message};

const BOT_PREFIX: &str = "Bot › ";
const USER_PREFIX: &str = "You › ";

/// Render one message into display lines, wrapped to `width`. Bot text
/// goes through the segment formatter so `**bold**` renders bold; user
/// text is shown verbatim.
fn message_lines(msg: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    let (prefix, prefix_style, body_style) = match msg.sender {
        Sender::Bot => (
            BOT_PREFIX,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            Style::default(),
        ),
        Sender::User => (
            USER_PREFIX,
            Style::default()
                .fg(ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(ACCENT_SECONDARY),
        ),
    };
    let stamp = msg.at.format("%H:%M").to_string();
    let indent = " ".repeat(prefix.chars().count());
    let body_width = width.saturating_sub(indent.chars().count()).max(1);

    let mut lines = Vec::new();
    let mut first = true;
    for chunk in wrap_message(&msg.text, body_width) {
        let mut spans = Vec::new();
        if first {
            spans.push(Span::styled(
                format!("{} ", stamp),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(prefix.to_string(), prefix_style));
            first = false;
        } else {
            spans.push(Span::raw(format!("      {}", indent)));
        }
        match msg.sender {
            Sender::Bot => spans.extend(line_spans(&chunk, body_style)),
            Sender::User => spans.push(Span::styled(chunk, body_style)),
        }
        lines.push(Line::from(spans));
    }
    lines
}

pub(super) fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Plant Doctor Assistant ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width.saturating_sub(7).max(1) as usize; // timestamp column
    let mut lines: Vec<Line<'static>> = Vec::new();
    for msg in &app.messages {
        lines.extend(message_lines(msg, width));
        lines.push(Line::default());
    }
    if app.waiting {
        lines.push(Line::from(Span::styled(
            "The assistant is thinking...",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    // Follow the bottom unless the user scrolled up; clamp the offset so
    // scrolling never runs past the first line.
    let height = inner.height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    if app.scroll > max_scroll {
        app.scroll = max_scroll;
    }
    let top = max_scroll - app.scroll;

    let paragraph = Paragraph::new(lines).scroll((top as u16, 0));
    f.render_widget(paragraph, inner);
}
