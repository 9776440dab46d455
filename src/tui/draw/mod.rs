//! Drawing: header tabs, page body, input line, key hints.

mod analyzer;
mod chat;
mod header;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app::{App, Page};
use super::constants::ACCENT;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::draw_header(f, app, chunks[0]);
    match app.page {
        Page::Analyzer => analyzer::draw_analyzer(f, app, chunks[1]),
        Page::Chatbot => chat::draw_chat(f, app, chunks[1]),
    }
    draw_input(f, app, chunks[2]);
    draw_hints(f, app, chunks[3]);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.page {
        Page::Analyzer => " Image path (PNG or JPEG) ",
        Page::Chatbot => " Disease name (e.g. 'maize stem borer') ",
    };
    let style = if app.waiting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let input = app.input();
    let paragraph = Paragraph::new(input.text.clone()).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(title),
    );
    f.render_widget(paragraph, area);

    if !app.waiting && area.width > 2 {
        let max_x = area.x + area.width - 2;
        let x = area.x + 1 + input.cursor_chars() as u16;
        f.set_cursor_position((x.min(max_x), area.y + 1));
    }
}

fn draw_hints(f: &mut Frame, app: &App, area: Rect) {
    let hints = if app.waiting {
        "Esc cancel · Ctrl+C quit"
    } else {
        match app.page {
            Page::Analyzer => {
                "Tab chatbot · Enter analyze · Ctrl+S save JSON · Ctrl+Y copy JSON · Ctrl+C quit"
            }
            Page::Chatbot => "Tab analyzer · Enter send · Up/Down scroll · Ctrl+C quit",
        }
    };
    let paragraph = Paragraph::new(hints).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    );
    f.render_widget(paragraph, area);
}
