//! Analyzer page: status banner, confidence gauge, and advice panels.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

use crate::core::format::{BulletItem, Segment};
use crate::core::report::{AdvicePanel, DiseaseReport, NO_INFORMATION};

use super::super::app::App;
use super::super::constants::{ACCENT, CHECK_PREFIX, bucket_color};
use super::super::text::segment_spans;

pub(super) fn draw_analyzer(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    draw_banner(f, app, chunks[0]);

    if app.waiting {
        let spinner = Paragraph::new("AI is analyzing the image...")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        f.render_widget(spinner, chunks[1]);
        return;
    }

    match app.report.as_ref() {
        Some(report) => draw_report(f, report, chunks[1]),
        None => draw_welcome(f, chunks[1]),
    }
}

/// One-line banner: error (red) takes precedence over status.
fn draw_banner(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(err) = app.error.as_ref() {
        Line::from(vec![
            Span::styled("Error: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(err.clone(), Style::default().fg(Color::Red)),
        ])
    } else if let Some(status) = app.status.as_ref() {
        Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_welcome(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from("Type the path to a leaf photo below and press Enter."),
        Line::default(),
        Line::from(Span::styled(
            "The backend returns the detected disease, a confidence score,",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "and advice on symptoms, causes, prevention, and treatment.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines).centered(), area);
}

fn draw_report(f: &mut Frame, report: &DiseaseReport, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_summary(f, report, chunks[0]);
    draw_panels(f, report, chunks[1]);
}

/// Top row: detected disease on the left, confidence gauge on the right.
fn draw_summary(f: &mut Frame, report: &DiseaseReport, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let disease = Paragraph::new(vec![
        Line::from(Span::styled(
            "Detected Disease",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            report.predicted_class.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ]);
    f.render_widget(disease, chunks[0]);

    let color = bucket_color(report.confidence.bucket);
    let gauge = Gauge::default()
        .block(Block::default().title("Confidence Score"))
        .gauge_style(Style::default().fg(color))
        .ratio(report.confidence.arc_fraction)
        .label(Span::styled(
            format!("{}%", report.confidence.percentage),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, chunks[1]);
}

/// 2x2 grid: Symptoms | Causes / Prevention | Treatment.
fn draw_panels(f: &mut Frame, report: &DiseaseReport, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    for (row_idx, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        for (col_idx, col) in cols.iter().enumerate() {
            if let Some(panel) = report.panels.get(row_idx * 2 + col_idx) {
                draw_panel(f, panel, *col);
            }
        }
    }
}

fn draw_panel(f: &mut Frame, panel: &AdvicePanel, area: Rect) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    if panel.items.is_empty() {
        lines.push(Line::from(Span::styled(
            NO_INFORMATION,
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for item in &panel.items {
            lines.extend(item_lines(item));
        }
    }
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", panel.title),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(paragraph, area);
}

/// A checklist item as display lines: the first line carries the check
/// mark, internal newlines continue indented.
fn item_lines(item: &BulletItem) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = vec![Span::styled(
        CHECK_PREFIX,
        Style::default().fg(ACCENT),
    )];
    for seg in item {
        if matches!(seg, Segment::Plain(s) if s == "\n") {
            lines.push(Line::from(std::mem::take(&mut current)));
            current.push(Span::raw("  "));
            continue;
        }
        current.extend(segment_spans(std::slice::from_ref(seg), Style::default()));
    }
    lines.push(Line::from(current));
    lines
}
