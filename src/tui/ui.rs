//! UI rendering for the TUI.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::{format_date, format_time, Schedulable};
use crate::features::nlp::{MatchKind, ParsedTask, Priority};
use crate::features::quick_entry::chips;
use crate::tui::app::App;

const HELP: &str = "Enter:create | Up/Down:select | Ctrl-D:complete | Esc:quit";

const fn kind_color(kind: MatchKind) -> Color {
    match kind {
        MatchKind::Date => Color::Cyan,
        MatchKind::Time => Color::Magenta,
        MatchKind::Priority => Color::Red,
    }
}

/// Split `text` into spans, styling each match by kind.
pub fn highlight_spans<'t>(text: &'t str, parsed: &ParsedTask) -> Vec<Span<'t>> {
    let mut matches: Vec<_> = parsed.matches.iter().collect();
    matches.sort_by_key(|m| m.start);

    let mut spans = Vec::new();
    let mut cursor = 0;
    for m in matches {
        // Clip anything already styled.
        let start = m.start.max(cursor);
        let (Some(before), Some(matched)) = (text.get(cursor..start), text.get(start..m.end)) else {
            continue;
        };
        if matched.is_empty() {
            continue;
        }
        if !before.is_empty() {
            spans.push(Span::raw(before));
        }
        spans.push(Span::styled(
            matched,
            Style::default()
                .fg(kind_color(m.kind))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ));
        cursor = m.end;
    }
    if let Some(rest) = text.get(cursor..) {
        if !rest.is_empty() {
            spans.push(Span::raw(rest));
        }
    }
    spans
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>, today: NaiveDate) {
    // Create layout: input, preview, chips, list, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(3), // Preview
            Constraint::Length(1), // Chips
            Constraint::Min(0),    // List
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_input(frame, app, chunks[0]);
    render_preview(frame, app, chunks[1]);
    render_chips(frame, app, today, chunks[2]);
    render_list(frame, app, today, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

fn render_input(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .title(" New task ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(input, area);

    let cursor_x = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
    frame.set_cursor_position((
        area.x.saturating_add(1).saturating_add(cursor_x),
        area.y.saturating_add(1),
    ));
}

fn render_preview(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let title = if app.parse_pending() { " Preview ... " } else { " Preview " };
    let line = if app.parsed.title.is_empty() && !app.parsed.has_extractions() {
        Line::from(Span::styled(
            "Type a task, e.g. \"Call mom tomorrow at 3pm urgent\"",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = highlight_spans(&app.parsed_input, &app.parsed);
        spans.push(Span::styled(
            format!("  -> {}", app.draft.title),
            Style::default().fg(Color::DarkGray),
        ));
        Line::from(spans)
    };

    let preview = Paragraph::new(line).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    frame.render_widget(preview, area);
}

fn render_chips(frame: &mut Frame<'_>, app: &App<'_>, today: NaiveDate, area: Rect) {
    let mut spans = Vec::new();
    for chip in chips(&app.parsed, today) {
        spans.push(Span::styled(
            format!(" {} ", chip.label),
            Style::default().fg(Color::Black).bg(kind_color(chip.kind)),
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the task list.
fn render_list(frame: &mut Frame<'_>, app: &App<'_>, today: NaiveDate, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .tasks
        .iter()
        .map(|task| {
            let priority_color = match task.priority {
                Priority::High => Color::Red,
                Priority::Medium => Color::Yellow,
                Priority::Low => Color::DarkGray,
            };
            let mut spans = vec![
                Span::styled("● ", Style::default().fg(priority_color)),
                Span::raw(task.title.as_str()),
            ];

            if let Some(ref project) = task.project {
                spans.push(Span::styled(
                    format!("  [{project}]"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if let Some(due) = task.due_date {
                let color = if task.is_overdue(today) { Color::Red } else { Color::Yellow };
                spans.push(Span::styled(
                    format!("  {}", format_date(due, today)),
                    Style::default().fg(color),
                ));
            }
            if let Some(reminder) = task.reminder_time {
                spans.push(Span::styled(
                    format!("  {}", format_time(reminder.time())),
                    Style::default().fg(Color::Magenta),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Open ({}) ", app.tasks.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    // Create list state for scrolling
    let mut state = ListState::default();
    if !app.tasks.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
