//! Rendering for the prompt settings dialog.

use domainforge::instructions::MAX_INSTRUCTION_CHARS;
use domainforge::mirror::SettingsMirror;
use domainforge::notify::{Notifier, Toast};
use domainforge::owner::SettingsOwner;
use domainforge::ui::{LogLevel, LogLine};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Focus};

const SUBTITLE: &str =
    "Have something specific in mind? Tweak the settings to get the perfect domain name.";
const PLACEHOLDER: &str = "e.g. domain must contain the word 'apple'";
const HELPER: &str = "Specific instructions for the AI to follow when generating domain names.";

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

// ── Public Utilities ──────────────────────────────────────────────────

/// `"12/280"`-style counter for the instructions box.
pub fn counter_label(chars: usize) -> String {
    format!("{chars}/{MAX_INSTRUCTION_CHARS}")
}

/// Map a log level to a ratatui [`Style`].
pub fn log_level_style(level: LogLevel) -> Style {
    match level {
        LogLevel::Trace => Style::default().fg(Color::DarkGray),
        LogLevel::Debug => Style::default().fg(Color::Cyan),
        LogLevel::Info => Style::default().fg(Color::Green),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Style for a dialog button given its enabled/focused state.
pub fn button_style(enabled: bool, focused: bool) -> Style {
    let base = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if focused {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

// ── Root Render ───────────────────────────────────────────────────────

pub(crate) fn render<O: SettingsOwner, N: Notifier>(
    frame: &mut Frame,
    app: &App,
    mirror: &SettingsMirror<O, N>,
    toasts: &[Toast],
) {
    let area = frame.area();

    let mut constraints = vec![Constraint::Min(18)];
    if app.show_logs {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Length(3));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_dialog(frame, chunks[0], app, mirror);
    if app.show_logs {
        render_logs(frame, chunks[1], &app.logs, app.log_scroll);
    }
    render_hints(frame, chunks[chunks.len() - 1], app);
    render_toasts(frame, area, toasts);
}

// ── Dialog ────────────────────────────────────────────────────────────

fn render_dialog<O: SettingsOwner, N: Notifier>(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    mirror: &SettingsMirror<O, N>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(Span::styled(
            " Prompt Settings ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // subtitle
            Constraint::Length(1), // "Domain Style"
            Constraint::Length(mirror.style_options().len() as u16),
            Constraint::Length(2), // description
            Constraint::Length(1), // "Custom Prompt Instructions"
            Constraint::Min(3),    // text area
            Constraint::Length(1), // helper
            Constraint::Length(1), // buttons
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(SUBTITLE)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    frame.render_widget(Paragraph::new(label_line("Domain Style")), rows[1]);
    render_style_options(frame, rows[2], app, mirror);

    // Unknown committed tags render no description at all.
    let description = mirror.style_description().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(description)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true }),
        rows[3],
    );

    frame.render_widget(
        Paragraph::new(label_line("Custom Prompt Instructions")),
        rows[4],
    );
    render_instructions(frame, rows[5], app, mirror);

    frame.render_widget(
        Paragraph::new(HELPER).style(Style::default().fg(Color::DarkGray)),
        rows[6],
    );
    render_buttons(frame, rows[7], app, mirror);
}

fn label_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_style_options<O: SettingsOwner, N: Notifier>(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    mirror: &SettingsMirror<O, N>,
) {
    let committed = mirror.selected_style();
    let focused = app.focus == Focus::Style;

    let lines: Vec<Line> = mirror
        .style_options()
        .iter()
        .enumerate()
        .map(|(i, &style)| {
            let on_cursor = focused && i == app.style_cursor;
            let marker = if committed == Some(style) { "(\u{2022}) " } else { "( ) " };
            let row_style = if on_cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if committed == Some(style) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(if on_cursor { "> " } else { "  " }, row_style),
                Span::styled(marker, row_style),
                Span::styled(style.label(), row_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_instructions<O: SettingsOwner, N: Notifier>(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    mirror: &SettingsMirror<O, N>,
) {
    let focused = app.focus == Focus::Instructions;
    let chars = mirror.draft_chars();

    let counter_style = if mirror.draft_remaining() == 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title_bottom(Line::from(Span::styled(counter_label(chars), counter_style)).right_aligned());

    let draft = mirror.draft();
    let text: Text = if draft.is_empty() && !focused {
        Text::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        let mut content = draft.to_string();
        if focused {
            content.push('\u{2588}');
        }
        Text::from(content)
    };

    // Keep the tail (and the cursor) in view once the draft outgrows the box.
    let inner = block.inner(area);
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
    let scroll = paragraph
        .line_count(inner.width)
        .saturating_sub(inner.height as usize);

    let paragraph = paragraph.block(block).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn render_buttons<O: SettingsOwner, N: Notifier>(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    mirror: &SettingsMirror<O, N>,
) {
    let line = Line::from(vec![
        Span::styled(
            "[ reset ]",
            button_style(mirror.can_reset(), app.focus == Focus::Reset),
        ),
        Span::raw("  "),
        Span::styled(
            "[ Save instructions ]",
            button_style(mirror.can_save(), app.focus == Focus::Save),
        ),
    ])
    .right_aligned();
    frame.render_widget(Paragraph::new(line), area);
}

// ── Log Pane ──────────────────────────────────────────────────────────

fn render_logs(frame: &mut Frame, area: Rect, logs: &[LogLine], log_scroll: usize) {
    let inner_height = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = logs
        .iter()
        .filter(|log| log.level.is_notable())
        .map(|log| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", log.time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ", log.level.label()),
                    log_level_style(log.level),
                ),
                Span::raw(log.message.as_str()),
            ])
        })
        .collect();

    let scroll = lines
        .len()
        .saturating_sub(inner_height)
        .saturating_sub(log_scroll);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Log ");

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ── Hint Bar ──────────────────────────────────────────────────────────

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hint = match (&app.status_message, app.focus) {
        (Some(msg), _) => msg.clone(),
        (None, Focus::Style) => {
            "[Up/Down] choose  [Enter] apply style  [Tab] next  [,] logs  [q] quit".to_string()
        }
        (None, Focus::Instructions) => {
            "Type instructions  [Ctrl+S] save  [Ctrl+R] reset  [Tab/Esc] leave".to_string()
        }
        (None, Focus::Reset | Focus::Save) => {
            "[Enter] activate  [Left/Right] switch  [Tab] next  [q] quit".to_string()
        }
    };
    let color = if app.status_message.is_some() {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(color))).block(block),
        area,
    );
}

// ── Toasts ────────────────────────────────────────────────────────────

/// Stack toasts in the top-right corner, newest on top.
fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width + 1).max(area.x);

    for (slot, toast) in toasts.iter().rev().enumerate() {
        let y = area.y + 1 + slot as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(Span::styled(
                format!(" {} ", toast.notification.title),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        let body = Paragraph::new(toast.notification.description.as_str())
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, rect);
        frame.render_widget(body, rect);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────
