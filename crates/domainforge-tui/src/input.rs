//! Key handling for the prompt settings dialog.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use domainforge::instructions::MAX_INSTRUCTION_CHARS;
use domainforge::mirror::SettingsMirror;
use domainforge::notify::Notifier;
use domainforge::owner::SettingsOwner;

use crate::app::{App, Focus};

pub(crate) fn handle_key_event<O: SettingsOwner, N: Notifier>(
    key: KeyEvent,
    app: &mut App,
    mirror: &mut SettingsMirror<O, N>,
) {
    app.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('s') => save(app, mirror),
            KeyCode::Char('r') => reset(app, mirror),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Style => handle_style_key(key, app, mirror),
        Focus::Instructions => handle_instructions_key(key, app, mirror),
        Focus::Reset | Focus::Save => handle_button_key(key, app, mirror),
    }
}

/// Bracketed paste: only the text area takes pasted text.
pub(crate) fn handle_paste<O: SettingsOwner, N: Notifier>(
    text: &str,
    app: &mut App,
    mirror: &mut SettingsMirror<O, N>,
) {
    if app.focus != Focus::Instructions {
        return;
    }
    let offered = text.chars().count();
    let accepted = mirror.push_str(text);
    app.status_message = (accepted < offered).then(|| {
        format!(
            "Pasted {accepted} of {offered} chars (limit {MAX_INSTRUCTION_CHARS})."
        )
    });
}

/// Keys shared by every control except the text area.
fn handle_common_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(',') => {
            app.show_logs = !app.show_logs;
            app.log_scroll = 0;
        }
        KeyCode::PageUp => app.log_scroll = app.log_scroll.saturating_add(5),
        KeyCode::PageDown => app.log_scroll = app.log_scroll.saturating_sub(5),
        _ => {}
    }
}

fn handle_style_key<O: SettingsOwner, N: Notifier>(
    key: KeyEvent,
    app: &mut App,
    mirror: &mut SettingsMirror<O, N>,
) {
    let options = mirror.style_options();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.style_cursor = app.style_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.style_cursor + 1 < options.len() {
                app.style_cursor += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(&style) = options.get(app.style_cursor) {
                mirror.select_style(style);
            }
        }
        _ => handle_common_key(key, app),
    }
}

fn handle_instructions_key<O: SettingsOwner, N: Notifier>(
    key: KeyEvent,
    app: &mut App,
    mirror: &mut SettingsMirror<O, N>,
) {
    let typed = match key.code {
        KeyCode::Esc => {
            app.focus = Focus::Style;
            return;
        }
        KeyCode::Backspace => {
            mirror.backspace();
            return;
        }
        KeyCode::Enter => '\n',
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => c,
        _ => return,
    };
    if !mirror.push_char(typed) {
        app.status_message = Some(format!(
            "Instructions are limited to {MAX_INSTRUCTION_CHARS} characters."
        ));
    }
}

fn handle_button_key<O: SettingsOwner, N: Notifier>(
    key: KeyEvent,
    app: &mut App,
    mirror: &mut SettingsMirror<O, N>,
) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => match app.focus {
            Focus::Reset => reset(app, mirror),
            _ => save(app, mirror),
        },
        KeyCode::Left | KeyCode::Right => {
            app.focus = match app.focus {
                Focus::Reset => Focus::Save,
                _ => Focus::Reset,
            };
        }
        _ => handle_common_key(key, app),
    }
}

fn save<O: SettingsOwner, N: Notifier>(app: &mut App, mirror: &mut SettingsMirror<O, N>) {
    if mirror.save() {
        return;
    }
    app.status_message = Some(if mirror.draft_over_cap() {
        let excess = mirror.draft_chars() - MAX_INSTRUCTION_CHARS;
        format!("Remove {excess} chars to save (limit {MAX_INSTRUCTION_CHARS}).")
    } else {
        "No changes to save.".into()
    });
}

fn reset<O: SettingsOwner, N: Notifier>(app: &mut App, mirror: &mut SettingsMirror<O, N>) {
    if !mirror.reset() {
        app.status_message = Some("Instructions are already empty.".into());
    }
}
