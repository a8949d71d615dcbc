//! Terminal prompt-settings dialog for domainforge.
//!
//! Draws the "Prompt Settings" dialog (ratatui + crossterm) on top of a
//! [`SettingsMirror`]: a style picker that commits on selection and a custom
//! instructions box that commits only on save. Confirmations appear as
//! toasts from a [`ToastQueue`] and disappear after two seconds.
//!
//! # Quick start
//!
//! ```ignore
//! use domainforge::owner::SettingsStore;
//! use domainforge_tui::{TuiConfig, run_tui};
//!
//! let store = SettingsStore::default();
//! run_tui(store.clone(), &TuiConfig::default())?;
//! println!("{:?}", store.snapshot());
//! ```

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use domainforge::mirror::SettingsMirror;
use domainforge::notify::{Notifier, ToastQueue};
use domainforge::owner::SettingsOwner;
use domainforge::ui::tracing::LogBuffer;
use ratatui::prelude::*;

mod app;
mod input;
mod render;

pub use render::{button_style, counter_label, log_level_style};

use app::App;
use input::{handle_key_event, handle_paste};
use render::render;

/// Configuration for the TUI.
#[derive(Default)]
pub struct TuiConfig {
    /// Optional log buffer from the tracing layer.
    ///
    /// When set, pending lines are drained once per frame into the log
    /// pane (toggled with `,`).
    pub log_buffer: Option<LogBuffer>,
}

/// Run the dialog until the user quits (blocking).
///
/// Commits go straight to `owner`; the caller decides what to do with the
/// final settings once this returns.
pub fn run_tui<O: SettingsOwner>(owner: O, config: &TuiConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let result = event_loop(&mut terminal, owner, config);

    // Restore the terminal even if the loop failed.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen,
        cursor::Show
    )?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend, O: SettingsOwner>(
    terminal: &mut Terminal<B>,
    owner: O,
    config: &TuiConfig,
) -> io::Result<()> {
    let toasts = ToastQueue::new();
    let mut mirror = SettingsMirror::new(owner, toasts.clone());
    let cursor = initial_cursor(&mirror);
    let mut app = App::new(cursor);

    while !app.should_quit {
        if mirror.sync() {
            app.status_message = Some("Instructions changed elsewhere; draft reloaded.".into());
        }

        let now = Instant::now();
        toasts.prune(now);
        let visible = toasts.visible(now);

        if let Some(ref log_buf) = config.log_buffer {
            log_buf.drain_into(&mut app.logs);
        }

        terminal.draw(|frame| render(frame, &app, &mirror, &visible))?;

        // 100ms poll keeps toast expiry and log draining responsive.
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(key, &mut app, &mut mirror);
                }
                Event::Paste(text) => handle_paste(&text, &mut app, &mut mirror),
                _ => {}
            }
        }
    }
    Ok(())
}

/// Start the picker cursor on the committed style, or the first option.
fn initial_cursor<O: SettingsOwner, N: Notifier>(
    mirror: &SettingsMirror<O, N>,
) -> usize {
    mirror
        .selected_style()
        .and_then(|style| mirror.style_options().iter().position(|&s| s == style))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domainforge::notify::NoNotifier;
    use domainforge::owner::{PromptSettings, SettingsStore};

    fn mirror_for(style: &str) -> SettingsMirror<SettingsStore, NoNotifier> {
        let store = SettingsStore::new(PromptSettings {
            domain_style: style.into(),
            ..Default::default()
        });
        SettingsMirror::new(store, NoNotifier)
    }

    #[test]
    fn cursor_starts_on_committed_style() {
        assert_eq!(initial_cursor(&mirror_for("pun")), 1);
        assert_eq!(initial_cursor(&mirror_for("abstract")), 3);
    }

    #[test]
    fn cursor_falls_back_for_unknown_style() {
        assert_eq!(initial_cursor(&mirror_for("sonnet")), 0);
    }

    #[test]
    fn tui_config_default_has_no_log_buffer() {
        assert!(TuiConfig::default().log_buffer.is_none());
    }
}
