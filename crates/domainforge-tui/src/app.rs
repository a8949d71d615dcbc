//! TUI-local state (not part of the committed settings).

use domainforge::ui::LogLine;

/// Which dialog control receives input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Focus {
    /// Style picker — arrow keys move, Enter applies.
    Style,
    /// Instructions text area — keys type into the draft.
    Instructions,
    Reset,
    Save,
}

impl Focus {
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Style => Self::Instructions,
            Self::Instructions => Self::Reset,
            Self::Reset => Self::Save,
            Self::Save => Self::Style,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Style => Self::Save,
            Self::Instructions => Self::Style,
            Self::Reset => Self::Instructions,
            Self::Save => Self::Reset,
        }
    }
}

pub(crate) struct App {
    pub(crate) focus: Focus,
    /// Highlighted row in the style picker.
    pub(crate) style_cursor: usize,
    /// Whether the log pane is visible (toggled with `,`).
    pub(crate) show_logs: bool,
    /// Lines drained from the tracing layer.
    pub(crate) logs: Vec<LogLine>,
    /// Offset from the bottom of the log (0 = follow tail).
    pub(crate) log_scroll: usize,
    /// One-line feedback shown in place of the key hints.
    pub(crate) status_message: Option<String>,
    pub(crate) should_quit: bool,
}

impl App {
    pub(crate) fn new(style_cursor: usize) -> Self {
        Self {
            focus: Focus::Style,
            style_cursor,
            show_logs: false,
            logs: Vec::new(),
            log_scroll: 0,
            status_message: None,
            should_quit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        let mut focus = Focus::Style;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Style);
        assert_eq!(Focus::Style.prev(), Focus::Save);
        assert_eq!(Focus::Save.prev().prev(), Focus::Instructions);
    }

    #[test]
    fn app_defaults() {
        let app = App::new(1);
        assert_eq!(app.focus, Focus::Style);
        assert_eq!(app.style_cursor, 1);
        assert!(!app.show_logs);
        assert!(!app.should_quit);
        assert!(app.status_message.is_none());
    }
}
