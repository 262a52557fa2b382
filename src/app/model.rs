use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::actions::Action;
use crate::files::PendingLoad;
use crate::session::EditorSession;
use crate::ui::ruler::build_ruler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// A modal popup. While one is open it receives all keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Informational message dismissed by any key.
    Notice { title: String, body: String },
    /// Yes/no question guarding the simulated exit.
    ConfirmExit,
    /// Path entry standing in for a file chooser.
    OpenFile { input: String },
}

/// The complete application state.
pub struct Model {
    /// The document, caret, mode and file binding
    pub session: EditorSession,
    /// Ruler text, built once at startup
    pub ruler: String,
    /// Whether physical F1-F10 keys dispatch actions
    pub function_keys_enabled: bool,
    /// Line index of the first visible editor line
    pub scroll_offset: usize,
    /// Terminal size (width, height)
    pub terminal_size: (u16, u16),
    /// Open modal popup, if any
    pub dialog: Option<Dialog>,
    /// Load in flight from the file prompt
    pub pending_load: Option<PendingLoad>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Set after first quit attempt with unsaved changes; allows second quit to proceed
    pub quit_confirmed: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("session", &self.session)
            .field("dialog", &self.dialog)
            .field("scroll_offset", &self.scroll_offset)
            .field("function_keys_enabled", &self.function_keys_enabled)
            .finish_non_exhaustive()
    }
}

impl Model {
    pub fn new(session: EditorSession, terminal_size: (u16, u16)) -> Self {
        Self {
            session,
            ruler: build_ruler(crate::ui::ruler::DEFAULT_RULER_WIDTH),
            function_keys_enabled: false,
            scroll_offset: 0,
            terminal_size,
            dialog: None,
            pending_load: None,
            toast: None,
            should_quit: false,
            quit_confirmed: false,
        }
    }

    #[must_use]
    pub fn with_ruler_width(mut self, width: usize) -> Self {
        self.ruler = build_ruler(width);
        self
    }

    #[must_use]
    pub const fn with_function_keys(mut self, enabled: bool) -> Self {
        self.function_keys_enabled = enabled;
        self
    }

    /// Rows available to the text pane: the terminal minus the ruler, status
    /// line and button bar, and the toast row while a toast is showing.
    pub fn editor_height(&self) -> usize {
        let chrome = 3 + u16::from(self.toast.is_some());
        usize::from(self.terminal_size.1.saturating_sub(chrome))
    }

    /// Keep the caret line on screen.
    pub(super) fn ensure_cursor_visible(&mut self) {
        let cursor_line = self.session.buffer.cursor().line;
        let visible_height = self.editor_height();
        if visible_height == 0 {
            self.scroll_offset = cursor_line;
            return;
        }
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + visible_height {
            self.scroll_offset = cursor_line + 1 - visible_height;
        }
    }

    pub(super) fn show_notice(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.dialog = Some(Dialog::Notice {
            title: title.into(),
            body: body.into(),
        });
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// Start loading `path` in the background, abandoning any earlier load.
    pub(super) fn begin_load(&mut self, path: PathBuf) {
        if let Some(previous) = self.pending_load.take() {
            tracing::debug!(path = %previous.path().display(), "abandoning load");
        }
        tracing::info!(path = %path.display(), "loading document");
        self.pending_load = Some(PendingLoad::spawn(path));
    }

    /// Text of the help notice.
    pub(super) fn help_text(&self) -> String {
        let mut lines = vec![
            format!(
                "F{}: Save current text to {}.",
                Action::Save.function_key(),
                self.session.save_path().display()
            ),
            format!("F{}: Load a text file into the editor.", Action::Load.function_key()),
            format!("F{}: Clear the editor (simulated exit).", Action::Exit.function_key()),
            String::new(),
            "Other functions are placeholders.".to_string(),
            String::new(),
            "Insert toggles INS/OVR. Ctrl+Q quits.".to_string(),
        ];
        if !self.function_keys_enabled {
            lines.push("F-keys are off; click the buttons or use --fkeys.".to_string());
        }
        lines.join("\n")
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(EditorSession::new(), (80, 24))
    }
}
