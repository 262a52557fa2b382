use std::path::PathBuf;

use crate::actions::Action;
use crate::app::model::Dialog;
use crate::app::{Model, ToastLevel};
use crate::editor::Direction;
use crate::files::LoadedFile;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a character at the caret
    InsertChar(char),
    /// Insert pasted text at the caret
    InsertText(String),
    /// Delete character before caret (Backspace)
    DeleteBack,
    /// Delete character at caret (Delete)
    DeleteForward,
    /// Split line at caret (Enter)
    SplitLine,
    /// Toggle the INS/OVR indicator (Insert key)
    ToggleMode,

    // Caret movement
    /// Move caret in a direction
    MoveCursor(Direction),
    /// Move caret to beginning of line (Home)
    MoveHome,
    /// Move caret to end of line (End)
    MoveEnd,
    /// Move caret one word left (Ctrl+Left)
    MoveWordLeft,
    /// Move caret one word right (Ctrl+Right)
    MoveWordRight,
    /// Move caret to start of document (Ctrl+Home)
    MoveToStart,
    /// Move caret to end of document (Ctrl+End)
    MoveToEnd,
    /// Move caret up one screen
    PageUp,
    /// Move caret down one screen
    PageDown,
    /// Move caret to a document line and screen column (mouse click)
    MoveToScreen(usize, usize),
    /// Scroll the text pane up by n lines
    ScrollUp(usize),
    /// Scroll the text pane down by n lines
    ScrollDown(usize),

    // Function keys
    /// Run a function-key action
    Action(Action),
    /// An action code from outside the closed action set
    ActionCode(String),
    /// A function key with no action bound to it
    UnknownFunctionKey(u8),

    // Dialogs
    /// Confirm the simulated exit
    ConfirmExit,
    /// Decline the simulated exit
    CancelExit,
    /// Close a notice popup
    DismissDialog,
    /// Type into the file prompt
    PromptInput(char),
    /// Delete the last character of the file prompt
    PromptBackspace,
    /// Close the file prompt without loading
    PromptCancel,
    /// Load the file at this path
    OpenPath(PathBuf),

    // Background
    /// A background load finished
    FileLoaded(LoadedFile),
    /// A background load failed
    LoadFailed(String),

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

impl Message {
    /// Whether the message changes the document text.
    pub const fn edits_buffer(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::InsertText(_)
                | Self::DeleteBack
                | Self::DeleteForward
                | Self::SplitLine
        )
    }
}

/// Pure function that updates the model based on a message.
///
/// File writes and background loads are started afterwards by
/// `App::handle_message_side_effects`.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Unrecognized codes are logged and leave the model untouched.
    match &msg {
        Message::ActionCode(code) => {
            if let Err(err) = Action::from_code(code) {
                tracing::warn!(%err, "ignoring action");
                return model;
            }
        }
        Message::UnknownFunctionKey(key) => {
            tracing::warn!("function key F{key} has no action");
            return model;
        }
        _ => {}
    }

    // Only an edit re-arms the unsaved-changes warning.
    if msg.edits_buffer() {
        model.quit_confirmed = false;
    }

    match msg {
        // Editing
        Message::InsertChar(ch) => {
            model.session.buffer.insert_char(ch);
            model.ensure_cursor_visible();
        }
        Message::InsertText(text) => {
            model.session.buffer.insert_str(&text);
            model.ensure_cursor_visible();
        }
        Message::DeleteBack => {
            model.session.buffer.delete_back();
            model.ensure_cursor_visible();
        }
        Message::DeleteForward => {
            model.session.buffer.delete_forward();
        }
        Message::SplitLine => {
            model.session.buffer.split_line();
            model.ensure_cursor_visible();
        }
        Message::ToggleMode => {
            model.session.toggle_mode();
            tracing::debug!(mode = %model.session.mode, "mode toggled");
        }

        // Caret movement
        Message::MoveCursor(dir) => {
            model.session.buffer.move_cursor(dir);
            model.ensure_cursor_visible();
        }
        Message::MoveHome => model.session.buffer.move_home(),
        Message::MoveEnd => model.session.buffer.move_end(),
        Message::MoveWordLeft => {
            model.session.buffer.move_word_left();
            model.ensure_cursor_visible();
        }
        Message::MoveWordRight => {
            model.session.buffer.move_word_right();
            model.ensure_cursor_visible();
        }
        Message::MoveToStart => {
            model.session.buffer.move_to_start();
            model.ensure_cursor_visible();
        }
        Message::MoveToEnd => {
            model.session.buffer.move_to_end();
            model.ensure_cursor_visible();
        }
        Message::PageUp => {
            let page = model.editor_height().max(1);
            model.session.buffer.move_lines_up(page);
            model.scroll_offset = model.scroll_offset.saturating_sub(page);
            model.ensure_cursor_visible();
        }
        Message::PageDown => {
            let page = model.editor_height().max(1);
            model.session.buffer.move_lines_down(page);
            model.ensure_cursor_visible();
        }
        Message::MoveToScreen(line, col) => {
            model.session.buffer.move_to_screen(line, col);
            model.ensure_cursor_visible();
        }
        Message::ScrollUp(n) => {
            model.scroll_offset = model.scroll_offset.saturating_sub(n);
        }
        Message::ScrollDown(n) => {
            let max = model.session.buffer.line_count().saturating_sub(1);
            model.scroll_offset = (model.scroll_offset + n).min(max);
        }

        // Function keys
        Message::Action(action) => dispatch_action(&mut model, action),
        Message::ActionCode(code) => {
            if let Ok(action) = Action::from_code(&code) {
                dispatch_action(&mut model, action);
            }
        }
        Message::UnknownFunctionKey(_) => {}

        // Dialogs
        Message::ConfirmExit => {
            if model.dialog == Some(Dialog::ConfirmExit) {
                model.session.reset_to_exit_sentinel();
                model.scroll_offset = 0;
                model.pending_load = None;
                tracing::info!("simulated exit: document cleared");
                model.show_notice("Exit", "Exited. Content cleared (simulated).");
            }
        }
        Message::CancelExit => {
            if model.dialog == Some(Dialog::ConfirmExit) {
                tracing::debug!("exit cancelled by user");
                model.dialog = None;
            }
        }
        Message::DismissDialog => {
            if matches!(model.dialog, Some(Dialog::Notice { .. })) {
                model.dialog = None;
            }
        }
        Message::PromptInput(ch) => {
            if let Some(Dialog::OpenFile { input }) = &mut model.dialog {
                input.push(ch);
            }
        }
        Message::PromptBackspace => {
            if let Some(Dialog::OpenFile { input }) = &mut model.dialog {
                input.pop();
            }
        }
        Message::PromptCancel => {
            if matches!(model.dialog, Some(Dialog::OpenFile { .. })) {
                model.dialog = None;
            }
        }
        // The load itself starts in effects.
        Message::OpenPath(_) => {
            model.dialog = None;
        }

        // Background
        Message::FileLoaded(file) => {
            model.pending_load = None;
            model.session.replace_document(file);
            tracing::info!(
                name = model.session.binding.name(),
                chars = model.session.buffer.len_chars(),
                "document loaded"
            );
            model.scroll_offset = 0;
        }
        Message::LoadFailed(err) => {
            model.pending_load = None;
            model.show_toast(ToastLevel::Error, format!("Load failed: {err}"));
        }

        // Window
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.ensure_cursor_visible();
        }

        // Application
        Message::Quit => {
            if model.session.buffer.is_dirty() && !model.quit_confirmed {
                model.show_toast(
                    ToastLevel::Warning,
                    "Unsaved changes! Press Ctrl+Q again to quit, or F2 to save",
                );
                model.quit_confirmed = true;
            } else {
                model.should_quit = true;
            }
        }
    }
    model
}

/// The action a message asks for, whether by variant or by code.
pub(super) fn requested_action(msg: &Message) -> Option<Action> {
    match msg {
        Message::Action(action) => Some(*action),
        Message::ActionCode(code) => Action::from_code(code).ok(),
        _ => None,
    }
}

/// Apply the state change for a function-key action.
///
/// Saving only touches the disk, so its work is all in effects.
fn dispatch_action(model: &mut Model, action: Action) {
    tracing::debug!(action = %action, "dispatch");
    match action {
        Action::Help => {
            let text = model.help_text();
            model.show_notice("DisplayWrite Simulator Help", text);
        }
        Action::Save => {}
        Action::Load => {
            model.dialog = Some(Dialog::OpenFile {
                input: String::new(),
            });
        }
        Action::Block
        | Action::Goto
        | Action::Search
        | Action::Format
        | Action::Options
        | Action::Spell => {
            model.show_notice(
                action.label(),
                format!(
                    "Function {} (F{}) is not yet implemented.",
                    action.label(),
                    action.function_key()
                ),
            );
        }
        Action::Exit => {
            model.dialog = Some(Dialog::ConfirmExit);
        }
    }
}
