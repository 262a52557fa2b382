use std::path::PathBuf;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::actions::Action;
use crate::app::model::Dialog;
use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::ui::status::button_spans;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Paste(text) if model.dialog.is_none() && !text.is_empty() => {
                Some(Message::InsertText(text.clone()))
            }
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && matches!(key.code, KeyCode::Char('q' | 'Q')) {
            return Some(Message::Quit);
        }

        if let Some(dialog) = &model.dialog {
            return Self::handle_dialog_key(key, dialog);
        }

        match key.code {
            KeyCode::F(n) => {
                if !model.function_keys_enabled {
                    return None;
                }
                Some(
                    Action::from_function_key(n)
                        .map_or(Message::UnknownFunctionKey(n), Message::Action),
                )
            }
            KeyCode::Insert => Some(Message::ToggleMode),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Message::InsertChar(c))
            }
            KeyCode::Tab => Some(Message::InsertChar('\t')),
            KeyCode::Enter => Some(Message::SplitLine),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Left if ctrl => Some(Message::MoveWordLeft),
            KeyCode::Right if ctrl => Some(Message::MoveWordRight),
            KeyCode::Home if ctrl => Some(Message::MoveToStart),
            KeyCode::End if ctrl => Some(Message::MoveToEnd),
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End => Some(Message::MoveEnd),
            KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::PageDown => Some(Message::PageDown),
            _ => None,
        }
    }

    fn handle_dialog_key(key: KeyEvent, dialog: &Dialog) -> Option<Message> {
        match dialog {
            Dialog::Notice { .. } => Some(Message::DismissDialog),
            Dialog::ConfirmExit => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Message::ConfirmExit),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::CancelExit),
                _ => None,
            },
            Dialog::OpenFile { input } => match key.code {
                KeyCode::Enter => {
                    let path = input.trim();
                    if path.is_empty() {
                        Some(Message::PromptCancel)
                    } else {
                        Some(Message::OpenPath(PathBuf::from(path)))
                    }
                }
                KeyCode::Esc => Some(Message::PromptCancel),
                KeyCode::Backspace => Some(Message::PromptBackspace),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Message::PromptInput(c))
                }
                _ => None,
            },
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.dialog.is_some() {
            return None;
        }

        let (width, height) = model.terminal_size;
        let layout = crate::ui::screen_layout(
            Rect::new(0, 0, width, height),
            model.active_toast().is_some(),
        );
        let point = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.editor.contains(point) {
                    let line = model.scroll_offset + usize::from(mouse.row - layout.editor.y);
                    let col = usize::from(mouse.column - layout.editor.x);
                    return Some(Message::MoveToScreen(line, col));
                }
                if layout.buttons.contains(point) {
                    return button_spans(layout.buttons.x, layout.buttons.width)
                        .into_iter()
                        .find(|&(_, x, w)| mouse.column >= x && mouse.column < x + w)
                        .map(|(action, _, _)| Message::Action(action));
                }
                None
            }
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(3)),
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(3)),
            _ => None,
        }
    }
}
