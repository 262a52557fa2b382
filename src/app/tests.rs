use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tempfile::tempdir;

use crate::actions::Action;
use crate::editor::{Direction, EditorMode};
use crate::files::LoadedFile;
use crate::session::{EXIT_SENTINEL, EditorSession, FileBinding};
use crate::ui::status::{button_spans, status_line};

use super::{App, Dialog, Message, Model, ToastLevel, update};

fn create_test_model() -> Model {
    let session = EditorSession::with_text("Hello world\nSecond line", FileBinding::default());
    Model::new(session, (80, 24))
}

fn create_long_test_model() -> Model {
    let text = (1..=100)
        .map(|i| format!("Line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    Model::new(
        EditorSession::with_text(&text, FileBinding::default()),
        (80, 24),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Run a message through update and then its side effects, like the loop does.
fn step(model: Model, msg: Message) -> Model {
    let side_msg = msg.clone();
    let mut model = update(model, msg);
    App::handle_message_side_effects(&mut model, &side_msg);
    model
}

fn wait_for_load(model: &mut Model) -> Message {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let load = model.pending_load.as_mut().expect("load should be pending");
        if let Some(result) = load.try_take() {
            return match result {
                Ok(file) => Message::FileLoaded(file),
                Err(err) => Message::LoadFailed(format!("{err:#}")),
            };
        }
        assert!(Instant::now() < deadline, "load did not finish");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_fresh_model_status_line() {
    let model = Model::default();
    assert_eq!(
        status_line(&model.session),
        "Ln: 1 Col: 1 | INS | File: untitled.txt"
    );
}

#[test]
fn test_typing_moves_status_position() {
    let mut model = Model::default();
    for ch in "ab".chars() {
        model = update(model, Message::InsertChar(ch));
    }
    model = update(model, Message::SplitLine);
    model = update(model, Message::InsertChar('c'));
    assert_eq!(model.session.buffer.text(), "ab\nc");
    assert_eq!(
        status_line(&model.session),
        "Ln: 2 Col: 2 | INS | File: untitled.txt"
    );
}

#[test]
fn test_toggle_mode_flips_indicator() {
    let model = create_test_model();
    let model = update(model, Message::ToggleMode);
    assert_eq!(model.session.mode, EditorMode::Overtype);
    assert!(status_line(&model.session).contains("| OVR |"));

    let model = update(model, Message::ToggleMode);
    assert_eq!(model.session.mode, EditorMode::Insert);
}

#[test]
fn test_overtype_mode_still_inserts() {
    let model = update(create_test_model(), Message::ToggleMode);
    let model = update(model, Message::InsertChar('X'));
    assert_eq!(model.session.buffer.text(), "XHello world\nSecond line");
}

#[test]
fn test_cursor_movement_updates_status() {
    let model = create_test_model();
    let model = update(model, Message::MoveCursor(Direction::Down));
    let model = update(model, Message::MoveEnd);
    assert_eq!(
        status_line(&model.session),
        "Ln: 2 Col: 12 | INS | File: untitled.txt"
    );
}

#[test]
fn test_help_shows_notice() {
    let model = update(create_test_model(), Message::Action(Action::Help));
    match model.dialog {
        Some(Dialog::Notice { title, body }) => {
            assert_eq!(title, "DisplayWrite Simulator Help");
            assert!(body.contains("F2"));
            assert!(body.contains("F3"));
            assert!(body.contains("F10"));
        }
        other => panic!("expected help notice, got {other:?}"),
    }
}

#[test]
fn test_stub_actions_show_not_implemented_notice() {
    for action in Action::ALL.into_iter().filter(|a| !a.is_implemented()) {
        let before = create_test_model();
        let text = before.session.buffer.text();
        let model = update(before, Message::Action(action));
        let Some(Dialog::Notice { body, .. }) = &model.dialog else {
            panic!("{action} should show a notice");
        };
        assert!(body.contains(action.label()), "{body}");
        assert!(body.contains("not yet implemented"), "{body}");
        assert_eq!(model.session.buffer.text(), text);
    }
}

#[test]
fn test_unknown_action_code_leaves_model_untouched() {
    let mut model = create_test_model();
    model.quit_confirmed = true;
    let model = update(model, Message::ActionCode("frobnicate".to_string()));
    assert!(model.dialog.is_none());
    assert!(model.quit_confirmed);
    assert_eq!(model.session.buffer.text(), "Hello world\nSecond line");
    assert!(!model.should_quit);
}

#[test]
fn test_known_action_code_dispatches() {
    let model = update(create_test_model(), Message::ActionCode("exit".to_string()));
    assert_eq!(model.dialog, Some(Dialog::ConfirmExit));
}

#[test]
fn test_unknown_function_key_is_ignored() {
    let model = update(create_test_model(), Message::UnknownFunctionKey(11));
    assert!(model.dialog.is_none());
    assert!(!model.session.buffer.is_dirty());
}

#[test]
fn test_exit_confirmed_resets_document() {
    let session = EditorSession::with_text("draft", FileBinding::new("memo.txt", "/tmp"));
    let model = Model::new(session, (80, 24));
    let model = update(model, Message::Action(Action::Exit));
    assert_eq!(model.dialog, Some(Dialog::ConfirmExit));

    let model = update(model, Message::ConfirmExit);
    assert_eq!(model.session.buffer.text(), EXIT_SENTINEL);
    assert_eq!(model.session.binding.name(), "untitled.txt");
    assert!(matches!(model.dialog, Some(Dialog::Notice { .. })));
    assert!(!model.should_quit);
}

#[test]
fn test_exit_declined_changes_nothing() {
    let model = update(create_test_model(), Message::Action(Action::Exit));
    let model = update(model, Message::CancelExit);
    assert!(model.dialog.is_none());
    assert_eq!(model.session.buffer.text(), "Hello world\nSecond line");
}

#[test]
fn test_confirm_exit_without_dialog_is_ignored() {
    let model = update(create_test_model(), Message::ConfirmExit);
    assert_eq!(model.session.buffer.text(), "Hello world\nSecond line");
}

#[test]
fn test_exit_keeps_mode() {
    let model = update(create_test_model(), Message::ToggleMode);
    let model = update(model, Message::Action(Action::Exit));
    let model = update(model, Message::ConfirmExit);
    assert_eq!(model.session.mode, EditorMode::Overtype);
}

#[test]
fn test_save_writes_buffer_to_bound_name() {
    let dir = tempdir().unwrap();
    let session = EditorSession::with_text("saved text", FileBinding::new("out.txt", dir.path()));
    let model = Model::new(session, (80, 24));
    let model = update(model, Message::InsertChar('>'));
    assert!(model.session.buffer.is_dirty());

    let model = step(model, Message::Action(Action::Save));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        ">saved text"
    );
    assert!(!model.session.buffer.is_dirty());
    match model.dialog {
        Some(Dialog::Notice { body, .. }) => assert_eq!(body, "File saved as out.txt"),
        other => panic!("expected save notice, got {other:?}"),
    }
}

#[test]
fn test_save_via_action_code() {
    let dir = tempdir().unwrap();
    let session = EditorSession::with_text("abc", FileBinding::new("code.txt", dir.path()));
    let model = Model::new(session, (80, 24));
    let _model = step(model, Message::ActionCode("save".to_string()));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("code.txt")).unwrap(),
        "abc"
    );
}

#[test]
fn test_save_failure_shows_error_toast() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");
    let session = EditorSession::with_text("abc", FileBinding::new("x.txt", missing));
    let model = step(Model::new(session, (80, 24)), Message::Action(Action::Save));
    let (message, level) = model.active_toast().expect("error toast");
    assert_eq!(level, ToastLevel::Error);
    assert!(message.starts_with("Save failed"));
    assert!(model.dialog.is_none());
}

#[test]
fn test_load_then_save_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "first\nsecond").unwrap();

    let model = update(create_test_model(), Message::Action(Action::Load));
    assert!(matches!(model.dialog, Some(Dialog::OpenFile { .. })));

    let mut model = step(model, Message::OpenPath(path.clone()));
    assert!(model.dialog.is_none());
    let loaded = wait_for_load(&mut model);
    let model = update(model, loaded);

    assert!(model.pending_load.is_none());
    assert_eq!(model.session.buffer.text(), "first\nsecond");
    assert_eq!(model.session.binding.name(), "notes.txt");
    assert_eq!(
        status_line(&model.session),
        "Ln: 1 Col: 1 | INS | File: notes.txt"
    );

    let model = step(model, Message::Action(Action::Save));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond");
}

#[test]
fn test_load_keeps_mode() {
    let model = update(create_test_model(), Message::ToggleMode);
    let model = update(
        model,
        Message::FileLoaded(LoadedFile {
            name: "a.txt".to_string(),
            dir: PathBuf::from("."),
            content: "x".to_string(),
        }),
    );
    assert_eq!(model.session.mode, EditorMode::Overtype);
    assert_eq!(model.session.buffer.text(), "x");
}

#[test]
fn test_load_of_missing_file_reports_error() {
    let dir = tempdir().unwrap();
    let mut model = step(
        create_test_model(),
        Message::OpenPath(dir.path().join("absent.txt")),
    );
    let msg = wait_for_load(&mut model);
    assert!(matches!(msg, Message::LoadFailed(_)));
    let model = update(model, msg);
    assert!(model.pending_load.is_none());
    assert_eq!(model.active_toast().map(|(_, l)| l), Some(ToastLevel::Error));
    assert_eq!(model.session.buffer.text(), "Hello world\nSecond line");
}

#[test]
fn test_new_load_abandons_previous_one() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    std::fs::write(&first, "one").unwrap();
    std::fs::write(&second, "two").unwrap();

    let model = step(create_test_model(), Message::OpenPath(first));
    let mut model = step(model, Message::OpenPath(second.clone()));
    assert_eq!(model.pending_load.as_ref().unwrap().path(), second);

    let msg = wait_for_load(&mut model);
    let model = update(model, msg);
    assert_eq!(model.session.buffer.text(), "two");
}

#[test]
fn test_prompt_editing() {
    let model = update(create_test_model(), Message::Action(Action::Load));
    let model = update(model, Message::PromptInput('a'));
    let model = update(model, Message::PromptInput('b'));
    let model = update(model, Message::PromptBackspace);
    assert_eq!(
        model.dialog,
        Some(Dialog::OpenFile {
            input: "a".to_string()
        })
    );
    let model = update(model, Message::PromptCancel);
    assert!(model.dialog.is_none());
}

#[test]
fn test_quit_with_clean_buffer_quits() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_quit_with_dirty_buffer_needs_second_press() {
    let model = update(create_test_model(), Message::InsertChar('z'));
    let model = update(model, Message::Quit);
    assert!(!model.should_quit);
    assert_eq!(
        model.active_toast().map(|(_, level)| level),
        Some(ToastLevel::Warning)
    );

    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_edit_between_quit_presses_rearms_warning() {
    let model = update(create_test_model(), Message::InsertChar('z'));
    let model = update(model, Message::Quit);
    let model = update(model, Message::InsertChar('y'));
    let model = update(model, Message::Quit);
    assert!(!model.should_quit);
}

#[test]
fn test_quit_warning_survives_non_edits() {
    let model = update(create_test_model(), Message::InsertChar('z'));
    let model = update(model, Message::Quit);
    let model = update(model, Message::Resize(100, 40));
    let model = update(model, Message::Action(Action::Help));
    let model = update(model, Message::DismissDialog);
    let model = update(model, Message::MoveCursor(Direction::Down));
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_typed_carriage_return_keeps_caret_in_step() {
    let model = update(Model::default(), Message::InsertChar('a'));
    let model = update(model, Message::InsertChar('\r'));
    assert_eq!(model.session.buffer.text(), "a\r");
    assert_eq!(model.session.buffer.caret_offset(), 2);
    assert_eq!(
        status_line(&model.session),
        "Ln: 1 Col: 3 | INS | File: untitled.txt"
    );

    let model = update(model, Message::DeleteBack);
    assert_eq!(model.session.buffer.text(), "a");
    assert_eq!(model.session.buffer.caret_offset(), 1);

    let model = update(Model::default(), Message::InsertChar('\r'));
    let model = update(model, Message::MoveCursor(Direction::Left));
    assert_eq!(model.session.buffer.caret_offset(), 0);
    assert_eq!(
        status_line(&model.session),
        "Ln: 1 Col: 1 | INS | File: untitled.txt"
    );
}

#[test]
fn test_end_of_document_reaches_trailing_carriage_return() {
    let session = EditorSession::with_text("abc\r", FileBinding::default());
    let model = update(Model::new(session, (80, 24)), Message::MoveToEnd);
    assert_eq!(model.session.buffer.caret_offset(), 4);
    assert_eq!(
        status_line(&model.session),
        "Ln: 1 Col: 5 | INS | File: untitled.txt"
    );
}

#[test]
fn test_paste_inserts_text() {
    let model = create_test_model();
    let msg = App::handle_event(&Event::Paste("one\ntwo ".to_string()), &model);
    assert_eq!(msg, Some(Message::InsertText("one\ntwo ".to_string())));

    let model = update(model, msg.unwrap());
    assert_eq!(model.session.buffer.text(), "one\ntwo Hello world\nSecond line");
    assert_eq!(
        status_line(&model.session),
        "Ln: 2 Col: 5 | INS | File: untitled.txt"
    );
    assert!(model.session.buffer.is_dirty());
}

#[test]
fn test_paste_ignored_while_dialog_open() {
    let model = update(create_test_model(), Message::Action(Action::Help));
    assert_eq!(
        App::handle_event(&Event::Paste("x".to_string()), &model),
        None
    );
}

#[test]
fn test_toast_lifecycle() {
    let mut model = create_test_model();
    model.show_toast(ToastLevel::Info, "hello");
    assert_eq!(model.active_toast(), Some(("hello", ToastLevel::Info)));
    assert!(!model.expire_toast(Instant::now()));
    assert!(model.expire_toast(Instant::now() + Duration::from_secs(10)));
    assert!(model.active_toast().is_none());
}

#[test]
fn test_cursor_down_scrolls_viewport() {
    let mut model = create_long_test_model();
    for _ in 0..30 {
        model = update(model, Message::MoveCursor(Direction::Down));
    }
    let height = model.editor_height();
    assert_eq!(model.session.buffer.cursor().line, 30);
    assert_eq!(model.scroll_offset, 30 + 1 - height);
}

#[test]
fn test_page_down_and_up() {
    let model = update(create_long_test_model(), Message::PageDown);
    let height = model.editor_height();
    assert_eq!(model.session.buffer.cursor().line, height);
    let model = update(model, Message::PageUp);
    assert_eq!(model.session.buffer.cursor().line, 0);
    assert_eq!(model.scroll_offset, 0);
}

#[test]
fn test_scroll_down_is_clamped() {
    let model = update(create_test_model(), Message::ScrollDown(50));
    assert_eq!(model.scroll_offset, 1);
    let model = update(model, Message::ScrollUp(5));
    assert_eq!(model.scroll_offset, 0);
}

#[test]
fn test_resize_updates_terminal_size() {
    let model = update(create_test_model(), Message::Resize(100, 40));
    assert_eq!(model.terminal_size, (100, 40));
    assert_eq!(model.editor_height(), 37);
}

#[test]
fn test_function_keys_ignored_when_disabled() {
    let model = create_test_model();
    assert_eq!(App::handle_key(key(KeyCode::F(2)), &model), None);
}

#[test]
fn test_function_keys_map_when_enabled() {
    let model = create_test_model().with_function_keys(true);
    assert_eq!(
        App::handle_key(key(KeyCode::F(1)), &model),
        Some(Message::Action(Action::Help))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::F(10)), &model),
        Some(Message::Action(Action::Exit))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::F(12)), &model),
        Some(Message::UnknownFunctionKey(12))
    );
}

#[test]
fn test_insert_key_toggles_mode() {
    let model = create_test_model();
    assert_eq!(
        App::handle_key(key(KeyCode::Insert), &model),
        Some(Message::ToggleMode)
    );
}

#[test]
fn test_ctrl_q_quits_even_with_dialog_open() {
    let model = update(create_test_model(), Message::Action(Action::Help));
    assert_eq!(
        App::handle_key(ctrl(KeyCode::Char('q')), &model),
        Some(Message::Quit)
    );
}

#[test]
fn test_dialog_keys() {
    let model = update(create_test_model(), Message::Action(Action::Exit));
    assert_eq!(
        App::handle_key(key(KeyCode::Char('y')), &model),
        Some(Message::ConfirmExit)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Esc), &model),
        Some(Message::CancelExit)
    );
    assert_eq!(App::handle_key(key(KeyCode::Char('x')), &model), None);

    let model = update(create_test_model(), Message::Action(Action::Block));
    assert_eq!(
        App::handle_key(key(KeyCode::Char('x')), &model),
        Some(Message::DismissDialog)
    );
}

#[test]
fn test_open_file_prompt_keys() {
    let model = update(create_test_model(), Message::Action(Action::Load));
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::PromptCancel)
    );
    let model = update(model, Message::PromptInput('a'));
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::OpenPath(PathBuf::from("a")))
    );
}

#[test]
fn test_click_on_button_bar_dispatches_action() {
    let model = create_test_model();
    let bar_row = model.terminal_size.1 - 1;
    let spans = button_spans(0, model.terminal_size.0);
    let (action, x, _) = spans[1];
    assert_eq!(action, Action::Save);
    assert_eq!(
        App::handle_mouse(left_click(x + 1, bar_row), &model),
        Some(Message::Action(Action::Save))
    );
}

#[test]
fn test_click_in_editor_moves_caret() {
    let model = create_test_model();
    // Row 0 is the ruler, so row 2 is the second text line
    let msg = App::handle_mouse(left_click(3, 2), &model);
    assert_eq!(msg, Some(Message::MoveToScreen(1, 3)));
    let model = update(model, msg.unwrap());
    assert_eq!(
        status_line(&model.session),
        "Ln: 2 Col: 4 | INS | File: untitled.txt"
    );
}

#[test]
fn test_mouse_ignored_while_dialog_open() {
    let model = update(create_test_model(), Message::Action(Action::Help));
    assert_eq!(App::handle_mouse(left_click(3, 2), &model), None);
}
