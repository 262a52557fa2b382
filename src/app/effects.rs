use crate::actions::Action;
use crate::app::update::requested_action;
use crate::app::{App, Message, Model, ToastLevel};
use crate::files::write_document;

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if requested_action(msg) == Some(Action::Save) {
            Self::save_document(model);
            return;
        }
        if let Message::OpenPath(path) = msg {
            model.begin_load(path.clone());
        }
    }

    fn save_document(model: &mut Model) {
        let path = model.session.save_path();
        let text = model.session.buffer.text();
        match write_document(&path, &text) {
            Ok(()) => {
                model.session.buffer.mark_clean();
                let name = model.session.binding.name().to_string();
                model.show_notice("Save", format!("File saved as {name}"));
            }
            Err(err) => {
                tracing::error!(path = %path.display(), "save failed: {err:#}");
                model.show_toast(ToastLevel::Error, format!("Save failed: {err:#}"));
            }
        }
    }
}
