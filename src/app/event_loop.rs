use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::{DefaultTerminal, Frame};

use crate::app::{App, Message, Model, update};
use crate::files::read_document;
use crate::session::{EditorSession, FileBinding};

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the startup file cannot be read, the terminal
    /// cannot be initialized, or the event loop hits an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let session = self.initial_session()?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: dwsim requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(session, (size.width, size.height))
            .with_ruler_width(self.ruler_width)
            .with_function_keys(self.function_keys_enabled);
        tracing::info!(
            width = size.width,
            height = size.height,
            fkeys = self.function_keys_enabled,
            file = model.session.binding.name(),
            "editor started"
        );

        let result = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)
            .context("Failed to enable mouse capture and bracketed paste")
            .and_then(|()| Self::event_loop(&mut terminal, &mut model));

        // Restore terminal
        let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn initial_session(&self) -> Result<EditorSession> {
        let Some(path) = &self.file_path else {
            return Ok(EditorSession::new());
        };
        if !path.exists() {
            tracing::info!(path = %path.display(), "new file");
            return Ok(EditorSession::with_text("", FileBinding::for_path(path)));
        }
        let loaded = read_document(path)?;
        Ok(EditorSession::from_loaded(loaded))
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if let Some(result) = model.pending_load.as_mut().and_then(|load| load.try_take()) {
                let msg = match result {
                    Ok(file) => Message::FileLoaded(file),
                    Err(err) => {
                        tracing::error!("load failed: {err:#}");
                        Message::LoadFailed(format!("{err:#}"))
                    }
                };
                *model = update(std::mem::take(model), msg);
                needs_render = true;
            }

            // Poll quickly while a load is in flight so it lands promptly.
            let poll_ms = if needs_render {
                0
            } else if model.pending_load.is_some() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                let event = event::read()?;
                if let Some(msg) = Self::handle_event(&event, model) {
                    tracing::trace!(?msg, "message");
                    let side_msg = msg.clone();
                    *model = update(std::mem::take(model), msg);
                    Self::handle_message_side_effects(model, &side_msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    let event = event::read()?;
                    if let Some(msg) = Self::handle_event(&event, model) {
                        let side_msg = msg.clone();
                        *model = update(std::mem::take(model), msg);
                        Self::handle_message_side_effects(model, &side_msg);
                        needs_render = true;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
