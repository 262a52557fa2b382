//! The document being edited and everything the status line reports about it.

use std::path::{Path, PathBuf};

use crate::editor::{EditorBuffer, EditorMode};
use crate::files::LoadedFile;

/// Name bound to a document that never came from a file.
pub const DEFAULT_FILE_NAME: &str = "untitled.txt";

/// Text left behind by the simulated exit.
pub const EXIT_SENTINEL: &str = "// Editor 'exited'. Press Ctrl+Q to leave the simulator.";

/// The name a document is saved under and where saves go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBinding {
    name: String,
    dir: PathBuf,
}

impl FileBinding {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
        }
    }

    /// Bind to the file at `path`, keeping its directory for saves.
    pub fn for_path(path: &Path) -> Self {
        let name = path.file_name().map_or_else(
            || DEFAULT_FILE_NAME.to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self { name, dir }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where a save writes: the bound directory joined with the name as-is.
    pub fn save_path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

impl Default for FileBinding {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME, ".")
    }
}

/// Document, caret, mode and file binding for the one open document.
#[derive(Debug)]
pub struct EditorSession {
    pub buffer: EditorBuffer,
    pub mode: EditorMode,
    pub binding: FileBinding,
}

impl EditorSession {
    /// An empty, unnamed document in insert mode.
    pub fn new() -> Self {
        Self {
            buffer: EditorBuffer::empty(),
            mode: EditorMode::default(),
            binding: FileBinding::default(),
        }
    }

    pub fn with_text(text: &str, binding: FileBinding) -> Self {
        Self {
            buffer: EditorBuffer::from_text(text),
            mode: EditorMode::default(),
            binding,
        }
    }

    pub fn from_loaded(file: LoadedFile) -> Self {
        let mut session = Self::new();
        session.replace_document(file);
        session
    }

    pub const fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Swap in a freshly loaded file and bind its name and directory.
    ///
    /// The editing mode is left alone.
    pub fn replace_document(&mut self, file: LoadedFile) {
        self.buffer.replace_text(&file.content);
        self.binding = FileBinding::new(file.name, file.dir);
    }

    /// Clear to the exit sentinel and forget the file name.
    pub fn reset_to_exit_sentinel(&mut self) {
        self.buffer.replace_text(EXIT_SENTINEL);
        self.binding = FileBinding::new(DEFAULT_FILE_NAME, self.binding.dir.clone());
    }

    pub fn save_path(&self) -> PathBuf {
        self.binding.save_path()
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
