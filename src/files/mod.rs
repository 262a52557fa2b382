//! Plain-text load and save.
//!
//! Saving is synchronous. Loading runs on a worker thread and hands back a
//! single result over a channel, polled by the event loop the same way
//! other background notifications are.
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Context, Result, anyhow};

use crate::session::FileBinding;

/// A file read from disk, ready to become the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    /// File name without directory, bound as the document name.
    pub name: String,
    /// Directory the file came from; later saves go back there.
    pub dir: PathBuf,
    pub content: String,
}

/// Read `path` as text. Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the path has no file name.
pub fn read_document(path: &Path) -> Result<LoadedFile> {
    if path.file_name().is_none() {
        return Err(anyhow!("{} does not name a file", path.display()));
    }
    let binding = FileBinding::for_path(path);
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes).into_owned();
    tracing::info!(path = %path.display(), chars = content.chars().count(), "document read");
    Ok(LoadedFile {
        name: binding.name().to_string(),
        dir: binding.dir().to_path_buf(),
        content,
    })
}

/// Write `text` to `path` unchanged.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "document written");
    Ok(())
}

/// A load in flight.
///
/// Dropping it abandons the load; the worker finishes its read and the
/// result is discarded.
#[derive(Debug)]
pub struct PendingLoad {
    path: PathBuf,
    rx: Option<Receiver<Result<LoadedFile>>>,
}

impl PendingLoad {
    /// Start reading `path` on a worker thread.
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::channel();
        let worker_path = path.clone();
        thread::spawn(move || {
            let _ = tx.send(read_document(&worker_path));
        });
        Self { path, rx: Some(rx) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The load result, once the worker is done. Yields at most once.
    pub fn try_take(&mut self) -> Option<Result<LoadedFile>> {
        let outcome = match self.rx.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(anyhow!(
                "load of {} ended without a result",
                self.path.display()
            )),
        };
        self.rx = None;
        Some(outcome)
    }
}
