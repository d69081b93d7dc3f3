//! File-backed persistence for the todo list.
//!
//! The whole list is read once at startup and rewritten in full on every
//! save. A missing file is a normal first run and loads as an empty list.

pub mod codec;

use crate::error::StoreError;
use crate::types::TodoList;
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default todo file name, relative to the working directory.
pub const DEFAULT_TODO_FILE: &str = "todos.txt";

/// Handle to one todo file on disk.
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the todo file.
    ///
    /// Returns an empty list when the file does not exist. Malformed records
    /// are skipped, never reported as errors. Bytes that are not valid UTF-8
    /// decode to `U+FFFD` so the rest of the file still loads.
    pub fn load(&self) -> Result<TodoList, StoreError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "todo file not found, starting empty");
                return Ok(TodoList::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let text = String::from_utf8_lossy(&raw);
        if let Cow::Owned(_) = text {
            debug!(path = %self.path.display(), "todo file is not valid UTF-8, decoding lossily");
        }
        let parsed = codec::parse(&text);
        if parsed.skipped > 0 {
            debug!(
                path = %self.path.display(),
                skipped = parsed.skipped,
                "skipped malformed todo records"
            );
        }
        debug!(path = %self.path.display(), items = parsed.items.len(), "loaded todo list");
        Ok(TodoList::from_items(parsed.items))
    }

    /// Overwrite the todo file with `list`.
    pub fn save(&self, list: &TodoList) -> Result<(), StoreError> {
        let body = codec::encode(list);
        // Write a sibling temp file first so a failed write keeps the old file intact.
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, body).map_err(|source| StoreError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            if let Err(e) = fs::remove_file(&tmp_path) {
                debug!(path = %tmp_path.display(), error = %e, "failed to remove temp todo file");
            }
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }
        debug!(path = %self.path.display(), items = list.len(), "saved todo list");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_TODO_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
