//! Document state: where the text lives on disk and whether it differs
//! from what was last loaded or saved.

use std::path::{Path, PathBuf};

/// Location of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocPath {
    /// Never saved; displayed under the sentinel name.
    Untitled(String),
    File(PathBuf),
}

impl DocPath {
    pub fn is_untitled(&self) -> bool {
        matches!(self, DocPath::Untitled(_))
    }

    /// File name without directories, as shown in the title.
    pub fn file_name(&self) -> String {
        match self {
            DocPath::Untitled(name) => name.clone(),
            DocPath::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.to_string_lossy().to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub path: DocPath,
    /// Whether the buffer differs from `baseline`
    pub dirty: bool,
    /// Outcome of the most recent save attempt
    pub last_save_succeeded: bool,
    /// Text as of the last successful load or save
    baseline: String,
}

impl Document {
    /// Fresh, empty, never-saved document.
    pub fn untitled(name: &str) -> Self {
        Self {
            path: DocPath::Untitled(name.to_string()),
            dirty: false,
            last_save_succeeded: false,
            baseline: String::new(),
        }
    }

    /// Document just loaded from `path` with `content`.
    pub fn opened(path: PathBuf, content: &str) -> Self {
        Self {
            path: DocPath::File(path),
            dirty: false,
            last_save_succeeded: false,
            baseline: content.to_string(),
        }
    }

    /// Re-evaluate the dirty flag after the buffer changed.
    pub fn track(&mut self, text: &str) {
        self.dirty = text != self.baseline;
    }

    /// Record a successful write of `text` to `path`.
    pub fn mark_saved(&mut self, path: PathBuf, text: &str) {
        self.path = DocPath::File(path);
        self.baseline = text.to_string();
        self.dirty = false;
        self.last_save_succeeded = true;
    }

    /// Window title: the bare file name, with a single leading `*` while dirty.
    pub fn title(&self) -> String {
        let name = self.path.file_name();
        if self.dirty {
            format!("*{}", name)
        } else {
            name
        }
    }

    /// File name to pre-fill in the save dialog.
    pub fn suggested_file_name(&self) -> String {
        let name = self.path.file_name();
        if Path::new(&name).extension().is_some() {
            name
        } else {
            format!("{}.txt", name)
        }
    }
}
