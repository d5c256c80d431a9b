//! File browsing for the open and save dialogs

use std::path::{Path, PathBuf};

/// Simple file browser state
#[derive(Debug, Clone)]
pub struct FileBrowser {
    pub current_dir: PathBuf,
    pub entries: Vec<FileEntry>,
    pub selected_index: Option<usize>,
    pub filter_extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
}

impl FileBrowser {
    pub fn new(start_dir: PathBuf) -> Self {
        let mut browser = Self {
            current_dir: start_dir,
            entries: Vec::new(),
            selected_index: None,
            filter_extensions: Vec::new(),
        };
        browser.refresh();
        browser
    }

    pub fn with_filter(mut self, extensions: Vec<String>) -> Self {
        self.filter_extensions = extensions;
        self.refresh();
        self
    }

    /// True if `path` passes the extension filter. An empty filter accepts everything.
    pub fn accepts(&self, path: &Path) -> bool {
        matches_extension(path, &self.filter_extensions)
    }

    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected_index = None;

        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_directory: true,
            });
        }

        let read_dir = match std::fs::read_dir(&self.current_dir) {
            Ok(rd) => rd,
            Err(e) => {
                log::warn!("cannot list {}: {}", self.current_dir.display(), e);
                return;
            }
        };

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in read_dir.flatten() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            // Skip hidden files
            if name.starts_with('.') {
                continue;
            }

            let is_directory = path.is_dir();
            if !is_directory && !self.accepts(&path) {
                continue;
            }

            let entry = FileEntry { name, path, is_directory };
            if is_directory {
                dirs.push(entry);
            } else {
                files.push(entry);
            }
        }

        dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        // Directories first, then files
        self.entries.extend(dirs);
        self.entries.extend(files);
    }

    pub fn navigate_to(&mut self, path: PathBuf) {
        if path.is_dir() {
            self.current_dir = path;
            self.refresh();
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected_index.and_then(|i| self.entries.get(i))
    }

    /// Directory a typed file name is saved into: the selected folder if
    /// one is highlighted (other than ".."), otherwise the current one.
    pub fn save_directory(&self) -> PathBuf {
        match self.selected_entry() {
            Some(entry) if entry.is_directory && entry.name != ".." => entry.path.clone(),
            _ => self.current_dir.clone(),
        }
    }
}

/// Case-insensitive extension check against a list like `["txt"]`.
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    extensions.iter().any(|f| f.to_lowercase() == ext)
}

/// Get the documents directory
pub fn documents_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
