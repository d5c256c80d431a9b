//! padcore — shared look and file browsing for slowPad

pub mod storage;
pub mod theme;
pub mod widgets;

pub use storage::{documents_dir, FileBrowser, FileEntry};
pub use theme::{PadColors, PadTheme};
