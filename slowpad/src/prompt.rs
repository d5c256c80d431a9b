//! Modal prompts and their answers.
//!
//! A prompt is a value waiting in [`crate::Pad`] until the user answers it;
//! the front end draws it as a window and hands the answer back.

use crate::document::DocPath;
use std::path::PathBuf;

/// Answer to the three-way save/don't-save/cancel question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChoice {
    /// Save first, then continue
    Confirm,
    /// Continue without saving
    Deny,
    /// Abandon the action
    Cancel,
}

/// Action held back until the unsaved-changes question is settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    New,
    /// Show the open dialog
    Open,
    /// Open a known file, e.g. one dropped on the window
    OpenPath(PathBuf),
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Unsaved changes: save, don't save, or cancel, then `then`
    ConfirmClose { then: Deferred },
    /// Pick a `.txt` file to open
    OpenFile,
    /// Pick where to save; `then` runs once the write succeeds
    SaveAs { suggested: String, then: Option<Deferred> },
    /// Acknowledge-only: save-as was cancelled
    UnsavedWarning,
    /// Acknowledge-only: an I/O operation failed
    Failure(String),
    About,
    Shortcuts,
}

impl Prompt {
    /// Prompts that only need an "ok".
    pub fn is_notice(&self) -> bool {
        matches!(
            self,
            Prompt::UnsavedWarning | Prompt::Failure(_) | Prompt::About | Prompt::Shortcuts
        )
    }
}

pub const UNSAVED_WARNING: &str = "Your work has not been saved.";

/// Text of the unsaved-changes question. Only the wording differs between
/// a never-saved document and one with a file on disk.
pub fn confirm_close_message(path: &DocPath) -> String {
    match path {
        DocPath::Untitled(_) => "Do you want to save your file before closing?".to_string(),
        DocPath::File(p) => format!("Do you want to save your file to {} before closing?", p.display()),
    }
}
