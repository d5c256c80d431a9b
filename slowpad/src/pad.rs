//! The editor controller.
//!
//! `Pad` owns the document state, the text buffer and at most one pending
//! prompt. Every menu command and accelerator lands on one of its methods.
//! New, Open and Exit go through the unsaved-changes question when the
//! document is dirty:
//!
//! - clean: the action runs immediately
//! - dirty: [`Prompt::ConfirmClose`] waits for a [`UserChoice`]
//!   - `Confirm` saves first and runs the action only if the save went through
//!   - `Deny` runs the action without saving
//!   - `Cancel` drops the action and changes nothing
//!
//! While a prompt is pending, other commands are ignored.

use crate::buffer::{Buffer, Cursor};
use crate::clipboard::Clipboard;
use crate::config::PadConfig;
use crate::document::{DocPath, Document};
use crate::fileio;
use crate::prompt::{Deferred, Prompt, UserChoice};
use log::{debug, info, warn};
use std::path::PathBuf;

pub struct Pad {
    config: PadConfig,
    doc: Document,
    buffer: Buffer,
    prompt: Option<Prompt>,
    exit_requested: bool,
}

impl Pad {
    pub fn new(config: PadConfig) -> Self {
        let doc = Document::untitled(&config.untitled_name);
        Self {
            config,
            doc,
            buffer: Buffer::new(),
            prompt: None,
            exit_requested: false,
        }
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn text(&self) -> &str {
        &self.buffer.text
    }

    /// Direct access for the text widget. Call [`Pad::text_changed`] after
    /// it edits the string.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.buffer.text
    }

    pub fn text_changed(&mut self) {
        self.doc.track(&self.buffer.text);
    }

    /// Apply an edit to the text and update the dirty flag.
    pub fn edit(&mut self, f: impl FnOnce(&mut String)) {
        f(&mut self.buffer.text);
        self.text_changed();
    }

    pub fn set_cursor(&mut self, cursor: Option<Cursor>) {
        self.buffer.cursor = cursor;
    }

    pub fn title(&self) -> String {
        self.doc.title()
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.prompt.is_some()
    }

    /// Set once Exit has been allowed to proceed.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    // ---------------------------------------------------------------
    // File menu
    // ---------------------------------------------------------------

    pub fn new_file(&mut self) {
        self.guard(Deferred::New);
    }

    pub fn open(&mut self) {
        self.guard(Deferred::Open);
    }

    /// Open a specific file, asking about unsaved changes first.
    pub fn open_path(&mut self, path: PathBuf) {
        self.guard(Deferred::OpenPath(path));
    }

    pub fn exit(&mut self) {
        self.guard(Deferred::Exit);
    }

    pub fn save(&mut self) {
        if self.ignore_while_busy("save") {
            return;
        }
        self.save_then(None);
    }

    pub fn save_as(&mut self) {
        if self.ignore_while_busy("save as") {
            return;
        }
        self.ask_save_location(None);
    }

    // ---------------------------------------------------------------
    // Edit menu
    // ---------------------------------------------------------------

    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) {
        if self.ignore_while_busy("cut") {
            return;
        }
        if self.buffer.cut(clipboard) {
            self.text_changed();
        }
    }

    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) {
        if self.ignore_while_busy("copy") {
            return;
        }
        self.buffer.copy(clipboard);
    }

    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) {
        if self.ignore_while_busy("paste") {
            return;
        }
        if self.buffer.paste(clipboard) {
            self.text_changed();
        }
    }

    pub fn select_all(&mut self) {
        if self.ignore_while_busy("select all") {
            return;
        }
        self.buffer.select_all();
    }

    // ---------------------------------------------------------------
    // Help menu
    // ---------------------------------------------------------------

    pub fn about(&mut self) {
        if !self.ignore_while_busy("about") {
            self.prompt = Some(Prompt::About);
        }
    }

    pub fn shortcuts(&mut self) {
        if !self.ignore_while_busy("shortcuts") {
            self.prompt = Some(Prompt::Shortcuts);
        }
    }

    // ---------------------------------------------------------------
    // Prompt answers
    // ---------------------------------------------------------------

    /// Answer the unsaved-changes question.
    pub fn answer_confirm(&mut self, choice: UserChoice) {
        let then = match self.prompt.take() {
            Some(Prompt::ConfirmClose { then }) => then,
            other => {
                self.prompt = other;
                return;
            }
        };
        debug!("unsaved changes: {:?} before {:?}", choice, then);
        match choice {
            UserChoice::Confirm => self.save_then(Some(then)),
            UserChoice::Deny => self.proceed(then),
            UserChoice::Cancel => {}
        }
    }

    /// Answer the save dialog; `None` means the user cancelled it.
    pub fn answer_save_as(&mut self, choice: Option<PathBuf>) {
        let then = match self.prompt.take() {
            Some(Prompt::SaveAs { then, .. }) => then,
            other => {
                self.prompt = other;
                return;
            }
        };
        match choice {
            Some(path) => self.write_to(path, then),
            None => {
                info!("save cancelled, work not saved");
                self.doc.last_save_succeeded = false;
                self.prompt = Some(Prompt::UnsavedWarning);
            }
        }
    }

    /// Answer the open dialog; `None` means the user cancelled it.
    pub fn answer_open(&mut self, choice: Option<PathBuf>) {
        match self.prompt.take() {
            Some(Prompt::OpenFile) => {}
            other => {
                self.prompt = other;
                return;
            }
        }
        if let Some(path) = choice {
            self.load(path);
        }
    }

    /// Close an acknowledge-only prompt.
    pub fn dismiss(&mut self) {
        if self.prompt.as_ref().is_some_and(Prompt::is_notice) {
            self.prompt = None;
        }
    }

    // ---------------------------------------------------------------
    // Flow
    // ---------------------------------------------------------------

    fn ignore_while_busy(&self, command: &str) -> bool {
        if self.prompt.is_some() {
            debug!("{} ignored, a prompt is open", command);
            true
        } else {
            false
        }
    }

    fn guard(&mut self, action: Deferred) {
        if self.ignore_while_busy("file command") {
            return;
        }
        if self.doc.dirty {
            self.prompt = Some(Prompt::ConfirmClose { then: action });
        } else {
            self.proceed(action);
        }
    }

    fn proceed(&mut self, action: Deferred) {
        match action {
            Deferred::New => {
                info!("new document");
                self.doc = Document::untitled(&self.config.untitled_name);
                self.buffer.reset(String::new());
            }
            Deferred::Open => self.prompt = Some(Prompt::OpenFile),
            Deferred::OpenPath(path) => self.load(path),
            Deferred::Exit => {
                info!("exit");
                self.exit_requested = true;
            }
        }
    }

    fn save_then(&mut self, then: Option<Deferred>) {
        match self.doc.path.clone() {
            DocPath::Untitled(_) => self.ask_save_location(then),
            DocPath::File(path) => self.write_to(path, then),
        }
    }

    fn ask_save_location(&mut self, then: Option<Deferred>) {
        self.prompt = Some(Prompt::SaveAs {
            suggested: self.doc.suggested_file_name(),
            then,
        });
    }

    fn write_to(&mut self, path: PathBuf, then: Option<Deferred>) {
        match fileio::write_text(&path, &self.buffer.text) {
            Ok(()) => {
                info!("saved {}", path.display());
                self.doc.mark_saved(path, &self.buffer.text);
                if let Some(action) = then {
                    self.proceed(action);
                }
            }
            Err(e) => {
                warn!("{}", e);
                self.doc.last_save_succeeded = false;
                self.prompt = Some(Prompt::Failure(e.to_string()));
            }
        }
    }

    fn load(&mut self, path: PathBuf) {
        match fileio::read_text(&path, &self.config.line_ending) {
            Ok(content) => {
                info!("opened {}", path.display());
                self.doc = Document::opened(path, &content);
                self.buffer.reset(content);
            }
            Err(e) => {
                warn!("{}", e);
                self.prompt = Some(Prompt::Failure(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use std::fs;

    fn pad() -> Pad {
        Pad::new(PadConfig::default().with_line_ending("\r\n"))
    }

    fn type_text(pad: &mut Pad, text: &str) {
        pad.edit(|t| t.push_str(text));
    }

    fn snapshot(pad: &Pad) -> (DocPath, bool, String) {
        (pad.document().path.clone(), pad.document().dirty, pad.text().to_string())
    }

    /// Pad with `text` saved at `dir/name`, then edited to `edited`.
    fn saved_then_edited(dir: &std::path::Path, name: &str, text: &str, edited: &str) -> (Pad, PathBuf) {
        let path = dir.join(name);
        let mut pad = pad();
        type_text(&mut pad, text);
        pad.save();
        pad.answer_save_as(Some(path.clone()));
        pad.edit(|t| *t = edited.to_string());
        (pad, path)
    }

    #[test]
    fn test_fresh_pad() {
        let pad = pad();
        assert_eq!(pad.title(), "Untitled.txt");
        assert!(!pad.document().dirty);
        assert!(pad.prompt().is_none());
        assert_eq!(pad.text(), "");
    }

    #[test]
    fn test_title_tracks_dirty_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut pad = pad();
        assert_eq!(pad.title(), "Untitled.txt");

        type_text(&mut pad, "h");
        assert_eq!(pad.title(), "*Untitled.txt");
        type_text(&mut pad, "i");
        assert_eq!(pad.title(), "*Untitled.txt");

        pad.save();
        assert_eq!(
            pad.prompt(),
            Some(&Prompt::SaveAs { suggested: "Untitled.txt".into(), then: None })
        );
        pad.answer_save_as(Some(dir.path().join("notes.txt")));
        assert_eq!(pad.title(), "notes.txt");
        assert!(pad.document().last_save_succeeded);
        assert_eq!(fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "hi");
    }

    #[test]
    fn test_dirty_iff_text_differs_from_saved() {
        let dir = tempfile::tempdir().unwrap();
        let (mut pad, _) = saved_then_edited(dir.path(), "a.txt", "abc", "abc");
        assert!(!pad.document().dirty);

        let steps: [(&str, bool); 5] = [
            ("abcd", true),
            ("abc", false),
            ("", true),
            ("ab", true),
            ("abc", false),
        ];
        for (text, dirty) in steps {
            pad.edit(|t| *t = text.to_string());
            assert_eq!(pad.document().dirty, dirty, "after editing to {:?}", text);
        }
    }

    #[test]
    fn test_new_when_clean_never_prompts() {
        let mut pad = pad();
        pad.new_file();
        assert!(pad.prompt().is_none());
        assert_eq!(pad.title(), "Untitled.txt");
    }

    #[test]
    fn test_new_when_dirty_prompts_once() {
        let mut pad = pad();
        type_text(&mut pad, "draft");
        pad.new_file();
        assert_eq!(pad.prompt(), Some(&Prompt::ConfirmClose { then: Deferred::New }));

        pad.answer_confirm(UserChoice::Deny);
        assert!(pad.prompt().is_none());
        assert_eq!(pad.text(), "");
        assert!(!pad.document().dirty);
        assert!(pad.document().path.is_untitled());
    }

    #[test]
    fn test_cancel_leaves_everything_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let (mut pad, path) = saved_then_edited(dir.path(), "keep.txt", "one", "one two");
        let before = snapshot(&pad);

        for command in [Pad::new_file as fn(&mut Pad), Pad::open, Pad::exit] {
            command(&mut pad);
            assert!(matches!(pad.prompt(), Some(Prompt::ConfirmClose { .. })));
            pad.answer_confirm(UserChoice::Cancel);
            assert!(pad.prompt().is_none());
            assert_eq!(snapshot(&pad), before);
            assert!(!pad.exit_requested());
        }
        assert_eq!(fs::read_to_string(path).unwrap(), "one");
    }

    #[test]
    fn test_exit_with_empty_buffer_does_not_prompt() {
        let mut pad = pad();
        pad.exit();
        assert!(pad.prompt().is_none());
        assert!(pad.exit_requested());
    }

    #[test]
    fn test_exit_after_clearing_new_text_does_not_prompt() {
        let mut pad = pad();
        type_text(&mut pad, "x");
        pad.edit(|t| t.clear());
        pad.exit();
        assert!(pad.exit_requested());
    }

    #[test]
    fn test_exit_emptied_saved_document_still_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let (mut pad, _) = saved_then_edited(dir.path(), "kept.txt", "content", "");
        pad.exit();
        assert_eq!(pad.prompt(), Some(&Prompt::ConfirmClose { then: Deferred::Exit }));
        assert!(!pad.exit_requested());
    }

    #[test]
    fn test_exit_dont_save_leaves_disk_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let (mut pad, path) = saved_then_edited(dir.path(), "hello.txt", "old", "hello");
        assert!(pad.document().dirty);

        pad.exit();
        pad.answer_confirm(UserChoice::Deny);
        assert!(pad.exit_requested());
        assert_eq!(fs::read_to_string(path).unwrap(), "old");
    }

    #[test]
    fn test_exit_confirm_saves_named_file_then_exits() {
        let dir = tempfile::tempdir().unwrap();
        let (mut pad, path) = saved_then_edited(dir.path(), "hello.txt", "old", "new");
        pad.exit();
        pad.answer_confirm(UserChoice::Confirm);
        assert!(pad.exit_requested());
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn test_confirm_on_untitled_goes_through_save_as() {
        let dir = tempfile::tempdir().unwrap();
        let mut pad = pad();
        type_text(&mut pad, "hello");
        pad.exit();
        pad.answer_confirm(UserChoice::Confirm);
        assert_eq!(
            pad.prompt(),
            Some(&Prompt::SaveAs { suggested: "Untitled.txt".into(), then: Some(Deferred::Exit) })
        );
        assert!(!pad.exit_requested());

        pad.answer_save_as(Some(dir.path().join("hello.txt")));
        assert!(pad.exit_requested());
        assert_eq!(fs::read_to_string(dir.path().join("hello.txt")).unwrap(), "hello");
    }

    #[test]
    fn test_cancelled_save_as_aborts_action_and_warns() {
        let mut pad = pad();
        type_text(&mut pad, "hello");
        pad.new_file();
        pad.answer_confirm(UserChoice::Confirm);
        pad.answer_save_as(None);

        assert_eq!(pad.prompt(), Some(&Prompt::UnsavedWarning));
        assert!(!pad.document().last_save_succeeded);
        assert_eq!(pad.text(), "hello");
        assert!(pad.document().dirty);

        pad.dismiss();
        assert!(pad.prompt().is_none());
        assert_eq!(pad.title(), "*Untitled.txt");
    }

    #[test]
    fn test_open_replaces_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ab.txt");
        fs::write(&path, "a\nb").unwrap();

        let mut pad = pad();
        pad.open();
        assert_eq!(pad.prompt(), Some(&Prompt::OpenFile));
        pad.answer_open(Some(path.clone()));

        assert_eq!(pad.text(), "a\r\nb\r\n");
        assert!(!pad.document().dirty);
        assert_eq!(pad.document().path, DocPath::File(path));
        assert_eq!(pad.title(), "ab.txt");
    }

    #[test]
    fn test_open_cancel_changes_nothing() {
        let mut pad = pad();
        type_text(&mut pad, "draft");
        pad.open();
        pad.answer_confirm(UserChoice::Deny);
        assert_eq!(pad.prompt(), Some(&Prompt::OpenFile));

        let before = snapshot(&pad);
        pad.answer_open(None);
        assert!(pad.prompt().is_none());
        assert_eq!(snapshot(&pad), before);
    }

    #[test]
    fn test_open_missing_file_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut pad = pad();
        pad.open();
        pad.answer_open(Some(dir.path().join("gone.txt")));
        assert!(matches!(pad.prompt(), Some(Prompt::Failure(_))));
        assert!(pad.document().path.is_untitled());
        pad.dismiss();
        assert!(pad.prompt().is_none());
    }

    #[test]
    fn test_open_path_asks_first_when_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dropped.txt");
        fs::write(&path, "dropped").unwrap();

        let mut pad = pad();
        type_text(&mut pad, "draft");
        pad.open_path(path.clone());
        assert_eq!(
            pad.prompt(),
            Some(&Prompt::ConfirmClose { then: Deferred::OpenPath(path) })
        );
        pad.answer_confirm(UserChoice::Deny);
        assert_eq!(pad.text(), "dropped\r\n");
    }

    #[test]
    fn test_failed_save_keeps_state_and_blocks_action() {
        let dir = tempfile::tempdir().unwrap();
        let mut pad = pad();
        type_text(&mut pad, "hello");
        pad.exit();
        pad.answer_confirm(UserChoice::Confirm);
        pad.answer_save_as(Some(dir.path().join("missing").join("x.txt")));

        assert!(matches!(pad.prompt(), Some(Prompt::Failure(_))));
        assert!(!pad.exit_requested());
        assert!(pad.document().dirty);
        assert!(pad.document().path.is_untitled());
        assert_eq!(pad.text(), "hello");
    }

    #[test]
    fn test_save_as_then_save_writes_same_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("same.txt");
        let mut pad = pad();
        type_text(&mut pad, "line one\r\nline two\r\n");
        pad.save_as();
        pad.answer_save_as(Some(path.clone()));
        let first = fs::read(&path).unwrap();

        pad.save();
        assert!(pad.prompt().is_none());
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_save_load_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rt.txt");
        let text = "alpha\r\n\r\nbeta\r\n";

        let mut pad = pad();
        type_text(&mut pad, text);
        pad.save_as();
        pad.answer_save_as(Some(path.clone()));

        let mut other = self::pad();
        other.open();
        other.answer_open(Some(path.clone()));
        assert_eq!(other.text(), text);
        other.save();
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn test_edit_commands_track_dirty() {
        let mut clip = MemoryClipboard::default();
        let mut pad = pad();
        type_text(&mut pad, "hello world");

        pad.select_all();
        pad.copy(&mut clip);
        assert_eq!(clip.get_text().as_deref(), Some("hello world"));
        assert_eq!(pad.text(), "hello world");

        pad.set_cursor(Some(Cursor::select(5, 11)));
        pad.cut(&mut clip);
        assert_eq!(pad.text(), "hello");
        assert_eq!(clip.get_text().as_deref(), Some(" world"));

        pad.paste(&mut clip);
        assert_eq!(pad.text(), "hello world");
        assert!(pad.document().dirty);
    }

    #[test]
    fn test_paste_without_selection_appends_to_end() {
        let mut clip = MemoryClipboard::with_text("b");
        let mut pad = pad();
        type_text(&mut pad, "ac");
        pad.set_cursor(Some(Cursor::new(1)));
        pad.paste(&mut clip);
        assert_eq!(pad.text(), "acb");
        assert_eq!(pad.buffer().cursor, Some(Cursor::new(3)));
        assert!(pad.document().dirty);
    }

    #[test]
    fn test_commands_ignored_while_prompt_open() {
        let mut clip = MemoryClipboard::with_text("zzz");
        let mut pad = pad();
        type_text(&mut pad, "draft");
        pad.exit();
        let pending = pad.prompt().cloned();

        pad.new_file();
        pad.save();
        pad.paste(&mut clip);
        pad.about();
        pad.dismiss();
        pad.answer_open(Some(PathBuf::from("ignored.txt")));
        assert_eq!(pad.prompt().cloned(), pending);
        assert_eq!(pad.text(), "draft");
    }

    #[test]
    fn test_about_is_dismissable() {
        let mut pad = pad();
        pad.about();
        assert_eq!(pad.prompt(), Some(&Prompt::About));
        pad.dismiss();
        assert!(pad.prompt().is_none());
    }
}
