//! Text buffer with a caret and selection, plus the Edit menu operations.
//!
//! Positions are character indices, the same unit egui's text cursor uses.

use crate::clipboard::Clipboard;

/// Caret position and optional selection anchor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub pos: usize,
    pub anchor: Option<usize>,
}

impl Cursor {
    pub fn new(pos: usize) -> Self {
        Self { pos, anchor: None }
    }

    /// Selection from `anchor` to `pos`; `anchor == pos` is a plain caret.
    pub fn select(anchor: usize, pos: usize) -> Self {
        Self { pos, anchor: Some(anchor) }
    }

    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.anchor.filter(|&a| a != self.pos).map(|anchor| {
            if anchor < self.pos { (anchor, self.pos) } else { (self.pos, anchor) }
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Buffer {
    pub text: String,
    /// `None` until the text area has placed a caret
    pub cursor: Option<Cursor>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_text(text: String) -> Self {
        Self { text, cursor: None }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Non-empty selection, ordered and clamped to the text.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        let len = self.char_count();
        self.cursor
            .and_then(|c| c.selection_range())
            .map(|(s, e)| (s.min(len), e.min(len)))
            .filter(|(s, e)| s < e)
    }

    pub fn selected_text(&self) -> Option<String> {
        self.selection_range()
            .map(|(s, e)| self.text.chars().skip(s).take(e - s).collect())
    }

    /// Put the selection on the clipboard. Returns false when nothing is selected.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> bool {
        match self.selected_text() {
            Some(text) => {
                clipboard.set_text(&text);
                true
            }
            None => false,
        }
    }

    /// Copy, then remove the selection. Returns true if the text changed.
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        if !self.copy(clipboard) {
            return false;
        }
        self.delete_selection()
    }

    /// Replace the selection with the clipboard text, or append it to the
    /// end when nothing is selected. Returns true if the text changed.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let Some(text) = clipboard.get_text().filter(|t| !t.is_empty()) else {
            return false;
        };
        if let Some((start, end)) = self.selection_range() {
            self.replace_range(start, end, &text);
            self.cursor = Some(Cursor::new(start + text.chars().count()));
        } else {
            self.text.push_str(&text);
            self.cursor = Some(Cursor::new(self.char_count()));
        }
        true
    }

    pub fn select_all(&mut self) {
        self.cursor = Some(Cursor::select(0, self.char_count()));
    }

    /// Replace all text and drop the caret, as after New or Open.
    pub fn reset(&mut self, text: String) {
        self.text = text;
        self.cursor = None;
    }

    fn delete_selection(&mut self) -> bool {
        match self.selection_range() {
            Some((start, end)) => {
                self.replace_range(start, end, "");
                self.cursor = Some(Cursor::new(start));
                true
            }
            None => false,
        }
    }

    fn replace_range(&mut self, start: usize, end: usize, with: &str) {
        let start = char_to_byte(&self.text, start);
        let end = char_to_byte(&self.text, end);
        self.text.replace_range(start..end, with);
    }
}

/// Byte offset of the `char_idx`-th character, clamped to the end.
fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(b, _)| b)
        .unwrap_or(text.len())
}
