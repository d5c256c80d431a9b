//! Built-in settings. slowPad persists nothing besides the documents it edits.

/// Name shown for a document that has never been saved.
pub const UNTITLED: &str = "Untitled.txt";

/// Line terminator of the host platform.
pub const HOST_LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

#[derive(Debug, Clone)]
pub struct PadConfig {
    /// Sentinel file name used until the first save
    pub untitled_name: String,
    /// Terminator appended after every line when a file is opened
    pub line_ending: String,
    /// Extensions offered by the open and save dialogs
    pub extensions: Vec<String>,
    pub window_size: [f32; 2],
    pub editor_font_size: f32,
    pub about_text: String,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            untitled_name: UNTITLED.to_string(),
            line_ending: HOST_LINE_ENDING.to_string(),
            extensions: vec!["txt".to_string()],
            window_size: [720.0, 540.0],
            editor_font_size: 15.0,
            about_text: format!(
                "slowPad {}\n\na plain-text notepad for the slow computer.\ncreate, edit, open and save .txt files.",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl PadConfig {
    /// Same defaults, but with an explicit line terminator.
    pub fn with_line_ending(mut self, line_ending: &str) -> Self {
        self.line_ending = line_ending.to_string();
        self
    }
}
