//! Clipboard access for cut, copy and paste.

/// Shared text buffer provided by the host.
pub trait Clipboard {
    fn get_text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: &str);
}

/// System clipboard with an in-process fallback.
///
/// A fresh `arboard` handle is created per operation; if the system
/// clipboard is unavailable the last copied text is still pasteable.
#[derive(Debug, Default)]
pub struct SystemClipboard {
    internal: String,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        arboard::Clipboard::new()
            .ok()
            .and_then(|mut cb| cb.get_text().ok())
            .filter(|t| !t.is_empty())
            .or_else(|| {
                if self.internal.is_empty() {
                    None
                } else {
                    Some(self.internal.clone())
                }
            })
    }

    fn set_text(&mut self, text: &str) {
        self.internal = text.to_string();
        match arboard::Clipboard::new() {
            Ok(mut cb) => {
                if let Err(e) = cb.set_text(text) {
                    log::debug!("system clipboard rejected text: {}", e);
                }
            }
            Err(e) => log::debug!("system clipboard unavailable: {}", e),
        }
    }
}

/// Clipboard that lives only in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self { text: Some(text.to_string()) }
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}
