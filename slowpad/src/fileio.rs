//! Whole-file text I/O. Handles are opened and dropped inside each call.

use crate::error::{PadError, Result};
use std::path::Path;

const UTF8_BOM: &str = "\u{feff}";

/// Read `path` line by line and rebuild it with every line followed by
/// `line_ending`. `\n`, `\r\n` and a lone `\r` all end a line.
pub fn read_text(path: &Path, line_ending: &str) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| PadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = String::from_utf8_lossy(&bytes);
    if matches!(decoded, std::borrow::Cow::Owned(_)) {
        log::warn!("{} is not valid UTF-8, replaced bad bytes", path.display());
    }
    let text = decoded.strip_prefix(UTF8_BOM).unwrap_or(&decoded[..]);

    let mut content = String::with_capacity(text.len());
    for line in split_lines(text) {
        content.push_str(line);
        content.push_str(line_ending);
    }
    log::debug!("read {} ({} bytes)", path.display(), bytes.len());
    Ok(content)
}

/// Write `text` to `path` verbatim, replacing any previous content.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| PadError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} ({} bytes)", path.display(), text.len());
    Ok(())
}

/// Split into lines without terminators. A trailing terminator does not
/// start an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb\n\nc"), vec!["a", "b", "", "c"]);
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_split_lines_multibyte() {
        assert_eq!(split_lines("café\r\n中文"), vec!["café", "中文"]);
    }

    #[test]
    fn test_read_normalizes_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ab.txt");
        std::fs::write(&path, "a\nb").unwrap();
        assert_eq!(read_text(&path, "\r\n").unwrap(), "a\r\nb\r\n");

        std::fs::write(&path, "a\r\nb\r\n").unwrap();
        assert_eq!(read_text(&path, "\n").unwrap(), "a\nb\n");
    }

    #[test]
    fn test_read_drops_bom_and_replaces_bad_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odd.txt");
        std::fs::write(&path, b"\xEF\xBB\xBFhi\xFF").unwrap();
        assert_eq!(read_text(&path, "\n").unwrap(), "hi\u{fffd}\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("nope.txt"), "\n").unwrap_err();
        assert!(matches!(err, PadError::Read { .. }));
    }

    #[test]
    fn test_write_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_text(&path, "x\r\ny").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"x\r\ny");
        write_text(&path, "z").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "z");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_text(&dir.path().join("missing").join("out.txt"), "z").unwrap_err();
        assert!(matches!(err, PadError::Write { .. }));
    }

    #[test]
    fn test_round_trip_with_normalized_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rt.txt");
        let text = "first\r\nsecond\r\n\r\nlast\r\n";
        write_text(&path, text).unwrap();
        let loaded = read_text(&path, "\r\n").unwrap();
        write_text(&path, &loaded).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }
}
