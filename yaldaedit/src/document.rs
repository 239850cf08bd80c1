//! Document model for yaldaEdit
//!
//! The text surface: a plain string plus the file path it came from.
//! Content is replaced wholesale on open and flushed wholesale on save.
//! Range operations are indexed by character, not byte.

use std::path::PathBuf;

pub struct Document {
    /// The text content, bound directly to the editor widget.
    pub text: String,
    /// File path if opened from or saved to disk.
    pub path: Option<PathBuf>,
    /// Whether the document has unsaved changes.
    pub modified: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            path: None,
            modified: false,
        }
    }

    pub fn from_string(text: &str) -> Self {
        Self {
            text: text.to_string(),
            path: None,
            modified: false,
        }
    }

    /// Read a file and replace the whole content with it.
    pub fn open(path: PathBuf) -> Result<Self, std::io::Error> {
        let text = std::fs::read_to_string(&path)?;
        let mut doc = Self::from_string(&text);
        doc.path = Some(path);
        Ok(doc)
    }

    /// Write the full content to the document's path, overwriting.
    pub fn save(&mut self) -> Result<(), std::io::Error> {
        if let Some(ref path) = self.path {
            std::fs::write(path, &self.text)?;
            self.modified = false;
        }
        Ok(())
    }

    /// Write the full content to a new path and adopt it.
    pub fn save_as(&mut self, path: PathBuf) -> Result<(), std::io::Error> {
        std::fs::write(&path, &self.text)?;
        self.path = Some(path);
        self.modified = false;
        Ok(())
    }

    /// File name for the title bar, with a `*` marker when modified.
    pub fn display_title(&self) -> String {
        let name = self
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "untitled".to_string());
        if self.modified {
            format!("{}*", name)
        } else {
            name
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count().max(1)
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Byte offset of a character index, clamped to the end.
    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    /// Text of the character range `start..end`.
    pub fn char_range(&self, start: usize, end: usize) -> String {
        let bs = self.byte_index(start);
        let be = self.byte_index(end.max(start));
        self.text[bs..be].to_string()
    }

    /// Insert text at a character index.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = self.byte_index(char_idx);
        self.text.insert_str(at, text);
        self.modified = true;
    }

    /// Delete the character range `start..end`.
    pub fn delete_range(&mut self, start: usize, end: usize) {
        let bs = self.byte_index(start);
        let be = self.byte_index(end.max(start));
        if bs < be {
            self.text.replace_range(bs..be, "");
            self.modified = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document() {
        let doc = Document::new();
        assert_eq!(doc.char_count(), 0);
        assert!(!doc.modified);
        assert_eq!(doc.display_title(), "untitled");
    }

    #[test]
    fn test_insert_and_delete() {
        let mut doc = Document::new();
        doc.insert(0, "Hello");
        assert_eq!(doc.text, "Hello");
        assert!(doc.modified);

        doc.insert(5, " World");
        assert_eq!(doc.text, "Hello World");

        doc.delete_range(5, 6);
        assert_eq!(doc.text, "HelloWorld");
    }

    #[test]
    fn test_char_range_is_char_indexed() {
        let doc = Document::from_string("café au lait");
        assert_eq!(doc.char_range(0, 4), "café");
        assert_eq!(doc.char_range(5, 7), "au");
        // Past-the-end clamps
        assert_eq!(doc.char_range(8, 100), "lait");
    }

    #[test]
    fn test_delete_range_multibyte() {
        let mut doc = Document::from_string("a😀b");
        doc.delete_range(1, 2);
        assert_eq!(doc.text, "ab");
    }

    #[test]
    fn test_reversed_range_is_noop() {
        let mut doc = Document::from_string("abc");
        doc.delete_range(2, 1);
        assert_eq!(doc.text, "abc");
        assert!(!doc.modified);
        assert_eq!(doc.char_range(2, 1), "");
    }

    #[test]
    fn test_save_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letter.txt");

        let mut doc = Document::from_string("Dear Yalda,\n\nkeep going.\n");
        doc.save_as(path.clone()).unwrap();
        assert!(!doc.modified);
        assert_eq!(doc.display_title(), "letter.txt");

        let loaded = Document::open(path).unwrap();
        assert_eq!(loaded.text, doc.text);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::open(dir.path().join("nope.txt"));
        assert!(err.is_err());
    }

    #[test]
    fn test_counts() {
        let doc = Document::from_string("one two\nthree\n");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.word_count(), 3);
        assert_eq!(doc.char_count(), 14);
    }
}
