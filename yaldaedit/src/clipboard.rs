//! Clipboard bridge: cut/copy/paste between the document and the OS
//! clipboard.
//!
//! The OS clipboard is a single process-wide text slot. Cut and copy
//! require an active selection and overwrite the slot; paste reads it
//! non-destructively and never fails (an empty slot pastes nothing).
//! The backend is a trait so tests can run against an in-memory slot.

use crate::document::Document;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    #[error("no selection")]
    NoSelection,
}

pub trait ClipboardBackend {
    fn get_text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: String);
}

/// The OS clipboard. Construction failure (e.g. no display server) leaves
/// a backend that holds nothing; cut/copy still edit the document.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            inner: arboard::Clipboard::new().ok(),
        }
    }
}

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.inner
            .as_mut()
            .and_then(|c| c.get_text().ok())
            .filter(|t| !t.is_empty())
    }

    fn set_text(&mut self, text: String) {
        if let Some(c) = self.inner.as_mut() {
            let _ = c.set_text(text);
        }
    }
}

/// An active selection as a character range, in either direction.
fn normalize(selection: Option<(usize, usize)>) -> Result<(usize, usize), EditError> {
    match selection {
        Some((a, b)) if a != b => Ok((a.min(b), a.max(b))),
        _ => Err(EditError::NoSelection),
    }
}

/// Remove the selected range from the document and place it in the
/// clipboard slot, replacing any prior content.
pub fn cut(
    doc: &mut Document,
    selection: Option<(usize, usize)>,
    clipboard: &mut dyn ClipboardBackend,
) -> Result<(), EditError> {
    let (start, end) = normalize(selection)?;
    let text = doc.char_range(start, end);
    doc.delete_range(start, end);
    clipboard.set_text(text);
    Ok(())
}

/// Place the selected text in the clipboard slot; the document is
/// unchanged.
pub fn copy(
    doc: &Document,
    selection: Option<(usize, usize)>,
    clipboard: &mut dyn ClipboardBackend,
) -> Result<(), EditError> {
    let (start, end) = normalize(selection)?;
    clipboard.set_text(doc.char_range(start, end));
    Ok(())
}

/// Insert the clipboard content at the cursor. Returns the cursor position
/// after the insertion; a no-op when the slot is empty.
pub fn paste(doc: &mut Document, cursor: usize, clipboard: &mut dyn ClipboardBackend) -> usize {
    match clipboard.get_text() {
        Some(text) if !text.is_empty() => {
            let inserted = text.chars().count();
            doc.insert(cursor, &text);
            cursor + inserted
        }
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemClipboard {
        slot: Option<String>,
    }

    impl ClipboardBackend for MemClipboard {
        fn get_text(&mut self) -> Option<String> {
            self.slot.clone()
        }
        fn set_text(&mut self, text: String) {
            self.slot = Some(text);
        }
    }

    #[test]
    fn test_cut_then_paste_restores_content() {
        let mut doc = Document::from_string("hello brave world");
        let mut cb = MemClipboard::default();

        cut(&mut doc, Some((6, 12)), &mut cb).unwrap();
        assert_eq!(doc.text, "hello world");
        assert_eq!(cb.slot.as_deref(), Some("brave "));

        let cursor = paste(&mut doc, 6, &mut cb);
        assert_eq!(doc.text, "hello brave world");
        assert_eq!(cursor, 12);
    }

    #[test]
    fn test_copy_does_not_mutate() {
        let mut doc = Document::from_string("hello world");
        let mut cb = MemClipboard::default();

        copy(&doc, Some((0, 5)), &mut cb).unwrap();
        assert_eq!(doc.text, "hello world");
        assert!(!doc.modified);
        assert_eq!(cb.slot.as_deref(), Some("hello"));

        // Overwritten on the next copy
        copy(&doc, Some((6, 11)), &mut cb).unwrap();
        assert_eq!(cb.slot.as_deref(), Some("world"));
    }

    #[test]
    fn test_cut_without_selection_is_defined_error() {
        let mut doc = Document::from_string("hello");
        let mut cb = MemClipboard::default();

        assert_eq!(cut(&mut doc, None, &mut cb), Err(EditError::NoSelection));
        assert_eq!(cut(&mut doc, Some((3, 3)), &mut cb), Err(EditError::NoSelection));
        assert_eq!(doc.text, "hello");
        assert!(cb.slot.is_none());
    }

    #[test]
    fn test_reversed_selection_is_normalized() {
        let mut doc = Document::from_string("hello world");
        let mut cb = MemClipboard::default();
        copy(&doc, Some((11, 6)), &mut cb).unwrap();
        assert_eq!(cb.slot.as_deref(), Some("world"));
    }

    #[test]
    fn test_paste_empty_slot_is_noop() {
        let mut doc = Document::from_string("hello");
        let mut cb = MemClipboard::default();
        let cursor = paste(&mut doc, 2, &mut cb);
        assert_eq!(doc.text, "hello");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_paste_multibyte_cursor_advance() {
        let mut doc = Document::from_string("ab");
        let mut cb = MemClipboard::default();
        cb.set_text("😀é".to_string());
        let cursor = paste(&mut doc, 1, &mut cb);
        assert_eq!(doc.text, "a😀éb");
        assert_eq!(cursor, 3);
    }
}
