//! Storage utilities for yaldaEdit
//!
//! File browser state for the in-app open/save dialogs, the picker's
//! filter groups, recent-files tracking, and config/documents directories.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Default extension appended to save filenames that lack one.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Picker filter groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFilter {
    All,
    Text,
    Scripts,
    Html,
}

impl FileFilter {
    pub const GROUPS: [FileFilter; 4] = [
        FileFilter::All,
        FileFilter::Text,
        FileFilter::Scripts,
        FileFilter::Html,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FileFilter::All => "all files (*.*)",
            FileFilter::Text => "text files (*.txt)",
            FileFilter::Scripts => "scripts (*.py)",
            FileFilter::Html => "html documents (*.html)",
        }
    }

    fn extensions(&self) -> &'static [&'static str] {
        match self {
            FileFilter::All => &[],
            FileFilter::Text => &["txt"],
            FileFilter::Scripts => &["py"],
            FileFilter::Html => &["html", "htm"],
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        let exts = self.extensions();
        if exts.is_empty() {
            return true;
        }
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        exts.contains(&ext.as_str())
    }
}

/// Append the default extension when the filename has none.
pub fn ensure_default_extension(name: &str) -> String {
    if Path::new(name).extension().is_some() {
        name.to_string()
    } else {
        format!("{}.{}", name, DEFAULT_EXTENSION)
    }
}

/// Recent files tracking
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecentFiles {
    pub files: Vec<PathBuf>,
    pub max_entries: usize,
}

impl RecentFiles {
    pub fn new(max_entries: usize) -> Self {
        Self {
            files: Vec::new(),
            max_entries,
        }
    }

    pub fn add(&mut self, path: PathBuf) {
        self.files.retain(|p| p != &path);
        self.files.insert(0, path);
        self.files.truncate(self.max_entries);
    }

    pub fn load(config_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(config_path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, contents)?;
        Ok(())
    }
}

/// Simple file browser state for the open/save dialogs
#[derive(Debug, Clone)]
pub struct FileBrowser {
    pub current_dir: PathBuf,
    pub entries: Vec<FileEntry>,
    pub selected_index: Option<usize>,
    pub filter: FileFilter,
}

#[derive(Debug, Clone)]
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
            filter: FileFilter::All,
        };
        browser.refresh();
        browser
    }

    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = filter;
        self.refresh();
        self
    }

    pub fn set_filter(&mut self, filter: FileFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.refresh();
        }
    }

    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected_index = None;

        // Parent directory entry
        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_directory: true,
            });
        }

        if let Ok(read_dir) = std::fs::read_dir(&self.current_dir) {
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
                if !is_directory && !self.filter.matches(&path) {
                    continue;
                }

                let entry = FileEntry {
                    name,
                    path,
                    is_directory,
                };
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
}

/// Config directory for yaldaEdit
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "yalda", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The user's documents directory
pub fn documents_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_names(browser: &FileBrowser) -> Vec<String> {
        browser
            .entries
            .iter()
            .filter(|e| !e.is_directory)
            .map(|e| e.name.clone())
            .collect()
    }

    #[test]
    fn test_filter_groups() {
        assert!(FileFilter::All.matches(Path::new("anything.xyz")));
        assert!(FileFilter::Text.matches(Path::new("notes.txt")));
        assert!(!FileFilter::Text.matches(Path::new("script.py")));
        assert!(FileFilter::Scripts.matches(Path::new("SCRIPT.PY")));
        assert!(FileFilter::Html.matches(Path::new("page.htm")));
        assert!(!FileFilter::Html.matches(Path::new("page")));
    }

    #[test]
    fn test_ensure_default_extension() {
        assert_eq!(ensure_default_extension("letter"), "letter.txt");
        assert_eq!(ensure_default_extension("letter.txt"), "letter.txt");
        assert_eq!(ensure_default_extension("page.html"), "page.html");
    }

    #[test]
    fn test_browser_applies_filter() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.txt", "b.py", "c.html", "d.rs"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::write(dir.path().join(".hidden.txt"), b"x").unwrap();

        let browser = FileBrowser::new(dir.path().to_path_buf()).with_filter(FileFilter::Text);
        assert_eq!(file_names(&browser), vec!["a.txt"]);

        let browser = FileBrowser::new(dir.path().to_path_buf());
        assert_eq!(file_names(&browser), vec!["a.txt", "b.py", "c.html", "d.rs"]);
    }

    #[test]
    fn test_browser_set_filter_refreshes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"x").unwrap();
        std::fs::write(dir.path().join("b.py"), b"x").unwrap();

        let mut browser = FileBrowser::new(dir.path().to_path_buf());
        browser.set_filter(FileFilter::Scripts);
        assert_eq!(file_names(&browser), vec!["b.py"]);
    }

    #[test]
    fn test_recent_files_dedup_and_truncate() {
        let mut recent = RecentFiles::new(2);
        recent.add(PathBuf::from("/a"));
        recent.add(PathBuf::from("/b"));
        recent.add(PathBuf::from("/a"));
        assert_eq!(recent.files, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        recent.add(PathBuf::from("/c"));
        assert_eq!(recent.files, vec![PathBuf::from("/c"), PathBuf::from("/a")]);
    }

    #[test]
    fn test_recent_files_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("recent.json");
        let mut recent = RecentFiles::new(5);
        recent.add(PathBuf::from("/letters/one.txt"));
        recent.save(&path).unwrap();
        let loaded = RecentFiles::load(&path).unwrap();
        assert_eq!(loaded.files, recent.files);
        assert_eq!(loaded.max_entries, 5);
    }
}
