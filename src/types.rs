use std::fmt;
use std::path::PathBuf;

/// What was read for a single matched file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// The decoded UTF-8 text, with line endings normalized to `\n`.
    Text(String),
    /// The message of the error that prevented reading the file.
    ReadError(String),
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContent::Text(text) => f.write_str(text),
            FileContent::ReadError(message) => write!(f, "Error reading file: {}", message),
        }
    }
}

/// A single matched file with its path and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// The root path joined with the file's path relative to it.
    pub path: PathBuf,
    pub content: FileContent,
}

impl FileRecord {
    pub fn is_error(&self) -> bool {
        matches!(self.content, FileContent::ReadError(_))
    }
}

/// The records produced by one walk, in traversal order.
#[derive(Debug, Default)]
pub struct Collection {
    pub records: Vec<FileRecord>,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose content could not be read.
    pub fn read_errors(&self) -> usize {
        self.records.iter().filter(|r| r.is_error()).count()
    }
}
