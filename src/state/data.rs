/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the classification client and the UI layer.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The judgment returned by the classification endpoint
///
/// All three fields must be present JSON strings; extra fields are ignored.
/// Unknown label values are still valid and fall back to default styling.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Job-role label (e.g., "software_engineer")
    pub category: String,
    /// Quality tier (best, good, average, poor)
    pub quality: String,
    /// Filename as echoed back by the endpoint
    pub filename: String,
}

/// Resume formats accepted by the upload widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Txt,
}

impl FileKind {
    pub const ALL: [FileKind; 3] = [FileKind::Pdf, FileKind::Docx, FileKind::Txt];

    /// Match a path against the allow-list by extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.extension() == ext)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Docx => "docx",
            FileKind::Txt => "txt",
        }
    }

    /// Media type sent with the multipart part
    pub fn mime(&self) -> &'static str {
        match self {
            FileKind::Pdf => "application/pdf",
            FileKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            FileKind::Txt => "text/plain",
        }
    }

    /// Extensions for the native picker filter
    pub fn extensions() -> [&'static str; 3] {
        Self::ALL.map(|kind| kind.extension())
    }
}

/// A file the user picked or dropped that passed the allow-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Full path on disk
    pub path: PathBuf,
    /// Filename only (e.g., "resume.pdf")
    pub filename: String,
    pub kind: FileKind,
}

impl SelectedFile {
    /// Build a selection from a path, or None if the type is not allowed
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let kind = FileKind::from_path(&path)?;
        let filename = path.file_name()?.to_string_lossy().to_string();

        Some(SelectedFile { path, filename, kind })
    }
}
