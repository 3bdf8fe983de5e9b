use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fallback declared media type when the source provides none.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A file handle as supplied by a drop event or file picker, before
/// validation and admission into the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingFile {
    pub name: String,
    /// Real filesystem location when the source exposes one. Picker or
    /// sandboxed sources may only know the name.
    pub path: Option<PathBuf>,
    pub size_bytes: u64,
    /// Media type as declared by the source, if any.
    pub mime_type: Option<String>,
}

impl IncomingFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            path: None,
            size_bytes,
            mime_type: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Declared media type, defaulted when absent or empty.
    pub fn mime_type_or_default(&self) -> &str {
        match self.mime_type.as_deref() {
            Some(mime) if !mime.is_empty() => mime,
            _ => DEFAULT_MIME_TYPE,
        }
    }

    /// Zero-byte entries with no declared type are how directory placeholders
    /// surface from drop payloads that lack structured entry inspection.
    pub fn is_directory_placeholder(&self) -> bool {
        self.size_bytes == 0 && self.mime_type.as_deref().map_or(true, str::is_empty)
    }
}
