use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::FileCategory;
use crate::file::IncomingFile;

/// Bounded, category-specific representation of file content, generated
/// asynchronously after admission. Attachments for document and binary
/// categories never carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Preview {
    /// Self-contained embeddable image (`data:<mime>;base64,...`).
    Image { data_url: String },
    /// Text excerpt, truncated with a `...` marker when cut.
    Text { excerpt: String },
}

/// One accepted file reference held by the attachment store.
///
/// Immutable after creation, apart from the preview arriving late and the
/// terminal removal from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    /// Best-effort location. Falls back to the bare name when the source
    /// exposes no real filesystem path.
    pub path: String,
    pub category: FileCategory,
    pub preview: Option<Preview>,
    pub size_bytes: u64,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    /// Build an attachment from a validated incoming file. Assigns a fresh
    /// id; ids are never reused within a store instance.
    pub fn from_incoming(file: &IncomingFile) -> Self {
        let path = file
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| file.name.clone());
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: file.name.clone(),
            path,
            category: FileCategory::from_name(&file.name),
            preview: None,
            size_bytes: file.size_bytes,
            mime_type: file.mime_type_or_default().to_string(),
            created_at: Utc::now(),
        }
    }
}
