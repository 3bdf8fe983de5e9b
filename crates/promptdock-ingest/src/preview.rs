use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use promptdock_core::{FileCategory, IncomingFile, Preview};

use crate::source::FileSource;

/// Text excerpts are cut to this many characters.
pub const TEXT_PREVIEW_MAX_CHARS: usize = 500;

/// Appended to a text excerpt only when truncation actually occurred.
pub const TRUNCATION_MARKER: &str = "...";

/// Generate the preview for one admitted file. Images become embeddable
/// data URLs, text and code become a bounded excerpt, everything else
/// gets no preview. A failed read is logged and yields `None`; preview
/// failure never unadmits the attachment.
pub async fn generate(
    source: &dyn FileSource,
    file: &IncomingFile,
    category: FileCategory,
    mime_type: &str,
) -> Option<Preview> {
    if !category_has_preview(category) {
        return None;
    }
    let data = match source.read(file).await {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(name = %file.name, error = %e, "preview read failed");
            return None;
        }
    };
    match category {
        FileCategory::Image => Some(Preview::Image {
            data_url: image_data_url(mime_type, &data),
        }),
        FileCategory::Text | FileCategory::Code => Some(Preview::Text {
            excerpt: text_excerpt(&String::from_utf8_lossy(&data)),
        }),
        FileCategory::Pdf | FileCategory::Other => None,
    }
}

/// Whether preview generation is attempted at all for this category.
pub fn category_has_preview(category: FileCategory) -> bool {
    matches!(
        category,
        FileCategory::Image | FileCategory::Text | FileCategory::Code
    )
}

fn image_data_url(mime_type: &str, data: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(data))
}

fn text_excerpt(content: &str) -> String {
    let mut chars = content.char_indices();
    match chars.nth(TEXT_PREVIEW_MAX_CHARS) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &content[..cut]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    #[test]
    fn excerpt_under_limit_is_unchanged() {
        assert_eq!(text_excerpt("short"), "short");
    }

    #[test]
    fn excerpt_at_exact_limit_has_no_marker() {
        let content = "x".repeat(TEXT_PREVIEW_MAX_CHARS);
        assert_eq!(text_excerpt(&content), content);
    }

    #[test]
    fn excerpt_over_limit_is_cut_with_marker() {
        let content = "x".repeat(TEXT_PREVIEW_MAX_CHARS + 1);
        let excerpt = text_excerpt(&content);
        assert_eq!(
            excerpt.chars().count(),
            TEXT_PREVIEW_MAX_CHARS + TRUNCATION_MARKER.len()
        );
        assert!(excerpt.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn excerpt_cuts_on_char_boundaries() {
        let content = "é".repeat(TEXT_PREVIEW_MAX_CHARS + 10);
        let excerpt = text_excerpt(&content);
        assert!(excerpt.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            excerpt.chars().count(),
            TEXT_PREVIEW_MAX_CHARS + TRUNCATION_MARKER.len()
        );
    }

    #[tokio::test]
    async fn image_preview_is_a_data_url() {
        let source = MemorySource::new().with_file("dot.png", &[0x89u8, 0x50, 0x4e, 0x47][..]);
        let file = IncomingFile::new("dot.png", 4).with_mime_type("image/png");
        let preview = generate(&source, &file, FileCategory::Image, "image/png")
            .await
            .unwrap();
        match preview {
            Preview::Image { data_url } => {
                assert!(data_url.starts_with("data:image/png;base64,"));
                assert!(data_url.len() > "data:image/png;base64,".len());
            }
            other => panic!("expected image preview, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn pdf_and_other_get_no_preview() {
        let source = MemorySource::new().with_file("doc.pdf", &b"%PDF-1.7"[..]);
        let file = IncomingFile::new("doc.pdf", 8);
        assert!(generate(&source, &file, FileCategory::Pdf, "application/pdf")
            .await
            .is_none());
        assert!(
            generate(&source, &file, FileCategory::Other, "application/octet-stream")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn read_failure_yields_none() {
        let source = MemorySource::new();
        let file = IncomingFile::new("gone.txt", 4);
        assert!(generate(&source, &file, FileCategory::Text, "text/plain")
            .await
            .is_none());
    }
}
