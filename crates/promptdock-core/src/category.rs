use std::fmt;

use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "svg", "bmp", "ico",
];

const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "markdown", "json", "yaml", "yml", "toml", "xml", "csv", "log",
];

const CODE_EXTENSIONS: &[&str] = &[
    "rs", "js", "jsx", "ts", "tsx", "py", "rb", "go", "java", "c", "h", "cpp", "hpp", "cs", "sh",
    "bash", "css", "html",
];

const PDF_EXTENSIONS: &[&str] = &["pdf"];

/// Semantic category of an attached file, derived from its name alone.
///
/// Classification never inspects content: a misnamed file is categorized
/// by whatever its extension claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Image,
    Text,
    Code,
    Pdf,
    Other,
}

impl FileCategory {
    pub const ALL: &[FileCategory] = &[
        FileCategory::Image,
        FileCategory::Text,
        FileCategory::Code,
        FileCategory::Pdf,
        FileCategory::Other,
    ];

    /// Classify a file name by its extension (substring after the last `.`,
    /// case-insensitive, empty when there is no dot).
    pub fn from_name(name: &str) -> Self {
        let ext = match name.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => String::new(),
        };
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            FileCategory::Image
        } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            FileCategory::Text
        } else if CODE_EXTENSIONS.contains(&ext.as_str()) {
            FileCategory::Code
        } else if PDF_EXTENSIONS.contains(&ext.as_str()) {
            FileCategory::Pdf
        } else {
            FileCategory::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Image => "image",
            FileCategory::Text => "text",
            FileCategory::Code => "code",
            FileCategory::Pdf => "pdf",
            FileCategory::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FileCategory::Image => "Image",
            FileCategory::Text => "Text",
            FileCategory::Code => "Code",
            FileCategory::Pdf => "PDF",
            FileCategory::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "image" => Some(FileCategory::Image),
            "text" => Some(FileCategory::Text),
            "code" => Some(FileCategory::Code),
            "pdf" => Some(FileCategory::Pdf),
            "other" => Some(FileCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_images() {
        assert_eq!(FileCategory::from_name("photo.png"), FileCategory::Image);
        assert_eq!(FileCategory::from_name("photo.jpeg"), FileCategory::Image);
        assert_eq!(FileCategory::from_name("icon.svg"), FileCategory::Image);
    }

    #[test]
    fn classifies_text_and_code_separately() {
        assert_eq!(FileCategory::from_name("notes.txt"), FileCategory::Text);
        assert_eq!(FileCategory::from_name("config.yaml"), FileCategory::Text);
        assert_eq!(FileCategory::from_name("main.rs"), FileCategory::Code);
        assert_eq!(FileCategory::from_name("app.tsx"), FileCategory::Code);
    }

    #[test]
    fn classifies_pdf() {
        assert_eq!(FileCategory::from_name("report.pdf"), FileCategory::Pdf);
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(FileCategory::from_name("PHOTO.PNG"), FileCategory::Image);
        assert_eq!(FileCategory::from_name("Report.PdF"), FileCategory::Pdf);
    }

    #[test]
    fn unknown_or_missing_extension_is_other() {
        assert_eq!(FileCategory::from_name("archive.zip"), FileCategory::Other);
        assert_eq!(FileCategory::from_name("Makefile"), FileCategory::Other);
        assert_eq!(FileCategory::from_name("trailing."), FileCategory::Other);
    }

    #[test]
    fn only_last_extension_counts() {
        assert_eq!(FileCategory::from_name("bundle.tar.gz"), FileCategory::Other);
        assert_eq!(FileCategory::from_name("diagram.drawio.png"), FileCategory::Image);
    }

    #[test]
    fn as_str_round_trips() {
        for category in FileCategory::ALL {
            assert_eq!(FileCategory::from_str(category.as_str()), Some(*category));
        }
    }
}
