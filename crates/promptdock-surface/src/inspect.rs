use promptdock_core::IncomingFile;

/// Capability for telling directory entries apart from files in a drop
/// payload. Not every host can: a plain file list carries no entry
/// structure, in which case everything is treated as a file and folder
/// detection silently degrades.
pub trait EntryInspector: Send + Sync {
    fn is_directory(&self, entry: &IncomingFile) -> bool;
}

/// Inspector backed by filesystem metadata. Entries without a resolvable
/// path are treated as files.
#[derive(Debug, Default)]
pub struct FsInspector;

impl EntryInspector for FsInspector {
    fn is_directory(&self, entry: &IncomingFile) -> bool {
        entry.path.as_deref().is_some_and(|p| p.is_dir())
    }
}

/// Inspector for hosts without structured entry inspection: every entry
/// is a file, `has_folder` is never raised.
#[derive(Debug, Default)]
pub struct FlatInspector;

impl EntryInspector for FlatInspector {
    fn is_directory(&self, _entry: &IncomingFile) -> bool {
        false
    }
}

/// Flattened result of a drop: the file entries, plus whether any
/// directory entries were seen and excluded.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub files: Vec<IncomingFile>,
    pub has_folder: bool,
}

impl Extraction {
    /// A plain file list from a non-drag source (file picker).
    pub fn from_files(files: Vec<IncomingFile>) -> Self {
        Self {
            files,
            has_folder: false,
        }
    }

    /// Folder-related message for this drop, if any. Terminal when every
    /// entry was a folder, advisory when files survived alongside.
    pub fn notice(&self) -> Option<DropNotice> {
        if !self.has_folder {
            None
        } else if self.files.is_empty() {
            Some(DropNotice::FoldersNotSupported)
        } else {
            Some(DropNotice::FoldersSkipped)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropNotice {
    /// Every dropped entry was a folder; nothing to ingest.
    FoldersNotSupported,
    /// Folders were excluded but files were still forwarded.
    FoldersSkipped,
}

impl DropNotice {
    pub fn message(&self) -> &'static str {
        match self {
            DropNotice::FoldersNotSupported => "Folders are not supported",
            DropNotice::FoldersSkipped => "Folders were skipped",
        }
    }
}
