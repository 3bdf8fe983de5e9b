use serde::{Deserialize, Serialize};

/// Per-file size ceiling applied by the validation gate.
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Attachment count ceiling per store instance.
pub const DEFAULT_MAX_FILE_COUNT: usize = 5;

/// Ingestion limits. The defaults match the product surface (10 MiB per
/// file, 5 files total); both knobs exist so embedders can tighten them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestLimits {
    pub max_file_size_bytes: u64,
    pub max_file_count: usize,
}

impl Default for IngestLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            max_file_count: DEFAULT_MAX_FILE_COUNT,
        }
    }
}

impl IngestLimits {
    /// Size ceiling in whole megabytes, for user-facing messages.
    pub fn max_file_size_mb(&self) -> u64 {
        self.max_file_size_bytes / (1024 * 1024)
    }
}
