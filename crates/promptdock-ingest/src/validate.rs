use promptdock_core::{IncomingFile, IngestLimits};

/// Outcome of the per-file screening pass over one batch.
pub(crate) struct Screened {
    /// Files that individually passed; batch order preserved.
    pub files: Vec<IncomingFile>,
    /// Most recent per-file violation message, if any. Later violations
    /// in the same batch overwrite earlier ones.
    pub size_error: Option<String>,
}

/// Per-file checks: drop directory placeholders silently, reject files
/// over the size ceiling (boundary inclusive) with a message naming the
/// file. Never aborts the rest of the batch.
pub(crate) fn screen(batch: Vec<IncomingFile>, limits: &IngestLimits) -> Screened {
    let mut files = Vec::with_capacity(batch.len());
    let mut size_error = None;
    for file in batch {
        if file.is_directory_placeholder() {
            tracing::debug!(name = %file.name, "skipping directory placeholder entry");
            continue;
        }
        if file.size_bytes > limits.max_file_size_bytes {
            size_error = Some(oversize_message(&file.name, limits));
            continue;
        }
        files.push(file);
    }
    Screened { files, size_error }
}

pub(crate) fn oversize_message(name: &str, limits: &IngestLimits) -> String {
    format!("{name} exceeds {}MB limit", limits.max_file_size_mb())
}

pub(crate) fn count_message(limits: &IngestLimits) -> String {
    format!("Maximum {} files allowed", limits.max_file_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    fn limits() -> IngestLimits {
        IngestLimits::default()
    }

    #[test]
    fn size_boundary_is_inclusive() {
        let screened = screen(
            vec![
                IncomingFile::new("exact.bin", 10 * MIB),
                IncomingFile::new("over.bin", 10 * MIB + 1),
            ],
            &limits(),
        );
        assert_eq!(screened.files.len(), 1);
        assert_eq!(screened.files[0].name, "exact.bin");
        assert_eq!(
            screened.size_error.as_deref(),
            Some("over.bin exceeds 10MB limit")
        );
    }

    #[test]
    fn last_size_violation_wins() {
        let screened = screen(
            vec![
                IncomingFile::new("first.bin", 11 * MIB),
                IncomingFile::new("second.bin", 12 * MIB),
                IncomingFile::new("ok.txt", 100),
            ],
            &limits(),
        );
        assert_eq!(screened.files.len(), 1);
        assert_eq!(
            screened.size_error.as_deref(),
            Some("second.bin exceeds 10MB limit")
        );
    }

    #[test]
    fn placeholders_are_skipped_without_error() {
        let screened = screen(
            vec![
                IncomingFile::new("somedir", 0),
                IncomingFile::new("real.txt", 10).with_mime_type("text/plain"),
            ],
            &limits(),
        );
        assert_eq!(screened.files.len(), 1);
        assert_eq!(screened.files[0].name, "real.txt");
        assert!(screened.size_error.is_none());
    }

    #[test]
    fn messages_reflect_configured_limits() {
        let custom = IngestLimits {
            max_file_size_bytes: 2 * MIB,
            max_file_count: 3,
        };
        assert_eq!(oversize_message("big.bin", &custom), "big.bin exceeds 2MB limit");
        assert_eq!(count_message(&custom), "Maximum 3 files allowed");
    }
}
