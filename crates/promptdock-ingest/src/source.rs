use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use promptdock_core::IncomingFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("no readable location for {0}")]
    NoPath(String),

    #[error("read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reads the content of an incoming file for preview generation.
///
/// The pipeline never reads files directly; previews go through this seam
/// so hosts without filesystem access (and tests) can supply content.
#[async_trait]
pub trait FileSource: Send + Sync {
    async fn read(&self, file: &IncomingFile) -> Result<Bytes, SourceError>;
}

/// Source backed by the real filesystem via the file's resolved path.
#[derive(Debug, Default)]
pub struct FsSource;

#[async_trait]
impl FileSource for FsSource {
    async fn read(&self, file: &IncomingFile) -> Result<Bytes, SourceError> {
        let path = file
            .path
            .as_ref()
            .ok_or_else(|| SourceError::NoPath(file.name.clone()))?;
        match tokio::fs::read(path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::NotFound(file.name.clone()))
            }
            Err(e) => Err(SourceError::Io {
                name: file.name.clone(),
                source: e,
            }),
        }
    }
}

/// In-memory source keyed by file name, for tests and sandboxed hosts
/// that hand over content alongside the file list.
#[derive(Debug, Default)]
pub struct MemorySource {
    files: Mutex<HashMap<String, Bytes>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, name: impl Into<String>, content: impl Into<Bytes>) {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.into(), content.into());
    }

    pub fn with_file(self, name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        self.insert(name, content);
        self
    }
}

#[async_trait]
impl FileSource for MemorySource {
    async fn read(&self, file: &IncomingFile) -> Result<Bytes, SourceError> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&file.name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(file.name.clone()))
    }
}
