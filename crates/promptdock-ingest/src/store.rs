use std::sync::{Arc, Mutex, MutexGuard};

use promptdock_core::{Attachment, IncomingFile, IngestLimits};
use promptdock_surface::{DropNotice, Extraction};

use crate::preview;
use crate::source::FileSource;
use crate::telemetry::SubmitSink;
use crate::validate;

/// Observer invoked with the full ordered attachment list after every
/// successful mutation. Consumers re-render from the snapshot; deltas are
/// never delivered.
pub type ChangeListener = Box<dyn Fn(&[Attachment]) + Send + Sync>;

struct Inner {
    attachments: Vec<Attachment>,
    error: Option<String>,
}

/// Owns the canonical ordered attachment list and the single-slot error
/// message.
///
/// Cheap to clone; clones share state. Admission decisions happen
/// synchronously under the lock, so back-to-back batches can never push
/// the list past the count ceiling. Preview reads run as independent
/// spawned tasks and re-enter the store on completion; a preview for an
/// attachment that was removed in the meantime is discarded.
#[derive(Clone)]
pub struct AttachmentStore {
    inner: Arc<Mutex<Inner>>,
    listeners: Arc<Mutex<Vec<ChangeListener>>>,
    source: Arc<dyn FileSource>,
    limits: IngestLimits,
}

impl AttachmentStore {
    pub fn new(source: Arc<dyn FileSource>) -> Self {
        Self::with_limits(source, IngestLimits::default())
    }

    pub fn with_limits(source: Arc<dyn FileSource>, limits: IngestLimits) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                attachments: Vec::new(),
                error: None,
            })),
            listeners: Arc::new(Mutex::new(Vec::new())),
            source,
            limits,
        }
    }

    pub fn limits(&self) -> IngestLimits {
        self.limits
    }

    /// Register an observer for attachment list changes.
    pub fn on_change(&self, listener: impl Fn(&[Attachment]) + Send + Sync + 'static) {
        lock(&self.listeners).push(Box::new(listener));
    }

    /// Snapshot of the current list, in insertion order.
    pub fn attachments(&self) -> Vec<Attachment> {
        lock(&self.inner).attachments.clone()
    }

    /// The currently surfaced violation message, if any.
    pub fn error(&self) -> Option<String> {
        lock(&self.inner).error.clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).attachments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ingest an already-resolved file list (file picker path). Returns
    /// the number of attachments admitted.
    pub async fn ingest(&self, batch: Vec<IncomingFile>) -> usize {
        self.ingest_inner(batch, None).await
    }

    /// Ingest the extraction of a drop event, applying the folder policy:
    /// a folder-only drop surfaces a terminal message and admits nothing;
    /// a mixed drop surfaces an advisory message and still admits the
    /// files.
    pub async fn ingest_drop(&self, extraction: Extraction) -> usize {
        match extraction.notice() {
            Some(DropNotice::FoldersNotSupported) => {
                lock(&self.inner).error =
                    Some(DropNotice::FoldersNotSupported.message().to_string());
                0
            }
            notice => self.ingest_inner(extraction.files, notice).await,
        }
    }

    async fn ingest_inner(&self, batch: Vec<IncomingFile>, notice: Option<DropNotice>) -> usize {
        let screened = validate::screen(batch, &self.limits);
        let mut admitted: Vec<(IncomingFile, Attachment)> = Vec::new();
        {
            let mut inner = lock(&self.inner);
            // Count check against the store size at this instant; the whole
            // batch is rejected as a unit when it would overshoot.
            if inner.attachments.len() + screened.files.len() > self.limits.max_file_count {
                inner.error = Some(validate::count_message(&self.limits));
                return 0;
            }
            // A per-file violation outranks the advisory folder notice;
            // with neither, any stale error is cleared.
            inner.error = screened
                .size_error
                .or_else(|| notice.map(|n| n.message().to_string()));
            for file in screened.files {
                let attachment = Attachment::from_incoming(&file);
                inner.attachments.push(attachment.clone());
                admitted.push((file, attachment));
            }
        }
        if admitted.is_empty() {
            return 0;
        }
        self.notify();
        let count = admitted.len();
        for (file, attachment) in admitted {
            if preview::category_has_preview(attachment.category) {
                self.spawn_preview(file, attachment);
            }
        }
        count
    }

    /// Remove one attachment by id. Clears the error unconditionally on a
    /// hit, even when unrelated to the removed entry. Unknown ids are a
    /// strict no-op: count, order and error all stay untouched.
    pub fn remove(&self, id: &str) -> bool {
        let removed = {
            let mut inner = lock(&self.inner);
            let before = inner.attachments.len();
            inner.attachments.retain(|a| a.id != id);
            if inner.attachments.len() == before {
                false
            } else {
                inner.error = None;
                true
            }
        };
        if removed {
            self.notify();
        }
        removed
    }

    /// Report a prompt submission to the telemetry collaborator. The
    /// store never sees the prompt text, only how many attachments ride
    /// along.
    pub fn report_submit(&self, sink: &dyn SubmitSink) {
        sink.prompt_submitted(self.len());
    }

    fn spawn_preview(&self, file: IncomingFile, attachment: Attachment) {
        let store = self.clone();
        tokio::spawn(async move {
            let generated = preview::generate(
                store.source.as_ref(),
                &file,
                attachment.category,
                &attachment.mime_type,
            )
            .await;
            let Some(generated) = generated else {
                return;
            };
            let attached = {
                let mut inner = lock(&store.inner);
                match inner.attachments.iter_mut().find(|a| a.id == attachment.id) {
                    Some(entry) => {
                        entry.preview = Some(generated);
                        true
                    }
                    None => {
                        tracing::debug!(
                            id = %attachment.id,
                            name = %attachment.name,
                            "discarding preview for removed attachment"
                        );
                        false
                    }
                }
            };
            if attached {
                store.notify();
            }
        });
    }

    fn notify(&self) {
        let snapshot = self.attachments();
        for listener in lock(&self.listeners).iter() {
            listener(&snapshot);
        }
    }
}

/// Lock helper that survives poisoning; the guarded state stays
/// consistent because no critical section can panic halfway through a
/// mutation.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}
