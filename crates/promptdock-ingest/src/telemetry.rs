/// Collaborator interface for submit events. The pipeline never owns the
/// prompt text; it only reports how many attachments accompany a
/// submission.
pub trait SubmitSink: Send + Sync {
    fn prompt_submitted(&self, attachment_count: usize);
}

/// Default sink: emits the submit event on the diagnostic channel.
#[derive(Debug, Default)]
pub struct TracingSink;

impl SubmitSink for TracingSink {
    fn prompt_submitted(&self, attachment_count: usize) {
        tracing::info!(attachment_count, "prompt submitted");
    }
}
