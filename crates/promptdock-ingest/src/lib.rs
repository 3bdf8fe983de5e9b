pub mod preview;
mod source;
mod store;
mod telemetry;
mod validate;

pub use preview::{TEXT_PREVIEW_MAX_CHARS, TRUNCATION_MARKER};
pub use source::{FileSource, FsSource, MemorySource, SourceError};
pub use store::{AttachmentStore, ChangeListener};
pub use telemetry::{SubmitSink, TracingSink};
