pub mod attachment;
pub mod category;
pub mod file;
pub mod limits;

pub use attachment::{Attachment, Preview};
pub use category::FileCategory;
pub use file::IncomingFile;
pub use limits::IngestLimits;
