mod controller;
mod inspect;

pub use controller::{DragSignal, DropSurface};
pub use inspect::{DropNotice, EntryInspector, Extraction, FlatInspector, FsInspector};
