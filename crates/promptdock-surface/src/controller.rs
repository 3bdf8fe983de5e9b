use promptdock_core::IncomingFile;

use crate::inspect::{EntryInspector, Extraction};

/// Drag lifecycle signal scoped to one visual surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSignal {
    Enter,
    Over,
    Leave,
    Drop,
}

/// Tracks the highlighted state of one drop surface.
///
/// Nested child elements each fire their own enter/leave, and the event
/// model fires a leave on the parent when the pointer enters a child.
/// A boolean toggle would flicker at every internal boundary, so the
/// surface keeps a nesting counter instead: active exactly while the
/// counter is above zero. Each surface instance owns its own counter.
#[derive(Debug, Default)]
pub struct DropSurface {
    depth: u32,
}

impl DropSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the surface should currently render its drag highlight.
    pub fn is_active(&self) -> bool {
        self.depth > 0
    }

    /// Feed one drag signal; returns the active state afterwards.
    /// `Drop` only resets the highlight; file extraction is a separate
    /// step (`extract_drop`) because it needs the payload.
    pub fn handle(&mut self, signal: DragSignal) -> bool {
        match signal {
            DragSignal::Enter => self.depth += 1,
            DragSignal::Over => {}
            DragSignal::Leave => self.depth = self.depth.saturating_sub(1),
            DragSignal::Drop => self.depth = 0,
        }
        self.is_active()
    }

    /// Handle a drop: reset the highlight unconditionally (the gesture is
    /// over regardless of nesting) and flatten the payload into a file
    /// list, excluding directory entries where the inspector can identify
    /// them.
    pub fn extract_drop(
        &mut self,
        inspector: &dyn EntryInspector,
        entries: Vec<IncomingFile>,
    ) -> Extraction {
        self.depth = 0;
        let mut files = Vec::with_capacity(entries.len());
        let mut has_folder = false;
        for entry in entries {
            if inspector.is_directory(&entry) {
                tracing::debug!(name = %entry.name, "skipping directory entry in drop payload");
                has_folder = true;
            } else {
                files.push(entry);
            }
        }
        Extraction { files, has_folder }
    }
}
