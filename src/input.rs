use crate::core::{pick, FrameInput, HoverChange};
use glam::Vec2;
use smallvec::SmallVec;

/// Mutable state written by DOM event handlers and drained once per frame.
/// The last event before a frame wins.
#[derive(Default, Clone, Debug)]
pub struct InputState {
    /// Pointer in client pixels, `None` once it leaves the page.
    pub pointer: Option<Vec2>,
    pub dragging: bool,
    pub drag_accum: Vec2,
    pub hover_changes: SmallVec<[HoverChange; 4]>,
    pub resized: bool,
}

impl InputState {
    pub fn pointer_moved(&mut self, client: Vec2) {
        if self.dragging {
            if let Some(prev) = self.pointer {
                self.drag_accum += client - prev;
            }
        }
        self.pointer = Some(client);
    }

    pub fn hover(&mut self, element: usize, entered: bool) {
        self.hover_changes.push(HoverChange { element, entered });
    }

    /// Whether a resize arrived since the last call. Clears the flag.
    pub fn take_resize(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }

    /// Move the pending events into `frame` and reset the per-frame parts.
    /// `viewport_size` must be the size this frame renders at.
    pub fn drain_into(&mut self, frame: &mut FrameInput, viewport_size: Vec2) {
        frame.pointer_ndc = self
            .pointer
            .and_then(|p| pick::client_to_ndc(p, viewport_size));
        frame.hover_changes = std::mem::take(&mut self.hover_changes);
        frame.orbit_drag = std::mem::take(&mut self.drag_accum);
    }
}
