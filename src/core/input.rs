use crate::core::layout::ElementRect;
use crate::core::viewport::Viewport;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverChange {
    pub element: usize,
    pub entered: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResizeRequest {
    pub viewport: Viewport,
    pub device_pixel_ratio: f64,
    /// Re-measured rects of tracked elements, by element index.
    pub rects: Vec<(usize, ElementRect)>,
}

/// Everything one frame reads from the outside world, captured once per tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the sketch started.
    pub elapsed: f32,
    /// Smoothed vertical scroll offset in CSS pixels.
    pub scroll: f32,
    /// `scrollSpeed` uniform value.
    pub scroll_speed: f32,
    /// Last pointer position in NDC, if the pointer is over the page.
    pub pointer_ndc: Option<Vec2>,
    /// Enter/leave events since the previous frame, oldest first.
    pub hover_changes: SmallVec<[HoverChange; 4]>,
    /// Accumulated pointer drag (CSS px) since the previous frame.
    pub orbit_drag: Vec2,
    pub resize: Option<ResizeRequest>,
}

impl FrameInput {
    pub fn at(elapsed: f32) -> Self {
        Self {
            elapsed,
            ..Default::default()
        }
    }
}
