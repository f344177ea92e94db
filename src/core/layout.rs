//! DOM layout to scene coordinates.
//!
//! The browser lays out from the top-left corner with Y growing downwards;
//! the scene is centered on the viewport with Y growing upwards. Vertical
//! scroll is folded in so tracked meshes move with the page.

use crate::core::viewport::Viewport;
use glam::{Vec2, Vec3};

/// Bounding rectangle of a DOM element in CSS pixels. `top` is document
/// relative (client top plus the scroll offset at measurement time).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// Scene-space center of `rect` for the given viewport and scroll offset.
#[inline]
pub fn map_to_scene(rect: &ElementRect, viewport: Viewport, scroll: f32) -> Vec2 {
    Vec2::new(
        rect.left - viewport.width / 2.0 + rect.width / 2.0,
        scroll - rect.top + viewport.height / 2.0 - rect.height / 2.0,
    )
}

/// One record per tracked DOM element, pairing it with the mesh it drives.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedElement {
    pub element: usize,
    pub mesh: usize,
    pub rect: ElementRect,
}

impl TrackedElement {
    pub fn position(&self, viewport: Viewport, scroll: f32) -> Vec3 {
        map_to_scene(&self.rect, viewport, scroll).extend(0.0)
    }

    pub fn scale(&self) -> Vec3 {
        Vec3::new(self.rect.width, self.rect.height, 1.0)
    }
}
