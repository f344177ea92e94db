//! Perspective camera shared by every demo.
//!
//! Primitive demos keep a fixed field of view; the DOM-synced demos derive it
//! from the viewport height so that world units match CSS pixels at z = 0.

use crate::core::viewport::{fov_for_distance, Viewport};
use glam::{Mat4, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FovMode {
    Fixed { degrees: f32 },
    FillHeight { distance: f32 },
}

/// Right-handed camera with a perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_mode: FovMode,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov_mode: FovMode, near: f32, far: f32, position: Vec3) -> Self {
        let fov_degrees = match fov_mode {
            FovMode::Fixed { degrees } => degrees,
            FovMode::FillHeight { .. } => 50.0,
        };
        Self {
            fov_mode,
            fov_degrees,
            aspect: 1.0,
            near,
            far,
            position,
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }

    /// Recompute aspect (and field of view in fill-height mode).
    pub fn apply_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
        if let FovMode::FillHeight { distance } = self.fov_mode {
            if viewport.height > 0.0 {
                self.fov_degrees = fov_for_distance(viewport.height, distance);
            }
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point given in normalized device coordinates
    /// (x right, y up, both in [-1, 1]). Returns `(origin, direction)`.
    pub fn ray_from_ndc(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.position;
        let rd = (p1 - ro).normalize_or_zero();
        (ro, rd)
    }
}
