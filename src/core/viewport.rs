use crate::core::constants::MAX_PIXEL_RATIO;

/// Container size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height; a collapsed container reports 1.0 so the camera
    /// projection stays finite.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Renderer draw-buffer configuration derived from a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawBufferSize {
    pub css_width: f32,
    pub css_height: f32,
    pub pixel_ratio: f32,
    pub physical_width: u32,
    pub physical_height: u32,
}

#[inline]
pub fn capped_pixel_ratio(device_pixel_ratio: f64) -> f32 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO) as f32
    } else {
        1.0
    }
}

impl DrawBufferSize {
    pub fn from_viewport(viewport: Viewport, device_pixel_ratio: f64) -> Self {
        let pixel_ratio = capped_pixel_ratio(device_pixel_ratio);
        let physical = |css: f32| ((css.max(0.0) * pixel_ratio).floor() as u32).max(1);
        Self {
            css_width: viewport.width,
            css_height: viewport.height,
            pixel_ratio,
            physical_width: physical(viewport.width),
            physical_height: physical(viewport.height),
        }
    }
}

/// Vertical field of view (degrees) that makes a plane `height` world units
/// tall exactly fill the view at `camera_distance`.
#[inline]
pub fn fov_for_distance(height: f32, camera_distance: f32) -> f32 {
    2.0 * ((height / 2.0) / camera_distance).atan() * (180.0 / std::f32::consts::PI)
}
