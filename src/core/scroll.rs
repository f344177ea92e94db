use crate::core::constants::{SCROLL_EASE, SCROLL_SNAP_PX, SCROLL_SPEED_SCALE};

/// Smoothed follower of the page scroll position.
///
/// Each frame the rendered offset closes a fixed fraction of the gap to the
/// real `scrollY`; the remaining gap is the scroll "speed" fed to the
/// post-processing distortion. Once the gap drops below [`SCROLL_SNAP_PX`]
/// the offset lands exactly on the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    ease: f32,
    target: f32,
    rendered: f32,
    speed: f32,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SCROLL_EASE)
    }
}

impl ScrollTracker {
    pub fn new(ease: f32) -> Self {
        Self {
            ease: ease.clamp(0.0, 1.0),
            target: 0.0,
            rendered: 0.0,
            speed: 0.0,
        }
    }

    /// Start from `offset` without easing in from zero.
    pub fn jump_to(&mut self, offset: f32) {
        self.target = offset;
        self.rendered = offset;
        self.speed = 0.0;
    }

    pub fn update(&mut self, target: f32) {
        self.target = target;
        self.rendered += (target - self.rendered) * self.ease;
        self.rendered = (self.rendered * 100.0).floor() / 100.0;
        if (self.target - self.rendered).abs() < SCROLL_SNAP_PX {
            self.rendered = self.target;
        }
        self.speed = self.target - self.rendered;
    }

    pub fn offset(&self) -> f32 {
        self.rendered
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Speed in the units the `scrollSpeed` uniform expects.
    pub fn uniform_speed(&self) -> f32 {
        self.speed * SCROLL_SPEED_SCALE
    }
}
