use crate::core::constants::HOVER_DURATION_SEC;

/// Time-based tween driving `uHoverState` between 0 (idle) and 1 (hovered).
///
/// A retarget starts from the current sampled value, so reversing mid-way
/// never jumps. The ease-out curve `1 - (1 - t)^2` is monotonic on [0, 1],
/// which keeps every transition monotonic between its start and target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverTween {
    from: f32,
    target: f32,
    started_at: f32,
    duration: f32,
}

impl Default for HoverTween {
    fn default() -> Self {
        Self::new(HOVER_DURATION_SEC)
    }
}

impl HoverTween {
    pub fn new(duration: f32) -> Self {
        Self {
            from: 0.0,
            target: 0.0,
            started_at: 0.0,
            duration: duration.max(0.0),
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Point the tween at `target` (clamped to [0, 1]) starting at `now`.
    pub fn set_target(&mut self, target: f32, now: f32) {
        let target = target.clamp(0.0, 1.0);
        if target == self.target {
            return;
        }
        self.from = self.sample(now);
        self.target = target;
        self.started_at = now;
    }

    pub fn enter(&mut self, now: f32) {
        self.set_target(1.0, now);
    }

    pub fn leave(&mut self, now: f32) {
        self.set_target(0.0, now);
    }

    pub fn sample(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return self.target;
        }
        let t = (now - self.started_at) / self.duration;
        if t >= 1.0 {
            return self.target;
        }
        if t <= 0.0 {
            return self.from;
        }
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        let v = self.from + (self.target - self.from) * eased;
        // stay inside [from, target] whatever the rounding did
        if self.target >= self.from {
            v.clamp(self.from, self.target)
        } else {
            v.clamp(self.target, self.from)
        }
    }
}
