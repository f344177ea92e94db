use smallvec::SmallVec;

/// A full-screen pass applied after the scene render. Field names follow the
/// shader uniforms (`scrollSpeed`, `uAmount`, `uAngle`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PostPass {
    /// Horizontal pinch near the bottom edge, scaled by scroll speed.
    ScrollDistort { scroll_speed: f32 },
    /// Channel split along `angle` (radians) by `amount` (UV units).
    RgbShift { amount: f32, angle: f32 },
}

/// Ordered pass chain; the last pass writes the swapchain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostChain {
    pub passes: SmallVec<[PostPass; 2]>,
}

impl PostChain {
    pub fn scroll_and_shift(amount: f32, angle: f32) -> Self {
        let mut passes = SmallVec::new();
        passes.push(PostPass::ScrollDistort { scroll_speed: 0.0 });
        passes.push(PostPass::RgbShift { amount, angle });
        Self { passes }
    }

    pub fn set_scroll_speed(&mut self, speed: f32) {
        for pass in &mut self.passes {
            if let PostPass::ScrollDistort { scroll_speed } = pass {
                *scroll_speed = speed;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }
}
