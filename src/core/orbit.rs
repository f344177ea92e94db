use crate::core::constants::{ORBIT_DAMPING, ORBIT_PHI_EPS, ORBIT_ROTATE_SPEED};
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Orbit controls with exponential damping.
///
/// Pointer drags accumulate into a spherical delta; each `update` applies a
/// `damping` fraction of it and decays the rest, so the camera keeps gliding
/// after the pointer is released.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    pub rotate_speed: f32,
    radius: f32,
    theta: f32,
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
}

impl OrbitControls {
    /// Controls starting from the current camera `position` around `target`.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length();
        let (theta, phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };
        Self {
            target,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            radius,
            theta,
            phi,
            delta_theta: 0.0,
            delta_phi: 0.0,
        }
    }

    /// Feed a pointer drag in CSS pixels; `viewport_height` normalizes it so
    /// a full-height drag is one full turn.
    pub fn drag(&mut self, delta_px: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let k = 2.0 * PI * self.rotate_speed / viewport_height;
        self.delta_theta -= delta_px.x * k;
        self.delta_phi -= delta_px.y * k;
    }

    pub fn is_settled(&self) -> bool {
        self.delta_theta.abs() < 1e-6 && self.delta_phi.abs() < 1e-6
    }

    /// Advance one frame and return the new camera position.
    pub fn update(&mut self) -> Vec3 {
        self.theta += self.delta_theta * self.damping;
        self.phi += self.delta_phi * self.damping;
        self.phi = self.phi.clamp(ORBIT_PHI_EPS, PI - ORBIT_PHI_EPS);
        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;
        self.position()
    }

    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    pub fn azimuth(&self) -> f32 {
        self.theta
    }
}
