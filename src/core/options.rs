//! Run-time options read from `data-*` attributes on the container element.

use crate::core::constants::{PIXEL_CAMERA_DISTANCE, RGB_SHIFT_AMOUNT, RGB_SHIFT_ANGLE};
use std::str::FromStr;

/// The demo to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Rotating box with a normal material.
    Cube,
    /// Custom-shaded plane animated by `uTime`.
    Plane,
    /// Distorted ocean surface synced to a DOM element.
    Ocean,
    /// Scroll-driven image planes with hover transitions.
    Images,
    /// `Images` plus the post-processing chain.
    Post,
}

impl Variant {
    /// Variants whose meshes follow DOM elements in pixel space.
    pub fn is_dom_synced(&self) -> bool {
        matches!(self, Self::Ocean | Self::Images | Self::Post)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Plane => "plane",
            Self::Ocean => "ocean",
            Self::Images => "images",
            Self::Post => "post",
        }
    }
}

impl FromStr for Variant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cube" => Ok(Self::Cube),
            "plane" => Ok(Self::Plane),
            "ocean" => Ok(Self::Ocean),
            "images" => Ok(Self::Images),
            "post" => Ok(Self::Post),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SketchOptions {
    pub variant: Variant,
    pub camera_distance: f32,
    pub orbit: bool,
    pub wireframe: bool,
    pub image_selector: String,
    pub ocean_selector: String,
    pub rgb_amount: f32,
    pub rgb_angle: f32,
    pub log_level: log::LevelFilter,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self::for_variant(Variant::Post)
    }
}

impl SketchOptions {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            camera_distance: PIXEL_CAMERA_DISTANCE,
            orbit: !variant.is_dom_synced(),
            wireframe: false,
            image_selector: "img".to_string(),
            ocean_selector: "#ocean".to_string(),
            rgb_amount: RGB_SHIFT_AMOUNT,
            rgb_angle: RGB_SHIFT_ANGLE,
            log_level: log::LevelFilter::Info,
        }
    }

    /// Build options from a `data-*` lookup (keys without the `data-`
    /// prefix). Malformed values are logged and replaced by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let variant = parse_or(&lookup, "variant", Variant::Post);
        let mut opts = Self::for_variant(variant);
        opts.camera_distance = parse_or(&lookup, "camera-distance", opts.camera_distance);
        if !(opts.camera_distance.is_finite() && opts.camera_distance > 0.0) {
            log::warn!("[options] camera-distance must be positive; using default");
            opts.camera_distance = PIXEL_CAMERA_DISTANCE;
        }
        opts.orbit = parse_or(&lookup, "orbit", opts.orbit);
        opts.wireframe = parse_or(&lookup, "wireframe", opts.wireframe);
        if let Some(sel) = lookup("image-selector").filter(|s| !s.trim().is_empty()) {
            opts.image_selector = sel;
        }
        if let Some(sel) = lookup("ocean-selector").filter(|s| !s.trim().is_empty()) {
            opts.ocean_selector = sel;
        }
        opts.rgb_amount = parse_or(&lookup, "rgb-amount", opts.rgb_amount);
        opts.rgb_angle = parse_or(&lookup, "rgb-angle", opts.rgb_angle);
        opts.log_level = parse_or(&lookup, "log-level", opts.log_level);
        opts
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("[options] ignoring data-{}={:?}", key, raw);
                default
            }
        },
    }
}
