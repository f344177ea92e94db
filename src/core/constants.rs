// Shared scene tuning constants. Kept free of platform APIs so host tests can
// check the relationships between them.

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0; // caps draw-buffer density (GPU memory / fill cost)

// Primitive demos (cube / plane): perspective camera like a stock 3D scene
pub const PRIMITIVE_FOV_DEG: f32 = 70.0;
pub const PRIMITIVE_NEAR: f32 = 0.01;
pub const PRIMITIVE_FAR: f32 = 10.0;
pub const CUBE_CAMERA_Z: f32 = 1.0;
pub const PLANE_CAMERA_Z: f32 = 2.0;

// Pixel-space demos: camera far enough away that 1 world unit == 1 CSS pixel at z=0
pub const PIXEL_CAMERA_DISTANCE: f32 = 600.0;
pub const PIXEL_NEAR: f32 = 100.0;
pub const PIXEL_FAR: f32 = 2000.0;

// Primitive animation: rotation in radians = elapsed seconds / divisor
pub const ROTATION_X_DIVISOR: f32 = 2000.0;
pub const ROTATION_Y_DIVISOR: f32 = 1000.0;

// Geometry
pub const CUBE_SIZE: f32 = 0.2;
pub const SHADED_PLANE_SIZE: f32 = 0.5;
pub const SHADED_PLANE_SEGMENTS: u32 = 15;
pub const OCEAN_SEGMENTS: u32 = 30;
pub const IMAGE_PLANE_SEGMENTS: u32 = 10;

// Hover transition
pub const HOVER_DURATION_SEC: f32 = 1.0;

// Smooth scroll
pub const SCROLL_EASE: f32 = 0.1;
pub const SCROLL_SPEED_SCALE: f32 = 0.01; // px of lag -> scrollSpeed uniform units
pub const SCROLL_SNAP_PX: f32 = 0.1; // lag below this snaps onto the target

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_PHI_EPS: f32 = 1e-6;

// Post-processing defaults (RGB shift)
pub const RGB_SHIFT_AMOUNT: f32 = 0.005;
pub const RGB_SHIFT_ANGLE: f32 = 0.0;
