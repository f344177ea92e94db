// Browser-side wiring constants.

// Container the canvas is appended to; its data-* attributes carry the options
pub const CONTAINER_SELECTOR: &str = "#webgl";

// Background behind the scene
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

// Offscreen scene color used as the post-processing input
pub const SCENE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

// Uploaded DOM images
pub const IMAGE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;
