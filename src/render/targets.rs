use super::helpers;
use crate::constants::{DEPTH_FORMAT, SCENE_FORMAT};

/// Offscreen targets sized to the draw buffer.
///
/// - `depth_*` backs the scene pass in both direct and post modes.
/// - `scene_*` holds the scene color when post-processing is on.
/// - `ping_*` / `pong_*` alternate between intermediate post passes.
pub(crate) struct RenderTargets {
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) scene_view: wgpu::TextureView,
    pub(crate) ping_view: wgpu::TextureView,
    pub(crate) pong_view: wgpu::TextureView,
    _textures: [wgpu::Texture; 4],
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let color_usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (depth, depth_view) = helpers::create_render_texture(
            device,
            "depth_tex",
            width,
            height,
            DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let (scene, scene_view) =
            helpers::create_render_texture(device, "scene_tex", width, height, SCENE_FORMAT, color_usage);
        let (ping, ping_view) =
            helpers::create_render_texture(device, "post_ping", width, height, SCENE_FORMAT, color_usage);
        let (pong, pong_view) =
            helpers::create_render_texture(device, "post_pong", width, height, SCENE_FORMAT, color_usage);
        Self {
            depth_view,
            scene_view,
            ping_view,
            pong_view,
            _textures: [depth, scene, ping, pong],
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
