use crate::constants::{CLEAR_COLOR, SCENE_FORMAT};
use crate::core::{
    DrawBufferSize, RenderBackend, SceneFrame, SketchError, SketchResult, TextureSlot,
};
use web_sys as web;

mod helpers;
mod meshes;
mod post;
mod targets;
mod textures;

use meshes::MeshResources;
use post::{PostResources, PostUniforms};
use targets::RenderTargets;
use textures::TextureRegistry;

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    canvas: web::HtmlCanvasElement,

    meshes: MeshResources,
    textures: TextureRegistry,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    // Present only when the sketch renders through a post chain
    post: Option<PostResources>,
}

impl GpuState {
    /// Acquire WebGPU on `canvas`. With `post_processing` the scene renders
    /// to an offscreen target first.
    pub async fn new(canvas: &web::HtmlCanvasElement, post_processing: bool) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let scene_format = if post_processing { SCENE_FORMAT } else { format };
        let meshes = MeshResources::new(&device, scene_format);
        let textures = TextureRegistry::new(&device, &queue, &meshes.texture_bgl);
        let targets = RenderTargets::new(&device, width, height);
        let linear_sampler = helpers::create_linear_sampler(&device, "post_sampler");
        let post = post_processing.then(|| {
            let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("post_shader"),
                source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
            });
            post::create_post_resources(&device, &post_shader, format)
        });
        log::info!(
            "[render] surface {:?} {}x{} post={}",
            format,
            width,
            height,
            post_processing
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            canvas: canvas.clone(),
            meshes,
            textures,
            targets,
            linear_sampler,
            post,
        })
    }

    pub fn upload_image(&mut self, image: &web::HtmlImageElement) -> SketchResult<TextureSlot> {
        self.textures
            .upload_image(&self.device, &self.queue, &self.meshes.texture_bgl, image)
    }

    fn acquire(&mut self) -> SketchResult<wgpu::SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Ok(frame),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                Err(SketchError::Backend("surface lost; reconfigured".into()))
            }
            Err(e) => Err(SketchError::Backend(format!("{:?}", e))),
        }
    }
}

impl RenderBackend for GpuState {
    fn configure(&mut self, size: DrawBufferSize) {
        let (width, height) = (size.physical_width, size.physical_height);
        crate::dom::sync_canvas_backing_size(&self.canvas, width, height);
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        // Recreate offscreen render targets; post bind groups are built per frame
        self.targets.recreate(&self.device, width, height);
    }

    fn submit(&mut self, frame: &SceneFrame<'_>) -> SketchResult<()> {
        let surface_frame = self.acquire()?;
        let view = surface_frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.meshes.prepare(
            &self.device,
            &self.queue,
            frame.meshes,
            frame.camera.view_projection(),
        );
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let chain = frame.post.filter(|c| !c.is_empty());
        let scene_target = match (chain, &self.post) {
            (Some(_), Some(_)) => &self.targets.scene_view,
            _ => &view,
        };
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: scene_target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let textures = &self.textures;
            self.meshes
                .draw(&mut rpass, frame.meshes, |m| textures.bind_group_for(m));
        }

        if let (Some(chain), Some(post)) = (chain, self.post.as_mut()) {
            let resolution = [self.config.width as f32, self.config.height as f32];
            let last = chain.len() - 1;
            let mut source = &self.targets.scene_view;
            for (i, pass) in chain.passes.iter().enumerate() {
                let to_swapchain = i == last;
                let target = if to_swapchain {
                    &view
                } else if i % 2 == 0 {
                    &self.targets.ping_view
                } else {
                    &self.targets.pong_view
                };
                let uniforms = PostUniforms::for_pass(pass, resolution, frame.time);
                post.write_uniforms(&self.device, &self.queue, i, &uniforms);
                let bg = post.bind_group(&self.device, source, &self.linear_sampler, i);
                post::blit(
                    &mut encoder,
                    "post_pass",
                    target,
                    CLEAR_COLOR,
                    post.pipeline(pass, to_swapchain),
                    &bg,
                );
                source = target;
            }
        }

        self.queue.submit(Some(encoder.finish()));
        surface_frame.present();
        Ok(())
    }
}
