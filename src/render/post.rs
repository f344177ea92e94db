use super::helpers;
use crate::constants::SCENE_FORMAT;
use crate::core::PostPass;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    time: f32,
    scroll_speed: f32,
    amount: f32,
    angle: f32,
    _pad: [f32; 2],
}

impl PostUniforms {
    pub(crate) fn for_pass(pass: &PostPass, resolution: [f32; 2], time: f32) -> Self {
        let mut u = Self {
            resolution,
            time,
            scroll_speed: 0.0,
            amount: 0.0,
            angle: 0.0,
            _pad: [0.0; 2],
        };
        match *pass {
            PostPass::ScrollDistort { scroll_speed } => u.scroll_speed = scroll_speed,
            PostPass::RgbShift { amount, angle } => {
                u.amount = amount;
                u.angle = angle;
            }
        }
        u
    }
}

pub(crate) struct PostResources {
    pub(crate) bgl: wgpu::BindGroupLayout, // tex+sampler+uniform
    // one uniform buffer per chain slot so each pass keeps its own values
    uniform_buffers: Vec<wgpu::Buffer>,
    // [to offscreen, to swapchain]
    scroll_pipelines: [wgpu::RenderPipeline; 2],
    rgb_shift_pipelines: [wgpu::RenderPipeline; 2],
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
            helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipelines = |entry: &str| {
        [
            helpers::make_post_pipeline(device, &pl, post_shader, entry, SCENE_FORMAT),
            helpers::make_post_pipeline(device, &pl, post_shader, entry, swap_format),
        ]
    };
    PostResources {
        scroll_pipelines: pipelines("fs_scroll"),
        rgb_shift_pipelines: pipelines("fs_rgb_shift"),
        bgl,
        uniform_buffers: Vec::new(),
    }
}

impl PostResources {
    pub(crate) fn pipeline(&self, pass: &PostPass, to_swapchain: bool) -> &wgpu::RenderPipeline {
        let i = usize::from(to_swapchain);
        match pass {
            PostPass::ScrollDistort { .. } => &self.scroll_pipelines[i],
            PostPass::RgbShift { .. } => &self.rgb_shift_pipelines[i],
        }
    }

    /// Write the uniforms for chain slot `slot`, growing the buffer pool.
    pub(crate) fn write_uniforms(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        slot: usize,
        uniforms: &PostUniforms,
    ) {
        while self.uniform_buffers.len() <= slot {
            self.uniform_buffers.push(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("post_uniforms"),
                size: std::mem::size_of::<PostUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }
        queue.write_buffer(&self.uniform_buffers[slot], 0, bytemuck::bytes_of(uniforms));
    }

    /// Bind `source` with the uniforms last written to `slot`.
    pub(crate) fn bind_group(
        &self,
        device: &wgpu::Device,
        source: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
        slot: usize,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("post_bg"),
            layout: &self.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(source),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: self.uniform_buffers[slot].as_entire_binding(),
                },
            ],
        })
    }
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    r.draw(0..3, 0..1);
}
