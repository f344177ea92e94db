use super::helpers;
use crate::constants::DEPTH_FORMAT;
use crate::core::{Geometry, GeometryKey, MaterialKind, MeshInstance, Vertex};
use fnv::FnvHashMap;
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshUniforms {
    model: [[f32; 4]; 4],
    view_proj: [[f32; 4]; 4],
    hover: [f32; 2],
    hover_state: f32,
    time: f32,
}

impl MeshUniforms {
    pub(crate) fn new(mesh: &MeshInstance, view_proj: Mat4) -> Self {
        Self {
            model: mesh.model_matrix().to_cols_array_2d(),
            view_proj: view_proj.to_cols_array_2d(),
            hover: mesh.uniforms.hover.to_array(),
            hover_state: mesh.uniforms.hover_state,
            time: mesh.uniforms.time,
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

pub(crate) struct GpuGeometry {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    wire_buffer: wgpu::Buffer,
    wire_count: u32,
}

struct MeshSlot {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct MaterialPipelines {
    normal: wgpu::RenderPipeline,
    shaded: wgpu::RenderPipeline,
    ocean: wgpu::RenderPipeline,
    ocean_wire: wgpu::RenderPipeline,
    image: wgpu::RenderPipeline,
}

/// Pipelines, uploaded geometry and per-mesh uniform slots.
pub(crate) struct MeshResources {
    uniform_bgl: wgpu::BindGroupLayout,
    pub(crate) texture_bgl: wgpu::BindGroupLayout,
    pipelines: MaterialPipelines,
    geometries: FnvHashMap<GeometryKey, GpuGeometry>,
    slots: Vec<MeshSlot>,
}

impl MeshResources {
    pub(crate) fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::MESH_WGSL.into()),
        });
        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh_uniform_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let texture_bgl = helpers::texture_sampler_layout(device, "mesh_texture_bgl");
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&uniform_bgl, &texture_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = |vs: &str, fs: &str, topology: wgpu::PrimitiveTopology, cull: Option<wgpu::Face>| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(fs),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some(vs),
                    buffers: &[vertex_layout()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState {
                    topology,
                    cull_mode: cull,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(fs),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: color_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };
        use wgpu::PrimitiveTopology::{LineList, TriangleList};
        let pipelines = MaterialPipelines {
            normal: pipeline("vs_mesh", "fs_normal", TriangleList, Some(wgpu::Face::Back)),
            shaded: pipeline("vs_shaded", "fs_shaded", TriangleList, None),
            ocean: pipeline("vs_ocean", "fs_ocean", TriangleList, None),
            ocean_wire: pipeline("vs_ocean", "fs_ocean", LineList, None),
            image: pipeline("vs_image", "fs_image", TriangleList, None),
        };
        Self {
            uniform_bgl,
            texture_bgl,
            pipelines,
            geometries: FnvHashMap::default(),
            slots: Vec::new(),
        }
    }

    fn ensure_geometry(&mut self, device: &wgpu::Device, key: GeometryKey) {
        if self.geometries.contains_key(&key) {
            return;
        }
        let geometry = Geometry::build(key);
        let wire = geometry.wireframe_indices();
        let upload = |label: &str, contents: &[u8], usage: wgpu::BufferUsages| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents,
                usage,
            })
        };
        log::debug!(
            "[render] upload {:?}: {} vertices, {} indices",
            key,
            geometry.vertices.len(),
            geometry.indices.len()
        );
        self.geometries.insert(
            key,
            GpuGeometry {
                vertex_buffer: upload(
                    "mesh_vertices",
                    bytemuck::cast_slice(&geometry.vertices),
                    wgpu::BufferUsages::VERTEX,
                ),
                index_buffer: upload(
                    "mesh_indices",
                    bytemuck::cast_slice(&geometry.indices),
                    wgpu::BufferUsages::INDEX,
                ),
                index_count: geometry.indices.len() as u32,
                wire_buffer: upload("mesh_wire", bytemuck::cast_slice(&wire), wgpu::BufferUsages::INDEX),
                wire_count: wire.len() as u32,
            },
        );
    }

    fn ensure_slots(&mut self, device: &wgpu::Device, count: usize) {
        while self.slots.len() < count {
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("mesh_uniforms"),
                size: std::mem::size_of::<MeshUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("mesh_uniform_bg"),
                layout: &self.uniform_bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            self.slots.push(MeshSlot {
                uniform_buffer,
                bind_group,
            });
        }
    }

    /// Upload anything new and write this frame's uniforms.
    pub(crate) fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        meshes: &[MeshInstance],
        view_proj: Mat4,
    ) {
        self.ensure_slots(device, meshes.len());
        for (mesh, slot) in meshes.iter().zip(&self.slots) {
            queue.write_buffer(
                &slot.uniform_buffer,
                0,
                bytemuck::bytes_of(&MeshUniforms::new(mesh, view_proj)),
            );
        }
        for mesh in meshes {
            self.ensure_geometry(device, mesh.geometry);
        }
    }

    /// Record draws for `meshes`; `textures` resolves each mesh's bind group.
    pub(crate) fn draw<'t>(
        &self,
        rpass: &mut wgpu::RenderPass<'_>,
        meshes: &[MeshInstance],
        texture_for: impl Fn(&MeshInstance) -> Option<&'t wgpu::BindGroup>,
    ) {
        for (mesh, slot) in meshes.iter().zip(&self.slots) {
            let Some(geometry) = self.geometries.get(&mesh.geometry) else {
                continue;
            };
            let Some(texture_bg) = texture_for(mesh) else {
                continue;
            };
            let (pipeline, wire) = match mesh.material {
                MaterialKind::Normal => (&self.pipelines.normal, false),
                MaterialKind::Shaded => (&self.pipelines.shaded, false),
                MaterialKind::Ocean { wireframe: false } => (&self.pipelines.ocean, false),
                MaterialKind::Ocean { wireframe: true } => (&self.pipelines.ocean_wire, true),
                MaterialKind::Image => (&self.pipelines.image, false),
            };
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, &slot.bind_group, &[]);
            rpass.set_bind_group(1, texture_bg, &[]);
            rpass.set_vertex_buffer(0, geometry.vertex_buffer.slice(..));
            if wire {
                rpass.set_index_buffer(geometry.wire_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..geometry.wire_count, 0, 0..1);
            } else {
                rpass.set_index_buffer(geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..geometry.index_count, 0, 0..1);
            }
        }
    }
}
