use crate::constants::IMAGE_FORMAT;
use crate::core::{MeshInstance, SketchError, TextureSlot};
use web_sys as web;

struct TextureEntry {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// DOM images uploaded as textures (`uImage` / `uOceanTexture`), plus a 1×1
/// white fallback bound for untextured materials.
pub(crate) struct TextureRegistry {
    sampler: wgpu::Sampler,
    fallback: TextureEntry,
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    pub(crate) fn new(device: &wgpu::Device, queue: &wgpu::Queue, layout: &wgpu::BindGroupLayout) -> Self {
        let sampler = super::helpers::create_linear_sampler(device, "image_sampler");
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("white_1x1"),
            size: wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: IMAGE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &[255, 255, 255, 255],
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: Some(1),
            },
            wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
        );
        let fallback = entry(device, layout, &sampler, texture);
        Self {
            sampler,
            fallback,
            entries: Vec::new(),
        }
    }

    /// Copy a decoded `<img>` into a new texture.
    pub(crate) fn upload_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        image: &web::HtmlImageElement,
    ) -> Result<TextureSlot, SketchError> {
        let (width, height) = (image.natural_width(), image.natural_height());
        if width == 0 || height == 0 {
            return Err(SketchError::AssetLoadFailure(format!(
                "image {} has no pixels",
                image.src()
            )));
        }
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("dom_image"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: IMAGE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLImageElement(image.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            size,
        );
        self.entries.push(entry(device, layout, &self.sampler, texture));
        Ok(TextureSlot(self.entries.len() - 1))
    }

    /// Bind group for a mesh; `None` if it names a texture that never
    /// uploaded (the mesh is skipped).
    pub(crate) fn bind_group_for(&self, mesh: &MeshInstance) -> Option<&wgpu::BindGroup> {
        match mesh.texture {
            Some(TextureSlot(i)) => self.entries.get(i).map(|e| &e.bind_group),
            None if mesh.material.is_textured() => None,
            None => Some(&self.fallback.bind_group),
        }
    }
}

fn entry(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    texture: wgpu::Texture,
) -> TextureEntry {
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("image_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    TextureEntry {
        _texture: texture,
        bind_group,
    }
}
