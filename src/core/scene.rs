use crate::core::geometry::GeometryKey;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Which shader a mesh is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Normals as color; no uniforms beyond the transform.
    Normal,
    /// Plane animated by `uTime`, drawn double-sided.
    Shaded,
    /// Displaced surface sampling `uOceanTexture`.
    Ocean { wireframe: bool },
    /// DOM image plane sampling `uImage`, reacting to `uHover` / `uHoverState`.
    Image,
}

impl MaterialKind {
    pub fn is_textured(&self) -> bool {
        matches!(self, Self::Ocean { .. } | Self::Image)
    }
}

/// Per-mesh shader inputs. Names mirror the shader-side uniforms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaterialUniforms {
    /// `uTime`
    pub time: f32,
    /// `uHover`: UV of the last pointer hit on this mesh.
    pub hover: Vec2,
    /// `uHoverState`: 0 idle, 1 hovered.
    pub hover_state: f32,
}

/// Index into the backend's uploaded textures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureSlot(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct MeshInstance {
    pub geometry: GeometryKey,
    pub material: MaterialKind,
    pub position: Vec3,
    /// Euler angles (radians, XYZ order).
    pub rotation: Vec3,
    pub scale: Vec3,
    pub uniforms: MaterialUniforms,
    pub texture: Option<TextureSlot>,
}

impl MeshInstance {
    pub fn new(geometry: GeometryKey, material: MaterialKind) -> Self {
        Self {
            geometry,
            material,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            uniforms: MaterialUniforms {
                hover: Vec2::splat(0.5),
                ..Default::default()
            },
            texture: None,
        }
    }

    pub fn with_texture(mut self, slot: TextureSlot) -> Self {
        self.texture = Some(slot);
        self
    }

    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}
