//! CPU-side geometry for the demo meshes.

use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Key identifying a geometry so the backend can upload it once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKey {
    Cube,
    ShadedPlane,
    /// Unit plane scaled per mesh to its DOM element.
    UnitPlane { segments: u32 },
}

#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    pub fn build(key: GeometryKey) -> Self {
        use crate::core::constants::{CUBE_SIZE, SHADED_PLANE_SEGMENTS, SHADED_PLANE_SIZE};
        match key {
            GeometryKey::Cube => box_geometry(CUBE_SIZE),
            GeometryKey::ShadedPlane => plane_geometry(
                SHADED_PLANE_SIZE,
                SHADED_PLANE_SIZE,
                SHADED_PLANE_SEGMENTS,
                SHADED_PLANE_SEGMENTS,
            ),
            GeometryKey::UnitPlane { segments } => plane_geometry(1.0, 1.0, segments, segments),
        }
    }

    /// Edge list (pairs of indices) for line-list drawing. Every triangle
    /// edge appears once.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        let mut seen = fnv::FnvHashSet::default();
        let mut out = Vec::with_capacity(self.indices.len() * 2);
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = if a < b { (a, b) } else { (b, a) };
                if seen.insert(key) {
                    out.push(key.0);
                    out.push(key.1);
                }
            }
        }
        out
    }
}

/// XY plane centered on the origin, facing +Z, UV origin bottom-left.
pub fn plane_geometry(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Geometry {
    let gx = width_segments.max(1);
    let gy = height_segments.max(1);
    let mut vertices = Vec::with_capacity(((gx + 1) * (gy + 1)) as usize);
    for iy in 0..=gy {
        let v = iy as f32 / gy as f32;
        let y = height / 2.0 - v * height;
        for ix in 0..=gx {
            let u = ix as f32 / gx as f32;
            let x = u * width - width / 2.0;
            vertices.push(Vertex {
                position: [x, y, 0.0],
                normal: [0.0, 0.0, 1.0],
                uv: [u, 1.0 - v],
            });
        }
    }
    let mut indices = Vec::with_capacity((gx * gy * 6) as usize);
    for iy in 0..gy {
        for ix in 0..gx {
            let a = ix + (gx + 1) * iy;
            let b = ix + (gx + 1) * (iy + 1);
            let c = (ix + 1) + (gx + 1) * (iy + 1);
            let d = (ix + 1) + (gx + 1) * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    Geometry { vertices, indices }
}

/// Axis-aligned cube with per-face normals (24 vertices, 36 indices).
pub fn box_geometry(size: f32) -> Geometry {
    let h = size / 2.0;
    // (normal, u axis, v axis)
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u_axis, v_axis) in faces {
        let base = vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (n + u_axis * su + v_axis * sv) * h;
            vertices.push(Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: [(su + 1.0) / 2.0, (sv + 1.0) / 2.0],
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    Geometry { vertices, indices }
}
