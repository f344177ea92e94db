//! Scene orchestration: owns the camera, controls, meshes and tracked DOM
//! elements, and turns a [`FrameInput`] snapshot into one draw call.

use crate::core::backend::{RenderBackend, SceneFrame};
use crate::core::camera::{FovMode, PerspectiveCamera};
use crate::core::constants::*;
use crate::core::error::SketchResult;
use crate::core::geometry::GeometryKey;
use crate::core::hover::HoverTween;
use crate::core::input::FrameInput;
use crate::core::layout::{ElementRect, TrackedElement};
use crate::core::options::{SketchOptions, Variant};
use crate::core::orbit::OrbitControls;
use crate::core::pick;
use crate::core::post::PostChain;
use crate::core::scene::{MaterialKind, MeshInstance, TextureSlot};
use crate::core::viewport::{DrawBufferSize, Viewport};
use fnv::FnvHashMap;
use glam::Vec3;

pub struct Sketch {
    variant: Variant,
    wireframe: bool,
    viewport: Viewport,
    draw_size: Option<DrawBufferSize>,
    camera: PerspectiveCamera,
    orbit: Option<OrbitControls>,
    meshes: Vec<MeshInstance>,
    tracked: Vec<TrackedElement>,
    hovers: Vec<HoverTween>,
    // DOM element index -> tracked record index
    by_element: FnvHashMap<usize, usize>,
    post: Option<PostChain>,
}

impl Sketch {
    pub fn new(options: &SketchOptions, viewport: Viewport) -> Self {
        let variant = options.variant;
        let (mut camera, meshes) = match variant {
            Variant::Cube => (
                PerspectiveCamera::new(
                    FovMode::Fixed {
                        degrees: PRIMITIVE_FOV_DEG,
                    },
                    PRIMITIVE_NEAR,
                    PRIMITIVE_FAR,
                    Vec3::new(0.0, 0.0, CUBE_CAMERA_Z),
                ),
                vec![MeshInstance::new(GeometryKey::Cube, MaterialKind::Normal)],
            ),
            Variant::Plane => (
                PerspectiveCamera::new(
                    FovMode::Fixed {
                        degrees: PRIMITIVE_FOV_DEG,
                    },
                    PRIMITIVE_NEAR,
                    PRIMITIVE_FAR,
                    Vec3::new(0.0, 0.0, PLANE_CAMERA_Z),
                ),
                vec![MeshInstance::new(
                    GeometryKey::ShadedPlane,
                    MaterialKind::Shaded,
                )],
            ),
            Variant::Ocean | Variant::Images | Variant::Post => (
                PerspectiveCamera::new(
                    FovMode::FillHeight {
                        distance: options.camera_distance,
                    },
                    PIXEL_NEAR,
                    PIXEL_FAR,
                    Vec3::new(0.0, 0.0, options.camera_distance),
                ),
                Vec::new(),
            ),
        };
        camera.apply_viewport(viewport);
        let orbit = options
            .orbit
            .then(|| OrbitControls::new(camera.position, camera.target));
        let post = (variant == Variant::Post)
            .then(|| PostChain::scroll_and_shift(options.rgb_amount, options.rgb_angle));
        log::info!(
            "[sketch] variant={} viewport={}x{} orbit={}",
            variant.name(),
            viewport.width,
            viewport.height,
            orbit.is_some()
        );
        Self {
            variant,
            wireframe: options.wireframe,
            viewport,
            draw_size: None,
            camera,
            orbit,
            meshes,
            tracked: Vec::new(),
            hovers: Vec::new(),
            by_element: FnvHashMap::default(),
            post,
        }
    }

    /// Start tracking a DOM element. Call once per element after preload;
    /// returns `false` when the variant has no DOM-synced meshes or the
    /// element is already tracked.
    pub fn track_element(&mut self, element: usize, rect: ElementRect, texture: TextureSlot) -> bool {
        let material = match self.variant {
            Variant::Ocean => MaterialKind::Ocean {
                wireframe: self.wireframe,
            },
            Variant::Images | Variant::Post => MaterialKind::Image,
            Variant::Cube | Variant::Plane => return false,
        };
        if self.by_element.contains_key(&element) {
            return false;
        }
        let segments = match material {
            MaterialKind::Ocean { .. } => OCEAN_SEGMENTS,
            _ => IMAGE_PLANE_SEGMENTS,
        };
        let mesh_index = self.meshes.len();
        let record = TrackedElement {
            element,
            mesh: mesh_index,
            rect,
        };
        let mut mesh = MeshInstance::new(GeometryKey::UnitPlane { segments }, material).with_texture(texture);
        mesh.position = record.position(self.viewport, 0.0);
        mesh.scale = record.scale();
        self.meshes.push(mesh);
        self.by_element.insert(element, self.tracked.len());
        self.tracked.push(record);
        self.hovers.push(HoverTween::default());
        true
    }

    /// Replace the measured rect of an already tracked element.
    pub fn update_rect(&mut self, element: usize, rect: ElementRect) {
        if let Some(&ti) = self.by_element.get(&element) {
            self.tracked[ti].rect = rect;
        }
    }

    /// Apply a new container size: draw buffer, pixel ratio, camera aspect and
    /// (for pixel-space demos) field of view. Repeating it is a no-op.
    pub fn resize<B: RenderBackend>(&mut self, viewport: Viewport, device_pixel_ratio: f64, backend: &mut B) {
        self.viewport = viewport;
        self.camera.apply_viewport(viewport);
        let size = DrawBufferSize::from_viewport(viewport, device_pixel_ratio);
        backend.configure(size);
        self.draw_size = Some(size);
        log::debug!(
            "[resize] {}x{} css, {}x{} px, fov={:.2}",
            viewport.width,
            viewport.height,
            size.physical_width,
            size.physical_height,
            self.camera.fov_degrees
        );
    }

    pub fn frame<B: RenderBackend>(&mut self, input: &FrameInput, backend: &mut B) -> SketchResult<()> {
        if let Some(req) = &input.resize {
            self.resize(req.viewport, req.device_pixel_ratio, backend);
            for (element, rect) in &req.rects {
                self.update_rect(*element, *rect);
            }
        }

        let t = input.elapsed;
        let spins = matches!(self.variant, Variant::Cube | Variant::Plane);
        for mesh in &mut self.meshes {
            if spins {
                mesh.rotation.x = t / ROTATION_X_DIVISOR;
                mesh.rotation.y = t / ROTATION_Y_DIVISOR;
            }
            mesh.uniforms.time = t;
        }

        for change in &input.hover_changes {
            if let Some(&ti) = self.by_element.get(&change.element) {
                if change.entered {
                    self.hovers[ti].enter(t);
                } else {
                    self.hovers[ti].leave(t);
                }
            }
        }

        for (ti, record) in self.tracked.iter().enumerate() {
            let mesh = &mut self.meshes[record.mesh];
            mesh.position = record.position(self.viewport, input.scroll);
            mesh.scale = record.scale();
            mesh.uniforms.hover_state = self.hovers[ti].sample(t);
        }

        if let Some(ndc) = input.pointer_ndc {
            self.pick(ndc.x, ndc.y);
        }

        if let Some(orbit) = &mut self.orbit {
            orbit.drag(input.orbit_drag, self.viewport.height);
            self.camera.position = orbit.update();
            self.camera.target = orbit.target;
        }

        if let Some(post) = &mut self.post {
            post.set_scroll_speed(input.scroll_speed);
        }

        backend.submit(&SceneFrame {
            camera: &self.camera,
            meshes: &self.meshes,
            post: self.post.as_ref(),
            time: t,
        })
    }

    // The front-most image plane under the pointer records the hit UV.
    fn pick(&mut self, ndc_x: f32, ndc_y: f32) {
        let (ro, rd) = self.camera.ray_from_ndc(ndc_x, ndc_y);
        let meshes = &self.meshes;
        let candidates = self.tracked.iter().filter_map(|r| {
            let m = &meshes[r.mesh];
            (m.material == MaterialKind::Image).then(|| (r.mesh, m.position, m.scale.truncate()))
        });
        if let Some((mesh_index, uv)) = pick::nearest_hit(ro, rd, candidates) {
            self.meshes[mesh_index].uniforms.hover = uv;
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn draw_size(&self) -> Option<DrawBufferSize> {
        self.draw_size
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn meshes(&self) -> &[MeshInstance] {
        &self.meshes
    }

    pub fn tracked(&self) -> &[TrackedElement] {
        &self.tracked
    }

    pub fn post(&self) -> Option<&PostChain> {
        self.post.as_ref()
    }

    pub fn has_orbit(&self) -> bool {
        self.orbit.is_some()
    }

    /// Mesh driven by a DOM element, if tracked.
    pub fn mesh_for_element(&self, element: usize) -> Option<&MeshInstance> {
        self.by_element
            .get(&element)
            .map(|&ti| &self.meshes[self.tracked[ti].mesh])
    }
}
