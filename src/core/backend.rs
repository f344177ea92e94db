use crate::core::camera::PerspectiveCamera;
use crate::core::error::SketchResult;
use crate::core::post::PostChain;
use crate::core::scene::MeshInstance;
use crate::core::viewport::DrawBufferSize;

/// Everything the renderer needs for one draw call.
pub struct SceneFrame<'a> {
    pub camera: &'a PerspectiveCamera,
    pub meshes: &'a [MeshInstance],
    /// `None` renders straight to the canvas.
    pub post: Option<&'a PostChain>,
    pub time: f32,
}

/// The slice of the rendering engine the sketch depends on.
pub trait RenderBackend {
    /// Resize the draw buffer (CSS size times capped pixel ratio).
    fn configure(&mut self, size: DrawBufferSize);
    /// Draw one frame.
    fn submit(&mut self, frame: &SceneFrame<'_>) -> SketchResult<()>;
}
