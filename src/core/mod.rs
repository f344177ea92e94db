pub mod backend;
pub mod camera;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod input;
pub mod layout;
pub mod options;
pub mod orbit;
pub mod pick;
pub mod post;
pub mod preload;
pub mod scene;
pub mod schedule;
pub mod scroll;
pub mod sketch;
pub mod viewport;

pub use backend::*;
pub use camera::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use hover::*;
pub use input::*;
pub use layout::*;
pub use options::*;
pub use orbit::*;
pub use post::*;
pub use scene::*;
pub use schedule::*;
pub use scroll::*;
pub use sketch::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
