pub mod hover;
pub mod pointer;
pub mod viewport;

pub use hover::wire_hover_handlers;
pub use pointer::wire_pointer_handlers;
pub use viewport::wire_resize;
