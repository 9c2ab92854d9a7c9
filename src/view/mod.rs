//! View layer: cursor/viewport bookkeeping and frame rendering

pub mod render;
pub mod viewport;

pub use render::{FrameRenderer, FrameView};
pub use viewport::{Cursor, Movement, Page, Viewport};
