//! Render Module
//!
//! Image processing on skin atlases.

mod head;

pub use head::{composite_face, render_head, BASE_FACE_ORIGIN, FACE_SIZE, HAT_FACE_ORIGIN};
