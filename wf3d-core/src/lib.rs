/// WF3D Core Library - Wireframe geometry engine
///
/// Loads comma-separated polyhedron descriptions, rotates and projects them
/// orthographically, and drives any `Canvas` frontend from mouse-drag input.

pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod loader;
pub mod matrix;
pub mod projection;
pub mod render_loop;
pub mod transform;

// Re-export commonly used types
pub use canvas::{Canvas, InputEvent};
pub use config::{Color, ViewerConfig};
pub use error::{ConfigError, FormatError, MatrixError};
pub use geometry::{Face, Mesh, Vertex};
pub use interaction::{DragController, PointerButtons, PointerPosition};
pub use loader::{load, load_file};
pub use projection::{Projection, ScreenPoint};
pub use render_loop::{LoopState, Viewer};
pub use transform::{RotationState, Transform};
