//! tagcanvas core library
//!
//! A tagged drawing surface: shapes drawn onto a scene carry string tags,
//! and an interactive layer turns pointer and key events into
//! click-to-select, drag-to-move, select-all, delete and clear.

pub mod color;
pub mod config;
pub mod drag;
pub mod error;
pub mod input;
pub mod interactive;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod tags;
pub mod viewport;

pub use color::{Paint, Rgba};
pub use config::{Command, KeyBindings, Shortcut, SurfaceConfig};
pub use drag::DragState;
pub use error::{CanvasError, CanvasResult};
pub use input::{KeyEvent, Modifiers, MouseButton, PointerEvent};
pub use interactive::{Cursor, InteractiveSurface};
pub use scene::{Element, ElementId, Scene};
pub use shapes::{ArcStyle, Geometry, Shape, ShapeKind, ShapeStyle};
pub use surface::{DrawStyle, DrawingSurface, ShapeOptions};
pub use tags::{Tag, TagOrId, TagSet};
pub use viewport::Viewport;
