//! VecCAD Core Library
//!
//! Platform-agnostic data structures and interaction logic for the VecCAD
//! vector editor: shapes, camera, document, history, tools and the editor
//! session that routes input events. Rendering and windowing are owned by
//! the embedding host.

pub mod camera;
pub mod document;
pub mod editor;
pub mod history;
pub mod input;
pub mod selection;
pub mod shapes;
pub mod snap;
pub mod tools;

pub use camera::Camera;
pub use document::Document;
pub use editor::{CursorKind, Editor};
pub use history::{History, Snapshot};
pub use input::{KeyEvent, MouseButton, PointerEvent};
pub use selection::{DragState, HIT_TOLERANCE, OUTLINE_MARGIN};
pub use snap::{GRID_SIZE, snap_to_grid};
pub use tools::{ToolKind, ToolManager, ToolState};
