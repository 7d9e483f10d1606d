//! SVG export backend for VecCAD.
//!
//! Serializes a scene to a self-contained SVG document: finalized shapes
//! only, no selection chrome, independent of the camera state.

mod export;

pub use export::{Export, ExportError, FILE_NAME, MIME_TYPE, render_svg};
