//! Build the SVG text for a scene.

use kurbo::Rect;
use std::fmt::Write as _;
use thiserror::Error;
use veccad_core::Document;
use veccad_core::shapes::Shape;

/// Suggested download file name.
pub const FILE_NAME: &str = "drawing.svg";
/// MIME type of the exported document.
pub const MIME_TYPE: &str = "image/svg+xml";

/// Margin around the content bounds, in world units.
const MARGIN: f64 = 20.0;
/// Canvas size used when the scene is empty.
const FALLBACK_SIZE: f64 = 100.0;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("svg serialization failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// A finished export, ready for the host's download/save path.
#[derive(Debug, Clone)]
pub struct Export {
    /// The SVG document text.
    pub content: String,
    /// Suggested file name.
    pub file_name: &'static str,
    /// MIME type.
    pub mime_type: &'static str,
}

impl Export {
    /// Serialize a scene into a downloadable export.
    pub fn from_document(document: &Document) -> Result<Self, ExportError> {
        Ok(Self {
            content: render_svg(document)?,
            file_name: FILE_NAME,
            mime_type: MIME_TYPE,
        })
    }
}

/// Serialize the scene to SVG text.
///
/// Shape coordinates are written unchanged; the viewBox frames the content
/// bounds plus a margin, so the output is independent of pan/zoom. Only
/// finalized shapes are emitted, in z-order.
pub fn render_svg(document: &Document) -> Result<String, ExportError> {
    let frame = match document.bounds() {
        Some(bounds) => bounds.inflate(MARGIN, MARGIN),
        None => Rect::new(0.0, 0.0, FALLBACK_SIZE, FALLBACK_SIZE),
    };

    let mut out = String::new();
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"{x} {y} {w} {h}\">",
        x = frame.x0,
        y = frame.y0,
        w = frame.width(),
        h = frame.height(),
    )?;

    for shape in document.shapes_ordered() {
        let style = shape.style();
        let stroke = format!(
            "stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"",
            style.stroke_color.to_hex(),
            style.stroke_width,
        );
        match shape {
            Shape::Line(line) => writeln!(
                out,
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {stroke} />",
                line.start.x, line.start.y, line.end.x, line.end.y,
            )?,
            Shape::Rect(rect) => writeln!(
                out,
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {stroke} />",
                rect.position.x, rect.position.y, rect.width, rect.height,
            )?,
            Shape::Circle(circle) => writeln!(
                out,
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" {stroke} />",
                circle.center.x, circle.center.y, circle.radius,
            )?,
        }
    }

    writeln!(out, "</svg>")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Vec2};
    use veccad_core::shapes::{Circle, Color, Line, Rect as RectShape, Shape, ShapeBehavior};
    use veccad_core::{Editor, MouseButton, PointerEvent, ToolKind};

    #[test]
    fn test_empty_scene_gets_fallback_canvas() {
        let svg = render_svg(&Document::new()).unwrap();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("viewBox=\"0 0 100 100\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_shapes_serialized_in_order() {
        let mut doc = Document::new();
        doc.add_shape(Shape::Line(Line::new(
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
        )));
        doc.add_shape(Shape::Rect(RectShape::new(Point::new(10.0, 10.0), 20.0, 30.0)));

        let svg = render_svg(&doc).unwrap();
        let line_pos = svg.find("<line").unwrap();
        let rect_pos = svg.find("<rect").unwrap();
        assert!(line_pos < rect_pos);
        assert!(svg.contains("x1=\"0\" y1=\"0\" x2=\"50\" y2=\"0\""));
        assert!(svg.contains("x=\"10\" y=\"10\" width=\"20\" height=\"30\""));
    }

    #[test]
    fn test_style_attributes_preserved() {
        let mut doc = Document::new();
        let mut circle = Circle::new(Point::new(5.0, 5.0), 3.0);
        circle.style_mut().stroke_color = Color::from_hex("#ff8800");
        circle.style_mut().stroke_width = 4.0;
        doc.add_shape(Shape::Circle(circle));

        let svg = render_svg(&doc).unwrap();
        assert!(svg.contains("stroke=\"#ff8800\""));
        assert!(svg.contains("stroke-width=\"4\""));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn test_viewbox_frames_content_with_margin() {
        let mut doc = Document::new();
        doc.add_shape(Shape::Rect(RectShape::new(Point::new(40.0, 60.0), 100.0, 20.0)));

        let svg = render_svg(&doc).unwrap();
        assert!(svg.contains("viewBox=\"20 40 140 60\""));
    }

    #[test]
    fn test_selection_outline_not_exported() {
        // Draw a circle, leave it selected; the export must contain the
        // circle and nothing else.
        let mut editor = Editor::new();
        editor.set_tool(ToolKind::Circle);
        editor.handle_pointer_event(PointerEvent::Down {
            position: Point::new(50.0, 50.0),
            button: MouseButton::Left,
        });
        editor.handle_pointer_event(PointerEvent::Up {
            position: Point::new(80.0, 50.0),
            button: MouseButton::Left,
        });
        editor.set_tool(ToolKind::Select);
        editor.handle_pointer_event(PointerEvent::Down {
            position: Point::new(80.0, 50.0),
            button: MouseButton::Left,
        });
        editor.handle_pointer_event(PointerEvent::Up {
            position: Point::new(80.0, 50.0),
            button: MouseButton::Left,
        });
        assert!(editor.selection().is_some());
        assert!(editor.selection_outline().is_some());

        let svg = render_svg(&editor.document).unwrap();
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<rect").count(), 0);
        assert_eq!(svg.matches("<line").count(), 0);
        assert!(!svg.contains("outline"));
    }

    #[test]
    fn test_export_independent_of_camera() {
        let mut editor = Editor::new();
        editor.set_tool(ToolKind::Line);
        editor.handle_pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
            button: MouseButton::Left,
        });
        editor.handle_pointer_event(PointerEvent::Up {
            position: Point::new(100.0, 0.0),
            button: MouseButton::Left,
        });

        let before = render_svg(&editor.document).unwrap();
        editor.camera.offset = Vec2::new(300.0, -100.0);
        editor.camera.zoom = 3.0;
        let after = render_svg(&editor.document).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_export_bundle() {
        let export = Export::from_document(&Document::new()).unwrap();
        assert_eq!(export.file_name, "drawing.svg");
        assert_eq!(export.mime_type, "image/svg+xml");
        assert!(export.content.contains("<svg"));
    }
}
