//! Tool system: the active tool, its state, and the shape factory.

use crate::shapes::{Circle, Line, Rect, Shape, ShapeId, ShapeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Line,
    Rect,
    Circle,
}

impl ToolKind {
    /// Map a keyboard shortcut (S/L/R/C, case-insensitive) to a tool.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "s" => Some(ToolKind::Select),
            "l" => Some(ToolKind::Line),
            "r" => Some(ToolKind::Rect),
            "c" => Some(ToolKind::Circle),
            _ => None,
        }
    }

    /// Check if this tool creates shapes.
    pub fn is_draw_tool(self) -> bool {
        !matches!(self, ToolKind::Select)
    }
}

/// State of a draw interaction.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    /// Tool is idle, waiting for interaction.
    #[default]
    Idle,
    /// A shape is being drawn. The shape already lives in the document;
    /// its geometry is re-derived from the anchor on every pointer move.
    Active {
        /// Anchor point of the gesture, in world coordinates.
        start: Point,
        /// The in-progress shape.
        shape: ShapeId,
    },
}

/// Manages the current tool, its state, and the style applied to new shapes.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
    /// Style captured by each new shape at creation time.
    pub current_style: ShapeStyle,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool. Any draw state is reset; the editor session
    /// finalizes in-progress work before switching.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
        self.state = ToolState::Idle;
    }

    /// Begin a draw interaction at `point`, returning the initial
    /// (zero-size) shape to insert into the document. Returns `None` for
    /// the select tool.
    pub fn begin(&mut self, point: Point) -> Option<Shape> {
        let shape = make_shape(self.current_tool, point, point, self.current_style)?;
        self.state = ToolState::Active {
            start: point,
            shape: shape.id(),
        };
        Some(shape)
    }

    /// End the current interaction, returning the finalized shape's id.
    pub fn end(&mut self) -> Option<ShapeId> {
        if let ToolState::Active { shape, .. } = self.state {
            self.state = ToolState::Idle;
            Some(shape)
        } else {
            None
        }
    }

    /// Check if a draw interaction is active.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Active { .. })
    }
}

/// Shape factory: construct a shape of the given kind from two world
/// points, with the given style frozen in.
pub fn make_shape(kind: ToolKind, start: Point, end: Point, style: ShapeStyle) -> Option<Shape> {
    let mut shape = match kind {
        ToolKind::Select => return None,
        ToolKind::Line => Shape::Line(Line::new(start, end)),
        ToolKind::Rect => Shape::Rect(Rect::from_corners(start, end)),
        ToolKind::Circle => Shape::Circle(Circle::from_center_and_edge(start, end)),
    };
    *shape.style_mut() = style;
    Some(shape)
}

/// Re-derive an in-progress shape's geometry from its gesture anchor and
/// the current pointer position.
pub fn update_geometry(shape: &mut Shape, start: Point, current: Point) {
    match shape {
        Shape::Line(line) => {
            line.start = start;
            line.end = current;
        }
        Shape::Rect(rect) => rect.set_corners(start, current),
        Shape::Circle(circle) => {
            circle.center = start;
            circle.set_edge(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Color, ShapeBehavior};

    #[test]
    fn test_tool_shortcuts() {
        assert_eq!(ToolKind::from_key("l"), Some(ToolKind::Line));
        assert_eq!(ToolKind::from_key("R"), Some(ToolKind::Rect));
        assert_eq!(ToolKind::from_key("c"), Some(ToolKind::Circle));
        assert_eq!(ToolKind::from_key("S"), Some(ToolKind::Select));
        assert_eq!(ToolKind::from_key("x"), None);
        assert_eq!(ToolKind::from_key("Delete"), None);
    }

    #[test]
    fn test_begin_and_end() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Rect);
        assert!(!tm.is_active());

        let shape = tm.begin(Point::new(10.0, 10.0)).unwrap();
        assert!(tm.is_active());
        assert_eq!(tm.end(), Some(shape.id()));
        assert!(!tm.is_active());
        assert_eq!(tm.end(), None);
    }

    #[test]
    fn test_select_tool_creates_nothing() {
        let mut tm = ToolManager::new();
        assert!(tm.begin(Point::new(0.0, 0.0)).is_none());
        assert!(!tm.is_active());
    }

    #[test]
    fn test_factory_freezes_style() {
        let style = ShapeStyle {
            stroke_color: Color::from_hex("#ff0000"),
            stroke_width: 7.0,
        };
        let shape = make_shape(ToolKind::Line, Point::ZERO, Point::new(1.0, 1.0), style).unwrap();
        assert_eq!(*shape.style(), style);
    }

    #[test]
    fn test_factory_normalizes_rect() {
        let shape = make_shape(
            ToolKind::Rect,
            Point::new(100.0, 50.0),
            Point::new(0.0, 0.0),
            ShapeStyle::default(),
        )
        .unwrap();
        let Shape::Rect(rect) = shape else {
            panic!("expected rect")
        };
        assert_eq!(rect.position, Point::new(0.0, 0.0));
        assert!((rect.width - 100.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_factory_circle_radius() {
        let shape = make_shape(
            ToolKind::Circle,
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            ShapeStyle::default(),
        )
        .unwrap();
        let Shape::Circle(circle) = shape else {
            panic!("expected circle")
        };
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_geometry_renormalizes() {
        let mut shape = make_shape(
            ToolKind::Rect,
            Point::new(10.0, 10.0),
            Point::new(10.0, 10.0),
            ShapeStyle::default(),
        )
        .unwrap();
        // Drag up-left of the anchor
        update_geometry(&mut shape, Point::new(10.0, 10.0), Point::new(-10.0, 0.0));
        let Shape::Rect(rect) = &shape else {
            panic!("expected rect")
        };
        assert_eq!(rect.position, Point::new(-10.0, 0.0));
        assert!((rect.width - 20.0).abs() < f64::EPSILON);
        assert!((rect.height - 10.0).abs() < f64::EPSILON);
    }
}
