//! Selection outline and the drag-to-move gesture context.

use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Rect};

/// Margin around a selected shape's bounds for the selection outline,
/// in world units.
pub const OUTLINE_MARGIN: f64 = 6.0;

/// Hit tolerance for picking shapes, in screen pixels (divide by the
/// camera zoom for world-space tests).
pub const HIT_TOLERANCE: f64 = 5.0;

/// Get the selection outline rectangle for a shape.
pub fn outline_rect(shape: &Shape) -> Rect {
    shape.bounds().inflate(OUTLINE_MARGIN, OUTLINE_MARGIN)
}

/// Transient context of an active move gesture.
///
/// The shape's original geometry is captured once at drag start; each
/// pointer move re-derives the moved geometry from it, so intermediate
/// updates cannot accumulate rounding error.
#[derive(Debug, Clone)]
pub struct DragState {
    /// The shape being moved.
    pub shape_id: ShapeId,
    /// World point where the drag started.
    pub start_point: Point,
    /// Shape state at drag start.
    pub original_shape: Shape,
}

impl DragState {
    /// Capture the drag context at gesture start.
    pub fn new(shape_id: ShapeId, start_point: Point, original_shape: Shape) -> Self {
        Self {
            shape_id,
            start_point,
            original_shape,
        }
    }

    /// The shape translated to the current pointer position.
    pub fn moved_shape(&self, current: Point) -> Shape {
        let mut shape = self.original_shape.clone();
        shape.translate(current - self.start_point);
        shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Line, Rect as RectShape, ShapeBehavior};

    #[test]
    fn test_outline_inflates_bounds() {
        let shape = Shape::Rect(RectShape::new(Point::new(10.0, 10.0), 20.0, 20.0));
        let outline = outline_rect(&shape);
        assert!((outline.x0 - 4.0).abs() < f64::EPSILON);
        assert!((outline.y0 - 4.0).abs() < f64::EPSILON);
        assert!((outline.x1 - 36.0).abs() < f64::EPSILON);
        assert!((outline.y1 - 36.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_moved_shape_is_relative_to_original() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let id = line.id();
        let drag = DragState::new(id, Point::new(5.0, 0.0), Shape::Line(line));

        let moved = drag.moved_shape(Point::new(8.0, 4.0));
        let Shape::Line(moved) = moved else {
            panic!("expected line")
        };
        assert_eq!(moved.start, Point::new(3.0, 4.0));
        assert_eq!(moved.end, Point::new(13.0, 4.0));
        assert_eq!(moved.id(), id);
    }

    #[test]
    fn test_move_back_restores_geometry() {
        let original = Shape::Line(Line::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0)));
        let drag = DragState::new(original.id(), Point::new(0.0, 0.0), original.clone());

        // Out and back to the start point
        let _ = drag.moved_shape(Point::new(17.0, -9.0));
        let back = drag.moved_shape(Point::new(0.0, 0.0));
        assert_eq!(back, original);
    }
}
