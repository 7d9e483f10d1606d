//! Circle shape.

use super::{ShapeBehavior, ShapeId, ShapeStyle};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle.
///
/// Invariant: `radius` is non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius: radius.abs(),
            style: ShapeStyle::default(),
        }
    }

    /// Create a circle from its center and a point on the rim; the radius
    /// is the Euclidean distance between the two.
    pub fn from_center_and_edge(center: Point, edge: Point) -> Self {
        Self::new(center, center.distance(edge))
    }

    /// Replace the radius from a point on the rim, keeping id and style.
    pub fn set_edge(&mut self, edge: Point) {
        self.radius = self.center.distance(edge);
    }
}

impl ShapeBehavior for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // Unfilled: hit the stroke ring only.
        let dist = self.center.distance(point);
        let reach = tolerance + self.style.stroke_width / 2.0;
        (dist - self.radius).abs() <= reach
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
