//! Shape definitions for the editor.

mod circle;
mod line;
mod rect;

pub use circle::Circle;
pub use line::Line;
pub use rect::Rect;

use kurbo::{Point, Rect as KurboRect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stroke color as RGBA8.
///
/// The host's color controls and the SVG exporter both speak hex text, so
/// the canonical form is a byte quadruple with hex conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Parse a CSS-style hex color (`#rgb`, `#rrggbb`, `#rrggbbaa`).
    /// Unparseable input falls back to opaque black.
    pub fn from_hex(color: &str) -> Self {
        if let Some(hex) = color.strip_prefix('#') {
            let hex = hex.trim();
            match hex.len() {
                3 => {
                    let r = u8::from_str_radix(&hex[0..1], 16).unwrap_or(0) * 17;
                    let g = u8::from_str_radix(&hex[1..2], 16).unwrap_or(0) * 17;
                    let b = u8::from_str_radix(&hex[2..3], 16).unwrap_or(0) * 17;
                    return Self::new(r, g, b, 255);
                }
                6 => {
                    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                    return Self::new(r, g, b, 255);
                }
                8 => {
                    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                    let a = u8::from_str_radix(&hex[6..8], 16).unwrap_or(255);
                    return Self::new(r, g, b, a);
                }
                _ => {}
            }
        }
        Self::black()
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Style properties captured by a shape at creation time.
///
/// Styles are frozen per shape: changing the live controls afterwards does
/// not retouch shapes already in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: Color,
    /// Stroke width in world units.
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::black(),
            stroke_width: 2.0,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Distance from a point to a line segment (a->b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    point.distance(proj)
}

/// Common trait for all shapes.
pub trait ShapeBehavior {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in world coordinates.
    fn bounds(&self) -> KurboRect;

    /// Check if a point (in world coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Move the shape by a world-space delta.
    fn translate(&mut self, delta: Vec2);

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;
}

/// Enum wrapper over all shape kinds (for storage and serialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Rect(Rect),
    Circle(Circle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id(),
            Shape::Rect(s) => s.id(),
            Shape::Circle(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> KurboRect {
        match self {
            Shape::Line(s) => s.bounds(),
            Shape::Rect(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Line(s) => s.hit_test(point, tolerance),
            Shape::Rect(s) => s.hit_test(point, tolerance),
            Shape::Circle(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Line(s) => s.translate(delta),
            Shape::Rect(s) => s.translate(delta),
            Shape::Circle(s) => s.translate(delta),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Line(s) => s.style(),
            Shape::Rect(s) => s.style(),
            Shape::Circle(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Line(s) => s.style_mut(),
            Shape::Rect(s) => s.style_mut(),
            Shape::Circle(s) => s.style_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let color = Color::new(0x12, 0xab, 0xff, 255);
        assert_eq!(color.to_hex(), "#12abff");
        assert_eq!(Color::from_hex("#12abff"), color);
    }

    #[test]
    fn test_hex_shorthand() {
        assert_eq!(Color::from_hex("#fff"), Color::new(255, 255, 255, 255));
        assert_eq!(Color::from_hex("#f00"), Color::new(255, 0, 0, 255));
    }

    #[test]
    fn test_hex_with_alpha() {
        let color = Color::from_hex("#11223380");
        assert_eq!(color, Color::new(0x11, 0x22, 0x33, 0x80));
        assert_eq!(color.to_hex(), "#11223380");
    }

    #[test]
    fn test_hex_invalid_falls_back_to_black() {
        assert_eq!(Color::from_hex("not a color"), Color::black());
        assert_eq!(Color::from_hex("#12"), Color::black());
    }

    #[test]
    fn test_point_to_segment_dist() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!((point_to_segment_dist(Point::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-12);
        assert!((point_to_segment_dist(Point::new(-4.0, 0.0), a, b) - 4.0).abs() < 1e-12);
        // Degenerate segment
        assert!((point_to_segment_dist(Point::new(3.0, 4.0), a, a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_shape_translate_preserves_id() {
        let mut shape = Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
        let id = shape.id();
        shape.translate(Vec2::new(5.0, 5.0));
        assert_eq!(shape.id(), id);
    }
}
