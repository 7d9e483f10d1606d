//! Host-facing input event vocabulary.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mouse button identifiers. Left draws/selects/moves, Right pans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are in screen (viewport) coordinates; the editor session
/// applies the camera inverse and optional grid snapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    /// Wheel input. A positive vertical delta zooms in, negative out.
    Scroll {
        position: Point,
        delta: Vec2,
    },
}

/// Keyboard event type. Keys are named as the host reports them
/// ("Delete", "Backspace", or a letter for the tool shortcuts).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}
