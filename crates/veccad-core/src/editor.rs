//! Editor session: owns the document, camera, tools, history and
//! selection, and routes host input events to them.
//!
//! All state transitions happen synchronously inside the event handlers;
//! at most one gesture (draw, move, or pan) is active at a time.

use crate::camera::{Camera, ZOOM_STEP_IN, ZOOM_STEP_OUT};
use crate::document::Document;
use crate::history::History;
use crate::input::{KeyEvent, MouseButton, PointerEvent};
use crate::selection::{self, DragState, HIT_TOLERANCE};
use crate::shapes::{Color, ShapeId};
use crate::snap::{GRID_SIZE, snap_to_grid};
use crate::tools::{ToolKind, ToolManager, ToolState, update_geometry};
use kurbo::{Point, Rect, Vec2};

/// Cursor feedback for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    Default,
    Crosshair,
    Grab,
}

/// Transient context of an active pan gesture.
#[derive(Debug, Clone)]
struct PanState {
    /// Last pointer position, in screen coordinates.
    last: Point,
}

/// An editing session.
///
/// Constructed at session start (committing the initial empty-scene
/// snapshot, so the first undo returns to a blank canvas) and dropped at
/// session end; nothing is persisted.
#[derive(Debug)]
pub struct Editor {
    /// The scene being edited.
    pub document: Document,
    /// View transform (pan/zoom). Never recorded in history.
    pub camera: Camera,
    /// Active tool and the style for new shapes.
    pub tools: ToolManager,
    /// Snap world points to the grid while drawing and moving.
    pub snap_to_grid: bool,
    history: History,
    selection: Option<ShapeId>,
    drag: Option<DragState>,
    pan: Option<PanState>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create a new session with an empty scene.
    pub fn new() -> Self {
        let mut editor = Self {
            document: Document::new(),
            camera: Camera::new(),
            tools: ToolManager::new(),
            snap_to_grid: false,
            history: History::new(),
            selection: None,
            drag: None,
            pan: None,
        };
        editor.history.commit(editor.document.snapshot());
        log::debug!("editor session started");
        editor
    }

    /// Route a pointer event from the host.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => self.pointer_down(position, button),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position, button } => self.pointer_up(position, button),
            PointerEvent::Scroll { position, delta } => self.scroll(position, delta),
        }
    }

    /// Route a key event from the host. Delete/Backspace remove the
    /// selected shape; S/L/R/C switch tools. Anything else is ignored.
    pub fn handle_key_event(&mut self, event: KeyEvent) {
        let KeyEvent::Pressed(key) = event else {
            return;
        };
        match key.as_str() {
            "Delete" | "Backspace" => {
                self.delete_selected();
            }
            _ => {
                if let Some(tool) = ToolKind::from_key(&key) {
                    self.set_tool(tool);
                }
            }
        }
    }

    /// Switch the active tool. An in-progress draw is finalized first;
    /// the selection is cleared.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.finalize_active_draw();
        self.tools.set_tool(tool);
        self.selection = None;
        log::debug!("tool switched to {tool:?}");
    }

    /// Set the stroke color applied to new shapes.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.tools.current_style.stroke_color = color;
    }

    /// Set the stroke width applied to new shapes. Non-positive or
    /// non-finite widths are ignored.
    pub fn set_stroke_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.tools.current_style.stroke_width = width;
        }
    }

    /// The currently selected shape, if any.
    pub fn selection(&self) -> Option<ShapeId> {
        self.selection
    }

    /// The selection outline: the selected shape's bounds expanded by a
    /// fixed margin, in world coordinates.
    pub fn selection_outline(&self) -> Option<Rect> {
        let id = self.selection?;
        self.document.get_shape(id).map(selection::outline_rect)
    }

    /// Cursor the host should show for the current mode.
    pub fn cursor(&self) -> CursorKind {
        if self.pan.is_some() {
            CursorKind::Grab
        } else if self.tools.current_tool.is_draw_tool() {
            CursorKind::Crosshair
        } else {
            CursorKind::Default
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step the scene back one history entry.
    /// Returns true if a snapshot was applied.
    pub fn undo(&mut self) -> bool {
        self.drop_gestures();
        if let Some(snapshot) = self.history.undo() {
            let snapshot = snapshot.clone();
            self.document.restore(&snapshot);
            self.selection = None;
            log::debug!("undo ({} shapes)", snapshot.shapes.len());
            true
        } else {
            false
        }
    }

    /// Step the scene forward one history entry.
    /// Returns true if a snapshot was applied.
    pub fn redo(&mut self) -> bool {
        self.drop_gestures();
        if let Some(snapshot) = self.history.redo() {
            let snapshot = snapshot.clone();
            self.document.restore(&snapshot);
            self.selection = None;
            log::debug!("redo ({} shapes)", snapshot.shapes.len());
            true
        } else {
            false
        }
    }

    /// Delete the selected shape. Returns true if a shape was removed.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.take() else {
            return false;
        };
        if self.document.remove_shape(id).is_none() {
            return false;
        }
        self.commit("delete");
        true
    }

    fn pointer_down(&mut self, position: Point, button: MouseButton) {
        match button {
            MouseButton::Right => {
                // Pan runs independently of the drawing tool, but never
                // concurrently with a draw or move gesture.
                if self.pan.is_none() && !self.tools.is_active() && self.drag.is_none() {
                    self.pan = Some(PanState { last: position });
                }
            }
            MouseButton::Left => self.left_down(position),
            MouseButton::Middle => {}
        }
    }

    fn left_down(&mut self, position: Point) {
        if self.pan.is_some() {
            return;
        }

        if self.tools.current_tool.is_draw_tool() {
            // A second pointer-down while a draw is in progress means the
            // previous gesture never saw its pointer-up: finalize it.
            self.finalize_active_draw();

            let world = self.to_world(position);
            if let Some(shape) = self.tools.begin(world) {
                self.document.add_shape(shape);
            }
            return;
        }

        // Select tool: pick the top-most shape under the (unsnapped)
        // pointer, or clear the selection on background.
        let raw_world = self.camera.screen_to_world(position);
        let tolerance = HIT_TOLERANCE / self.camera.zoom;
        match self.document.shape_at_point(raw_world, tolerance) {
            Some(id) => {
                self.selection = Some(id);
                if let Some(shape) = self.document.get_shape(id) {
                    self.drag = Some(DragState::new(id, self.to_world(position), shape.clone()));
                }
            }
            None => self.selection = None,
        }
    }

    fn pointer_move(&mut self, position: Point) {
        if let Some(pan) = &mut self.pan {
            let delta = position - pan.last;
            pan.last = position;
            self.camera.pan(delta);
            return;
        }

        if let ToolState::Active { start, shape } = self.tools.state {
            let world = self.to_world(position);
            if let Some(shape) = self.document.get_shape_mut(shape) {
                update_geometry(shape, start, world);
            }
            return;
        }

        if let Some(drag) = &self.drag {
            let world = self.to_world(position);
            let moved = drag.moved_shape(world);
            if let Some(shape) = self.document.get_shape_mut(drag.shape_id) {
                *shape = moved;
            }
            return;
        }

        // Move with no active gesture: hover, nothing to do.
    }

    fn pointer_up(&mut self, position: Point, button: MouseButton) {
        match button {
            MouseButton::Right => {
                self.pan = None;
            }
            MouseButton::Left => {
                if self.tools.is_active() {
                    self.pointer_move(position);
                    self.finalize_active_draw();
                } else if let Some(drag) = self.drag.take() {
                    let world = self.to_world(position);
                    let moved = drag.moved_shape(world);
                    if let Some(shape) = self.document.get_shape_mut(drag.shape_id) {
                        *shape = moved;
                    }
                    self.commit("move");
                }
            }
            MouseButton::Middle => {}
        }
    }

    fn scroll(&mut self, position: Point, delta: Vec2) {
        let factor = if delta.y > 0.0 {
            ZOOM_STEP_IN
        } else if delta.y < 0.0 {
            ZOOM_STEP_OUT
        } else {
            return;
        };
        self.camera.zoom_at(position, factor);
    }

    /// Map a screen point to (optionally grid-snapped) world coordinates.
    fn to_world(&self, position: Point) -> Point {
        let world = self.camera.screen_to_world(position);
        if self.snap_to_grid {
            snap_to_grid(world, GRID_SIZE)
        } else {
            world
        }
    }

    /// Commit the in-progress shape, if any.
    fn finalize_active_draw(&mut self) {
        if self.tools.end().is_some() {
            self.commit("draw");
        }
    }

    /// Abandon transient gesture state before history navigation, so a
    /// restored snapshot is not overwritten by a stale drag context.
    fn drop_gestures(&mut self) {
        self.drag = None;
        self.finalize_active_draw();
    }

    fn commit(&mut self, action: &str) {
        self.history.commit(self.document.snapshot());
        log::debug!("history snapshot after {action} ({} shapes)", self.document.len());
    }
}
