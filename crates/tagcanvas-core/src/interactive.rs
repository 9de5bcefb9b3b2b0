//! Click-to-select and drag-to-move on top of a drawing surface.
//!
//! The host UI forwards pointer and key events; this module keeps the drag
//! state, tags the elements a drag should carry and moves them on release.
//!
//! ```text
//! Idle --down--> Pressed --move--> Dragging --up--> Idle
//!                   |                                ^
//!                   +--------------up----------------+
//! ```

use crate::config::{Command, SurfaceConfig};
use crate::drag::DragState;
use crate::error::CanvasResult;
use crate::input::{KeyEvent, MouseButton, PointerEvent};
use crate::scene::ElementId;
use crate::surface::DrawingSurface;
use crate::tags::{Tag, TagOrId};
use crate::viewport::Viewport;
use kurbo::{Point, Vec2};
use std::fmt;

/// Pointer shape the host should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Arrow,
    /// Shown while pressing on an element.
    Target,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::Arrow => f.write_str("arrow"),
            Cursor::Target => f.write_str("target"),
        }
    }
}

/// A drawing surface driven by pointer and keyboard input.
#[derive(Debug, Clone)]
pub struct InteractiveSurface {
    surface: DrawingSurface,
    drag: DragState,
    viewport: Viewport,
    cursor: Cursor,
    selection_tag: Tag,
    /// Left button held; the element under the pointer is frozen meanwhile.
    pressed: bool,
    /// Last pointer position in canvas coordinates.
    pointer: Option<Point>,
}

impl Default for InteractiveSurface {
    fn default() -> Self {
        Self::from_parts(
            DrawingSurface::new(),
            Tag::from_static(SurfaceConfig::DEFAULT_SELECTION_TAG),
        )
    }
}

impl InteractiveSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a surface from a configuration. Fails if the configured
    /// selection tag is not a valid tag.
    pub fn with_config(config: SurfaceConfig) -> CanvasResult<Self> {
        let selection_tag = config.selection_tag()?;
        Ok(Self::from_parts(DrawingSurface::with_config(config), selection_tag))
    }

    fn from_parts(surface: DrawingSurface, selection_tag: Tag) -> Self {
        Self {
            surface,
            drag: DragState::empty(),
            viewport: Viewport::new(),
            cursor: Cursor::Arrow,
            selection_tag,
            pressed: false,
            pointer: None,
        }
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut DrawingSurface {
        &mut self.surface
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn selection_tag(&self) -> &Tag {
        &self.selection_tag
    }

    /// Elements a release would move, back to front.
    pub fn selected(&self) -> Vec<ElementId> {
        self.surface.find_withtag(&TagOrId::Tag(self.selection_tag.clone()))
    }

    /// Drag vector as `[x0, y0, x1, y1]`, for the host's status line.
    pub fn status_text(&self) -> String {
        self.drag.to_string()
    }

    /// Element closest to the last pointer position.
    pub fn closest_to_pointer(&self) -> Option<ElementId> {
        self.surface.find_closest(self.pointer?)
    }

    fn close_enough(&self) -> f64 {
        self.surface.config().close_enough
    }

    fn refresh_current(&mut self, point: Point) {
        let close_enough = self.close_enough();
        self.surface.scene_mut().update_current(point, close_enough);
    }

    /// Dispatch a pointer event. Only the left button selects and drags.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.on_pointer_down(position),
            PointerEvent::Up {
                position,
                button: MouseButton::Left,
            } => {
                self.on_pointer_up(position);
            }
            PointerEvent::Move { position } => self.on_pointer_move(position),
            PointerEvent::Down { button, .. } | PointerEvent::Up { button, .. } => {
                let position = event.position();
                log::trace!("Ignoring {:?} button at ({}, {})", button, position.x, position.y);
            }
        }
    }

    /// Press: start a drag and select the element under the pointer.
    pub fn on_pointer_down(&mut self, widget_position: Point) {
        let point = self.viewport.to_canvas(widget_position);
        self.pointer = Some(point);
        self.refresh_current(point);
        self.pressed = true;
        self.begin_selection(point, &TagOrId::Current);
    }

    /// Motion: track the pointer.
    pub fn on_pointer_move(&mut self, widget_position: Point) {
        let point = self.viewport.to_canvas(widget_position);
        self.pointer = Some(point);
        self.drag.update(point);
        if !self.pressed {
            self.refresh_current(point);
        }
        log::trace!("Pointer at ({}, {})", point.x, point.y);
    }

    /// Release: move the selection by the drag vector and drop the
    /// selection. Returns the displacement that was applied.
    pub fn on_pointer_up(&mut self, widget_position: Point) -> Vec2 {
        let point = self.viewport.to_canvas(widget_position);
        self.pointer = Some(point);
        if self.drag.is_started() {
            self.drag.update(point);
        }
        let delta = self.drag.displacement().unwrap_or(Vec2::ZERO);
        let spec = TagOrId::Tag(self.selection_tag.clone());
        self.surface.move_items(&spec, delta);
        self.cancel_selection();
        self.drag.reset();
        self.pressed = false;
        self.refresh_current(point);
        delta
    }

    /// Dispatch a key press through the configured bindings.
    /// Returns the command that ran, if any.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> Option<Command> {
        let Some(command) = self.surface.config().key_bindings.resolve(event) else {
            log::trace!("No binding for {:?}", event);
            return None;
        };
        match command {
            Command::ClearAll => {
                self.clear_all();
            }
            Command::DeleteCurrent => {
                self.delete_current();
            }
            Command::SelectAll => self.select_all(),
        }
        Some(command)
    }

    /// Delete every element.
    pub fn clear_all(&mut self) -> usize {
        self.surface.delete(&TagOrId::All)
    }

    /// Delete the element under the pointer, leaving the rest of any
    /// selection alone.
    pub fn delete_current(&mut self) -> usize {
        self.surface.delete(&TagOrId::Current)
    }

    /// Select every element, anchoring the drag at the pointer.
    pub fn select_all(&mut self) {
        match self.pointer {
            Some(point) => self.begin_selection(point, &TagOrId::All),
            None => {
                self.refresh_cursor();
                let tag = self.selection_tag.clone();
                self.surface.addtag_withtag(&tag, &TagOrId::All);
            }
        }
    }

    /// `Target` over an element, `Arrow` elsewhere.
    fn refresh_cursor(&mut self) {
        self.cursor = if self.surface.scene().current().is_some() {
            Cursor::Target
        } else {
            Cursor::Arrow
        };
    }

    fn begin_selection(&mut self, point: Point, spec: &TagOrId) {
        self.drag.start(point);
        self.refresh_cursor();
        let tag = self.selection_tag.clone();
        let added = self.surface.addtag_withtag(&tag, spec);
        log::debug!(
            "Selection started at ({}, {}), {} element(s) newly selected",
            point.x,
            point.y,
            added
        );
    }

    fn cancel_selection(&mut self) {
        let tag = self.selection_tag.clone();
        self.surface.dtag(&TagOrId::Tag(tag.clone()), &tag);
        self.cursor = Cursor::Arrow;
    }
}
