//! Scroll position of the surface inside its widget.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Maps widget-relative pointer positions to canvas coordinates.
///
/// Only scrolling is modelled; a surface is always drawn at 1:1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Canvas coordinate shown at the widget's top-left corner.
    pub origin: Vec2,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform from widget coordinates to canvas coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.origin)
    }

    /// Convert a widget point to canvas coordinates.
    pub fn to_canvas(&self, widget_point: Point) -> Point {
        self.transform() * widget_point
    }

    /// Convert a canvas point to widget coordinates.
    pub fn to_widget(&self, canvas_point: Point) -> Point {
        self.transform().inverse() * canvas_point
    }

    /// Scroll by a delta in canvas units.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.origin += delta;
    }

    pub fn scroll_to(&mut self, origin: Point) {
        self.origin = origin.to_vec2();
    }
}
