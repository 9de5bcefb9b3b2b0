//! Ellipse shape.

use super::{ShapeKind, ShapeStyle, ShapeTrait};
use kurbo::{Affine, BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape};
use std::f64::consts::TAU;

/// Segments used to approximate the outline for distance queries.
const OUTLINE_SEGMENTS: usize = 64;

/// An axis-aligned ellipse.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub style: ShapeStyle,
}

impl Ellipse {
    pub fn new(center: Point, radius_x: f64, radius_y: f64, style: ShapeStyle) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            style,
        }
    }

    pub fn circle(center: Point, radius: f64, style: ShapeStyle) -> Self {
        Self::new(center, radius, radius, style)
    }

    /// Create the ellipse inscribed in a bounding rectangle.
    pub fn from_rect(rect: Rect, style: ShapeStyle) -> Self {
        Self::new(rect.center(), rect.width() / 2.0, rect.height() / 2.0, style)
    }

    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::new(self.center, (self.radius_x, self.radius_y), 0.0)
    }
}

impl ShapeTrait for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }

    fn coords(&self) -> Vec<f64> {
        let b = self.bounds();
        vec![b.x0, b.y0, b.x1, b.y1]
    }

    fn outline_points(&self) -> Vec<Point> {
        if self.radius_x <= 0.0 && self.radius_y <= 0.0 {
            return vec![self.center];
        }
        (0..=OUTLINE_SEGMENTS)
            .map(|i| {
                let t = TAU * i as f64 / OUTLINE_SEGMENTS as f64;
                Point::new(
                    self.center.x + self.radius_x * t.cos(),
                    self.center.y + self.radius_y * t.sin(),
                )
            })
            .collect()
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn transform(&mut self, affine: Affine) {
        self.center = affine * self.center;
        let scale = affine.as_coeffs();
        self.radius_x *= scale[0].abs();
        self.radius_y *= scale[3].abs();
    }
}
