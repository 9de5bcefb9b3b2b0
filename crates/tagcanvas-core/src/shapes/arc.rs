//! Arc shape: a slice of the ellipse inscribed in a box.

use super::{
    ShapeKind, ShapeStyle, ShapeTrait, point_to_polyline_dist, points_bounds, polyline_path,
};
use kurbo::{Affine, BezPath, Point, Rect, Shape as KurboShape};

/// Outline segments for a full turn; partial arcs use a share of these.
const SEGMENTS_PER_TURN: f64 = 64.0;

/// How the ends of an arc are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcStyle {
    /// Both ends joined to the center.
    #[default]
    PieSlice,
    /// Ends joined to each other.
    Chord,
    /// Just the curve, never filled.
    Arc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    /// Start angle in degrees, counter-clockwise from 3 o'clock.
    pub start: f64,
    /// Sweep in degrees, clamped to a full turn either way.
    pub extent: f64,
    pub arc_style: ArcStyle,
    pub style: ShapeStyle,
}

impl Arc {
    pub fn from_rect(
        rect: Rect,
        start: f64,
        extent: f64,
        arc_style: ArcStyle,
        style: ShapeStyle,
    ) -> Self {
        Self {
            center: rect.center(),
            radius_x: rect.width() / 2.0,
            radius_y: rect.height() / 2.0,
            start,
            extent: extent.clamp(-360.0, 360.0),
            arc_style,
            style,
        }
    }

    /// Points along the curve from `start` through `start + extent`.
    pub fn curve_points(&self) -> Vec<Point> {
        let segments = ((self.extent.abs() / 360.0) * SEGMENTS_PER_TURN).ceil().max(1.0) as usize;
        (0..=segments)
            .map(|i| {
                let angle = (self.start + self.extent * i as f64 / segments as f64).to_radians();
                // Screen y grows downwards, angles grow counter-clockwise
                Point::new(
                    self.center.x + self.radius_x * angle.cos(),
                    self.center.y - self.radius_y * angle.sin(),
                )
            })
            .collect()
    }

    fn oval(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }
}

impl ShapeTrait for Arc {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Arc
    }

    fn bounds(&self) -> Rect {
        points_bounds(&self.outline_points())
    }

    fn coords(&self) -> Vec<f64> {
        let oval = self.oval();
        vec![oval.x0, oval.y0, oval.x1, oval.y1]
    }

    fn outline_points(&self) -> Vec<Point> {
        let curve = self.curve_points();
        match self.arc_style {
            ArcStyle::PieSlice => {
                let mut points = Vec::with_capacity(curve.len() + 2);
                points.push(self.center);
                points.extend(curve);
                points.push(self.center);
                points
            }
            ArcStyle::Chord => {
                let mut points = curve;
                if let Some(first) = points.first().copied() {
                    points.push(first);
                }
                points
            }
            ArcStyle::Arc => curve,
        }
    }

    fn to_path(&self) -> BezPath {
        let closed = self.arc_style != ArcStyle::Arc;
        let mut points = self.outline_points();
        if closed {
            points.pop();
        }
        polyline_path(&points, closed)
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

    fn distance(&self, point: Point) -> f64 {
        let filled = self.arc_style != ArcStyle::Arc && self.style.fill.is_some();
        if filled && self.to_path().contains(point) {
            return 0.0;
        }
        let dist = point_to_polyline_dist(point, &self.outline_points());
        (dist - self.style.width / 2.0).max(0.0)
    }
}
