//! Shape definitions for the drawing surface.

mod arc;
mod ellipse;
mod polygon;
mod polyline;
mod rectangle;

pub use arc::{Arc, ArcStyle};
pub use ellipse::Ellipse;
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use rectangle::Rectangle;

use crate::color::Paint;
use crate::error::{CanvasError, CanvasResult};
use kurbo::{Affine, BezPath, Point, Rect, Shape as KurboShape};
use std::fmt;
use std::str::FromStr;

/// The primitive a draw request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Polyline,
    Arc,
    Polygon,
}

impl ShapeKind {
    /// Name used in default tags and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "oval",
            ShapeKind::Polyline => "line",
            ShapeKind::Arc => "arc",
            ShapeKind::Polygon => "polygon",
        }
    }

    /// Closed shapes take an outline color, polylines a stroke ("fill") color.
    pub fn is_closed(&self) -> bool {
        !matches!(self, ShapeKind::Polyline)
    }

    /// Whether the kind name is part of the tags synthesized for it.
    pub fn tagged_by_kind(&self) -> bool {
        !matches!(self, ShapeKind::Polygon)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "oval" | "ellipse" => Ok(ShapeKind::Ellipse),
            "line" | "polyline" => Ok(ShapeKind::Polyline),
            "arc" => Ok(ShapeKind::Arc),
            "polygon" => Ok(ShapeKind::Polygon),
            other => Err(CanvasError::UnknownShapeKind(other.to_string())),
        }
    }
}

/// Where a shape goes.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Two opposite corners, `(x0, y0, x1, y1)`.
    Bounds(f64, f64, f64, f64),
    /// A point sequence for polylines and polygons.
    Points(Vec<Point>),
}

impl Geometry {
    pub fn from_rect(rect: Rect) -> Self {
        Geometry::Bounds(rect.x0, rect.y0, rect.x1, rect.y1)
    }

    /// Interpret the geometry as a box given by two corners.
    fn corners(&self, kind: ShapeKind) -> CanvasResult<(Point, Point)> {
        match self {
            Geometry::Bounds(x0, y0, x1, y1) => Ok((Point::new(*x0, *y0), Point::new(*x1, *y1))),
            Geometry::Points(points) if points.len() == 2 => Ok((points[0], points[1])),
            Geometry::Points(points) => Err(invalid_geometry(
                kind,
                format!("expected 2 corner points, got {}", points.len()),
            )),
        }
    }

    /// Interpret the geometry as a point sequence of at least `min` points.
    fn points(&self, kind: ShapeKind, min: usize) -> CanvasResult<Vec<Point>> {
        let points = match self {
            Geometry::Bounds(x0, y0, x1, y1) => vec![Point::new(*x0, *y0), Point::new(*x1, *y1)],
            Geometry::Points(points) => points.clone(),
        };
        if points.len() < min {
            return Err(invalid_geometry(
                kind,
                format!("expected at least {min} points, got {}", points.len()),
            ));
        }
        Ok(points)
    }

    fn is_finite(&self) -> bool {
        match self {
            Geometry::Bounds(x0, y0, x1, y1) => [x0, y0, x1, y1].iter().all(|v| v.is_finite()),
            Geometry::Points(points) => points.iter().all(|p| p.is_finite()),
        }
    }
}

fn invalid_geometry(kind: ShapeKind, reason: impl Into<String>) -> CanvasError {
    CanvasError::InvalidGeometry {
        kind: kind.as_str(),
        reason: reason.into(),
    }
}

/// Resolved paint of a drawn element.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    /// Outline color of a closed shape. Polylines have none.
    pub outline: Option<Paint>,
    /// Interior of a closed shape, or the stroke of a polyline.
    pub fill: Option<Paint>,
    /// Stroke width.
    pub width: f64,
}

impl ShapeStyle {
    /// The color that draws the shape's edge.
    pub fn stroke(&self) -> Option<&Paint> {
        self.outline.as_ref().or(self.fill.as_ref())
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = kurbo::Vec2::new(b.x - a.x, b.y - a.y);
    let pv = kurbo::Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Minimum distance from a point to a polyline. A single point counts as a
/// degenerate polyline.
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    if let [only] = points {
        return point.distance(*only);
    }
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Bounding box of a point sequence.
pub(crate) fn points_bounds(points: &[Point]) -> Rect {
    let (min_x, max_x) = points.iter().fold((f64::MAX, f64::MIN), |(mn, mx), p| {
        (mn.min(p.x), mx.max(p.x))
    });
    let (min_y, max_y) = points.iter().fold((f64::MAX, f64::MIN), |(mn, mx), p| {
        (mn.min(p.y), mx.max(p.y))
    });
    Rect::new(min_x, min_y, max_x, max_y)
}

/// Build a path through `points`, closing it when asked.
pub(crate) fn polyline_path(points: &[Point], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    if closed {
        path.close_path();
    }
    path
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    fn kind(&self) -> ShapeKind;

    /// Get the bounding box in canvas coordinates.
    fn bounds(&self) -> Rect;

    /// Flat coordinate list, `[x0, y0, x1, y1, ...]`.
    fn coords(&self) -> Vec<f64>;

    /// The drawn edge as a point sequence. Closed shapes repeat the first
    /// point at the end.
    fn outline_points(&self) -> Vec<Point>;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    fn style(&self) -> &ShapeStyle;

    fn style_mut(&mut self) -> &mut ShapeStyle;

    /// Apply a transform to this shape.
    fn transform(&mut self, affine: Affine);

    /// Distance from `point` to the painted part of the shape.
    ///
    /// Unfilled closed shapes only paint their outline, so the inside is
    /// not a hit.
    fn distance(&self, point: Point) -> f64 {
        let style = self.style();
        if self.kind().is_closed() && style.fill.is_some() && self.to_path().contains(point) {
            return 0.0;
        }
        let dist = point_to_polyline_dist(point, &self.outline_points());
        (dist - style.width / 2.0).max(0.0)
    }

    /// Check if a point hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.distance(point) <= tolerance
    }
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Polyline(Polyline),
    Arc(Arc),
    Polygon(Polygon),
}

impl Shape {
    /// Build a shape of `kind` from a geometry request.
    pub fn build(
        kind: ShapeKind,
        geometry: &Geometry,
        style: ShapeStyle,
        arc: ArcParams,
    ) -> CanvasResult<Self> {
        if !geometry.is_finite() {
            return Err(invalid_geometry(kind, "coordinates must be finite"));
        }
        if !style.width.is_finite() || style.width < 0.0 {
            return Err(invalid_geometry(
                kind,
                format!("width must be a non-negative number, got {}", style.width),
            ));
        }
        let shape = match kind {
            ShapeKind::Rectangle => {
                let (p0, p1) = geometry.corners(kind)?;
                Shape::Rectangle(Rectangle::from_corners(p0, p1, style))
            }
            ShapeKind::Ellipse => {
                let (p0, p1) = geometry.corners(kind)?;
                Shape::Ellipse(Ellipse::from_rect(Rect::from_points(p0, p1), style))
            }
            ShapeKind::Arc => {
                if !arc.start.is_finite() || !arc.extent.is_finite() {
                    return Err(invalid_geometry(
                        kind,
                        format!("angles must be finite, got start {} extent {}", arc.start, arc.extent),
                    ));
                }
                let (p0, p1) = geometry.corners(kind)?;
                Shape::Arc(Arc::from_rect(
                    Rect::from_points(p0, p1),
                    arc.start,
                    arc.extent,
                    arc.style,
                    style,
                ))
            }
            ShapeKind::Polyline => Shape::Polyline(Polyline::new(geometry.points(kind, 2)?, style)),
            ShapeKind::Polygon => Shape::Polygon(Polygon::new(geometry.points(kind, 3)?, style)),
        };
        Ok(shape)
    }

    fn as_trait(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Rectangle(s) => s,
            Shape::Ellipse(s) => s,
            Shape::Polyline(s) => s,
            Shape::Arc(s) => s,
            Shape::Polygon(s) => s,
        }
    }

    fn as_trait_mut(&mut self) -> &mut dyn ShapeTrait {
        match self {
            Shape::Rectangle(s) => s,
            Shape::Ellipse(s) => s,
            Shape::Polyline(s) => s,
            Shape::Arc(s) => s,
            Shape::Polygon(s) => s,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.as_trait().kind()
    }

    pub fn bounds(&self) -> Rect {
        self.as_trait().bounds()
    }

    pub fn coords(&self) -> Vec<f64> {
        self.as_trait().coords()
    }

    pub fn to_path(&self) -> BezPath {
        self.as_trait().to_path()
    }

    pub fn style(&self) -> &ShapeStyle {
        self.as_trait().style()
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        self.as_trait_mut().style_mut()
    }

    pub fn distance(&self, point: Point) -> f64 {
        self.as_trait().distance(point)
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.as_trait().hit_test(point, tolerance)
    }

    pub fn transform(&mut self, affine: Affine) {
        self.as_trait_mut().transform(affine)
    }

    /// Test if this shape's bounds overlap a rectangle.
    pub fn intersects_rect(&self, rect: Rect) -> bool {
        let bounds = self.bounds();
        bounds.x0 <= rect.x1 && rect.x0 <= bounds.x1 && bounds.y0 <= rect.y1 && rect.y0 <= bounds.y1
    }
}

/// Arc parameters; ignored by every other kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    /// Start angle in degrees, counter-clockwise from 3 o'clock.
    pub start: f64,
    /// Sweep in degrees.
    pub extent: f64,
    pub style: ArcStyle,
}

impl Default for ArcParams {
    fn default() -> Self {
        Self {
            start: 0.0,
            extent: 90.0,
            style: ArcStyle::default(),
        }
    }
}
