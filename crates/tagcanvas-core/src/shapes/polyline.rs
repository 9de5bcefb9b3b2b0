//! Polyline shape.

use super::{ShapeKind, ShapeStyle, ShapeTrait, points_bounds, polyline_path};
use kurbo::{Affine, BezPath, Point, Rect};

/// A line segment or an open chain of segments.
///
/// The stroke color lives in `style.fill`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub style: ShapeStyle,
}

impl Polyline {
    pub fn new(points: Vec<Point>, style: ShapeStyle) -> Self {
        Self { points, style }
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Total length of all segments.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

impl ShapeTrait for Polyline {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polyline
    }

    fn bounds(&self) -> Rect {
        points_bounds(&self.points)
    }

    fn coords(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    fn outline_points(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn to_path(&self) -> BezPath {
        polyline_path(&self.points, false)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn transform(&mut self, affine: Affine) {
        for p in &mut self.points {
            *p = affine * *p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Paint;

    fn line(points: Vec<Point>) -> Polyline {
        Polyline::new(
            points,
            ShapeStyle {
                outline: None,
                fill: Some(Paint::parse("black").unwrap()),
                width: 2.0,
            },
        )
    }

    #[test]
    fn test_length() {
        let l = line(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 10.0)]);
        assert!((l.length() - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_on_line() {
        let l = line(vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        assert!(l.hit_test(Point::new(50.0, 0.0), 0.0));
        assert!(l.hit_test(Point::new(50.0, 2.0), 1.0));
        assert!(!l.hit_test(Point::new(50.0, 20.0), 5.0));
    }

    #[test]
    fn test_polyline_is_never_filled() {
        // The stroke color sits in `fill`, but a polyline has no interior
        let l = line(vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 100.0)]);
        assert!(!l.hit_test(Point::new(80.0, 20.0), 1.0));
    }

    #[test]
    fn test_coords_and_bounds() {
        let l = line(vec![Point::new(10.0, 20.0), Point::new(50.0, 80.0)]);
        assert_eq!(l.coords(), vec![10.0, 20.0, 50.0, 80.0]);
        let bounds = l.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 80.0).abs() < f64::EPSILON);
    }
}
