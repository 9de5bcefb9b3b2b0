//! Polygon shape.

use super::{ShapeKind, ShapeStyle, ShapeTrait, points_bounds, polyline_path};
use kurbo::{Affine, BezPath, Point, Rect};

/// A closed polygon through three or more vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
    pub style: ShapeStyle,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>, style: ShapeStyle) -> Self {
        Self { vertices, style }
    }
}

impl ShapeTrait for Polygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn bounds(&self) -> Rect {
        points_bounds(&self.vertices)
    }

    fn coords(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    fn outline_points(&self) -> Vec<Point> {
        let mut points = self.vertices.clone();
        if let Some(first) = self.vertices.first() {
            points.push(*first);
        }
        points
    }

    fn to_path(&self) -> BezPath {
        polyline_path(&self.vertices, true)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn transform(&mut self, affine: Affine) {
        for p in &mut self.vertices {
            *p = affine * *p;
        }
    }
}
