//! Drawing surface: turns shape requests into scene elements.

use crate::color::Paint;
use crate::config::SurfaceConfig;
use crate::error::{CanvasError, CanvasResult};
use crate::scene::{ElementId, Scene};
use crate::shapes::{ArcParams, ArcStyle, Geometry, Shape, ShapeKind, ShapeStyle};
use crate::tags::{Tag, TagOrId, TagSet};
use kurbo::{Point, Rect, Vec2};

/// Extra per-kind options of a draw request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeOptions {
    /// Interior color of a closed shape.
    pub fill: Option<String>,
    /// Never valid: the request color already is the outline of a closed
    /// shape, and polylines have no outline.
    pub outline: Option<String>,
    /// Arc start angle in degrees.
    pub start: Option<f64>,
    /// Arc sweep in degrees.
    pub extent: Option<f64>,
    pub arc_style: Option<ArcStyle>,
}

impl ShapeOptions {
    fn arc_params(&self) -> ArcParams {
        let defaults = ArcParams::default();
        ArcParams {
            start: self.start.unwrap_or(defaults.start),
            extent: self.extent.unwrap_or(defaults.extent),
            style: self.arc_style.unwrap_or(defaults.style),
        }
    }
}

/// Color, width and tags of a draw request.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    pub color: String,
    pub width: f64,
    /// `None` synthesizes tags from the kind and color.
    pub tags: Option<TagSet>,
    pub options: ShapeOptions,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self::new(SurfaceConfig::DEFAULT_COLOR)
    }
}

impl DrawStyle {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            width: SurfaceConfig::DEFAULT_WIDTH,
            tags: None,
            options: ShapeOptions::default(),
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.options.fill = Some(fill.into());
        self
    }

    pub fn with_options(mut self, options: ShapeOptions) -> Self {
        self.options = options;
        self
    }
}

/// Tags given to a shape drawn without explicit tags.
pub fn default_tags(kind: ShapeKind, color: &Paint) -> CanvasResult<TagSet> {
    if kind.tagged_by_kind() {
        TagSet::from_names(["graph", color.name(), kind.as_str()])
    } else {
        TagSet::from_names(["graph", color.name()])
    }
}

/// Route the request color to the style slot its kind paints with.
fn resolve_style(kind: ShapeKind, style: &DrawStyle) -> CanvasResult<(ShapeStyle, Paint)> {
    let color = Paint::parse(&style.color)?;
    if style.options.outline.is_some() {
        return Err(CanvasError::ConflictingStyleKey {
            kind: kind.as_str(),
            key: "outline",
        });
    }
    let resolved = if kind.is_closed() {
        let fill = style.options.fill.as_deref().map(Paint::parse).transpose()?;
        ShapeStyle {
            outline: Some(color.clone()),
            fill,
            width: style.width,
        }
    } else {
        if style.options.fill.is_some() {
            return Err(CanvasError::ConflictingStyleKey {
                kind: kind.as_str(),
                key: "fill",
            });
        }
        ShapeStyle {
            outline: None,
            fill: Some(color.clone()),
            width: style.width,
        }
    };
    Ok((resolved, color))
}

fn square_box(kind: ShapeKind, center: Point, radius: f64) -> CanvasResult<Geometry> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(CanvasError::InvalidGeometry {
            kind: kind.as_str(),
            reason: format!("radius must be a non-negative number, got {radius}"),
        });
    }
    Ok(Geometry::from_rect(Rect::from_center_size(
        center,
        (2.0 * radius, 2.0 * radius),
    )))
}

/// A scene plus the shape-creation API.
#[derive(Debug, Clone, Default)]
pub struct DrawingSurface {
    scene: Scene,
    config: SurfaceConfig,
}

impl DrawingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SurfaceConfig) -> Self {
        Self {
            scene: Scene::new(),
            config,
        }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// A draw style using the configured default color and width.
    pub fn default_style(&self) -> DrawStyle {
        DrawStyle::new(self.config.default_color.clone()).with_width(self.config.default_width)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Draw one primitive and return its handle.
    ///
    /// Polylines are stroked with `style.color`; closed shapes are outlined
    /// with it and may carry an interior `options.fill`. Nothing is added to
    /// the scene if the request is rejected.
    pub fn draw_shape(
        &mut self,
        kind: ShapeKind,
        geometry: Geometry,
        style: &DrawStyle,
    ) -> CanvasResult<ElementId> {
        let (shape_style, color) = resolve_style(kind, style)?;
        let tags = match &style.tags {
            Some(tags) => tags.clone(),
            None => default_tags(kind, &color)?,
        };
        let shape = Shape::build(kind, &geometry, shape_style, style.options.arc_params())?;
        Ok(self.scene.add(shape, tags))
    }

    /// Draw a circle of `radius` around `center`.
    pub fn draw_circle(
        &mut self,
        center: Point,
        radius: f64,
        style: &DrawStyle,
    ) -> CanvasResult<ElementId> {
        let geometry = square_box(ShapeKind::Ellipse, center, radius)?;
        self.draw_shape(ShapeKind::Ellipse, geometry, style)
    }

    /// Draw an axis-aligned square reaching `radius` from `center` on each side.
    pub fn draw_square(
        &mut self,
        center: Point,
        radius: f64,
        style: &DrawStyle,
    ) -> CanvasResult<ElementId> {
        let geometry = square_box(ShapeKind::Rectangle, center, radius)?;
        self.draw_shape(ShapeKind::Rectangle, geometry, style)
    }

    pub fn draw_circle_point(&mut self, position: Point, style: &DrawStyle) -> CanvasResult<ElementId> {
        self.draw_circle(position, 0.0, style)
    }

    pub fn draw_square_point(&mut self, position: Point, style: &DrawStyle) -> CanvasResult<ElementId> {
        self.draw_square(position, 0.0, style)
    }

    pub fn coords(&self, id: ElementId) -> Option<Vec<f64>> {
        self.scene.coords(id)
    }

    pub fn bbox(&self, spec: &TagOrId) -> Option<Rect> {
        self.scene.bbox(spec)
    }

    pub fn gettags(&self, id: ElementId) -> Option<&TagSet> {
        self.scene.gettags(id)
    }

    pub fn find_withtag(&self, spec: &TagOrId) -> Vec<ElementId> {
        self.scene.find_withtag(spec)
    }

    /// Nearest element to `point`, using the configured halo.
    pub fn find_closest(&self, point: Point) -> Option<ElementId> {
        self.scene.find_closest(point, self.config.close_enough)
    }

    pub fn addtag_withtag(&mut self, tag: &Tag, spec: &TagOrId) -> usize {
        self.scene.addtag_withtag(tag, spec)
    }

    pub fn dtag(&mut self, spec: &TagOrId, tag: &Tag) -> usize {
        self.scene.dtag(spec, tag)
    }

    pub fn move_items(&mut self, spec: &TagOrId, delta: Vec2) -> usize {
        self.scene.move_items(spec, delta)
    }

    pub fn delete(&mut self, spec: &TagOrId) -> usize {
        self.scene.delete(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;

    fn tag_names(surface: &DrawingSurface, id: ElementId) -> String {
        surface.gettags(id).unwrap().to_string()
    }

    #[test]
    fn test_circle_bounds() {
        let mut surface = DrawingSurface::new();
        let id = surface
            .draw_circle(Point::new(50.0, 40.0), 10.0, &DrawStyle::default())
            .unwrap();
        assert_eq!(surface.coords(id).unwrap(), vec![40.0, 30.0, 60.0, 50.0]);
        assert!(matches!(surface.scene().get(id).unwrap().shape, Shape::Ellipse(_)));
    }

    #[test]
    fn test_square_and_points() {
        let mut surface = DrawingSurface::new();
        let style = DrawStyle::new("red");
        let square = surface.draw_square(Point::new(0.0, 0.0), 5.0, &style).unwrap();
        assert_eq!(surface.coords(square).unwrap(), vec![-5.0, -5.0, 5.0, 5.0]);

        let dot = surface.draw_circle_point(Point::new(7.0, 8.0), &style).unwrap();
        assert_eq!(surface.coords(dot).unwrap(), vec![7.0, 8.0, 7.0, 8.0]);
        let pixel = surface.draw_square_point(Point::new(1.0, 2.0), &style).unwrap();
        assert!(matches!(surface.scene().get(pixel).unwrap().shape, Shape::Rectangle(_)));
        assert_eq!(surface.coords(pixel).unwrap(), vec![1.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_negative_radius_rejected() {
        let mut surface = DrawingSurface::new();
        let result = surface.draw_circle(Point::ZERO, -1.0, &DrawStyle::default());
        assert!(matches!(result, Err(CanvasError::InvalidGeometry { .. })));
        assert!(surface.scene().is_empty());
    }

    #[test]
    fn test_default_tags() {
        let mut surface = DrawingSurface::new();
        let style = DrawStyle::new("blue");
        let oval = surface.draw_circle(Point::ZERO, 3.0, &style).unwrap();
        assert_eq!(tag_names(&surface, oval), "graph blue oval");

        let line = surface
            .draw_shape(ShapeKind::Polyline, Geometry::Bounds(0.0, 0.0, 5.0, 5.0), &style)
            .unwrap();
        assert_eq!(tag_names(&surface, line), "graph blue line");

        let polygon = surface
            .draw_shape(
                ShapeKind::Polygon,
                Geometry::Points(vec![Point::ZERO, Point::new(4.0, 0.0), Point::new(0.0, 4.0)]),
                &style,
            )
            .unwrap();
        assert_eq!(tag_names(&surface, polygon), "graph blue");
    }

    #[test]
    fn test_explicit_tags_win() {
        let mut surface = DrawingSurface::new();
        let style = DrawStyle::new("blue").with_tags(TagSet::parse(" test g ").unwrap());
        let id = surface.draw_square(Point::ZERO, 1.0, &style).unwrap();
        assert_eq!(tag_names(&surface, id), "test g");
        assert_eq!(surface.find_withtag(&TagOrId::tag("g").unwrap()), vec![id]);
    }

    #[test]
    fn test_polyline_strokes_with_fill() {
        let mut surface = DrawingSurface::new();
        let id = surface
            .draw_shape(
                ShapeKind::Polyline,
                Geometry::Points(vec![Point::ZERO, Point::new(10.0, 0.0), Point::new(10.0, 10.0)]),
                &DrawStyle::new("black").with_width(3.0),
            )
            .unwrap();
        let style = surface.scene().get(id).unwrap().shape.style().clone();
        assert!(style.outline.is_none());
        assert_eq!(style.fill.unwrap().name(), "black");
        assert!((style.width - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_style_keys_not_conflated() {
        let mut surface = DrawingSurface::new();
        let segment = Geometry::Bounds(0.0, 0.0, 5.0, 5.0);

        let filled_line = DrawStyle::new("blue").with_fill("red");
        assert!(matches!(
            surface.draw_shape(ShapeKind::Polyline, segment.clone(), &filled_line),
            Err(CanvasError::ConflictingStyleKey { key: "fill", .. })
        ));

        let outlined = DrawStyle::new("blue").with_options(ShapeOptions {
            outline: Some("red".into()),
            ..ShapeOptions::default()
        });
        assert!(matches!(
            surface.draw_shape(ShapeKind::Rectangle, segment.clone(), &outlined),
            Err(CanvasError::ConflictingStyleKey { key: "outline", .. })
        ));
        assert!(surface.draw_shape(ShapeKind::Polyline, segment.clone(), &outlined).is_err());

        // Closed shapes take an interior fill
        let id = surface
            .draw_shape(ShapeKind::Rectangle, segment, &filled_line)
            .unwrap();
        let style = surface.scene().get(id).unwrap().shape.style().clone();
        assert_eq!(style.outline.unwrap().name(), "blue");
        assert_eq!(style.fill.unwrap().name(), "red");
        assert_eq!(surface.scene().len(), 1);
    }

    #[test]
    fn test_arc_options() {
        let mut surface = DrawingSurface::new();
        let style = DrawStyle::new("blue").with_options(ShapeOptions {
            start: Some(45.0),
            extent: Some(180.0),
            arc_style: Some(ArcStyle::Chord),
            ..ShapeOptions::default()
        });
        let id = surface
            .draw_shape(ShapeKind::Arc, Geometry::Bounds(0.0, 0.0, 20.0, 20.0), &style)
            .unwrap();
        let Shape::Arc(arc) = &surface.scene().get(id).unwrap().shape else {
            panic!("expected an arc");
        };
        assert!((arc.start - 45.0).abs() < f64::EPSILON);
        assert!((arc.extent - 180.0).abs() < f64::EPSILON);
        assert_eq!(arc.arc_style, ArcStyle::Chord);
        assert_eq!(tag_names(&surface, id), "graph blue arc");
    }

    #[test]
    fn test_non_finite_arc_angles_rejected() {
        let mut surface = DrawingSurface::new();
        let bounds = Geometry::Bounds(900.0, 900.0, 1000.0, 1000.0);
        let nan_extent = DrawStyle::new("blue").with_options(ShapeOptions {
            extent: Some(f64::NAN),
            ..ShapeOptions::default()
        });
        assert!(matches!(
            surface.draw_shape(ShapeKind::Arc, bounds.clone(), &nan_extent),
            Err(CanvasError::InvalidGeometry { .. })
        ));
        let infinite_start = DrawStyle::new("blue").with_options(ShapeOptions {
            start: Some(f64::INFINITY),
            ..ShapeOptions::default()
        });
        assert!(surface.draw_shape(ShapeKind::Arc, bounds, &infinite_start).is_err());
        assert!(surface.scene().is_empty());
    }

    #[test]
    fn test_extended_color_names() {
        let mut surface = DrawingSurface::new();
        let id = surface
            .draw_square(Point::ZERO, 2.0, &DrawStyle::new("darkgreen").with_fill("LightSteelBlue"))
            .unwrap();
        assert_eq!(tag_names(&surface, id), "graph darkgreen rectangle");
        let style = surface.scene().get(id).unwrap().shape.style().clone();
        assert_eq!(style.outline.unwrap().rgba(), crate::color::Rgba::opaque(0, 100, 0));
    }

    #[test]
    fn test_unknown_kind_and_bad_color() {
        assert!("star".parse::<ShapeKind>().is_err());
        let mut surface = DrawingSurface::new();
        let result = surface.draw_circle(Point::ZERO, 1.0, &DrawStyle::new("not-a-color"));
        assert!(matches!(result, Err(CanvasError::InvalidColor(_))));
    }

    #[test]
    fn test_default_style_follows_config() {
        let config = SurfaceConfig {
            default_color: "green".into(),
            default_width: 4.0,
            ..SurfaceConfig::default()
        };
        let surface = DrawingSurface::with_config(config);
        let style = surface.default_style();
        assert_eq!(style.color, "green");
        assert!((style.width - 4.0).abs() < f64::EPSILON);
    }
}
