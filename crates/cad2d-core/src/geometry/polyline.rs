use crate::control_point::ControlPoint;
use crate::drawable::{Shape, ShapeBase};
use crate::error::{CadError, Result};
use crate::extents::Extents2D;
use crate::math::{distance_to_segment, Point2};
use crate::render::RenderContext;
use crate::transform::{Transform2D, TransformBy};

/// 顶点控制点名称前缀，如 "Point0"
const VERTEX_PREFIX: &str = "Point";

/// 多段线
#[derive(Debug, Clone)]
pub struct Polyline {
    base: ShapeBase,
    points: Vec<Point2>,
    closed: bool,
}

impl Polyline {
    pub fn new(points: impl IntoIterator<Item = Point2>, closed: bool) -> Self {
        Self {
            base: ShapeBase::new(),
            points: points.into_iter().collect(),
            closed,
        }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
        self.base.notify("Closed");
    }

    pub fn push_point(&mut self, point: Point2) {
        self.points.push(point);
        self.base.notify("Points");
    }

    pub fn set_point(&mut self, index: usize, point: Point2) -> Result<()> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(CadError::VertexOutOfRange { index, len })?;
        *slot = point;
        self.base.notify("Points");
        Ok(())
    }

    /// 线段数量（闭合时包含首尾连接段）
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// 依次返回每条线段的端点
    pub fn segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        (0..self.segment_count()).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// 总长度
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| (b - a).norm()).sum()
    }

    /// 点到多段线的最短距离；空多段线返回 `f64::MAX`
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        match self.points.as_slice() {
            [] => f64::MAX,
            [only] => (point - only).norm(),
            _ => self
                .segments()
                .map(|(a, b)| distance_to_segment(point, &a, &b))
                .fold(f64::MAX, f64::min),
        }
    }

    fn vertex_index(name: &str) -> Option<usize> {
        name.strip_prefix(VERTEX_PREFIX)?.parse().ok()
    }
}

impl Shape for Polyline {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "Polyline"
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        if !self.visible() {
            return;
        }
        ctx.draw_polyline(&self.points, self.closed, &self.outline(), &self.fill());
    }

    fn extents(&self) -> Extents2D {
        Extents2D::from_points(self.points.iter().copied())
    }

    fn contains(&self, point: &Point2, pick_tolerance: f64) -> bool {
        self.distance_to_point(point) <= pick_tolerance
    }

    fn transform_by(&mut self, transform: &Transform2D) {
        for p in &mut self.points {
            p.transform_by(transform);
        }
        self.base.notify("Points");
    }

    fn control_points(&self, handle_size: f64) -> Vec<ControlPoint> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| ControlPoint::point(format!("{VERTEX_PREFIX}{i}"), *p, handle_size))
            .collect()
    }

    fn set_control_point(&mut self, name: &str, position: Point2) -> Result<()> {
        match Self::vertex_index(name) {
            Some(index) => self.set_point(index, position),
            None => Err(CadError::UnknownControlPoint {
                shape: self.type_name(),
                name: name.to_string(),
            }),
        }
    }
}

/// 多边形：始终闭合的多段线
#[derive(Debug, Clone)]
pub struct Polygon {
    inner: Polyline,
}

impl Polygon {
    pub fn new(points: impl IntoIterator<Item = Point2>) -> Self {
        Self {
            inner: Polyline::new(points, true),
        }
    }

    pub fn points(&self) -> &[Point2] {
        self.inner.points()
    }

    pub fn closed(&self) -> bool {
        true
    }

    pub fn push_point(&mut self, point: Point2) {
        self.inner.push_point(point);
    }

    pub fn set_point(&mut self, index: usize, point: Point2) -> Result<()> {
        self.inner.set_point(index, point)
    }

    /// 周长
    pub fn perimeter(&self) -> f64 {
        self.inner.length()
    }

    /// 作为多段线查看
    pub fn as_polyline(&self) -> &Polyline {
        &self.inner
    }
}

impl Shape for Polygon {
    fn base(&self) -> &ShapeBase {
        self.inner.base()
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        self.inner.base_mut()
    }

    fn type_name(&self) -> &'static str {
        "Polygon"
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        self.inner.draw(ctx);
    }

    fn extents(&self) -> Extents2D {
        self.inner.extents()
    }

    fn contains(&self, point: &Point2, pick_tolerance: f64) -> bool {
        self.inner.contains(point, pick_tolerance)
    }

    fn transform_by(&mut self, transform: &Transform2D) {
        self.inner.transform_by(transform);
    }

    fn control_points(&self, handle_size: f64) -> Vec<ControlPoint> {
        self.inner.control_points(handle_size)
    }

    fn set_control_point(&mut self, name: &str, position: Point2) -> Result<()> {
        Polyline::vertex_index(name)
            .ok_or_else(|| CadError::UnknownControlPoint {
                shape: self.type_name(),
                name: name.to_string(),
            })
            .and_then(|index| self.inner.set_point(index, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON;
    use crate::properties::{Color, Fill};
    use crate::render::{DrawCommand, DrawList};

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(Polyline::new(square(), false).segment_count(), 3);
        assert_eq!(Polyline::new(square(), true).segment_count(), 4);
        assert_eq!(Polyline::new([Point2::origin()], true).segment_count(), 0);
    }

    #[test]
    fn test_length() {
        assert!((Polyline::new(square(), false).length() - 30.0).abs() < EPSILON);
        assert!((Polygon::new(square()).perimeter() - 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_contains_closing_segment() {
        let open = Polyline::new(square(), false);
        let closed = Polyline::new(square(), true);
        let on_closing = Point2::new(0.0, 5.0);

        assert!(!open.contains(&on_closing, 0.1));
        assert!(closed.contains(&on_closing, 0.1));
        // 内部点不在轮廓上
        assert!(!closed.contains(&Point2::new(5.0, 5.0), 0.1));
    }

    #[test]
    fn test_degenerate_polylines() {
        let empty = Polyline::new(Vec::new(), false);
        assert!(empty.extents().is_empty());
        assert!(!empty.contains(&Point2::origin(), 100.0));

        let single = Polyline::new([Point2::new(1.0, 1.0)], false);
        assert!(single.contains(&Point2::new(1.0, 1.5), 0.5));
    }

    #[test]
    fn test_polygon_is_always_closed() {
        let polygon = Polygon::new(square());
        assert!(polygon.closed());
        assert!(polygon.contains(&Point2::new(0.0, 5.0), 0.1));

        let mut list = DrawList::new();
        polygon.draw(&mut list);
        assert!(matches!(list.commands(), [DrawCommand::Polyline { closed: true, .. }]));
    }

    #[test]
    fn test_filled_polygon() {
        let mut polygon = Polygon::new(square());
        polygon.set_fill(Fill::Solid(Color::GREEN));

        let mut list = DrawList::new();
        polygon.draw(&mut list);
        match &list.commands()[0] {
            DrawCommand::Polyline { fill, .. } => assert_eq!(fill.color(), Some(Color::GREEN)),
            other => panic!("unexpected command {other:?}"),
        }

        polygon.set_visible(false);
        list.clear();
        polygon.draw(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_vertex_control_points() {
        let mut pl = Polyline::new(square(), false);
        let cps = pl.control_points(1.0);
        assert_eq!(cps.len(), 4);
        assert_eq!(cps[2].name, "Point2");

        pl.set_control_point("Point2", Point2::new(20.0, 20.0)).unwrap();
        assert_eq!(pl.points()[2], Point2::new(20.0, 20.0));

        assert!(matches!(
            pl.set_control_point("Point9", Point2::origin()),
            Err(CadError::VertexOutOfRange { index: 9, len: 4 })
        ));
        assert!(matches!(
            pl.set_control_point("Center", Point2::origin()),
            Err(CadError::UnknownControlPoint { .. })
        ));
    }

    #[test]
    fn test_transform() {
        let mut polygon = Polygon::new(square());
        polygon.transform_by(&Transform2D::translation(5.0, -5.0));
        let e = polygon.extents();
        assert_eq!(e.min(), Some(Point2::new(5.0, -5.0)));
        assert_eq!(e.max(), Some(Point2::new(15.0, 5.0)));
        assert!(polygon.has_changes());
    }
}
