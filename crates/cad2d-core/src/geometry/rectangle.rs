use crate::control_point::ControlPoint;
use crate::drawable::{Shape, ShapeBase};
use crate::error::{CadError, Result};
use crate::extents::Extents2D;
use crate::geometry::Polyline;
use crate::math::{Point2, Vector2, VectorExt};
use crate::render::RenderContext;
use crate::transform::{Transform2D, TransformBy};

/// 矩形
///
/// (中心, 宽, 高, 旋转) 是唯一的数据来源；闭合轮廓在每次绘制、求包围盒
/// 或拾取时由 [`Rectangle::to_polyline`] 重新生成，不保留缓存。
#[derive(Debug, Clone)]
pub struct Rectangle {
    base: ShapeBase,
    center: Point2,
    width: f64,
    height: f64,
    /// 旋转角度（弧度）
    rotation: f64,
}

impl Rectangle {
    /// 宽高取绝对值
    pub fn new(center: Point2, width: f64, height: f64, rotation: f64) -> Self {
        Self {
            base: ShapeBase::new(),
            center,
            width: width.abs(),
            height: height.abs(),
            rotation,
        }
    }

    /// 由中心和角点创建，宽高为角点偏移的两倍
    pub fn from_corner(center: Point2, corner: Point2, rotation: f64) -> Self {
        let half = corner - center;
        Self::new(center, half.x * 2.0, half.y * 2.0, rotation)
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// 未旋转的角点：`Center + (Width/2, Height/2)`
    pub fn corner(&self) -> Point2 {
        self.center + Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn set_center(&mut self, center: Point2) {
        self.center = center;
        self.base.notify("Center");
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width.abs();
        self.base.notify("Width");
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height.abs();
        self.base.notify("Height");
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
        self.base.notify("Rotation");
    }

    /// 由角点反算宽高（偏移量的两倍，取绝对值）
    pub fn set_corner(&mut self, corner: Point2) {
        let delta = corner - self.center;
        self.width = delta.x.abs() * 2.0;
        self.height = delta.y.abs() * 2.0;
        self.base.notify("Corner");
    }

    /// 局部坐标到世界坐标：先旋转，再平移到中心
    fn local_to_world(&self) -> Transform2D {
        Transform2D::rotation(self.rotation)
            .then(&Transform2D::translation(self.center.x, self.center.y))
    }

    /// 四个角点（世界坐标，逆时针）
    pub fn corners(&self) -> [Point2; 4] {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let t = self.local_to_world();
        [
            Point2::new(-hw, -hh),
            Point2::new(hw, -hh),
            Point2::new(hw, hh),
            Point2::new(-hw, hh),
        ]
        .map(|p| t.transform_point(&p))
    }

    /// 生成闭合轮廓
    pub fn to_polyline(&self) -> Polyline {
        let mut poly = Polyline::new(self.corners(), true);
        poly.set_outline(self.outline());
        poly.set_fill(self.fill());
        poly
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Shape for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "Rectangle"
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        if !self.visible() {
            return;
        }
        self.to_polyline().draw(ctx);
    }

    fn extents(&self) -> Extents2D {
        self.to_polyline().extents()
    }

    fn contains(&self, point: &Point2, pick_tolerance: f64) -> bool {
        self.to_polyline().contains(point, pick_tolerance)
    }

    /// 只变换中心和方向：旋转由变换后的单位方向向量重新求得，
    /// 矩阵中的缩放和错切分量不会反映到宽高上。
    fn transform_by(&mut self, transform: &Transform2D) {
        let mut center = self.center;
        center.transform_by(transform);

        let mut dir = Vector2::from_angle(self.rotation);
        dir.transform_by(transform);

        tracing::trace!(
            id = %self.id(),
            old_rotation = self.rotation,
            new_rotation = VectorExt::angle(&dir),
            "rectangle transformed"
        );

        self.set_center(center);
        self.set_rotation(VectorExt::angle(&dir));
    }

    fn control_points(&self, handle_size: f64) -> Vec<ControlPoint> {
        let corner = self
            .local_to_world()
            .transform_point(&Point2::new(self.width / 2.0, self.height / 2.0));
        vec![
            ControlPoint::point("Center", self.center, handle_size),
            ControlPoint::point("Corner", corner, handle_size),
        ]
    }

    /// `Corner` 控制点在矩形的局部坐标系中解析，旋转后的矩形拖角也能正确改变宽高
    fn set_control_point(&mut self, name: &str, position: Point2) -> Result<()> {
        match name {
            "Center" => self.set_center(position),
            "Corner" => {
                let local = Transform2D::rotation(-self.rotation)
                    .transform_vector(&(position - self.center));
                self.set_corner(self.center + local);
            }
            _ => {
                return Err(CadError::UnknownControlPoint {
                    shape: self.type_name(),
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{Color, Fill};
    use crate::render::{DrawCommand, DrawList};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    const TOL: f64 = 1e-9;

    #[test]
    fn test_negative_size_is_normalized() {
        let mut rect = Rectangle::new(Point2::origin(), -4.0, -2.0, 0.0);
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 2.0);

        rect.set_width(-10.0);
        rect.set_height(-6.0);
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 6.0);
    }

    #[test]
    fn test_from_corner() {
        let rect = Rectangle::from_corner(Point2::new(1.0, 1.0), Point2::new(-1.0, 4.0), 0.0);
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 6.0);
    }

    #[test]
    fn test_corner_round_trip() {
        let mut rect = Rectangle::new(Point2::new(2.0, 3.0), 1.0, 1.0, 0.0);
        rect.set_corner(Point2::new(7.0, 5.5));
        assert!((rect.corner() - Point2::new(7.0, 5.5)).norm() < TOL);
        assert!((rect.width() - 10.0).abs() < TOL);
        assert!((rect.height() - 5.0).abs() < TOL);

        // 角点在中心左下方时宽高仍为非负
        rect.set_corner(Point2::new(0.0, 0.0));
        assert!(rect.width() >= 0.0 && rect.height() >= 0.0);
        assert!((rect.width() - 4.0).abs() < TOL);
    }

    #[test]
    fn test_polyline_regenerated_on_every_query() {
        let mut rect = Rectangle::new(Point2::origin(), 2.0, 2.0, 0.0);
        assert!(rect.contains(&Point2::new(1.0, 0.0), 0.01));

        rect.set_width(6.0);
        assert!(!rect.contains(&Point2::new(1.0, 0.0), 0.01));
        assert!(rect.contains(&Point2::new(3.0, 0.0), 0.01));
        assert!((rect.extents().width() - 6.0).abs() < TOL);
    }

    #[test]
    fn test_rotated_extents() {
        let rect = Rectangle::new(Point2::new(10.0, 0.0), 2.0, 2.0, FRAC_PI_4);
        let e = rect.extents();
        let diag = 2.0_f64.sqrt();
        assert!((e.width() - 2.0 * diag).abs() < TOL);
        assert!((e.min().unwrap().x - (10.0 - diag)).abs() < TOL);
    }

    #[test]
    fn test_transform_recovers_rotation() {
        let mut rect = Rectangle::new(Point2::new(1.0, 0.0), 4.0, 2.0, 0.0);
        rect.transform_by(&Transform2D::rotation(FRAC_PI_2));

        assert!((rect.rotation() - FRAC_PI_2).abs() < TOL);
        assert!((rect.center() - Point2::new(0.0, 1.0)).norm() < TOL);
        // 宽高不受影响
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_transform_drops_scale() {
        let mut rect = Rectangle::new(Point2::new(1.0, 1.0), 4.0, 2.0, 0.0);
        rect.transform_by(&Transform2D::scale(3.0, 0.5));
        assert!((rect.center() - Point2::new(3.0, 0.5)).norm() < TOL);
        assert_eq!(rect.width(), 4.0);
        assert!(rect.rotation().abs() < TOL);
    }

    #[test]
    fn test_degenerate_transform_yields_zero_angle() {
        let mut rect = Rectangle::new(Point2::origin(), 1.0, 1.0, 0.3);
        rect.transform_by(&Transform2D::scale(0.0, 0.0));
        assert_eq!(rect.rotation(), 0.0);
        assert!(!rect.rotation().is_nan());
    }

    #[test]
    fn test_rotated_corner_control_point() {
        let mut rect = Rectangle::new(Point2::origin(), 4.0, 2.0, FRAC_PI_2);
        let cps = rect.control_points(0.1);
        let corner = cps.iter().find(|c| c.name == "Corner").unwrap();
        assert!((corner.position - Point2::new(-1.0, 2.0)).norm() < TOL);
        assert!(rect.extents().contains(&corner.position));

        // 拖动到局部 (3, 1.5)，即世界坐标 (-1.5, 3)
        rect.set_control_point("Corner", Point2::new(-1.5, 3.0)).unwrap();
        assert!((rect.width() - 6.0).abs() < TOL);
        assert!((rect.height() - 3.0).abs() < TOL);
    }

    #[test]
    fn test_draw_uses_outline() {
        let mut rect = Rectangle::new(Point2::origin(), 1.0, 1.0, 0.0);
        let outline = crate::properties::Outline::new(crate::properties::Color::RED);
        rect.set_outline(outline);

        let mut list = DrawList::new();
        rect.draw(&mut list);
        match &list.commands()[0] {
            DrawCommand::Polyline { points, closed, outline: drawn, fill } => {
                assert_eq!(points.len(), 4);
                assert!(*closed);
                assert_eq!(*drawn, outline);
                assert!(fill.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_fill_reaches_draw_command() {
        let mut rect = Rectangle::new(Point2::new(2.0, 2.0), 4.0, 2.0, FRAC_PI_4);
        rect.set_fill(Fill::Solid(Color::BLUE));
        assert_eq!(rect.take_changes()[0].property, "Fill");
        assert_eq!(rect.to_polyline().fill(), Fill::Solid(Color::BLUE));

        let mut list = DrawList::new();
        rect.draw(&mut list);
        assert!(matches!(
            list.commands(),
            [DrawCommand::Polyline { closed: true, fill: Fill::Solid(Color::BLUE), .. }]
        ));
    }

    #[test]
    fn test_invisible_rectangle_draws_nothing() {
        let mut rect = Rectangle::new(Point2::origin(), 1.0, 1.0, 0.0);
        rect.set_visible(false);

        let mut list = DrawList::new();
        rect.draw(&mut list);
        assert!(list.is_empty());
    }
}
