//! 可绘制对象基础
//!
//! - [`Shape`]：所有图元共享的能力集合（绘制、包围盒、拾取、变换、控制点）
//! - [`ShapeBase`]：标识、轮廓样式、可见性和待处理的属性变更
//! - [`Drawable`]：封闭的图元枚举，按 `match` 分发
//!
//! 属性变更不通过事件回调传播：每个修改器在图元内部记录一条
//! [`PropertyChange`]，视图层通过 [`Shape::take_changes`] 轮询。

use crate::control_point::ControlPoint;
use crate::error::{CadError, Result};
use crate::extents::Extents2D;
use crate::geometry::{Composite, Dimension, Line, Polygon, Polyline, Rectangle, Text};
use crate::math::Point2;
use crate::properties::{Fill, Outline};
use crate::render::RenderContext;
use crate::transform::Transform2D;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// 图元标识；图元按标识比较相等，而不是按几何值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableId(u64);

impl DrawableId {
    /// 分配新的进程内唯一标识
    pub fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for DrawableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DrawableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 一条属性变更记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyChange {
    pub id: DrawableId,
    pub property: &'static str,
}

/// 图元公共状态
#[derive(Debug)]
pub struct ShapeBase {
    id: DrawableId,
    outline: Outline,
    fill: Fill,
    visible: bool,
    changes: Vec<PropertyChange>,
}

impl ShapeBase {
    pub fn new() -> Self {
        Self {
            id: DrawableId::new(),
            outline: Outline::default(),
            fill: Fill::None,
            visible: true,
            changes: Vec::new(),
        }
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    /// 记录属性变更；同一属性在被取走之前只记录一次
    pub fn notify(&mut self, property: &'static str) {
        tracing::trace!(id = %self.id, property, "property changed");
        if !self.changes.iter().any(|c| c.property == property) {
            self.changes.push(PropertyChange {
                id: self.id,
                property,
            });
        }
    }
}

impl Default for ShapeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ShapeBase {
    /// 克隆得到新的标识，且不继承未处理的变更
    fn clone(&self) -> Self {
        Self {
            id: DrawableId::new(),
            outline: self.outline,
            fill: self.fill,
            visible: self.visible,
            changes: Vec::new(),
        }
    }
}

/// 图元能力集合
pub trait Shape {
    fn base(&self) -> &ShapeBase;

    fn base_mut(&mut self) -> &mut ShapeBase;

    /// 类型名称（用于日志和错误信息）
    fn type_name(&self) -> &'static str;

    /// 使用当前轮廓和填充样式输出到渲染器，不可见时不输出
    fn draw(&self, ctx: &mut dyn RenderContext);

    /// 当前坐标空间下的最小轴对齐包围盒
    fn extents(&self) -> Extents2D;

    /// 拾取测试，`pick_tolerance` 为世界坐标下的半径
    ///
    /// 默认只检查包围盒；具有轮廓几何的图元应覆盖为基于容差的轮廓测试。
    fn contains(&self, point: &Point2, pick_tolerance: f64) -> bool {
        let _ = pick_tolerance;
        self.extents().contains(point)
    }

    /// 原地应用仿射变换
    fn transform_by(&mut self, transform: &Transform2D);

    /// 可编辑控制点快照
    fn control_points(&self, handle_size: f64) -> Vec<ControlPoint> {
        let _ = handle_size;
        Vec::new()
    }

    /// 编辑器拖动控制点后的回写，经由对应的属性修改器
    fn set_control_point(&mut self, name: &str, position: Point2) -> Result<()> {
        let _ = position;
        Err(CadError::UnknownControlPoint {
            shape: self.type_name(),
            name: name.to_string(),
        })
    }

    fn id(&self) -> DrawableId {
        self.base().id
    }

    fn outline(&self) -> Outline {
        self.base().outline
    }

    fn set_outline(&mut self, outline: Outline) {
        let base = self.base_mut();
        base.outline = outline;
        base.notify("Outline");
    }

    fn fill(&self) -> Fill {
        self.base().fill
    }

    fn set_fill(&mut self, fill: Fill) {
        let base = self.base_mut();
        base.fill = fill;
        base.notify("Fill");
    }

    fn visible(&self) -> bool {
        self.base().visible
    }

    fn set_visible(&mut self, visible: bool) {
        let base = self.base_mut();
        base.visible = visible;
        base.notify("Visible");
    }

    /// 取走所有待处理的属性变更
    fn take_changes(&mut self) -> Vec<PropertyChange> {
        std::mem::take(&mut self.base_mut().changes)
    }

    fn has_changes(&self) -> bool {
        !self.base().changes.is_empty()
    }
}

/// 图元枚举
#[derive(Debug, Clone)]
pub enum Drawable {
    Line(Line),
    Text(Text),
    Polyline(Polyline),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Dimension(Dimension),
    Composite(Composite),
}

macro_rules! dispatch {
    ($self:expr, $shape:ident => $body:expr) => {
        match $self {
            Drawable::Line($shape) => $body,
            Drawable::Text($shape) => $body,
            Drawable::Polyline($shape) => $body,
            Drawable::Polygon($shape) => $body,
            Drawable::Rectangle($shape) => $body,
            Drawable::Dimension($shape) => $body,
            Drawable::Composite($shape) => $body,
        }
    };
}

impl Shape for Drawable {
    fn base(&self) -> &ShapeBase {
        dispatch!(self, s => s.base())
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        dispatch!(self, s => s.base_mut())
    }

    fn type_name(&self) -> &'static str {
        dispatch!(self, s => s.type_name())
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        dispatch!(self, s => s.draw(ctx))
    }

    fn extents(&self) -> Extents2D {
        dispatch!(self, s => s.extents())
    }

    fn contains(&self, point: &Point2, pick_tolerance: f64) -> bool {
        dispatch!(self, s => s.contains(point, pick_tolerance))
    }

    fn transform_by(&mut self, transform: &Transform2D) {
        dispatch!(self, s => s.transform_by(transform))
    }

    fn control_points(&self, handle_size: f64) -> Vec<ControlPoint> {
        dispatch!(self, s => s.control_points(handle_size))
    }

    fn set_control_point(&mut self, name: &str, position: Point2) -> Result<()> {
        dispatch!(self, s => s.set_control_point(name, position))
    }
}

impl PartialEq for Drawable {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Drawable {}

macro_rules! impl_from_shape {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Drawable {
                fn from(shape: $variant) -> Self {
                    Drawable::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape!(Line, Text, Polyline, Polygon, Rectangle, Dimension, Composite);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Color;

    #[test]
    fn test_defaults() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        assert_eq!(line.outline(), Outline::WHITE);
        assert!(line.visible());
        assert!(!line.has_changes());
    }

    #[test]
    fn test_change_notification() {
        let mut line = Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        line.set_outline(Outline::new(Color::RED));
        line.set_visible(false);
        line.set_visible(true);

        let changes = line.take_changes();
        let names: Vec<_> = changes.iter().map(|c| c.property).collect();
        assert_eq!(names, vec!["Outline", "Visible"]);
        assert!(changes.iter().all(|c| c.id == line.id()));
        assert!(!line.has_changes());
    }

    #[test]
    fn test_fill_is_shared_state() {
        let mut rect = Rectangle::new(Point2::origin(), 2.0, 1.0, 0.0);
        assert!(rect.fill().is_none());

        rect.set_fill(Fill::Solid(Color::CYAN));
        assert_eq!(rect.take_changes()[0].property, "Fill");
        assert_eq!(rect.clone().fill(), Fill::Solid(Color::CYAN));
    }

    #[test]
    fn test_invisible_shapes_draw_nothing() {
        let mut dim = Dimension::new(Point2::origin(), Point2::new(3.0, 4.0), 1.0);
        dim.set_visible(false);
        let mut list = crate::render::DrawList::new();
        dim.draw(&mut list);
        Drawable::from(dim).draw(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_identity_equality() {
        let a: Drawable = Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).into();
        let b: Drawable = Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).into();
        assert_ne!(a, b);
        assert_eq!(a, a);
        assert_ne!(a, a.clone());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        original.set_visible(false);
        let copy = original.clone();

        assert_ne!(copy.id(), original.id());
        assert!(!copy.visible());
        assert!(!copy.has_changes());
        assert!(original.has_changes());
    }

    #[test]
    fn test_unknown_control_point() {
        let mut composite = Composite::new();
        let err = composite
            .set_control_point("Center", Point2::origin())
            .unwrap_err();
        assert!(matches!(err, CadError::UnknownControlPoint { shape: "Composite", .. }));
    }
}
