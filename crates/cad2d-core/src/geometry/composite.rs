use crate::drawable::{Drawable, Shape, ShapeBase};
use crate::extents::Extents2D;
use crate::math::Point2;
use crate::render::RenderContext;
use crate::transform::Transform2D;

/// 组合体
///
/// 独占一组有序的子图元。顺序即绘制顺序；拾取只关心是否有任一子图元命中。
/// 克隆时子图元一起深拷贝。
#[derive(Debug, Clone, Default)]
pub struct Composite {
    base: ShapeBase,
    items: Vec<Drawable>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = Drawable>) -> Self {
        Self {
            base: ShapeBase::new(),
            items: items.into_iter().collect(),
        }
    }

    pub fn add(&mut self, item: impl Into<Drawable>) {
        self.items.push(item.into());
        self.base.notify("Items");
    }

    pub fn remove(&mut self, index: usize) -> Option<Drawable> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.base.notify("Items");
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.base.notify("Items");
    }

    pub fn items(&self) -> &[Drawable] {
        &self.items
    }

    /// 子图元的可变访问；子图元的属性变更记录在各自的队列中
    pub fn items_mut(&mut self) -> &mut [Drawable] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 按绘制顺序查找第一个命中的子图元
    pub fn find(&self, point: &Point2, pick_tolerance: f64) -> Option<&Drawable> {
        self.items.iter().find(|d| d.contains(point, pick_tolerance))
    }

    /// 第一个命中的子图元下标
    pub fn position(&self, point: &Point2, pick_tolerance: f64) -> Option<usize> {
        self.items.iter().position(|d| d.contains(point, pick_tolerance))
    }
}

impl Shape for Composite {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "Composite"
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        if !self.visible() {
            return;
        }
        for item in &self.items {
            item.draw(ctx);
        }
    }

    fn extents(&self) -> Extents2D {
        let mut extents = Extents2D::new();
        for item in &self.items {
            extents.add_extents(&item.extents());
        }
        extents
    }

    fn contains(&self, point: &Point2, pick_tolerance: f64) -> bool {
        self.items.iter().any(|d| d.contains(point, pick_tolerance))
    }

    fn transform_by(&mut self, transform: &Transform2D) {
        for item in &mut self.items {
            item.transform_by(transform);
        }
        self.base.notify("Items");
    }
}

impl Extend<Drawable> for Composite {
    fn extend<I: IntoIterator<Item = Drawable>>(&mut self, iter: I) {
        self.items.extend(iter);
        self.base.notify("Items");
    }
}

impl FromIterator<Drawable> for Composite {
    fn from_iter<I: IntoIterator<Item = Drawable>>(iter: I) -> Self {
        Self::with_items(iter)
    }
}
