//! 轴对齐包围盒累加器
//!
//! 空包围盒（尚未加入任何点）与零尺寸包围盒（只加入过一个点）是两种不同状态。

use crate::math::{Point2, Vector2};

/// 包围盒
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents2D {
    bounds: Option<(Point2, Point2)>,
}

impl Extents2D {
    /// 创建空包围盒
    pub fn new() -> Self {
        Self { bounds: None }
    }

    /// 由两个角点创建（自动规整 min/max）
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        let mut extents = Self::new();
        extents.add(a);
        extents.add(b);
        extents
    }

    /// 由点集创建
    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Self {
        let mut extents = Self::new();
        for p in points {
            extents.add(p);
        }
        extents
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// 扩展以包含点
    pub fn add(&mut self, p: Point2) {
        self.bounds = Some(match self.bounds {
            None => (p, p),
            Some((min, max)) => (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            ),
        });
    }

    /// 与另一个包围盒求并；空包围盒不改变结果
    pub fn add_extents(&mut self, other: &Extents2D) {
        if let Some((min, max)) = other.bounds {
            self.add(min);
            self.add(max);
        }
    }

    /// 点是否在包围盒内（含边界）；空包围盒不包含任何点
    pub fn contains(&self, p: &Point2) -> bool {
        match self.bounds {
            None => false,
            Some((min, max)) => p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y,
        }
    }

    /// 两个包围盒是否相交（含边界接触）
    pub fn intersects(&self, other: &Extents2D) -> bool {
        match (self.bounds, other.bounds) {
            (Some((a_min, a_max)), Some((b_min, b_max))) => {
                a_min.x <= b_max.x && a_max.x >= b_min.x && a_min.y <= b_max.y && a_max.y >= b_min.y
            }
            _ => false,
        }
    }

    /// 向四周外扩 `margin`
    pub fn inflated(&self, margin: f64) -> Self {
        match self.bounds {
            None => *self,
            Some((min, max)) => {
                let d = Vector2::new(margin, margin);
                Self::from_corners(min - d, max + d)
            }
        }
    }

    pub fn min(&self) -> Option<Point2> {
        self.bounds.map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<Point2> {
        self.bounds.map(|(_, max)| max)
    }

    pub fn width(&self) -> f64 {
        self.bounds.map_or(0.0, |(min, max)| max.x - min.x)
    }

    pub fn height(&self) -> f64 {
        self.bounds.map_or(0.0, |(min, max)| max.y - min.y)
    }

    pub fn center(&self) -> Option<Point2> {
        self.bounds.map(|(min, max)| nalgebra::center(&min, &max))
    }
}

impl Default for Extents2D {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Point2> for Extents2D {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
