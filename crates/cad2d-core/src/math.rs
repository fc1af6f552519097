//! 基础数学类型
//!
//! 点和向量直接使用 nalgebra 的双精度类型，这里补充 CAD 常用的角度与距离计算。

/// 二维点
pub type Point2 = nalgebra::Point2<f64>;

/// 二维向量
pub type Vector2 = nalgebra::Vector2<f64>;

/// 浮点比较容差
pub const EPSILON: f64 = 1e-10;

/// 向量的角度相关扩展
pub trait VectorExt {
    /// 与 X 轴正方向的夹角（弧度，`atan2`），每次调用都从 (x, y) 重新计算
    fn angle(&self) -> f64;

    /// 指定角度的单位向量
    fn from_angle(angle: f64) -> Self;
}

impl VectorExt for Vector2 {
    #[inline]
    fn angle(&self) -> f64 {
        // atan2(0, 0) == 0，零向量得到安全的 0 角度
        self.y.atan2(self.x)
    }

    #[inline]
    fn from_angle(angle: f64) -> Self {
        Vector2::new(angle.cos(), angle.sin())
    }
}

/// 点到线段 `a-b` 的最短距离
pub fn distance_to_segment(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let v = b - a;
    let w = point - a;

    let c1 = w.dot(&v);
    if c1 <= 0.0 {
        return (point - a).norm();
    }

    let c2 = v.dot(&v);
    if c2 <= c1 {
        return (point - b).norm();
    }

    let t = c1 / c2;
    let projected = a + v * t;
    (point - projected).norm()
}

/// 两点中点
#[inline]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}
