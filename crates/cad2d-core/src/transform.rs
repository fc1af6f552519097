//! 二维仿射变换
//!
//! 内部使用 3x3 齐次矩阵（列向量约定），组合变换固定按
//! 缩放 → 旋转 → 平移 的顺序构造。标注和矩形的派生几何都依赖这个约定。

use crate::math::{Point2, Vector2};
use nalgebra::Matrix3;

/// 仿射变换矩阵
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    matrix: Matrix3<f64>,
}

impl Transform2D {
    /// 单位变换
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// 从齐次矩阵创建（调用方保证最后一行为 `[0, 0, 1]`）
    pub fn from_matrix(matrix: Matrix3<f64>) -> Self {
        Self { matrix }
    }

    /// 平移
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::from_matrix(Matrix3::new(
            1.0, 0.0, dx, //
            0.0, 1.0, dy, //
            0.0, 0.0, 1.0,
        ))
    }

    /// 绕原点旋转（弧度，逆时针为正）
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_matrix(Matrix3::new(
            cos, -sin, 0.0, //
            sin, cos, 0.0, //
            0.0, 0.0, 1.0,
        ))
    }

    /// 以原点为基点缩放
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::from_matrix(Matrix3::new(
            sx, 0.0, 0.0, //
            0.0, sy, 0.0, //
            0.0, 0.0, 1.0,
        ))
    }

    /// 组合变换：先缩放，再旋转，最后平移
    pub fn transformation(sx: f64, sy: f64, angle: f64, tx: f64, ty: f64) -> Self {
        Self::scale(sx, sy)
            .then(&Self::rotation(angle))
            .then(&Self::translation(tx, ty))
    }

    /// 绕指定点旋转
    pub fn rotation_about(center: Point2, angle: f64) -> Self {
        Self::translation(-center.x, -center.y)
            .then(&Self::rotation(angle))
            .then(&Self::translation(center.x, center.y))
    }

    /// 以指定点为基点缩放
    pub fn scale_about(center: Point2, sx: f64, sy: f64) -> Self {
        Self::translation(-center.x, -center.y)
            .then(&Self::scale(sx, sy))
            .then(&Self::translation(center.x, center.y))
    }

    /// 关于直线 `a-b` 的镜像；两点重合时退化为单位变换
    pub fn mirror(a: Point2, b: Point2) -> Self {
        let dir = b - a;
        if dir.norm_squared() == 0.0 {
            return Self::identity();
        }
        let angle = dir.y.atan2(dir.x);
        Self::translation(-a.x, -a.y)
            .then(&Self::rotation(-angle))
            .then(&Self::scale(1.0, -1.0))
            .then(&Self::rotation(angle))
            .then(&Self::translation(a.x, a.y))
    }

    /// 先应用 `self`，再应用 `next`
    pub fn then(&self, next: &Transform2D) -> Self {
        Self::from_matrix(next.matrix * self.matrix)
    }

    /// 组合两个变换，等价于 `first.then(second)`
    pub fn compose(first: &Transform2D, second: &Transform2D) -> Self {
        first.then(second)
    }

    /// 逆变换；奇异矩阵返回 `None`
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(Self::from_matrix)
    }

    /// 变换点
    pub fn transform_point(&self, p: &Point2) -> Point2 {
        let m = &self.matrix;
        Point2::new(
            m[(0, 0)] * p.x + m[(0, 1)] * p.y + m[(0, 2)],
            m[(1, 0)] * p.x + m[(1, 1)] * p.y + m[(1, 2)],
        )
    }

    /// 变换向量（只作用线性部分，忽略平移）
    pub fn transform_vector(&self, v: &Vector2) -> Vector2 {
        let m = &self.matrix;
        Vector2::new(
            m[(0, 0)] * v.x + m[(0, 1)] * v.y,
            m[(1, 0)] * v.x + m[(1, 1)] * v.y,
        )
    }

    /// 线性部分的行列式，小于 0 表示包含镜像
    pub fn determinant(&self) -> f64 {
        let m = &self.matrix;
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

/// 原地应用仿射变换
pub trait TransformBy {
    fn transform_by(&mut self, transform: &Transform2D);
}

impl TransformBy for Point2 {
    fn transform_by(&mut self, transform: &Transform2D) {
        *self = transform.transform_point(self);
    }
}

impl TransformBy for Vector2 {
    fn transform_by(&mut self, transform: &Transform2D) {
        *self = transform.transform_vector(self);
    }
}
