//! 控制点
//!
//! 控制点是查询时生成的快照，不与图元双向绑定：编辑器拖动后通过
//! [`Shape::set_control_point`](crate::drawable::Shape::set_control_point) 回写。

use crate::math::Point2;

/// 控制点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPointType {
    /// 可自由拖动的位置
    Point,
}

/// 控制点
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    /// 对应的属性名称（如 "StartPoint"）
    pub name: String,
    pub kind: ControlPointType,
    /// 拖动起点
    pub base_position: Point2,
    /// 当前位置
    pub position: Point2,
    /// 手柄边长（世界坐标）
    pub size: f64,
}

impl ControlPoint {
    /// 位置型控制点，起点与当前位置相同
    pub fn point(name: impl Into<String>, position: Point2, size: f64) -> Self {
        Self {
            name: name.into(),
            kind: ControlPointType::Point,
            base_position: position,
            position,
            size,
        }
    }

    /// 点是否落在手柄方框内（含边界）
    pub fn hit(&self, point: &Point2) -> bool {
        let half = self.size / 2.0;
        (point.x - self.position.x).abs() <= half && (point.y - self.position.y).abs() <= half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_handle() {
        let cp = ControlPoint::point("StartPoint", Point2::new(1.0, 1.0), 0.5);
        assert_eq!(cp.kind, ControlPointType::Point);
        assert_eq!(cp.base_position, cp.position);
        assert!(cp.hit(&Point2::new(1.25, 0.75)));
        assert!(!cp.hit(&Point2::new(1.3, 1.0)));
    }
}
