use crate::control_point::ControlPoint;
use crate::drawable::{Shape, ShapeBase};
use crate::error::{CadError, Result};
use crate::extents::Extents2D;
use crate::math::{distance_to_segment, midpoint, Point2, VectorExt};
use crate::render::RenderContext;
use crate::transform::{Transform2D, TransformBy};

/// 线段
#[derive(Debug, Clone)]
pub struct Line {
    base: ShapeBase,
    start: Point2,
    end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            base: ShapeBase::new(),
            start,
            end,
        }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    pub fn set_start(&mut self, start: Point2) {
        self.start = start;
        self.base.notify("StartPoint");
    }

    pub fn set_end(&mut self, end: Point2) {
        self.end = end;
        self.base.notify("EndPoint");
    }

    /// 线段长度
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// 方向角（弧度）；零长度线段为 0
    pub fn angle(&self) -> f64 {
        VectorExt::angle(&(self.end - self.start))
    }

    pub fn midpoint(&self) -> Point2 {
        midpoint(&self.start, &self.end)
    }

    /// 点到线段的距离
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        distance_to_segment(point, &self.start, &self.end)
    }
}

impl Shape for Line {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "Line"
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        if !self.visible() {
            return;
        }
        ctx.draw_line(&self.start, &self.end, &self.outline());
    }

    fn extents(&self) -> Extents2D {
        Extents2D::from_corners(self.start, self.end)
    }

    fn contains(&self, point: &Point2, pick_tolerance: f64) -> bool {
        self.distance_to_point(point) <= pick_tolerance
    }

    fn transform_by(&mut self, transform: &Transform2D) {
        let mut start = self.start;
        let mut end = self.end;
        start.transform_by(transform);
        end.transform_by(transform);
        self.set_start(start);
        self.set_end(end);
    }

    fn control_points(&self, handle_size: f64) -> Vec<ControlPoint> {
        vec![
            ControlPoint::point("StartPoint", self.start, handle_size),
            ControlPoint::point("EndPoint", self.end, handle_size),
        ]
    }

    fn set_control_point(&mut self, name: &str, position: Point2) -> Result<()> {
        match name {
            "StartPoint" => self.set_start(position),
            "EndPoint" => self.set_end(position),
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
