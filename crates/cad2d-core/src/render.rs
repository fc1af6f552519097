//! 渲染接口
//!
//! 内核不做光栅化，只把几何以绘制命令的形式交给 [`RenderContext`]。
//! [`DrawList`] 记录命令，供无界面调用方和测试使用。

use crate::geometry::Text;
use crate::math::Point2;
use crate::properties::{Fill, Outline};

/// 渲染器接口（由视图层实现）
pub trait RenderContext {
    fn draw_line(&mut self, start: &Point2, end: &Point2, outline: &Outline);

    /// `fill` 只对闭合轮廓有意义
    fn draw_polyline(&mut self, points: &[Point2], closed: bool, outline: &Outline, fill: &Fill);

    fn draw_text(&mut self, text: &Text, outline: &Outline);
}

/// 绘制命令
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        start: Point2,
        end: Point2,
        outline: Outline,
    },
    Polyline {
        points: Vec<Point2>,
        closed: bool,
        outline: Outline,
        fill: Fill,
    },
    Text {
        position: Point2,
        content: String,
        height: f64,
        rotation: f64,
        outline: Outline,
    },
}

/// 记录绘制命令的渲染器
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// 所有文本命令的内容
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

impl RenderContext for DrawList {
    fn draw_line(&mut self, start: &Point2, end: &Point2, outline: &Outline) {
        self.commands.push(DrawCommand::Line {
            start: *start,
            end: *end,
            outline: *outline,
        });
    }

    fn draw_polyline(&mut self, points: &[Point2], closed: bool, outline: &Outline, fill: &Fill) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            closed,
            outline: *outline,
            fill: *fill,
        });
    }

    fn draw_text(&mut self, text: &Text, outline: &Outline) {
        self.commands.push(DrawCommand::Text {
            position: text.position(),
            content: text.content().to_string(),
            height: text.height(),
            rotation: text.rotation(),
            outline: *outline,
        });
    }
}
