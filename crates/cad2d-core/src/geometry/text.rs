use crate::control_point::ControlPoint;
use crate::drawable::{Shape, ShapeBase};
use crate::error::{CadError, Result};
use crate::extents::Extents2D;
use crate::math::{Point2, Vector2, VectorExt};
use crate::render::RenderContext;
use crate::transform::{Transform2D, TransformBy};
use serde::{Deserialize, Serialize};

/// 西文字符宽度与字高之比（估算）
const GLYPH_WIDTH_FACTOR: f64 = 0.6;

/// 水平对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextAlignment {
    /// 左对齐（默认）
    #[default]
    Left,
    /// 居中对齐
    Center,
    /// 右对齐
    Right,
}

/// 垂直对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VerticalAlignment {
    /// 插入点在文本底边（默认）
    #[default]
    Bottom,
    Middle,
    Top,
}

/// 字体样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
}

impl FontStyle {
    pub const REGULAR: FontStyle = FontStyle {
        bold: false,
        italic: false,
        underline: false,
        strikeout: false,
    };

    pub fn is_regular(&self) -> bool {
        *self == Self::REGULAR
    }
}

/// 单行文本
#[derive(Debug, Clone)]
pub struct Text {
    base: ShapeBase,
    position: Point2,
    content: String,
    height: f64,
    /// 旋转角度（弧度）
    rotation: f64,
    font_family: String,
    font_style: FontStyle,
    horizontal_alignment: TextAlignment,
    vertical_alignment: VerticalAlignment,
}

impl Text {
    pub fn new(position: Point2, content: impl Into<String>, height: f64) -> Self {
        Self {
            base: ShapeBase::new(),
            position,
            content: content.into(),
            height,
            rotation: 0.0,
            font_family: "Arial".to_string(),
            font_style: FontStyle::REGULAR,
            horizontal_alignment: TextAlignment::Left,
            vertical_alignment: VerticalAlignment::Bottom,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_alignment(
        mut self,
        horizontal: TextAlignment,
        vertical: VerticalAlignment,
    ) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    pub fn horizontal_alignment(&self) -> TextAlignment {
        self.horizontal_alignment
    }

    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    pub fn set_position(&mut self, position: Point2) {
        self.position = position;
        self.base.notify("Position");
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.base.notify("Text");
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
        self.base.notify("TextHeight");
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
        self.base.notify("Rotation");
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
        self.base.notify("FontFamily");
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
        self.base.notify("FontStyle");
    }

    pub fn set_horizontal_alignment(&mut self, alignment: TextAlignment) {
        self.horizontal_alignment = alignment;
        self.base.notify("HorizontalAlignment");
    }

    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.vertical_alignment = alignment;
        self.base.notify("VerticalAlignment");
    }

    /// 估算文本宽度：中日韩字符按字高计，其余按字高的 0.6 倍
    pub fn estimated_width(&self) -> f64 {
        let char_count = self.content.chars().count();
        let cjk_count = self.content.chars().filter(|c| is_cjk(*c)).count();
        let other_count = char_count - cjk_count;

        cjk_count as f64 * self.height + other_count as f64 * self.height * GLYPH_WIDTH_FACTOR
    }

    /// 文本框四个角点（世界坐标，已考虑对齐和旋转）
    pub fn corners(&self) -> [Point2; 4] {
        let width = self.estimated_width();
        let height = self.height;

        let x0 = match self.horizontal_alignment {
            TextAlignment::Left => 0.0,
            TextAlignment::Center => -width / 2.0,
            TextAlignment::Right => -width,
        };
        let y0 = match self.vertical_alignment {
            VerticalAlignment::Bottom => 0.0,
            VerticalAlignment::Middle => -height / 2.0,
            VerticalAlignment::Top => -height,
        };

        let local_to_world = Transform2D::transformation(
            1.0,
            1.0,
            self.rotation,
            self.position.x,
            self.position.y,
        );
        [
            Point2::new(x0, y0),
            Point2::new(x0 + width, y0),
            Point2::new(x0 + width, y0 + height),
            Point2::new(x0, y0 + height),
        ]
        .map(|p| local_to_world.transform_point(&p))
    }
}

fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}')
}

impl Shape for Text {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "Text"
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        if !self.visible() {
            return;
        }
        ctx.draw_text(self, &self.outline());
    }

    fn extents(&self) -> Extents2D {
        Extents2D::from_points(self.corners())
    }

    /// 位置、方向和字高一起变换；字高取变换后“向上”向量的长度
    fn transform_by(&mut self, transform: &Transform2D) {
        let mut position = self.position;
        position.transform_by(transform);

        let mut dir = Vector2::from_angle(self.rotation);
        dir.transform_by(transform);

        let mut up = Vector2::from_angle(self.rotation + std::f64::consts::FRAC_PI_2) * self.height;
        up.transform_by(transform);

        self.set_position(position);
        self.set_rotation(VectorExt::angle(&dir));
        self.set_height(up.norm());
    }

    fn control_points(&self, handle_size: f64) -> Vec<ControlPoint> {
        vec![ControlPoint::point("Position", self.position, handle_size)]
    }

    fn set_control_point(&mut self, name: &str, position: Point2) -> Result<()> {
        if name != "Position" {
            return Err(CadError::UnknownControlPoint {
                shape: self.type_name(),
                name: name.to_string(),
            });
        }
        self.set_position(position);
        Ok(())
    }
}
