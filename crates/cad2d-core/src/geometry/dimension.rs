use crate::control_point::ControlPoint;
use crate::drawable::{Shape, ShapeBase};
use crate::error::{CadError, Result};
use crate::extents::Extents2D;
use crate::geometry::{Composite, FontStyle, Line, Text, TextAlignment, VerticalAlignment};
use crate::math::{Point2, VectorExt};
use crate::render::RenderContext;
use crate::settings::KernelSettings;
use crate::transform::{Transform2D, TransformBy};

/// 模板中被测量值替换的占位符
pub const MEASUREMENT_PLACEHOLDER: &str = "<>";

/// 对齐尺寸标注
///
/// 只保存定义参数；标注线、两个端部短线和文字在每次绘制、求包围盒、
/// 拾取时从参数重新合成。
#[derive(Debug, Clone)]
pub struct Dimension {
    base: ShapeBase,
    start: Point2,
    end: Point2,
    offset: f64,
    text_height: f64,
    template: String,
    font_family: String,
    font_style: FontStyle,
    scale: f64,
    precision: usize,
}

impl Dimension {
    pub fn new(start: Point2, end: Point2, text_height: f64) -> Self {
        Self {
            base: ShapeBase::new(),
            start,
            end,
            offset: 0.4,
            text_height,
            template: MEASUREMENT_PLACEHOLDER.to_string(),
            font_family: "Arial".to_string(),
            font_style: FontStyle::REGULAR,
            scale: 1.0,
            precision: 2,
        }
    }

    /// 按配置中的标注默认值和轮廓样式创建
    pub fn from_settings(start: Point2, end: Point2, settings: &KernelSettings) -> Self {
        let defaults = &settings.dimension;
        let mut dim = Self {
            base: ShapeBase::new(),
            start,
            end,
            offset: defaults.offset,
            text_height: defaults.text_height,
            template: defaults.template.clone(),
            font_family: defaults.font_family.clone(),
            font_style: defaults.font_style,
            scale: defaults.scale,
            precision: defaults.precision,
        };
        dim.set_outline(settings.default_outline);
        dim.take_changes();
        dim
    }

    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn text_height(&self) -> f64 {
        self.text_height
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn set_start(&mut self, start: Point2) {
        self.start = start;
        self.base.notify("StartPoint");
    }

    pub fn set_end(&mut self, end: Point2) {
        self.end = end;
        self.base.notify("EndPoint");
    }

    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.base.notify("Offset");
    }

    pub fn set_text_height(&mut self, text_height: f64) {
        self.text_height = text_height;
        self.base.notify("TextHeight");
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
        self.base.notify("String");
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
        self.base.notify("FontFamily");
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
        self.base.notify("FontStyle");
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.base.notify("Scale");
    }

    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision;
        self.base.notify("Precision");
    }

    /// 测量值：`|StartPoint - EndPoint| × Scale`
    pub fn measurement(&self) -> f64 {
        (self.start - self.end).norm() * self.scale
    }

    /// 模板中的 `<>` 替换为按精度格式化的测量值
    pub fn display_text(&self) -> String {
        let value = format!("{:.*}", self.precision, self.measurement());
        self.template.replace(MEASUREMENT_PLACEHOLDER, &value)
    }

    /// 合成标注几何
    ///
    /// 在以 StartPoint 为原点、测量方向为 X 轴的局部坐标系中构造
    /// 标注线、两个端部短线和居中文字，再整体旋转平移到世界坐标。
    pub fn sub_items(&self) -> Composite {
        let dir = self.end - self.start;
        let angle = VectorExt::angle(&dir);
        let len = dir.norm();
        let tick = 0.5 * self.text_height;
        let outline = self.outline();

        let dim_line = Line::from_coords(0.0, self.offset, len, self.offset);
        let left_tick = Line::from_coords(0.0, self.offset - tick, 0.0, self.offset + tick);
        let right_tick = Line::from_coords(len, self.offset - tick, len, self.offset + tick);

        let mut label = Text::new(
            Point2::new(len / 2.0, self.offset),
            self.display_text(),
            self.text_height,
        )
        .with_alignment(TextAlignment::Center, VerticalAlignment::Middle);
        label.set_font_family(self.font_family.as_str());
        label.set_font_style(self.font_style);

        let mut items = Composite::new();
        items.add(dim_line);
        items.add(left_tick);
        items.add(right_tick);
        items.add(label);
        for item in items.items_mut() {
            item.set_outline(outline);
        }

        items.transform_by(&Transform2D::transformation(
            1.0,
            1.0,
            angle,
            self.start.x,
            self.start.y,
        ));

        tracing::trace!(id = %self.id(), len, angle, "dimension synthesized");
        items
    }
}

impl Shape for Dimension {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "Dimension"
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        if !self.visible() {
            return;
        }
        self.sub_items().draw(ctx);
    }

    /// 合成几何的包围盒，并且总是包含两个测量点
    fn extents(&self) -> Extents2D {
        let mut extents = self.sub_items().extents();
        extents.add(self.start);
        extents.add(self.end);
        extents
    }

    fn contains(&self, point: &Point2, pick_tolerance: f64) -> bool {
        self.sub_items().contains(point, pick_tolerance)
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
