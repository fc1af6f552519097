//! 视觉属性：颜色、线型、轮廓样式、填充样式

use serde::{Deserialize, Serialize};

/// RGBA 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 转换为 `[0, 1]` 范围的浮点分量
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// 线型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineType {
    #[default]
    Continuous,
    Dashed,
    Dotted,
    DashDot,
}

/// 轮廓样式（画笔）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub color: Color,
    /// 线宽（屏幕像素）
    pub line_weight: f32,
    pub line_type: LineType,
}

impl Outline {
    pub const WHITE: Outline = Outline::new(Color::WHITE);

    pub const fn new(color: Color) -> Self {
        Self {
            color,
            line_weight: 1.0,
            line_type: LineType::Continuous,
        }
    }

    pub fn with_line_weight(mut self, weight: f32) -> Self {
        self.line_weight = weight;
        self
    }

    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line_type = line_type;
        self
    }
}

impl Default for Outline {
    fn default() -> Self {
        Outline::WHITE
    }
}

/// 填充样式（画刷），只作用于闭合轮廓
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Fill {
    #[default]
    None,
    Solid(Color),
}

impl Fill {
    pub fn is_none(&self) -> bool {
        matches!(self, Fill::None)
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Fill::None => None,
            Fill::Solid(color) => Some(*color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_outline_is_white() {
        let outline = Outline::default();
        assert_eq!(outline.color, Color::WHITE);
        assert_eq!(outline.line_type, LineType::Continuous);
    }

    #[test]
    fn test_color_to_f32() {
        assert_eq!(Color::RED.to_f32_array(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_default_fill_is_none() {
        assert!(Fill::default().is_none());
        assert_eq!(Fill::default().color(), None);
        assert_eq!(Fill::Solid(Color::BLUE).color(), Some(Color::BLUE));
    }
}
