//! 内核配置
//!
//! 拾取框大小、默认轮廓样式和新建标注的默认参数。配置以 JSON 读写，
//! 缺失的字段取默认值。

use crate::error::Result;
use crate::geometry::FontStyle;
use crate::properties::Outline;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 标注默认参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionDefaults {
    /// 标注线相对测量线段的偏移
    pub offset: f64,
    /// 文字高度
    pub text_height: f64,
    /// 文字模板，`<>` 会被测量值替换
    pub template: String,
    pub font_family: String,
    pub font_style: FontStyle,
    /// 测量值比例
    pub scale: f64,
    /// 小数位数
    pub precision: usize,
}

impl Default for DimensionDefaults {
    fn default() -> Self {
        Self {
            offset: 0.4,
            text_height: 1.0,
            template: "<>".to_string(),
            font_family: "Arial".to_string(),
            font_style: FontStyle::REGULAR,
            scale: 1.0,
            precision: 2,
        }
    }
}

/// 内核配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelSettings {
    /// 拾取框大小（屏幕像素）
    pub pick_box_pixels: f64,
    /// 新建图元的轮廓样式
    pub default_outline: Outline,
    /// 标注默认参数
    pub dimension: DimensionDefaults,
}

impl Default for KernelSettings {
    fn default() -> Self {
        Self {
            pick_box_pixels: 4.0,
            default_outline: Outline::default(),
            dimension: DimensionDefaults::default(),
        }
    }
}

impl KernelSettings {
    /// 从 JSON 字符串解析
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 JSON 文件读取
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        tracing::info!("Loaded kernel settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 将屏幕拾取框换算为世界坐标容差，`zoom_factor` 为每世界单位的像素数
    pub fn pick_tolerance(&self, zoom_factor: f64) -> f64 {
        if zoom_factor.is_nan() || zoom_factor <= 0.0 {
            tracing::warn!(zoom_factor, "invalid zoom factor, using raw pixel tolerance");
            return self.pick_box_pixels;
        }
        self.pick_box_pixels / zoom_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CadError;
    use crate::properties::Color;

    #[test]
    fn test_defaults() {
        let s = KernelSettings::default();
        assert_eq!(s.pick_box_pixels, 4.0);
        assert_eq!(s.default_outline.color, Color::WHITE);
        assert_eq!(s.dimension.precision, 2);
        assert_eq!(s.dimension.template, "<>");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = KernelSettings::from_json_str(
            r#"{ "pick_box_pixels": 8, "dimension": { "precision": 4 } }"#,
        )
        .unwrap();
        assert_eq!(s.pick_box_pixels, 8.0);
        assert_eq!(s.dimension.precision, 4);
        assert_eq!(s.dimension.offset, 0.4);
    }

    #[test]
    fn test_json_round_trip() {
        let mut s = KernelSettings::default();
        s.default_outline = Outline::new(Color::GREEN).with_line_weight(2.0);
        let json = s.to_json_string().unwrap();
        assert_eq!(KernelSettings::from_json_str(&json).unwrap(), s);
    }

    #[test]
    fn test_invalid_json() {
        let err = KernelSettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CadError::Settings(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = KernelSettings::load("/nonexistent/cad2d-settings.json").unwrap_err();
        assert!(matches!(err, CadError::Io(_)));
    }

    #[test]
    fn test_pick_tolerance() {
        let s = KernelSettings::default();
        assert_eq!(s.pick_tolerance(2.0), 2.0);
        assert_eq!(s.pick_tolerance(0.5), 8.0);
        assert_eq!(s.pick_tolerance(0.0), 4.0);
        assert_eq!(s.pick_tolerance(-2.0), 4.0);
        assert_eq!(s.pick_tolerance(f64::NAN), 4.0);
    }
}
