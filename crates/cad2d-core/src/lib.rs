//! CAD2D 核心内核
//!
//! 提供二维图元、仿射变换、包围盒和拾取测试。
//!
//! # 架构设计
//!
//! - `math` / `transform` / `extents`: 点、向量、仿射矩阵、包围盒
//! - `drawable`: 图元能力集合 [`Shape`](drawable::Shape) 与图元枚举 [`Drawable`](drawable::Drawable)
//! - `geometry`: 线段、多段线、多边形、文本、矩形、尺寸标注、组合体
//! - `render`: 渲染器接口，内核只输出绘制命令
//!
//! 视图、文档、选择集和光栅化都在内核之外。
//!
//! # 示例
//!
//! ```rust
//! use cad2d_core::prelude::*;
//!
//! let mut dim = Dimension::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0), 0.5);
//! assert_eq!(dim.display_text(), "5.00");
//!
//! dim.transform_by(&Transform2D::rotation(std::f64::consts::FRAC_PI_2));
//! assert!(dim.extents().contains(&dim.end()));
//! ```

pub mod control_point;
pub mod drawable;
pub mod error;
pub mod extents;
pub mod geometry;
pub mod math;
pub mod properties;
pub mod render;
pub mod settings;
pub mod transform;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::control_point::{ControlPoint, ControlPointType};
    pub use crate::drawable::{Drawable, DrawableId, PropertyChange, Shape};
    pub use crate::error::{CadError, Result};
    pub use crate::extents::Extents2D;
    pub use crate::geometry::{
        Composite, Dimension, FontStyle, Line, Polygon, Polyline, Rectangle, Text, TextAlignment,
        VerticalAlignment,
    };
    pub use crate::math::{Point2, Vector2, VectorExt, EPSILON};
    pub use crate::properties::{Color, Fill, LineType, Outline};
    pub use crate::render::{DrawCommand, DrawList, RenderContext};
    pub use crate::settings::{DimensionDefaults, KernelSettings};
    pub use crate::transform::{Transform2D, TransformBy};
}
