//! 图元定义
//!
//! 直接存储几何的基本图元：
//! - 线段 (Line)
//! - 多段线 (Polyline) / 多边形 (Polygon)
//! - 文本 (Text)
//!
//! 由参数派生几何的图元（每次查询时重新生成，不缓存）：
//! - 矩形 (Rectangle)
//! - 尺寸标注 (Dimension)
//!
//! 以及聚合子图元的组合体 (Composite)。

mod composite;
mod dimension;
mod line;
mod polyline;
mod rectangle;
mod text;

pub use composite::Composite;
pub use dimension::Dimension;
pub use line::Line;
pub use polyline::{Polygon, Polyline};
pub use rectangle::Rectangle;
pub use text::{FontStyle, Text, TextAlignment, VerticalAlignment};
