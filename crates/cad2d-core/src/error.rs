//! 内核错误定义
//!
//! 几何运算本身是全函数，不产生错误；这里只覆盖配置读取和编辑器回写。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("{shape} has no control point named '{name}'")]
    UnknownControlPoint { shape: &'static str, name: String },

    #[error("Vertex index {index} out of range (polyline has {len} points)")]
    VertexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, CadError>;
