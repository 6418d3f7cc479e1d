//! # Engine Errors / 引擎错误
//!
//! Every fallible engine operation returns [`MatrixError`]. Errors are raised
//! synchronously at the call that triggers them and are never downgraded to a
//! log line: a wrong matrix means wrong runs billed on the device farm.
//!
//! 每个可能失败的引擎操作都返回 [`MatrixError`]。错误在触发它的调用处同步抛出，
//! 绝不会被降级为日志。

use thiserror::Error;

use crate::engine::models::DimensionKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// `enable` was handed an id that is not part of the domain it was given.
    /// `enable` 收到了不属于给定域的 id。
    #[error("unknown {dimension} type '{id}'")]
    UnknownType { dimension: DimensionKind, id: String },

    /// The catalog cannot fill one of the sample presets.
    /// 目录无法满足某个示例预设所需的数量。
    #[error("catalog has {available} usable {dimension} types, sample preset needs {required}")]
    InsufficientCatalog {
        dimension: DimensionKind,
        required: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
