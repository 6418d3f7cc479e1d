//! # Engine Module / 引擎模块
//!
//! This module contains the test-matrix engine: data models, the catalog
//! adapter, configurations, expansion, sample generation and dispatch planning.
//!
//! 此模块包含测试矩阵引擎：数据模型、目录适配器、配置、展开、示例生成和调度计划。

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod error;
pub mod expansion;
pub mod models;
pub mod planner;

// Re-exports
pub use catalog::{CatalogCache, CatalogDomains, DeviceCatalog};
pub use config::Configuration;
pub use defaults::generate_defaults;
pub use error::MatrixError;
pub use expansion::{expand, render_label, MatrixSummary};
pub use models::{Combination, Dimension, DimensionKind, Type};
