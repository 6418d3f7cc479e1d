//! # Reporting Module / 报告模块
//!
//! This module handles the display of configurations and their expansions in
//! multiple formats: colorful, localised console listings, a styled HTML page,
//! and JSON for machine consumers.
//!
//! 此模块以多种格式展示配置及其展开结果：彩色本地化的控制台列表、
//! 样式化的 HTML 页面以及供机器使用的 JSON。

pub mod console;
pub mod html;
pub mod json;

// Re-export common reporting functions
pub use console::{print_configuration_header, print_dispatch_plan, print_unsupported_pairs};
pub use html::generate_html_report;
