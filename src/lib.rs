//! # Device Matrix Library / Device Matrix 库
//!
//! This library provides the test-matrix engine behind the `device-matrix`
//! tool: it models device, API level, language and orientation dimensions,
//! expands a configuration into the ordered list of device-farm runs, and
//! generates bounded sample configurations from a large device catalog.
//!
//! 此库为 `device-matrix` 工具提供测试矩阵引擎：它对设备、API 级别、语言和屏幕方向
//! 维度建模，将配置展开为有序的设备云运行列表，并从大型设备目录中生成有界的示例配置。
//!
//! ## Modules / 模块
//!
//! - `engine` - Data models, catalog adapter, expansion engine and sample generator
//! - `infra` - Infrastructure services like file loading and logging
//! - `reporting` - Console, HTML and JSON rendering of expansions
//! - `cli` - Command-line interface and commands
//!
//! - `engine` - 数据模型、目录适配器、展开引擎和示例生成器
//! - `infra` - 基础设施服务，如文件加载和日志
//! - `reporting` - 展开结果的控制台、HTML 和 JSON 渲染
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod engine;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use engine::catalog;
pub use engine::config;
pub use engine::defaults;
pub use engine::error;
pub use engine::expansion;
pub use engine::models;

/// Detects the console language from the system locale.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
pub fn detect_locale() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    if available_locales.contains(&locale.as_str()) {
        locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
            .to_string()
    }
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
