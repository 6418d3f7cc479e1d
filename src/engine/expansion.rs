//! # Expansion Engine / 展开引擎
//!
//! Turns a [`Configuration`] into the ordered list of [`Combination`]s that
//! will be dispatched to the device farm, one run per combination.
//!
//! Nesting, outermost to innermost, is device, API level, language,
//! orientation. Each dimension contributes its enabled types in the order
//! given by [`DimensionKind::compare`]. The resulting sequence is observable
//! output: farm dispatch follows it exactly.
//!
//! 将 [`Configuration`] 转换为有序的 [`Combination`] 列表，每个组合对应设备云上的一次运行。
//! 嵌套顺序由外到内依次为：设备、API 级别、语言、屏幕方向。

use serde::Serialize;
use std::fmt;

use crate::engine::config::Configuration;
use crate::engine::models::{Combination, DimensionKind};

/// Enumerates every combination of `config`'s enabled types.
///
/// The result always holds exactly
/// [`Configuration::device_configuration_count`] entries. An empty enabled
/// set anywhere yields an empty list, which is a valid result.
///
/// 枚举 `config` 中所有启用类型的组合。结果数量恰好等于
/// [`Configuration::device_configuration_count`]；任意维度为空时返回空列表，这是合法结果。
pub fn expand(config: &Configuration) -> Vec<Combination> {
    let devices = config.device_dimension().enabled_types();
    let apis = config.api_dimension().enabled_types();
    let languages = config.language_dimension().enabled_types();
    let orientations = config.orientation_dimension().enabled_types();

    let mut combinations = Vec::with_capacity(config.device_configuration_count());
    for device in &devices {
        for api in &apis {
            for language in &languages {
                for orientation in &orientations {
                    combinations.push(Combination {
                        device: device.clone(),
                        api: api.clone(),
                        language: language.clone(),
                        orientation: orientation.clone(),
                    });
                }
            }
        }
    }

    tracing::debug!(
        configuration = %config.name(),
        combinations = combinations.len(),
        "expanded configuration"
    );
    combinations
}

/// Renders the pipe-delimited label of a combination, e.g.
/// `Google Nexus5 | Android 4.4 - KitKat (API 19) | English (en) | Portrait`.
///
/// 渲染组合的管道分隔标签。
pub fn render_label(combination: &Combination) -> String {
    format!(
        "{} | Android {} (API {}) | {} ({}) | {}",
        combination.device.display_name,
        combination.api.display_name,
        combination.api.id,
        combination.language.display_name,
        combination.language.id,
        combination.orientation.display_name,
    )
}

/// Expands `config` and renders every label, in expansion order.
pub fn expand_labels(config: &Configuration) -> Vec<String> {
    expand(config).iter().map(render_label).collect()
}

/// Per-dimension enabled counts of a configuration and their product.
/// 配置中各维度的启用数量及其乘积。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixSummary {
    pub devices: usize,
    pub api_levels: usize,
    pub languages: usize,
    pub orientations: usize,
    pub total: usize,
}

impl MatrixSummary {
    pub fn of(config: &Configuration) -> Self {
        let count = |kind| config.dimension(kind).enabled_count();
        Self {
            devices: count(DimensionKind::Device),
            api_levels: count(DimensionKind::Api),
            languages: count(DimensionKind::Language),
            orientations: count(DimensionKind::Orientation),
            total: config.device_configuration_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl fmt::Display for MatrixSummary {
    /// `2 devices × 2 API levels × 1 language × 1 orientation = 4 combinations`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            (self.devices, DimensionKind::Device),
            (self.api_levels, DimensionKind::Api),
            (self.languages, DimensionKind::Language),
            (self.orientations, DimensionKind::Orientation),
        ]
        .iter()
        .map(|(n, kind)| format!("{} {}", n, kind.noun(*n)))
        .collect::<Vec<_>>()
        .join(" × ");
        let noun = if self.total == 1 { "combination" } else { "combinations" };
        write!(f, "{} = {} {}", parts, self.total, noun)
    }
}

/// A flattened, serializable row of an expansion.
/// 展开结果中扁平化、可序列化的一行。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinationRecord {
    pub index: usize,
    pub device: String,
    pub api: String,
    pub language: String,
    pub orientation: String,
    pub label: String,
}

impl CombinationRecord {
    /// `index` is zero-based position in the expansion.
    pub fn new(index: usize, combination: &Combination) -> Self {
        Self {
            index,
            device: combination.device.id.clone(),
            api: combination.api.id.clone(),
            language: combination.language.id.clone(),
            orientation: combination.orientation.id.clone(),
            label: render_label(combination),
        }
    }
}

/// Every combination of `config` as records, in expansion order.
pub fn expand_records(config: &Configuration) -> Vec<CombinationRecord> {
    expand(config)
        .iter()
        .enumerate()
        .map(|(i, c)| CombinationRecord::new(i, c))
        .collect()
}
