//! # Default Configuration Generator / 默认配置生成器
//!
//! Builds the two ready-to-use sample configurations offered before a user
//! has configured anything. Each preset picks a small, fixed number of types
//! per dimension instead of enabling the whole catalog, which would schedule
//! thousands of runs.
//!
//! 构建在用户尚未进行任何配置时提供的两个开箱即用的示例配置。
//! 每个预设在每个维度只选择少量固定数目的类型，而不是启用整个目录。

use crate::engine::catalog::CatalogDomains;
use crate::engine::config::Configuration;
use crate::engine::error::{MatrixError, Result};
use crate::engine::models::{DimensionKind, Type};

/// Oldest API level the sample presets will pick.
/// 示例预设会选择的最低 API 级别。
pub const MIN_SAMPLE_API_LEVEL: u32 = 19;

/// How many types a sample preset enables per dimension.
/// 示例预设在每个维度启用的类型数量。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePreset {
    pub name: &'static str,
    pub devices: usize,
    pub api_levels: usize,
    pub languages: usize,
    pub orientations: usize,
}

impl SamplePreset {
    pub fn quota(&self, kind: DimensionKind) -> usize {
        match kind {
            DimensionKind::Device => self.devices,
            DimensionKind::Api => self.api_levels,
            DimensionKind::Language => self.languages,
            DimensionKind::Orientation => self.orientations,
        }
    }

    /// The combination count every configuration built from this preset has.
    pub fn combination_count(&self) -> usize {
        self.devices * self.api_levels * self.languages * self.orientations
    }
}

/// The small curated preset: 2 × 2 × 1 × 1.
pub const SPARK_PRESET: SamplePreset = SamplePreset {
    name: "Sample Spark configuration",
    devices: 2,
    api_levels: 2,
    languages: 1,
    orientations: 1,
};

/// The broader preset: 3 × 3 × 1 × 2.
pub const BROAD_PRESET: SamplePreset = SamplePreset {
    name: "Sample configuration",
    devices: 3,
    api_levels: 3,
    languages: 1,
    orientations: 2,
};

/// The presets [`generate_defaults`] builds, in output order.
pub const SAMPLE_PRESETS: [SamplePreset; 2] = [SPARK_PRESET, BROAD_PRESET];

/// Generates the two sample configurations, smaller preset first.
///
/// Fails with [`MatrixError::InsufficientCatalog`] when a dimension has fewer
/// usable types than a preset needs; a smaller matrix is never substituted.
///
/// 生成两个示例配置，较小的预设在前。当某个维度可用类型少于预设所需时，
/// 返回 [`MatrixError::InsufficientCatalog`]，绝不会用更小的矩阵替代。
pub fn generate_defaults(domains: &CatalogDomains) -> Result<Vec<Configuration>> {
    generate_defaults_with_languages(domains, Vec::new())
}

/// [`generate_defaults`] for a project that only ships `supported_languages`.
pub fn generate_defaults_with_languages(
    domains: &CatalogDomains,
    supported_languages: Vec<String>,
) -> Result<Vec<Configuration>> {
    SAMPLE_PRESETS
        .iter()
        .map(|preset| build_preset(preset, domains, supported_languages.clone()))
        .collect()
}

/// Builds one sample configuration for `preset`.
pub fn build_preset(
    preset: &SamplePreset,
    domains: &CatalogDomains,
    supported_languages: Vec<String>,
) -> Result<Configuration> {
    let mut config =
        Configuration::new(preset.name, domains, supported_languages).with_counted_name(true);

    for kind in DimensionKind::ALL {
        let ids = select(kind, config.dimension(kind).full_domain(), preset.quota(kind))?;
        config.enable(kind, &ids)?;
    }

    tracing::info!(
        preset = preset.name,
        combinations = config.device_configuration_count(),
        "generated sample configuration"
    );
    Ok(config)
}

/// Picks `count` ids from `domain`. Default-tagged entries come first, the
/// rest follow in recency order: last-listed devices, highest API levels,
/// alphabetical languages, catalog-order orientations.
fn select(kind: DimensionKind, domain: &[Type], count: usize) -> Result<Vec<String>> {
    let mut candidates: Vec<&Type> = domain
        .iter()
        .filter(|t| match kind {
            DimensionKind::Api => t.api_level().is_some_and(|l| l >= MIN_SAMPLE_API_LEVEL),
            _ => true,
        })
        .collect();

    match kind {
        DimensionKind::Device => candidates.reverse(),
        DimensionKind::Api | DimensionKind::Language => {
            candidates.sort_by(|a, b| kind.compare(a, b))
        }
        DimensionKind::Orientation => {}
    }
    candidates.sort_by_key(|t| !t.is_default());

    if candidates.len() < count {
        return Err(MatrixError::InsufficientCatalog {
            dimension: kind,
            required: count,
            available: candidates.len(),
        });
    }

    Ok(candidates
        .into_iter()
        .take(count)
        .map(|t| t.id.clone())
        .collect())
}
