//! # Configuration Module / 配置模块
//!
//! A [`Configuration`] bundles the four dimensions of one test-matrix
//! definition. [`MatrixFile`] and [`ConfigurationSpec`] are the serde shapes
//! of `DeviceMatrix.toml`, which stores configurations by id and is resolved
//! against a catalog when loaded.
//!
//! [`Configuration`] 将一个测试矩阵定义的四个维度打包在一起。
//! [`MatrixFile`] 和 [`ConfigurationSpec`] 是 `DeviceMatrix.toml` 的 serde 结构，
//! 它按 id 存储配置，并在加载时根据目录进行解析。

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::catalog::CatalogDomains;
use crate::engine::error::Result;
use crate::engine::models::{Dimension, DimensionKind, Type};

/// One test-matrix definition.
/// 一个测试矩阵定义。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    name: String,
    /// When set, the display name carries the current combination count.
    counted_name: bool,
    supported_languages: Vec<String>,
    device: Dimension,
    api: Dimension,
    language: Dimension,
    orientation: Dimension,
}

impl Configuration {
    /// Creates a configuration over `domains` with every dimension empty.
    ///
    /// A non-empty `supported_languages` list restricts the language domain to
    /// the catalog locales whose id it names; an empty list keeps them all.
    ///
    /// 基于 `domains` 创建一个所有维度都为空的配置。
    /// 非空的 `supported_languages` 会将语言域限制为其列出的目录语言。
    pub fn new(
        name: impl Into<String>,
        domains: &CatalogDomains,
        supported_languages: Vec<String>,
    ) -> Self {
        let languages: Vec<Type> = if supported_languages.is_empty() {
            domains.languages.clone()
        } else {
            domains
                .languages
                .iter()
                .filter(|l| supported_languages.iter().any(|s| *s == l.id))
                .cloned()
                .collect()
        };

        Self {
            name: name.into(),
            counted_name: false,
            supported_languages,
            device: Dimension::new(DimensionKind::Device, domains.devices.clone()),
            api: Dimension::new(DimensionKind::Api, domains.apis.clone()),
            language: Dimension::new(DimensionKind::Language, languages),
            orientation: Dimension::new(DimensionKind::Orientation, domains.orientations.clone()),
        }
    }

    /// Makes [`Configuration::display_name`] embed the combination count.
    pub fn with_counted_name(mut self, counted: bool) -> Self {
        self.counted_name = counted;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_counted_name(&self) -> bool {
        self.counted_name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// A copy of this configuration under a new name. The copy never embeds a
    /// count, it is a user-owned matrix.
    pub fn duplicate(&self, name: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.name = name.into();
        copy.counted_name = false;
        copy
    }

    /// The name shown to users. Counted configurations append the current
    /// combination count, computed on every call.
    ///
    /// 展示给用户的名称。带计数的配置会附加当前组合数量，每次调用都重新计算。
    pub fn display_name(&self) -> String {
        if self.counted_name {
            format!("{} ({})", self.name, self.device_configuration_count())
        } else {
            self.name.clone()
        }
    }

    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    pub fn dimension(&self, kind: DimensionKind) -> &Dimension {
        match kind {
            DimensionKind::Device => &self.device,
            DimensionKind::Api => &self.api,
            DimensionKind::Language => &self.language,
            DimensionKind::Orientation => &self.orientation,
        }
    }

    pub fn dimension_mut(&mut self, kind: DimensionKind) -> &mut Dimension {
        match kind {
            DimensionKind::Device => &mut self.device,
            DimensionKind::Api => &mut self.api,
            DimensionKind::Language => &mut self.language,
            DimensionKind::Orientation => &mut self.orientation,
        }
    }

    pub fn device_dimension(&self) -> &Dimension {
        &self.device
    }

    pub fn api_dimension(&self) -> &Dimension {
        &self.api
    }

    pub fn language_dimension(&self) -> &Dimension {
        &self.language
    }

    pub fn orientation_dimension(&self) -> &Dimension {
        &self.orientation
    }

    /// Replaces the enabled set of one dimension, see [`Dimension::enable`].
    pub fn enable<S: AsRef<str>>(&mut self, kind: DimensionKind, ids: &[S]) -> Result<()> {
        self.dimension_mut(kind).enable(ids)
    }

    /// Number of combinations this configuration expands to.
    /// 此配置展开后的组合数量。
    pub fn device_configuration_count(&self) -> usize {
        DimensionKind::ALL
            .iter()
            .map(|kind| self.dimension(*kind).enabled_count())
            .product()
    }

    /// The persisted form of this configuration.
    pub fn to_spec(&self) -> ConfigurationSpec {
        ConfigurationSpec {
            name: self.name.clone(),
            counted_name: self.counted_name,
            supported_languages: self.supported_languages.clone(),
            devices: self.device.enabled_ids(),
            api_levels: self.api.enabled_ids(),
            languages: self.language.enabled_ids(),
            orientations: self.orientation.enabled_ids(),
        }
    }
}

/// A configuration as stored in `DeviceMatrix.toml`: a name plus the enabled
/// ids of each dimension.
///
/// 存储在 `DeviceMatrix.toml` 中的配置：名称以及每个维度启用的 id。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConfigurationSpec {
    pub name: String,
    #[serde(default)]
    pub counted_name: bool,
    #[serde(default)]
    pub supported_languages: Vec<String>,
    #[serde(default)]
    pub devices: Vec<String>,
    #[serde(default)]
    pub api_levels: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub orientations: Vec<String>,
}

impl ConfigurationSpec {
    /// Resolves every id against `domains`. Unknown ids fail with
    /// [`crate::engine::error::MatrixError::UnknownType`].
    ///
    /// 根据 `domains` 解析每个 id；未知 id 会返回 `UnknownType` 错误。
    pub fn resolve(&self, domains: &CatalogDomains) -> Result<Configuration> {
        let mut config = Configuration::new(&self.name, domains, self.supported_languages.clone())
            .with_counted_name(self.counted_name);
        config.enable(DimensionKind::Device, &self.devices)?;
        config.enable(DimensionKind::Api, &self.api_levels)?;
        config.enable(DimensionKind::Language, &self.languages)?;
        config.enable(DimensionKind::Orientation, &self.orientations)?;
        Ok(config)
    }
}

/// The top-level structure of `DeviceMatrix.toml`.
/// `DeviceMatrix.toml` 的顶层结构。
#[derive(Debug, Deserialize, Serialize)]
pub struct MatrixFile {
    /// The language for console messages (e.g., "en", "zh-CN").
    /// When absent the system locale is used.
    ///
    /// 控制台消息的语言（例如 "en", "zh-CN"）。未指定时使用系统区域设置。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Path to the catalog JSON, relative to the matrix file.
    /// 目录 JSON 的路径，相对于矩阵文件。
    pub catalog: PathBuf,

    #[serde(default)]
    pub configurations: Vec<ConfigurationSpec>,
}
