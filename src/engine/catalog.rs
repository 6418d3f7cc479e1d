//! # Catalog Adapter Module / 目录适配器模块
//!
//! Converts the device-farm backend's device catalog into the four ordered
//! dimension domains the engine works on, and keeps the latest converted
//! snapshot in an explicitly passed [`CatalogCache`].
//!
//! 将设备云后端的设备目录转换为引擎所使用的四个有序维度域，
//! 并将最新转换的快照保存在显式传递的 [`CatalogCache`] 中。

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, RwLock};

use crate::engine::models::{DimensionKind, Type};

/// A device model as reported by the backend.
/// 后端报告的设备型号。
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidModel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub manufacturer: String,
    /// API level ids this model can run. Empty means unrestricted.
    #[serde(default)]
    pub supported_version_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `"PHYSICAL"` or `"VIRTUAL"`.
    #[serde(default)]
    pub form: Option<String>,
}

/// An Android OS release as reported by the backend.
/// 后端报告的 Android 系统版本。
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidVersion {
    pub id: String,
    #[serde(default)]
    pub api_level: Option<u32>,
    #[serde(default)]
    pub version_string: String,
    #[serde(default)]
    pub code_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Orientation {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfiguration {
    #[serde(default)]
    pub locales: Vec<Locale>,
    #[serde(default)]
    pub orientations: Vec<Orientation>,
}

/// The backend's device catalog response.
/// 后端返回的设备目录响应。
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCatalog {
    #[serde(default)]
    pub models: Vec<AndroidModel>,
    #[serde(default)]
    pub versions: Vec<AndroidVersion>,
    #[serde(default)]
    pub runtime_configuration: RuntimeConfiguration,
}

/// The full domain of every dimension, built from one catalog fetch.
/// 由一次目录获取构建的所有维度的完整域。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDomains {
    pub devices: Vec<Type>,
    pub apis: Vec<Type>,
    pub languages: Vec<Type>,
    pub orientations: Vec<Type>,
    /// `(device id, supported api ids)` in catalog order.
    supported_versions: Vec<(String, BTreeSet<String>)>,
}

impl CatalogDomains {
    /// Builds domains directly from already converted types. Every device is
    /// treated as supporting every API level.
    pub fn new(
        devices: Vec<Type>,
        apis: Vec<Type>,
        languages: Vec<Type>,
        orientations: Vec<Type>,
    ) -> Self {
        Self {
            devices,
            apis,
            languages,
            orientations,
            supported_versions: Vec::new(),
        }
    }

    /// Converts a backend catalog. Catalog order is kept for every dimension;
    /// a repeated id keeps its first occurrence.
    ///
    /// 转换后端目录。每个维度都保持目录顺序；重复的 id 保留第一次出现的条目。
    pub fn from_catalog(catalog: &DeviceCatalog) -> Self {
        let devices = dedup(
            DimensionKind::Device,
            catalog.models.iter().map(|m| {
                let display = [m.manufacturer.as_str(), m.name.as_str()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ");
                let display = if display.is_empty() { m.id.clone() } else { display };
                tagged(Type::new(&m.id, display), &m.tags)
            }),
        );

        let apis = dedup(
            DimensionKind::Api,
            catalog.versions.iter().map(|v| {
                let id = v.api_level.map(|l| l.to_string()).unwrap_or_else(|| v.id.clone());
                let display = match v.code_name.as_deref() {
                    Some(code) if !code.is_empty() => format!("{} - {}", v.version_string, code),
                    _ => v.version_string.clone(),
                };
                tagged(Type::new(id, display), &v.tags)
            }),
        );

        let languages = dedup(
            DimensionKind::Language,
            catalog
                .runtime_configuration
                .locales
                .iter()
                .map(|l| tagged(Type::new(&l.id, non_empty(&l.name, &l.id)), &l.tags)),
        );

        let orientations = dedup(
            DimensionKind::Orientation,
            catalog
                .runtime_configuration
                .orientations
                .iter()
                .map(|o| tagged(Type::new(&o.id, non_empty(&o.name, &o.id)), &o.tags)),
        );

        // Models list backend version ids; API types are keyed by API level.
        let api_id_of = |version_id: &str| {
            catalog
                .versions
                .iter()
                .find(|v| v.id == version_id)
                .and_then(|v| v.api_level)
                .map(|l| l.to_string())
                .unwrap_or_else(|| version_id.to_string())
        };
        let supported_versions = catalog
            .models
            .iter()
            .map(|m| {
                (
                    m.id.clone(),
                    m.supported_version_ids.iter().map(|v| api_id_of(v)).collect(),
                )
            })
            .collect();

        tracing::info!(
            devices = devices.len(),
            apis = apis.len(),
            languages = languages.len(),
            orientations = orientations.len(),
            "converted device catalog"
        );

        Self {
            devices,
            apis,
            languages,
            orientations,
            supported_versions,
        }
    }

    /// The domain for `kind`.
    pub fn domain(&self, kind: DimensionKind) -> &[Type] {
        match kind {
            DimensionKind::Device => &self.devices,
            DimensionKind::Api => &self.apis,
            DimensionKind::Language => &self.languages,
            DimensionKind::Orientation => &self.orientations,
        }
    }

    /// Whether the catalog lists `api_id` as runnable on `device_id`.
    /// Devices the catalog says nothing about are treated as supported.
    ///
    /// 目录是否将 `api_id` 列为可在 `device_id` 上运行。
    pub fn is_supported(&self, device_id: &str, api_id: &str) -> bool {
        match self.supported_versions.iter().find(|(id, _)| id == device_id) {
            Some((_, versions)) => versions.is_empty() || versions.contains(api_id),
            None => true,
        }
    }
}

fn non_empty(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn tagged(mut ty: Type, tags: &[String]) -> Type {
    ty.tags.extend(tags.iter().map(|t| t.to_ascii_lowercase()));
    ty
}

fn dedup(kind: DimensionKind, types: impl Iterator<Item = Type>) -> Vec<Type> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for ty in types {
        if seen.insert(ty.id.clone()) {
            out.push(ty);
        } else {
            tracing::warn!(dimension = %kind, id = %ty.id, "dropping duplicate catalog entry");
        }
    }
    out
}

/// Holds the domains converted from the most recent catalog fetch.
///
/// A refresh builds the new domains completely before swapping them in, so a
/// concurrent [`CatalogCache::snapshot`] sees either the previous or the new
/// catalog, never a mix.
///
/// 保存最近一次目录获取转换得到的域。刷新时会先完整构建新的域再整体替换，
/// 因此并发的 [`CatalogCache::snapshot`] 只会看到旧目录或新目录。
#[derive(Debug, Default)]
pub struct CatalogCache {
    current: RwLock<Option<Arc<CatalogDomains>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts `catalog` and replaces the cached domains with the result.
    pub fn refresh(&self, catalog: &DeviceCatalog) -> Arc<CatalogDomains> {
        let domains = Arc::new(CatalogDomains::from_catalog(catalog));
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(Arc::clone(&domains));
        domains
    }

    /// The domains of the latest fetch, if any fetch happened yet.
    pub fn snapshot(&self) -> Option<Arc<CatalogDomains>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Drops the cached domains.
    pub fn invalidate(&self) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
    }
}
