//! # Data Models Module / 数据模型模块
//!
//! This module defines the building blocks of a test matrix: the selectable
//! [`Type`] values, the four [`DimensionKind`]s with their ordering rules, the
//! [`Dimension`] that pairs a catalog domain with its enabled subset, and the
//! [`Combination`] emitted for every scheduled run.
//!
//! 此模块定义测试矩阵的基本组成部分：可选择的 [`Type`] 值、带有排序规则的四种
//! [`DimensionKind`]、将目录域与其启用子集配对的 [`Dimension`]，以及每次计划运行
//! 所产生的 [`Combination`]。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::engine::error::{MatrixError, Result};

/// Tag marking the catalog entry a backend considers the default choice.
/// 标记后端认为是默认选项的目录条目的标签。
pub const DEFAULT_TAG: &str = "default";

/// One selectable value within a dimension, e.g. a device model or an API level.
/// 维度中的一个可选值，例如某个设备型号或 API 级别。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    /// Unique within its dimension's domain / 在其维度域内唯一
    pub id: String,
    /// Human readable name used in labels / 标签中使用的可读名称
    pub display_name: String,
    /// Special roles such as `"default"` / 特殊角色，例如 `"default"`
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Type {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Adds a tag, builder style.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_default(&self) -> bool {
        self.has_tag(DEFAULT_TAG)
    }

    /// The numeric API level encoded in the id, if there is one.
    /// id 中编码的数字 API 级别（如果有）。
    pub fn api_level(&self) -> Option<u32> {
        self.id.parse().ok()
    }
}

/// The four orthogonal axes of a test matrix.
/// 测试矩阵的四个正交轴。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKind {
    Device,
    Api,
    Language,
    Orientation,
}

impl DimensionKind {
    /// All kinds, outermost to innermost in the expansion nesting.
    pub const ALL: [DimensionKind; 4] = [
        DimensionKind::Device,
        DimensionKind::Api,
        DimensionKind::Language,
        DimensionKind::Orientation,
    ];

    /// Singular or plural noun for `count` entries of this kind.
    /// 按数量返回此类型的单数或复数名词。
    pub fn noun(self, count: usize) -> &'static str {
        let singular = count == 1;
        match self {
            DimensionKind::Device if singular => "device",
            DimensionKind::Device => "devices",
            DimensionKind::Api if singular => "API level",
            DimensionKind::Api => "API levels",
            DimensionKind::Language if singular => "language",
            DimensionKind::Language => "languages",
            DimensionKind::Orientation if singular => "orientation",
            DimensionKind::Orientation => "orientations",
        }
    }

    /// Compares two types according to this dimension's ordering rule.
    ///
    /// - Device and orientation keep catalog order, so every pair compares equal
    ///   and a stable sort leaves them untouched.
    /// - API levels sort newest first. Ids that are not numbers sort after all
    ///   numeric levels, ascending by id.
    /// - Languages sort ascending by id.
    ///
    /// 按照此维度的排序规则比较两个类型。
    pub fn compare(self, a: &Type, b: &Type) -> Ordering {
        match self {
            DimensionKind::Device | DimensionKind::Orientation => Ordering::Equal,
            DimensionKind::Api => match (a.api_level(), b.api_level()) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.id.cmp(&b.id),
            },
            DimensionKind::Language => a.id.cmp(&b.id),
        }
    }

    /// Sorts `types` in place by this dimension's ordering rule (stable).
    pub fn sort(self, types: &mut [Type]) {
        types.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun(1))
    }
}

/// A named, ordered catalog of types plus the currently enabled subset.
///
/// The full domain is shared and never changes after construction. The
/// enabled subset is only ever replaced as a whole, so a reader holding a
/// reference always sees a complete set.
///
/// 一个具名的、有序的类型目录以及当前启用的子集。
/// 完整域在构造后不再改变；启用子集只会被整体替换。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    kind: DimensionKind,
    full_domain: Arc<[Type]>,
    /// Always a subset of `full_domain`, kept in domain order.
    enabled: Vec<Type>,
}

impl Dimension {
    /// Creates a dimension over `full_domain` with nothing enabled.
    pub fn new(kind: DimensionKind, full_domain: impl Into<Arc<[Type]>>) -> Self {
        Self {
            kind,
            full_domain: full_domain.into(),
            enabled: Vec::new(),
        }
    }

    pub fn kind(&self) -> DimensionKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.noun(1)
    }

    /// Read-only view of the complete catalog for this dimension.
    /// 此维度完整目录的只读视图。
    pub fn full_domain(&self) -> &[Type] {
        &self.full_domain
    }

    /// Looks a type up in the full domain by id.
    pub fn find(&self, id: &str) -> Option<&Type> {
        self.full_domain.iter().find(|t| t.id == id)
    }

    /// Replaces the enabled set with the types of `domain` whose id is listed
    /// in `ids`, keeping `domain`'s relative order.
    ///
    /// Every id must exist in `domain` and in this dimension's full domain,
    /// otherwise [`MatrixError::UnknownType`] is returned and the enabled set is
    /// left as it was.
    ///
    /// 用 `domain` 中 id 出现在 `ids` 里的类型替换启用集合，并保持 `domain` 的相对顺序。
    /// 任何 id 不存在时返回 [`MatrixError::UnknownType`]，且启用集合保持不变。
    pub fn enable_in<S: AsRef<str>>(&mut self, domain: &[Type], ids: &[S]) -> Result<()> {
        let mut wanted = BTreeSet::new();
        for id in ids {
            let id = id.as_ref();
            let in_domain = domain.iter().any(|t| t.id == id);
            if !in_domain || self.find(id).is_none() {
                return Err(MatrixError::UnknownType {
                    dimension: self.kind,
                    id: id.to_string(),
                });
            }
            wanted.insert(id);
        }

        // Order comes from `domain`, the types themselves from the full domain.
        let enabled: Vec<Type> = domain
            .iter()
            .filter(|t| wanted.contains(t.id.as_str()))
            .filter_map(|t| self.find(&t.id).cloned())
            .collect();

        tracing::debug!(
            dimension = %self.kind,
            enabled = enabled.len(),
            domain = domain.len(),
            "replaced enabled set"
        );
        self.enabled = enabled;
        Ok(())
    }

    /// [`Dimension::enable_in`] against this dimension's own full domain.
    pub fn enable<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<()> {
        let domain = Arc::clone(&self.full_domain);
        self.enable_in(&domain, ids)
    }

    /// Enables every type of the full domain.
    pub fn enable_all(&mut self) {
        self.enabled = self.full_domain.to_vec();
    }

    /// Returns the enabled types in this dimension's expansion order,
    /// independent of the order they were enabled in.
    ///
    /// 按此维度的展开顺序返回启用的类型，与启用时的顺序无关。
    pub fn enabled_types(&self) -> Vec<Type> {
        let mut types = self.enabled.clone();
        self.kind.sort(&mut types);
        types
    }

    /// Ids of the enabled types in expansion order.
    pub fn enabled_ids(&self) -> Vec<String> {
        self.enabled_types().into_iter().map(|t| t.id).collect()
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.len()
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.iter().any(|t| t.id == id)
    }
}

/// One concrete assignment of a type to every dimension: one scheduled run.
/// 为每个维度各指定一个类型的具体组合：即一次计划中的运行。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    pub device: Type,
    pub api: Type,
    pub language: Type,
    pub orientation: Type,
}

impl Combination {
    /// The type assigned to `kind`.
    pub fn get(&self, kind: DimensionKind) -> &Type {
        match kind {
            DimensionKind::Device => &self.device,
            DimensionKind::Api => &self.api,
            DimensionKind::Language => &self.language,
            DimensionKind::Orientation => &self.orientation,
        }
    }
}
