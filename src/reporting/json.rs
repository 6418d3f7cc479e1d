//! # JSON Reporting Module / JSON 报告模块
//!
//! Machine readable output for the execution collaborator that schedules
//! farm runs: one document per configuration, combinations in dispatch order.
//!
//! 面向调度设备云运行的执行方的机器可读输出：每个配置一个文档，组合按调度顺序排列。

use anyhow::{Context, Result};
use serde::Serialize;

use crate::engine::config::{Configuration, ConfigurationSpec};
use crate::engine::expansion::{CombinationRecord, MatrixSummary};
use crate::engine::planner::DispatchPlan;

#[derive(Debug, Serialize)]
pub struct ExpansionReport {
    pub name: String,
    pub display_name: String,
    pub summary: MatrixSummary,
    /// Present when the expansion was sharded across runners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_combinations: Option<usize>,
    pub combinations: Vec<CombinationRecord>,
}

impl ExpansionReport {
    pub fn new(config: &Configuration, plan: &DispatchPlan) -> Self {
        Self {
            name: config.name().to_string(),
            display_name: config.display_name(),
            summary: MatrixSummary::of(config),
            total_combinations: plan.is_distributed.then_some(plan.total_combinations),
            combinations: plan
                .combinations
                .iter()
                .map(|(i, c)| CombinationRecord::new(*i, c))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DefaultsReport {
    pub display_name: String,
    pub combinations: usize,
    #[serde(flatten)]
    pub spec: ConfigurationSpec,
}

impl DefaultsReport {
    pub fn new(config: &Configuration) -> Self {
        Self {
            display_name: config.display_name(),
            combinations: config.device_configuration_count(),
            spec: config.to_spec(),
        }
    }
}

/// Pretty-printed JSON for any report.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize report as JSON")
}
