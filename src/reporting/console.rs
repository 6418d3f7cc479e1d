//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints configurations and their expansions to the console,
//! with colored, localised output.
//!
//! 此模块将配置及其展开结果以彩色、本地化的形式打印到控制台。

use colored::*;

use crate::engine::catalog::CatalogDomains;
use crate::engine::config::Configuration;
use crate::engine::expansion::{render_label, MatrixSummary};
use crate::engine::models::{Combination, DimensionKind};
use crate::engine::planner::DispatchPlan;
use crate::infra::t;

/// Prints the configuration's display name and its matrix summary line.
///
/// ```text
/// == Sample Spark configuration (4) ==
///    2 devices × 2 API levels × 1 language × 1 orientation = 4 combinations
/// ```
pub fn print_configuration_header(config: &Configuration, locale: &str) {
    println!("\n{}", format!("== {} ==", config.display_name()).bold());
    let summary = MatrixSummary::of(config);
    if summary.is_empty() {
        println!("   {}", summary.to_string().dimmed());
        println!("   {}", t!("empty_matrix", locale = locale).yellow());
    } else {
        println!("   {}", summary.to_string().cyan());
    }
}

/// Prints the combinations of a dispatch plan, one numbered line each. The
/// number is the position in the full expansion, so shards from different
/// runners can be told apart.
///
/// 打印调度计划中的组合，每行一个并带有编号。编号是在完整展开中的位置。
pub fn print_dispatch_plan(plan: &DispatchPlan, locale: &str) {
    if plan.is_distributed {
        println!(
            "   {}",
            t!(
                "runner_share",
                locale = locale,
                count = plan.combinations.len(),
                total = plan.total_combinations
            )
            .bold()
        );
    }

    let width = plan.total_combinations.to_string().len();
    for (index, combination) in &plan.combinations {
        println!(
            "   [{:>width$}/{}] {}",
            index + 1,
            plan.total_combinations,
            render_label(combination),
            width = width
        );
    }
}

/// Warns about device/API pairs the catalog does not list as supported. The
/// pairs stay in the expansion; the farm decides what to do with them.
///
/// 对目录未列为受支持的设备/API 组合发出警告。这些组合仍保留在展开结果中。
pub fn print_unsupported_pairs(
    domains: &CatalogDomains,
    combinations: &[Combination],
    locale: &str,
) {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for c in combinations {
        if !domains.is_supported(&c.device.id, &c.api.id) {
            let pair = (c.device.display_name.clone(), c.api.id.clone());
            if !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }
    }

    for (device, api) in &pairs {
        let message = t!("unsupported_pair", locale = locale, device = device, api = api);
        println!("   {} {}", "⚠".yellow(), message.yellow());
    }
}

/// Prints the enabled ids of every dimension, used for generated presets.
pub fn print_enabled_types(config: &Configuration) {
    for kind in DimensionKind::ALL {
        let dimension = config.dimension(kind);
        let names: Vec<String> = dimension
            .enabled_types()
            .into_iter()
            .map(|t| t.display_name)
            .collect();
        println!(
            "   - {:<13} {}",
            format!("{}:", dimension.name()),
            names.join(", ")
        );
    }
}
