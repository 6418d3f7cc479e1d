//! # Dispatch Planner Module / 调度计划模块
//!
//! This module splits an expansion across several parallel CI runners so
//! that each runner dispatches its own share of farm runs.
//!
//! 此模块将展开结果拆分到多个并行 CI 运行器上，
//! 使每个运行器只调度属于自己的设备云运行。

use anyhow::{bail, Result};

use crate::engine::models::Combination;

/// The share of an expansion one runner dispatches.
/// 一个运行器负责调度的展开结果份额。
#[derive(Debug)]
pub struct DispatchPlan {
    /// `(position in the full expansion, combination)`, in expansion order.
    /// `(在完整展开中的位置, 组合)`，按展开顺序排列。
    pub combinations: Vec<(usize, Combination)>,
    /// Size of the full expansion before sharding.
    /// 拆分前完整展开的大小。
    pub total_combinations: usize,
    /// Whether the combinations are distributed across multiple runners (CI environment).
    /// 组合是否分布在多个运行器上（CI 环境）。
    pub is_distributed: bool,
}

/// Creates a dispatch plan for an expansion.
///
/// Combination `i` belongs to runner `i % total_runners`. Both arguments must
/// be given together, and the index must be below the total.
///
/// 为展开结果创建调度计划。组合 `i` 属于运行器 `i % total_runners`。
///
/// # Arguments
/// * `combinations` - The full expansion, in expansion order
/// * `total_runners` - Optional total number of runners for distributed execution
/// * `runner_index` - Optional index of this runner (0-based)
pub fn plan_dispatch(
    combinations: Vec<Combination>,
    total_runners: Option<usize>,
    runner_index: Option<usize>,
) -> Result<DispatchPlan> {
    let total_combinations = combinations.len();
    let indexed = combinations.into_iter().enumerate();

    let (combinations, is_distributed) = match (total_runners, runner_index) {
        (Some(total), Some(index)) => {
            if total == 0 {
                bail!("Total runners must be at least 1.");
            }
            if index >= total {
                bail!("Runner index must be less than total runners.");
            }
            let shard: Vec<_> = indexed.filter(|(i, _)| i % total == index).collect();
            (shard, true)
        }
        (None, None) => (indexed.collect(), false),
        _ => bail!("Both --total-runners and --runner-index must be provided."),
    };

    tracing::debug!(
        assigned = combinations.len(),
        total = total_combinations,
        distributed = is_distributed,
        "planned dispatch"
    );

    Ok(DispatchPlan {
        combinations,
        total_combinations,
        is_distributed,
    })
}
