//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders expanded configurations as a standalone HTML page: a
//! summary per configuration followed by a table with one row per
//! combination, in dispatch order.
//!
//! 此模块将展开后的配置渲染为独立的 HTML 页面：每个配置一个摘要，
//! 随后是按调度顺序每个组合一行的表格。

use anyhow::{Context, Result};
use maud::{html, Markup, DOCTYPE};
use std::fs;
use std::path::Path;

use crate::engine::config::Configuration;
use crate::engine::expansion::MatrixSummary;
use crate::engine::planner::DispatchPlan;
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 2em; color: #222; }
h1 { font-size: 1.6em; }
h2 { font-size: 1.2em; margin-top: 2em; }
.summary { color: #555; margin-bottom: 0.8em; }
.empty { color: #b36b00; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #ddd; padding: 6px 10px; text-align: left; }
th { background: #f5f5f5; }
td.index { color: #888; width: 4em; text-align: right; }
footer { margin-top: 3em; color: #999; font-size: 0.85em; }
"#;

/// Renders the report page. Each configuration is paired with the dispatch
/// plan of this runner, so a sharded run reports only its own share.
///
/// 渲染报告页面。每个配置都与当前运行器的调度计划配对，因此拆分运行只报告自己的部分。
pub fn render_html_report(plans: &[(&Configuration, &DispatchPlan)], locale: &str) -> Markup {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title", locale = locale)) }
                style { (maud::PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.title", locale = locale)) }
                @for (config, plan) in plans {
                    (render_configuration(config, plan, locale))
                }
                footer { (t!("html_report.generated_at", locale = locale, time = generated_at)) }
            }
        }
    }
}

fn render_configuration(config: &Configuration, plan: &DispatchPlan, locale: &str) -> Markup {
    let summary = MatrixSummary::of(config);

    html! {
        section {
            h2 { (config.display_name()) }
            div.summary { (summary.to_string()) }
            @if plan.is_distributed {
                div.summary {
                    (t!(
                        "runner_share",
                        locale = locale,
                        count = plan.combinations.len(),
                        total = plan.total_combinations
                    ))
                }
            }
            @if plan.total_combinations == 0 {
                p.empty { (t!("empty_matrix", locale = locale)) }
            } @else {
                table {
                    thead {
                        tr {
                            th { "#" }
                            th { (t!("html_report.header.device", locale = locale)) }
                            th { (t!("html_report.header.api", locale = locale)) }
                            th { (t!("html_report.header.language", locale = locale)) }
                            th { (t!("html_report.header.orientation", locale = locale)) }
                        }
                    }
                    tbody {
                        @for (i, c) in &plan.combinations {
                            tr {
                                td.index { (i + 1) }
                                td { (c.device.display_name) }
                                td { "Android " (c.api.display_name) " (API " (c.api.id) ")" }
                                td { (c.language.display_name) " (" (c.language.id) ")" }
                                td { (c.orientation.display_name) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Writes the HTML report for `plans` to `output_path`.
///
/// # Errors / 错误
/// Fails when the file cannot be written.
/// 无法写入文件时返回错误。
pub fn generate_html_report(
    plans: &[(&Configuration, &DispatchPlan)],
    output_path: &Path,
    locale: &str,
) -> Result<()> {
    let markup = render_html_report(plans, locale);
    fs::write(output_path, markup.into_string())
        .with_context(|| t!("write_failed", locale = locale, path = output_path.display()).to_string())?;
    Ok(())
}
