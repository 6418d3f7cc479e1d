//! # Expand Command Module / 展开命令模块
//!
//! This module implements the `expand` command, which resolves the
//! configurations of a matrix file against its catalog and lists every
//! combination in dispatch order.
//!
//! 此模块实现 `expand` 命令：根据目录解析矩阵文件中的配置，并按调度顺序列出每个组合。

use anyhow::{bail, Context, Result};
use colored::*;

use crate::cli::{CliArgs, ExpandArgs, OutputFormat};
use crate::engine::catalog::CatalogDomains;
use crate::engine::config::{Configuration, ConfigurationSpec};
use crate::engine::expansion::expand;
use crate::engine::planner::plan_dispatch;
use crate::infra::fs::{load_catalog, load_matrix_file, resolve_catalog_path};
use crate::infra::t;
use crate::reporting::json::{to_json, ExpansionReport};
use crate::reporting::{
    generate_html_report, print_configuration_header, print_dispatch_plan,
    print_unsupported_pairs,
};

/// Executes the expand command with the provided arguments.
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(cli: &CliArgs, args: &ExpandArgs) -> Result<()> {
    let (matrix, matrix_path) = load_matrix_file(&args.config)?;
    let locale = cli.locale_or(matrix.language.as_deref());
    rust_i18n::set_locale(&locale);

    let catalog_path = resolve_catalog_path(&matrix_path, &matrix.catalog);
    let catalog = load_catalog(&catalog_path)?;
    let domains = CatalogDomains::from_catalog(&catalog);

    let configs = select_configurations(&matrix.configurations, &domains, args, &locale)?;

    if args.format == OutputFormat::Text {
        println!(
            "{}",
            t!("loading_matrix", locale = &locale, path = matrix_path.display())
        );
        if configs.is_empty() {
            println!("{}", t!("no_configurations", locale = &locale).yellow());
        }
    }

    let mut reports = Vec::with_capacity(configs.len());
    let mut plans = Vec::with_capacity(configs.len());
    for config in &configs {
        let combinations = expand(config);
        let plan = plan_dispatch(combinations.clone(), args.total_runners, args.runner_index)?;

        match args.format {
            OutputFormat::Text => {
                print_configuration_header(config, &locale);
                print_dispatch_plan(&plan, &locale);
                print_unsupported_pairs(&domains, &combinations, &locale);
            }
            OutputFormat::Json => reports.push(ExpansionReport::new(config, &plan)),
        }
        plans.push((config, plan));
    }

    if args.format == OutputFormat::Json {
        println!("{}", to_json(&reports)?);
    }

    if let Some(report_path) = &args.html {
        let pairs: Vec<_> = plans.iter().map(|(config, plan)| (*config, plan)).collect();
        generate_html_report(&pairs, report_path, &locale)?;
        if args.format == OutputFormat::Text {
            println!(
                "\n{}",
                t!("html_report_written", locale = &locale, path = report_path.display()).green()
            );
        }
    }

    Ok(())
}

/// Resolves the configurations to expand: all of them, or only the one
/// whose name (or display name) matches `--name`.
fn select_configurations(
    specs: &[ConfigurationSpec],
    domains: &CatalogDomains,
    args: &ExpandArgs,
    locale: &str,
) -> Result<Vec<Configuration>> {
    let mut configs = Vec::with_capacity(specs.len());
    for spec in specs {
        let config = spec.resolve(domains).with_context(|| {
            t!("configuration_invalid", locale = locale, name = &spec.name).to_string()
        })?;
        configs.push(config);
    }

    if let Some(name) = &args.name {
        configs.retain(|c| c.name() == name.as_str() || c.display_name() == *name);
        if configs.is_empty() {
            bail!("{}", t!("configuration_not_found", locale = locale, name = name));
        }
    }
    Ok(configs)
}
