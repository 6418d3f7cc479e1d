//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes a new
//! `DeviceMatrix.toml` seeded with the sample configurations generated from
//! a catalog. In interactive mode a `dialoguer` wizard lets the user pick
//! which samples to keep.
//!
//! 此模块实现 `init` 命令：写入一个新的 `DeviceMatrix.toml`，其中包含根据目录生成的示例配置。
//! 在交互模式下，`dialoguer` 向导允许用户选择要保留的示例。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect};

use crate::cli::{CliArgs, InitArgs};
use crate::engine::catalog::CatalogDomains;
use crate::engine::config::{Configuration, MatrixFile};
use crate::engine::defaults::generate_defaults_with_languages;
use crate::infra::fs::{absolute_path, load_catalog, write_matrix_file};
use crate::infra::t;

/// Executes the init command with the provided arguments.
pub fn execute(cli: &CliArgs, args: &InitArgs) -> Result<()> {
    let locale = cli.locale_or(None);
    rust_i18n::set_locale(&locale);
    let theme = ColorfulTheme::default();

    if !args.non_interactive {
        println!("\n{}", t!("init_wizard_welcome", locale = &locale).cyan().bold());
        println!("{}", t!("init_wizard_description", locale = &locale));
    }

    if args.output.exists() && !args.force {
        if args.non_interactive {
            println!(
                "{}",
                t!("init_file_exists", locale = &locale, path = args.output.display()).red()
            );
            println!("{}", t!("init_use_force", locale = &locale).yellow());
            return Ok(());
        }
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!(
                "init_overwrite_prompt",
                locale = &locale,
                path = args.output.display()
            ))
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = &locale).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = &locale));
            return Ok(());
        }
    }

    let catalog_path = absolute_path(&args.catalog)?;
    let catalog = load_catalog(&catalog_path)?;
    let domains = CatalogDomains::from_catalog(&catalog);
    let samples = generate_defaults_with_languages(&domains, args.supported_languages.clone())
        .with_context(|| t!("defaults_failed", locale = &locale).to_string())?;

    let selected = if args.non_interactive {
        samples
    } else {
        choose_samples(samples, &theme, &locale)?
    };

    let matrix = MatrixFile {
        language: Some(locale.clone()),
        catalog: catalog_path,
        configurations: selected.iter().map(Configuration::to_spec).collect(),
    };
    write_matrix_file(&args.output, &matrix)?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init_success_created", locale = &locale, path = args.output.display()).bold()
    );
    for config in &selected {
        println!("   - {}", config.display_name());
    }
    println!("{}", t!("init_usage_hint", locale = &locale));
    Ok(())
}

/// Lets the user pick which sample configurations to keep. Selecting none
/// keeps them all.
fn choose_samples(
    samples: Vec<Configuration>,
    theme: &ColorfulTheme,
    locale: &str,
) -> Result<Vec<Configuration>> {
    let items: Vec<String> = samples.iter().map(Configuration::display_name).collect();
    let defaults = vec![true; items.len()];

    let selections = MultiSelect::with_theme(theme)
        .with_prompt(t!("init_sample_selection_prompt", locale = locale))
        .items(&items)
        .defaults(&defaults)
        .interact()
        .context(t!("init_user_confirmation_failed", locale = locale).to_string())?;

    if selections.is_empty() {
        println!("{}", t!("init_no_samples_selected", locale = locale).yellow());
        return Ok(samples);
    }

    Ok(samples
        .into_iter()
        .enumerate()
        .filter(|(i, _)| selections.contains(i))
        .map(|(_, config)| config)
        .collect())
}
