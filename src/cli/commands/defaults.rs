//! # Defaults Command Module / 默认配置命令模块
//!
//! This module implements the `defaults` command, which prints the sample
//! configurations generated from a catalog.
//!
//! 此模块实现 `defaults` 命令，打印根据目录生成的示例配置。

use anyhow::{Context, Result};

use crate::cli::{CliArgs, DefaultsArgs, OutputFormat};
use crate::engine::catalog::CatalogDomains;
use crate::engine::defaults::generate_defaults_with_languages;
use crate::infra::fs::load_catalog;
use crate::infra::t;
use crate::reporting::console::{print_configuration_header, print_enabled_types};
use crate::reporting::json::{to_json, DefaultsReport};

/// Executes the defaults command with the provided arguments.
pub fn execute(cli: &CliArgs, args: &DefaultsArgs) -> Result<()> {
    let locale = cli.locale_or(None);
    rust_i18n::set_locale(&locale);

    let catalog = load_catalog(&args.catalog)?;
    let domains = CatalogDomains::from_catalog(&catalog);
    let configs = generate_defaults_with_languages(&domains, args.supported_languages.clone())
        .with_context(|| t!("defaults_failed", locale = &locale).to_string())?;

    match args.format {
        OutputFormat::Text => {
            for config in &configs {
                print_configuration_header(config, &locale);
                print_enabled_types(config);
            }
        }
        OutputFormat::Json => {
            let reports: Vec<_> = configs.iter().map(DefaultsReport::new).collect();
            println!("{}", to_json(&reports)?);
        }
    }
    Ok(())
}
