//! # CLI Module / 命令行模块
//!
//! Builds the `device-matrix` command line with localised help texts and
//! dispatches to the command implementations in [`commands`].
//!
//! 构建带有本地化帮助文本的 `device-matrix` 命令行，并分发到 [`commands`] 中的命令实现。

pub mod commands;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::infra::t;

/// Output format of the `expand` and `defaults` commands.
/// `expand` 和 `defaults` 命令的输出格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn from_arg(value: Option<&String>) -> Self {
        match value.map(String::as_str) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Options of `device-matrix expand`.
#[derive(Debug, Clone)]
pub struct ExpandArgs {
    pub config: PathBuf,
    pub name: Option<String>,
    pub format: OutputFormat,
    pub html: Option<PathBuf>,
    pub total_runners: Option<usize>,
    pub runner_index: Option<usize>,
}

/// Options of `device-matrix defaults`.
#[derive(Debug, Clone)]
pub struct DefaultsArgs {
    pub catalog: PathBuf,
    pub supported_languages: Vec<String>,
    pub format: OutputFormat,
}

/// Options of `device-matrix init`.
#[derive(Debug, Clone)]
pub struct InitArgs {
    pub catalog: PathBuf,
    pub output: PathBuf,
    pub supported_languages: Vec<String>,
    pub force: bool,
    pub non_interactive: bool,
}

#[derive(Debug, Clone)]
pub enum CliCommand {
    Expand(ExpandArgs),
    Defaults(DefaultsArgs),
    Init(InitArgs),
}

/// Parsed command line.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Explicit `--lang`, if given.
    pub language: Option<String>,
    /// Number of `-v` flags.
    pub verbosity: u8,
    pub command: Option<CliCommand>,
}

impl CliArgs {
    /// The console locale: `--lang`, then `fallback` (usually the matrix
    /// file's language), then the system locale.
    pub fn locale_or(&self, fallback: Option<&str>) -> String {
        self.language
            .clone()
            .or_else(|| fallback.map(str::to_string))
            .unwrap_or_else(crate::detect_locale)
    }
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language(args: &[OsString]) -> Option<String> {
    let args: Vec<String> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

fn format_arg(locale: &str) -> Arg {
    Arg::new("format")
        .long("format")
        .help(t!("arg_format", locale = locale).to_string())
        .value_name("FORMAT")
        .value_parser(["text", "json"])
        .default_value("text")
        .action(ArgAction::Set)
}

fn catalog_arg(locale: &str) -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .help(t!("arg_catalog", locale = locale).to_string())
        .value_name("CATALOG")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

fn languages_arg(locale: &str) -> Arg {
    Arg::new("languages")
        .long("languages")
        .help(t!("arg_languages", locale = locale).to_string())
        .value_name("LANGUAGES")
        .value_delimiter(',')
        .action(ArgAction::Append)
}

fn build_cli(locale: &str) -> Command {
    Command::new("device-matrix")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("cli_verbose", locale = locale).to_string())
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("expand")
                .about(t!("cmd_expand_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .default_value("DeviceMatrix.toml")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help(t!("arg_name", locale = locale).to_string())
                        .value_name("NAME")
                        .action(ArgAction::Set),
                )
                .arg(format_arg(locale))
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help(t!("arg_html", locale = locale).to_string())
                        .value_name("HTML")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("total-runners")
                        .long("total-runners")
                        .help(t!("arg_total_runners", locale = locale).to_string())
                        .value_name("TOTAL_RUNNERS")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set)
                        .requires("runner-index"),
                )
                .arg(
                    Arg::new("runner-index")
                        .long("runner-index")
                        .help(t!("arg_runner_index", locale = locale).to_string())
                        .value_name("RUNNER_INDEX")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set)
                        .requires("total-runners"),
                ),
        )
        .subcommand(
            Command::new("defaults")
                .about(t!("cmd_defaults_about", locale = locale).to_string())
                .arg(catalog_arg(locale))
                .arg(languages_arg(locale))
                .arg(format_arg(locale)),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(catalog_arg(locale))
                .arg(languages_arg(locale))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .default_value("DeviceMatrix.toml")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn languages(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("languages")
        .map(|values| {
            values
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn required_path(matches: &ArgMatches, id: &str) -> PathBuf {
    // Every path argument read here is either required or has a default.
    matches.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

/// Parses `args` (including the binary name). On `--help`, `--version` or a
/// usage error clap prints its message and exits the process.
pub fn parse_from(args: Vec<OsString>) -> CliArgs {
    let language = pre_parse_language(&args);
    let help_locale = language.clone().unwrap_or_else(crate::detect_locale);
    rust_i18n::set_locale(&help_locale);

    let matches = build_cli(&help_locale).get_matches_from(args);
    let verbosity = matches.get_count("verbose");

    let command = match matches.subcommand() {
        Some(("expand", m)) => Some(CliCommand::Expand(ExpandArgs {
            config: required_path(m, "config"),
            name: m.get_one::<String>("name").cloned(),
            format: OutputFormat::from_arg(m.get_one::<String>("format")),
            html: m.get_one::<PathBuf>("html").cloned(),
            total_runners: m.get_one::<usize>("total-runners").copied(),
            runner_index: m.get_one::<usize>("runner-index").copied(),
        })),
        Some(("defaults", m)) => Some(CliCommand::Defaults(DefaultsArgs {
            catalog: required_path(m, "catalog"),
            supported_languages: languages(m),
            format: OutputFormat::from_arg(m.get_one::<String>("format")),
        })),
        Some(("init", m)) => Some(CliCommand::Init(InitArgs {
            catalog: required_path(m, "catalog"),
            output: required_path(m, "output"),
            supported_languages: languages(m),
            force: m.get_flag("force"),
            non_interactive: m.get_flag("non-interactive"),
        })),
        _ => None,
    };

    CliArgs {
        language,
        verbosity,
        command,
    }
}

/// Parses the process arguments.
pub fn parse_args() -> CliArgs {
    parse_from(std::env::args_os().collect())
}

/// Runs the parsed command.
pub fn process_command(args: CliArgs) -> Result<()> {
    crate::infra::logging::init_logging(args.verbosity);

    match &args.command {
        Some(CliCommand::Expand(expand)) => commands::expand::execute(&args, expand),
        Some(CliCommand::Defaults(defaults)) => commands::defaults::execute(&args, defaults),
        Some(CliCommand::Init(init)) => commands::init::execute(&args, init),
        None => {
            let locale = args.locale_or(None);
            build_cli(&locale).print_help()?;
            println!();
            Ok(())
        }
    }
}
