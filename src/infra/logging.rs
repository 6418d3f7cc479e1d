//! # Logging Module / 日志模块
//!
//! Diagnostic logging through `tracing`. Console output meant for users goes
//! through `println!`; tracing events go to stderr so that `--format json`
//! output on stdout stays machine readable.
//!
//! 通过 `tracing` 进行诊断日志记录。面向用户的控制台输出使用 `println!`；
//! tracing 事件写入 stderr，以保证 stdout 上的 JSON 输出可被机器读取。

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a log level.
///
/// - 0: warn
/// - 1: info
/// - 2: debug
/// - 3+: trace
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbosity` when set.
/// Calling it twice is harmless; the second call is ignored.
///
/// 安装全局订阅者。设置了 `RUST_LOG` 时优先于 `verbosity`。
pub fn init_logging(verbosity: u8) {
    let default_level = level_from_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_ascii_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
