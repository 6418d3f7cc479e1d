//! # Commands Module / 命令模块
//!
//! One module per `device-matrix` subcommand.
//!
//! 每个 `device-matrix` 子命令对应一个模块。

pub mod defaults;
pub mod expand;
pub mod init;
