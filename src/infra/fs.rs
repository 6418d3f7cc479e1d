//! # File System Operations Module / 文件系统操作模块
//!
//! This module loads the catalog JSON and the `DeviceMatrix.toml` matrix file
//! from disk and writes matrix files back.
//!
//! 此模块从磁盘加载目录 JSON 和 `DeviceMatrix.toml` 矩阵文件，并将矩阵文件写回磁盘。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::catalog::DeviceCatalog;
use crate::engine::config::MatrixFile;
use crate::infra::t;

/// Reads and parses a backend device catalog saved as JSON.
/// 读取并解析以 JSON 保存的后端设备目录。
pub fn load_catalog(path: &Path) -> Result<DeviceCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("catalog_read_failed", path = path.display()).to_string())?;
    let catalog: DeviceCatalog = serde_json::from_str(&content)
        .with_context(|| t!("catalog_parse_failed", path = path.display()).to_string())?;
    tracing::debug!(
        path = %path.display(),
        models = catalog.models.len(),
        versions = catalog.versions.len(),
        "loaded device catalog"
    );
    Ok(catalog)
}

/// Reads and parses a matrix file. Returns the parsed file together with
/// its canonical path, which relative catalog paths are resolved against.
///
/// 读取并解析矩阵文件，返回解析结果及其规范路径（用于解析相对的目录路径）。
pub fn load_matrix_file(path: &Path) -> Result<(MatrixFile, PathBuf)> {
    let matrix_path = absolute_path(path)
        .with_context(|| t!("config_read_failed_path", path = path.display()).to_string())?;
    let content = fs::read_to_string(&matrix_path)
        .with_context(|| t!("config_read_failed_path", path = matrix_path.display()).to_string())?;
    let matrix: MatrixFile = toml::from_str(&content)
        .with_context(|| t!("config_parse_failed", path = matrix_path.display()).to_string())?;
    Ok((matrix, matrix_path))
}

/// Resolves the catalog path of a matrix file relative to the file's directory.
/// 相对于矩阵文件所在目录解析其目录文件路径。
pub fn resolve_catalog_path(matrix_path: &Path, catalog: &Path) -> PathBuf {
    if catalog.is_absolute() {
        return catalog.to_path_buf();
    }
    matrix_path
        .parent()
        .map(|dir| dir.join(catalog))
        .unwrap_or_else(|| catalog.to_path_buf())
}

/// Serializes `matrix` as TOML and writes it to `path`, creating parent
/// directories when needed.
///
/// 将 `matrix` 序列化为 TOML 并写入 `path`，必要时创建父目录。
pub fn write_matrix_file(path: &Path, matrix: &MatrixFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("create_parent_dir_failed", path = parent.display()).to_string()
            })?;
        }
    }

    let toml_string = toml::to_string_pretty(matrix).context(t!("serialize_failed").to_string())?;
    fs::write(path, toml_string)
        .with_context(|| t!("write_failed", path = path.display()).to_string())?;
    Ok(())
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}
