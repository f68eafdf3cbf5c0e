// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{BootstrapError, log_action};
use crate::runtime_paths::RuntimePaths;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn ensure_paths(root: &Path) -> Result<RuntimePaths, BootstrapError> {
    let root_path = normalize_root(root)?;
    let content_dir = root_path.join("content");
    let data_dir = root_path.join("data");
    let uploads_dir = root_path.join("uploads");
    let uploads_images_dir = uploads_dir.join("images");

    ensure_dir(&content_dir)?;
    ensure_dir(&data_dir)?;
    ensure_dir(&uploads_dir)?;
    ensure_dir(&uploads_images_dir)?;

    let runtime_paths = RuntimePaths::from_root(&root_path).map_err(BootstrapError::Config)?;

    Ok(runtime_paths)
}

fn normalize_root(root: &Path) -> Result<PathBuf, BootstrapError> {
    let root_path = if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root.to_path_buf()
    };

    if root_path.exists() {
        if !root_path.is_dir() {
            return Err(BootstrapError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Runtime root is not a directory: {}", root_path.display()),
            )));
        }
        return Ok(root_path);
    }

    fs::create_dir_all(&root_path)?;
    log_action(format!(
        "created runtime root directory {}",
        root_path.display()
    ));
    Ok(root_path)
}

fn ensure_dir(path: &Path) -> Result<(), BootstrapError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(BootstrapError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Path is not a directory: {}", path.display()),
            )));
        }
        return Ok(());
    }

    fs::create_dir_all(path)?;
    log_action(format!("created directory {}", path.display()));
    Ok(())
}
