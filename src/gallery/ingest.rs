// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::GalleryError;
use actix_multipart::Field;
use futures_util::TryStreamExt;
use log::warn;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

const FALLBACK_FILE_NAME: &str = "upload.bin";

/// Writes uploaded image bytes into the uploads tree.
///
/// Stored names combine a random token with the client's file name, so two
/// uploads of `photo.png` never overwrite each other.
pub struct ImageIngestor {
    images_dir: PathBuf,
    max_file_size_mb: u64, // 0 means unlimited
}

impl ImageIngestor {
    pub fn new(images_dir: PathBuf, max_file_size_mb: u64) -> Self {
        Self {
            images_dir,
            max_file_size_mb,
        }
    }

    /// Streams one multipart field to disk and returns the storage-relative
    /// path, e.g. `images/<uuid>-photo.png`.
    ///
    /// When the configured size limit is crossed mid-stream, the partial file
    /// is removed before the error is returned.
    pub async fn save_field(
        &self,
        original_name: Option<&str>,
        field: &mut Field,
    ) -> Result<String, GalleryError> {
        let stored_name = unique_file_name(original_name);
        let dest = self.images_dir.join(&stored_name);
        let max_bytes = self.max_file_size_mb.saturating_mul(1024 * 1024);

        let mut file = tokio::fs::File::create(&dest).await?;
        let mut bytes_written: u64 = 0;

        loop {
            let chunk = match field.try_next().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(err) => {
                    drop(file);
                    remove_partial(&dest).await;
                    return Err(GalleryError::Multipart(err.to_string()));
                }
            };

            bytes_written = bytes_written.saturating_add(chunk.len() as u64);
            if max_bytes > 0 && bytes_written > max_bytes {
                drop(file);
                remove_partial(&dest).await;
                return Err(GalleryError::FileTooLarge {
                    limit_mb: self.max_file_size_mb,
                });
            }

            if let Err(err) = file.write_all(&chunk).await {
                drop(file);
                remove_partial(&dest).await;
                return Err(GalleryError::Io(err));
            }
        }

        file.flush().await?;

        Ok(format!("images/{}", stored_name))
    }
}

async fn remove_partial(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        warn!("Failed to remove partial upload {}: {}", path.display(), err);
    }
}

/// Builds a collision-free stored file name. Only the final path component of
/// the client name is kept, so traversal segments never reach the disk.
pub fn unique_file_name(original_name: Option<&str>) -> String {
    let base = original_name
        .map(Path::new)
        .and_then(|name| name.file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(FALLBACK_FILE_NAME);

    format!("{}-{}", Uuid::new_v4(), base)
}
