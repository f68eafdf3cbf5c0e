// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use crate::config::ValidatedConfig;
use crate::fragments::FragmentRegistry;
use crate::gallery::ingest::ImageIngestor;
use crate::gallery::{GalleryError, GalleryStore};
use crate::public::error::ErrorRenderer;
use crate::runtime_paths::RuntimePaths;
use crate::templates::{MiniJinjaEngine, TemplateEngine};

/// Shared state handed to every worker. One instance per process.
pub struct AppState {
    pub templates: Arc<dyn TemplateEngine>,
    pub error_renderer: ErrorRenderer,
    pub fragments: FragmentRegistry,
    pub gallery: GalleryStore,
    pub ingestor: ImageIngestor,
    pub runtime_paths: RuntimePaths,
    pub config: ValidatedConfig,
}

impl AppState {
    pub fn new(config: ValidatedConfig, runtime_paths: RuntimePaths) -> Result<Self, GalleryError> {
        let gallery = GalleryStore::open(&runtime_paths.gallery_db_file())?;
        let ingestor = ImageIngestor::new(
            runtime_paths.uploads_images_dir.clone(),
            config.upload.max_file_size_mb,
        );

        Ok(Self {
            templates: Arc::new(MiniJinjaEngine::new()),
            error_renderer: ErrorRenderer::new(config.app.name.clone()),
            fragments: FragmentRegistry::new(),
            gallery,
            ingestor,
            runtime_paths,
            config,
        })
    }
}
