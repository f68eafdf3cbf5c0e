// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{BootstrapError, log_action};
use crate::runtime_paths::RuntimePaths;
use std::fs::OpenOptions;
use std::io::{self, Write};

pub const WELCOME_PAGE_FILE: &str = "welcome.md";

pub(crate) const DEFAULT_WELCOME_MD: &str = r#"# Welcome to Voyage

Voyage keeps prompt fragments and generated images in one place.

## Getting started

- Collect prompt snippets on the [fragment list](/).
- Upload images with a prompt and tags on the [gallery page](/images).
- This page is rendered from `content/welcome.md`, so edit it freely.

## Formatting reference

The renderer understands the GitHub markdown extensions:

| Feature | Syntax |
| --- | --- |
| Strikethrough | `~~old text~~` |
| Task lists | `- [x] done` |
| Tables | pipes and dashes |

~~Scattered notes~~ become tagged, searchable fragments.

- [x] Start the server
- [ ] Upload an image
- [ ] Rewrite this page

<div class="callout">
Raw HTML blocks pass straight through to the rendered page.
</div>
"#;

pub fn ensure_sample_page(runtime_paths: &RuntimePaths) -> Result<bool, BootstrapError> {
    let page_path = runtime_paths.content_dir.join(WELCOME_PAGE_FILE);

    if page_path.exists() {
        return Ok(false);
    }

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&page_path)
    {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(BootstrapError::Io(err)),
    };

    file.write_all(DEFAULT_WELCOME_MD.as_bytes())?;
    file.sync_all()?;

    log_action(format!("created content/{}", WELCOME_PAGE_FILE));

    Ok(true)
}
