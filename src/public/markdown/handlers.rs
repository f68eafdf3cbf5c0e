// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::app_state::AppState;
use crate::bootstrap::content::WELCOME_PAGE_FILE;
use crate::public::error;
use crate::templates::{MarkdownPageContext, render_minijinja_template};
use actix_web::{HttpResponse, Result, web};
use tokio::fs;

use super::parser::render_markdown;

/// Renders content/welcome.md as a standalone HTML page.
pub async fn markdown_page(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let page_path = app_state.runtime_paths.content_dir.join(WELCOME_PAGE_FILE);

    let markdown = match fs::read_to_string(&page_path).await {
        Ok(markdown) => markdown,
        Err(e) => {
            log::error!(
                "Failed to read markdown page '{}': {}",
                page_path.display(),
                e
            );
            return error::serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            );
        }
    };

    let content_html = match render_markdown(&markdown) {
        Ok(html) => html,
        Err(e) => {
            log::error!("Failed to render markdown page: {}", e);
            return error::serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            );
        }
    };

    let context = MarkdownPageContext::new(content_html).to_value();

    match render_minijinja_template(app_state.templates.as_ref(), "markdown_page.html", context) {
        Ok(html) => Ok(crate::public::html_page(html)),
        Err(e) => {
            log::error!("Failed to render markdown page template: {}", e);
            error::serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            )
        }
    }
}
