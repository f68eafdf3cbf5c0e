// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::error;
use crate::app_state::AppState;
use crate::templates::{
    FragmentPageContext, GalleryPageContext, IndexPageContext, render_minijinja_template,
};
use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EditFragmentForm {
    pub text: String,
}

pub async fn index(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let fragments = app_state.fragments.list();
    let context = IndexPageContext::new(&app_state.config.app.name, fragments).to_value();

    match render_minijinja_template(app_state.templates.as_ref(), "index.html", context) {
        Ok(html) => Ok(super::html_page(html)),
        Err(e) => {
            log::error!("Failed to render index page: {}", e);
            error::serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            )
        }
    }
}

pub async fn edit_fragment_page(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    let fragment = match app_state.fragments.get(id) {
        Some(fragment) => fragment,
        None => {
            return error::serve_404(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            );
        }
    };

    let context = FragmentPageContext::new(&app_state.config.app.name, fragment).to_value();

    match render_minijinja_template(app_state.templates.as_ref(), "fragment_edit.html", context) {
        Ok(html) => Ok(super::html_page(html)),
        Err(e) => {
            log::error!("Failed to render fragment edit page: {}", e);
            error::serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            )
        }
    }
}

/// Applies the edit and responds with the refreshed fragment view.
pub async fn submit_fragment_edit(
    path: web::Path<i64>,
    form: web::Form<EditFragmentForm>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    let fragment = match app_state.fragments.update(id, form.into_inner().text) {
        Some(fragment) => fragment,
        None => {
            return error::serve_404(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            );
        }
    };

    let context = FragmentPageContext::new(&app_state.config.app.name, fragment).to_value();

    match render_minijinja_template(app_state.templates.as_ref(), "fragment.html", context) {
        Ok(html) => Ok(super::html_page(html)),
        Err(e) => {
            log::error!("Failed to render fragment page: {}", e);
            error::serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            )
        }
    }
}

pub async fn gallery_page(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let images = match app_state.gallery.list_images() {
        Ok(images) => images,
        Err(e) => {
            log::error!("Failed to load gallery images: {}", e);
            return error::serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            );
        }
    };

    let context = GalleryPageContext::new(&app_state.config.app.name, images).to_value();

    match render_minijinja_template(app_state.templates.as_ref(), "gallery.html", context) {
        Ok(html) => Ok(super::html_page(html)),
        Err(e) => {
            log::error!("Failed to render gallery page: {}", e);
            error::serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            )
        }
    }
}
