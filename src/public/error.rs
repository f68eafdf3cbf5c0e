// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::templates::{ErrorPageContext, TemplateEngine, render_minijinja_template};
use actix_web::{HttpResponse, HttpResponseBuilder, Result};

#[derive(Clone)]
pub struct ErrorRenderer {
    app_name: String,
}

impl ErrorRenderer {
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

pub fn serve_404(
    renderer: &ErrorRenderer,
    template_engine: Option<&dyn TemplateEngine>,
) -> Result<HttpResponse> {
    let html = render_error_page(
        renderer.app_name(),
        template_engine,
        "error_404.html",
        fallback_404_html,
    );
    Ok(finish_error_response(HttpResponse::NotFound(), html))
}

pub fn serve_500(
    renderer: &ErrorRenderer,
    template_engine: Option<&dyn TemplateEngine>,
) -> Result<HttpResponse> {
    let html = render_error_page(
        renderer.app_name(),
        template_engine,
        "error_500.html",
        fallback_500_html,
    );
    Ok(finish_error_response(HttpResponse::InternalServerError(), html))
}

fn render_error_page(
    app_name: &str,
    template_engine: Option<&dyn TemplateEngine>,
    template_name: &str,
    fallback: fn(&str) -> String,
) -> String {
    let context = ErrorPageContext::new(app_name).to_value();

    match template_engine {
        Some(engine) => match render_minijinja_template(engine, template_name, context) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to render {} template: {}", template_name, e);
                fallback(app_name)
            }
        },
        None => fallback(app_name),
    }
}

// Error pages must never be cached; a stale 404 can mask freshly created content.
fn finish_error_response(mut builder: HttpResponseBuilder, html: String) -> HttpResponse {
    builder
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .insert_header(("Pragma", "no-cache"))
        .insert_header(("Expires", "0"))
        .body(html)
}

fn fallback_404_html(app_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>404 - Page Not Found | {}</title></head>
<body><h1>404 - Page Not Found</h1></body></html>"#,
        app_name
    )
}

fn fallback_500_html(app_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>500 - Server Error | {}</title></head>
<body><h1>500 - Server Error</h1></body></html>"#,
        app_name
    )
}
