// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpResponse, web};

// Compiled into the binary; the served pages never depend on files next to
// the executable.
const STYLE_CSS: &str = include_str!("../builtin/style.css");
const MARKDOWN_CSS: &str = include_str!("../builtin/github-markdown-light.css");

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/static/style.css", web::get().to(serve_style_css))
        .route(
            "/static/github-markdown-light.css",
            web::get().to(serve_markdown_css),
        );
}

async fn serve_style_css() -> HttpResponse {
    css_response(STYLE_CSS)
}

async fn serve_markdown_css() -> HttpResponse {
    css_response(MARKDOWN_CSS)
}

fn css_response(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(body)
}
