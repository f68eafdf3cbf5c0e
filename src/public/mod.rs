// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpResponse, web};

pub mod error;
pub mod handlers;
pub mod markdown;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route(
            "/fragment/{id}/edit",
            web::get().to(handlers::edit_fragment_page),
        )
        .route(
            "/fragment/{id}/edit",
            web::post().to(handlers::submit_fragment_edit),
        )
        .route("/images", web::get().to(handlers::gallery_page))
        .route("/markdown", web::get().to(markdown::markdown_page));
}

pub(crate) fn html_page(html: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
