// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

mod fragments;
mod images;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/create-fragment",
        web::post().to(fragments::create_fragment),
    )
    .route("/fragments", web::get().to(fragments::list_fragments))
    .route("/fragments/{id}", web::get().to(fragments::get_fragment))
    .route("/fragments/{id}", web::put().to(fragments::update_fragment))
    .route(
        "/fragments/{id}",
        web::delete().to(fragments::delete_fragment),
    )
    .route("/images", web::post().to(images::create_image))
    .service(web::scope("/api").route("/image/upload", web::post().to(images::upload_image)));
}
