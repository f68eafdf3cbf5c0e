// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{Either, HttpMessage, HttpRequest, HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct FragmentPayload {
    pub text: String,
}

/// Accepts both JSON bodies and HTML form submissions; the index page posts
/// here directly.
pub async fn create_fragment(
    payload: Either<web::Json<FragmentPayload>, web::Form<FragmentPayload>>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let payload = payload.into_inner();
    let fragment = app_state.fragments.create(payload.text);
    HttpResponse::Created().json(fragment)
}

pub async fn list_fragments(app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(app_state.fragments.list())
}

pub async fn get_fragment(path: web::Path<i64>, app_state: web::Data<AppState>) -> HttpResponse {
    match app_state.fragments.get(path.into_inner()) {
        Some(fragment) => HttpResponse::Ok().json(fragment),
        None => fragment_not_found(),
    }
}

pub async fn update_fragment(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    if req.content_type() != "application/json" {
        return HttpResponse::UnsupportedMediaType()
            .json(json!({ "error": "Content-Type must be application/json" }));
    }

    if app_state.fragments.get(id).is_none() {
        return fragment_not_found();
    }

    let payload: FragmentPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
        }
    };

    match app_state.fragments.update(id, payload.text) {
        Some(fragment) => HttpResponse::Ok().json(fragment),
        None => fragment_not_found(),
    }
}

pub async fn delete_fragment(path: web::Path<i64>, app_state: web::Data<AppState>) -> HttpResponse {
    let id = path.into_inner();

    if app_state.fragments.delete(id) {
        HttpResponse::Ok().json(json!({ "message": format!("Fragment with ID {} deleted", id) }))
    } else {
        fragment_not_found()
    }
}

fn fragment_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Fragment not found" }))
}
