// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, web};
use futures_util::TryStreamExt;
use serde_json::json;

use crate::app_state::AppState;
use crate::gallery::GalleryError;

#[derive(Debug, Default)]
struct UploadForm {
    saved_path: Option<String>,
    prompt: String,
    tags: String,
}

/// Stores the uploaded image and its metadata, then echoes the full record.
pub async fn create_image(payload: Multipart, app_state: web::Data<AppState>) -> HttpResponse {
    let form = match collect_upload(payload, &app_state).await {
        Ok(form) => form,
        Err(err) => return gallery_error_response(err),
    };

    let saved_path = match form.saved_path {
        Some(path) => path,
        None => return gallery_error_response(GalleryError::MissingField("Image")),
    };

    // Comma-split with no trimming; whitespace and empty segments become
    // labels of their own.
    let labels: Vec<String> = form.tags.split(',').map(str::to_string).collect();

    match app_state
        .gallery
        .create_image(&saved_path, &form.prompt, &labels)
    {
        Ok(record) => {
            log::info!("Stored gallery image {} at {}", record.id, record.path);
            HttpResponse::Created().json(record)
        }
        Err(err) => gallery_error_response(err),
    }
}

/// Bare upload endpoint. Saves the file and returns its public URL without
/// touching the metadata store.
pub async fn upload_image(payload: Multipart, app_state: web::Data<AppState>) -> HttpResponse {
    let form = match collect_upload(payload, &app_state).await {
        Ok(form) => form,
        Err(err) => return gallery_error_response(err),
    };

    match form.saved_path {
        Some(path) => HttpResponse::Ok().json(json!({ "url": format!("/uploads/{}", path) })),
        None => gallery_error_response(GalleryError::MissingField("Image")),
    }
}

async fn collect_upload(
    mut payload: Multipart,
    app_state: &AppState,
) -> Result<UploadForm, GalleryError> {
    let mut form = UploadForm::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|err| GalleryError::Multipart(err.to_string()))?
    {
        let name = field.name().to_string();
        match name.as_str() {
            "image" => {
                let original_name = field
                    .content_disposition()
                    .get_filename()
                    .map(str::to_owned);
                let saved = app_state
                    .ingestor
                    .save_field(original_name.as_deref(), &mut field)
                    .await?;
                form.saved_path = Some(saved);
            }
            "prompt" => form.prompt = read_text_field(&mut field).await?,
            "tags" => form.tags = read_text_field(&mut field).await?,
            _ => drain_field(&mut field).await?,
        }
    }

    Ok(form)
}

async fn read_text_field(field: &mut Field) -> Result<String, GalleryError> {
    let mut value = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|err| GalleryError::Multipart(err.to_string()))?
    {
        value.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&value).into_owned())
}

// Unknown fields are read to completion so the stream can move on to the
// next part.
async fn drain_field(field: &mut Field) -> Result<(), GalleryError> {
    while field
        .try_next()
        .await
        .map_err(|err| GalleryError::Multipart(err.to_string()))?
        .is_some()
    {}
    Ok(())
}

fn gallery_error_response(err: GalleryError) -> HttpResponse {
    match err {
        GalleryError::MissingField(_)
        | GalleryError::FileTooLarge { .. }
        | GalleryError::Multipart(_) => {
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
        _ => {
            log::error!("Gallery request failed: {}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
        }
    }
}
