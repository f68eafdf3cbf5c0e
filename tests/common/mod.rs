// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, Result, web};
use std::sync::Arc;
use voyage::app_state::AppState;
use voyage::util::test_fixtures::TestFixtureRoot;
use voyage::{api, bootstrap, builtin, public};

pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub app_state: Arc<AppState>,
}

#[derive(Clone)]
pub struct AppBundle {
    pub app_state: Arc<AppState>,
}

impl TestHarness {
    /// Bootstraps a throwaway runtime root and opens the app state on it,
    /// exactly the way the server binary does.
    pub fn new() -> Self {
        let fixture = TestFixtureRoot::new_unique("http-test-suite").expect("fixture root");
        let bootstrap = bootstrap::bootstrap_runtime(fixture.path()).expect("bootstrap");
        let app_state = Arc::new(
            AppState::new(bootstrap.validated_config, bootstrap.runtime_paths).expect("app state"),
        );

        Self { fixture, app_state }
    }

    pub fn app_bundle(&self) -> AppBundle {
        AppBundle {
            app_state: self.app_state.clone(),
        }
    }
}

pub fn build_test_app(
    bundle: AppBundle,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let uploads_dir = bundle.app_state.runtime_paths.uploads_dir.clone();

    App::new()
        .app_data(web::Data::from(bundle.app_state))
        .configure(builtin::configure)
        .configure(api::configure)
        .configure(public::configure)
        .service(actix_files::Files::new("/uploads", uploads_dir))
        .default_service(web::route().to(test_default_not_found))
}

async fn test_default_not_found(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    public::error::serve_404(
        &app_state.error_renderer,
        Some(app_state.templates.as_ref()),
    )
}

pub const MULTIPART_BOUNDARY: &str = "voyage-test-boundary";

/// Assembles a multipart/form-data body by hand; requests built with it go
/// through the real multipart extractor.
pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self { body: Vec::new() }
    }

    pub fn text_field(mut self, name: &str, value: &str) -> Self {
        self.body
            .extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn file_field(
        mut self,
        name: &str,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> Self {
        self.body
            .extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        self.body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name, filename
            )
            .as_bytes(),
        );
        self.body
            .extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Closes the body and returns the content-type header value plus the
    /// finished payload.
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
        (
            format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
            self.body,
        )
    }
}
