// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpResponse, HttpServer, middleware::Logger, web};
use log::{LevelFilter, info};
use std::io::Write;
use std::sync::Arc;

mod api;
mod app_state;
mod bootstrap;
mod builtin;
mod config;
mod fragments;
mod gallery;
mod public;
mod runtime_paths;
mod templates;
mod util;

use app_state::AppState;
use config::ValidatedConfig;
use runtime_paths::RuntimePaths;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    let bootstrap = match bootstrap::bootstrap_runtime(&parsed_args.runtime_root) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("❌ Bootstrap error: {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    match System::new().block_on(run_server(bootstrap)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

async fn run_server(bootstrap: bootstrap::BootstrapResult) -> std::io::Result<()> {
    let validated_config = bootstrap.validated_config;
    let runtime_paths = bootstrap.runtime_paths;

    // Parse log level from config
    let log_level = match validated_config.logging.level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    // Configure logging with a stable format
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    log_startup_info(&validated_config, &runtime_paths);

    let app_state = match AppState::new(validated_config.clone(), runtime_paths.clone()) {
        Ok(state) => Arc::new(state),
        Err(error) => {
            eprintln!("❌ Failed to initialize application state: {}", error);
            return Err(std::io::Error::other(error.to_string()));
        }
    };
    info!(
        "✅ App state initialized with app name: {}",
        validated_config.app.name
    );
    info!(
        "✅ Gallery database ready at {}",
        runtime_paths.gallery_db_file().display()
    );

    let workers = validated_config.server.workers;
    let uploads_dir = runtime_paths.uploads_dir.clone();

    let factory = {
        let app_state = app_state.clone();

        move || {
            App::new()
                .app_data(web::Data::from(app_state.clone()))
                .wrap(Logger::new(
                    r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
                ))
                .configure(builtin::configure)
                .configure(api::configure)
                .configure(public::configure)
                .service(actix_files::Files::new("/uploads", uploads_dir.clone()))
                .default_service(web::route().to(default_not_found))
        }
    };

    HttpServer::new(factory)
        .workers(workers)
        .bind(validated_config.server.address_tuple())?
        .run()
        .await
}

async fn default_not_found(app_state: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    public::error::serve_404(
        &app_state.error_renderer,
        Some(app_state.templates.as_ref()),
    )
}

fn log_startup_info(config: &ValidatedConfig, runtime_paths: &RuntimePaths) {
    info!("Starting {} - {}", config.app.name, config.app.description);
    info!("Workers: {}", config.server.workers);
    info!(
        "Listening on http://{}:{}",
        config.server.host, config.server.port
    );

    // Log canonical paths being used by the server
    info!(
        "Content directory (canonical): {}",
        runtime_paths.content_dir.display()
    );
    info!(
        "Data directory (canonical): {}",
        runtime_paths.data_dir.display()
    );
    info!(
        "Uploads directory (canonical): {}",
        runtime_paths.uploads_dir.display()
    );
    info!("Config file: {}", runtime_paths.config_file.display());
    info!("Runtime root: {}", runtime_paths.root.display());

    // Log working directory for context
    if let Ok(current_dir) = std::env::current_dir() {
        info!("Working directory: {}", current_dir.display());
    }
}

struct ParsedArgs {
    runtime_root: std::path::PathBuf,
}

fn parse_args() -> Result<ParsedArgs, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut runtime_root = std::path::PathBuf::from(".");

    while let Some(arg) = args.next() {
        if arg == "-C" {
            let value = args
                .next()
                .ok_or_else(|| "Missing value for -C".to_string())?;
            runtime_root = std::path::PathBuf::from(value);
        } else {
            return Err(format!("Unknown argument '{}'", arg));
        }
    }

    let runtime_root = make_runtime_root_absolute(runtime_root)?;

    Ok(ParsedArgs { runtime_root })
}

fn make_runtime_root_absolute(
    runtime_root: std::path::PathBuf,
) -> Result<std::path::PathBuf, String> {
    if runtime_root.is_absolute() {
        return Ok(runtime_root);
    }

    let current_dir = std::env::current_dir()
        .map_err(|error| format!("Failed to resolve current directory: {}", error))?;
    Ok(current_dir.join(runtime_root))
}
