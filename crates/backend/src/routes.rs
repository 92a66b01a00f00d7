use axum::{middleware, routing::get, Router};
use std::path::{Path, PathBuf};
use tower_http::services::{ServeDir, ServeFile};

use crate::system::middleware::request_logger;

/// Конфигурация всех роутов приложения
///
/// `/data.json` is served from the converter output; every other path falls
/// through to the frontend bundle, and unknown paths get `index.html` so the
/// client router can handle deep links.
pub fn configure_routes(static_dir: &Path, data_file: &Path) -> Router {
    let index: PathBuf = static_dir.join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route_service("/data.json", ServeFile::new(data_file))
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(request_logger))
}
