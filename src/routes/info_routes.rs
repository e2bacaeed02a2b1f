use axum::{
    routing::get,
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use serde::Serialize;
use tracing::{debug, error};


pub fn health_routes() -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health_check))
        .route("/info", get(info_check))
        .route("/stop", get(stop_process))
}

async fn index_page() -> Response {
    let config = crate::utils::conf_helper::get_cached_config();
    format!("{} {} - {}", config.name, config.version, config.description).into_response()
}

pub async fn info_check() -> Response {
    let config = crate::utils::conf_helper::get_cached_config();

    debug!("{} requested", config.name);
    Json(config).into_response()
}

async fn health_check() -> Response {
    Json(HealthStatus {
        status: "ok".to_owned(),
    })
    .into_response()
}

async fn stop_process() -> impl IntoResponse {
    error!("Stop endpoint called, shutting down process");

    tokio::spawn(async {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        std::process::exit(0);
    });

    StatusCode::OK
}

#[derive(Serialize)]
pub struct HealthStatus {
    status: String,
}
