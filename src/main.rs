use axum::Router;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber;

mod routes;
mod models;
mod utils;
mod client;
mod state;

use crate::state::app_state::AppState;
use crate::state::session::SessionStore;
use crate::utils::conf_helper::{get_cached_config, init_config_and_bind};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // === CONFIG + LISTENER ===
    let listener = init_config_and_bind()
        .await
        .expect("CRITICAL INIT FAILURE");

    let config = get_cached_config();

    let session = SessionStore::load(PathBuf::from(&config.session_path))
        .expect("CRITICAL SESSION INIT FAILURE");
    let state = AppState::new(session);

    info!(
        "Analysis service initialized on {}:{}",
        config.connection.ip,
        config.connection.port
    );

    // Probe the stored token once at startup; a rejected token clears the
    // session and the service keeps running unauthenticated
    if state.session.is_authenticated() {
        match client::backend::refresh_user_info(&state.session).await {
            Ok(profile) => {
                info!(
                    "Session active for {}",
                    profile.email.as_deref().unwrap_or("unknown user")
                );
                if let Err(e) = client::backend::login(&state.session).await {
                    warn!("Backend login ping failed: {}", e);
                }
            }
            Err(e) => warn!("Stored session rejected: {}", e),
        }
    }

    let app = Router::new()
        .merge(routes::info_routes::health_routes())
        .merge(routes::result_routes::result_routes(state.clone()));

    axum::serve(listener, app)
        .await
        .unwrap();
}
