// HTTP client for the coaching backend and the OAuth userinfo probe

use reqwest::Client;
use tracing::{error, info, warn};

use crate::models::result_model::{BehavioralResult, Interview, UserProfile};
use crate::state::session::SessionStore;
use crate::utils::conf_helper;

const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

fn bearer(session: &SessionStore) -> String {
    format!("Bearer {}", session.token().unwrap_or_default())
}

/// Warm-up login ping. The backend records the visit; the response body is
/// not interesting.
pub async fn login(session: &SessionStore) -> Result<(), String> {
    let backend = conf_helper::get_backend_url();
    let login_url = format!("http://{}/login", backend);
    let client = Client::new();

    client
        .get(&login_url)
        .header("Authorization", bearer(session))
        .send()
        .await
        .map_err(|e| {
            error!("Login request failed: {}", e);
            format!("HTTP Error: {}", e)
        })?
        .error_for_status()
        .map_err(|e| format!("Server returned error: {}", e))?;

    info!("Backend login ping succeeded");
    Ok(())
}

/// Fetch a full behavioral interview result record by id.
pub async fn fetch_result(session: &SessionStore, id: &str) -> Result<BehavioralResult, String> {
    let backend = conf_helper::get_backend_url();
    let result_url = format!("http://{}/result/{}", backend, id);
    let client = Client::new();

    info!("Fetching behavioral result: {}", result_url);

    let record = client
        .get(&result_url)
        .header("Authorization", bearer(session))
        .send()
        .await
        .map_err(|e| {
            error!("Result fetch failed: {}", e);
            format!("HTTP Error: {}", e)
        })?
        .error_for_status()
        .map_err(|e| format!("Server returned error: {}", e))?
        .json::<BehavioralResult>()
        .await
        .map_err(|e| format!("Decode error: {}", e))?;

    info!(
        "Fetched result {} ({} phrases, {} samples)",
        record.id,
        record.result.len(),
        record.body.len()
    );
    Ok(record)
}

/// Fetch an interview question record by id.
pub async fn fetch_interview(session: &SessionStore, id: &str) -> Result<Interview, String> {
    let backend = conf_helper::get_backend_url();
    let question_url = format!("http://{}/question/{}", backend, id);
    let client = Client::new();

    client
        .get(&question_url)
        .header("Authorization", bearer(session))
        .send()
        .await
        .map_err(|e| {
            error!("Interview fetch failed: {}", e);
            format!("HTTP Error: {}", e)
        })?
        .error_for_status()
        .map_err(|e| format!("Server returned error: {}", e))?
        .json::<Interview>()
        .await
        .map_err(|e| format!("Decode error: {}", e))
}

/// Validate the stored token against the OAuth provider and refresh the
/// cached profile. A rejected token clears the whole session so callers fall
/// back to the unauthenticated path.
pub async fn refresh_user_info(session: &SessionStore) -> Result<UserProfile, String> {
    let token = match session.token() {
        Some(token) => token,
        None => return Err("No stored token".to_string()),
    };

    let client = Client::new();
    let response = client
        .get(USERINFO_URL)
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| {
            error!("Userinfo request failed: {}", e);
            format!("HTTP Error: {}", e)
        })?;

    if !response.status().is_success() {
        warn!("Stored token rejected ({}), clearing session", response.status());
        session
            .clear()
            .map_err(|e| format!("Session clear failed: {}", e))?;
        return Err(format!("Token rejected: {}", response.status()));
    }

    let profile = response
        .json::<UserProfile>()
        .await
        .map_err(|e| format!("Decode error: {}", e))?;

    session
        .set_user_info(profile.clone())
        .map_err(|e| format!("Session write failed: {}", e))?;

    Ok(profile)
}
