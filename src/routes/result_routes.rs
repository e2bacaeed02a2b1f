use axum::{
    routing::{get, post},
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
    extract::{
        Path,
        Query,
        State,
        ws::WebSocketUpgrade,
    },
};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use uuid::Uuid;

use preplens_core::{annotate_approvals, derived_duration_seconds, engagement_chart, locate_active};
use preplens_core::PhraseSegment;

use crate::client::backend;
use crate::models::result_model::BehavioralResult;
use crate::routes::ws_handler::handle_ws_stream;
use crate::state::app_state::AppState;
use crate::utils::conf_helper;

#[derive(Deserialize, Debug)]
pub struct LoadResultRequest {
    pub mode: String, // "remote" | "file" | "inline"
    pub id: Option<String>,
    pub path: Option<String>,
    pub record: Option<BehavioralResult>,
}

#[derive(Serialize, Debug)]
pub struct LoadResultResponse {
    pub id: String,
    pub question: String,
    pub phrase_count: usize,
    pub sample_count: usize,
    pub duration_seconds: f64,
}

/// Entry for GET /results
#[derive(Serialize)]
pub struct ResultSummary {
    pub id: String,
    pub question: String,
    pub phrase_count: usize,
    pub approved_count: usize,
    pub duration_seconds: f64,
}

#[derive(Deserialize)]
pub struct ChartQuery {
    pub interval: Option<f64>,
}

#[derive(Deserialize)]
pub struct TimeQuery {
    pub t: f64,
}

/// Index of the phrase active at playback time `t`; null when no phrase has
/// started yet.
#[derive(Serialize)]
pub struct ActivePhraseResponse {
    pub index: Option<usize>,
}

#[derive(Serialize)]
struct AnalysisFailure {
    error: String,
}


/// =======================
/// ROUTER
/// =======================

pub fn result_routes(state: AppState) -> Router {
    Router::new()
        .route("/load-result", post(load_result))
        .route("/results", get(list_results))
        .route("/results/{id}/chart", get(result_chart))
        .route("/results/{id}/phrases", get(result_phrases))
        .route("/results/{id}/active", get(active_phrase))
        .route("/stream/{id}", get(ws_stream))
        .route("/interview/{id}", get(interview_lookup))
        .with_state(state)
}


/// =======================
/// HANDLERS
/// =======================

/// Ingest one result record: fetch it (remote), read it (file) or take it
/// from the body (inline), recompute phrase approvals and register it for
/// the query handlers.
async fn load_result(
    State(state): State<AppState>,
    Json(request): Json<LoadResultRequest>,
) -> Response {
    debug!("Loading result: mode={}", request.mode);

    let mut record = match request.mode.as_str() {
        "remote" => {
            let id = match request.id {
                Some(id) => id,
                None => return (StatusCode::BAD_REQUEST, "remote mode requires id").into_response(),
            };
            match backend::fetch_result(&state.session, &id).await {
                Ok(record) => record,
                Err(e) => {
                    error!("Remote fetch failed for {}: {}", id, e);
                    return StatusCode::BAD_GATEWAY.into_response();
                }
            }
        }
        "file" => {
            let path = match request.path {
                Some(path) => path,
                None => return (StatusCode::BAD_REQUEST, "file mode requires path").into_response(),
            };
            let data = match tokio::fs::read_to_string(&path).await {
                Ok(data) => data,
                Err(e) => {
                    error!("Failed to read result file {}: {}", path, e);
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            };
            match serde_json::from_str::<BehavioralResult>(&data) {
                Ok(record) => record,
                Err(e) => {
                    error!("Failed to parse result file {}: {}", path, e);
                    return StatusCode::UNPROCESSABLE_ENTITY.into_response();
                }
            }
        }
        "inline" => match request.record {
            Some(record) => record,
            None => return (StatusCode::BAD_REQUEST, "inline mode requires record").into_response(),
        },
        other => {
            error!("Unknown load mode: {}", other);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    if record.id.is_empty() {
        record.id = Uuid::new_v4().to_string();
    }

    // The upstream approved flag is advisory; classify here
    annotate_approvals(&mut record.result);

    let duration_seconds = record_duration(&record);
    let response = LoadResultResponse {
        id: record.id.clone(),
        question: record.question.clone(),
        phrase_count: record.result.len(),
        sample_count: record.body.len(),
        duration_seconds,
    };

    info!(
        "Registered result {} ({} phrases, {:.0}s)",
        response.id, response.phrase_count, duration_seconds
    );

    let mut results = state.results.write().await;
    results.insert(record.id.clone(), Arc::new(record));

    Json(response).into_response()
}


async fn list_results(
    State(state): State<AppState>,
) -> impl IntoResponse {
    let results = state.results.read().await;

    let mut out: Vec<ResultSummary> = results
        .values()
        .map(|record| ResultSummary {
            id: record.id.clone(),
            question: record.question.clone(),
            phrase_count: record.result.len(),
            approved_count: record.result.iter().filter(|s| s.approved).count(),
            duration_seconds: record_duration(record),
        })
        .collect();
    out.sort_by(|a, b| a.id.cmp(&b.id));

    Json(out)
}


async fn result_chart(
    State(state): State<AppState>,
    Path(result_id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Response {
    let record = match lookup(&state, &result_id).await {
        Some(record) => record,
        None => return StatusCode::NOT_FOUND.into_response(),
    };

    let chart = conf_helper::get_cached_config().chart;
    let interval = query.interval.unwrap_or(chart.interval_seconds);
    let duration = record_duration(&record);

    match engagement_chart(&record.voice, &record.body, duration, interval) {
        Ok(series) => Json(series).into_response(),
        // Invalid input: the frontend shows its neutral empty state
        Err(e) => {
            error!("Chart aggregation failed for {}: {}", result_id, e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(AnalysisFailure { error: e.to_string() }),
            )
                .into_response()
        }
    }
}


async fn result_phrases(
    State(state): State<AppState>,
    Path(result_id): Path<String>,
) -> Response {
    match lookup(&state, &result_id).await {
        Some(record) => {
            let phrases: Vec<PhraseSegment> = record.result.clone();
            Json(phrases).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}


async fn active_phrase(
    State(state): State<AppState>,
    Path(result_id): Path<String>,
    Query(query): Query<TimeQuery>,
) -> Response {
    match lookup(&state, &result_id).await {
        Some(record) => {
            let index = locate_active(&record.result, query.t);
            Json(ActivePhraseResponse { index }).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}


async fn ws_stream(
    State(state): State<AppState>,
    Path(result_id): Path<String>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let record = match lookup(&state, &result_id).await {
        Some(record) => record,
        None => {
            error!("Result not found: {}", result_id);
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let interval = conf_helper::get_cached_config().chart.interval_seconds;
    let duration = record_duration(&record);

    ws.on_upgrade(move |socket| handle_ws_stream(socket, record, duration, interval))
}


/// Proxy for the backend question record, so the result page can show the
/// original prompt next to the analysis.
async fn interview_lookup(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Response {
    match backend::fetch_interview(&state.session, &question_id).await {
        Ok(interview) => Json(interview).into_response(),
        Err(e) => {
            error!("Interview fetch failed for {}: {}", question_id, e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}


async fn lookup(state: &AppState, result_id: &str) -> Option<Arc<BehavioralResult>> {
    let results = state.results.read().await;
    results.get(result_id).cloned()
}

/// Reported duration when the record carries one, otherwise the configured
/// sample-rate derivation.
fn record_duration(record: &BehavioralResult) -> f64 {
    let chart = conf_helper::get_cached_config().chart;
    record
        .total_video_length
        .unwrap_or_else(|| derived_duration_seconds(record.body.len(), chart.samples_per_second))
}
