use axum::extract::ws::{Message, WebSocket};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use preplens_core::engagement_chart;

use crate::models::result_model::BehavioralResult;

#[derive(Serialize)]
struct ChartPointPayload {
    label: String,
    voice: f64,
    body: f64,
    seq: u64,
    end_flag: bool,
}

/// Stream the aggregated engagement chart point by point, closing with an
/// end-flag frame so the client knows the series is complete.
pub async fn handle_ws_stream(
    mut socket: WebSocket,
    record: Arc<BehavioralResult>,
    duration_seconds: f64,
    interval_seconds: f64,
) {
    info!("chart stream started: {}", record.id);

    let series = match engagement_chart(
        &record.voice,
        &record.body,
        duration_seconds,
        interval_seconds,
    ) {
        Ok(series) => series,
        Err(e) => {
            error!("chart aggregation failed: {}", e);
            return;
        }
    };

    let mut seq: u64 = 0;

    for i in 0..series.len() {
        let payload = ChartPointPayload {
            label: series.labels[i].clone(),
            voice: series.voice[i],
            body: series.body[i],
            seq,
            end_flag: false,
        };

        let json = match serde_json::to_string(&payload) {
            Ok(j) => j,
            Err(e) => {
                error!("json serialize error: {}", e);
                return;
            }
        };

        if let Err(e) = socket.send(Message::Text(json.into())).await {
            warn!("ws send failed: {}", e);
            return;
        }

        seq += 1;
    }

    let end_payload = ChartPointPayload {
        label: String::new(),
        voice: 0.0,
        body: 0.0,
        seq,
        end_flag: true,
    };

    if let Ok(json) = serde_json::to_string(&end_payload) {
        let _ = socket.send(Message::Text(json.into())).await;
    }

    info!("chart stream finished: {}", record.id);
}
