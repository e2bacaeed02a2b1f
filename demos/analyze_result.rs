// Example usage of the analysis core on a locally saved result record

use preplens_core::core::constants::{DEFAULT_INTERVAL_SECONDS, DEFAULT_SAMPLES_PER_SECOND};
use preplens_core::{
    aggregate, derived_duration_seconds, engagement_chart, is_approved, locate_active,
    PhraseSegment,
};
use serde::Deserialize;
use tracing::{info, Level};
use tracing_subscriber;

#[derive(Deserialize)]
struct SavedResult {
    voice: Vec<f64>,
    body: Vec<f64>,
    result: Vec<PhraseSegment>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    // Load a result record saved from the backend
    let data = std::fs::read_to_string("data/sample_result.json")?;
    let record: SavedResult = serde_json::from_str(&data)?;

    let duration = derived_duration_seconds(record.body.len(), DEFAULT_SAMPLES_PER_SECOND);
    info!(
        "Loaded record: {} samples, {} phrases, {:.0}s",
        record.body.len(),
        record.result.len(),
        duration
    );

    // Aggregate one signal on its own
    let voice_buckets = aggregate(&record.voice, duration, DEFAULT_INTERVAL_SECONDS)?;
    info!("Voice buckets: {}", voice_buckets.len());

    // Full chart payload with labels
    let chart = engagement_chart(&record.voice, &record.body, duration, DEFAULT_INTERVAL_SECONDS)?;
    for i in 0..chart.len().min(5) {
        info!(
            "  {} voice={:.3} body={:.3}",
            chart.labels[i], chart.voice[i], chart.body[i]
        );
    }

    // Walk a few playback times through the transcript
    for t in [0.0, 2.5, 10.0] {
        match locate_active(&record.result, t) {
            Some(i) => info!("t={:.1}s -> phrase [{}] {:?}", t, i, record.result[i].phrase),
            None => info!("t={:.1}s -> no phrase active yet", t),
        }
    }

    // Approval summary
    let approved = record.result.iter().filter(|s| is_approved(s)).count();
    info!("Approved phrases: {}/{}", approved, record.result.len());

    Ok(())
}
