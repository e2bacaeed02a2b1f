// Data structures shared by the analysis core

use serde::{Deserialize, Serialize};

/// One timestamped transcript phrase with expected vs. observed annotations.
/// Field names follow the backend wire format: `emotion` and `gesture` are the
/// expected values, the `actual_*` pair is what was observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseSegment {
    pub phrase: String,
    pub emotion: String,
    pub gesture: bool,
    pub start_time: f64,
    pub end_time: f64,
    pub actual_emotion: String,
    pub actual_gesture: bool,
    #[serde(default)]
    pub approved: bool,
}

/// Chart-ready aggregation of the two parallel engagement signals.
/// Labels align 1:1 with both value series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub voice: Vec<f64>,
    pub body: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
