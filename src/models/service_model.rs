// Service configuration loaded from preplens.json

use serde::{Deserialize, Serialize};

use preplens_core::core::constants::{DEFAULT_INTERVAL_SECONDS, DEFAULT_SAMPLES_PER_SECOND};

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub id: String,
    pub version: String,
    pub description: String,
    pub enabled: bool,
    pub backend_url: String,
    pub session_path: String,
    pub connection: Connection,
    #[serde(default)]
    pub chart: ChartOptions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Connection {
    pub ip: String,
    pub port: u16,
}

/// Chart tuning knobs. `samples_per_second` carries the upstream capture
/// convention (duration = floor(len / rate)); it is configuration because the
/// derivation is undocumented upstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: f64,
    #[serde(default = "default_samples_per_second")]
    pub samples_per_second: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
            samples_per_second: DEFAULT_SAMPLES_PER_SECOND,
        }
    }
}

fn default_interval_seconds() -> f64 {
    DEFAULT_INTERVAL_SECONDS
}

fn default_samples_per_second() -> f64 {
    DEFAULT_SAMPLES_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_options_default_when_missing() {
        let raw = r#"{
            "name": "preplens-analysis",
            "id": "ext-01",
            "version": "0.2.0",
            "description": "behavioral result analysis",
            "enabled": true,
            "backend_url": "127.0.0.1:9000",
            "session_path": "session.json",
            "connection": { "ip": "127.0.0.1", "port": 0 }
        }"#;

        let config: ServiceConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.chart.interval_seconds, DEFAULT_INTERVAL_SECONDS);
        assert_eq!(config.chart.samples_per_second, DEFAULT_SAMPLES_PER_SECOND);
    }
}
