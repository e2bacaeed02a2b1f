// Wire models for records fetched from the coaching backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use preplens_core::PhraseSegment;

/// Full behavioral interview result as served by the backend: overall scores,
/// the two parallel per-frame engagement signals and the ordered phrase
/// analysis list. Mixed snake/camel field names follow the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralResult {
    /// May be absent on records that were never persisted (e.g. inline
    /// uploads); the ingest path assigns one then.
    #[serde(default)]
    pub id: String,
    pub question: String,
    pub answer: String,
    pub summary: String,
    #[serde(rename = "totalVideoLength", default)]
    pub total_video_length: Option<f64>,
    pub improvement: Vec<String>,
    pub relevance: f64,
    pub clarity: f64,
    pub originality: f64,
    pub engagement: f64,
    pub body: Vec<f64>,
    pub voice: Vec<f64>,
    pub result: Vec<PhraseSegment>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: String,
    pub question: String,
    pub video: String,
    pub status: InterviewStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "analyzing")]
    Analyzing,
}

/// Subset of the OAuth userinfo payload the product cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}
