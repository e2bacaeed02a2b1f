// Defaults and emotion grouping tables for behavioral analysis

/// Default wall-clock aggregation interval used by the engagement chart.
pub const DEFAULT_INTERVAL_SECONDS: f64 = 2.0;

/// The upstream capture process emits four samples per second of video and
/// reports duration as floor(len / 4). Undocumented upstream convention,
/// kept as a configurable default rather than domain truth.
pub const DEFAULT_SAMPLES_PER_SECOND: f64 = 4.0;

/// Unit suffix appended to chart axis labels.
pub const LABEL_UNIT_SUFFIX: &str = "s";

pub const POSITIVE_EMOTIONS: &[&str] = &[
    "happy",
    "joy",
    "excited",
    "surprised",
    "calm",
    "confident",
    "hopeful",
];

pub const NEGATIVE_EMOTIONS: &[&str] = &[
    "sad",
    "angry",
    "fearful",
    "disgusted",
    "anxious",
    "frustrated",
    "bored",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionGroup {
    Positive,
    Negative,
}

impl EmotionGroup {
    /// Look an emotion name up in the two fixed disjoint sets.
    /// Names outside both sets belong to no group.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if POSITIVE_EMOTIONS.contains(&name.as_str()) {
            Some(EmotionGroup::Positive)
        } else if NEGATIVE_EMOTIONS.contains(&name.as_str()) {
            Some(EmotionGroup::Negative)
        } else {
            None
        }
    }
}
