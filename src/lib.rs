// PrepLens behavioral analysis core
// Main library entry point

pub mod core;

// Re-export main types
pub use crate::core::aggregate::{
    aggregate, chunk_size, derived_duration_seconds, engagement_chart, interval_labels,
};
pub use crate::core::approval::{annotate_approvals, is_approved, same_emotion_group};
pub use crate::core::constants::EmotionGroup;
pub use crate::core::error::{AnalysisError, Result};
pub use crate::core::format::{ChartSeries, PhraseSegment};
pub use crate::core::timeline::locate_active;

#[cfg(test)]
mod tests {
    #[test]
    fn test_constants() {
        use crate::core::constants::*;
        assert!(POSITIVE_EMOTIONS.iter().all(|e| !NEGATIVE_EMOTIONS.contains(e)));
        assert!(DEFAULT_INTERVAL_SECONDS > 0.0);
        assert!(DEFAULT_SAMPLES_PER_SECOND > 0.0);
    }
}
