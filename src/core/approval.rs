// Expected-vs-observed approval for transcript phrases

use crate::core::constants::EmotionGroup;
use crate::core::format::PhraseSegment;

/// True when both emotions resolve to a group and the groups match.
/// Emotions outside both groups never match, including against themselves.
pub fn same_emotion_group(expected: &str, actual: &str) -> bool {
    match (EmotionGroup::from_name(expected), EmotionGroup::from_name(actual)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// A phrase is approved when the observed gesture polarity matches the
/// expected one and both emotions fall in the same group.
pub fn is_approved(segment: &PhraseSegment) -> bool {
    segment.gesture == segment.actual_gesture
        && same_emotion_group(&segment.emotion, &segment.actual_emotion)
}

/// Recompute the `approved` flag on every segment. Applied on ingest so the
/// flag reflects this service's classifier rather than whatever the upstream
/// record carried.
pub fn annotate_approvals(segments: &mut [PhraseSegment]) {
    for segment in segments.iter_mut() {
        segment.approved = is_approved(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(
        expected_emotion: &str,
        actual_emotion: &str,
        expected_gesture: bool,
        actual_gesture: bool,
    ) -> PhraseSegment {
        PhraseSegment {
            phrase: "so tell me about yourself".to_owned(),
            emotion: expected_emotion.to_owned(),
            gesture: expected_gesture,
            start_time: 0.0,
            end_time: 2.0,
            actual_emotion: actual_emotion.to_owned(),
            actual_gesture,
            approved: false,
        }
    }

    #[test]
    fn test_same_group_approves() {
        assert!(is_approved(&segment("happy", "joy", true, true)));
    }

    #[test]
    fn test_gesture_mismatch_rejects() {
        assert!(!is_approved(&segment("happy", "joy", true, false)));
    }

    #[test]
    fn test_cross_group_rejects() {
        assert!(!is_approved(&segment("happy", "sad", true, true)));
    }

    #[test]
    fn test_unknown_emotion_never_matches() {
        assert!(!same_emotion_group("quizzical", "quizzical"));
        assert!(!same_emotion_group("happy", "quizzical"));
    }

    #[test]
    fn test_group_lookup_case_insensitive() {
        assert!(same_emotion_group("Happy", "JOY"));
        assert_eq!(EmotionGroup::from_name("Angry"), Some(EmotionGroup::Negative));
    }

    #[test]
    fn test_annotate_approvals() {
        let mut segments = vec![
            segment("happy", "joy", true, true),
            segment("calm", "angry", false, false),
        ];
        annotate_approvals(&mut segments);
        assert!(segments[0].approved);
        assert!(!segments[1].approved);
    }
}
