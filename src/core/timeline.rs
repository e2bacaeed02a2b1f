// Playback-time lookup over ordered transcript segments

use crate::core::format::PhraseSegment;

/// Index of the segment active at `current_time_seconds`, or `None` when the
/// time falls before the first segment or the list is empty.
///
/// A segment is active from its own `start_time` up to the next segment's
/// `start_time` (exclusive); the last segment stays active indefinitely.
/// `end_time` is deliberately not consulted, which tolerates gaps and
/// overlaps in authored end times.
///
/// Linear scan; segments are assumed pre-sorted by `start_time`. Called on
/// every playback tick, so it allocates nothing.
pub fn locate_active(segments: &[PhraseSegment], current_time_seconds: f64) -> Option<usize> {
    segments.iter().enumerate().find_map(|(i, segment)| {
        if current_time_seconds < segment.start_time {
            return None;
        }
        match segments.get(i + 1) {
            Some(next) if current_time_seconds >= next.start_time => None,
            _ => Some(i),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment_at(start_time: f64) -> PhraseSegment {
        PhraseSegment {
            phrase: String::new(),
            emotion: "happy".to_owned(),
            gesture: true,
            start_time,
            end_time: start_time + 1.0,
            actual_emotion: "happy".to_owned(),
            actual_gesture: true,
            approved: false,
        }
    }

    #[test]
    fn test_locate_boundaries() {
        let segments = vec![segment_at(0.0), segment_at(5.0), segment_at(12.0)];

        assert_eq!(locate_active(&segments, 0.0), Some(0));
        assert_eq!(locate_active(&segments, 4.9), Some(0));
        assert_eq!(locate_active(&segments, 5.0), Some(1));
        assert_eq!(locate_active(&segments, 11.9), Some(1));
        assert_eq!(locate_active(&segments, 12.0), Some(2));
        assert_eq!(locate_active(&segments, 100.0), Some(2));
        assert_eq!(locate_active(&segments, -1.0), None);
    }

    #[test]
    fn test_locate_empty_list() {
        assert_eq!(locate_active(&[], 0.0), None);
        assert_eq!(locate_active(&[], 42.0), None);
    }

    #[test]
    fn test_locate_ignores_end_time() {
        // end_time of the first segment is far past the second's start;
        // the neighbor's start still wins.
        let mut first = segment_at(0.0);
        first.end_time = 50.0;
        let segments = vec![first, segment_at(5.0)];

        assert_eq!(locate_active(&segments, 6.0), Some(1));
    }

    #[test]
    fn test_locate_deterministic() {
        let segments = vec![segment_at(0.0), segment_at(3.0)];
        assert_eq!(
            locate_active(&segments, 2.5),
            locate_active(&segments, 2.5)
        );
    }
}
