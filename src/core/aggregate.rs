// Fixed-interval downsampling of per-frame engagement signals

use crate::core::constants::LABEL_UNIT_SUFFIX;
use crate::core::error::{AnalysisError, Result};
use crate::core::format::ChartSeries;

/// Number of raw samples averaged into one chart point.
///
/// Derives the implicit sample rate (`len / duration`) and converts the
/// wall-clock interval into a sample count. Clamped to a minimum of 1: an
/// interval shorter than one sample period would otherwise compute 0 and the
/// chunked walk over the samples would never advance.
pub fn chunk_size(sample_count: usize, total_duration_seconds: f64, interval_seconds: f64) -> usize {
    let size = ((sample_count as f64 / total_duration_seconds) * interval_seconds).floor() as usize;
    size.max(1)
}

/// Average consecutive chunks of `samples` into one value per interval.
///
/// The final chunk may be shorter than the rest. Output length is
/// `ceil(len / chunk_size)`.
pub fn aggregate(
    samples: &[f64],
    total_duration_seconds: f64,
    interval_seconds: f64,
) -> Result<Vec<f64>> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptySamples);
    }
    if !(total_duration_seconds > 0.0) {
        return Err(AnalysisError::InvalidDuration(total_duration_seconds));
    }
    if !(interval_seconds > 0.0) {
        return Err(AnalysisError::InvalidInterval(interval_seconds));
    }

    let size = chunk_size(samples.len(), total_duration_seconds, interval_seconds);
    let mut aggregated = Vec::with_capacity(samples.len().div_ceil(size));

    for (i, chunk) in samples.chunks(size).enumerate() {
        // Cannot occur with size >= 1, guarded so a mean over nothing can
        // never produce NaN.
        if chunk.is_empty() {
            return Err(AnalysisError::EmptyChunk(i));
        }
        let sum: f64 = chunk.iter().sum();
        aggregated.push(sum / chunk.len() as f64);
    }

    Ok(aggregated)
}

/// Axis labels for aggregated buckets: `(index * interval)` with two decimals
/// and a unit suffix. Always aligns 1:1 with the aggregated values.
pub fn interval_labels(bucket_count: usize, interval_seconds: f64) -> Vec<String> {
    (0..bucket_count)
        .map(|i| format!("{:.2}{}", i as f64 * interval_seconds, LABEL_UNIT_SUFFIX))
        .collect()
}

/// Aggregate the two parallel engagement signals and attach axis labels.
///
/// Voice and body are produced by the same capture process and share length
/// and duration by construction; a mismatch is a caller precondition
/// violation and is not checked here.
pub fn engagement_chart(
    voice: &[f64],
    body: &[f64],
    total_duration_seconds: f64,
    interval_seconds: f64,
) -> Result<ChartSeries> {
    let voice = aggregate(voice, total_duration_seconds, interval_seconds)?;
    let body = aggregate(body, total_duration_seconds, interval_seconds)?;
    let labels = interval_labels(voice.len(), interval_seconds);

    Ok(ChartSeries { labels, voice, body })
}

/// Duration reported for a capture of `sample_count` frames at the given
/// sample rate, floored to whole seconds. The rate comes from configuration.
pub fn derived_duration_seconds(sample_count: usize, samples_per_second: f64) -> f64 {
    (sample_count as f64 / samples_per_second).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_two_second_buckets() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let out = aggregate(&samples, 10.0, 2.0).unwrap();
        assert_eq!(out, vec![1.5, 3.5, 5.5, 7.5, 9.5]);
    }

    #[test]
    fn test_aggregate_short_final_chunk() {
        // chunk size 3, final chunk holds a single sample
        let samples = [3.0, 6.0, 9.0, 1.0, 2.0, 3.0, 12.0];
        let out = aggregate(&samples, 7.0, 3.0).unwrap();
        assert_eq!(out, vec![6.0, 2.0, 12.0]);
    }

    #[test]
    fn test_output_length_matches_ceil() {
        let samples: Vec<f64> = (0..97).map(|i| i as f64).collect();
        let size = chunk_size(samples.len(), 97.0, 4.0);
        let out = aggregate(&samples, 97.0, 4.0).unwrap();
        assert_eq!(out.len(), samples.len().div_ceil(size));
    }

    #[test]
    fn test_chunk_size_clamped_to_one() {
        // one sample per second, half-second interval: floor(0.5) == 0
        assert_eq!(chunk_size(10, 10.0, 0.5), 1);

        let samples = [1.0, 2.0, 3.0, 4.0];
        let out = aggregate(&samples, 4.0, 0.5).unwrap();
        assert_eq!(out, samples.to_vec());
    }

    #[test]
    fn test_aggregate_never_nan() {
        let samples = [0.0, 0.0, 0.0];
        let out = aggregate(&samples, 3.0, 1.0).unwrap();
        assert!(out.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(matches!(
            aggregate(&[], 10.0, 2.0),
            Err(AnalysisError::EmptySamples)
        ));
        assert!(matches!(
            aggregate(&[1.0], 0.0, 2.0),
            Err(AnalysisError::InvalidDuration(_))
        ));
        assert!(matches!(
            aggregate(&[1.0], 10.0, -1.0),
            Err(AnalysisError::InvalidInterval(_))
        ));
        assert!(matches!(
            aggregate(&[1.0], f64::NAN, 2.0),
            Err(AnalysisError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_aggregate_deterministic() {
        let samples = [0.2, 0.4, 0.6, 0.8, 1.0, 0.9];
        let first = aggregate(&samples, 6.0, 2.0).unwrap();
        let second = aggregate(&samples, 6.0, 2.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_interval_labels_format() {
        let labels = interval_labels(3, 2.0);
        assert_eq!(labels, vec!["0.00s", "2.00s", "4.00s"]);
    }

    #[test]
    fn test_engagement_chart_alignment() {
        let voice = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
        let body = [4.0, 4.0, 5.0, 5.0, 6.0, 6.0];
        let chart = engagement_chart(&voice, &body, 6.0, 2.0).unwrap();
        assert_eq!(chart.labels.len(), chart.voice.len());
        assert_eq!(chart.voice.len(), chart.body.len());
        assert_eq!(chart.voice, vec![1.0, 2.0, 3.0]);
        assert_eq!(chart.body, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_derived_duration() {
        assert_eq!(derived_duration_seconds(120, 4.0), 30.0);
        assert_eq!(derived_duration_seconds(123, 4.0), 30.0);
    }
}
