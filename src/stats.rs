//! Mean/median aggregation over timing samples.

use crate::error::{BenchError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
}

/// Aggregate a non-empty sample set. Median follows the usual rule:
/// middle value for odd counts, average of the two middle values for even.
pub fn summarize(samples: &[f64]) -> Result<Summary> {
    if samples.is_empty() {
        return Err(BenchError::EmptySamples);
    }

    let mean = samples.iter().sum::<f64>() / samples.len() as f64;

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    };

    Ok(Summary { mean, median })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_count() {
        let summary = summarize(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(summary.mean, 20.0);
        assert_eq!(summary.median, 20.0);
    }

    #[test]
    fn test_even_count() {
        let summary = summarize(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(summary.mean, 25.0);
        assert_eq!(summary.median, 25.0);
    }

    #[test]
    fn test_unsorted_input() {
        let summary = summarize(&[30.0, 10.0, 20.0]).unwrap();
        assert_eq!(summary.median, 20.0);
    }

    #[test]
    fn test_single_sample() {
        let summary = summarize(&[7.5]).unwrap();
        assert_eq!(summary.mean, 7.5);
        assert_eq!(summary.median, 7.5);
    }

    #[test]
    fn test_empty_samples() {
        assert!(matches!(summarize(&[]), Err(BenchError::EmptySamples)));
    }
}
