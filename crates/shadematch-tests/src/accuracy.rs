//! Accuracy measurement
//!
//! Conversion differences are measured as Euclidean distance in OKLab, the
//! same metric the ranking engine uses, so a parity tolerance reads directly
//! as "how much could this shift a ranking".

use rayon::prelude::*;
use shadematch_core::{PerceptualColor, Rgb8};

/// Statistics over a set of per-color differences
#[derive(Debug, Clone)]
pub struct DeltaStats {
    /// Mean difference across all samples
    pub mean: f64,
    /// Maximum difference
    pub max: f64,
    /// 95th percentile difference
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaStats {
    /// Build statistics from raw differences
    pub fn from_deltas(mut deltas: Vec<f64>) -> Self {
        deltas.sort_by(|a, b| a.total_cmp(b));

        let count = deltas.len();
        let mean = if count == 0 {
            0.0
        } else {
            deltas.iter().sum::<f64>() / count as f64
        };
        let max = deltas.last().copied().unwrap_or(0.0);
        let p95_idx = (count as f64 * 0.95) as usize;
        let p95 = deltas.get(p95_idx).copied().unwrap_or(max);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check if every difference is below `epsilon`
    pub fn within(&self, epsilon: f64) -> bool {
        self.max < epsilon
    }
}

/// Compare our conversion with a reference conversion over a color set
pub fn compare_conversions<F>(colors: &[Rgb8], reference: F) -> DeltaStats
where
    F: Fn(Rgb8) -> PerceptualColor + Sync,
{
    let deltas = colors
        .par_iter()
        .map(|&c| PerceptualColor::from_rgb8(c).distance(&reference(c)))
        .collect();
    DeltaStats::from_deltas(deltas)
}

/// Largest per-channel error (in 8-bit steps) after sRGB → OKLab → sRGB
pub fn roundtrip_stats(colors: &[Rgb8]) -> DeltaStats {
    let deltas = colors
        .par_iter()
        .map(|&c| {
            let back = PerceptualColor::from_rgb8(c).to_rgb8();
            c.to_array()
                .iter()
                .zip(back.to_array())
                .map(|(&a, b)| (a as f64 - b as f64).abs())
                .fold(0.0, f64::max)
        })
        .collect();
    DeltaStats::from_deltas(deltas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_of_identical() {
        let colors = [Rgb8::new(255, 128, 64), Rgb8::new(32, 16, 8)];
        let stats = compare_conversions(&colors, PerceptualColor::from_rgb8);
        assert!(stats.within(1e-12));
        assert_eq!(stats.count, 2);
    }

    #[test]
    fn test_stats_ordering() {
        let stats = DeltaStats::from_deltas(vec![3.0, 1.0, 2.0, 4.0]);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.p95, 4.0);
    }

    #[test]
    fn test_empty_stats() {
        let stats = DeltaStats::from_deltas(Vec::new());
        assert_eq!(stats.count, 0);
        assert!(stats.within(f64::EPSILON));
    }
}
