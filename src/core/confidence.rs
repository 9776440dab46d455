//! Confidence presentation: percentage, color bucket, and ring geometry
//! for the radial gauge.

/// Gauge ring radius, in the same abstract units as the original meter.
pub const GAUGE_RADIUS: f64 = 48.0;

/// Confidence tier driving the gauge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBucket {
    Low,
    Medium,
    High,
}

impl ConfidenceBucket {
    /// Human-readable tier name for text output.
    pub fn label(self) -> &'static str {
        match self {
            ConfidenceBucket::Low => "low",
            ConfidenceBucket::Medium => "medium",
            ConfidenceBucket::High => "high",
        }
    }
}

/// Visual encoding of a confidence ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceDisplay {
    /// Rounded percentage, 0-100 (round half up).
    pub percentage: u8,
    pub bucket: ConfidenceBucket,
    /// Fraction of the ring to fill; equals the clamped ratio.
    pub arc_fraction: f64,
}

/// Map a confidence ratio to its visual encoding. The backend contract
/// does not validate the range, so out-of-range values (and NaN) are
/// clamped into [0, 1] here rather than passed through.
pub fn present(confidence: f64) -> ConfidenceDisplay {
    let c = if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    };
    let bucket = if c < 0.5 {
        ConfidenceBucket::Low
    } else if c < 0.75 {
        ConfidenceBucket::Medium
    } else {
        ConfidenceBucket::High
    };
    ConfidenceDisplay {
        percentage: (c * 100.0).round() as u8,
        bucket,
        arc_fraction: c,
    }
}

/// Ring circumference for the configured radius (2πr).
pub fn circumference() -> f64 {
    2.0 * std::f64::consts::PI * GAUGE_RADIUS
}

impl ConfidenceDisplay {
    /// Stroke dash offset for the ring: 0 at full confidence (complete
    /// ring), the full circumference at zero (empty ring).
    pub fn stroke_offset(&self) -> f64 {
        circumference() * (1.0 - self.arc_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_thresholds() {
        assert_eq!(present(0.49).bucket, ConfidenceBucket::Low);
        assert_eq!(present(0.5).bucket, ConfidenceBucket::Medium);
        assert_eq!(present(0.74).bucket, ConfidenceBucket::Medium);
        assert_eq!(present(0.75).bucket, ConfidenceBucket::High);
        assert_eq!(present(1.0).bucket, ConfidenceBucket::High);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(present(0.49).percentage, 49);
        assert_eq!(present(0.5).percentage, 50);
        assert_eq!(present(0.995).percentage, 100);
        assert_eq!(present(0.125).percentage, 13);
    }

    #[test]
    fn arc_fraction_matches_ratio() {
        assert_eq!(present(1.0).arc_fraction, 1.0);
        assert_eq!(present(0.0).arc_fraction, 0.0);
    }

    #[test]
    fn ring_is_complete_at_full_confidence() {
        assert_eq!(present(1.0).stroke_offset(), 0.0);
    }

    #[test]
    fn ring_is_empty_at_zero_confidence() {
        assert_eq!(present(0.0).stroke_offset(), circumference());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(present(1.7).percentage, 100);
        assert_eq!(present(1.7).arc_fraction, 1.0);
        assert_eq!(present(-0.2).percentage, 0);
        assert_eq!(present(-0.2).bucket, ConfidenceBucket::Low);
        assert_eq!(present(f64::NAN).percentage, 0);
    }
}
