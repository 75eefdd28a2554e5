//! Points band classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest points total that counts as limited capability for work
pub const HIGH_POINTS_THRESHOLD: u32 = 15;

/// Partition of the points total at [`HIGH_POINTS_THRESHOLD`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointsBand {
    /// Fewer than 15 points
    Low,
    /// 15 points or more
    High,
}

impl PointsBand {
    pub const ALL: [PointsBand; 2] = [PointsBand::Low, PointsBand::High];

    /// Classifies a points total
    ///
    /// # Example
    ///
    /// ```
    /// use domain_decision::PointsBand;
    ///
    /// assert_eq!(PointsBand::classify(14), PointsBand::Low);
    /// assert_eq!(PointsBand::classify(15), PointsBand::High);
    /// ```
    pub fn classify(points: u32) -> Self {
        if points >= HIGH_POINTS_THRESHOLD {
            PointsBand::High
        } else {
            PointsBand::Low
        }
    }

    /// Message fragment for a case that falls in this band
    pub fn satisfied_fragment(self) -> &'static str {
        match self {
            PointsBand::Low => "awarded less than 15 points",
            PointsBand::High => "awarded 15 points or more",
        }
    }

    /// Message fragment for a case that was expected in this band but is not
    pub fn unmet_fragment(self) -> &'static str {
        match self {
            PointsBand::Low => "not awarded less than 15 points",
            PointsBand::High => "not awarded 15 points or more",
        }
    }
}

impl fmt::Display for PointsBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointsBand::Low => write!(f, "less than {} points", HIGH_POINTS_THRESHOLD),
            PointsBand::High => write!(f, "{} points or more", HIGH_POINTS_THRESHOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(PointsBand::classify(0), PointsBand::Low);
        assert_eq!(PointsBand::classify(14), PointsBand::Low);
        assert_eq!(PointsBand::classify(15), PointsBand::High);
        assert_eq!(PointsBand::classify(99), PointsBand::High);
    }

    #[test]
    fn test_fragments_mention_threshold() {
        for band in PointsBand::ALL {
            assert!(band.satisfied_fragment().contains("15 points"));
            assert!(band.unmet_fragment().starts_with("not "));
        }
    }

    proptest! {
        #[test]
        fn band_is_monotonic(a in 0u32..200, b in 0u32..200) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            if PointsBand::classify(low) == PointsBand::High {
                prop_assert_eq!(PointsBand::classify(high), PointsBand::High);
            }
        }
    }
}
