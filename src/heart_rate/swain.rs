use crate::constants::swain::{INTERCEPT, SLOPE};

/// %VO2max from %HRmax
///
/// %VO2max = (%HRmax - 37.182) / 0.6463
///
/// Swain DP et al. Target heart rates for the development of
/// cardiorespiratory fitness. Med Sci Sports Exerc. 1994;26(1):112-116.
#[inline]
pub fn swain(percentage_hrmax: f64) -> f64 {
    (percentage_hrmax - INTERCEPT) / SLOPE
}

/// %HRmax from %VO2max, the inverse of [`swain`]
#[inline]
pub fn invert_swain(percentage_vo2max: f64) -> f64 {
    SLOPE * percentage_vo2max + INTERCEPT
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_swain_reference() {
        assert_relative_eq!(swain(80.0), 66.2509670431688, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        for pct in (40..=100).map(f64::from) {
            assert_relative_eq!(swain(invert_swain(pct)), pct, epsilon = 1e-10);
            assert_relative_eq!(invert_swain(swain(pct)), pct, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_monotonic() {
        assert!(swain(90.0) > swain(70.0));
    }
}
