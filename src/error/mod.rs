use thiserror::Error;

use crate::interpolation::InterpolationError;
use crate::report::ReportError;

/// Errors raised by the physiological estimators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Vo2Error {
    /// A parameter is outside the domain of the formula
    #[error("Invalid parameter: {param} = {value}")]
    InvalidParameter { param: String, value: String },

    /// Resting heart rate must be positive and below the maximum heart rate
    #[error("Invalid heart rate profile: HRmax = {hr_max}, HRrest = {hr_rest}")]
    InvalidHeartRateProfile { hr_max: f64, hr_rest: f64 },

    /// The exercise heart rate does not fall inside [HRrest, HRmax]
    #[error("Heart rate {hr} bpm outside [{hr_rest}, {hr_max}]")]
    HeartRateOutOfRange { hr: f64, hr_rest: f64, hr_max: f64 },

    /// Two paired series have different lengths
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A curve table already holds a column of this name
    #[error("Duplicate curve name: {name}")]
    DuplicateCurve { name: String },

    /// Least-squares fit could not be solved
    #[error("Polynomial fit failed: {0}")]
    Fit(String),

    /// Invalid interpolation table
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

impl Vo2Error {
    pub(crate) fn invalid(param: &str, value: impl ToString) -> Self {
        Vo2Error::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
        }
    }
}

/// Crate-level error, wrapping the estimator and report errors
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Error in the estimator: {0}")]
    Estimator(#[from] Vo2Error),
    #[error("Error writing report: {0}")]
    Report(#[from] ReportError),
    #[error("Error parsing options: {0}")]
    Options(#[from] serde_json::Error),
}

/// Reject non-finite or non-positive values of a divisor parameter
pub(crate) fn ensure_positive(param: &str, value: f64) -> Result<f64, Vo2Error> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Vo2Error::invalid(param, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("weight_kg", 63.0), Ok(63.0));
        assert!(ensure_positive("weight_kg", 0.0).is_err());
        assert!(ensure_positive("weight_kg", -1.0).is_err());
        assert!(ensure_positive("weight_kg", f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = Vo2Error::HeartRateOutOfRange {
            hr: 200.0,
            hr_rest: 65.0,
            hr_max: 185.0,
        };
        assert_eq!(err.to_string(), "Heart rate 200 bpm outside [65, 185]");

        let err = Vo2Error::invalid("age", 5.0);
        assert_eq!(err.to_string(), "Invalid parameter: age = 5");
    }

    #[test]
    fn test_calc_error_from_estimator() {
        let err: CalcError = Vo2Error::LengthMismatch { left: 2, right: 3 }.into();
        assert!(matches!(err, CalcError::Estimator(_)));
    }
}
