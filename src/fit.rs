//! Least-squares polynomial fitting

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::Vo2Error;

/// Polynomial with coefficients in ascending order, `c[0] + c[1] x + ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluate with Horner's scheme
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

/// Fit a polynomial of the given degree to `(x, y)` by least squares
///
/// The Vandermonde system is solved through SVD, so an exactly determined
/// system reproduces its points and an overdetermined one returns the
/// minimum-residual coefficients.
///
/// # Errors
///
/// Returns [`Vo2Error::LengthMismatch`] if `x` and `y` differ in length and
/// [`Vo2Error::Fit`] when there are fewer points than coefficients or the
/// system cannot be solved.
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Result<Polynomial, Vo2Error> {
    if x.len() != y.len() {
        return Err(Vo2Error::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n_coeff = degree + 1;
    if x.len() < n_coeff {
        return Err(Vo2Error::Fit(format!(
            "{} points cannot determine {} coefficients",
            x.len(),
            n_coeff
        )));
    }

    let vandermonde = DMatrix::from_fn(x.len(), n_coeff, |i, j| x[i].powi(j as i32));
    let rhs = DVector::from_column_slice(y);

    let solution = vandermonde
        .svd(true, true)
        .solve(&rhs, 1e-12)
        .map_err(|e| Vo2Error::Fit(e.to_string()))?;

    if solution.iter().any(|c| !c.is_finite()) {
        return Err(Vo2Error::Fit("non-finite coefficient".to_string()));
    }

    Ok(Polynomial::new(solution.iter().copied().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let p = polyfit(&x, &y, 1).unwrap();

        assert_relative_eq!(p.coefficients()[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(p.coefficients()[1], 2.0, epsilon = 1e-10);
        assert_relative_eq!(p.eval(10.0), 21.0, epsilon = 1e-9);
    }

    #[test]
    fn test_regression_line() {
        let x = [10.0, 15.0, 20.0, 25.0, 30.0];
        let y = [4.8, 5.9, 7.1, 8.4, 9.8];
        let p = polyfit(&x, &y, 1).unwrap();

        assert_relative_eq!(p.coefficients()[1], 0.25, epsilon = 1e-10);
        assert_relative_eq!(p.coefficients()[0], 2.2, epsilon = 1e-9);
    }

    #[test]
    fn test_quadratic() {
        let x = [-1.0, 0.0, 1.0, 2.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v * v - v + 0.5).collect();
        let p = polyfit(&x, &y, 2).unwrap();

        assert_eq!(p.degree(), 2);
        assert_relative_eq!(p.eval(3.0), 15.5, epsilon = 1e-9);
    }

    #[test]
    fn test_mismatch_and_underdetermined() {
        assert!(matches!(
            polyfit(&[1.0, 2.0], &[1.0], 1),
            Err(Vo2Error::LengthMismatch { left: 2, right: 1 })
        ));
        assert!(matches!(polyfit(&[1.0], &[1.0], 1), Err(Vo2Error::Fit(_))));
    }
}
