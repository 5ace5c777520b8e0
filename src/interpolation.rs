//! Piecewise-linear interpolation over a sorted table
//!
//! Queries inside the table interpolate between the bracketing nodes; queries
//! outside it extend the first or last segment linearly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for interpolator construction
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InterpolationError {
    #[error("At least two nodes are required, got {0}")]
    TooFewNodes(usize),
    #[error("Abscissa and ordinate lengths differ: {x} vs {y}")]
    LengthMismatch { x: usize, y: usize },
    #[error("Abscissa must be strictly increasing at index {index}")]
    NotIncreasing { index: usize },
}

/// A linear segment between two table nodes
#[derive(Clone, Debug)]
struct Segment {
    from: f64,
    value: f64,
    slope: f64,
}

impl Segment {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self.value + self.slope * (x - self.from)
    }
}

/// Linear interpolator with linear extrapolation past both ends
///
/// Serializes as its nodes; deserialization validates them like [`Self::new`].
#[derive(Serialize, Clone, Debug, Deserialize)]
#[serde(try_from = "Nodes", into = "Nodes")]
pub struct LinearInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    segments: Vec<Segment>,
}

#[derive(Serialize, Deserialize)]
struct Nodes {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TryFrom<Nodes> for LinearInterpolator {
    type Error = InterpolationError;

    fn try_from(nodes: Nodes) -> Result<Self, Self::Error> {
        LinearInterpolator::new(&nodes.x, &nodes.y)
    }
}

impl From<LinearInterpolator> for Nodes {
    fn from(interp: LinearInterpolator) -> Self {
        Nodes {
            x: interp.x,
            y: interp.y,
        }
    }
}

impl LinearInterpolator {
    /// Build the interpolator from nodes sorted by strictly increasing `x`
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(InterpolationError::TooFewNodes(x.len()));
        }
        if let Some(index) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(InterpolationError::NotIncreasing { index: index + 1 });
        }

        Ok(Self::from_sorted(x, y))
    }

    /// Build from nodes already known to be valid (equal lengths, at least
    /// two nodes, strictly increasing `x`)
    pub(crate) fn from_sorted(x: &[f64], y: &[f64]) -> Self {
        debug_assert!(x.len() == y.len() && x.len() >= 2);
        let segments = x
            .windows(2)
            .zip(y.windows(2))
            .map(|(xs, ys)| {
                Segment {
                    from: xs[0],
                    value: ys[0],
                    slope: (ys[1] - ys[0]) / (xs[1] - xs[0]),
                }
            })
            .collect();

        Self {
            x: x.to_vec(),
            y: y.to_vec(),
            segments,
        }
    }

    /// Whether `x` lies within the tabulated range
    #[inline]
    pub fn in_range(&self, x: f64) -> bool {
        let (low, high) = self.bounds();
        x >= low && x <= high
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Abscissa of the nodes
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Ordinate of the nodes
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Interpolated (or extrapolated) value at `x`
    pub fn eval(&self, x: f64) -> f64 {
        // Index of the last segment starting at or before x; clamps to the
        // end segments outside the table
        let idx = self
            .segments
            .partition_point(|s| s.from <= x)
            .saturating_sub(1);
        self.segments[idx].eval(x)
    }
}
