use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::Vo2Error;

/// A named series of values aligned with the table abscissa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub name: String,
    pub values: Array1<f64>,
}

/// Columns of curves sharing one abscissa
///
/// Every curve has the abscissa length and a unique name; deserialization
/// checks both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCurveTable")]
pub struct CurveTable {
    x_label: String,
    x: Array1<f64>,
    curves: Vec<Curve>,
}

#[derive(Deserialize)]
struct RawCurveTable {
    x_label: String,
    x: Array1<f64>,
    curves: Vec<Curve>,
}

impl TryFrom<RawCurveTable> for CurveTable {
    type Error = Vo2Error;

    fn try_from(raw: RawCurveTable) -> Result<Self, Self::Error> {
        let mut table = CurveTable::new(raw.x_label, raw.x);
        for curve in raw.curves {
            table.push(curve.name, curve.values)?;
        }
        Ok(table)
    }
}

impl CurveTable {
    pub fn new(x_label: impl Into<String>, x: Array1<f64>) -> Self {
        Self {
            x_label: x_label.into(),
            x,
            curves: Vec::new(),
        }
    }

    /// Append a curve
    ///
    /// # Errors
    ///
    /// Returns [`Vo2Error::LengthMismatch`] if `values` does not match the
    /// abscissa length and [`Vo2Error::DuplicateCurve`] if a curve of the
    /// same name exists.
    pub fn push(&mut self, name: impl Into<String>, values: Array1<f64>) -> Result<(), Vo2Error> {
        let name = name.into();
        if self.curve(&name).is_some() {
            return Err(Vo2Error::DuplicateCurve { name });
        }
        if values.len() != self.x.len() {
            return Err(Vo2Error::LengthMismatch {
                left: self.x.len(),
                right: values.len(),
            });
        }
        self.curves.push(Curve { name, values });
        Ok(())
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn curve(&self, name: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.name == name)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
