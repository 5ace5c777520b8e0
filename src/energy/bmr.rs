//! Basal Metabolic Rate
//!
//! The number of kcal burned by basic life-sustaining function, also termed
//! Resting Metabolic Rate: the calories burned staying in bed all day.
//!
//! | Formula | Men | Women |
//! |---------|-----|-------|
//! | Mifflin-St Jeor | 10W + 6.25H - 5A + 5 | 10W + 6.25H - 5A - 161 |
//! | Revised Harris-Benedict | 13.397W + 4.799H - 5.677A + 88.362 | 9.247W + 3.098H - 4.330A + 447.593 |
//! | Katch-McArdle | 370 + 21.6(1 - F)W | same |
//!
//! W is weight in kg, H height in cm, A age in years, F body fat fraction.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Vo2Error;
use crate::subject::Gender;

/// BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    #[default]
    MifflinStJeor,
    RevisedHarrisBenedict,
    /// Lean-mass based; uses body fat, ignores height, age and sex
    #[serde(rename = "katch_mcardle")]
    KatchMcArdle,
}

impl BmrFormula {
    pub const fn name(&self) -> &'static str {
        match self {
            BmrFormula::MifflinStJeor => "mifflin_st_jeor",
            BmrFormula::RevisedHarrisBenedict => "revised_harris_benedict",
            BmrFormula::KatchMcArdle => "katch_mcardle",
        }
    }
}

impl FromStr for BmrFormula {
    type Err = Vo2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "mifflin_st_jeor" | "mifflin" => Ok(BmrFormula::MifflinStJeor),
            "revised_harris_benedict" | "harris_benedict" => Ok(BmrFormula::RevisedHarrisBenedict),
            "katch_mcardle" => Ok(BmrFormula::KatchMcArdle),
            other => Err(Vo2Error::invalid("bmr_formula", other)),
        }
    }
}

/// Basal metabolic rate in kcal/day
///
/// # Arguments
///
/// * `weight_kg` - Body weight in kg
/// * `height_cm` - Height in cm
/// * `age` - Age in years
/// * `body_fat_pct` - Body fat in percent (Katch-McArdle only)
/// * `gender` - Sex of the subject
/// * `formula` - Equation to use
pub fn bmr(
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    body_fat_pct: f64,
    gender: Gender,
    formula: BmrFormula,
) -> f64 {
    let (w, h, a) = (weight_kg, height_cm, age);
    match (formula, gender) {
        (BmrFormula::MifflinStJeor, Gender::Male) => 10.0 * w + 6.25 * h - 5.0 * a + 5.0,
        (BmrFormula::MifflinStJeor, Gender::Female) => 10.0 * w + 6.25 * h - 5.0 * a - 161.0,
        (BmrFormula::RevisedHarrisBenedict, Gender::Male) => {
            13.397 * w + 4.799 * h - 5.677 * a + 88.362
        }
        (BmrFormula::RevisedHarrisBenedict, Gender::Female) => {
            9.247 * w + 3.098 * h - 4.330 * a + 447.593
        }
        (BmrFormula::KatchMcArdle, _) => 370.0 + 21.6 * (1.0 - body_fat_pct / 100.0) * w,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mifflin() {
        let male = bmr(63.0, 169.0, 51.0, 19.0, Gender::Male, BmrFormula::MifflinStJeor);
        assert_relative_eq!(male, 1436.25, epsilon = 1e-10);

        let female = bmr(63.0, 169.0, 51.0, 19.0, Gender::Female, BmrFormula::MifflinStJeor);
        assert_relative_eq!(female, 1270.25, epsilon = 1e-10);
        assert_relative_eq!(male - female, 166.0, epsilon = 1e-10);
    }

    #[test]
    fn test_harris_benedict() {
        let formula = BmrFormula::RevisedHarrisBenedict;
        assert_relative_eq!(
            bmr(63.0, 169.0, 51.0, 19.0, Gender::Male, formula),
            1453.877,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            bmr(63.0, 169.0, 51.0, 19.0, Gender::Female, formula),
            1332.886,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_katch_mcardle() {
        let male = bmr(63.0, 169.0, 51.0, 19.0, Gender::Male, BmrFormula::KatchMcArdle);
        let female = bmr(63.0, 180.0, 30.0, 19.0, Gender::Female, BmrFormula::KatchMcArdle);
        assert_relative_eq!(male, 1472.248, epsilon = 1e-9);
        assert_relative_eq!(male, female);
    }

    #[test]
    fn test_formula_parsing() {
        assert_eq!(
            "Katch-McArdle".parse::<BmrFormula>().unwrap(),
            BmrFormula::KatchMcArdle
        );
        assert_eq!(
            "harris benedict".parse::<BmrFormula>().unwrap(),
            BmrFormula::RevisedHarrisBenedict
        );
        assert!("unknown".parse::<BmrFormula>().is_err());
        assert_eq!(BmrFormula::default(), BmrFormula::MifflinStJeor);
    }

    #[test]
    fn test_serialized_name_matches() {
        let formulas = [
            BmrFormula::MifflinStJeor,
            BmrFormula::RevisedHarrisBenedict,
            BmrFormula::KatchMcArdle,
        ];
        for formula in formulas {
            let json = serde_json::to_string(&formula).unwrap();
            assert_eq!(json, format!("\"{}\"", formula.name()));
            assert_eq!(formula.name().parse::<BmrFormula>().unwrap(), formula);
            assert_eq!(serde_json::from_str::<BmrFormula>(&json).unwrap(), formula);
        }
    }
}
