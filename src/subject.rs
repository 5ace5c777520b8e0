//! Subject descriptors shared by the estimators

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::Vo2Error;

/// Biological sex used by the sex-specific regressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Binary indicator used in the regression equations (male = 1, female = 0)
    #[inline]
    pub fn indicator(&self) -> f64 {
        match self {
            Gender::Female => 0.0,
            Gender::Male => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = Vo2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" | "f" | "woman" => Ok(Gender::Female),
            "male" | "m" | "man" => Ok(Gender::Male),
            other => Err(Vo2Error::invalid("gender", other)),
        }
    }
}

/// Maximum and resting heart rate of a subject, in beats per minute
///
/// Construction validates `0 < hr_rest < hr_max`, so every formula dividing
/// by the heart rate reserve can rely on a non-zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct HeartRateProfile {
    hr_max: f64,
    hr_rest: f64,
}

#[derive(Deserialize)]
struct RawProfile {
    hr_max: f64,
    hr_rest: f64,
}

impl TryFrom<RawProfile> for HeartRateProfile {
    type Error = Vo2Error;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        HeartRateProfile::new(raw.hr_max, raw.hr_rest)
    }
}

impl HeartRateProfile {
    pub fn new(hr_max: f64, hr_rest: f64) -> Result<Self, Vo2Error> {
        let valid = hr_max.is_finite() && hr_rest.is_finite() && hr_rest > 0.0 && hr_max > hr_rest;
        if !valid {
            return Err(Vo2Error::InvalidHeartRateProfile { hr_max, hr_rest });
        }
        Ok(Self { hr_max, hr_rest })
    }

    /// Maximum heart rate (bpm)
    pub fn hr_max(&self) -> f64 {
        self.hr_max
    }

    /// Resting heart rate (bpm)
    pub fn hr_rest(&self) -> f64 {
        self.hr_rest
    }

    /// Heart rate reserve, HRmax - HRrest
    #[inline]
    pub fn reserve(&self) -> f64 {
        self.hr_max - self.hr_rest
    }

    /// Whether `hr` lies in [HRrest, HRmax]
    #[inline]
    pub fn contains(&self, hr: f64) -> bool {
        hr >= self.hr_rest && hr <= self.hr_max
    }

    /// Fraction of the heart rate reserve used at `hr`
    ///
    /// Taken as the fraction of VO2max in use (%HRR ~ %VO2R).
    #[inline]
    pub fn fraction_of_reserve(&self, hr: f64) -> f64 {
        (hr - self.hr_rest) / self.reserve()
    }

    /// Heart rate at a percentage of HRmax
    #[inline]
    pub fn hr_at_percentage(&self, percentage_hr: f64) -> f64 {
        percentage_hr * 1e-2 * self.hr_max
    }
}
