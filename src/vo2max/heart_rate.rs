use crate::constants::{metabolic::ML_O2_PER_MET, zones::HR_RATIO_FACTOR};
use crate::error::Vo2Error;
use crate::subject::HeartRateProfile;

/// Crude VO2max estimate, 15 x HRmax / HRrest
///
/// Uth N et al. Estimation of VO2max from the ratio between HRmax and
/// HRrest. Eur J Appl Physiol. 2004;91(1):111-115.
#[inline]
pub fn from_hr_ratio(profile: &HeartRateProfile) -> f64 {
    HR_RATIO_FACTOR * (profile.hr_max() / profile.hr_rest())
}

/// VO2max from the VO2 of an exercise and the heart rate sustained during it
///
/// The fraction of the heart rate reserve in use is taken as the fraction of
/// VO2max in use: VO2max = VO2 / ((HR - HRrest) / (HRmax - HRrest)).
///
/// # Errors
///
/// Returns [`Vo2Error::HeartRateOutOfRange`] when `hr` is outside
/// [HRrest, HRmax], or equal to HRrest where no fraction of the reserve is in
/// use.
pub fn from_vo2_hr(
    vo2_exercise: f64,
    hr: f64,
    profile: &HeartRateProfile,
) -> Result<f64, Vo2Error> {
    if !profile.contains(hr) || hr == profile.hr_rest() {
        tracing::warn!(
            hr,
            hr_rest = profile.hr_rest(),
            hr_max = profile.hr_max(),
            "heart rate outside the usable reserve"
        );
        return Err(Vo2Error::HeartRateOutOfRange {
            hr,
            hr_rest: profile.hr_rest(),
            hr_max: profile.hr_max(),
        });
    }
    let fraction_vo2max = profile.fraction_of_reserve(hr);
    tracing::debug!(vo2_exercise, fraction_vo2max, "VO2max from exercise VO2");
    Ok(vo2_exercise / fraction_vo2max)
}

/// VO2max from the METs of an exercise (a treadmill stage for instance)
pub fn from_mets(mets: f64, hr: f64, profile: &HeartRateProfile) -> Result<f64, Vo2Error> {
    from_vo2_hr(ML_O2_PER_MET * mets, hr, profile)
}
