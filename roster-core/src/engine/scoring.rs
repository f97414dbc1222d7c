//! Rule-based scoring.

use roster_types::{ProfileField, ProfileFields, ScoreWeights};

/// Weighted prestige score of a profile.
///
/// Each sub-score is clamped to `[0, scale]` and missing or non-numeric
/// values count as zero, so the result never exceeds
/// [`ScoreWeights::max_score`].
pub fn rule_score<P: ProfileFields + ?Sized>(profile: &P, weights: &ScoreWeights) -> f64 {
    if weights.scale.is_nan() || weights.scale <= 0.0 {
        return 0.0;
    }
    let component = |field: ProfileField| -> f64 {
        profile
            .number(field)
            .map_or(0.0, |n| n.clamp(0.0, weights.scale) / weights.scale)
    };

    weights.college * component(ProfileField::CollegeScore)
        + weights.company * component(ProfileField::BestScore)
        + weights.job_title * component(ProfileField::JobTitleScore)
}

/// `round(score * 100)` as an integer.
#[inline]
pub fn unique_points(score: f64) -> u32 {
    let points = (score * 100.0).round();
    if points.is_finite() && points > 0.0 {
        points as u32
    } else {
        0
    }
}
