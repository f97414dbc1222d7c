//! Total-order ranking.

use core::cmp::Ordering;

use roster_types::{MergedProfile, ProfileField, ProfileFields, RankedProfile, ScoreWeights};

use crate::engine::scoring::{rule_score, unique_points};
use crate::engine::Engine;

/// Sort key of one profile. `Ordering::Less` means "ranks earlier".
#[derive(Debug, Clone, PartialEq)]
pub struct RankKey {
    /// Rule-based score.
    pub score: f64,
    /// Follower count, `0` when missing.
    pub followers: u64,
    /// Company sub-score, `0` when missing.
    pub best_score: f64,
    /// Lower-cased `lastName + firstName`.
    pub name: String,
}

impl RankKey {
    /// Extracts the key from a profile.
    pub fn of<P: ProfileFields + ?Sized>(profile: &P, weights: &ScoreWeights) -> Self {
        let mut name = String::with_capacity(32);
        name.push_str(profile.text(ProfileField::LastName));
        name.push_str(profile.text(ProfileField::FirstName));
        Self {
            score: rule_score(profile, weights),
            followers: profile.count(ProfileField::FollowersCount),
            best_score: profile.number(ProfileField::BestScore).unwrap_or(0.0),
            name: name.to_lowercase(),
        }
    }
}

impl Eq for RankKey {}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.followers.cmp(&self.followers))
            .then_with(|| {
                other
                    .best_score
                    .partial_cmp(&self.best_score)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ranks owned profiles. Ties on every key keep their input order.
pub fn rank_owned<P: ProfileFields>(
    profiles: Vec<P>,
    weights: &ScoreWeights,
) -> Vec<RankedProfile<P>> {
    let mut keyed: Vec<(RankKey, P)> = profiles
        .into_iter()
        .map(|p| (RankKey::of(&p, weights), p))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    keyed
        .into_iter()
        .enumerate()
        .map(|(i, (key, profile))| RankedProfile {
            profile,
            unique_rank: i + 1,
            unique_points: unique_points(key.score),
            score: key.score,
        })
        .collect()
}

/// Ranks borrowed profiles, cloning them into the output.
pub fn rank_profiles<P: ProfileFields + Clone>(
    profiles: &[P],
    weights: &ScoreWeights,
) -> Vec<RankedProfile<P>> {
    rank_owned(profiles.to_vec(), weights)
}

impl Engine {
    /// Ranks merged profiles with the configured weights.
    pub fn rank(&self, profiles: &[MergedProfile]) -> Vec<RankedProfile> {
        rank_profiles(profiles, &self.config.weights)
    }
}
