//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Weights of the rule-based score.
///
/// Each sub-score is read on a `0..=scale` range, divided by `scale`, and
/// multiplied by its weight. With the defaults the score lies in `[0, 0.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of `college_score`.
    pub college: f64,
    /// Weight of `best_score`.
    pub company: f64,
    /// Weight of `job_title_score`.
    pub job_title: f64,
    /// Upper end of every sub-score.
    pub scale: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            college: 0.20,
            company: 0.18,
            job_title: 0.12,
            scale: 10.0,
        }
    }
}

impl ScoreWeights {
    /// Largest score these weights can produce.
    #[inline]
    pub fn max_score(&self) -> f64 {
        self.college + self.company + self.job_title
    }
}

/// Engine-wide settings. Every field has a default, so partial TOML files
/// are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Score weights.
    pub weights: ScoreWeights,
    /// Terms that mark a profile as stealth, matched case-insensitively.
    pub stealth_terms: Vec<String>,
    /// Hosts accepted as canonical for verified mentions.
    pub reddit_domains: Vec<String>,
    /// Lifetime of cached facet labels, in seconds.
    pub facet_ttl_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            stealth_terms: ["stealth", "stealth mode", "stealth startup", "stealth ai"]
                .map(String::from)
                .to_vec(),
            reddit_domains: [
                "reddit.com",
                "www.reddit.com",
                "old.reddit.com",
                "new.reddit.com",
                "np.reddit.com",
                "redd.it",
            ]
            .map(String::from)
            .to_vec(),
            facet_ttl_secs: 300,
        }
    }
}
