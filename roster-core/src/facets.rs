//! Filter option labels.
//!
//! The presentation layer offers the distinct colleges and industries of the
//! loaded set as filter choices. Collecting them walks every profile, so the
//! result is cached for a configured lifetime.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::Serialize;

use roster_types::{EngineConfig, MergedProfile, ProfileField, ProfileFields};

use crate::cache::{Clock, SystemClock, TtlCache};

/// Distinct labels, sorted case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Distinct colleges.
    pub colleges: Vec<String>,
    /// Distinct industries from either industry field.
    pub industries: Vec<String>,
}

impl Facets {
    /// Collects labels from `profiles`. The first spelling seen of each
    /// case-insensitive label is kept.
    pub fn collect(profiles: &[MergedProfile]) -> Self {
        let mut colleges = Labels::default();
        let mut industries = Labels::default();

        for profile in profiles {
            for college in profile.colleges() {
                colleges.add(college);
            }
            industries.add(profile.text(ProfileField::CompanyIndustry));
            industries.add(profile.text(ProfileField::LinkedinIndustry));
        }

        Self {
            colleges: colleges.into_sorted(),
            industries: industries.into_sorted(),
        }
    }
}

#[derive(Default)]
struct Labels {
    seen: FxHashSet<String>,
    labels: Vec<(String, String)>,
}

impl Labels {
    fn add(&mut self, label: &str) {
        let label = label.trim();
        if label.is_empty() {
            return;
        }
        let key = label.to_lowercase();
        if self.seen.insert(key.clone()) {
            self.labels.push((key, label.to_string()));
        }
    }

    fn into_sorted(mut self) -> Vec<String> {
        self.labels.sort_by(|a, b| a.0.cmp(&b.0));
        self.labels.into_iter().map(|(_, label)| label).collect()
    }
}

/// Facets cached for a fixed lifetime.
#[derive(Debug)]
pub struct FacetCache<C = SystemClock> {
    cache: TtlCache<Facets, C>,
}

impl FacetCache<SystemClock> {
    /// Cache on the system clock with `facet_ttl_secs` from `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(Duration::from_secs(config.facet_ttl_secs), SystemClock)
    }
}

impl<C: Clock> FacetCache<C> {
    /// Cache with an explicit lifetime and clock.
    pub fn new(ttl: Duration, clock: C) -> Self {
        Self {
            cache: TtlCache::with_clock(ttl, clock),
        }
    }

    /// Cached facets, recollected from `profiles` once expired.
    pub fn get_or_collect(&mut self, profiles: &[MergedProfile]) -> &Facets {
        self.cache.get_or_insert_with(|| Facets::collect(profiles))
    }

    /// Forces the next call to recollect, e.g. after a reload.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use roster_types::{RawRecord, RedditMention};
    use serde_json::json;

    fn profile(colleges: &[&str], industry: &str, linkedin_industry: &str) -> MergedProfile {
        let record = RawRecord::from_value(json!({
            "companyIndustry": industry,
            "linkedinIndustry": linkedin_industry,
        }))
        .unwrap();
        MergedProfile::new(
            record,
            colleges.iter().map(|c| c.to_string()).collect(),
            false,
            RedditMention::default(),
        )
    }

    #[test]
    fn collects_distinct_sorted_labels() {
        let profiles = [
            profile(&["Stanford", "IIT Delhi"], "Fintech", ""),
            profile(&["iit delhi", "MIT"], "fintech", "Health Care"),
            profile(&[], " ", "Education"),
        ];
        let facets = Facets::collect(&profiles);
        assert_eq!(facets.colleges, ["IIT Delhi", "MIT", "Stanford"]);
        assert_eq!(facets.industries, ["Education", "Fintech", "Health Care"]);
    }

    #[test]
    fn cache_serves_stale_input_until_expiry() {
        let clock = ManualClock::new();
        let mut cache = FacetCache::new(Duration::from_secs(300), &clock);

        let first = [profile(&["MIT"], "", "")];
        assert_eq!(cache.get_or_collect(&first).colleges, ["MIT"]);

        let second = [profile(&["Stanford"], "", "")];
        assert_eq!(cache.get_or_collect(&second).colleges, ["MIT"]);

        clock.advance(Duration::from_secs(301));
        assert_eq!(cache.get_or_collect(&second).colleges, ["Stanford"]);
    }

    #[test]
    fn invalidate_recollects() {
        let mut cache = FacetCache::from_config(&EngineConfig::default());
        assert!(cache.get_or_collect(&[]).colleges.is_empty());
        cache.invalidate();
        let profiles = [profile(&["MIT"], "", "")];
        assert_eq!(cache.get_or_collect(&profiles).colleges, ["MIT"]);
    }
}
