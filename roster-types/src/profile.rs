//! Merged and ranked profiles.

use core::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::field::ProfileField;
use crate::record::{ProfileFields, RawRecord};

/// Keys a merged profile adds on top of its record fields.
const DERIVED_KEYS: [&str; 5] = [
    "colleges",
    "hasWellfound",
    "redditUrl",
    "isMentionedOnReddit",
    "isVerifiedRedditMention",
];

/// Result of the community-mention lookup for one person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedditMention {
    /// First result URL of the matching mention entry.
    pub url: Option<String>,
    /// A mention entry with at least one result matched the full name.
    pub mentioned: bool,
    /// The first result URL is hosted on a canonical domain.
    pub verified: bool,
}

/// One entity after folding every record that shares its merge key.
///
/// Field values follow the merge precedence rules; `college` holds the
/// display string of [`MergedProfile::colleges`].
#[derive(Debug, Clone, PartialEq)]
pub struct MergedProfile {
    record: RawRecord,
    colleges: Vec<String>,
    has_wellfound: bool,
    mention: RedditMention,
}

impl MergedProfile {
    /// Assembles a profile from folded parts.
    ///
    /// `colleges` must already be distinct and in first-seen order.
    pub fn new(
        mut record: RawRecord,
        colleges: Vec<String>,
        has_wellfound: bool,
        mention: RedditMention,
    ) -> Self {
        if !colleges.is_empty() || record.value(ProfileField::College).is_some() {
            record.set(ProfileField::College, colleges.join(", "));
        }
        Self {
            record,
            colleges,
            has_wellfound,
            mention,
        }
    }

    /// Folded record fields.
    #[inline]
    pub fn record(&self) -> &RawRecord {
        &self.record
    }

    /// Distinct colleges in first-seen order.
    #[inline]
    pub fn colleges(&self) -> &[String] {
        &self.colleges
    }

    /// Colleges joined by `, `.
    #[inline]
    pub fn college_display(&self) -> &str {
        self.record.text(ProfileField::College)
    }

    /// Any folded record carried a startup-directory URL.
    #[inline]
    pub fn has_wellfound(&self) -> bool {
        self.has_wellfound
    }

    /// Mention lookup result.
    #[inline]
    pub fn mention(&self) -> &RedditMention {
        &self.mention
    }

    /// Startup-directory company URL.
    pub fn wellfound_url(&self) -> Option<&str> {
        Some(self.record.text(ProfileField::WellfoundUrl)).filter(|s| !s.is_empty())
    }

    /// Startup-directory profile URL.
    pub fn wellfound_profile_url(&self) -> Option<&str> {
        Some(self.record.text(ProfileField::WellfoundProfileUrl)).filter(|s| !s.is_empty())
    }
}

impl ProfileFields for MergedProfile {
    #[inline]
    fn value_by_key(&self, key: &str) -> Option<&Value> {
        self.record.value_by_key(key)
    }

    #[inline]
    fn has_directory_url(&self) -> bool {
        self.has_wellfound
    }
}

impl Serialize for MergedProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.record.map() {
            if !DERIVED_KEYS.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        map.serialize_entry("colleges", &self.colleges)?;
        map.serialize_entry("hasWellfound", &self.has_wellfound)?;
        map.serialize_entry("redditUrl", &self.mention.url)?;
        map.serialize_entry("isMentionedOnReddit", &self.mention.mentioned)?;
        map.serialize_entry("isVerifiedRedditMention", &self.mention.verified)?;
        map.end()
    }
}

/// Coarse display bucket derived from a unique rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Ranks 1-3.
    Top3,
    /// Ranks 4-10.
    Top10,
    /// Ranks 11-30.
    Top30,
    /// Ranks 31-100.
    Top100,
    /// Everything below rank 100.
    Rest,
}

impl Tier {
    /// Buckets a 1-based rank.
    #[must_use]
    pub const fn from_rank(rank: usize) -> Self {
        match rank {
            0..=3 => Tier::Top3,
            4..=10 => Tier::Top10,
            11..=30 => Tier::Top30,
            31..=100 => Tier::Top100,
            _ => Tier::Rest,
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Tier::Top3 => "top-3",
            Tier::Top10 => "top-10",
            Tier::Top30 => "top-30",
            Tier::Top100 => "top-100",
            Tier::Rest => "rest",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A profile annotated with its position in one ranking pass.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankedProfile<P = MergedProfile> {
    /// The ranked profile.
    #[serde(flatten)]
    pub profile: P,
    /// 1-based position in the total order.
    #[serde(rename = "uniqueRank")]
    pub unique_rank: usize,
    /// `round(score * 100)`.
    #[serde(rename = "uniquePoints")]
    pub unique_points: u32,
    /// Rule-based score in `[0, 0.5]`.
    #[serde(skip)]
    pub score: f64,
}

impl<P> RankedProfile<P> {
    /// Display bucket for this rank.
    #[inline]
    pub fn tier(&self) -> Tier {
        Tier::from_rank(self.unique_rank)
    }

    /// Drops the ranking annotation.
    #[inline]
    pub fn into_profile(self) -> P {
        self.profile
    }
}

impl<P: ProfileFields> ProfileFields for RankedProfile<P> {
    #[inline]
    fn value_by_key(&self, key: &str) -> Option<&Value> {
        self.profile.value_by_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> MergedProfile {
        let record = RawRecord::new()
            .with(ProfileField::FirstName, "Jo")
            .with(ProfileField::LastName, "Lee")
            .with(ProfileField::College, "IIT Delhi");
        MergedProfile::new(
            record,
            vec!["IIT Delhi".into(), "IIM Ahmedabad".into()],
            true,
            RedditMention::default(),
        )
    }

    #[test]
    fn college_display_joins_list() {
        let p = sample();
        assert_eq!(p.college_display(), "IIT Delhi, IIM Ahmedabad");
        assert_eq!(p.text(ProfileField::College), "IIT Delhi, IIM Ahmedabad");
    }

    #[test]
    fn no_college_key_added_when_absent() {
        let p = MergedProfile::new(
            RawRecord::new().with(ProfileField::FirstName, "Jo"),
            Vec::new(),
            false,
            RedditMention::default(),
        );
        assert!(p.value(ProfileField::College).is_none());
    }

    #[test]
    fn serializes_derived_fields() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["firstName"], json!("Jo"));
        assert_eq!(v["colleges"], json!(["IIT Delhi", "IIM Ahmedabad"]));
        assert_eq!(v["hasWellfound"], json!(true));
        assert_eq!(v["redditUrl"], Value::Null);
        assert_eq!(v["isVerifiedRedditMention"], json!(false));
    }

    #[test]
    fn ranked_profile_flattens() {
        let ranked = RankedProfile {
            profile: sample(),
            unique_rank: 4,
            unique_points: 31,
            score: 0.31,
        };
        let v = serde_json::to_value(&ranked).unwrap();
        assert_eq!(v["uniqueRank"], json!(4));
        assert_eq!(v["uniquePoints"], json!(31));
        assert_eq!(v["lastName"], json!("Lee"));
        assert!(v.get("score").is_none());
        assert_eq!(ranked.tier(), Tier::Top10);
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(Tier::from_rank(1), Tier::Top3);
        assert_eq!(Tier::from_rank(3), Tier::Top3);
        assert_eq!(Tier::from_rank(10), Tier::Top10);
        assert_eq!(Tier::from_rank(30), Tier::Top30);
        assert_eq!(Tier::from_rank(100), Tier::Top100);
        assert_eq!(Tier::from_rank(101), Tier::Rest);
        assert_eq!(Tier::Top30.to_string(), "top-30");
    }
}
