//! User-supplied query parameters.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::record::value_count;

/// How a multi-institution selection is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Any selected institution matches any profile college.
    #[default]
    Any,
    /// Selection and profile colleges cover each other exactly.
    All,
}

/// Which sources a profile must (or must not) appear in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSources {
    /// Professional-network presence selected.
    #[serde(deserialize_with = "or_default")]
    pub linkedin: bool,
    /// Startup-directory presence selected.
    #[serde(deserialize_with = "or_default")]
    pub wellfound: bool,
}

/// One query over a merged profile set. Constructed per query.
///
/// Deserializes from the camelCase shape the presentation layer sends.
/// Every field is optional and `null` reads as absent. Follower bounds take
/// any number or numeric string; list fields take a list or a single string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Selected institutions.
    #[serde(alias = "college", deserialize_with = "string_list")]
    pub colleges: Vec<String>,
    /// Require full two-way coverage instead of any overlap.
    #[serde(deserialize_with = "or_default")]
    pub college_match_all: bool,
    /// Selected industries, OR'ed.
    #[serde(deserialize_with = "string_list")]
    pub industries: Vec<String>,
    /// Case-insensitive location substring.
    #[serde(deserialize_with = "or_default")]
    pub location: String,
    /// Inclusive lower follower bound.
    #[serde(deserialize_with = "count")]
    pub followers_min: u64,
    /// Inclusive upper follower bound; `0` means unbounded.
    #[serde(deserialize_with = "count")]
    pub followers_max: u64,
    /// Source presence selection.
    #[serde(deserialize_with = "or_default")]
    pub profile_sources: ProfileSources,
    /// Keep only stealth-looking profiles.
    #[serde(deserialize_with = "or_default")]
    pub stealth_mode: bool,
    /// Free-text search.
    #[serde(deserialize_with = "or_default")]
    pub search: String,
    /// Order results by rank instead of input order.
    #[serde(deserialize_with = "or_default")]
    pub sort_by_ranking: bool,
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_count(Some(&value)))
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

impl FilterSpec {
    /// Institution match mode.
    #[inline]
    pub fn match_mode(&self) -> MatchMode {
        if self.college_match_all {
            MatchMode::All
        } else {
            MatchMode::Any
        }
    }

    /// Trimmed search string, `None` when blank.
    #[inline]
    pub fn search_text(&self) -> Option<&str> {
        Some(self.search.trim()).filter(|s| !s.is_empty())
    }

    /// `true` when no stage would reject anything.
    pub fn is_unfiltered(&self) -> bool {
        !self.stealth_mode
            && self.colleges.is_empty()
            && self.industries.is_empty()
            && self.location.trim().is_empty()
            && self.followers_min == 0
            && self.followers_max == 0
            && !self.profile_sources.linkedin
            && !self.profile_sources.wellfound
            && self.search_text().is_none()
    }
}
