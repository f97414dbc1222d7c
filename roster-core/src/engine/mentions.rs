//! Community-mention lookup.
//!
//! The mention dataset is an external, read-only list of search results
//! keyed by the query that produced them. A person is looked up once per
//! merged profile by case-insensitive substring match of their full name
//! against each entry's query.

use serde::{Deserialize, Serialize};
use url::Url;

use roster_types::RedditMention;

/// One search result inside a mention entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionResult {
    /// Result URL.
    #[serde(default)]
    pub url: String,
    /// Result title, informational only.
    #[serde(default)]
    pub title: String,
}

/// Search results gathered for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionEntry {
    /// Query the results were collected for.
    #[serde(default)]
    pub query: String,
    /// Results in rank order.
    #[serde(default)]
    pub results: Vec<MentionResult>,
}

/// Read-only index over a mention dataset.
#[derive(Debug, Clone, Default)]
pub struct MentionIndex {
    entries: Vec<(String, MentionEntry)>,
    domains: Vec<String>,
}

impl MentionIndex {
    /// Builds an index. `domains` lists the hosts that make a mention
    /// verified.
    pub fn new(entries: Vec<MentionEntry>, domains: &[String]) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.query.to_lowercase(), entry))
                .collect(),
            domains: domains.iter().map(|d| d.trim().to_lowercase()).collect(),
        }
    }

    /// An index with no entries; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the index has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a person by full name. Blank names never match.
    pub fn lookup(&self, full_name: &str) -> RedditMention {
        let needle = full_name.trim().to_lowercase();
        if needle.is_empty() {
            return RedditMention::default();
        }

        let Some((_, entry)) = self
            .entries
            .iter()
            .find(|(query, _)| query.contains(needle.as_str()))
        else {
            return RedditMention::default();
        };

        match entry.results.first() {
            Some(first) => RedditMention {
                url: Some(first.url.clone()).filter(|u| !u.is_empty()),
                mentioned: true,
                verified: self.is_canonical(&first.url),
            },
            None => RedditMention::default(),
        }
    }

    /// `true` when `url` parses and its host is a canonical domain.
    pub fn is_canonical(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url.trim()) else {
            return false;
        };
        parsed
            .host_str()
            .map(|host| host.to_ascii_lowercase())
            .is_some_and(|host| self.domains.iter().any(|d| *d == host))
    }
}
