//! Query evaluation.

use memchr::memmem::Finder;
use serde::Serialize;
use tracing::{debug, trace};

use roster_types::{FilterSpec, MergedProfile, ProfileField, ProfileFields, RankedProfile};

use crate::engine::rank::rank_owned;
use crate::engine::stages::FilterPipeline;
use crate::engine::Engine;

/// Field separator in the search haystack, so matches never span fields.
const FIELD_SEPARATOR: char = '\n';

/// Free-text search over the searchable profile fields.
#[derive(Debug, Clone)]
pub struct TextSearch {
    needle: String,
    finder: Finder<'static>,
}

impl TextSearch {
    /// Prepares a case-insensitive search for `query`.
    pub fn new(query: &str) -> Self {
        let needle = query.trim().to_lowercase();
        let finder = Finder::new(needle.as_bytes()).into_owned();
        Self { needle, finder }
    }

    /// Lower-cased search text.
    #[inline]
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// `true` when the query equals the full name, ignoring case.
    pub fn is_exact_name<P: ProfileFields + ?Sized>(&self, profile: &P) -> bool {
        !self.needle.is_empty() && profile.full_name().to_lowercase() == self.needle
    }

    /// `true` when the query appears inside the full name or any searchable
    /// field.
    pub fn found_in<P: ProfileFields + ?Sized>(&self, profile: &P) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let mut haystack = String::with_capacity(512);
        // Full name as one segment, so partial names like "jo le" match.
        let name = profile.full_name();
        if !name.is_empty() {
            haystack.push_str(&name.to_lowercase());
            haystack.push(FIELD_SEPARATOR);
        }
        for field in ProfileField::SEARCHABLE {
            let text = profile.text(field);
            if text.is_empty() {
                continue;
            }
            haystack.push_str(&text.to_lowercase());
            haystack.push(FIELD_SEPARATOR);
        }
        self.finder.find(haystack.as_bytes()).is_some()
    }
}

/// Result of [`Engine::query`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    /// Matches in input order.
    Filtered(Vec<MergedProfile>),
    /// Matches in rank order.
    Ranked(Vec<RankedProfile>),
}

impl QueryOutput {
    /// Result count for display.
    pub fn len(&self) -> usize {
        match self {
            QueryOutput::Filtered(v) => v.len(),
            QueryOutput::Ranked(v) => v.len(),
        }
    }

    /// `true` when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Engine {
    /// Compiles the filter stages of `spec`.
    pub fn pipeline(&self, spec: &FilterSpec) -> FilterPipeline<'_> {
        FilterPipeline::from_spec(spec, &self.matcher, &self.config.stealth_terms)
    }

    /// Profiles that satisfy `spec`, in input order.
    ///
    /// An exact full-name search match is kept regardless of the other
    /// filters. Otherwise every stage must pass and, when a search is given,
    /// the text must appear in a searchable field.
    pub fn filter(&self, profiles: &[MergedProfile], spec: &FilterSpec) -> Vec<MergedProfile> {
        let pipeline = self.pipeline(spec);
        let search = spec.search_text().map(TextSearch::new);

        profiles
            .iter()
            .filter(|p| admits(&pipeline, search.as_ref(), p))
            .cloned()
            .collect()
    }

    /// Filters, then ranks when `spec.sort_by_ranking` is set.
    pub fn query(&self, profiles: &[MergedProfile], spec: &FilterSpec) -> QueryOutput {
        let filtered = self.filter(profiles, spec);
        debug!(
            input = profiles.len(),
            matched = filtered.len(),
            ranked = spec.sort_by_ranking,
            "evaluated query"
        );
        if spec.sort_by_ranking {
            QueryOutput::Ranked(rank_owned(filtered, &self.config.weights))
        } else {
            QueryOutput::Filtered(filtered)
        }
    }
}

fn admits(
    pipeline: &FilterPipeline<'_>,
    search: Option<&TextSearch>,
    profile: &MergedProfile,
) -> bool {
    if let Some(search) = search {
        if search.is_exact_name(profile) {
            return true;
        }
    }
    if let Some(stage) = pipeline.first_rejection(profile) {
        trace!(stage, profile = %profile.record().merge_key(), "profile rejected");
        return false;
    }
    search.map_or(true, |s| s.found_in(profile))
}
