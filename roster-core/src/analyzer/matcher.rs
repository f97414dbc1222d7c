//! Fuzzy institution matching.
//!
//! Two names match when, after normalization, either one contains the
//! other. The Ahmedabad management institute is the exception: a query that
//! normalizes to it only matches candidates that normalize to it too, so an
//! unrelated campus of the same institute never slips through.

use crate::analyzer::normalizer::{denotes_iim_ahmedabad, InstitutionNormalizer};

/// A query normalized once and matched against many candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionQuery {
    normalized: String,
    ahmedabad: bool,
}

impl InstitutionQuery {
    /// Normalized query text.
    #[inline]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// `true` when the query matches everything.
    #[inline]
    pub fn is_vacuous(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Matches an already-normalized candidate.
    pub fn matches_normalized(&self, candidate: &str) -> bool {
        if self.is_vacuous() {
            return true;
        }
        if self.ahmedabad {
            return denotes_iim_ahmedabad(candidate);
        }
        candidate.contains(self.normalized.as_str()) || self.normalized.contains(candidate)
    }
}

/// Decides whether institution names denote the same entity.
#[derive(Debug, Clone, Default)]
pub struct InstitutionMatcher {
    normalizer: InstitutionNormalizer,
}

impl InstitutionMatcher {
    /// Creates a matcher with the default normalizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher around a configured normalizer.
    pub fn with_normalizer(normalizer: InstitutionNormalizer) -> Self {
        Self { normalizer }
    }

    /// The normalizer used on both sides.
    #[inline]
    pub fn normalizer(&self) -> &InstitutionNormalizer {
        &self.normalizer
    }

    /// Normalizes a query for repeated matching.
    pub fn prepare(&self, query: &str) -> InstitutionQuery {
        let normalized = self.normalizer.normalize(query);
        let ahmedabad = denotes_iim_ahmedabad(&normalized);
        InstitutionQuery {
            normalized,
            ahmedabad,
        }
    }

    /// Matches one candidate name against a query.
    ///
    /// A blank query matches everything.
    pub fn matches(&self, candidate: &str, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let query = self.prepare(query);
        if query.is_vacuous() {
            return true;
        }
        query.matches_normalized(&self.normalizer.normalize(candidate))
    }

    /// Matches a candidate list: any element matching is enough.
    ///
    /// A blank query matches everything, even a missing list; a missing list
    /// never matches a non-blank query.
    pub fn matches_any<S: AsRef<str>>(&self, candidates: Option<&[S]>, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let Some(candidates) = candidates else {
            return false;
        };
        let query = self.prepare(query);
        let mut buf = String::new();
        candidates.iter().any(|candidate| {
            self.normalizer.normalize_into(candidate.as_ref(), &mut buf);
            query.matches_normalized(&buf)
        })
    }
}
