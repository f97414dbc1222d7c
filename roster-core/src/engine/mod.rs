//! Reconciliation, ranking, and query evaluation.
//!
//! Every operation is a pure function over an in-memory batch:
//! - **Merge**: folds raw records into one profile per [`MergeKey`](roster_types::MergeKey)
//! - **Rank**: scores profiles and assigns a strict total order
//! - **Query**: runs a [`FilterSpec`](roster_types::FilterSpec) through named filter stages
//!
//! Threading:
//! - [`Engine`] holds only read-only configuration and lookup tables, so a
//!   shared reference can serve concurrent callers.

mod merge;
pub mod mentions;
mod query;
mod rank;
mod scoring;
mod stages;

pub use merge::{rule_for, MergeRule, MergeStats, PRECEDENCE};
pub use mentions::{MentionEntry, MentionIndex, MentionResult};
pub use query::{QueryOutput, TextSearch};
pub use rank::{rank_owned, rank_profiles, RankKey};
pub use scoring::{rule_score, unique_points};
pub use stages::{FilterPipeline, Stage};

use roster_types::EngineConfig;

use crate::analyzer::InstitutionMatcher;

/// Profile reconciliation engine.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub(crate) config: EngineConfig,
    pub(crate) matcher: InstitutionMatcher,
    pub(crate) mentions: MentionIndex,
}

impl Engine {
    /// Creates an engine with no mention dataset.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            matcher: InstitutionMatcher::new(),
            mentions: MentionIndex::empty(),
        }
    }

    /// Attaches a mention dataset, verified against the configured domains.
    #[must_use]
    pub fn with_mentions(mut self, entries: Vec<MentionEntry>) -> Self {
        self.mentions = MentionIndex::new(entries, &self.config.reddit_domains);
        self
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Institution matcher used by the institution stage.
    #[inline]
    pub fn matcher(&self) -> &InstitutionMatcher {
        &self.matcher
    }

    /// Mention index consulted at merge time.
    #[inline]
    pub fn mentions(&self) -> &MentionIndex {
        &self.mentions
    }
}
