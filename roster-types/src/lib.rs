//! Core types for the Roster profile reconciliation engine.
//!
//! This crate holds the data model shared by the engine and its callers:
//!
//! - **Records**: [`RawRecord`], one scraped observation, and the
//!   [`ProfileFields`] trait for lenient typed access
//! - **Profiles**: [`MergedProfile`] after folding duplicates and
//!   [`RankedProfile`] after a ranking pass
//! - **Queries**: [`FilterSpec`], the user-chosen filter parameters
//! - **Configuration**: [`EngineConfig`] and [`ScoreWeights`]

#![warn(missing_docs)]

mod config;
mod field;
mod filter;
mod profile;
mod record;

pub use config::{EngineConfig, ScoreWeights};
pub use field::{ProfileField, LINKEDIN_KEY_PREFIX};
pub use filter::{FilterSpec, MatchMode, ProfileSources};
pub use profile::{MergedProfile, RankedProfile, RedditMention, Tier};
pub use record::{
    json_kind, value_count, value_is_empty, value_number, value_text, MergeKey, ProfileFields,
    RawRecord, RecordError,
};
