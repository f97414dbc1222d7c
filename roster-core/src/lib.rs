//! Roster: founder profile reconciliation, ranking, and query engine.
//!
//! Raw records scraped from several sources are folded into one profile per
//! person, scored, ranked, and filtered on demand:
//!
//! ```text
//! raw records -> Engine::merge -> merged profiles -> { Engine::rank, Engine::query }
//! ```
//!
//! - **analyzer**: institution-name normalization and fuzzy matching
//! - **engine**: merging, mention lookup, scoring, ranking, filter stages
//! - **shuffle**: seeded display-order shuffling
//! - **cache** / **facets**: explicit TTL cache for filter option labels
//! - **io**: JSON source loading and the ranked CSV export
//!
//! ```
//! use roster_core::{Engine, FilterSpec, RawRecord};
//!
//! let records: Vec<RawRecord> = serde_json::from_str(r#"[
//!     {"companyName": "Acme", "firstName": "Jo", "lastName": "Lee", "college": "IIT Delhi"},
//!     {"companyName": "Acme", "firstName": "Jo", "lastName": "Lee", "college": "IIM Ahmedabad"}
//! ]"#).unwrap();
//!
//! let engine = Engine::default();
//! let profiles = engine.merge(&records);
//! assert_eq!(profiles[0].colleges(), ["IIT Delhi", "IIM Ahmedabad"]);
//!
//! let spec = FilterSpec { colleges: vec!["iim a".into()], ..Default::default() };
//! assert_eq!(engine.query(&profiles, &spec).len(), 1);
//! ```

pub mod analyzer;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod facets;
pub mod io;
pub mod shuffle;

pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use config::load_config;
pub use engine::{Engine, FilterPipeline, MergeStats, QueryOutput, Stage};
pub use error::{ConfigError, ExportError, LoadError};
pub use facets::{FacetCache, Facets};
pub use shuffle::{shuffled, shuffled_seeded};

pub use roster_types;
pub use roster_types::{
    EngineConfig, FilterSpec, MatchMode, MergedProfile, ProfileField, ProfileFields,
    ProfileSources, RankedProfile, RawRecord, ScoreWeights, Tier,
};
