//! Institution abbreviation tables.
//!
//! Expansions must never contain a key of [`ABBREVIATIONS`] as a whole word,
//! otherwise normalization stops being idempotent.

/// Whole-word abbreviation expansions.
pub(crate) const ABBREVIATIONS: &[(&str, &str)] = &[
    ("iit", "indian institute of technology"),
    ("iim", "indian institute of management"),
    ("iima", "indian institute of management ahmedabad"),
    ("iimb", "indian institute of management bangalore"),
    ("iimc", "indian institute of management calcutta"),
    ("iiml", "indian institute of management lucknow"),
    ("iisc", "indian institute of science"),
    ("iiit", "international institute of information technology"),
    ("nit", "national institute of technology"),
    ("bits", "birla institute of technology and science"),
    ("isb", "indian school of business"),
    ("xlri", "xavier school of management"),
    ("dtu", "delhi technological university"),
    ("srcc", "shri ram college of commerce"),
    ("mit", "massachusetts institute of technology"),
    ("cmu", "carnegie mellon university"),
    ("nyu", "new york university"),
    ("ucla", "university of california los angeles"),
    ("usc", "university of southern california"),
    ("upenn", "university of pennsylvania"),
    ("lse", "london school of economics"),
    ("univ", "university"),
    ("inst", "institute"),
    ("mgmt", "management"),
];

/// Campus letters, expanded only directly after their anchor word
/// (`"management a"` becomes `"management ahmedabad"`).
pub(crate) const CAMPUS_LETTERS: &[(&str, &str, &str)] = &[
    ("management", "a", "ahmedabad"),
    ("management", "b", "bangalore"),
    ("management", "c", "calcutta"),
    ("management", "l", "lucknow"),
    ("management", "i", "indore"),
    ("management", "k", "kozhikode"),
    ("technology", "b", "bombay"),
    ("technology", "d", "delhi"),
    ("technology", "m", "madras"),
    ("technology", "r", "roorkee"),
    ("technology", "g", "guwahati"),
];

/// Tokens that place an institute of management in Ahmedabad.
pub(crate) const AHMEDABAD_TOKENS: &[&str] = &["ahmedabad", "ahmadabad", "amdavad"];

/// Phrase that must accompany an Ahmedabad token for the collapse.
pub(crate) const IIM_PHRASE: &str = "indian institute of management";

/// Canonical form every Ahmedabad management-institute spelling collapses to.
pub const IIM_AHMEDABAD: &str = "indian institute of management ahmedabad";
