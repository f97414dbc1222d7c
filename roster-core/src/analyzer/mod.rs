//! Institution text analysis.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Canonicalizes free-text institution names
//! - **Matcher**: Decides whether two names denote the same institution
//! - **Splitter**: Breaks a free-text college list into entries

mod abbreviations;
pub mod matcher;
pub mod normalizer;
pub mod splitter;

pub use abbreviations::IIM_AHMEDABAD;
pub use matcher::{InstitutionMatcher, InstitutionQuery};
pub use normalizer::{
    denotes_iim_ahmedabad, normalize_institution, InstitutionNormalizer, NormalizerConfig,
};
pub use splitter::split_colleges;
