//! Entity merging.
//!
//! Records are folded by [`MergeKey`] in input order. The first record for a
//! key seeds the profile; later records only add information, following the
//! precedence table below.

use core::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use roster_types::{
    value_is_empty, MergeKey, MergedProfile, ProfileField, ProfileFields, RawRecord,
};

use crate::analyzer::split_colleges;
use crate::engine::mentions::MentionIndex;
use crate::engine::Engine;

/// How a field is combined when a later record folds into a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// Kept from the first record that supplies a non-blank value.
    FirstNonEmpty,
    /// Replaced by every later non-blank value; never cleared.
    LastNonEmpty,
    /// Split into entries and unioned in first-seen order.
    CollegeUnion,
}

/// Field precedence. Keys not listed use [`MergeRule::FirstNonEmpty`].
pub const PRECEDENCE: [(ProfileField, MergeRule); 3] = [
    (ProfileField::College, MergeRule::CollegeUnion),
    (ProfileField::WellfoundUrl, MergeRule::LastNonEmpty),
    (ProfileField::WellfoundProfileUrl, MergeRule::LastNonEmpty),
];

/// Rule applied to `key`.
pub fn rule_for(key: &str) -> MergeRule {
    PRECEDENCE
        .iter()
        .find(|(field, _)| field.key() == key)
        .map_or(MergeRule::FirstNonEmpty, |(_, rule)| *rule)
}

/// Counters for one merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Records received.
    pub input: usize,
    /// Records that passed the admissibility check.
    pub admitted: usize,
    /// Records dropped as inadmissible.
    pub dropped: usize,
    /// Profiles produced.
    pub merged: usize,
}

impl fmt::Display for MergeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} admitted, {} dropped, {} profiles",
            self.input, self.admitted, self.dropped, self.merged
        )
    }
}

/// A profile under construction.
struct Fold {
    record: RawRecord,
    colleges: Vec<String>,
    has_wellfound: bool,
}

impl Fold {
    fn seed(record: &RawRecord) -> Self {
        let mut fold = Self {
            record: record.clone(),
            colleges: Vec::new(),
            has_wellfound: record.has_directory_url(),
        };
        fold.absorb_colleges(record);
        fold
    }

    fn absorb(&mut self, incoming: &RawRecord) {
        for (key, value) in incoming.iter() {
            if value_is_empty(Some(value)) {
                continue;
            }
            match rule_for(key) {
                MergeRule::CollegeUnion => {}
                MergeRule::LastNonEmpty => self.record.set_key(key, value.clone()),
                MergeRule::FirstNonEmpty => {
                    if value_is_empty(self.record.value_by_key(key)) {
                        self.record.set_key(key, value.clone());
                    }
                }
            }
        }
        self.absorb_colleges(incoming);
        self.has_wellfound |= incoming.has_directory_url();
    }

    fn absorb_colleges(&mut self, record: &RawRecord) {
        for college in split_colleges(record.text(ProfileField::College)) {
            if !self.colleges.iter().any(|c| c == college) {
                self.colleges.push(college.to_string());
            }
        }
    }

    fn finish(self, mentions: &MentionIndex) -> MergedProfile {
        let mention = mentions.lookup(&self.record.full_name());
        MergedProfile::new(self.record, self.colleges, self.has_wellfound, mention)
    }
}

impl Engine {
    /// Folds raw records into one profile per merge key.
    ///
    /// Inadmissible records are dropped silently. Output order is the order
    /// in which keys were first seen.
    pub fn merge(&self, records: &[RawRecord]) -> Vec<MergedProfile> {
        self.merge_with_stats(records).0
    }

    /// Like [`Engine::merge`], also reporting how many records were dropped.
    pub fn merge_with_stats(&self, records: &[RawRecord]) -> (Vec<MergedProfile>, MergeStats) {
        let mut slots: FxHashMap<MergeKey, usize> = FxHashMap::default();
        let mut folds: Vec<Fold> = Vec::new();
        let mut stats = MergeStats {
            input: records.len(),
            ..MergeStats::default()
        };

        for record in records {
            if !record.is_admissible() {
                stats.dropped += 1;
                continue;
            }
            stats.admitted += 1;

            match slots.get(&record.merge_key()) {
                Some(&slot) => folds[slot].absorb(record),
                None => {
                    slots.insert(record.merge_key(), folds.len());
                    folds.push(Fold::seed(record));
                }
            }
        }

        let profiles: Vec<MergedProfile> = folds
            .into_iter()
            .map(|fold| fold.finish(&self.mentions))
            .collect();
        stats.merged = profiles.len();

        debug!(
            input = stats.input,
            admitted = stats.admitted,
            dropped = stats.dropped,
            merged = stats.merged,
            "merged profile records"
        );

        (profiles, stats)
    }
}
