//! Named filter stages.
//!
//! A [`FilterSpec`] compiles into a [`FilterPipeline`]: an ordered list of
//! pure predicates, one per active filter dimension. Inactive dimensions
//! contribute no stage, so an empty spec yields an empty pipeline that keeps
//! everything.

use core::fmt;

use rustc_hash::FxHashSet;

use roster_types::{
    FilterSpec, MatchMode, MergedProfile, ProfileField, ProfileFields, ProfileSources,
};

use crate::analyzer::{InstitutionMatcher, InstitutionQuery};

type Predicate<'a> = Box<dyn Fn(&MergedProfile) -> bool + 'a>;

/// One named predicate.
pub struct Stage<'a> {
    name: &'static str,
    predicate: Predicate<'a>,
}

impl<'a> Stage<'a> {
    /// Wraps a predicate under a name.
    pub fn new(name: &'static str, predicate: impl Fn(&MergedProfile) -> bool + 'a) -> Self {
        Self {
            name,
            predicate: Box::new(predicate),
        }
    }

    /// Stage name, used in logs.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `true` when the profile passes this stage.
    #[inline]
    pub fn keeps(&self, profile: &MergedProfile) -> bool {
        (self.predicate)(profile)
    }

    /// Keeps profiles with a stealth term in any stealth field.
    pub fn stealth(terms: &[String]) -> Self {
        let terms: Vec<String> = terms
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self::new("stealth", move |p| is_stealth(p, &terms))
    }

    /// Keeps profiles whose colleges satisfy the selection.
    pub fn institutions(
        matcher: &'a InstitutionMatcher,
        selected: &[String],
        mode: MatchMode,
    ) -> Self {
        let queries: Vec<InstitutionQuery> = selected.iter().map(|s| matcher.prepare(s)).collect();
        Self::new("institutions", move |p| {
            institutions_match(matcher, &queries, p.colleges(), mode)
        })
    }

    /// Keeps profiles whose location contains `needle`, ignoring case.
    pub fn location(needle: &str) -> Self {
        let needle = needle.trim().to_lowercase();
        Self::new("location", move |p| location_match(p, &needle))
    }

    /// Keeps profiles whose follower count lies in `[min, max]`; `max == 0`
    /// leaves the range open.
    pub fn followers(min: u64, max: u64) -> Self {
        Self::new("followers", move |p| {
            followers_in_range(p.count(ProfileField::FollowersCount), min, max)
        })
    }

    /// Keeps profiles matching the source-presence selection.
    pub fn sources(selection: ProfileSources) -> Self {
        Self::new("sources", move |p| {
            sources_match(selection, p.has_linkedin_profile(), p.has_directory_url())
        })
    }

    /// Keeps profiles in any of the selected industries.
    pub fn industries(selected: &[String]) -> Self {
        let terms: Vec<String> = selected
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self::new("industries", move |p| industry_match(p, &terms))
    }
}

impl fmt::Debug for Stage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

/// Ordered, AND'ed filter stages.
#[derive(Debug, Default)]
pub struct FilterPipeline<'a> {
    stages: Vec<Stage<'a>>,
}

impl<'a> FilterPipeline<'a> {
    /// A pipeline that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage.
    #[must_use]
    pub fn with_stage(mut self, stage: Stage<'a>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Compiles the active dimensions of `spec`. Free-text search is not a
    /// stage; it is applied by the query evaluator around the pipeline.
    pub fn from_spec(
        spec: &FilterSpec,
        matcher: &'a InstitutionMatcher,
        stealth_terms: &[String],
    ) -> Self {
        let mut pipeline = Self::new();
        if spec.stealth_mode {
            pipeline.stages.push(Stage::stealth(stealth_terms));
        }
        if !spec.colleges.is_empty() {
            pipeline
                .stages
                .push(Stage::institutions(matcher, &spec.colleges, spec.match_mode()));
        }
        if !spec.location.trim().is_empty() {
            pipeline.stages.push(Stage::location(&spec.location));
        }
        if spec.followers_min > 0 || spec.followers_max > 0 {
            pipeline
                .stages
                .push(Stage::followers(spec.followers_min, spec.followers_max));
        }
        if spec.profile_sources.linkedin || spec.profile_sources.wellfound {
            pipeline.stages.push(Stage::sources(spec.profile_sources));
        }
        if !spec.industries.is_empty() {
            pipeline.stages.push(Stage::industries(&spec.industries));
        }
        pipeline
    }

    /// `true` when every stage keeps the profile.
    pub fn keeps(&self, profile: &MergedProfile) -> bool {
        self.stages.iter().all(|s| s.keeps(profile))
    }

    /// Name of the first stage that rejects the profile.
    pub fn first_rejection(&self, profile: &MergedProfile) -> Option<&'static str> {
        self.stages.iter().find(|s| !s.keeps(profile)).map(Stage::name)
    }

    /// Stage names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(Stage::name)
    }

    /// Number of stages.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// `true` when no stage is active.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Any stealth field contains any of the lower-cased `terms`.
pub fn is_stealth<P: ProfileFields + ?Sized>(profile: &P, terms: &[String]) -> bool {
    ProfileField::STEALTH.iter().any(|&field| {
        let text = profile.text(field);
        if text.is_empty() {
            return false;
        }
        let text = text.to_lowercase();
        terms.iter().any(|t| text.contains(t.as_str()))
    })
}

/// Institution selection against a profile's colleges.
///
/// `Any` keeps the profile when some selected institution matches some
/// college. `All` needs as many distinct selections as colleges, and
/// coverage in both directions.
pub fn institutions_match(
    matcher: &InstitutionMatcher,
    queries: &[InstitutionQuery],
    colleges: &[String],
    mode: MatchMode,
) -> bool {
    let normalizer = matcher.normalizer();
    let normalized: Vec<String> = colleges.iter().map(|c| normalizer.normalize(c)).collect();
    let covered = |q: &InstitutionQuery, candidates: &[String]| {
        q.is_vacuous() || candidates.iter().any(|c| q.matches_normalized(c))
    };

    match mode {
        MatchMode::Any => queries.iter().any(|q| covered(q, &normalized)),
        MatchMode::All => {
            let mut seen = FxHashSet::default();
            let selected: Vec<&InstitutionQuery> = queries
                .iter()
                .filter(|q| seen.insert(q.normalized()))
                .collect();
            if selected.len() != colleges.len() {
                return false;
            }
            if !selected.iter().all(|&q| covered(q, &normalized)) {
                return false;
            }
            // Reverse coverage keeps the selection as the query side, so the
            // exact Ahmedabad rule only applies when the selection names it.
            normalized
                .iter()
                .all(|c| c.is_empty() || selected.iter().any(|q| q.matches_normalized(c)))
        }
    }
}

/// Case-insensitive location containment; a blank needle passes.
pub fn location_match<P: ProfileFields + ?Sized>(profile: &P, needle: &str) -> bool {
    needle.is_empty() || profile.text(ProfileField::Location).to_lowercase().contains(needle)
}

/// `min <= count <= max`, with `max == 0` meaning no upper bound.
#[inline]
pub fn followers_in_range(count: u64, min: u64, max: u64) -> bool {
    count >= min && (max == 0 || count <= max)
}

/// Source-presence rule.
///
/// Selecting the directory, alone or together with LinkedIn, requires
/// presence on both sources. Selecting LinkedIn alone requires LinkedIn and
/// excludes directory profiles.
#[inline]
pub fn sources_match(selection: ProfileSources, has_linkedin: bool, has_wellfound: bool) -> bool {
    match (selection.linkedin, selection.wellfound) {
        (false, false) => true,
        (true, false) => has_linkedin && !has_wellfound,
        (_, true) => has_linkedin && has_wellfound,
    }
}

/// Any lower-cased term appears in an industry field or the job description.
/// An empty term list passes.
pub fn industry_match<P: ProfileFields + ?Sized>(profile: &P, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let haystacks = [
        profile.text(ProfileField::CompanyIndustry).to_lowercase(),
        profile.text(ProfileField::LinkedinIndustry).to_lowercase(),
        profile.text(ProfileField::JobDescription).to_lowercase(),
    ];
    terms
        .iter()
        .any(|t| haystacks.iter().any(|h| h.contains(t.as_str())))
}
