//! Known record fields.
//!
//! Source exports are irregular JSON objects, so records are stored as
//! ordered maps and the keys the engine understands are named here. Every
//! variant maps to one stable camelCase JSON key.

/// A record field the engine reads.
///
/// `#[repr(u8)]` keeps the enum one byte wide so field lists stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ProfileField {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Current company name.
    CompanyName,
    /// Free-text college list, separated by `,` or `;`.
    College,
    /// College prestige sub-score, 0-10.
    CollegeScore,
    /// Company prestige sub-score, 0-10.
    BestScore,
    /// Job title sub-score, 0-10.
    JobTitleScore,
    /// LinkedIn follower count.
    FollowersCount,
    /// LinkedIn profile URL.
    LinkedinProfileUrl,
    /// LinkedIn company page URL.
    LinkedinCompanyUrl,
    /// Startup-directory company URL.
    WellfoundUrl,
    /// Startup-directory profile URL.
    WellfoundProfileUrl,
    /// Profile headline.
    Headline,
    /// Current job title.
    JobTitle,
    /// Current job description.
    JobDescription,
    /// Current job date range.
    JobDateRange,
    /// Current company description.
    CompanyDescription,
    /// Previous company name.
    PreviousCompanyName,
    /// Previous job title.
    PreviousJobTitle,
    /// Previous job description.
    PreviousJobDescription,
    /// Previous job date range.
    PreviousJobDateRange,
    /// Most recent school.
    SchoolName,
    /// Degree at the most recent school.
    SchoolDegree,
    /// Previous school.
    PreviousSchoolName,
    /// Degree at the previous school.
    PreviousSchoolDegree,
    /// Industry reported by LinkedIn.
    LinkedinIndustry,
    /// Industry reported by the company record.
    CompanyIndustry,
    /// Free-text location.
    Location,
    /// Skills summary.
    Skills,
    /// Additional company slot 1.
    AdditionalCompany1,
    /// Additional company slot 2.
    AdditionalCompany2,
    /// Additional company slot 3.
    AdditionalCompany3,
    /// Additional company slot 4.
    AdditionalCompany4,
    /// Additional education slot 1.
    AdditionalEducation1,
    /// Additional education slot 2.
    AdditionalEducation2,
    /// Additional education slot 3.
    AdditionalEducation3,
}

impl ProfileField {
    /// Startup-directory URL fields.
    pub const DIRECTORY_URLS: [ProfileField; 2] =
        [ProfileField::WellfoundUrl, ProfileField::WellfoundProfileUrl];

    /// Fields that count as education evidence.
    pub const EDUCATION: [ProfileField; 8] = [
        ProfileField::College,
        ProfileField::SchoolName,
        ProfileField::SchoolDegree,
        ProfileField::PreviousSchoolName,
        ProfileField::PreviousSchoolDegree,
        ProfileField::AdditionalEducation1,
        ProfileField::AdditionalEducation2,
        ProfileField::AdditionalEducation3,
    ];

    /// Fields that count as job-title evidence.
    pub const JOB_TITLES: [ProfileField; 2] =
        [ProfileField::JobTitle, ProfileField::PreviousJobTitle];

    /// Fields scanned by the stealth-mode heuristic.
    pub const STEALTH: [ProfileField; 8] = [
        ProfileField::CompanyName,
        ProfileField::PreviousCompanyName,
        ProfileField::Headline,
        ProfileField::JobTitle,
        ProfileField::PreviousJobTitle,
        ProfileField::JobDescription,
        ProfileField::CompanyDescription,
        ProfileField::PreviousJobDescription,
    ];

    /// Fields concatenated for free-text search. On a merged profile the
    /// `college` value is the joined college list.
    pub const SEARCHABLE: [ProfileField; 28] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::CompanyName,
        ProfileField::Headline,
        ProfileField::JobTitle,
        ProfileField::JobDescription,
        ProfileField::JobDateRange,
        ProfileField::PreviousCompanyName,
        ProfileField::PreviousJobTitle,
        ProfileField::PreviousJobDescription,
        ProfileField::PreviousJobDateRange,
        ProfileField::SchoolName,
        ProfileField::SchoolDegree,
        ProfileField::PreviousSchoolName,
        ProfileField::PreviousSchoolDegree,
        ProfileField::LinkedinIndustry,
        ProfileField::CompanyIndustry,
        ProfileField::Location,
        ProfileField::Skills,
        ProfileField::CompanyDescription,
        ProfileField::AdditionalCompany1,
        ProfileField::AdditionalCompany2,
        ProfileField::AdditionalCompany3,
        ProfileField::AdditionalCompany4,
        ProfileField::AdditionalEducation1,
        ProfileField::AdditionalEducation2,
        ProfileField::AdditionalEducation3,
        ProfileField::College,
    ];

    /// JSON key of this field in source exports.
    #[must_use]
    #[inline(always)]
    pub const fn key(self) -> &'static str {
        match self {
            ProfileField::FirstName => "firstName",
            ProfileField::LastName => "lastName",
            ProfileField::CompanyName => "companyName",
            ProfileField::College => "college",
            ProfileField::CollegeScore => "college_score",
            ProfileField::BestScore => "best_score",
            ProfileField::JobTitleScore => "job_title_score",
            ProfileField::FollowersCount => "linkedinFollowersCount",
            ProfileField::LinkedinProfileUrl => "linkedinProfileUrl",
            ProfileField::LinkedinCompanyUrl => "linkedinCompanyUrl",
            ProfileField::WellfoundUrl => "wellFoundURL",
            ProfileField::WellfoundProfileUrl => "wellFoundProfileURL",
            ProfileField::Headline => "linkedinHeadline",
            ProfileField::JobTitle => "linkedinJobTitle",
            ProfileField::JobDescription => "linkedinJobDescription",
            ProfileField::JobDateRange => "linkedinJobDateRange",
            ProfileField::CompanyDescription => "linkedinCompanyDescription",
            ProfileField::PreviousCompanyName => "linkedinPreviousCompanyName",
            ProfileField::PreviousJobTitle => "linkedinPreviousJobTitle",
            ProfileField::PreviousJobDescription => "linkedinPreviousJobDescription",
            ProfileField::PreviousJobDateRange => "linkedinPreviousJobDateRange",
            ProfileField::SchoolName => "linkedinSchoolName",
            ProfileField::SchoolDegree => "linkedinSchoolDegree",
            ProfileField::PreviousSchoolName => "linkedinPreviousSchoolName",
            ProfileField::PreviousSchoolDegree => "linkedinPreviousSchoolDegree",
            ProfileField::LinkedinIndustry => "linkedinIndustry",
            ProfileField::CompanyIndustry => "companyIndustry",
            ProfileField::Location => "location",
            ProfileField::Skills => "linkedinSkillsLabel",
            ProfileField::AdditionalCompany1 => "additionalCompany1",
            ProfileField::AdditionalCompany2 => "additionalCompany2",
            ProfileField::AdditionalCompany3 => "additionalCompany3",
            ProfileField::AdditionalCompany4 => "additionalCompany4",
            ProfileField::AdditionalEducation1 => "additionalEducation1",
            ProfileField::AdditionalEducation2 => "additionalEducation2",
            ProfileField::AdditionalEducation3 => "additionalEducation3",
        }
    }

    /// Returns `true` for the startup-directory URL fields.
    #[must_use]
    #[inline(always)]
    pub const fn is_directory_url(self) -> bool {
        matches!(
            self,
            ProfileField::WellfoundUrl | ProfileField::WellfoundProfileUrl
        )
    }
}

/// Prefix shared by every LinkedIn-sourced key.
pub const LINKEDIN_KEY_PREFIX: &str = "linkedin";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linkedin_fields_share_prefix() {
        for field in [
            ProfileField::Headline,
            ProfileField::JobTitle,
            ProfileField::FollowersCount,
            ProfileField::LinkedinProfileUrl,
        ] {
            assert!(field.key().starts_with(LINKEDIN_KEY_PREFIX));
        }
        assert!(!ProfileField::WellfoundUrl.key().starts_with(LINKEDIN_KEY_PREFIX));
    }

    #[test]
    fn directory_urls_flagged() {
        assert!(ProfileField::WellfoundUrl.is_directory_url());
        assert!(ProfileField::WellfoundProfileUrl.is_directory_url());
        assert!(!ProfileField::LinkedinProfileUrl.is_directory_url());
    }

    #[test]
    fn searchable_keys_are_distinct() {
        let mut keys: Vec<&str> = ProfileField::SEARCHABLE.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ProfileField::SEARCHABLE.len());
    }
}
