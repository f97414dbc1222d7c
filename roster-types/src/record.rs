//! Raw scraped records and lenient field access.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field::{ProfileField, LINKEDIN_KEY_PREFIX};

/// Reads a JSON value as text. Only strings count; anything else is `""`.
#[inline]
pub fn value_text(value: Option<&Value>) -> &str {
    match value {
        Some(Value::String(s)) => s.as_str(),
        _ => "",
    }
}

/// Returns `true` when a value is absent, `null`, or a blank string.
#[inline]
pub fn value_is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Reads a JSON value as a finite float.
///
/// Numbers are taken as-is and strings are parsed after trimming. Anything
/// else, including `NaN` and infinities, reads as `None`.
pub fn value_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Reads a JSON value as a non-negative integer count.
///
/// Numbers are truncated. Strings contribute their leading digits, skipping
/// thousands separators (`,` and `_`) and an optional leading `+`, so
/// `"1,204 followers"` reads as `1204`. Everything else reads as `0`.
pub fn value_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(u) = n.as_u64() {
                u
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f > 0.0 => f.trunc() as u64,
                    _ => 0,
                }
            }
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            let s = s.strip_prefix('+').unwrap_or(s);
            let mut count: u64 = 0;
            for b in s.bytes() {
                match b {
                    b'0'..=b'9' => {
                        count = count.saturating_mul(10).saturating_add(u64::from(b - b'0'));
                    }
                    b',' | b'_' => {}
                    _ => break,
                }
            }
            count
        }
        _ => 0,
    }
}

/// Field access shared by raw records and merged profiles.
///
/// Implementors only provide [`ProfileFields::value_by_key`]; the typed readers are
/// derived from it and never fail.
pub trait ProfileFields {
    /// Raw JSON value stored under `key`.
    fn value_by_key(&self, key: &str) -> Option<&Value>;

    /// Raw JSON value of a known field.
    #[inline]
    fn value(&self, field: ProfileField) -> Option<&Value> {
        self.value_by_key(field.key())
    }

    /// Field as text, `""` when absent or not a string.
    #[inline]
    fn text(&self, field: ProfileField) -> &str {
        value_text(self.value(field))
    }

    /// `true` when the field holds a non-blank value.
    #[inline]
    fn has(&self, field: ProfileField) -> bool {
        !value_is_empty(self.value(field))
    }

    /// Field as a finite float.
    #[inline]
    fn number(&self, field: ProfileField) -> Option<f64> {
        value_number(self.value(field))
    }

    /// Field as a count, `0` when missing or unparseable.
    #[inline]
    fn count(&self, field: ProfileField) -> u64 {
        value_count(self.value(field))
    }

    /// `firstName lastName`, trimmed.
    fn full_name(&self) -> String {
        let first = self.text(ProfileField::FirstName).trim();
        let last = self.text(ProfileField::LastName).trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{first} {last}"),
            (false, true) => first.to_string(),
            (true, false) => last.to_string(),
            (true, true) => String::new(),
        }
    }

    /// `true` when a startup-directory URL is present.
    fn has_directory_url(&self) -> bool {
        ProfileField::DIRECTORY_URLS.iter().any(|&f| self.has(f))
    }

    /// `true` when a LinkedIn profile URL is present.
    fn has_linkedin_profile(&self) -> bool {
        self.has(ProfileField::LinkedinProfileUrl)
    }
}

/// Deduplication identity: `(companyName, firstName, lastName)` taken
/// verbatim, case-sensitive and untrimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MergeKey {
    /// Company name.
    pub company: String,
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
}

impl fmt::Display for MergeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.company, self.first, self.last)
    }
}

/// One scraped observation from a source export.
///
/// Stored as an ordered JSON object so unknown columns survive and the key
/// order of the source is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing JSON object.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Converts a JSON value into a record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NotAnObject`] when `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(RecordError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }

    /// Builder-style setter for a known field.
    #[must_use]
    pub fn with(mut self, field: ProfileField, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a known field.
    pub fn set(&mut self, field: ProfileField, value: impl Into<Value>) {
        self.fields.insert(field.key().to_string(), value.into());
    }

    /// Sets an arbitrary key.
    pub fn set_key(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Key/value pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` when the record has no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Value of `key` rendered for a flat cell: strings verbatim, `null` and
    /// absent keys empty, everything else as compact JSON.
    pub fn display_value(&self, key: &str) -> String {
        match self.fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Identity used to fold duplicates.
    pub fn merge_key(&self) -> MergeKey {
        MergeKey {
            company: self.text(ProfileField::CompanyName).to_string(),
            first: self.text(ProfileField::FirstName).to_string(),
            last: self.text(ProfileField::LastName).to_string(),
        }
    }

    /// `true` when the record names a person or a company.
    ///
    /// Only non-blank strings count, matching what [`RawRecord::merge_key`]
    /// can tell apart.
    pub fn has_identity(&self) -> bool {
        [
            ProfileField::FirstName,
            ProfileField::LastName,
            ProfileField::CompanyName,
        ]
        .iter()
        .any(|&f| !self.text(f).trim().is_empty())
    }

    /// `true` when any `linkedin*` key holds a non-blank value.
    pub fn has_linkedin_origin(&self) -> bool {
        self.fields
            .iter()
            .any(|(k, v)| k.starts_with(LINKEDIN_KEY_PREFIX) && !value_is_empty(Some(v)))
    }

    /// Records without identity, or without any LinkedIn, directory,
    /// education, or job-title evidence, are not merged.
    pub fn is_admissible(&self) -> bool {
        if !self.has_identity() {
            return false;
        }
        self.has_linkedin_origin()
            || self.has_directory_url()
            || ProfileField::EDUCATION.iter().any(|&f| self.has(f))
            || ProfileField::JOB_TITLES.iter().any(|&f| self.has(f))
    }

    pub(crate) fn map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl ProfileFields for RawRecord {
    #[inline]
    fn value_by_key(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_map(fields)
    }
}

/// Name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Errors raised while turning source JSON into records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The source element is not a JSON object.
    #[error("record must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON kind of the offending element.
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        RawRecord::from_value(value).unwrap()
    }

    #[test]
    fn text_ignores_non_strings() {
        let r = record(json!({"firstName": "Jo", "lastName": 7, "companyName": null}));
        assert_eq!(r.text(ProfileField::FirstName), "Jo");
        assert_eq!(r.text(ProfileField::LastName), "");
        assert_eq!(r.text(ProfileField::CompanyName), "");
        assert_eq!(r.text(ProfileField::College), "");
    }

    #[test]
    fn number_accepts_numeric_strings() {
        let r = record(json!({"college_score": "7.5", "best_score": 9, "job_title_score": "n/a"}));
        assert_eq!(r.number(ProfileField::CollegeScore), Some(7.5));
        assert_eq!(r.number(ProfileField::BestScore), Some(9.0));
        assert_eq!(r.number(ProfileField::JobTitleScore), None);
    }

    #[test]
    fn count_parses_leading_digits() {
        let cases = [
            (json!(900), 900),
            (json!(12.9), 12),
            (json!(-4), 0),
            (json!("1,204 followers"), 1204),
            (json!("+500"), 500),
            (json!("abc"), 0),
            (json!(null), 0),
            (json!(true), 0),
        ];
        for (value, expected) in cases {
            let r = record(json!({ "linkedinFollowersCount": value }));
            assert_eq!(r.count(ProfileField::FollowersCount), expected, "{value}");
        }
    }

    #[test]
    fn full_name_handles_missing_parts() {
        assert_eq!(record(json!({"firstName": " Jo ", "lastName": "Lee"})).full_name(), "Jo Lee");
        assert_eq!(record(json!({"lastName": "Lee"})).full_name(), "Lee");
        assert_eq!(record(json!({})).full_name(), "");
    }

    #[test]
    fn merge_key_is_verbatim() {
        let a = record(json!({"companyName": "Acme", "firstName": "Jo", "lastName": "Lee"}));
        let b = record(json!({"companyName": "acme", "firstName": "Jo", "lastName": "Lee"}));
        assert_ne!(a.merge_key(), b.merge_key());
        assert_eq!(a.merge_key(), a.clone().merge_key());
    }

    #[test]
    fn admissibility_requires_identity_and_evidence() {
        let identity_only = record(json!({"firstName": "Jo"}));
        assert!(!identity_only.is_admissible());

        let with_linkedin = record(json!({"firstName": "Jo", "linkedinHeadline": "Founder"}));
        assert!(with_linkedin.is_admissible());

        let with_directory = record(json!({"companyName": "Acme", "wellFoundURL": "https://wellfound.com/company/acme"}));
        assert!(with_directory.is_admissible());

        let with_college = record(json!({"lastName": "Lee", "college": "IIT Delhi"}));
        assert!(with_college.is_admissible());

        let blank_linkedin = record(json!({"firstName": "Jo", "linkedinHeadline": "  "}));
        assert!(!blank_linkedin.is_admissible());

        let no_identity = record(json!({"linkedinHeadline": "Founder", "college": "MIT"}));
        assert!(!no_identity.is_admissible());

        let numeric_name = record(json!({"firstName": 5, "college": "MIT"}));
        assert!(!numeric_name.has_identity());
        assert!(!numeric_name.is_admissible());
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert_eq!(
            RawRecord::from_value(json!([1, 2])),
            Err(RecordError::NotAnObject { found: "array" })
        );
    }

    #[test]
    fn keys_keep_source_order() {
        let r = record(json!({"zeta": 1, "alpha": 2, "firstName": "Jo"}));
        let keys: Vec<&str> = r.keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "firstName"]);
    }

    #[test]
    fn display_value_flattens() {
        let r = record(json!({"a": "x", "b": 3, "c": null, "d": [1, 2]}));
        assert_eq!(r.display_value("a"), "x");
        assert_eq!(r.display_value("b"), "3");
        assert_eq!(r.display_value("c"), "");
        assert_eq!(r.display_value("d"), "[1,2]");
        assert_eq!(r.display_value("missing"), "");
    }
}
