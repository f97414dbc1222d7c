//! Source document loading.
//!
//! A source document is one JSON array of record objects. Malformed JSON
//! fails the load; array elements that are not objects are skipped with a
//! warning, since one bad row should not discard a whole export.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use roster_types::{json_kind, RawRecord};

use crate::engine::MentionEntry;
use crate::error::LoadError;

/// Reads records from a JSON array.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, LoadError> {
    let document: Value = serde_json::from_reader(reader)?;
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match RawRecord::from_value(item) {
            Ok(record) => records.push(record),
            Err(err) => warn!(index, %err, "skipping source element"),
        }
    }
    Ok(records)
}

/// Reads records from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let records = read_records(open(path)?)?;
    debug!(path = %path.display(), records = records.len(), "loaded source");
    Ok(records)
}

/// Loads and concatenates several source files in order.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawRecord>, LoadError> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(load_records(path.as_ref())?);
    }
    Ok(records)
}

/// Reads a mention dataset from a JSON array.
pub fn read_mentions<R: Read>(reader: R) -> Result<Vec<MentionEntry>, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a mention dataset from a JSON file.
pub fn load_mentions(path: &Path) -> Result<Vec<MentionEntry>, LoadError> {
    let entries = read_mentions(open(path)?)?;
    debug!(path = %path.display(), entries = entries.len(), "loaded mentions");
    Ok(entries)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::{ProfileField, ProfileFields};
    use std::io::Write;

    #[test]
    fn reads_object_array() {
        let records = read_records(
            br#"[{"firstName": "Jo", "college": "MIT"}, {"lastName": "Lee"}]"#.as_slice(),
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text(ProfileField::College), "MIT");
    }

    #[test]
    fn skips_non_objects() {
        let records = read_records(br#"[{"firstName": "Jo"}, 3, null, "x"]"#.as_slice()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn rejects_non_array_documents() {
        let err = read_records(br#"{"firstName": "Jo"}"#.as_slice()).unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray { found: "object" }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = read_records(br#"[{"firstName": "#.as_slice()).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn concatenates_sources_in_order() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        let mut b = tempfile::NamedTempFile::new().unwrap();
        write!(a, r#"[{{"firstName": "A"}}]"#).unwrap();
        write!(b, r#"[{{"firstName": "B"}}, {{"firstName": "C"}}]"#).unwrap();

        let records = load_sources(&[a.path(), b.path()]).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.text(ProfileField::FirstName)).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_records(Path::new("/nonexistent/profiles.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/profiles.json"));
    }

    #[test]
    fn reads_mentions() {
        let entries = read_mentions(
            br#"[{"query": "jo lee", "results": [{"url": "https://redd.it/x", "title": "t"}]}]"#
                .as_slice(),
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].results[0].url, "https://redd.it/x");
    }
}
