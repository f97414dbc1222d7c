//! Ranked CSV export.
//!
//! One row per raw record, in rank order. The header is `uniqueRank`,
//! `uniquePoints`, then the key set of the top-ranked record; other records
//! are projected onto that header.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use roster_types::{RankedProfile, RawRecord, ScoreWeights};

use crate::engine::rank_profiles;
use crate::error::ExportError;

const RANK_COLUMN: &str = "uniqueRank";
const POINTS_COLUMN: &str = "uniquePoints";

/// Header row for a ranked batch.
pub fn csv_header(ranked: &[RankedProfile<RawRecord>]) -> Vec<String> {
    let mut header = vec![RANK_COLUMN.to_string(), POINTS_COLUMN.to_string()];
    if let Some(first) = ranked.first() {
        header.extend(
            first
                .profile
                .keys()
                .filter(|k| *k != RANK_COLUMN && *k != POINTS_COLUMN)
                .map(str::to_string),
        );
    }
    header
}

/// Writes ranked records as CSV.
pub fn write_ranked_csv<W: Write>(
    ranked: &[RankedProfile<RawRecord>],
    writer: W,
) -> Result<(), ExportError> {
    let header = csv_header(ranked);
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&header)?;

    let mut row: Vec<String> = Vec::with_capacity(header.len());
    for entry in ranked {
        row.clear();
        row.push(entry.unique_rank.to_string());
        row.push(entry.unique_points.to_string());
        row.extend(header[2..].iter().map(|key| entry.profile.display_value(key)));
        csv.write_record(&row)?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Renders the whole CSV document in memory.
pub fn render_ranked_csv(ranked: &[RankedProfile<RawRecord>]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_ranked_csv(ranked, &mut buf)?;
    Ok(buf)
}

/// Ranks `records` and writes the CSV to `output`.
///
/// The document is rendered before anything touches the filesystem and is
/// moved into place from a sibling temporary file, so `output` is either
/// complete or untouched. Returns the number of rows written.
pub fn export_file(
    records: &[RawRecord],
    weights: &ScoreWeights,
    output: &Path,
) -> Result<usize, ExportError> {
    let ranked = rank_profiles(records, weights);
    let bytes = render_ranked_csv(&ranked)?;

    let staging = staging_path(output);
    let io_err = |source| ExportError::Io {
        path: output.to_path_buf(),
        source,
    };
    fs::write(&staging, &bytes).map_err(io_err)?;
    if let Err(source) = fs::rename(&staging, output) {
        let _ = fs::remove_file(&staging);
        return Err(io_err(source));
    }

    info!(path = %output.display(), rows = ranked.len(), "wrote ranked export");
    Ok(ranked.len())
}

fn staging_path(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export.csv".to_string());
    output.with_file_name(format!(".{name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        RawRecord::from_value(value).unwrap()
    }

    fn records() -> Vec<RawRecord> {
        vec![
            record(json!({"firstName": "Low", "college_score": 1, "note": "a,b"})),
            record(json!({"firstName": "Top", "lastName": "Lee", "college_score": 10, "tags": ["x"]})),
        ]
    }

    #[test]
    fn header_follows_top_ranked_record() {
        let ranked = rank_profiles(&records(), &ScoreWeights::default());
        assert_eq!(
            csv_header(&ranked),
            ["uniqueRank", "uniquePoints", "firstName", "lastName", "college_score", "tags"]
        );
    }

    #[test]
    fn renders_rows_in_rank_order() {
        let ranked = rank_profiles(&records(), &ScoreWeights::default());
        let text = String::from_utf8(render_ranked_csv(&ranked).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "uniqueRank,uniquePoints,firstName,lastName,college_score,tags",
                "1,20,Top,Lee,10,\"[\"\"x\"\"]\"",
                "2,2,Low,,1,",
            ]
        );
    }

    #[test]
    fn empty_batch_writes_header_only() {
        let text = String::from_utf8(render_ranked_csv(&[]).unwrap()).unwrap();
        assert_eq!(text, "uniqueRank,uniquePoints\n");
    }

    #[test]
    fn stale_rank_columns_are_not_duplicated() {
        let ranked = rank_profiles(
            &[record(json!({"uniqueRank": 9, "firstName": "Jo"}))],
            &ScoreWeights::default(),
        );
        assert_eq!(csv_header(&ranked), ["uniqueRank", "uniquePoints", "firstName"]);
    }

    #[test]
    fn export_writes_complete_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ranked.csv");
        let rows = export_file(&records(), &ScoreWeights::default(), &output).unwrap();
        assert_eq!(rows, 2);

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(!staging_path(&output).exists());
    }

    #[test]
    fn export_into_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("ranked.csv");
        let err = export_file(&records(), &ScoreWeights::default(), &output).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(!output.exists());
    }
}
