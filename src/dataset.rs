use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Result;
use csv::{ReaderBuilder, Trim};
use indexmap::IndexMap;

use crate::error::ErrorKind;
use crate::structs::ScoredVulnerability;
use crate::{load_err, sentry_err};

pub const DEFAULT_DATA_PATH: &str = "export/vuln_scores.csv";
pub const REQUIRED_COLUMNS: [&str; 2] = ["id", "combined_score"];

/// Loads the scores export at `path`, keeping rows in file order.
pub fn load_dataset(path: &Path) -> Result<Vec<ScoredVulnerability>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => load_err!("Dataset file not found: {}", path.display()),
        _ => sentry_err!(ErrorKind::Load, "Failed to open dataset {}: {e}", path.display()),
    })?;
    read_dataset(file, path)
}

fn read_dataset<R: Read>(input: R, path: &Path) -> Result<Vec<ScoredVulnerability>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    // Checked up front so that a header-only file with the wrong columns still fails.
    let headers = reader
        .headers()
        .map_err(|e| load_err!("Failed to read header of {}: {e}", path.display()))?;
    let missing_columns = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .copied()
        .collect::<Vec<&str>>();
    if !missing_columns.is_empty() {
        return Err(load_err!(
            "Dataset {} is missing required column(s): {}",
            path.display(),
            missing_columns.join(", ")
        ));
    }

    reader
        .deserialize::<ScoredVulnerability>()
        .map(|row| row.map_err(|e| load_err!("Malformed row in {}: {e}", path.display())))
        .collect()
}

/// Returns every id that occurs more than once, with its count, in first-seen order.
pub fn find_duplicate_ids(records: &[ScoredVulnerability]) -> IndexMap<&str, usize> {
    let mut id_to_count: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        *id_to_count.entry(record.id.as_str()).or_insert(0) += 1;
    }
    id_to_count.retain(|_, count| *count > 1);
    id_to_count
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::VulnDashError;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn error_kind(err: &anyhow::Error) -> ErrorKind {
        err.downcast_ref::<VulnDashError>().unwrap().kind
    }

    #[test]
    fn loads_rows_in_file_order() {
        let file = write_csv("id,combined_score\nCVE-1,7.5\nCVE-2,9.1\nCVE-0,3\n");
        let records = load_dataset(file.path()).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        let scores: Vec<f64> = records.iter().map(|r| r.combined_score).collect();
        assert_eq!(ids, vec!["CVE-1", "CVE-2", "CVE-0"]);
        assert_eq!(scores, vec![7.5, 9.1, 3.0]);
    }

    #[test]
    fn ignores_extra_columns_and_their_order() {
        let file = write_csv(
            "cvss,combined_score,ai_score,id\n7.0,7.5,0.5,CVE-1\n9.0,9.1,0.1,CVE-2\n",
        );
        let records = load_dataset(file.path()).unwrap();
        assert_eq!(
            records,
            vec![
                ScoredVulnerability { id: "CVE-1".to_string(), combined_score: 7.5 },
                ScoredVulnerability { id: "CVE-2".to_string(), combined_score: 9.1 },
            ]
        );
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let file = write_csv("id , combined_score\n CVE-1 , 7.5 \n");
        let records = load_dataset(file.path()).unwrap();
        assert_eq!(records[0].id, "CVE-1");
        assert_eq!(records[0].combined_score, 7.5);
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let file = write_csv("id,combined_score\n");
        assert!(load_dataset(file.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_score_column_fails() {
        let file = write_csv("id,cvss\nCVE-1,7.5\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::Load);
        assert!(err.to_string().contains("combined_score"));
    }

    #[test]
    fn missing_column_fails_even_without_rows() {
        let file = write_csv("id\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(err.to_string().contains("combined_score"));
    }

    #[test]
    fn empty_file_fails() {
        let file = write_csv("");
        let err = load_dataset(file.path()).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::Load);
        assert!(err.to_string().contains("id, combined_score"));
    }

    #[test]
    fn nonexistent_path_fails_the_same_way_every_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vuln_scores.csv");
        let first = load_dataset(&path).unwrap_err();
        let second = load_dataset(&path).unwrap_err();
        assert_eq!(error_kind(&first), ErrorKind::Load);
        assert!(first.to_string().starts_with("Dataset file not found"));
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn non_numeric_score_fails() {
        let file = write_csv("id,combined_score\nCVE-1,high\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::Load);
        assert!(err.to_string().starts_with("Malformed row"));
    }

    #[test]
    fn empty_score_cell_loads_as_nan() {
        let file = write_csv("id,combined_score\nCVE-1,7.5\nCVE-2,\nCVE-3,  \n");
        let records = load_dataset(file.path()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].combined_score, 7.5);
        assert!(records[1].combined_score.is_nan());
        assert!(records[2].combined_score.is_nan());
    }

    #[test]
    fn ragged_row_fails() {
        let file = write_csv("id,combined_score\nCVE-1,7.5,extra\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::Load);
    }

    #[test]
    fn duplicate_ids_are_kept_and_reported() {
        let file = write_csv("id,combined_score\nCVE-2,1\nCVE-1,2\nCVE-2,3\nCVE-1,4\nCVE-2,5\n");
        let records = load_dataset(file.path()).unwrap();
        assert_eq!(records.len(), 5);

        let duplicates = find_duplicate_ids(&records);
        assert_eq!(duplicates.into_iter().collect::<Vec<_>>(), vec![("CVE-2", 3), ("CVE-1", 2)]);
    }

    #[test]
    fn unique_ids_report_no_duplicates() {
        let file = write_csv("id,combined_score\nCVE-1,1\nCVE-2,2\n");
        let records = load_dataset(file.path()).unwrap();
        assert!(find_duplicate_ids(&records).is_empty());
    }
}
