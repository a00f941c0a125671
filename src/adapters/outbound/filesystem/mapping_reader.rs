use crate::shared::error::TaggerError;
use crate::shared::Result;
use crate::tagging::domain::MappingRecord;
use std::fs;
use std::path::Path;

/// Parsed mapping file: the usable records plus a count of rows that
/// did not have exactly six columns and were skipped.
#[derive(Debug)]
pub struct MappingFile {
    pub records: Vec<MappingRecord>,
    pub skipped_rows: usize,
}

/// MappingFileReader adapter for the operator-supplied pairing CSV
///
/// Rows with an unexpected column count are skipped, not reported as
/// errors; the count of skipped rows is surfaced so verbose mode can
/// mention them. Blank lines are ignored.
pub struct MappingFileReader;

impl MappingFileReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> Result<MappingFile> {
        let content =
            fs::read_to_string(path).map_err(|e| TaggerError::MappingFileRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let mut records = Vec::new();
        let mut skipped_rows = 0;

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match MappingRecord::parse_line(line) {
                Some(record) => records.push(record),
                None => skipped_rows += 1,
            }
        }

        Ok(MappingFile {
            records,
            skipped_rows,
        })
    }
}

impl Default for MappingFileReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn mapping_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_valid_file() {
        let file = mapping_file(
            "org1,svc-a,t1,org2,svc-a-image,t2\norg1,svc-b,t3,org2,svc-b-image,t4\n",
        );
        let mapping = MappingFileReader::new().read(file.path()).unwrap();
        assert_eq!(mapping.records.len(), 2);
        assert_eq!(mapping.skipped_rows, 0);
        assert_eq!(mapping.records[0].scm_target_name, "svc-a");
        assert_eq!(mapping.records[1].container_target_id, "t4");
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let file = mapping_file(
            "org1,svc-a,t1,org2,svc-a-image,t2\nshort,row\norg1,svc-b,t3,org2,svc-b-image,t4\n",
        );
        let mapping = MappingFileReader::new().read(file.path()).unwrap();
        assert_eq!(mapping.records.len(), 2);
        assert_eq!(mapping.skipped_rows, 1);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let file = mapping_file("\norg1,svc-a,t1,org2,svc-a-image,t2\n\n");
        let mapping = MappingFileReader::new().read(file.path()).unwrap();
        assert_eq!(mapping.records.len(), 1);
        assert_eq!(mapping.skipped_rows, 0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = MappingFileReader::new().read(Path::new("/nonexistent/mapping.csv"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read mapping file"));
    }
}
