// src/load/mod.rs
use csv::ReaderBuilder;
use std::{
    fs,
    io::{self, Cursor},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, info};

/// Where the registry lives when no path is given.
pub const DEFAULT_CSV_FILE: &str = "cluster-intent-registry.csv";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV file not found at {}", .0.display())]
    Missing(PathBuf),
    #[error("CSV file is empty")]
    Empty,
    #[error("failed reading CSV file: {0}")]
    Unreadable(String),
}

/// One data record, as read from the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line the record starts on; the header is line 1.
    pub line: u64,
    pub cells: Vec<String>,
}

impl RawRow {
    /// Cell text at `idx`, or `None` when the cell is empty or whitespace only.
    pub fn value(&self, idx: usize) -> Option<&str> {
        self.cells
            .get(idx)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Column names exactly as the file claims them.
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Read the registry at `path` fully into memory.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<RawTable, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::Missing(path.to_path_buf()),
        _ => LoadError::Unreadable(format!("{}: {}", path.display(), e)),
    })?;
    debug!(bytes = bytes.len(), "read registry file");

    let table = parse_registry(&bytes)?;
    info!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded registry"
    );
    Ok(table)
}

/// Parse registry CSV content that is already in memory.
pub fn parse_registry(data: &[u8]) -> Result<RawTable, LoadError> {
    let text = std::str::from_utf8(data)
        .map_err(|e| LoadError::Unreadable(format!("invalid UTF-8: {}", e)))?;
    let text = strip_bom(text);
    if text.trim().is_empty() {
        return Err(LoadError::Empty);
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(Cursor::new(text.as_bytes()));

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| LoadError::Unreadable(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| LoadError::Unreadable(e.to_string()))?;
        let line = record
            .position()
            .map(|p| p.line())
            .ok_or_else(|| {
                LoadError::Unreadable(format!("record {} has no position", rows.len() + 1))
            })?;
        rows.push(RawRow {
            line,
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(RawTable { headers, rows })
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn loads_header_and_rows_with_line_numbers() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "a,b,c\n1,2,3\n\n4,\"5,5\",6\n")?;

        let table = load_registry(tmp.path())?;
        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].line, 2);
        assert_eq!(table.rows[1].line, 4);
        assert_eq!(table.rows[1].cells, vec!["4", "5,5", "6"]);
        Ok(())
    }

    #[test]
    fn multiline_cells_keep_start_line_of_each_record() -> Result<()> {
        let table = parse_registry(b"a,b\n1,\"two\nlines\"\n3,4\n")?;
        let lines: Vec<u64> = table.rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 4]);
        assert!(table.rows.iter().all(|r| r.line >= 2));
        assert_eq!(table.rows[0].cells[1], "two\nlines");
        Ok(())
    }

    #[test]
    fn missing_file_is_reported_as_missing() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nope.csv");
        match load_registry(&path) {
            Err(LoadError::Missing(p)) => assert_eq!(p, path),
            other => panic!("expected Missing, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn zero_byte_and_blank_files_are_empty() -> Result<()> {
        let tmp = NamedTempFile::new()?;
        assert!(matches!(load_registry(tmp.path()), Err(LoadError::Empty)));
        assert!(matches!(parse_registry(b"\n \n"), Err(LoadError::Empty)));
        Ok(())
    }

    #[test]
    fn header_only_file_has_no_rows() -> Result<()> {
        let table = parse_registry(b"a,b\n")?;
        assert_eq!(table.headers, vec!["a", "b"]);
        assert!(table.rows.is_empty());
        Ok(())
    }

    #[test]
    fn ragged_record_is_unreadable() {
        let err = parse_registry(b"a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(err, LoadError::Unreadable(_)), "{:?}", err);
    }

    #[test]
    fn invalid_utf8_is_unreadable() {
        let err = parse_registry(b"a,b\n\xff,1\n").unwrap_err();
        assert!(matches!(err, LoadError::Unreadable(_)));
    }

    #[test]
    fn bom_is_stripped_from_first_header() -> Result<()> {
        let table = parse_registry("\u{feff}store_id,zone_name\nx,y\n".as_bytes())?;
        assert_eq!(table.headers[0], "store_id");
        Ok(())
    }

    #[test]
    fn blank_cells_read_as_absent() {
        let row = RawRow {
            line: 2,
            cells: vec!["x".into(), "".into(), "  ".into()],
        };
        assert_eq!(row.value(0), Some("x"));
        assert_eq!(row.value(1), None);
        assert_eq!(row.value(2), None);
        assert_eq!(row.value(3), None);
    }
}
