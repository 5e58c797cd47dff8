use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::rules;
use crate::load::RawRow;
use crate::schema::{FieldKind, FieldSpec};

/// One failed field of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

/// Every failed field of one data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    /// Line in the file; the first data row after the header is row 2.
    pub row: u64,
    pub violations: Vec<Violation>,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.violations.len();
        write!(
            f,
            "Error in row {}: {} validation error{}",
            self.row,
            n,
            if n == 1 { "" } else { "s" }
        )?;
        for v in &self.violations {
            write!(f, "\n      {}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

/// Check one row against `fields`, positionally. Collects every failing field.
pub fn validate_row(fields: &[FieldSpec], row: &RawRow) -> Result<(), RowError> {
    let violations: Vec<Violation> = fields
        .iter()
        .enumerate()
        .filter_map(|(idx, spec)| {
            validate_field(spec, row.value(idx)).err().map(|message| Violation {
                field: spec.name,
                message,
            })
        })
        .collect();

    if violations.is_empty() {
        return Ok(());
    }
    debug!(row = row.line, failed = violations.len(), "row rejected");
    Err(RowError {
        row: row.line,
        violations,
    })
}

/// All reasons for one field are joined so a field appears once per row.
fn validate_field(spec: &FieldSpec, value: Option<&str>) -> Result<(), String> {
    let value = match value {
        Some(v) => v,
        None if spec.is_optional() => return Ok(()),
        None => return Err("Field required".to_string()),
    };

    match spec.kind {
        FieldKind::Integer { min } => rules::parse_integer(value, min).map(|_| ())?,
        FieldKind::Boolean => rules::parse_boolean(value).map(|_| ())?,
        FieldKind::Text => {}
    }

    let reasons: Vec<String> = spec
        .checks
        .iter()
        .filter_map(|check| rules::apply(check, value).err())
        .collect();
    if reasons.is_empty() {
        Ok(())
    } else {
        Err(reasons.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::REGISTRY_FIELDS;
    use crate::validate::fixtures::{row_with, valid_cells};

    #[test]
    fn valid_row_passes() {
        let row = RawRow {
            line: 2,
            cells: valid_cells(),
        };
        assert_eq!(validate_row(&REGISTRY_FIELDS, &row), Ok(()));
    }

    #[test]
    fn optional_fields_may_be_blank() {
        let mut row = row_with(2, &[]);
        for idx in 16..22 {
            row.cells[idx] = String::new();
        }
        row.cells[16] = "   ".into();
        assert!(validate_row(&REGISTRY_FIELDS, &row).is_ok());
    }

    #[test]
    fn single_bad_field_reports_row_and_field() {
        let row = row_with(2, &[("location", "us-east1")]);
        let err = validate_row(&REGISTRY_FIELDS, &row).unwrap_err();
        assert_eq!(err.row, 2);
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "location");
        assert!(err.violations[0]
            .message
            .contains("Allowed values are [us-central1, us-west1, europe-west1]"));
    }

    #[test]
    fn every_bad_field_is_collected() {
        let row = row_with(
            7,
            &[
                ("node_count", "-2"),
                ("cluster_ipv4_cidr", "10.0.0.1/33"),
                ("sync_repo", "http://example.com/repo"),
                ("maintenance_window_start", "9:5"),
                ("maintenance_exclusion_end_1", "2025-31-01"),
                ("recreate_on_delete", "perhaps"),
            ],
        );
        let err = validate_row(&REGISTRY_FIELDS, &row).unwrap_err();
        let fields: Vec<_> = err.violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                "node_count",
                "cluster_ipv4_cidr",
                "sync_repo",
                "maintenance_window_start",
                "maintenance_exclusion_end_1",
                "recreate_on_delete",
            ]
        );
        assert!(err.to_string().starts_with("Error in row 7: 6 validation errors"));
    }

    #[test]
    fn required_blank_field_is_reported() {
        let row = row_with(3, &[("store_id", ""), ("node_count", " ")]);
        let err = validate_row(&REGISTRY_FIELDS, &row).unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert!(err.violations.iter().all(|v| v.message == "Field required"));
    }

    #[test]
    fn multiple_reasons_for_one_field_are_joined() {
        let long = format!("http://{}", "a".repeat(200));
        let row = row_with(2, &[("sync_repo", long.as_str())]);
        let err = validate_row(&REGISTRY_FIELDS, &row).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        let msg = &err.violations[0].message;
        assert!(msg.contains("at most 200 characters"), "{}", msg);
        assert!(msg.contains("Invalid URL format"), "{}", msg);
    }

    #[test]
    fn overlong_store_id_is_rejected() {
        let row = row_with(2, &[("store_id", "store-0000000000000001")]);
        let err = validate_row(&REGISTRY_FIELDS, &row).unwrap_err();
        assert_eq!(err.violations[0].field, "store_id");
    }
}
