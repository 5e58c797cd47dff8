// src/validate/mod.rs
pub mod header;
pub mod row;
pub mod rules;

pub use header::{check_header, HeaderMismatch};
pub use row::{validate_row, RowError, Violation};

use std::path::Path;
use tracing::{info, warn};

use crate::error::RegistryError;
use crate::load::{load_registry, RawTable};
use crate::report::ValidationReport;
use crate::schema::REGISTRY_FIELDS;

/// Check the header, then every row. A bad header stops before any row is looked at;
/// bad rows never stop the rows after them.
pub fn validate_table(table: &RawTable) -> Result<Vec<RowError>, HeaderMismatch> {
    check_header(&table.headers)?;

    let errors: Vec<RowError> = table
        .rows
        .iter()
        .filter_map(|row| validate_row(&REGISTRY_FIELDS, row).err())
        .collect();

    if errors.is_empty() {
        info!(rows = table.rows.len(), "all rows valid");
    } else {
        warn!(
            rows = table.rows.len(),
            invalid = errors.len(),
            "registry has invalid rows"
        );
    }
    Ok(errors)
}

/// Load → header check → row validation.
pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<ValidationReport, RegistryError> {
    let path = path.as_ref();
    let table = load_registry(path)?;
    let errors = validate_table(&table)?;
    Ok(ValidationReport::new(path, table.rows.len(), errors))
}
