pub mod error;
pub mod load;
pub mod report;
pub mod schema;
pub mod validate;

pub use error::RegistryError;
pub use load::{load_registry, LoadError, RawRow, RawTable, DEFAULT_CSV_FILE};
pub use report::ValidationReport;
pub use validate::{validate_file, validate_table, HeaderMismatch, RowError, Violation};
