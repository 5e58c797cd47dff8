//! Console rendering of a validation run.

use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

use crate::error::RegistryError;
use crate::validate::RowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Passed,
    Failed,
    Error,
}

/// Outcome of a run that got past loading and the header check.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub file: PathBuf,
    pub rows_checked: usize,
    pub errors: Vec<RowError>,
}

impl ValidationReport {
    pub fn new(file: &Path, rows_checked: usize, errors: Vec<RowError>) -> Self {
        Self {
            file: file.to_path_buf(),
            rows_checked,
            errors,
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn status(&self) -> Status {
        if self.is_success() {
            Status::Passed
        } else {
            Status::Failed
        }
    }

    pub fn render_text(&self) -> String {
        if self.is_success() {
            return "CSV validation successful!".to_string();
        }
        let mut out = String::from("CSV validation failed:");
        for err in &self.errors {
            out.push_str("\n  - ");
            out.push_str(&err.to_string());
        }
        out
    }

    pub fn to_json(&self) -> Value {
        json!({
            "status": self.status(),
            "file": self.file.display().to_string(),
            "rows_checked": self.rows_checked,
            "errors": self.errors,
        })
    }
}

pub fn render_fatal_text(err: &RegistryError) -> String {
    format!("Error: {}", err)
}

pub fn fatal_json(file: &Path, err: &RegistryError) -> Value {
    json!({
        "status": Status::Error,
        "file": file.display().to_string(),
        "error": err.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// What goes to stdout, and whether the run counts as a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub passed: bool,
}

/// Render any run outcome. Only a fully valid file passes.
pub fn render_outcome(
    file: &Path,
    outcome: &Result<ValidationReport, RegistryError>,
    format: Format,
) -> serde_json::Result<Rendered> {
    let (text, passed) = match (outcome, format) {
        (Ok(rep), Format::Text) => (rep.render_text(), rep.is_success()),
        (Ok(rep), Format::Json) => (
            serde_json::to_string_pretty(&rep.to_json())?,
            rep.is_success(),
        ),
        (Err(err), Format::Text) => (render_fatal_text(err), false),
        (Err(err), Format::Json) => (
            serde_json::to_string_pretty(&fatal_json(file, err))?,
            false,
        ),
    };
    Ok(Rendered { text, passed })
}
