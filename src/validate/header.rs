use std::collections::HashSet;
use thiserror::Error;

use crate::schema::expected_header;

/// The file's header differs from the registry's column list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "CSV header does not match expected format. Expected: {expected:?} Got: {actual:?}{}",
    mismatch_hint(.missing, .unexpected)
)]
pub struct HeaderMismatch {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    /// Expected names the file lacks.
    pub missing: Vec<String>,
    /// Names the file has that the registry does not define.
    pub unexpected: Vec<String>,
}

fn mismatch_hint(missing: &[String], unexpected: &[String]) -> String {
    let mut hint = String::new();
    if !missing.is_empty() {
        hint.push_str(&format!(" Missing: {:?}", missing));
    }
    if !unexpected.is_empty() {
        hint.push_str(&format!(" Unexpected: {:?}", unexpected));
    }
    if hint.is_empty() {
        hint.push_str(" (same columns, wrong order or duplicated)");
    }
    hint
}

/// Exact, order-sensitive header comparison.
pub fn check_header(actual: &[String]) -> Result<(), HeaderMismatch> {
    let expected = expected_header();
    if actual.len() == expected.len() && actual.iter().zip(&expected).all(|(a, e)| a == e) {
        return Ok(());
    }

    let have: HashSet<&str> = actual.iter().map(String::as_str).collect();
    let want: HashSet<&str> = expected.iter().copied().collect();

    Err(HeaderMismatch {
        missing: expected
            .iter()
            .filter(|n| !have.contains(*n))
            .map(|n| n.to_string())
            .collect(),
        unexpected: actual
            .iter()
            .filter(|n| !want.contains(n.as_str()))
            .cloned()
            .collect(),
        expected: expected.into_iter().map(str::to_string).collect(),
        actual: actual.to_vec(),
    })
}
