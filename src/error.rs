use thiserror::Error;

use crate::load::LoadError;
use crate::validate::HeaderMismatch;

/// Failures that stop a run before any row verdicts exist.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Header(#[from] HeaderMismatch),
}
