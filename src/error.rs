use crate::resolve::ResolveError;
use crate::source::LoadError;
use crate::structure::StructureError;
use thiserror::Error;

/// Top-level error type for the onde library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to load paths file: {0}")]
    Load(#[from] LoadError),

    #[error("invalid directory structure: {0}")]
    Structure(#[from] StructureError),

    #[error("path resolution failed: {0}")]
    Resolve(#[from] ResolveError),
}
