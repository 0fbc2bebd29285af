//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use oedipus_core::model::ContentValidationError;

/// Errors emitted while loading the content dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read content file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content failed validation: {0}")]
    Invalid(#[from] ContentValidationError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Content(#[from] ContentError),
}
