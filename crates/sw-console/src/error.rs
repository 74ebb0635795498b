//! Service-layer errors.
//!
//! Distinct from [`sw_graph::Rejection`]: a rejection is the expected
//! user-facing outcome of a bad submission, while these are infrastructure
//! failures around loading and encoding requests.

use std::path::PathBuf;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(thiserror::Error, Debug)]
pub enum ConsoleError {
    #[error("failed to read request file {path}: {source}")]
    RequestFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse request YAML: {0}")]
    RequestParse(#[from] serde_yaml::Error),

    #[error("store error: {0}")]
    Store(#[from] sw_store::StoreError),
}
