//! sw-store: persistence boundary for committed graph definitions.

pub mod fingerprint;
pub mod registry;
pub mod store;
pub mod types;

pub use fingerprint::compute_fingerprint;
pub use registry::{InMemoryMetricRegistry, MetricRegistry};
pub use store::GraphStore;
pub use types::*;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
