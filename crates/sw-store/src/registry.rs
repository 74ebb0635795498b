//! Metric reference resolution.

use std::collections::HashMap;

use uuid::Uuid;

use crate::types::MetricId;

/// Collaborator interface for resolving item/metric references at submit
/// time. Resolution happens at most once per submission; a miss surfaces as
/// a rejection and is never retried here.
pub trait MetricRegistry {
    fn resolve_metric(&self, name: &str) -> Option<MetricId>;
}

/// Registry backed by a plain name -> id map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetricRegistry {
    metrics: HashMap<String, MetricId>,
}

impl InMemoryMetricRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the registry with freshly minted ids for the given names.
    pub fn with_metrics<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.insert(name);
        }
        registry
    }

    pub fn insert(&mut self, name: impl Into<String>) -> MetricId {
        let id = Uuid::new_v4();
        self.metrics.insert(name.into(), id);
        id
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl MetricRegistry for InMemoryMetricRegistry {
    fn resolve_metric(&self, name: &str) -> Option<MetricId> {
        self.metrics.get(name).copied()
    }
}
