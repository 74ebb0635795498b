//! Graph storage API.

use core::num::NonZeroU64;
use std::collections::BTreeMap;

use crate::StoreResult;
use crate::fingerprint::compute_fingerprint;
use crate::types::{GraphId, GraphRecord};

/// In-memory store of committed graph definitions.
///
/// Rows are keyed by their 1-based id; iteration and fingerprinting follow
/// id order so the content hash is deterministic.
#[derive(Debug, Clone)]
pub struct GraphStore {
    rows: BTreeMap<u64, GraphRecord>,
    next_id: NonZeroU64,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: NonZeroU64::MIN,
        }
    }
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a fully resolved record, assigning the next row id.
    pub fn commit(&mut self, record: GraphRecord) -> GraphId {
        let id = GraphId::from(self.next_id);
        self.next_id = self.next_id.checked_add(1).unwrap_or(NonZeroU64::MAX);
        tracing::debug!(id = id.get(), name = %record.name, "graph row committed");
        self.rows.insert(id.get(), record);
        id
    }

    pub fn get(&self, id: GraphId) -> Option<&GraphRecord> {
        self.rows.get(&id.get())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in id order.
    pub fn rows(&self) -> impl Iterator<Item = (GraphId, &GraphRecord)> {
        self.rows
            .iter()
            .filter_map(|(raw, record)| GraphId::new(*raw).map(|id| (id, record)))
    }

    /// Content hash of all committed rows.
    pub fn fingerprint(&self) -> StoreResult<String> {
        compute_fingerprint(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sw_graph::GraphKind;

    use crate::types::StoredAxis;

    fn record(name: &str) -> GraphRecord {
        GraphRecord {
            name: name.to_string(),
            kind: GraphKind::Normal,
            width: 900,
            height: 200,
            show_legend: true,
            show_work_period: true,
            show_triggers: true,
            show_3d: false,
            percent_left: None,
            percent_right: None,
            ymin: StoredAxis::Calculated,
            ymax: StoredAxis::Calculated,
            items: Vec::new(),
        }
    }

    #[test]
    fn commit_assigns_sequential_ids() {
        let mut store = GraphStore::new();
        let id1 = store.commit(record("First"));
        let id2 = store.commit(record("Second"));
        assert_eq!(id1.get(), 1);
        assert_eq!(id2.get(), 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(id1).map(|r| r.name.as_str()), Some("First"));
    }

    #[test]
    fn fingerprint_changes_on_commit() {
        let mut store = GraphStore::new();
        let before = store.fingerprint().expect("hash");
        store.commit(record("First"));
        let after = store.fingerprint().expect("hash");
        assert_ne!(before, after);
    }

    #[test]
    fn equal_content_means_equal_fingerprint() {
        let mut store1 = GraphStore::new();
        let mut store2 = GraphStore::new();
        store1.commit(record("First"));
        store2.commit(record("First"));
        assert_eq!(
            store1.fingerprint().expect("hash"),
            store2.fingerprint().expect("hash")
        );
    }
}
