//! Content-based fingerprinting of the store.

use sha2::{Digest, Sha256};

use crate::StoreResult;
use crate::types::{GraphId, GraphRecord};

/// Hash all rows in id order into a hex digest.
///
/// The fingerprint covers row content only, so two stores holding the same
/// committed rows compare equal and any rejected submission leaves the
/// digest byte-identical.
pub fn compute_fingerprint<'a, I>(rows: I) -> StoreResult<String>
where
    I: IntoIterator<Item = (GraphId, &'a GraphRecord)>,
{
    let mut hasher = Sha256::new();

    for (id, record) in rows {
        hasher.update(id.get().to_be_bytes());
        let row_json = serde_json::to_string(record)?;
        hasher.update(row_json.as_bytes());
    }

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}
