use chrono::{DateTime, Utc};
use circ_types::{BlockHash, CheckoutRecord};

use crate::error::ChainError;

/// Domain tag prepended to every block commitment.
///
/// Keeps block hashes disjoint from any other BLAKE3 use of the same bytes.
const DOMAIN: &str = "circ-block-v1";

/// Compute the commitment over a block's fields.
///
/// The digest binds `(position, timestamp, payload, previous_hash)` by
/// feeding their canonical byte forms directly into a domain-separated
/// BLAKE3 hasher: big-endian position, RFC 3339 timestamp, the payload's
/// canonical JSON, and the raw predecessor digest. Identical inputs always
/// produce the same hash, so verification can recompute it from stored
/// fields alone.
pub fn commitment(
    position: u64,
    timestamp: &DateTime<Utc>,
    data: &CheckoutRecord,
    previous_hash: &BlockHash,
) -> Result<BlockHash, ChainError> {
    let payload = canonical_payload(data)?;
    let mut hasher = blake3::Hasher::new();
    hasher.update(DOMAIN.as_bytes());
    hasher.update(b":");
    hasher.update(&position.to_be_bytes());
    hasher.update(timestamp.to_rfc3339().as_bytes());
    hasher.update(&payload);
    hasher.update(previous_hash.as_bytes());
    Ok(BlockHash::from(*hasher.finalize().as_bytes()))
}

/// Canonical byte representation of a checkout payload.
///
/// The same serialization used on the wire, so hashes are reproducible
/// independent of the in-memory representation.
fn canonical_payload(data: &CheckoutRecord) -> Result<Vec<u8>, ChainError> {
    serde_json::to_vec(data).map_err(|e| ChainError::Serialization(e.to_string()))
}
