use chrono::{DateTime, Utc};
use circ_types::{BlockHash, CheckoutRecord};
use serde::{Deserialize, Serialize};

use crate::commit::commitment;
use crate::error::ChainError;

/// One immutable ledger entry: a checkout event plus its integrity metadata.
///
/// Field order matches the wire format served by the read interface. The
/// chain owns its blocks and only ever hands out shared references or
/// clones, so an appended block cannot be mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Zero for genesis, strictly +1 per append.
    pub position: u64,
    /// The checkout event. Opaque to the chain except for the genesis flag.
    pub data: CheckoutRecord,
    /// Wall clock at block creation; monotonicity is not assumed.
    pub timestamp: DateTime<Utc>,
    /// Commitment over `(position, timestamp, data, previous_hash)`.
    pub hash: BlockHash,
    /// The predecessor's `hash`; the zero hash for genesis.
    pub previous_hash: BlockHash,
}

impl Block {
    /// Build the chain's first block: position 0, zero predecessor hash,
    /// and a payload flagged as genesis.
    pub fn genesis() -> Result<Self, ChainError> {
        let data = CheckoutRecord::genesis();
        let timestamp = Utc::now();
        let previous_hash = BlockHash::zero();
        let hash = commitment(0, &timestamp, &data, &previous_hash)?;
        Ok(Self {
            position: 0,
            data,
            timestamp,
            hash,
            previous_hash,
        })
    }

    /// Build a candidate extending `previous` with `data`.
    ///
    /// The result links to `previous` by construction; whether `previous`
    /// is still the chain head is decided at append time.
    pub fn next(previous: &Block, data: CheckoutRecord) -> Result<Self, ChainError> {
        let position = previous.position + 1;
        let timestamp = Utc::now();
        let previous_hash = previous.hash;
        let hash = commitment(position, &timestamp, &data, &previous_hash)?;
        Ok(Self {
            position,
            data,
            timestamp,
            hash,
            previous_hash,
        })
    }

    /// Recompute the commitment from this block's stored fields.
    pub fn recompute_hash(&self) -> Result<BlockHash, ChainError> {
        commitment(self.position, &self.timestamp, &self.data, &self.previous_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_shape() {
        let genesis = Block::genesis().unwrap();
        assert_eq!(genesis.position, 0);
        assert!(genesis.data.is_genesis);
        assert!(genesis.previous_hash.is_zero());
        assert_eq!(genesis.recompute_hash().unwrap(), genesis.hash);
    }

    #[test]
    fn next_links_to_previous() {
        let genesis = Block::genesis().unwrap();
        let data = CheckoutRecord::new("123", "John Doe", "2022-01-02");
        let block = Block::next(&genesis, data).unwrap();
        assert_eq!(block.position, 1);
        assert_eq!(block.previous_hash, genesis.hash);
        assert_eq!(block.recompute_hash().unwrap(), block.hash);
    }

    #[test]
    fn stored_hash_is_recomputable() {
        let genesis = Block::genesis().unwrap();
        let block =
            Block::next(&genesis, CheckoutRecord::new("456", "Jane Doe", "2022-01-03")).unwrap();
        // The commitment must be a pure function of the stored fields.
        assert_eq!(block.recompute_hash().unwrap(), block.hash);
    }

    #[test]
    fn wire_serialization_shape() {
        let genesis = Block::genesis().unwrap();
        let json = serde_json::to_value(&genesis).unwrap();
        assert_eq!(json["position"], 0);
        assert_eq!(json["data"]["is_genesis"], true);
        assert!(json["timestamp"].is_string());
        assert_eq!(json["hash"], genesis.hash.to_hex());
        assert_eq!(json["previous_hash"], "0".repeat(64));
    }
}
