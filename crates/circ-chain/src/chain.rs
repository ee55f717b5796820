use circ_types::CheckoutRecord;
use tracing::{debug, warn};

use crate::block::Block;
use crate::error::ChainError;
use crate::validate;

/// The ordered, append-only block sequence rooted at genesis.
///
/// A chain is created exactly once via [`Chain::new`] and always contains
/// at least the genesis block; there is no empty state. Blocks are never
/// deleted, reordered, or mutated after append.
#[derive(Debug, Clone)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain containing exactly the genesis block.
    pub fn new() -> Result<Self, ChainError> {
        Ok(Self {
            blocks: vec![Block::genesis()?],
        })
    }

    /// Append a checkout event.
    ///
    /// Builds a candidate against the current head, validates it, and
    /// pushes it. On any error the chain is left unchanged and the error
    /// kind says which invariant failed. Payloads flagged as genesis are
    /// refused outright: the chain already has its genesis and a second
    /// one can never validate.
    pub fn append(&mut self, data: CheckoutRecord) -> Result<&Block, ChainError> {
        if data.is_genesis {
            warn!("refusing genesis-flagged payload on an existing chain");
            return Err(ChainError::MalformedGenesis {
                reason: "chain already has a genesis block".into(),
            });
        }

        let head = self.head();
        let candidate = Block::next(head, data)?;
        validate::check_extension(&candidate, head)?;

        debug!(
            position = candidate.position,
            hash = %candidate.hash.short_hex(),
            "block appended"
        );
        self.blocks.push(candidate);
        Ok(&self.blocks[self.blocks.len() - 1])
    }

    /// The most recently appended block.
    pub fn head(&self) -> &Block {
        self.blocks.last().expect("chain always contains genesis")
    }

    /// Read-only view of the full block sequence, genesis first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks, including genesis.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`; kept for the conventional pairing with [`Chain::len`].
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Re-verify the whole stream by recomputing every commitment.
    pub fn verify(&self) -> Result<(), ChainError> {
        validate::verify_chain(&self.blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_chain_holds_only_genesis() {
        let chain = Chain::new().unwrap();
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        assert_eq!(chain.blocks()[0].position, 0);
        assert!(chain.blocks()[0].data.is_genesis);
    }

    #[test]
    fn append_extends_the_chain() {
        let mut chain = Chain::new().unwrap();
        let data = CheckoutRecord::new("456", "Jane Doe", "2022-01-03");
        chain.append(data).unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.blocks()[1].position, 1);
        assert_eq!(chain.blocks()[1].previous_hash, chain.blocks()[0].hash);
        assert_eq!(chain.head(), &chain.blocks()[1]);
    }

    #[test]
    fn positions_are_monotonic() {
        let mut chain = Chain::new().unwrap();
        for i in 0..5 {
            chain
                .append(CheckoutRecord::new(format!("book-{i}"), "Jane Doe", "2022-01-03"))
                .unwrap();
        }
        for pair in chain.blocks().windows(2) {
            assert_eq!(pair[1].position, pair[0].position + 1);
            assert_eq!(pair[1].previous_hash, pair[0].hash);
        }
    }

    #[test]
    fn genesis_payload_is_refused() {
        let mut chain = Chain::new().unwrap();
        let err = chain.append(CheckoutRecord::genesis()).unwrap_err();
        assert!(matches!(err, ChainError::MalformedGenesis { .. }));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn failed_append_leaves_chain_unchanged() {
        let mut chain = Chain::new().unwrap();
        chain
            .append(CheckoutRecord::new("456", "Jane Doe", "2022-01-03"))
            .unwrap();
        let before = chain.blocks().to_vec();

        chain.append(CheckoutRecord::genesis()).unwrap_err();

        assert_eq!(chain.blocks(), &before[..]);
    }

    #[test]
    fn chain_verifies_after_appends() {
        let mut chain = Chain::new().unwrap();
        for i in 0..4 {
            chain
                .append(CheckoutRecord::new(format!("book-{i}"), "John Doe", "2022-01-02"))
                .unwrap();
        }
        assert!(chain.verify().is_ok());
    }

    fn arb_record() -> impl Strategy<Value = CheckoutRecord> {
        ("[a-z0-9]{1,8}", "[A-Za-z][a-z ]{0,11}", "[0-9]{4}-[0-9]{2}-[0-9]{2}")
            .prop_map(|(book_id, user, date)| CheckoutRecord::new(book_id, user, date))
    }

    proptest! {
        #[test]
        fn appended_streams_always_verify(
            records in proptest::collection::vec(arb_record(), 0..12)
        ) {
            let mut chain = Chain::new().unwrap();
            for record in records {
                chain.append(record).unwrap();
            }
            prop_assert!(chain.verify().is_ok());
        }
    }
}
