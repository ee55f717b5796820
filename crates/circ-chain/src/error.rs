use circ_types::BlockHash;

/// Errors produced by chain operations.
///
/// Validation failures keep their kind so the serving boundary can report
/// a meaningful status instead of a collapsed boolean.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("broken link: candidate references {found}, head is {expected}")]
    BrokenLink {
        expected: BlockHash,
        found: BlockHash,
    },

    #[error("sequence gap: expected position {expected}, found {found}")]
    SequenceGap { expected: u64, found: u64 },

    #[error("hash mismatch at position {position}: stored hash differs from recomputed commitment")]
    HashMismatch { position: u64 },

    #[error("genesis violation: {reason}")]
    MalformedGenesis { reason: String },

    #[error("payload serialization failed: {0}")]
    Serialization(String),

    #[error("chain lock poisoned")]
    LockPoisoned,
}
