//! Chain validity rules.
//!
//! [`check_extension`] decides whether a candidate block may extend the
//! current head; [`verify_chain`] re-verifies a whole stream from genesis.
//! Both recompute commitments rather than trusting stored hashes.

use crate::block::Block;
use crate::error::ChainError;

/// Check whether `candidate` is a valid extension of `head`.
///
/// All three invariants are enforced; any single failure rejects:
/// 1. `candidate.previous_hash` must equal `head.hash`
/// 2. `candidate.position` must equal `head.position + 1`
/// 3. the recomputed commitment must equal `candidate.hash`
pub fn check_extension(candidate: &Block, head: &Block) -> Result<(), ChainError> {
    if candidate.previous_hash != head.hash {
        return Err(ChainError::BrokenLink {
            expected: head.hash,
            found: candidate.previous_hash,
        });
    }

    if candidate.position != head.position + 1 {
        return Err(ChainError::SequenceGap {
            expected: head.position + 1,
            found: candidate.position,
        });
    }

    if candidate.recompute_hash()? != candidate.hash {
        return Err(ChainError::HashMismatch {
            position: candidate.position,
        });
    }

    Ok(())
}

/// Re-verify a full block stream.
///
/// Checks the genesis shape, then every adjacent pair via
/// [`check_extension`]. An empty slice verifies trivially; a [`Chain`]
/// never produces one.
///
/// [`Chain`]: crate::chain::Chain
pub fn verify_chain(blocks: &[Block]) -> Result<(), ChainError> {
    let Some(genesis) = blocks.first() else {
        return Ok(());
    };

    if genesis.position != 0 {
        return Err(ChainError::MalformedGenesis {
            reason: format!("genesis position is {}, expected 0", genesis.position),
        });
    }
    if !genesis.previous_hash.is_zero() {
        return Err(ChainError::MalformedGenesis {
            reason: "genesis has a non-zero predecessor hash".into(),
        });
    }
    if !genesis.data.is_genesis {
        return Err(ChainError::MalformedGenesis {
            reason: "genesis payload is not flagged as genesis".into(),
        });
    }
    if genesis.recompute_hash()? != genesis.hash {
        return Err(ChainError::HashMismatch { position: 0 });
    }

    for pair in blocks.windows(2) {
        check_extension(&pair[1], &pair[0])?;
    }

    Ok(())
}
