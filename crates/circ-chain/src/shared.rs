use std::sync::RwLock;

use circ_types::CheckoutRecord;

use crate::block::Block;
use crate::chain::Chain;
use crate::error::ChainError;

/// Lock-guarded chain handle for concurrent callers.
///
/// The write lock spans the whole read-head, construct, validate, append
/// sequence, so two concurrent appends can never both build against the
/// same head. Reads take the shared lock and clone, giving callers a
/// snapshot that later appends cannot touch.
pub struct SharedChain {
    inner: RwLock<Chain>,
}

impl SharedChain {
    /// Create a handle around a freshly bootstrapped chain.
    pub fn new() -> Result<Self, ChainError> {
        Ok(Self {
            inner: RwLock::new(Chain::new()?),
        })
    }

    /// Append a checkout event as one atomic critical section.
    pub fn append(&self, data: CheckoutRecord) -> Result<Block, ChainError> {
        let mut chain = self.inner.write().map_err(|_| ChainError::LockPoisoned)?;
        chain.append(data).map(Block::clone)
    }

    /// Snapshot of the full block sequence, genesis first.
    pub fn snapshot(&self) -> Result<Vec<Block>, ChainError> {
        let chain = self.inner.read().map_err(|_| ChainError::LockPoisoned)?;
        Ok(chain.blocks().to_vec())
    }

    /// Clone of the current head block.
    pub fn head(&self) -> Result<Block, ChainError> {
        let chain = self.inner.read().map_err(|_| ChainError::LockPoisoned)?;
        Ok(chain.head().clone())
    }

    /// Number of blocks, including genesis.
    pub fn len(&self) -> Result<usize, ChainError> {
        let chain = self.inner.read().map_err(|_| ChainError::LockPoisoned)?;
        Ok(chain.len())
    }

    /// Re-verify the whole stream; returns the verified block count.
    pub fn verify(&self) -> Result<usize, ChainError> {
        let chain = self.inner.read().map_err(|_| ChainError::LockPoisoned)?;
        chain.verify()?;
        Ok(chain.len())
    }
}
