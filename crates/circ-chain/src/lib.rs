//! Core hash chain for the circ ledger.
//!
//! This crate is the heart of circ. It provides:
//! - [`Block`] — one immutable checkout entry with its integrity metadata
//! - [`commit::commitment`] — the domain-separated BLAKE3 block commitment
//! - [`Chain`] — the append-only block sequence rooted at genesis
//! - [`validate`] — extension checks and full-stream re-verification
//! - [`SharedChain`] — the lock-guarded handle served to concurrent callers
//!
//! Integrity is never trusted: every check recomputes hashes from the
//! stored fields. A candidate block extends the chain only if it links to
//! the head's hash, advances the position by exactly one, and carries a
//! commitment that matches its own content.

pub mod block;
pub mod chain;
pub mod commit;
pub mod error;
pub mod shared;
pub mod validate;

pub use block::Block;
pub use chain::Chain;
pub use error::ChainError;
pub use shared::SharedChain;
