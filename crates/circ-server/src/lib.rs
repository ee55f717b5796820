//! HTTP boundary for the circ ledger.
//!
//! Serves the chain's read and append operations over REST, plus the
//! catalog's book-identity endpoint. The chain itself lives in
//! `circ-chain`; this crate only translates between HTTP and the core's
//! typed results.

pub mod catalog;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::CircServer;
