//! Uniswap V3 position key derivation and lookup
//!
//! Re-exports the workspace crates:
//! - [`codec`]: packed encoding, key derivation, reply decoding
//! - [`fetcher`]: JSON-RPC transport and the fetch pipeline

pub use position_core as codec;
pub use position_fetcher as fetcher;
