//! Fetch a Uniswap V3 position from a pool over JSON-RPC
//!
//! This crate wires `position-core` to a node:
//! 1. Derives the position key from owner and tick bounds
//! 2. Encodes a `positions(bytes32)` call
//! 3. Submits it with `eth_call`
//! 4. Decodes the five-field reply
//!
//! ## Usage
//!
//! ```no_run
//! use position_fetcher::{EthRpcClient, FetcherConfig, PositionFetcher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = FetcherConfig::default();
//!     let rpc = EthRpcClient::new(&config.rpc_url).await?;
//!     let fetcher = PositionFetcher::new(config, rpc)?;
//!     let (key, position) = fetcher.fetch_position().await?;
//!     println!("{key}: {position:?}");
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod fetcher;
mod rpc;

pub use config::FetcherConfig;
pub use error::FetchError;
pub use fetcher::{derive_key_and_fetch, PositionFetcher, PositionReport};
pub use rpc::{EthRpcClient, LedgerService};

pub type Result<T> = std::result::Result<T, FetchError>;
