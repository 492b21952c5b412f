use alloy_primitives::{address, Address};
use position_core::constants::{INT24_MAX, INT24_MIN};
use serde::{Deserialize, Serialize};

use crate::{FetchError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// JSON-RPC endpoint (eth_call)
    pub rpc_url: String,
    /// Pool contract exposing `positions(bytes32)`
    pub pool_address: Address,
    /// Position owner (usually the position manager or a direct minter)
    pub owner: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            // public Arbitrum One node
            rpc_url: "https://arbitrum.llamarpc.com".into(),
            // WETH/USDC 0.05% on Arbitrum
            pool_address: address!("c6962004f452be9203591991d15f6b388e09e8d0"),
            owner: address!("F829c130478599E4EF49F6e02EDaA1F8736E9B00"),
            tick_lower: -197740,
            tick_upper: -197640,
        }
    }
}

impl FetcherConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Ticks must fit int24 and form a non-empty range
    pub fn validate(&self) -> Result<()> {
        for tick in [self.tick_lower, self.tick_upper] {
            if !(INT24_MIN..=INT24_MAX).contains(&i64::from(tick)) {
                return Err(FetchError::Config(format!("tick {tick} does not fit int24")));
            }
        }
        if self.tick_lower >= self.tick_upper {
            return Err(FetchError::Config(format!(
                "tick_lower {} must be below tick_upper {}",
                self.tick_lower, self.tick_upper
            )));
        }
        Ok(())
    }
}
