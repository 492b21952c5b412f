use std::future::Future;

use alloy_primitives::{Address, Bytes};
use alloy_rpc_client::{ClientBuilder, RpcClient};
use alloy_rpc_types::BlockNumberOrTag;
use serde_json::json;
use tracing::debug;

use crate::{FetchError, Result};

/// Read-only contract call against a ledger node
pub trait LedgerService {
    /// Execute `payload` against `target` and return the raw reply
    fn call(&self, target: Address, payload: Bytes) -> impl Future<Output = Result<Bytes>> + Send;
}

/// JSON-RPC client issuing `eth_call` at the latest block
pub struct EthRpcClient {
    client: RpcClient,
}

impl EthRpcClient {
    pub async fn new(rpc_url: &str) -> Result<Self> {
        let client = ClientBuilder::default()
            .connect(rpc_url)
            .await
            .map_err(FetchError::transport)?;
        Ok(Self { client })
    }

    /// Current block number, used as a connectivity check
    pub async fn block_number(&self) -> Result<u64> {
        let block: alloy_primitives::U64 = self
            .client
            .request_noparams("eth_blockNumber")
            .await
            .map_err(FetchError::transport)?;
        Ok(block.to::<u64>())
    }
}

impl LedgerService for EthRpcClient {
    async fn call(&self, target: Address, payload: Bytes) -> Result<Bytes> {
        debug!(%target, len = payload.len(), "eth_call");
        let request = json!({ "to": target, "data": payload });
        self.client
            .request("eth_call", (request, BlockNumberOrTag::Latest))
            .await
            .map_err(FetchError::transport)
    }
}
