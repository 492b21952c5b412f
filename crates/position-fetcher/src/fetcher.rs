use alloy_primitives::Address;
use position_core::{
    decode, derive_key, encode_packed, LookupKey, MethodSpec, Position, StructuredRecord,
    TypedValue,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::FetcherConfig;
use crate::rpc::LedgerService;
use crate::Result;

/// Derived key together with the decoded reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionReport {
    pub key: LookupKey,
    pub record: StructuredRecord,
}

/// Pack `arguments`, hash them into a key, call `method(key)` on `target`
/// and decode the reply
///
/// The first failing stage aborts the whole operation.
pub async fn derive_key_and_fetch<S: LedgerService>(
    arguments: &[TypedValue],
    method: &MethodSpec,
    target: Address,
    service: &S,
) -> Result<PositionReport> {
    let packed = encode_packed(arguments)?;
    let key = derive_key(&packed);
    debug!(preimage_len = packed.len(), %key, "derived lookup key");

    let payload = method.encode_call(&key)?;
    let raw = service.call(target, payload).await?;
    debug!(reply_len = raw.len(), "received reply");

    let record = decode(&method.outputs, &raw)?;
    Ok(PositionReport { key, record })
}

/// Fetches the configured position from its pool
pub struct PositionFetcher<S> {
    config: FetcherConfig,
    method: MethodSpec,
    service: S,
}

impl<S: LedgerService> PositionFetcher<S> {
    pub fn new(config: FetcherConfig, service: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            method: MethodSpec::positions()?,
            service,
        })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    fn arguments(&self) -> [TypedValue; 3] {
        [
            TypedValue::Address(self.config.owner),
            TypedValue::int24(self.config.tick_lower),
            TypedValue::int24(self.config.tick_upper),
        ]
    }

    pub async fn derive_key_and_fetch(&self) -> Result<PositionReport> {
        info!(
            pool = %self.config.pool_address,
            owner = %self.config.owner,
            tick_lower = self.config.tick_lower,
            tick_upper = self.config.tick_upper,
            "fetching position"
        );
        let report = derive_key_and_fetch(
            &self.arguments(),
            &self.method,
            self.config.pool_address,
            &self.service,
        )
        .await?;
        info!(key = %report.key, "position fetched");
        Ok(report)
    }

    pub async fn fetch_position(&self) -> Result<(LookupKey, Position)> {
        let report = self.derive_key_and_fetch().await?;
        let position = Position::try_from(&report.record)?;
        Ok((report.key, position))
    }
}
