//! Method interface description and call encoding
//!
//! The interface is kept in its JSON ABI form and parsed on demand, so the
//! output schema is derived from the same text a block explorer shows.

use alloy_primitives::Bytes;
use serde::Deserialize;

use crate::constants::SELECTOR_SIZE;
use crate::decode::{FieldSchema, FieldSpec};
use crate::key::{keccak256, LookupKey};
use crate::{Error, Result};

/// `positions` view of a Uniswap V3 pool
pub const POSITIONS_ABI: &str = r#"[{"inputs":[{"internalType":"bytes32","name":"","type":"bytes32"}],"name":"positions","outputs":[{"internalType":"uint128","name":"liquidity","type":"uint128"},{"internalType":"uint256","name":"feeGrowthInside0LastX128","type":"uint256"},{"internalType":"uint256","name":"feeGrowthInside1LastX128","type":"uint256"},{"internalType":"uint128","name":"tokensOwed0","type":"uint128"},{"internalType":"uint128","name":"tokensOwed1","type":"uint128"}],"stateMutability":"view","type":"function"}]"#;

pub const POSITIONS_METHOD: &str = "positions";

#[derive(Debug, Deserialize)]
struct AbiEntry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    inputs: Vec<AbiParam>,
    #[serde(default)]
    outputs: Vec<AbiParam>,
}

#[derive(Debug, Deserialize)]
struct AbiParam {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

/// One callable method: its input types and output schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: String,
    pub inputs: Vec<String>,
    pub outputs: FieldSchema,
}

impl MethodSpec {
    /// Find `method` among the functions of a JSON ABI
    pub fn from_abi_json(json: &str, method: &str) -> Result<Self> {
        let entries: Vec<AbiEntry> = serde_json::from_str(json)?;
        let entry = entries
            .into_iter()
            .find(|e| e.kind == "function" && e.name == method)
            .ok_or_else(|| Error::InvalidAbi(format!("function {method} not found")))?;

        let outputs = entry
            .outputs
            .iter()
            .map(|p| FieldSpec::from_abi_type(&p.name, &p.kind))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: entry.name,
            inputs: entry.inputs.into_iter().map(|p| p.kind).collect(),
            outputs: FieldSchema::new(outputs),
        })
    }

    pub fn positions() -> Result<Self> {
        Self::from_abi_json(POSITIONS_ABI, POSITIONS_METHOD)
    }

    /// Canonical signature, e.g. `positions(bytes32)`
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.inputs.join(","))
    }

    /// First four bytes of `keccak256(signature)`
    pub fn selector(&self) -> [u8; SELECTOR_SIZE] {
        let hash = keccak256(self.signature().as_bytes());
        let mut selector = [0u8; SELECTOR_SIZE];
        selector.copy_from_slice(&hash[..SELECTOR_SIZE]);
        selector
    }

    /// Calldata `selector || key` for a method taking a single `bytes32`
    pub fn encode_call(&self, key: &LookupKey) -> Result<Bytes> {
        if self.inputs.len() != 1 || self.inputs[0] != "bytes32" {
            return Err(Error::UnsupportedType(self.signature()));
        }
        let mut data = Vec::with_capacity(SELECTOR_SIZE + key.len());
        data.extend_from_slice(&self.selector());
        data.extend_from_slice(key.as_slice());
        Ok(data.into())
    }
}
