//! Lookup key derivation

use alloy_primitives::{Address, B256};
use tiny_keccak::{Hasher, Keccak};

use crate::packed::position_key_preimage;
use crate::Result;

/// 32-byte key addressing a record in pool storage
pub type LookupKey = B256;

/// Keccak-256 (the EVM variant, not NIST SHA3-256)
pub fn keccak256(data: &[u8]) -> B256 {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    B256::from(out)
}

/// Hash a packed buffer into a lookup key
pub fn derive_key(packed: &[u8]) -> LookupKey {
    keccak256(packed)
}

/// `keccak256(abi.encodePacked(owner, tickLower, tickUpper))`
pub fn position_key(owner: Address, tick_lower: i32, tick_upper: i32) -> Result<LookupKey> {
    let preimage = position_key_preimage(owner, tick_lower, tick_upper)?;
    Ok(derive_key(&preimage))
}
