//! Solidity non-standard packed encoding (`abi.encodePacked`)
//!
//! Every value contributes exactly its natural width and nothing is inserted
//! between values. Only the handful of types needed for position keys are
//! supported.

use alloy_primitives::Address;

use crate::constants::{INT24_MAX, INT24_MIN, INT24_SIZE, POSITION_PREIMAGE_SIZE};
use crate::{Error, Result};

/// A value that can be packed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    /// 20 raw bytes
    Address(Address),
    /// Signed integer of `bits` width; only `int24` is encodable
    SignedInt { bits: u16, value: i64 },
    /// Appended verbatim
    Bytes(Vec<u8>),
    /// UTF-8 bytes appended verbatim
    Text(String),
}

impl TypedValue {
    pub fn int24(value: i32) -> Self {
        Self::SignedInt {
            bits: 24,
            value: i64::from(value),
        }
    }

    /// Solidity type name, used in error messages
    pub fn type_name(&self) -> String {
        match self {
            Self::Address(_) => "address".to_string(),
            Self::SignedInt { bits, .. } => format!("int{bits}"),
            Self::Bytes(_) => "bytes".to_string(),
            Self::Text(_) => "string".to_string(),
        }
    }
}

impl From<Address> for TypedValue {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}

impl From<&str> for TypedValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for TypedValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Append-only packed buffer
#[derive(Debug, Default, Clone)]
pub struct PackedEncoder {
    buf: Vec<u8>,
}

impl PackedEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: &TypedValue) -> Result<&mut Self> {
        match value {
            TypedValue::Address(address) => self.buf.extend_from_slice(address.as_slice()),
            TypedValue::SignedInt { bits: 24, value } => {
                self.buf.extend_from_slice(&encode_int24(*value)?)
            }
            TypedValue::SignedInt { .. } => {
                return Err(Error::UnsupportedType(value.type_name()));
            }
            TypedValue::Bytes(bytes) => self.buf.extend_from_slice(bytes),
            TypedValue::Text(text) => self.buf.extend_from_slice(text.as_bytes()),
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Pack `values` in order into a single unpadded buffer
pub fn encode_packed(values: &[TypedValue]) -> Result<Vec<u8>> {
    let mut encoder = PackedEncoder::new();
    for value in values {
        encoder.push(value)?;
    }
    Ok(encoder.finish())
}

/// Encode `value` as a 3-byte big-endian two's-complement int24
///
/// Values outside `[-2^23, 2^23 - 1]` are rejected rather than truncated.
pub fn encode_int24(value: i64) -> Result<[u8; INT24_SIZE]> {
    if !(INT24_MIN..=INT24_MAX).contains(&value) {
        return Err(Error::ValueOutOfRange { bits: 24, value });
    }
    // 2^24 + value for negatives
    let unsigned = value.rem_euclid(1 << 24) as u32;
    let bytes = unsigned.to_be_bytes();
    Ok([bytes[1], bytes[2], bytes[3]])
}

/// Inverse of [`encode_int24`]
pub fn decode_int24(bytes: [u8; INT24_SIZE]) -> i32 {
    // shift into the top of an i32 and arithmetic-shift back to sign-extend
    i32::from_be_bytes([bytes[0], bytes[1], bytes[2], 0]) >> 8
}

/// Packed `owner || tickLower || tickUpper`
pub fn position_key_preimage(
    owner: Address,
    tick_lower: i32,
    tick_upper: i32,
) -> Result<[u8; POSITION_PREIMAGE_SIZE]> {
    let packed = encode_packed(&[
        TypedValue::Address(owner),
        TypedValue::int24(tick_lower),
        TypedValue::int24(tick_upper),
    ])?;
    let mut out = [0u8; POSITION_PREIMAGE_SIZE];
    out.copy_from_slice(&packed);
    Ok(out)
}
