//! position-core: key derivation and reply decoding for concentrated-liquidity positions
//!
//! A position on a Uniswap V3 style pool is stored under a 32-byte key:
//!
//! ```text
//! key = keccak256(owner (20 bytes) || tickLower (int24, 3 bytes) || tickUpper (int24, 3 bytes))
//! ```
//!
//! The preimage uses Solidity's non-standard packed mode (no padding between
//! values). The pool's `positions(bytes32)` view returns a five-word tuple
//! that is decoded with the standard word-aligned ABI rules.
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Packed encoding | [`packed`] | 26-byte preimage |
//! | Key derivation | [`key`] | [`LookupKey`] |
//! | Call encoding | [`abi`] | selector + key calldata |
//! | Reply decoding | [`decode`] | [`StructuredRecord`] / [`Position`] |
//!
//! No I/O happens here; the transport lives in `position-fetcher`.

pub mod abi;
pub mod decode;
mod error;
pub mod key;
pub mod packed;

pub use abi::{MethodSpec, POSITIONS_ABI, POSITIONS_METHOD};
pub use decode::{decode, FieldSchema, FieldSpec, Position, StructuredRecord};
pub use error::Error;
pub use key::{derive_key, keccak256, position_key, LookupKey};
pub use packed::{
    decode_int24, encode_int24, encode_packed, position_key_preimage, PackedEncoder, TypedValue,
};

pub type Result<T> = std::result::Result<T, Error>;

/// Constants shared by the encoder and decoder
pub mod constants {
    /// ABI word size in bytes
    pub const WORD_SIZE: usize = 32;

    /// Address width in bytes
    pub const ADDRESS_SIZE: usize = 20;

    /// Packed int24 width in bytes
    pub const INT24_SIZE: usize = 3;

    /// Smallest value representable as int24
    pub const INT24_MIN: i64 = -(1 << 23);

    /// Largest value representable as int24
    pub const INT24_MAX: i64 = (1 << 23) - 1;

    /// Length of the packed position-key preimage
    pub const POSITION_PREIMAGE_SIZE: usize = ADDRESS_SIZE + 2 * INT24_SIZE;

    /// Method selector length in bytes
    pub const SELECTOR_SIZE: usize = 4;
}
