//! Standard ABI tuple decoding for fixed-width integer replies

use alloy_primitives::U256;
use serde::Serialize;

use crate::constants::WORD_SIZE;
use crate::{Error, Result};

/// One output field: name and integer width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub bits: u16,
    pub signed: bool,
}

impl FieldSpec {
    pub fn uint(name: &str, bits: u16) -> Self {
        Self {
            name: name.to_string(),
            bits,
            signed: false,
        }
    }

    /// Parse an elementary ABI type: `uintN` / `intN` with N in 8..=256, step 8
    pub fn from_abi_type(name: &str, abi_type: &str) -> Result<Self> {
        let (signed, width) = if let Some(rest) = abi_type.strip_prefix("uint") {
            (false, rest)
        } else if let Some(rest) = abi_type.strip_prefix("int") {
            (true, rest)
        } else {
            return Err(Error::UnsupportedType(abi_type.to_string()));
        };
        let bits = if width.is_empty() {
            256
        } else {
            width
                .parse::<u16>()
                .map_err(|_| Error::UnsupportedType(abi_type.to_string()))?
        };
        if bits == 0 || bits > 256 || bits % 8 != 0 {
            return Err(Error::UnsupportedType(abi_type.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            bits,
            signed,
        })
    }
}

/// Ordered output fields of a method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema(Vec<FieldSpec>);

impl FieldSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self(fields)
    }

    /// Output of `positions(bytes32)`
    pub fn positions() -> Self {
        Self(vec![
            FieldSpec::uint("liquidity", 128),
            FieldSpec::uint("feeGrowthInside0LastX128", 256),
            FieldSpec::uint("feeGrowthInside1LastX128", 256),
            FieldSpec::uint("tokensOwed0", 128),
            FieldSpec::uint("tokensOwed1", 128),
        ])
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Minimum reply length: one word per static field
    pub fn encoded_len(&self) -> usize {
        self.0.len() * WORD_SIZE
    }
}

/// Decoded reply, one entry per schema field in schema order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredRecord {
    entries: Vec<(String, U256)>,
}

impl StructuredRecord {
    pub fn get(&self, name: &str) -> Option<U256> {
        self.entries
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &U256)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

fn low_bits_mask(bits: u16) -> U256 {
    if bits >= 256 {
        U256::MAX
    } else {
        (U256::from(1u8) << bits as usize) - U256::from(1u8)
    }
}

fn decode_word(field: &FieldSpec, word: U256) -> Result<U256> {
    if field.bits >= 256 {
        return Ok(word);
    }
    let mask = low_bits_mask(field.bits);
    if !field.signed {
        if word > mask {
            return Err(Error::MalformedResponse(format!(
                "{} exceeds uint{}",
                field.name, field.bits
            )));
        }
        return Ok(word);
    }
    // everything above the sign bit must be a copy of it
    let high = word >> (field.bits as usize - 1);
    let all_ones = U256::MAX >> (field.bits as usize - 1);
    if high != U256::ZERO && high != all_ones {
        return Err(Error::MalformedResponse(format!(
            "{} is not a sign-extended int{}",
            field.name, field.bits
        )));
    }
    Ok(word & mask)
}

/// Decode `raw` against `schema`, one 32-byte word per field
///
/// Bytes past the last field are ignored.
pub fn decode(schema: &FieldSchema, raw: &[u8]) -> Result<StructuredRecord> {
    if raw.len() < schema.encoded_len() {
        return Err(Error::MalformedResponse(format!(
            "expected at least {} bytes, got {}",
            schema.encoded_len(),
            raw.len()
        )));
    }

    let entries = schema
        .fields()
        .iter()
        .zip(raw.chunks_exact(WORD_SIZE))
        .map(|(field, word)| {
            let value = decode_word(field, U256::from_be_slice(word))?;
            Ok((field.name.clone(), value))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StructuredRecord { entries })
}

/// Typed view of a `positions` reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub liquidity: u128,
    pub fee_growth_inside0_last_x128: U256,
    pub fee_growth_inside1_last_x128: U256,
    pub tokens_owed0: u128,
    pub tokens_owed1: u128,
}

impl TryFrom<&StructuredRecord> for Position {
    type Error = Error;

    fn try_from(record: &StructuredRecord) -> Result<Self> {
        let field = |name: &str| {
            record
                .get(name)
                .ok_or_else(|| Error::MalformedResponse(format!("missing field {name}")))
        };
        let narrow = |name: &str| -> Result<u128> {
            u128::try_from(field(name)?)
                .map_err(|_| Error::MalformedResponse(format!("{name} exceeds uint128")))
        };

        Ok(Self {
            liquidity: narrow("liquidity")?,
            fee_growth_inside0_last_x128: field("feeGrowthInside0LastX128")?,
            fee_growth_inside1_last_x128: field("feeGrowthInside1LastX128")?,
            tokens_owed0: narrow("tokensOwed0")?,
            tokens_owed1: narrow("tokensOwed1")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(value: U256) -> [u8; 32] {
        value.to_be_bytes::<32>()
    }

    fn reply(values: &[U256]) -> Vec<u8> {
        values.iter().flat_map(|v| word(*v)).collect()
    }

    #[test]
    fn test_all_zero_reply() {
        let schema = FieldSchema::positions();
        let record = decode(&schema, &[0u8; 160]).unwrap();
        assert_eq!(record.len(), 5);
        assert!(record.iter().all(|(_, v)| v.is_zero()));

        let position = Position::try_from(&record).unwrap();
        assert_eq!(position.liquidity, 0);
        assert_eq!(position.tokens_owed1, 0);
    }

    #[test]
    fn test_fields_in_schema_order() {
        let raw = reply(&[
            U256::from(1u64),
            U256::from(2u64),
            U256::MAX,
            U256::from(4u64),
            U256::from(u128::MAX),
        ]);
        let record = decode(&FieldSchema::positions(), &raw).unwrap();
        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            [
                "liquidity",
                "feeGrowthInside0LastX128",
                "feeGrowthInside1LastX128",
                "tokensOwed0",
                "tokensOwed1"
            ]
        );

        let position = Position::try_from(&record).unwrap();
        assert_eq!(position.liquidity, 1);
        assert_eq!(position.fee_growth_inside0_last_x128, U256::from(2u64));
        assert_eq!(position.fee_growth_inside1_last_x128, U256::MAX);
        assert_eq!(position.tokens_owed0, 4);
        assert_eq!(position.tokens_owed1, u128::MAX);
    }

    #[test]
    fn test_short_reply_rejected() {
        let err = decode(&FieldSchema::positions(), &[0u8; 159]).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
        assert!(decode(&FieldSchema::positions(), &[]).is_err());
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let record = decode(&FieldSchema::positions(), &[0u8; 192]).unwrap();
        assert_eq!(record.len(), 5);
    }

    #[test]
    fn test_uint128_overflow_rejected() {
        let mut raw = vec![0u8; 160];
        // bit 128 of the liquidity word
        raw[15] = 0x01;
        let err = decode(&FieldSchema::positions(), &raw).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(m) if m.contains("liquidity")));
    }

    #[test]
    fn test_signed_field_sign_extension() {
        let schema = FieldSchema::new(vec![FieldSpec::from_abi_type("tick", "int24").unwrap()]);

        let record = decode(&schema, &[0xff; 32]).unwrap();
        assert_eq!(record.get("tick"), Some(U256::from(0xff_ffffu32)));

        let mut bad = [0xff; 32];
        bad[0] = 0x7f;
        assert!(decode(&schema, &bad).is_err());
    }

    #[test]
    fn test_abi_type_parsing() {
        let f = FieldSpec::from_abi_type("x", "uint").unwrap();
        assert_eq!((f.bits, f.signed), (256, false));
        let f = FieldSpec::from_abi_type("x", "int24").unwrap();
        assert_eq!((f.bits, f.signed), (24, true));
        assert!(FieldSpec::from_abi_type("x", "uint7").is_err());
        assert!(FieldSpec::from_abi_type("x", "uint264").is_err());
        assert!(FieldSpec::from_abi_type("x", "bytes32").is_err());
    }
}
