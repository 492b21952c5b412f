//! Reference vectors for the position key pipeline
//!
//! The owner and ticks are a real minter on the Arbitrum WETH/USDC pool; the
//! expected bytes were computed independently with keccak256(encodePacked(...)).

use alloy_primitives::{address, b256, Address};
use position_key::codec::{
    decode, encode_int24, encode_packed, position_key, position_key_preimage, Error, FieldSchema,
    MethodSpec, Position, TypedValue,
};

const OWNER: Address = address!("F829c130478599E4EF49F6e02EDaA1F8736E9B00");
const TICK_LOWER: i32 = -197740;
const TICK_UPPER: i32 = -197640;

#[test]
fn test_reference_preimage() {
    let preimage = position_key_preimage(OWNER, TICK_LOWER, TICK_UPPER).unwrap();
    assert_eq!(
        hex::encode(preimage),
        "f829c130478599e4ef49f6e02edaa1f8736e9b00fcfb94fcfbf8"
    );
}

#[test]
fn test_reference_key() {
    let key = position_key(OWNER, TICK_LOWER, TICK_UPPER).unwrap();
    assert_eq!(
        key,
        b256!("22a6a622ef4c249ccb09e63fde1c10b604ed4a551e1567271e60224de111e3ca")
    );
}

#[test]
fn test_reference_ticks() {
    assert_eq!(encode_int24(TICK_LOWER.into()).unwrap(), [0xfc, 0xfb, 0x94]);
    assert_eq!(encode_int24(TICK_UPPER.into()).unwrap(), [0xfc, 0xfb, 0xf8]);
}

#[test]
fn test_generic_values_match_preimage() {
    let packed = encode_packed(&[
        TypedValue::from(OWNER),
        TypedValue::int24(TICK_LOWER),
        TypedValue::int24(TICK_UPPER),
    ])
    .unwrap();
    assert_eq!(packed.len(), 20 + 3 + 3);
    assert_eq!(
        packed,
        position_key_preimage(OWNER, TICK_LOWER, TICK_UPPER).unwrap()
    );
}

#[test]
fn test_out_of_range_tick_is_rejected() {
    let err = position_key(OWNER, 1 << 23, TICK_UPPER).unwrap_err();
    assert!(matches!(err, Error::ValueOutOfRange { bits: 24, .. }));
}

#[test]
fn test_calldata_for_reference_key() {
    let key = position_key(OWNER, TICK_LOWER, TICK_UPPER).unwrap();
    let calldata = MethodSpec::positions().unwrap().encode_call(&key).unwrap();
    assert_eq!(
        hex::encode(&calldata),
        "514ea4bf22a6a622ef4c249ccb09e63fde1c10b604ed4a551e1567271e60224de111e3ca"
    );
}

#[test]
fn test_zero_position_decodes() {
    let record = decode(&FieldSchema::positions(), &[0u8; 160]).unwrap();
    let position = Position::try_from(&record).unwrap();
    assert_eq!(position.liquidity, 0);
    assert!(position.fee_growth_inside0_last_x128.is_zero());
    assert!(position.fee_growth_inside1_last_x128.is_zero());
    assert_eq!(position.tokens_owed0, 0);
    assert_eq!(position.tokens_owed1, 0);
}

#[test]
fn test_truncated_reply_is_malformed() {
    for len in [0, 32, 128, 159] {
        let err = decode(&FieldSchema::positions(), &vec![0u8; len]).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)), "len {len}");
    }
}
