//! Conversions between native Rust values and [`xdr::ScVal`].
//!
//! Mirrors the `Scv` helper namespace of the JS/TS Soroban SDKs: one `to_*`
//! and (where it round-trips) one `from_*` per `ScVal` variant used by
//! contract invocations.
use num_bigint::{BigInt, BigUint, Sign};

use std::str::FromStr;

use crate::address::{Address, AddressTrait};
use crate::xdr::{
    Int128Parts, Int256Parts, ScBytes, ScError, ScMap, ScMapEntry, ScString, ScSymbol, ScVal,
    StringM, UInt128Parts, UInt256Parts, VecM,
};

/// Errors raised converting a native value into (or out of) an `ScVal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScValError {
    WrongType { expected: &'static str, found: String },
    SymbolTooLong(usize),
    InvalidSymbolChar(char),
    StringTooLarge(usize),
    Address(String),
}

impl std::fmt::Display for ScValError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScValError::WrongType { expected, found } => {
                write!(f, "expected ScVal::{expected}, found {found}")
            }
            ScValError::SymbolTooLong(len) => {
                write!(f, "symbol must be at most 32 characters, got {len}")
            }
            ScValError::InvalidSymbolChar(c) => {
                write!(f, "symbol may only contain [A-Za-z0-9_], found '{c}'")
            }
            ScValError::StringTooLarge(len) => write!(f, "string too large: {len} bytes"),
            ScValError::Address(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ScValError {}

fn variant_name(val: &ScVal) -> String {
    format!("{val:?}")
        .split(['(', ' '])
        .next()
        .unwrap_or("Unknown")
        .to_string()
}

/// Namespace for native <-> `ScVal` conversions, named after the upstream
/// SDKs' `Scv` helper object.
pub struct Scv;

impl Scv {
    pub fn to_bool(value: bool) -> ScVal {
        ScVal::Bool(value)
    }

    pub fn from_bool(val: &ScVal) -> Result<bool, ScValError> {
        match val {
            ScVal::Bool(b) => Ok(*b),
            other => Err(ScValError::WrongType {
                expected: "Bool",
                found: variant_name(other),
            }),
        }
    }

    pub fn to_void() -> ScVal {
        ScVal::Void
    }

    pub fn to_u32(value: u32) -> ScVal {
        ScVal::U32(value)
    }

    pub fn from_u32(val: &ScVal) -> Result<u32, ScValError> {
        match val {
            ScVal::U32(v) => Ok(*v),
            other => Err(ScValError::WrongType {
                expected: "U32",
                found: variant_name(other),
            }),
        }
    }

    pub fn to_i32(value: i32) -> ScVal {
        ScVal::I32(value)
    }

    pub fn from_i32(val: &ScVal) -> Result<i32, ScValError> {
        match val {
            ScVal::I32(v) => Ok(*v),
            other => Err(ScValError::WrongType {
                expected: "I32",
                found: variant_name(other),
            }),
        }
    }

    pub fn to_u64(value: u64) -> ScVal {
        ScVal::U64(value)
    }

    pub fn from_u64(val: &ScVal) -> Result<u64, ScValError> {
        match val {
            ScVal::U64(v) => Ok(*v),
            other => Err(ScValError::WrongType {
                expected: "U64",
                found: variant_name(other),
            }),
        }
    }

    pub fn to_i64(value: i64) -> ScVal {
        ScVal::I64(value)
    }

    pub fn from_i64(val: &ScVal) -> Result<i64, ScValError> {
        match val {
            ScVal::I64(v) => Ok(*v),
            other => Err(ScValError::WrongType {
                expected: "I64",
                found: variant_name(other),
            }),
        }
    }

    /// Packs a `u128` into the `{hi, lo}` big-endian limbs `ScVal::U128` uses.
    pub fn to_u128(value: u128) -> ScVal {
        ScVal::U128(UInt128Parts {
            hi: (value >> 64) as u64,
            lo: value as u64,
        })
    }

    pub fn from_u128(val: &ScVal) -> Result<u128, ScValError> {
        match val {
            ScVal::U128(UInt128Parts { hi, lo }) => {
                Ok(((*hi as u128) << 64) | (*lo as u128))
            }
            other => Err(ScValError::WrongType {
                expected: "U128",
                found: variant_name(other),
            }),
        }
    }

    /// Packs an `i128` into the two's-complement `{hi, lo}` limbs
    /// `ScVal::I128` uses: `hi` carries the sign in its top bit.
    pub fn to_i128(value: i128) -> ScVal {
        let unsigned = value as u128;
        ScVal::I128(Int128Parts {
            hi: (unsigned >> 64) as i64,
            lo: unsigned as u64,
        })
    }

    pub fn from_i128(val: &ScVal) -> Result<i128, ScValError> {
        match val {
            ScVal::I128(Int128Parts { hi, lo }) => {
                Ok(((*hi as i128) << 64) | (*lo as u128) as i128)
            }
            other => Err(ScValError::WrongType {
                expected: "I128",
                found: variant_name(other),
            }),
        }
    }

    /// Packs an arbitrary-magnitude unsigned [`BigUint`] into the 4
    /// big-endian `u64` limbs of `ScVal::U256`. Values wider than 256 bits
    /// are truncated to their low 256 bits.
    pub fn to_u256(value: &BigUint) -> ScVal {
        let (hi_hi, hi_lo, lo_hi, lo_lo) = biguint_to_u256_limbs(value);
        ScVal::U256(UInt256Parts {
            hi_hi,
            hi_lo,
            lo_hi,
            lo_lo,
        })
    }

    pub fn from_u256(val: &ScVal) -> Result<BigUint, ScValError> {
        match val {
            ScVal::U256(UInt256Parts {
                hi_hi,
                hi_lo,
                lo_hi,
                lo_lo,
            }) => Ok(u256_limbs_to_biguint(*hi_hi, *hi_lo, *lo_hi, *lo_lo)),
            other => Err(ScValError::WrongType {
                expected: "U256",
                found: variant_name(other),
            }),
        }
    }

    /// Packs an arbitrary-magnitude signed [`BigInt`] into the two's-complement
    /// 4-limb layout of `ScVal::I256`.
    pub fn to_i256(value: &BigInt) -> ScVal {
        let magnitude_limbs = {
            let (sign, magnitude) = value.to_bytes_be();
            let mut padded = vec![0u8; 32];
            let start = 32usize.saturating_sub(magnitude.len());
            // Values wider than 256 bits are truncated to their low 256 bits.
            let take = magnitude.len().min(32);
            padded[start..].copy_from_slice(&magnitude[magnitude.len() - take..]);
            (sign, padded)
        };

        let (sign, bytes) = magnitude_limbs;
        let as_unsigned = BigUint::from_bytes_be(&bytes);
        let wrapped = if sign == Sign::Minus && !as_unsigned.clone().eq(&BigUint::from(0u8)) {
            let modulus = BigUint::from(1u8) << 256;
            modulus - as_unsigned
        } else {
            as_unsigned
        };

        let (hi_hi, hi_lo, lo_hi, lo_lo) = biguint_to_u256_limbs(&wrapped);
        ScVal::I256(Int256Parts {
            hi_hi: hi_hi as i64,
            hi_lo,
            lo_hi,
            lo_lo,
        })
    }

    pub fn from_i256(val: &ScVal) -> Result<BigInt, ScValError> {
        match val {
            ScVal::I256(Int256Parts {
                hi_hi,
                hi_lo,
                lo_hi,
                lo_lo,
            }) => {
                let unsigned = u256_limbs_to_biguint(*hi_hi as u64, *hi_lo, *lo_hi, *lo_lo);
                let negative = *hi_hi < 0;
                if negative {
                    let modulus = BigUint::from(1u8) << 256;
                    let magnitude = modulus - unsigned;
                    Ok(-BigInt::from(magnitude))
                } else {
                    Ok(BigInt::from(unsigned))
                }
            }
            other => Err(ScValError::WrongType {
                expected: "I256",
                found: variant_name(other),
            }),
        }
    }

    /// Builds an `ScVal::Symbol`. Symbols are restricted to 32 characters
    /// drawn from `[A-Za-z0-9_]`, matching the Soroban host's symbol limits.
    pub fn to_symbol(value: &str) -> Result<ScVal, ScValError> {
        if value.len() > 32 {
            return Err(ScValError::SymbolTooLong(value.len()));
        }
        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(ScValError::InvalidSymbolChar(c));
        }
        let string_m = StringM::from_str(value).map_err(|_| ScValError::SymbolTooLong(value.len()))?;
        Ok(ScVal::Symbol(ScSymbol::from(string_m)))
    }

    pub fn from_symbol(val: &ScVal) -> Result<String, ScValError> {
        match val {
            ScVal::Symbol(symbol) => Ok(String::from_utf8_lossy(&symbol.to_vec()).into_owned()),
            other => Err(ScValError::WrongType {
                expected: "Symbol",
                found: variant_name(other),
            }),
        }
    }

    /// Builds an `ScVal::String`, Soroban's length-prefixed byte string.
    pub fn to_string_val(value: &str) -> Result<ScVal, ScValError> {
        let string_m =
            StringM::from_str(value).map_err(|_| ScValError::StringTooLarge(value.len()))?;
        Ok(ScVal::String(ScString::from(string_m)))
    }

    pub fn from_string_val(val: &ScVal) -> Result<String, ScValError> {
        match val {
            ScVal::String(s) => Ok(String::from_utf8_lossy(&s.to_vec()).into_owned()),
            other => Err(ScValError::WrongType {
                expected: "String",
                found: variant_name(other),
            }),
        }
    }

    pub fn to_bytes(value: Vec<u8>) -> Result<ScVal, ScValError> {
        let len = value.len();
        let bytes_m = value
            .try_into()
            .map_err(|_| ScValError::StringTooLarge(len))?;
        Ok(ScVal::Bytes(ScBytes(bytes_m)))
    }

    pub fn from_bytes(val: &ScVal) -> Result<Vec<u8>, ScValError> {
        match val {
            ScVal::Bytes(b) => Ok(b.to_vec()),
            other => Err(ScValError::WrongType {
                expected: "Bytes",
                found: variant_name(other),
            }),
        }
    }

    pub fn to_address(address: &Address) -> Result<ScVal, ScValError> {
        address.to_sc_val().map_err(ScValError::Address)
    }

    pub fn from_address(val: &ScVal) -> Result<Address, ScValError> {
        Address::from_sc_val(val).map_err(ScValError::Address)
    }

    pub fn to_vec(values: Vec<ScVal>) -> ScVal {
        let vec_m: VecM<ScVal> = values.try_into().unwrap_or_default();
        ScVal::Vec(Some(vec_m.into()))
    }

    pub fn from_vec(val: &ScVal) -> Result<Vec<ScVal>, ScValError> {
        match val {
            ScVal::Vec(Some(v)) => Ok(v.to_vec()),
            ScVal::Vec(None) => Ok(Vec::new()),
            other => Err(ScValError::WrongType {
                expected: "Vec",
                found: variant_name(other),
            }),
        }
    }

    /// Builds an `ScVal::Map` from (key, value) pairs, sorted by key as the
    /// Soroban host requires canonical `ScMap` encodings to be.
    pub fn to_map(mut entries: Vec<(ScVal, ScVal)>) -> ScVal {
        entries.sort_by(|(a, _), (b, _)| sc_val_cmp(a, b));
        let entries: Vec<ScMapEntry> = entries
            .into_iter()
            .map(|(key, val)| ScMapEntry { key, val })
            .collect();
        let map: ScMap = entries.try_into().unwrap_or_default();
        ScVal::Map(Some(map))
    }

    pub fn from_map(val: &ScVal) -> Result<Vec<(ScVal, ScVal)>, ScValError> {
        match val {
            ScVal::Map(Some(m)) => Ok(m.iter().map(|e| (e.key.clone(), e.val.clone())).collect()),
            ScVal::Map(None) => Ok(Vec::new()),
            other => Err(ScValError::WrongType {
                expected: "Map",
                found: variant_name(other),
            }),
        }
    }

    pub fn to_error(error: ScError) -> ScVal {
        ScVal::Error(error)
    }
}

fn biguint_to_u256_limbs(value: &BigUint) -> (u64, u64, u64, u64) {
    let mut bytes = value.to_bytes_be();
    if bytes.len() > 32 {
        let skip = bytes.len() - 32;
        bytes = bytes[skip..].to_vec();
    }
    let mut padded = vec![0u8; 32 - bytes.len()];
    padded.extend_from_slice(&bytes);

    let hi_hi = u64::from_be_bytes(padded[0..8].try_into().unwrap());
    let hi_lo = u64::from_be_bytes(padded[8..16].try_into().unwrap());
    let lo_hi = u64::from_be_bytes(padded[16..24].try_into().unwrap());
    let lo_lo = u64::from_be_bytes(padded[24..32].try_into().unwrap());
    (hi_hi, hi_lo, lo_hi, lo_lo)
}

fn u256_limbs_to_biguint(hi_hi: u64, hi_lo: u64, lo_hi: u64, lo_lo: u64) -> BigUint {
    let mut bytes = Vec::with_capacity(32);
    bytes.extend_from_slice(&hi_hi.to_be_bytes());
    bytes.extend_from_slice(&hi_lo.to_be_bytes());
    bytes.extend_from_slice(&lo_hi.to_be_bytes());
    bytes.extend_from_slice(&lo_lo.to_be_bytes());
    BigUint::from_bytes_be(&bytes)
}

/// Orders `ScVal`s for canonical `ScMap` construction. Falls back to comparing
/// the XDR-encoded bytes, which is stable and total for any pair of values
/// the host would accept as a map key.
fn sc_val_cmp(a: &ScVal, b: &ScVal) -> std::cmp::Ordering {
    use crate::xdr::{Limits, WriteXdr};
    let a_bytes = a.to_xdr(Limits::none()).unwrap_or_default();
    let b_bytes = b.to_xdr(Limits::none()).unwrap_or_default();
    a_bytes.cmp(&b_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_round_trips() {
        assert_eq!(Scv::from_bool(&Scv::to_bool(true)), Ok(true));
        assert_eq!(Scv::from_bool(&Scv::to_bool(false)), Ok(false));
    }

    #[test]
    fn u32_round_trips() {
        assert_eq!(Scv::from_u32(&Scv::to_u32(42)), Ok(42));
    }

    #[test]
    fn i128_min_packs_to_all_sign_bit() {
        let val = Scv::to_i128(i128::MIN);
        match val {
            ScVal::I128(Int128Parts { hi, lo }) => {
                assert_eq!(hi, i64::MIN);
                assert_eq!(lo, 0);
            }
            _ => panic!("expected I128"),
        }
        assert_eq!(Scv::from_i128(&val), Ok(i128::MIN));
    }

    #[test]
    fn i128_max_packs_correctly() {
        let val = Scv::to_i128(i128::MAX);
        match val {
            ScVal::I128(Int128Parts { hi, lo }) => {
                assert_eq!(hi, i64::MAX);
                assert_eq!(lo, u64::MAX);
            }
            _ => panic!("expected I128"),
        }
        assert_eq!(Scv::from_i128(&val), Ok(i128::MAX));
    }

    #[test]
    fn i128_negative_one_round_trips() {
        let val = Scv::to_i128(-1);
        match val {
            ScVal::I128(Int128Parts { hi, lo }) => {
                assert_eq!(hi, -1);
                assert_eq!(lo, u64::MAX);
            }
            _ => panic!("expected I128"),
        }
        assert_eq!(Scv::from_i128(&val), Ok(-1));
    }

    #[test]
    fn u128_round_trips() {
        let val = Scv::to_u128(u128::MAX);
        assert_eq!(Scv::from_u128(&val), Ok(u128::MAX));
    }

    #[test]
    fn i256_min_two_to_the_255_round_trips() {
        let min = -(BigInt::from(1u8) << 255);
        let val = Scv::to_i256(&min);
        match &val {
            ScVal::I256(Int256Parts { hi_hi, hi_lo, lo_hi, lo_lo }) => {
                assert_eq!(*hi_hi, i64::MIN);
                assert_eq!(*hi_lo, 0);
                assert_eq!(*lo_hi, 0);
                assert_eq!(*lo_lo, 0);
            }
            _ => panic!("expected I256"),
        }
        assert_eq!(Scv::from_i256(&val), Ok(min));
    }

    #[test]
    fn i256_max_round_trips() {
        let max = (BigInt::from(1u8) << 255) - BigInt::from(1u8);
        let val = Scv::to_i256(&max);
        assert_eq!(Scv::from_i256(&val), Ok(max));
    }

    #[test]
    fn i256_negative_one_round_trips() {
        let val = Scv::to_i256(&BigInt::from(-1));
        match &val {
            ScVal::I256(Int256Parts { hi_hi, hi_lo, lo_hi, lo_lo }) => {
                assert_eq!(*hi_hi, -1);
                assert_eq!(*hi_lo, u64::MAX);
                assert_eq!(*lo_hi, u64::MAX);
                assert_eq!(*lo_lo, u64::MAX);
            }
            _ => panic!("expected I256"),
        }
        assert_eq!(Scv::from_i256(&val), Ok(BigInt::from(-1)));
    }

    #[test]
    fn u256_round_trips() {
        let value = (BigUint::from(1u8) << 200) + BigUint::from(7u8);
        let val = Scv::to_u256(&value);
        assert_eq!(Scv::from_u256(&val), Ok(value));
    }

    #[test]
    fn symbol_round_trips() {
        let val = Scv::to_symbol("transfer").unwrap();
        assert_eq!(Scv::from_symbol(&val), Ok("transfer".to_string()));
    }

    #[test]
    fn symbol_rejects_non_alphanumeric() {
        assert!(Scv::to_symbol("hello world").is_err());
    }

    #[test]
    fn symbol_rejects_too_long() {
        let long = "a".repeat(33);
        assert!(Scv::to_symbol(&long).is_err());
    }

    #[test]
    fn string_round_trips() {
        let val = Scv::to_string_val("hello soroban").unwrap();
        assert_eq!(Scv::from_string_val(&val), Ok("hello soroban".to_string()));
    }

    #[test]
    fn bytes_round_trips() {
        let val = Scv::to_bytes(vec![1, 2, 3]).unwrap();
        assert_eq!(Scv::from_bytes(&val), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn address_round_trips() {
        let address =
            Address::new("GBZXN7PIRZGNMHGA7MUUUF4GWPY5AYPV6LY4UV2GL6VJGIQRXFDNMADI").unwrap();
        let val = Scv::to_address(&address).unwrap();
        assert_eq!(Scv::from_address(&val), Ok(address));
    }

    #[test]
    fn vec_round_trips() {
        let vals = vec![Scv::to_u32(1), Scv::to_u32(2), Scv::to_u32(3)];
        let val = Scv::to_vec(vals.clone());
        assert_eq!(Scv::from_vec(&val), Ok(vals));
    }

    #[test]
    fn map_is_sorted_by_key() {
        let entries = vec![
            (Scv::to_symbol("b").unwrap(), Scv::to_u32(2)),
            (Scv::to_symbol("a").unwrap(), Scv::to_u32(1)),
        ];
        let val = Scv::to_map(entries);
        let round_tripped = Scv::from_map(&val).unwrap();
        assert_eq!(Scv::from_symbol(&round_tripped[0].0), Ok("a".to_string()));
        assert_eq!(Scv::from_symbol(&round_tripped[1].0), Ok("b".to_string()));
    }
}
