// Primitives - 256-bit hashes and monetary units
use serde::{Serialize, Serializer};
use std::fmt;

/// 256-bit value stored little-endian, displayed big-endian (uint256 convention)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse a display-order hex string.
    ///
    /// Accepts an optional `0x` prefix and fewer than 64 digits (left-padded
    /// with zeros), so `"0x001"` is the value one.
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        let mut digits = input.trim();
        if let Some(stripped) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            digits = stripped;
        }

        if digits.is_empty() || digits.len() > 64 {
            return Err(HexError::InvalidLength(digits.len()));
        }

        let padded = format!("{:0>64}", digits);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes).map_err(|_| HexError::InvalidDigit)?;
        bytes.reverse();

        Ok(Hash256(bytes))
    }

    /// All-ones value shifted right by `bits` (the `~uint256(0) >> n` limit form)
    pub fn max_shr(bits: u32) -> Self {
        let mut bytes = [0xffu8; 32];
        let mut remaining = bits.min(256);
        let mut idx = 31;
        while remaining >= 8 {
            bytes[idx] = 0;
            remaining -= 8;
            if idx == 0 {
                return Hash256(bytes);
            }
            idx -= 1;
        }
        bytes[idx] = 0xff >> remaining;
        Hash256(bytes)
    }

    /// Display-order hex (most significant byte first)
    pub fn to_hex(&self) -> String {
        let mut be = self.0;
        be.reverse();
        hex::encode(be)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// serde helper: byte strings as lowercase hex
pub fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("invalid hex length: {0} digits")]
    InvalidLength(usize),

    #[error("invalid hex digit")]
    InvalidDigit,
}

/// Amount in satoshi-style base units
pub type Amount = i64;

/// Monetary constants
pub const COIN: Amount = 100_000_000;
pub const CENT: Amount = 1_000_000;

/// Block height (signed, sentinel values such as `!1` are meaningful)
pub type Height = i32;

/// Unix timestamp in seconds
pub type Timestamp = i64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip_display_order() {
        let text = "00000da439930581626fa1a39e048ccdfd27fd278a8998dac86cc668ff0874ce";
        let hash = Hash256::from_hex(text).unwrap();
        assert_eq!(hash.to_hex(), text);
        assert_eq!(hash.as_bytes()[0], 0xce);
        assert_eq!(hash.as_bytes()[31], 0x00);
    }

    #[test]
    fn test_short_hex_is_left_padded() {
        let one = Hash256::from_hex("0x001").unwrap();
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(one, Hash256::from_bytes(expected));
    }

    #[test]
    fn test_bad_hex_rejected() {
        assert_eq!(Hash256::from_hex(""), Err(HexError::InvalidLength(0)));
        assert_eq!(Hash256::from_hex("0xzz"), Err(HexError::InvalidDigit));
        assert!(Hash256::from_hex(&"f".repeat(65)).is_err());
    }

    #[test]
    fn test_max_shr() {
        let limit = Hash256::max_shr(20);
        assert_eq!(
            limit.to_hex(),
            "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
        let regtest = Hash256::max_shr(1);
        assert_eq!(&regtest.to_hex()[..2], "7f");
        assert_eq!(Hash256::max_shr(0), Hash256::from_bytes([0xff; 32]));
        assert_eq!(Hash256::max_shr(256), Hash256::ZERO);
    }

    #[test]
    fn test_units() {
        assert_eq!(100 * CENT, COIN);
    }
}
