// Basic types for Sui call construction

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::serialize::{BcsWrite, CodecError};

/// 1 SUI = 1,000,000,000 MIST
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// Number of decimal places between SUI and MIST
pub const SUI_DECIMALS: usize = 9;

/// 32-byte object or package identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObjectId(pub [u8; 32]);

impl ObjectId {
    pub const LENGTH: usize = 32;

    /// Create a new ObjectId from a byte array
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create an ObjectId from a slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, String> {
        if slice.len() != Self::LENGTH {
            return Err(format!(
                "Invalid object id length: expected {}, got {}",
                Self::LENGTH,
                slice.len()
            ));
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// `0x` followed by 64 lowercase hex digits
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from hex, with or without `0x`.
    /// Short forms such as `0x2` are left-padded with zeros.
    pub fn from_hex(hex_str: &str) -> Result<Self, String> {
        let digits = hex_str
            .strip_prefix("0x")
            .or_else(|| hex_str.strip_prefix("0X"))
            .unwrap_or(hex_str);

        if digits.is_empty() {
            return Err("Invalid object id: no hex digits".to_string());
        }
        if digits.len() > Self::LENGTH * 2 {
            return Err(format!(
                "Invalid object id: {} hex digits, at most {} allowed",
                digits.len(),
                Self::LENGTH * 2
            ));
        }

        let padded = format!("{:0>64}", digits);
        let bytes = hex::decode(&padded).map_err(|e| format!("Invalid object id: {}", e))?;
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// Addresses are fixed width in BCS, no length prefix
impl BcsWrite for ObjectId {
    fn write_bcs<W: Write>(&self, writer: &mut W) -> Result<(), CodecError> {
        writer.write_all(&self.0)?;
        Ok(())
    }
}

/// Transaction digest (32 bytes, shown in Base58)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionDigest(pub [u8; 32]);

impl TransactionDigest {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    pub fn from_base58(s: &str) -> Result<Self, String> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| format!("Invalid digest: {}", e))?;
        if bytes.len() != 32 {
            return Err(format!("Invalid digest length: expected 32, got {}", bytes.len()));
        }
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&bytes);
        Ok(Self(digest))
    }
}

impl fmt::Display for TransactionDigest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl FromStr for TransactionDigest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

/// Convert a decimal SUI amount such as `"1.5"` to MIST.
/// Digits past the ninth decimal place are dropped (floor).
pub fn sui_to_mist(amount: &str) -> Result<u64, String> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err("Amount is empty".to_string());
    }
    if amount.starts_with('-') {
        return Err(format!("Amount must not be negative: {}", amount));
    }

    let (whole, fraction) = match amount.split_once('.') {
        Some((w, f)) => (w, f),
        None => (amount, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(format!("Invalid amount: {}", amount));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid amount: {}", amount));
    }

    let whole_mist = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u64>()
            .ok()
            .and_then(|w| w.checked_mul(MIST_PER_SUI))
            .ok_or_else(|| format!("Amount too large: {}", amount))?
    };

    let mut fraction_digits: String = fraction.chars().take(SUI_DECIMALS).collect();
    while fraction_digits.len() < SUI_DECIMALS {
        fraction_digits.push('0');
    }
    let fraction_mist: u64 = fraction_digits
        .parse()
        .map_err(|e| format!("Invalid amount: {}", e))?;

    whole_mist
        .checked_add(fraction_mist)
        .ok_or_else(|| format!("Amount too large: {}", amount))
}

/// Render MIST as SUI with four decimals, rounding half up
pub fn format_sui(mist: u64) -> String {
    let ten_thousandths = (mist as u128 + 50_000) / 100_000;
    format!("{}.{:04}", ten_thousandths / 10_000, ten_thousandths % 10_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_hex() {
        let id = ObjectId::from_hex(
            "0x1efdab5881e176130813d2fdf36fd5206d9f5c01e72a01118ff232d51a7dd50b",
        )
        .unwrap();
        assert_eq!(id.as_bytes()[0], 0x1e);
        assert_eq!(id.as_bytes()[31], 0x0b);
        assert_eq!(
            id.to_string(),
            "0x1efdab5881e176130813d2fdf36fd5206d9f5c01e72a01118ff232d51a7dd50b"
        );
    }

    #[test]
    fn test_object_id_short_form() {
        let id = ObjectId::from_hex("0x2").unwrap();
        let mut expected = [0u8; 32];
        expected[31] = 2;
        assert_eq!(id, ObjectId::new(expected));

        let without_prefix: ObjectId = "2".parse().unwrap();
        assert_eq!(id, without_prefix);
    }

    #[test]
    fn test_object_id_invalid() {
        assert!(ObjectId::from_hex("0x").is_err());
        assert!(ObjectId::from_hex("0xzz").is_err());
        assert!(ObjectId::from_hex(&format!("0x{}", "1".repeat(65))).is_err());
        assert!(ObjectId::from_slice(&[0u8; 20]).is_err());
    }

    #[test]
    fn test_object_id_json() {
        let id = ObjectId::from_hex("0xabc").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"0x{}abc\"", "0".repeat(61)));
        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_object_id_bcs_has_no_prefix() {
        let id = ObjectId::new([7u8; 32]);
        assert_eq!(id.bcs_bytes().unwrap(), vec![7u8; 32]);
    }

    #[test]
    fn test_digest_base58() {
        let digest = TransactionDigest::new([9u8; 32]);
        let text = digest.to_string();
        assert_eq!(TransactionDigest::from_base58(&text).unwrap(), digest);
        assert!(TransactionDigest::from_base58("0OIl").is_err());
        assert!(TransactionDigest::from_base58("3mJr7AoUXx2Wqd").is_err());
    }

    #[test]
    fn test_sui_to_mist() {
        assert_eq!(sui_to_mist("1").unwrap(), 1_000_000_000);
        assert_eq!(sui_to_mist("1.5").unwrap(), 1_500_000_000);
        assert_eq!(sui_to_mist("0.000000001").unwrap(), 1);
        assert_eq!(sui_to_mist(".25").unwrap(), 250_000_000);
        assert_eq!(sui_to_mist("2.").unwrap(), 2_000_000_000);
        assert_eq!(sui_to_mist(" 0.1 ").unwrap(), 100_000_000);
        // Extra precision is floored
        assert_eq!(sui_to_mist("0.0000000019").unwrap(), 1);
        assert_eq!(sui_to_mist("0").unwrap(), 0);
    }

    #[test]
    fn test_sui_to_mist_invalid() {
        assert!(sui_to_mist("").is_err());
        assert!(sui_to_mist(".").is_err());
        assert!(sui_to_mist("-1").is_err());
        assert!(sui_to_mist("abc").is_err());
        assert!(sui_to_mist("1.2.3").is_err());
        assert!(sui_to_mist("1e9").is_err());
        assert!(sui_to_mist("18446744074").is_err());
    }

    #[test]
    fn test_format_sui() {
        assert_eq!(format_sui(0), "0.0000");
        assert_eq!(format_sui(1_500_000_000), "1.5000");
        assert_eq!(format_sui(123_456_789), "0.1235");
        assert_eq!(format_sui(49_999), "0.0000");
        assert_eq!(format_sui(50_000), "0.0001");
    }
}
