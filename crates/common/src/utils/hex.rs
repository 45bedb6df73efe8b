use super::strings::encode_hex;
use alloy::primitives::U256;

/// A convenience function which encodes a given type into a sized, lowercase hex string.
pub trait ToLowerHex {
    /// Encodes `self` as `0x`-prefixed lowercase hex.
    fn to_lower_hex(&self) -> String;
}

impl ToLowerHex for U256 {
    /// Always 64 digits, one full word.
    fn to_lower_hex(&self) -> String {
        format!("{self:#066x}")
    }
}

impl ToLowerHex for [u8] {
    fn to_lower_hex(&self) -> String {
        format!("0x{}", encode_hex(self))
    }
}

impl ToLowerHex for Vec<u8> {
    fn to_lower_hex(&self) -> String {
        self.as_slice().to_lower_hex()
    }
}
