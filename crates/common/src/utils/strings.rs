use alloy::primitives::U256;
use eyre::{bail, eyre, Result};
use std::fmt::Write;

/// Decodes a hex string into a vector of bytes
///
/// ```
/// use minievm_common::utils::strings::decode_hex;
///
/// let hex = "0x6002600301";
/// let result = decode_hex(hex).expect("should decode hex");
/// assert_eq!(result, vec![0x60, 0x02, 0x60, 0x03, 0x01]);
///
/// assert!(decode_hex("600").is_err());
/// ```
pub fn decode_hex(mut s: &str) -> Result<Vec<u8>> {
    // normalize
    s = s.trim();
    s = s.strip_prefix("0x").unwrap_or(s);

    if s.is_empty() {
        return Ok(vec![]);
    }

    if !s.is_ascii() {
        bail!("invalid hex string: {}", s);
    }
    if s.len() % 2 != 0 {
        bail!("invalid hex string: odd number of digits ({})", s.len());
    }

    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| eyre!("invalid hex string: {}", s))
}

/// Encodes a vector of bytes into a hex string
///
/// ```
/// use minievm_common::utils::strings::encode_hex;
///
/// let bytes = vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100];
/// let result = encode_hex(&bytes);
/// assert_eq!(result, "48656c6c6f20576f726c64");
/// ```
pub fn encode_hex(s: &[u8]) -> String {
    s.iter().fold(String::with_capacity(s.len() * 2), |mut acc, b| {
        write!(acc, "{b:02x}").expect("unable to write");
        acc
    })
}

/// Encodes a U256 into a hex string, removing leading zeros
///
/// ```
/// use minievm_common::utils::strings::encode_hex_reduced;
/// use alloy::primitives::U256;
///
/// assert_eq!(encode_hex_reduced(U256::from(0x0100)), "0x100");
/// assert_eq!(encode_hex_reduced(U256::ZERO), "0x0");
/// ```
pub fn encode_hex_reduced(s: U256) -> String {
    format!("{s:#x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex_prefixed_and_bare() {
        assert_eq!(decode_hex("0x00ff").expect("decode failed"), vec![0x00, 0xff]);
        assert_eq!(decode_hex("00FF").expect("decode failed"), vec![0x00, 0xff]);
        assert_eq!(decode_hex("  0x01\n").expect("decode failed"), vec![0x01]);
    }

    #[test]
    fn test_decode_hex_empty() {
        assert!(decode_hex("").expect("decode failed").is_empty());
        assert!(decode_hex("0x").expect("decode failed").is_empty());
    }

    #[test]
    fn test_decode_hex_rejects_garbage() {
        assert!(decode_hex("0xzz").is_err());
        assert!(decode_hex("abc").is_err());
        assert!(decode_hex("ééé").is_err());
    }

    #[test]
    fn test_encode_hex_round_trips() {
        let bytes = vec![0x60, 0x02, 0x19];
        assert_eq!(decode_hex(&encode_hex(&bytes)).expect("decode failed"), bytes);
    }

    #[test]
    fn test_encode_hex_reduced() {
        assert_eq!(
            encode_hex_reduced(U256::MAX),
            "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
        assert_eq!(encode_hex_reduced(U256::from(5)), "0x5");
    }
}
