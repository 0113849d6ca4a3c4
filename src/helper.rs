//! Helper utilities for socks5-wire
//!
//! Conversions between hex text and raw message bytes for the CLI.

use crate::error::Error;

/// Parse hex text into bytes
///
/// Accepts an optional `0x` prefix and ignores whitespace, `:` and `-`
/// separators, so `05 01 00`, `05:01:00` and `0x050100` are equivalent.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, Error> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();

    hex::decode(&digits).map_err(|e| Error::Hex(e.to_string()))
}

/// Format bytes as space-separated uppercase hex
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| hex::encode_upper([*byte]))
        .collect::<Vec<_>>()
        .join(" ")
}
