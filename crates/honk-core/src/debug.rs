//! Debug utilities for diagnostics
//!
//! Field-level tracing is enabled with `--features debug`

use crate::types::{Commitment, Fr};

/// Format a 32-byte value as a 0x-prefixed hex string
pub fn fr_to_hex(fr: &Fr) -> String {
    let mut s = String::with_capacity(66);
    s.push_str("0x");
    for byte in fr.iter() {
        s.push_str(&format!("{:02x}", byte));
    }
    s
}

/// Format a commitment as a pair of hex coordinates
pub fn commitment_to_hex(c: &Commitment) -> (String, String) {
    let mut x = [0u8; 32];
    let mut y = [0u8; 32];
    x.copy_from_slice(&c[..32]);
    y.copy_from_slice(&c[32..]);
    (fr_to_hex(&x), fr_to_hex(&y))
}

/// Shorten a hex string to `max_bytes` bytes of payload, appending "..."
pub fn truncate_hex(hex: &str, max_bytes: usize) -> String {
    let body = hex.strip_prefix("0x").unwrap_or(hex);
    if body.len() <= max_bytes * 2 {
        return format!("0x{}", body);
    }
    format!("0x{}...", &body[..max_bytes * 2])
}

/// Trace an Fr value (only when debug feature enabled)
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! trace_fr {
    ($name:expr, $fr:expr) => {
        log::trace!("{} = {}", $name, $crate::debug::fr_to_hex($fr))
    };
}

/// Trace an Fr value (noop when debug feature disabled)
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! trace_fr {
    ($name:expr, $fr:expr) => {{
        let _ = (&$name, $fr);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SCALAR_ONE;

    #[test]
    fn test_fr_to_hex() {
        let hex = fr_to_hex(&SCALAR_ONE);
        assert_eq!(hex.len(), 66);
        assert!(hex.starts_with("0x000000"));
        assert!(hex.ends_with("01"));
    }

    #[test]
    fn test_commitment_to_hex() {
        let mut c = [0u8; 64];
        c[31] = 1;
        c[63] = 2;
        let (x, y) = commitment_to_hex(&c);
        assert!(x.ends_with("01"));
        assert!(y.ends_with("02"));
    }

    #[test]
    fn test_truncate_hex() {
        assert_eq!(truncate_hex("0xabcdef", 2), "0xabcd...");
        assert_eq!(truncate_hex("0xabcd", 2), "0xabcd");
        assert_eq!(truncate_hex("abcd", 8), "0xabcd");
    }
}
