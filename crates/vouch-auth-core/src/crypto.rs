//! Cryptographic utilities for secure operations
//!
//! This module provides security-critical primitives that must be
//! implemented correctly to prevent timing attacks and other side-channel
//! vulnerabilities.

/// Constant-time byte slice comparison.
///
/// This function compares two byte slices in constant time to prevent
/// timing attacks. The comparison time depends only on the length of
/// the slices, not on their contents.
///
/// # Security
/// - Returns `false` immediately if lengths differ (length is not secret)
/// - Compares all bytes even after finding a difference
/// - Uses XOR accumulator to prevent branch prediction attacks
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    // XOR all bytes together - will be 0 only if all bytes match
    // This runs in constant time regardless of where differences are
    let result = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y));

    result == 0
}

/// Constant-time string comparison.
///
/// Wrapper around `constant_time_eq` for string comparisons. Used for the
/// stored-vs-presented refresh token match during rotation.
#[inline]
pub fn constant_time_str_eq(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
