//! Hexadecimal digit evaluation for percent-escapes.
//!
//! Both functions return [`INVALID`] for characters that are not hex digits.
//! The sentinel is negative enough that `high_nibble(a) + low_nibble(b)` is
//! negative whenever either input is invalid, so a caller can validate an
//! escape with a single `>= 0` check on the sum.

/// Value returned for non-hex characters.
pub const INVALID: i32 = -256;

/// Value of `c` as the low four bits of a byte (`0..=15`).
#[inline]
pub fn low_nibble(c: char) -> i32 {
    match c {
        '0'..='9' => c as i32 - '0' as i32,
        'a'..='f' => c as i32 - 'a' as i32 + 10,
        'A'..='F' => c as i32 - 'A' as i32 + 10,
        _ => INVALID,
    }
}

/// Value of `c` as the high four bits of a byte (`0..=240`, step 16).
#[inline]
pub fn high_nibble(c: char) -> i32 {
    match low_nibble(c) {
        INVALID => INVALID,
        value => value << 4,
    }
}

/// Decoded byte value of the escape `%c1c2`, or a negative value.
#[inline]
pub fn escape_value(c1: char, c2: char) -> i32 {
    high_nibble(c1) + low_nibble(c2)
}
