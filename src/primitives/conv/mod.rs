//! Textual conversions for the integer aliases.
//!
//! Both helpers are generic over [`Integer`], so a single implementation
//! serves every alias in [`primitives`](super).

use super::Integer;

/// Returns the hexadecimal representation of an integer.
///
/// Digits are lowercase, with no `0x` prefix and no zero padding; zero is
/// `"0"`. Signed values are written as their two's-complement bit pattern
/// at the type's own width, the same output a hex-mode stream produces:
/// `hexstr(-1i32)` is `"ffffffff"`.
pub fn hexstr<T: Integer>(value: T) -> String {
    format!("{:x}", value)
}

/// Returns the decimal representation of an integer.
///
/// Negative values carry a leading `-`; there are never leading zeros.
pub fn decstr<T: Integer>(value: T) -> String {
    value.to_string()
}
