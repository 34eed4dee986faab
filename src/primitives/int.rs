//! Capability set shared by the integer aliases.

use std::fmt::{Display, LowerHex};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width primitive integer.
///
/// Implemented for every built-in integer type and nothing else, so the
/// conversions in [`conv`](super::conv) accept any alias but reject
/// arbitrary `Display` types such as strings.
pub trait Integer: Copy + Display + LowerHex + sealed::Sealed {
    /// Width of the type in bits.
    const BITS: u32;

    /// Whether the type can represent negative values.
    const SIGNED: bool;
}

macro_rules! impl_integer {
    ($signed:literal => $($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integer for $t {
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = $signed;
            }
        )*
    };
}

impl_integer!(false => u8, u16, u32, u64, u128, usize);
impl_integer!(true => i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::Integer;

    #[test]
    fn bits_match_size_of() {
        assert_eq!(<u8 as Integer>::BITS, 8);
        assert_eq!(<i64 as Integer>::BITS, 64);
        assert_eq!(<usize as Integer>::BITS as usize, 8 * size_of::<usize>());
    }

    #[test]
    fn signedness() {
        assert!(!<u128 as Integer>::SIGNED);
        assert!(<isize as Integer>::SIGNED);
    }
}
