//! Primitive types
//!
//! This module maps the integer vocabulary of the Pin framework onto Rust
//! primitives. The aliases are plain `type` definitions: `UINT32` *is* `u32`,
//! and values move between the two without any conversion.
//!
//! | Alias      | Resolves to |
//! |------------|-------------|
//! | `UINT8`    | `u8`        |
//! | `USIZE`    | `u32`       |
//! | `UINT`     | `u32`       |
//! | `INT`      | `i32`       |
//! | `INT32`    | `i32`       |
//! | `UINT32`   | `u32`       |
//! | `__uint64` | `u64`       |
//! | `ADDRINT`  | `usize`     |
//!
//! `INT`, `UINT` and `USIZE` are platform `int`/`unsigned int` in the
//! framework's headers. They are pinned to 32 bits here.

#![allow(non_camel_case_types)]

use core::mem::size_of;

pub mod conv;
mod int;

pub use int::Integer;

/// Byte-sized unsigned quantity.
pub type UINT8 = u8;

/// Unsigned size or count.
pub type USIZE = u32;

pub type UINT = u32;
pub type INT = i32;
pub type INT32 = i32;
pub type UINT32 = u32;

/// Wide unsigned counter.
pub type __uint64 = u64;

/// Unsigned integer wide enough to hold any address on the host.
pub type ADDRINT = usize;

// Width and signedness of every alias. Editing the table above to a
// different primitive must fail the build.
const _: () = {
    assert!(size_of::<UINT8>() == 1 && UINT8::MIN == 0);
    assert!(size_of::<USIZE>() == 4 && USIZE::MIN == 0);
    assert!(size_of::<UINT>() == 4 && UINT::MIN == 0);
    assert!(size_of::<INT>() == 4 && INT::MIN < 0);
    assert!(size_of::<INT32>() == 4 && INT32::MIN < 0);
    assert!(size_of::<UINT32>() == 4 && UINT32::MIN == 0);
    assert!(size_of::<__uint64>() == 8 && __uint64::MIN == 0);
    assert!(size_of::<ADDRINT>() == size_of::<*const u8>() && ADDRINT::MIN == 0);
};
