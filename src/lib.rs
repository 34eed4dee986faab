//! Pin type vocabulary for the symbolic backend
//!
//! This crate lets code written against the type names of the Pin binary
//! instrumentation framework build without Pin itself. It provides nothing
//! but the names and two small formatting helpers; it does not emulate any
//! part of the framework's behavior.
//!
//! # Module overview
//!
//! - `primitives`  
//!   The framework's integer aliases (`UINT8`, `UINT32`, `ADDRINT`, ...)
//!   mapped onto fixed-width Rust primitives, together with the `Integer`
//!   capability trait implemented by every type they resolve to.
//!
//! - `primitives::conv`  
//!   `hexstr` and `decstr`, the textual conversions the framework's headers
//!   used to provide for any integer value.
//!
//! Everything is re-exported at the crate root, so dependants can replace
//! the framework header with a single `use pin_shim::*;`.
//!
//! # Design goals
//!
//! - Exact widths: every alias has the same width and signedness on every
//!   target, checked at compile time
//! - No runtime dependencies and no state
//! - One generic implementation per operation, shared by every alias

pub mod primitives;

pub use primitives::conv::{decstr, hexstr};
pub use primitives::*;
