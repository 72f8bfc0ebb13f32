//! Minimal, fast order-preserving codecs + value-side `encode_into`.
//!
//! - `Bool`, `BeU16`/`BeU32`/`BeU64`, `BeI32`/`BeI64`, `BeF32`/`BeF64`:
//!   fixed-width big-endian codecs where lexicographic byte order ==
//!   natural order of the source type.
//!
//! - `OrdinalCodec`: 2-byte big-endian ordinal lookup for discrete,
//!   application-ordered variant tables.
//!
//! - `EncodeInto` lets you write `v.encode_into(&mut buf)` using the default
//!   codec for that native type (u64 → BeU64, i64 → BeI64, f64 → BeF64, …).

pub mod codec;
pub use codec::*;

pub mod bool;
pub use bool::*;

pub mod be_u16;
pub use be_u16::*;

pub mod be_u32;
pub use be_u32::*;

pub mod be_u64;
pub use be_u64::*;

pub mod be_i32;
pub use be_i32::*;

pub mod be_i64;
pub use be_i64::*;

pub mod be_f32;
pub use be_f32::*;

pub mod be_f64;
pub use be_f64::*;

pub mod ordinal;
pub use ordinal::*;

/* ---------------------- Value-side encode convenience ------------------- */

/// Default, value-side encoding: `v.encode_into(&mut buf)`.
///
/// One default codec per native type to keep call sites simple.
/// Use specific codecs directly if you need an alternative.
pub trait EncodeInto {
    fn encode_into(&self, dst: &mut Vec<u8>);
}

// bool → Bool
impl EncodeInto for bool {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        // These codecs don't have a real failure path for valid inputs, so unwrap is fine.
        Bool::encode_into(dst, self).unwrap();
    }
}

// u16 → BeU16
impl EncodeInto for u16 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeU16::encode_into(dst, self).unwrap();
    }
}

// u32 → BeU32
impl EncodeInto for u32 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeU32::encode_into(dst, self).unwrap();
    }
}

// u64 → BeU64
impl EncodeInto for u64 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeU64::encode_into(dst, self).unwrap();
    }
}

// i32 → BeI32
impl EncodeInto for i32 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeI32::encode_into(dst, self).unwrap();
    }
}

// i64 → BeI64
impl EncodeInto for i64 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeI64::encode_into(dst, self).unwrap();
    }
}

// f32 → BeF32
impl EncodeInto for f32 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeF32::encode_into(dst, self).unwrap();
    }
}

// f64 → BeF64
impl EncodeInto for f64 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>) {
        BeF64::encode_into(dst, self).unwrap();
    }
}
