#![forbid(unsafe_code)]

//! Order-preserving key codecs for byte-comparing stores.
//!
//! Every codec in this family maps a typed scalar key to a fixed-width
//! big-endian byte sequence such that unsigned lexicographic comparison of
//! the encoded bytes matches the natural order of the source values. That
//! property is what lets B-trees, LSM trees and prefix-scan indexes compare
//! raw key bytes without decoding them.
//!
//! Two layers are exposed:
//!
//! - Statically-dispatched unit-struct codecs ([`Bool`], [`BeU32`],
//!   [`BeU64`], [`BeI32`], [`BeI64`], [`BeF32`], [`BeF64`], [`BeU16`])
//!   behind the [`Codec`] trait, plus the instance-based [`OrdinalCodec`]
//!   for user-defined discrete ordered types.
//! - A runtime-tagged surface ([`KeyType`] / [`KeyValue`] with
//!   [`encode_key`] / [`decode_key`]) for callers that carry key schemas as
//!   data, e.g. composite-key layers that walk a column list.
//!
//! Composite keys need no machinery here: concatenating fixed-width encoded
//! components in declared order preserves order component-wise.

pub mod internal;
pub mod stream;

pub use internal::{
    BeF32, BeF64, BeI32, BeI64, BeU16, BeU32, BeU64, Bool, Codec, EncodeInto, OrdinalCodec,
};
pub use ordkey_result::{Error, Result};

// --- Public-Facing Metadata Enums ---

/// A tag representing the physical key type for a piece of schema metadata.
///
/// This is a simple, C-like enum that is cheap to store and copy. Its only
/// purpose is to act as a label for the underlying wire format. The
/// parameterized [`OrdinalCodec`] is deliberately not a tag: it owns a
/// variant table and is held as an instance instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// One byte; `false` sorts below `true`.
    Bool,
    /// Four bytes, identity big-endian.
    U32,
    /// Eight bytes, identity big-endian.
    U64,
    /// Four bytes, sign-bit flip.
    I32,
    /// Eight bytes, sign-bit flip.
    I64,
    /// Four bytes, IEEE-754 bit mangling.
    F32,
    /// Eight bytes, IEEE-754 bit mangling.
    F64,
}

impl KeyType {
    /// Exact number of bytes one encoded key of this type occupies.
    pub const fn width(self) -> usize {
        match self {
            KeyType::Bool => Bool::WIDTH,
            KeyType::U32 => BeU32::WIDTH,
            KeyType::U64 => BeU64::WIDTH,
            KeyType::I32 => BeI32::WIDTH,
            KeyType::I64 => BeI64::WIDTH,
            KeyType::F32 => BeF32::WIDTH,
            KeyType::F64 => BeF64::WIDTH,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            KeyType::Bool => "Bool",
            KeyType::U32 => "U32",
            KeyType::U64 => "U64",
            KeyType::I32 => "I32",
            KeyType::I64 => "I64",
            KeyType::F32 => "F32",
            KeyType::F64 => "F64",
        }
    }
}

/// A generic enum to hold any scalar key value the tagged surface handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyValue {
    Bool(bool),
    U32(u32),
    U64(u64),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl KeyValue {
    const fn got(self) -> &'static str {
        match self {
            KeyValue::Bool(_) => "Bool",
            KeyValue::U32(_) => "U32",
            KeyValue::U64(_) => "U64",
            KeyValue::I32(_) => "I32",
            KeyValue::I64(_) => "I64",
            KeyValue::F32(_) => "F32",
            KeyValue::F64(_) => "F64",
        }
    }
}

/// Encode `value` into `out` using the codec selected by `ktype`.
/// Appends exactly `ktype.width()` bytes to `out`.
#[inline]
pub fn encode_key(value: KeyValue, ktype: KeyType, out: &mut Vec<u8>) -> Result<()> {
    match (ktype, value) {
        (KeyType::Bool, KeyValue::Bool(b)) => Bool::encode_into(out, &b),
        (KeyType::U32, KeyValue::U32(x)) => BeU32::encode_into(out, &x),
        (KeyType::U64, KeyValue::U64(x)) => BeU64::encode_into(out, &x),
        (KeyType::I32, KeyValue::I32(x)) => BeI32::encode_into(out, &x),
        (KeyType::I64, KeyValue::I64(x)) => BeI64::encode_into(out, &x),
        (KeyType::F32, KeyValue::F32(x)) => BeF32::encode_into(out, &x),
        (KeyType::F64, KeyValue::F64(x)) => BeF64::encode_into(out, &x),
        (expected, value) => Err(Error::TypeMismatch {
            expected: expected.name(),
            got: value.got(),
        }),
    }
}

#[inline]
pub fn encode_key_to_vec(value: KeyValue, ktype: KeyType) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(ktype.width());
    encode_key(value, ktype, &mut out)?;
    Ok(out)
}

/// Bridges runtime schema metadata (`KeyType`) to the statically-dispatched
/// codecs from the `internal` module.
///
/// Consumes exactly `ktype.width()` bytes from the cursor, which is left
/// positioned on the next frame.
#[inline]
pub fn decode_key(src: &mut &[u8], ktype: KeyType) -> Result<KeyValue> {
    match ktype {
        KeyType::Bool => Bool::decode(src).map(KeyValue::Bool),
        KeyType::U32 => BeU32::decode(src).map(KeyValue::U32),
        KeyType::U64 => BeU64::decode(src).map(KeyValue::U64),
        KeyType::I32 => BeI32::decode(src).map(KeyValue::I32),
        KeyType::I64 => BeI64::decode(src).map(KeyValue::I64),
        KeyType::F32 => BeF32::decode(src).map(KeyValue::F32),
        KeyType::F64 => BeF64::decode(src).map(KeyValue::F64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /* ---------------- Tagged dispatch tests ---------------- */

    #[test]
    fn test_encode_decode_roundtrip_all_tags() {
        let cases = [
            (KeyValue::Bool(true), KeyType::Bool),
            (KeyValue::U32(42), KeyType::U32),
            (KeyValue::U64(u64::MAX), KeyType::U64),
            (KeyValue::I32(-7), KeyType::I32),
            (KeyValue::I64(i64::MIN), KeyType::I64),
            (KeyValue::F32(-1.5), KeyType::F32),
            (KeyValue::F64(2.25), KeyType::F64),
        ];

        for (value, ktype) in cases {
            let buf = encode_key_to_vec(value, ktype).unwrap();
            assert_eq!(buf.len(), ktype.width());

            let mut cur = buf.as_slice();
            let back = decode_key(&mut cur, ktype).unwrap();
            assert_eq!(back, value);
            assert!(cur.is_empty());
        }
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let mut out = Vec::new();
        let err = encode_key(KeyValue::U64(1), KeyType::I64, &mut out).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: "I64",
                got: "U64"
            }
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_widths_match_wire_format() {
        assert_eq!(KeyType::Bool.width(), 1);
        assert_eq!(KeyType::U32.width(), 4);
        assert_eq!(KeyType::U64.width(), 8);
        assert_eq!(KeyType::I32.width(), 4);
        assert_eq!(KeyType::I64.width(), 8);
        assert_eq!(KeyType::F32.width(), 4);
        assert_eq!(KeyType::F64.width(), 8);
    }

    #[test]
    fn test_short_read_surfaces_from_reader() {
        let buf = [0x80u8, 0x00, 0x00]; // one byte short of an i32 frame
        let mut cur = buf.as_slice();
        assert!(matches!(
            decode_key(&mut cur, KeyType::I32),
            Err(Error::NotEnoughData)
        ));
    }
}
