//! Raw big-endian fixed-width stream ops shared by every codec in the family.
//!
//! The writer side appends the low `width` bytes of a `u64` MSB-first into a
//! `Vec<u8>`; the reader side consumes `width` bytes from an advancing slice
//! cursor into a zero-extended `u64`. Widths used by this family are 1, 2, 4
//! and 8.

use ordkey_result::{Error, Result};

/// Append the low `width` bytes of `v`, most significant byte first.
///
/// Bytes within a single call are never reordered; a `width` of 8 writes the
/// full big-endian representation.
#[inline]
pub fn put_be_uint(out: &mut Vec<u8>, v: u64, width: usize) {
    debug_assert!(matches!(width, 1 | 2 | 4 | 8), "unsupported width {width}");
    out.extend_from_slice(&v.to_be_bytes()[8 - width..]);
}

/// Consume `width` bytes MSB-first into the low bits of a `u64`,
/// zero-extending the high bits.
///
/// Advances `inp` past the consumed bytes. On a short read the cursor is
/// left untouched and `Error::NotEnoughData` is returned.
#[inline]
pub fn get_be_uint(inp: &mut &[u8], width: usize) -> Result<u64> {
    debug_assert!(matches!(width, 1 | 2 | 4 | 8), "unsupported width {width}");
    if inp.len() < width {
        return Err(Error::NotEnoughData);
    }
    let mut buf = [0u8; 8];
    buf[8 - width..].copy_from_slice(&inp[..width]);
    *inp = &inp[width..];
    Ok(u64::from_be_bytes(buf))
}
