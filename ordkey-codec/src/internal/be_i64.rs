use super::*;
use crate::stream::{get_be_uint, put_be_uint};

/// Big-endian i64 codec with sign-bit flip so lexicographic order == numeric order.
pub struct BeI64;

impl BeI64 {
    #[inline]
    fn to_lex(v: i64) -> u64 {
        (v as u64) ^ 0x8000_0000_0000_0000
    }
    #[inline]
    fn from_lex(u: u64) -> i64 {
        (u ^ 0x8000_0000_0000_0000) as i64
    }
}

impl Codec for BeI64 {
    const WIDTH: usize = 8;
    type Borrowed<'a> = &'a i64;
    type Owned = i64;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &i64) -> Result<()> {
        put_be_uint(dst, Self::to_lex(*v), Self::WIDTH);
        Ok(())
    }

    #[inline]
    fn decode(src: &mut &[u8]) -> Result<i64> {
        Ok(Self::from_lex(get_be_uint(src, Self::WIDTH)?))
    }

    // Specialized fast path to avoid per-item cursor updates in the hot loop.
    #[inline]
    fn decode_many_into(dst: &mut [i64], src: &[u8]) -> Result<()> {
        let n = dst.len();
        if src.len() != n.saturating_mul(8) {
            return Err(Error::NotEnoughData);
        }
        let mut off = 0usize;
        for out in dst.iter_mut() {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&src[off..off + 8]);
            *out = Self::from_lex(u64::from_be_bytes(bytes));
            off += 8;
        }
        Ok(())
    }
}
