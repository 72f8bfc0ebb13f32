use super::*;
use crate::stream::{get_be_uint, put_be_uint};

/// Big-endian u16 codec. Lexicographic order == numeric order.
///
/// Also the wire format of one encoded ordinal (see
/// [`OrdinalCodec`](crate::OrdinalCodec)).
pub struct BeU16;

impl Codec for BeU16 {
    const WIDTH: usize = 2;
    type Borrowed<'a> = &'a u16;
    type Owned = u16;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &u16) -> Result<()> {
        put_be_uint(dst, *v as u64, Self::WIDTH);
        Ok(())
    }

    #[inline]
    fn decode(src: &mut &[u8]) -> Result<u16> {
        Ok(get_be_uint(src, Self::WIDTH)? as u16)
    }

    // Specialized fast path to avoid per-item cursor updates in the hot loop.
    #[inline]
    fn decode_many_into(dst: &mut [u16], src: &[u8]) -> Result<()> {
        let n = dst.len();
        if src.len() != n.saturating_mul(2) {
            return Err(Error::NotEnoughData);
        }
        let mut off = 0usize;
        for out in dst.iter_mut() {
            let mut bytes = [0u8; 2];
            bytes.copy_from_slice(&src[off..off + 2]);
            *out = u16::from_be_bytes(bytes);
            off += 2;
        }
        Ok(())
    }
}
