use super::*;
use crate::stream::{get_be_uint, put_be_uint};

/// Big-endian u64 codec. Lexicographic order == numeric order.
pub struct BeU64;

impl Codec for BeU64 {
    const WIDTH: usize = 8;
    type Borrowed<'a> = &'a u64;
    type Owned = u64;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &u64) -> Result<()> {
        put_be_uint(dst, *v, Self::WIDTH);
        Ok(())
    }

    #[inline]
    fn decode(src: &mut &[u8]) -> Result<u64> {
        get_be_uint(src, Self::WIDTH)
    }

    // Specialized fast path to avoid per-item cursor updates in the hot loop.
    #[inline]
    fn decode_many_into(dst: &mut [u64], src: &[u8]) -> Result<()> {
        let n = dst.len();
        if src.len() != n.saturating_mul(8) {
            return Err(Error::NotEnoughData);
        }
        let mut off = 0usize;
        for out in dst.iter_mut() {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&src[off..off + 8]);
            *out = u64::from_be_bytes(bytes);
            off += 8;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beu64_roundtrip_and_order() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        let mut c = Vec::new();

        1u64.encode_into(&mut a);
        2u64.encode_into(&mut b);
        10u64.encode_into(&mut c);

        // Lex order == numeric
        assert!(a < b && b < c);

        // Round-trip
        assert_eq!(BeU64::decode(&mut a.as_slice()).unwrap(), 1);
        assert_eq!(BeU64::decode(&mut b.as_slice()).unwrap(), 2);
        assert_eq!(BeU64::decode(&mut c.as_slice()).unwrap(), 10);
    }

    #[test]
    fn beu64_decode_many_matches_one_by_one() {
        let vals = [0u64, 1, u64::MAX / 2, u64::MAX / 2 + 1, u64::MAX];
        let mut buf = Vec::new();
        for v in &vals {
            v.encode_into(&mut buf);
        }

        let mut out = [0u64; 5];
        BeU64::decode_many_into(&mut out, &buf).unwrap();
        assert_eq!(out, vals);

        // Length must match exactly.
        let mut short = [0u64; 5];
        assert!(matches!(
            BeU64::decode_many_into(&mut short, &buf[..buf.len() - 1]),
            Err(Error::NotEnoughData)
        ));
    }
}
