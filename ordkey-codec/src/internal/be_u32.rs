use super::*;
use crate::stream::{get_be_uint, put_be_uint};

/// Big-endian u32 codec. Lexicographic order == numeric order.
pub struct BeU32;

impl Codec for BeU32 {
    const WIDTH: usize = 4;
    type Borrowed<'a> = &'a u32;
    type Owned = u32;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &u32) -> Result<()> {
        put_be_uint(dst, *v as u64, Self::WIDTH);
        Ok(())
    }

    #[inline]
    fn decode(src: &mut &[u8]) -> Result<u32> {
        Ok(get_be_uint(src, Self::WIDTH)? as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beu32_roundtrip_and_order() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        let mut c = Vec::new();

        1u32.encode_into(&mut a);
        2u32.encode_into(&mut b);
        10u32.encode_into(&mut c);

        // Lex order == numeric
        assert!(a < b && b < c);

        // Round-trip
        assert_eq!(BeU32::decode(&mut a.as_slice()).unwrap(), 1);
        assert_eq!(BeU32::decode(&mut b.as_slice()).unwrap(), 2);
        assert_eq!(BeU32::decode(&mut c.as_slice()).unwrap(), 10);
    }

    #[test]
    fn beu32_extremes() {
        let mut lo = Vec::new();
        let mut hi = Vec::new();
        0u32.encode_into(&mut lo);
        u32::MAX.encode_into(&mut hi);

        assert_eq!(lo, [0x00, 0x00, 0x00, 0x00]);
        assert_eq!(hi, [0xFF, 0xFF, 0xFF, 0xFF]);
        assert!(lo < hi);
    }
}
