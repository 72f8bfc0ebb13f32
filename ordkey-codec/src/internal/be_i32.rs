use super::*;
use crate::stream::{get_be_uint, put_be_uint};

/// Big-endian i32 codec with sign-bit flip so lexicographic order == numeric order.
pub struct BeI32;

impl BeI32 {
    #[inline]
    fn to_lex(v: i32) -> u32 {
        (v as u32) ^ 0x8000_0000
    }
    #[inline]
    fn from_lex(u: u32) -> i32 {
        (u ^ 0x8000_0000) as i32
    }
}

impl Codec for BeI32 {
    const WIDTH: usize = 4;
    type Borrowed<'a> = &'a i32;
    type Owned = i32;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &i32) -> Result<()> {
        put_be_uint(dst, Self::to_lex(*v) as u64, Self::WIDTH);
        Ok(())
    }

    #[inline]
    fn decode(src: &mut &[u8]) -> Result<i32> {
        Ok(Self::from_lex(get_be_uint(src, Self::WIDTH)? as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bei32_roundtrip_and_order() {
        // Include negatives, zero, positives, and extremes
        let vals = [i32::MIN, i32::MIN + 1, -10, -1, 0, 1, 10, i32::MAX - 1, i32::MAX];

        let encoded: Vec<Vec<u8>> = vals
            .iter()
            .map(|v| {
                let mut b = Vec::new();
                v.encode_into(&mut b);
                b
            })
            .collect();

        // Lex sort of bytes should match numeric sort of values
        let mut bytes_sorted = encoded.clone();
        bytes_sorted.sort(); // lexicographic (bytewise)

        let mut vals_sorted = vals.to_vec();
        vals_sorted.sort(); // numeric

        let decoded: Vec<i32> = bytes_sorted
            .iter()
            .map(|b| BeI32::decode(&mut b.as_slice()).unwrap())
            .collect();

        assert_eq!(decoded, vals_sorted, "lexicographic != numeric order");

        // Spot round-trips
        for (i, v) in vals.iter().enumerate() {
            assert_eq!(BeI32::decode(&mut encoded[i].as_slice()).unwrap(), *v);
        }
    }

    #[test]
    fn bei32_wire_bytes() {
        let cases: [(i32, [u8; 4]); 4] = [
            (i32::MIN, [0x00, 0x00, 0x00, 0x00]),
            (-1, [0x7F, 0xFF, 0xFF, 0xFF]),
            (0, [0x80, 0x00, 0x00, 0x00]),
            (i32::MAX, [0xFF, 0xFF, 0xFF, 0xFF]),
        ];
        for (v, want) in cases {
            let mut b = Vec::new();
            v.encode_into(&mut b);
            assert_eq!(b, want, "wire bytes for {v}");
        }
    }
}
