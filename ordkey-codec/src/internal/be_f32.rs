use super::*;
use crate::stream::{get_be_uint, put_be_uint};

/// Big-endian f32 codec with sign-aware bit mangling so lexicographic order
/// matches IEEE-754 numeric order.
///
/// Negatives are fully inverted, which reverses their magnitude order and
/// drops them into the lower half of the unsigned space; positives get the
/// sign bit set, landing in the upper half in ascending magnitude order.
///
/// `-0.0` and `+0.0` keep distinct encodings (`7F FF FF FF` vs
/// `80 00 00 00`) and compare `-0.0 < +0.0` byte-wise even though IEEE `==`
/// treats them as equal. NaN bit patterns go through the same transform;
/// their byte order is deterministic per pattern but otherwise unspecified.
pub struct BeF32;

impl BeF32 {
    #[inline]
    fn to_lex(bits: u32) -> u32 {
        // Map IEEE754 to lex order: negatives inverted, positives flip sign bit
        if bits & 0x8000_0000 != 0 {
            !bits
        } else {
            bits ^ 0x8000_0000
        }
    }
    #[inline]
    fn from_lex(u: u32) -> u32 {
        if u & 0x8000_0000 != 0 {
            u ^ 0x8000_0000
        } else {
            !u
        }
    }
}

impl Codec for BeF32 {
    const WIDTH: usize = 4;
    type Borrowed<'a> = &'a f32;
    type Owned = f32;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &f32) -> Result<()> {
        put_be_uint(dst, Self::to_lex(v.to_bits()) as u64, Self::WIDTH);
        Ok(())
    }

    #[inline]
    fn decode(src: &mut &[u8]) -> Result<f32> {
        Ok(f32::from_bits(Self::from_lex(
            get_be_uint(src, Self::WIDTH)? as u32,
        )))
    }
}
