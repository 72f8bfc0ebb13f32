use super::*;
use crate::stream::{get_be_uint, put_be_uint};

/// Codec for bool. `false` -> `0u8`, `true` -> `1u8`.
///
/// Decode is permissive: any non-zero byte reads back as `true`. Encoders
/// only ever produce `00`/`01`, so two distinct raw byte strings can decode
/// to the same boolean; callers must not assume decoded equality implies
/// byte equality.
pub struct Bool;

impl Codec for Bool {
    const WIDTH: usize = 1;
    type Borrowed<'a> = &'a bool;
    type Owned = bool;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &bool) -> Result<()> {
        put_be_uint(dst, if *v { 1 } else { 0 }, Self::WIDTH);
        Ok(())
    }

    #[inline]
    fn decode(src: &mut &[u8]) -> Result<bool> {
        Ok(get_be_uint(src, Self::WIDTH)? != 0)
    }
}
