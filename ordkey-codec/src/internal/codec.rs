pub use ordkey_result::{Error, Result};

/// A zero-overhead codec API for a single logical key type.
///
/// - `Borrowed<'a>` is the borrowed view accepted by `encode_into`,
///   e.g. `&'a u64` for u64.
/// - `Owned` is the type `decode` returns (e.g., `u64`).
///
/// Every codec in this family is fixed-width: encoding appends exactly
/// [`WIDTH`](Codec::WIDTH) bytes and decoding consumes exactly that many,
/// leaving the cursor positioned on the next frame. Unsigned lexicographic
/// comparison of encoded frames matches the natural order of the source
/// values.
pub trait Codec {
    /// The exact number of bytes for one encoded item.
    const WIDTH: usize;

    type Borrowed<'a>: ?Sized
    where
        Self: 'a;

    type Owned;

    /// Append the encoded bytes for `v` into `dst`.
    fn encode_into(dst: &mut Vec<u8>, v: Self::Borrowed<'_>) -> Result<()>;

    /// Decode one value, consuming exactly `WIDTH` bytes from the cursor.
    fn decode(src: &mut &[u8]) -> Result<Self::Owned>;

    /// Decode a concatenation of fixed-width frames into a slice of owned
    /// values. Length must match exactly: `src.len() == dst.len() * WIDTH`.
    ///
    /// Individual codecs can provide a faster, specialized version.
    fn decode_many_into(dst: &mut [Self::Owned], src: &[u8]) -> Result<()>
    where
        Self: Sized,
    {
        if src.len() != dst.len().saturating_mul(Self::WIDTH) {
            return Err(Error::NotEnoughData);
        }
        let mut cur = src;
        for out in dst.iter_mut() {
            *out = Self::decode(&mut cur)?;
        }
        Ok(())
    }
}
