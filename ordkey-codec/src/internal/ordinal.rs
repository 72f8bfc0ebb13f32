use core::hash::Hash;

use rustc_hash::FxHashMap;

use super::*;

/// Ordinal codec for discrete, application-ordered variant tables.
///
/// The table declares the total order: the variant at position `i` encodes
/// as the 2-byte big-endian ordinal `i`, so encoded keys sort in declared
/// order. This is the canonical strategy for user-defined discrete ordered
/// key types.
///
/// Unlike the scalar codecs, this one is parameterized and therefore
/// instance-based: construct it once and share it. The table is read-only
/// after construction, so sharing needs no synchronization.
#[derive(Debug, Clone)]
pub struct OrdinalCodec<T> {
    variants: Vec<T>,
    ordinals: FxHashMap<T, u16>,
}

impl<T> OrdinalCodec<T>
where
    T: Clone + Eq + Hash,
{
    /// Wire width of one encoded ordinal.
    pub const WIDTH: usize = 2;

    /// Build a codec over `variants` in their declared order.
    ///
    /// Fails if the table does not fit the 2-byte wire format or contains a
    /// duplicate variant (which would make the encode-side lookup ambiguous).
    pub fn new<I>(variants: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let variants: Vec<T> = variants.into_iter().collect();
        if variants.len() > u16::MAX as usize {
            return Err(Error::invalid_argument(format!(
                "ordinal table holds {} variants; the 2-byte wire format allows at most {}",
                variants.len(),
                u16::MAX
            )));
        }
        let mut ordinals = FxHashMap::default();
        for (i, v) in variants.iter().enumerate() {
            if ordinals.insert(v.clone(), i as u16).is_some() {
                return Err(Error::invalid_argument(format!(
                    "duplicate variant at ordinal {i}"
                )));
            }
        }
        Ok(Self { variants, ordinals })
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// The variant table in declared (encoded) order.
    pub fn variants(&self) -> &[T] {
        &self.variants
    }

    /// Ordinal of `v` in the declared order, if the table contains it.
    #[inline]
    pub fn ordinal_of(&self, v: &T) -> Option<u16> {
        self.ordinals.get(v).copied()
    }

    /// Append the 2-byte big-endian ordinal of `v` into `dst`.
    #[inline]
    pub fn encode_into(&self, dst: &mut Vec<u8>, v: &T) -> Result<()> {
        let Some(i) = self.ordinal_of(v) else {
            return Err(Error::invalid_argument(
                "variant is not in the ordinal table",
            ));
        };
        BeU16::encode_into(dst, &i)
    }

    /// Decode one ordinal, consuming exactly 2 bytes from the cursor.
    ///
    /// An ordinal outside the table is a corrupt key; the cursor position is
    /// unspecified afterwards.
    #[inline]
    pub fn decode(&self, src: &mut &[u8]) -> Result<T> {
        let i = BeU16::decode(src)?;
        self.variants.get(i as usize).cloned().ok_or_else(|| {
            Error::corrupt_key(format!(
                "ordinal {i} out of range for table of {}",
                self.variants.len()
            ))
        })
    }
}
