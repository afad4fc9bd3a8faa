//! One-shot façade and keyed constructors.

use core::{fmt, hash::BuildHasher, marker::PhantomData};

use traits::{FastHash, KeyLengthError};

use crate::{
  Digest128,
  mix::{Akron, Alpha, BLOCK_LEN, BlockMix, Jasper, mix_block, prime},
  short,
  state::{SpookyState, finish},
};

/// Maximum key material accepted by the keyed constructors, in bytes.
pub const KEY_LEN_MAX: usize = 16;

/// Pack up to [`KEY_LEN_MAX`] key bytes little-endian into a seed pair.
///
/// # Errors
///
/// Returns [`KeyLengthError`] if `key` is longer than [`KEY_LEN_MAX`].
pub fn seed_from_key(key: &[u8]) -> Result<[u64; 2], KeyLengthError> {
  if key.len() > KEY_LEN_MAX {
    return Err(KeyLengthError::new(key.len(), KEY_LEN_MAX));
  }
  let mut padded = [0u8; KEY_LEN_MAX];
  for (dst, src) in padded.iter_mut().zip(key) {
    *dst = *src;
  }
  let (words, _) = padded.as_chunks::<8>();
  let mut seed = [0u64; 2];
  for (s, w) in seed.iter_mut().zip(words) {
    *s = u64::from_le_bytes(*w);
  }
  Ok(seed)
}

#[inline]
#[must_use]
pub(crate) fn oneshot<V: BlockMix>(seed: [u64; 2], data: &[u8]) -> Digest128 {
  if data.len() < BLOCK_LEN {
    return short::hash(data, seed);
  }

  let mut acc = prime(seed);
  let (blocks, tail) = data.as_chunks::<BLOCK_LEN>();
  for block in blocks {
    mix_block::<V>(&mut acc, block);
  }
  finish::<V>(acc, tail)
}

/// The 128-bit block-mixing hash, parameterised by mixer variant.
///
/// Use the aliases [`Spooky128`] (canonical), [`Akron128`], or
/// [`Jasper128`].
///
/// # Example
///
/// ```
/// use spooky::{FastHash, Spooky128};
///
/// let d = Spooky128::oneshot(b"The quick brown fox", 1, 2);
/// assert_eq!(d, Spooky128::hash_with_seed([1, 2], b"The quick brown fox"));
///
/// let mut state = Spooky128::init(1, 2);
/// state.update(b"The quick ");
/// state.update(b"brown fox");
/// assert_eq!(state.finalize(), d);
/// ```
pub struct SpookyHash<V: BlockMix = Alpha>(PhantomData<V>);

/// Canonical variant.
pub type Spooky128 = SpookyHash<Alpha>;
/// Akron mixer over the shared framework. Not interchangeable with [`Spooky128`].
pub type Akron128 = SpookyHash<Akron>;
/// Jasper mixer over the shared framework. Not interchangeable with [`Spooky128`].
pub type Jasper128 = SpookyHash<Jasper>;

impl<V: BlockMix> SpookyHash<V> {
  /// Hash `message` in one call.
  #[inline]
  #[must_use]
  pub fn oneshot(message: &[u8], seed1: u64, seed2: u64) -> Digest128 {
    oneshot::<V>([seed1, seed2], message)
  }

  /// Hash `message` keyed by up to 16 bytes of key material.
  ///
  /// # Errors
  ///
  /// Returns [`KeyLengthError`] if `key` is longer than [`KEY_LEN_MAX`].
  #[inline]
  pub fn hash_keyed(key: &[u8], message: &[u8]) -> Result<Digest128, KeyLengthError> {
    Ok(oneshot::<V>(seed_from_key(key)?, message))
  }

  /// Start an incremental hash with the seed pair.
  #[inline]
  #[must_use]
  pub const fn init(seed1: u64, seed2: u64) -> SpookyState<V> {
    SpookyState::with_seed([seed1, seed2])
  }

  /// Start an incremental keyed hash.
  ///
  /// # Errors
  ///
  /// Returns [`KeyLengthError`] if `key` is longer than [`KEY_LEN_MAX`].
  #[inline]
  pub fn with_key(key: &[u8]) -> Result<SpookyState<V>, KeyLengthError> {
    SpookyState::with_key(key)
  }
}

impl<V: BlockMix> Clone for SpookyHash<V> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<V: BlockMix> Copy for SpookyHash<V> {}

impl<V: BlockMix> Default for SpookyHash<V> {
  #[inline]
  fn default() -> Self {
    Self(PhantomData)
  }
}

impl<V: BlockMix> fmt::Debug for SpookyHash<V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("SpookyHash").field(&V::VARIANT).finish()
  }
}

impl<V: BlockMix> FastHash for SpookyHash<V> {
  const OUTPUT_SIZE: usize = 16;
  type Output = Digest128;
  type Seed = [u64; 2];

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    oneshot::<V>(seed, data)
  }
}

/// [`BuildHasher`] producing seeded [`SpookyState`]s, for hash tables.
///
/// ```
/// # #[cfg(feature = "std")] {
/// use std::collections::HashMap;
///
/// use spooky::BuildSpooky;
///
/// let mut map = HashMap::with_hasher(BuildSpooky::<spooky::mix::Alpha>::with_seed([7, 11]));
/// map.insert("key", 1);
/// assert_eq!(map.get("key"), Some(&1));
/// # }
/// ```
pub struct BuildSpooky<V: BlockMix = Alpha> {
  seed: [u64; 2],
  _variant: PhantomData<V>,
}

impl<V: BlockMix> BuildSpooky<V> {
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: [u64; 2]) -> Self {
    Self {
      seed,
      _variant: PhantomData,
    }
  }
}

impl<V: BlockMix> Clone for BuildSpooky<V> {
  #[inline]
  fn clone(&self) -> Self {
    Self::with_seed(self.seed)
  }
}

impl<V: BlockMix> Default for BuildSpooky<V> {
  #[inline]
  fn default() -> Self {
    Self::with_seed([0, 0])
  }
}

impl<V: BlockMix> fmt::Debug for BuildSpooky<V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BuildSpooky")
      .field("variant", &V::VARIANT)
      .finish_non_exhaustive()
  }
}

impl<V: BlockMix> BuildHasher for BuildSpooky<V> {
  type Hasher = SpookyState<V>;

  #[inline]
  fn build_hasher(&self) -> SpookyState<V> {
    SpookyState::with_seed(self.seed)
  }
}
