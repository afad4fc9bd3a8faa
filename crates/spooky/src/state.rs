//! Incremental hashing state.
//!
//! [`SpookyState`] turns arbitrarily sized `update` calls into whole-block
//! calls into the mixer, keeping at most one partial block buffered.
//! `finalize` works on copies and never touches the stored state.

#![allow(clippy::indexing_slicing)] // Offsets bounded by `pending < BLOCK_LEN`

use core::{fmt, hash::Hasher, marker::PhantomData};

use traits::{KeyLengthError, StreamingHash};

use crate::{
  Digest128,
  engine::seed_from_key,
  mix::{Alpha, BLOCK_LEN, BlockMix, LANES, mix_block, prime, read_block},
  short,
};

/// Extra mixes of the padded final block after the first one.
const FINAL_REMIX: usize = 3;

/// Pad `tail` to a block, mark its length in the last byte, and mix it in
/// four times. Returns `(h11, h0)`.
#[inline]
#[must_use]
pub(crate) fn finish<V: BlockMix>(mut acc: [u64; LANES], tail: &[u8]) -> Digest128 {
  debug_assert!(tail.len() < BLOCK_LEN);
  let mut block = [0u8; BLOCK_LEN];
  block[..tail.len()].copy_from_slice(tail);
  block[BLOCK_LEN - 1] = tail.len() as u8;

  let d = read_block(&block);
  V::mix(&mut acc, &d);
  for _ in 0..FINAL_REMIX {
    V::mix(&mut acc, &d);
  }
  Digest128::new(acc[LANES - 1], acc[0])
}

/// Streaming state for the 128-bit block-mixing hash.
///
/// `V` selects the mixer; the default is the canonical [`Alpha`] variant.
///
/// # Example
///
/// ```
/// use spooky::Spooky128;
///
/// let mut state = Spooky128::init(1, 2);
/// state.update(b"hello ");
/// state.update(b"world");
/// assert_eq!(state.finalize(), Spooky128::oneshot(b"hello world", 1, 2));
/// ```
#[derive(Clone)]
pub struct SpookyState<V: BlockMix = Alpha> {
  buffer: [u8; BLOCK_LEN],
  /// Valid bytes in `buffer`; always `< BLOCK_LEN`.
  pending: usize,
  /// Block-path lanes. Primed from `seed` on the first full block.
  acc: [u64; LANES],
  total_len: u64,
  seed: [u64; 2],
  _variant: PhantomData<V>,
}

impl<V: BlockMix> SpookyState<V> {
  /// Initialise with the seed pair `[seed1, seed2]`.
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: [u64; 2]) -> Self {
    Self {
      buffer: [0u8; BLOCK_LEN],
      pending: 0,
      acc: [0u64; LANES],
      total_len: 0,
      seed,
      _variant: PhantomData,
    }
  }

  /// Initialise from up to 16 bytes of key material.
  ///
  /// The key is read little-endian into `seed1` (bytes 0..8) and `seed2`
  /// (bytes 8..16), zero-padded.
  ///
  /// # Errors
  ///
  /// Returns [`KeyLengthError`] if `key` is longer than 16 bytes.
  #[inline]
  pub fn with_key(key: &[u8]) -> Result<Self, KeyLengthError> {
    Ok(Self::with_seed(seed_from_key(key)?))
  }

  /// The seed pair this state was created with.
  #[inline]
  #[must_use]
  pub const fn seed(&self) -> [u64; 2] {
    self.seed
  }

  /// Total bytes appended so far.
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)]
  pub const fn len(&self) -> u64 {
    self.total_len
  }

  /// Bytes currently buffered as a partial block.
  #[inline]
  #[must_use]
  pub const fn pending(&self) -> usize {
    self.pending
  }

  /// Whether the message is still short enough for the short path.
  #[inline]
  #[must_use]
  pub const fn is_short(&self) -> bool {
    self.total_len < BLOCK_LEN as u64
  }

  /// Append `data` to the message.
  pub fn update(&mut self, data: &[u8]) {
    let fill = self.pending + data.len();
    if fill < BLOCK_LEN {
      self.buffer[self.pending..fill].copy_from_slice(data);
      self.pending = fill;
      self.total_len = self.total_len.wrapping_add(data.len() as u64);
      return;
    }

    // First whole block: switch the lanes from raw seeds to block form.
    if self.is_short() {
      self.acc = prime(self.seed);
    }
    self.total_len = self.total_len.wrapping_add(data.len() as u64);

    let mut rest = data;
    if self.pending != 0 {
      let (head, tail) = rest.split_at(BLOCK_LEN - self.pending);
      self.buffer[self.pending..].copy_from_slice(head);
      mix_block::<V>(&mut self.acc, &self.buffer);
      rest = tail;
    }

    let (blocks, tail) = rest.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      mix_block::<V>(&mut self.acc, block);
    }

    self.buffer[..tail.len()].copy_from_slice(tail);
    self.pending = tail.len();
  }

  /// Digest of everything appended so far. Does not modify the state.
  #[must_use]
  pub fn finalize(&self) -> Digest128 {
    let tail = &self.buffer[..self.pending];
    if self.is_short() {
      return short::hash(tail, self.seed);
    }
    finish::<V>(self.acc, tail)
  }

  /// Return to the freshly-initialised state, keeping the seed pair.
  #[inline]
  pub fn reset(&mut self) {
    *self = Self::with_seed(self.seed);
  }
}

impl<V: BlockMix> Default for SpookyState<V> {
  #[inline]
  fn default() -> Self {
    Self::with_seed([0, 0])
  }
}

impl<V: BlockMix> fmt::Debug for SpookyState<V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SpookyState")
      .field("variant", &V::VARIANT)
      .field("len", &self.total_len)
      .field("pending", &self.pending)
      .finish_non_exhaustive()
  }
}

impl<V: BlockMix> StreamingHash for SpookyState<V> {
  const OUTPUT_SIZE: usize = 16;
  type Output = Digest128;

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    SpookyState::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> Digest128 {
    SpookyState::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    SpookyState::reset(self);
  }
}

/// `finish` returns the first output lane; `write` feeds raw bytes.
///
/// Integer `write_*` helpers use native byte order (the `Hasher` default), so
/// values hashed through them are only stable on hosts of the same
/// endianness.
impl<V: BlockMix> Hasher for SpookyState<V> {
  #[inline]
  fn finish(&self) -> u64 {
    SpookyState::finalize(self).h1()
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    SpookyState::update(self, bytes);
  }
}
