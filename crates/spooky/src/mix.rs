//! Block mixers: the 12-lane transform folded over every 96-byte block.
//!
//! A mixer takes twelve little-endian input words `d0..d11` and twelve
//! accumulator lanes `h0..h11` and updates the lanes in place. One
//! application deliberately under-mixes; finalization re-mixes the last block
//! four times to reach full avalanche.
//!
//! The lane wiring and rotation counts are the whole algorithm. They are
//! written out step by step below and must not be "simplified": any change
//! produces digests that no other implementation agrees with.

#![allow(clippy::indexing_slicing)] // Constant indices into fixed-size lane arrays

use core::fmt::Debug;

/// Number of 64-bit accumulator lanes.
pub const LANES: usize = 12;

/// Bytes consumed per mixing round.
pub const BLOCK_LEN: usize = LANES * 8;

/// Odd constant used to prime the lanes from the seed pair (and by Jasper's
/// data multiply).
pub(crate) const M: u64 = 0xba6b_2ad5_6aad_55c5;

/// Named mixer variant.
///
/// Each variant is a different, non-interoperable hash. [`Variant::Alpha`]
/// is the canonical one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Variant {
  /// SpookyHash alpha (October/November 2010 constant set).
  Alpha = 0,
  /// Akron: rotate-then-xor wiring, twelve distinct rotations.
  Akron = 1,
  /// Jasper: multiply-in data, single rotation of 43 per step.
  Jasper = 2,
}

impl Variant {
  /// All variants, canonical first.
  pub const ALL: &'static [Variant] = &[Variant::Alpha, Variant::Akron, Variant::Jasper];

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Alpha => "alpha",
      Self::Akron => "akron",
      Self::Jasper => "jasper",
    }
  }

  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "alpha" | "spooky" => Some(Self::Alpha),
      "akron" => Some(Self::Akron),
      "jasper" => Some(Self::Jasper),
      _ => None,
    }
  }
}

impl core::fmt::Display for Variant {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

mod private {
  pub trait Sealed {}
}

/// A 12-lane block mixer.
///
/// This trait is sealed: the set of variants is fixed, because each one is a
/// frozen wire format.
pub trait BlockMix: private::Sealed + Copy + Default + Debug + Send + Sync + 'static {
  /// Which named variant this mixer implements.
  const VARIANT: Variant;

  /// Fold one block of twelve input words into the lanes.
  fn mix(h: &mut [u64; LANES], d: &[u64; LANES]);
}

/// SpookyHash alpha mixer (canonical).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Alpha;

/// Akron mixer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Akron;

/// Jasper mixer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Jasper;

impl private::Sealed for Alpha {}
impl private::Sealed for Akron {}
impl private::Sealed for Jasper {}

impl BlockMix for Alpha {
  const VARIANT: Variant = Variant::Alpha;

  #[inline(always)]
  fn mix(h: &mut [u64; LANES], d: &[u64; LANES]) {
    // h[i] += d[i]; h[r] <<<= k; h[x] ^= h[y]; h[r] += h[s]; h[y] += h[s]
    macro_rules! step {
      ($i:literal, $r:literal, $k:literal, $x:literal, $y:literal, $s:literal) => {
        h[$i] = h[$i].wrapping_add(d[$i]);
        h[$r] = h[$r].rotate_left($k);
        h[$x] ^= h[$y];
        h[$r] = h[$r].wrapping_add(h[$s]);
        h[$y] = h[$y].wrapping_add(h[$s]);
      };
    }

    step!(0, 11, 32, 9, 1, 10);
    step!(1, 0, 41, 10, 2, 11);
    step!(2, 1, 12, 11, 3, 0);
    step!(3, 2, 24, 0, 4, 1);
    step!(4, 3, 8, 1, 5, 2);
    step!(5, 4, 42, 2, 6, 3);
    step!(6, 5, 32, 3, 7, 4);
    step!(7, 6, 13, 4, 8, 5);
    step!(8, 7, 30, 5, 9, 6);
    step!(9, 8, 20, 6, 10, 7);
    step!(10, 9, 47, 7, 11, 8);
    step!(11, 10, 16, 8, 0, 9);
  }
}

impl BlockMix for Akron {
  const VARIANT: Variant = Variant::Akron;

  #[inline(always)]
  fn mix(h: &mut [u64; LANES], d: &[u64; LANES]) {
    // h[i] += d[i]; h[r] = (h[r] <<< k) ^ h[i]; h[a] += h[i]; h[i] += h[s]
    macro_rules! step {
      ($i:literal, $r:literal, $k:literal, $a:literal, $s:literal) => {
        h[$i] = h[$i].wrapping_add(d[$i]);
        h[$r] = h[$r].rotate_left($k) ^ h[$i];
        h[$a] = h[$a].wrapping_add(h[$i]);
        h[$i] = h[$i].wrapping_add(h[$s]);
      };
    }

    step!(0, 2, 32, 4, 3);
    step!(1, 3, 37, 5, 4);
    step!(2, 4, 27, 6, 5);
    step!(3, 5, 48, 7, 6);
    step!(4, 6, 5, 8, 7);
    step!(5, 7, 7, 9, 8);
    step!(6, 8, 50, 10, 9);
    step!(7, 9, 18, 11, 10);
    step!(8, 10, 9, 0, 11);
    step!(9, 11, 44, 1, 0);
    step!(10, 0, 14, 2, 1);
    step!(11, 1, 30, 3, 2);
  }
}

impl BlockMix for Jasper {
  const VARIANT: Variant = Variant::Jasper;

  #[inline(always)]
  fn mix(h: &mut [u64; LANES], d: &[u64; LANES]) {
    // h[a] -= d[i]*M; h[b] -= h[c]; h[c] -= h[e]; h[c] <<<= 43; h[c] ^= h[a]
    macro_rules! step {
      ($i:literal, $a:literal, $b:literal, $c:literal, $e:literal) => {
        h[$a] = h[$a].wrapping_sub(d[$i].wrapping_mul(M));
        h[$b] = h[$b].wrapping_sub(h[$c]);
        h[$c] = h[$c].wrapping_sub(h[$e]);
        h[$c] = h[$c].rotate_left(43);
        h[$c] ^= h[$a];
      };
    }

    step!(0, 0, 11, 9, 7);
    step!(1, 11, 10, 8, 6);
    step!(2, 10, 9, 7, 5);
    step!(3, 9, 8, 6, 4);
    step!(4, 8, 7, 5, 3);
    step!(5, 7, 6, 4, 2);
    step!(6, 6, 5, 3, 1);
    step!(7, 5, 4, 2, 0);
    step!(8, 4, 3, 1, 11);
    step!(9, 3, 2, 0, 10);
    step!(10, 2, 1, 11, 9);
    step!(11, 1, 0, 10, 8);
  }
}

/// Block-path lanes for a seed pair.
///
/// Seeds are multiplied by [`M`] and spread over four groups of three lanes;
/// the third lane of each group holds `M` itself.
#[inline]
#[must_use]
pub(crate) const fn prime(seed: [u64; 2]) -> [u64; LANES] {
  let a = seed[0].wrapping_mul(M);
  let b = seed[1].wrapping_mul(M);
  [a, b, M, a, b, M, a, b, M, a, b, M]
}

/// Read a block as twelve little-endian words, independent of host byte order.
#[inline(always)]
#[must_use]
pub(crate) fn read_block(block: &[u8; BLOCK_LEN]) -> [u64; LANES] {
  let (chunks, _) = block.as_chunks::<8>();
  let mut d = [0u64; LANES];
  for (word, chunk) in d.iter_mut().zip(chunks) {
    *word = u64::from_le_bytes(*chunk);
  }
  d
}

#[inline(always)]
pub(crate) fn mix_block<V: BlockMix>(h: &mut [u64; LANES], block: &[u8; BLOCK_LEN]) {
  V::mix(h, &read_block(block));
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lanes(seed: u64) -> [u64; LANES] {
    let mut x = seed;
    core::array::from_fn(|_| {
      x = x.wrapping_mul(0x2545_F491_4F6C_DD1D).wrapping_add(0x9E37_79B9_7F4A_7C15);
      x
    })
  }

  fn mixes_every_lane<V: BlockMix>() {
    let base = lanes(1);
    let data = lanes(2);
    let mut h = base;
    V::mix(&mut h, &data);
    for (i, (a, b)) in base.iter().zip(&h).enumerate() {
      assert_ne!(a, b, "{}: lane {i} untouched", V::VARIANT);
    }
  }

  #[test]
  fn every_lane_is_written() {
    mixes_every_lane::<Alpha>();
    mixes_every_lane::<Akron>();
    mixes_every_lane::<Jasper>();
  }

  fn single_word_diffuses<V: BlockMix>() {
    // Four passes (the finalization count) spread a one-bit change widely.
    let base = lanes(3);
    for word in 0..LANES {
      let d0 = [0u64; LANES];
      let mut d1 = d0;
      d1[word] = 1;
      let (mut a, mut b) = (base, base);
      for _ in 0..4 {
        V::mix(&mut a, &d0);
        V::mix(&mut b, &d1);
      }
      let diff: u32 = a.iter().zip(&b).map(|(x, y)| (x ^ y).count_ones()).sum();
      assert!(diff > 128, "{}: word {word} flipped only {diff} bits", V::VARIANT);
    }
  }

  #[test]
  fn one_bit_diffuses() {
    single_word_diffuses::<Alpha>();
    single_word_diffuses::<Akron>();
    single_word_diffuses::<Jasper>();
  }

  #[test]
  fn prime_layout() {
    let p = prime([1, 2]);
    assert_eq!(p[0], M);
    assert_eq!(p[1], 2u64.wrapping_mul(M));
    for group in p.chunks(3) {
      assert_eq!(group, &p[..3]);
    }
  }

  #[test]
  fn read_block_is_little_endian() {
    let mut block = [0u8; BLOCK_LEN];
    block[0] = 0x01;
    block[7] = 0x80;
    block[88] = 0xff;
    let d = read_block(&block);
    assert_eq!(d[0], 0x8000_0000_0000_0001);
    assert_eq!(d[11], 0xff);
    assert!(d[1..11].iter().all(|&w| w == 0));
  }

  #[test]
  fn variant_names_round_trip() {
    for &v in Variant::ALL {
      assert_eq!(Variant::from_name(v.as_str()), Some(v));
    }
    assert_eq!(Variant::from_name("spooky"), Some(Variant::Alpha));
    assert_eq!(Variant::from_name("murmur"), None);
  }
}
