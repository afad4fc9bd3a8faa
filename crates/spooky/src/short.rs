//! Short-message path: a two-accumulator hash for inputs under one block.
//!
//! Starts faster than the block mixer (no twelve-lane priming, no four-round
//! finalization) at the cost of lower throughput, so it is only used while
//! the whole message is shorter than [`BLOCK_LEN`](crate::mix::BLOCK_LEN).
//! Every variant shares this path.

#![allow(clippy::indexing_slicing)] // Tail dispatch reads bounded by the matched length

use crate::Digest128;

const M1: u64 = 0xba6b_2ad5_6aad_55c5;
const M2: u64 = 0x729b_a0e7_afa4_9347;

/// Fold one word into an accumulator: `h = (h + ((w·a <<< 32)·b <<< 32))·a`.
#[inline(always)]
const fn fold(h: u64, word: u64, a: u64, b: u64) -> u64 {
  let t = word.wrapping_mul(a).rotate_left(32).wrapping_mul(b);
  h.wrapping_add(t.rotate_left(32)).wrapping_mul(a)
}

#[inline(always)]
fn word(bytes: &[u8]) -> u64 {
  let mut w = [0u8; 8];
  w.copy_from_slice(&bytes[..8]);
  u64::from_le_bytes(w)
}

#[inline(always)]
fn byte(tail: &[u8], i: usize, shift: u32) -> u64 {
  (tail[i] as u64) << shift
}

/// Hash `data` with the seed pair. Intended for `data.len() < BLOCK_LEN`, but
/// defined for any length.
#[must_use]
pub(crate) fn hash(data: &[u8], seed: [u64; 2]) -> Digest128 {
  let mut h0 = seed[0].wrapping_mul(M1);
  let mut h1 = seed[1].wrapping_mul(M2);

  h0 = h0.rotate_left(32).wrapping_mul(M2);
  h1 = h1.rotate_left(32).wrapping_mul(M1);
  h0 ^= h1;
  h1 = h1.wrapping_add(h0);

  let (chunks, tail) = data.as_chunks::<16>();
  for chunk in chunks {
    let (lo, hi) = chunk.split_at(8);
    h0 = fold(h0.rotate_left(32).wrapping_mul(M1), word(lo), M1, M2);
    h1 = fold(h1.rotate_left(32).wrapping_mul(M2), word(hi), M2, M1);
    h0 ^= h1;
    h1 = h1.wrapping_add(h0);
  }

  let tag = (tail.len() as u64) << 56;

  // 9..=15: the high half carries the length tag; 8 folds the low word alone.
  let high = match tail.len() {
    15 => Some(
      tag
        | byte(tail, 14, 48)
        | byte(tail, 13, 40)
        | byte(tail, 12, 32)
        | byte(tail, 11, 24)
        | byte(tail, 10, 16)
        | byte(tail, 9, 8)
        | byte(tail, 8, 0),
    ),
    14 => Some(
      tag
        | byte(tail, 13, 40)
        | byte(tail, 12, 32)
        | byte(tail, 11, 24)
        | byte(tail, 10, 16)
        | byte(tail, 9, 8)
        | byte(tail, 8, 0),
    ),
    13 => Some(tag | byte(tail, 12, 32) | byte(tail, 11, 24) | byte(tail, 10, 16) | byte(tail, 9, 8) | byte(tail, 8, 0)),
    12 => Some(tag | byte(tail, 11, 24) | byte(tail, 10, 16) | byte(tail, 9, 8) | byte(tail, 8, 0)),
    11 => Some(tag | byte(tail, 10, 16) | byte(tail, 9, 8) | byte(tail, 8, 0)),
    10 => Some(tag | byte(tail, 9, 8) | byte(tail, 8, 0)),
    9 => Some(tag | byte(tail, 8, 0)),
    _ => None,
  };

  match tail.len() {
    8..=15 => {
      if let Some(high) = high {
        h1 = fold(h1, high, M2, M1);
      }
      h0 = fold(h0, word(tail), M1, M2);
    }
    len => {
      // 0..=7: one length-tagged word feeds both accumulators.
      let low = match len {
        7 => {
          tag
            | byte(tail, 6, 48)
            | byte(tail, 5, 40)
            | byte(tail, 4, 32)
            | byte(tail, 3, 24)
            | byte(tail, 2, 16)
            | byte(tail, 1, 8)
            | byte(tail, 0, 0)
        }
        6 => {
          tag
            | byte(tail, 5, 40)
            | byte(tail, 4, 32)
            | byte(tail, 3, 24)
            | byte(tail, 2, 16)
            | byte(tail, 1, 8)
            | byte(tail, 0, 0)
        }
        5 => tag | byte(tail, 4, 32) | byte(tail, 3, 24) | byte(tail, 2, 16) | byte(tail, 1, 8) | byte(tail, 0, 0),
        4 => tag | byte(tail, 3, 24) | byte(tail, 2, 16) | byte(tail, 1, 8) | byte(tail, 0, 0),
        3 => tag | byte(tail, 2, 16) | byte(tail, 1, 8) | byte(tail, 0, 0),
        2 => tag | byte(tail, 1, 8) | byte(tail, 0, 0),
        1 => tag | byte(tail, 0, 0),
        _ => tag,
      };
      let t = low.wrapping_mul(M1).rotate_left(32).wrapping_mul(M2);
      h1 = h1.wrapping_add(t);
      h0 = h0.wrapping_add(t.rotate_left(32)).wrapping_mul(M1);
    }
  }
  h0 ^= h1;
  h1 = h1.wrapping_add(h0);

  Digest128::new(h0.rotate_left(32).wrapping_mul(M2), h1.rotate_left(32).wrapping_mul(M1))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fold_matches_expanded_form() {
    let (h, w): (u64, u64) = (0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210);
    let mut t = w.wrapping_mul(M1);
    t = t.rotate_left(32).wrapping_mul(M2);
    let expected = h.wrapping_add(t.rotate_left(32)).wrapping_mul(M1);
    assert_eq!(fold(h, w, M1, M2), expected);
  }

  #[test]
  fn every_tail_length_differs() {
    // Same prefix bytes, growing tail: each remainder arm must produce a
    // distinct digest.
    let data: [u8; 31] = core::array::from_fn(|i| (i as u8).wrapping_mul(37).wrapping_add(11));
    let mut seen = [Digest128::default(); 32];
    for len in 0..=31 {
      let d = hash(&data[..len], [7, 9]);
      assert!(!seen[..len].contains(&d), "collision at len {len}");
      seen[len] = d;
    }
  }

  #[test]
  fn trailing_zero_changes_digest() {
    let a = hash(b"abc", [0, 0]);
    let b = hash(b"abc\0", [0, 0]);
    assert_ne!(a, b);
  }

  #[test]
  fn seeds_enter_both_accumulators() {
    let base = hash(b"short message", [1, 2]);
    assert_ne!(base, hash(b"short message", [1, 3]));
    assert_ne!(base, hash(b"short message", [2, 2]));
  }
}
