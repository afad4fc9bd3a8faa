use core::fmt;

/// A 128-bit digest: two 64-bit output lanes.
///
/// `h1` and `h2` are the two values the C interface writes back
/// through its `hash1`/`hash2` in/out parameters. Equality is bitwise; the
/// lanes carry no further structure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest128 {
  h1: u64,
  h2: u64,
}

impl Digest128 {
  #[inline]
  #[must_use]
  pub const fn new(h1: u64, h2: u64) -> Self {
    Self { h1, h2 }
  }

  /// First output lane (`hash1`).
  #[inline]
  #[must_use]
  pub const fn h1(&self) -> u64 {
    self.h1
  }

  /// Second output lane (`hash2`).
  #[inline]
  #[must_use]
  pub const fn h2(&self) -> u64 {
    self.h2
  }

  /// Both lanes as `(hash1, hash2)`.
  #[inline]
  #[must_use]
  pub const fn lanes(&self) -> (u64, u64) {
    (self.h1, self.h2)
  }

  /// `h1` in the high half, `h2` in the low half (same order as `Display`).
  #[inline]
  #[must_use]
  pub const fn as_u128(&self) -> u128 {
    ((self.h1 as u128) << 64) | self.h2 as u128
  }

  /// Serialize as `h1.to_le_bytes() || h2.to_le_bytes()`.
  #[inline]
  #[must_use]
  pub const fn to_le_bytes(&self) -> [u8; 16] {
    (((self.h2 as u128) << 64) | self.h1 as u128).to_le_bytes()
  }

  /// Inverse of [`to_le_bytes`](Self::to_le_bytes).
  #[inline]
  #[must_use]
  pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
    let v = u128::from_le_bytes(bytes);
    Self {
      h1: v as u64,
      h2: (v >> 64) as u64,
    }
  }
}

impl From<(u64, u64)> for Digest128 {
  #[inline]
  fn from((h1, h2): (u64, u64)) -> Self {
    Self::new(h1, h2)
  }
}

impl From<Digest128> for (u64, u64) {
  #[inline]
  fn from(d: Digest128) -> Self {
    d.lanes()
  }
}

impl From<Digest128> for u128 {
  #[inline]
  fn from(d: Digest128) -> Self {
    d.as_u128()
  }
}

impl From<Digest128> for [u8; 16] {
  #[inline]
  fn from(d: Digest128) -> Self {
    d.to_le_bytes()
  }
}

impl fmt::LowerHex for Digest128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:016x}{:016x}", self.h1, self.h2)
  }
}

impl fmt::Display for Digest128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(self, f)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  const D: Digest128 = Digest128::new(0x0011_2233_4455_6677, 0x8899_aabb_ccdd_eeff);

  #[test]
  fn display_is_h1_then_h2() {
    assert_eq!(D.to_string(), "00112233445566778899aabbccddeeff");
    assert_eq!(format!("{D:x}"), D.to_string());
  }

  #[test]
  fn le_bytes_layout() {
    let bytes = D.to_le_bytes();
    assert_eq!(&bytes[..8], &0x0011_2233_4455_6677u64.to_le_bytes());
    assert_eq!(&bytes[8..], &0x8899_aabb_ccdd_eeffu64.to_le_bytes());
    assert_eq!(Digest128::from_le_bytes(bytes), D);
  }

  #[test]
  fn u128_matches_display_order() {
    assert_eq!(D.as_u128(), 0x0011_2233_4455_6677_8899_aabb_ccdd_eeff);
    assert_eq!(u128::from(D), D.as_u128());
  }

  #[test]
  fn tuple_conversions() {
    let t: (u64, u64) = D.into();
    assert_eq!(Digest128::from(t), D);
  }
}
