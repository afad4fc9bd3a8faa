//! Error types for hashing operations.
//!
//! The hash functions themselves are total; the only reportable failure is a
//! caller supplying more key material than a keyed variant accepts.

use core::fmt;

/// Key material exceeds the maximum a keyed hash accepts.
///
/// Returned before any hash state is built, so a failed call has no side
/// effects. Keys are never silently truncated.
///
/// # Examples
///
/// ```
/// use traits::KeyLengthError;
///
/// fn check(key: &[u8]) -> Result<(), KeyLengthError> {
///   if key.len() > 16 {
///     return Err(KeyLengthError::new(key.len(), 16));
///   }
///   Ok(())
/// }
///
/// assert!(check(&[0u8; 16]).is_ok());
/// let err = check(&[0u8; 17]).unwrap_err();
/// assert_eq!(err.len(), 17);
/// assert_eq!(err.max(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct KeyLengthError {
  len: usize,
  max: usize,
}

impl KeyLengthError {
  /// Create a new key length error for a `len`-byte key against a `max`-byte limit.
  #[inline]
  #[must_use]
  pub const fn new(len: usize, max: usize) -> Self {
    Self { len, max }
  }

  /// Length of the rejected key, in bytes.
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Maximum accepted key length, in bytes.
  #[inline]
  #[must_use]
  pub const fn max(&self) -> usize {
    self.max
  }
}

impl fmt::Display for KeyLengthError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "key is {} bytes, at most {} bytes are accepted", self.len, self.max)
  }
}

impl core::error::Error for KeyLengthError {}
