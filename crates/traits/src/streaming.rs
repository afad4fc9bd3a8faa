//! Incremental hashing traits.
//!
//! Streaming updates, non-destructive finalize, and reset support.

use core::fmt::Debug;

/// An incremental hash state producing a fixed-size output.
///
/// Implementations must satisfy the streaming invariant: for any message `M`
/// and any split of `M` into consecutive fragments, feeding the fragments in
/// order through [`update`](Self::update) and then calling
/// [`finalize`](Self::finalize) yields the same output as hashing `M` in one
/// call.
pub trait StreamingHash: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The hash output type.
  type Output: Copy + Eq + Debug;

  /// Create a new state with the algorithm's default seed.
  #[must_use]
  fn new() -> Self;

  /// Append `data` to the message.
  fn update(&mut self, data: &[u8]);

  /// Append multiple non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Append `std::io::IoSlice` buffers, in order.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the hash of everything appended so far.
  ///
  /// This method does not consume or modify the state: it may be called
  /// repeatedly, and further updates continue the same message.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the state to its freshly-initialised form.
  fn reset(&mut self);

  /// Hash `data` in one shot through a fresh default state.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Hash multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn hash_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader so every byte read is hashed.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::StreamingHash;
  /// # #[derive(Clone, Default)]
  /// # struct Sum(u8);
  /// # impl StreamingHash for Sum {
  /// #   const OUTPUT_SIZE: usize = 1;
  /// #   type Output = u8;
  /// #   fn new() -> Self { Self(0) }
  /// #   fn update(&mut self, data: &[u8]) {
  /// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
  /// #   }
  /// #   fn finalize(&self) -> Self::Output { self.0 }
  /// #   fn reset(&mut self) { self.0 = 0; }
  /// # }
  /// # use std::io::Cursor;
  /// let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// assert_eq!(reader.hash(), b'a'.wrapping_add(b'b').wrapping_add(b'c'));
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::HashReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::HashReader::new(inner)
  }

  /// Wrap a writer so every byte written is hashed.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::StreamingHash;
  /// # #[derive(Clone, Default)]
  /// # struct Sum(u8);
  /// # impl StreamingHash for Sum {
  /// #   const OUTPUT_SIZE: usize = 1;
  /// #   type Output = u8;
  /// #   fn new() -> Self { Self(0) }
  /// #   fn update(&mut self, data: &[u8]) {
  /// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
  /// #   }
  /// #   fn finalize(&self) -> Self::Output { self.0 }
  /// #   fn reset(&mut self) { self.0 = 0; }
  /// # }
  /// # use std::io::Write;
  /// let mut writer = Sum::writer(Vec::new());
  /// writer.write_all(b"hi")?;
  /// let (out, hash) = writer.into_parts();
  /// assert_eq!(out, b"hi".to_vec());
  /// assert_eq!(hash, b'h'.wrapping_add(b'i'));
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::HashWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::HashWriter::new(inner)
  }
}
