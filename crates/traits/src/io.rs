//! I/O adapters for streaming hashes.
//!
//! [`HashReader`] and [`HashWriter`] pass bytes through to an inner
//! reader/writer while feeding exactly the transferred bytes to a
//! [`StreamingHash`] state (short reads and short writes included).
//!
//! # Example
//!
//! ```rust
//! # use traits::{StreamingHash, io::HashReader};
//! # #[derive(Clone, Default)]
//! # struct Len(u64);
//! # impl StreamingHash for Len {
//! #   const OUTPUT_SIZE: usize = 8;
//! #   type Output = u64;
//! #   fn new() -> Self { Self(0) }
//! #   fn update(&mut self, data: &[u8]) { self.0 += data.len() as u64; }
//! #   fn finalize(&self) -> Self::Output { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader: HashReader<_, Len> = HashReader::new(Cursor::new(vec![0u8; 1000]));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.hash(), 1000);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, IoSlice, IoSliceMut, Read, Write};

use crate::StreamingHash;

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> io::Result<usize>
where
  R: Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> io::Result<usize>
where
  R: Read,
{
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let to_hash = remaining.min(buf.len());
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

/// Hash only the prefix the inner writer accepted.
#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> io::Result<usize>
where
  W: Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn write_vectored_and_update<W>(
  inner: &mut W,
  bufs: &[IoSlice<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> io::Result<usize>
where
  W: Write,
{
  let n = inner.write_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let to_hash = remaining.min(buf.len());
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

/// Wraps a [`Read`] and hashes every byte read.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `H`: The streaming hash state (e.g., `SpookyState`)
#[derive(Clone, Debug)]
pub struct HashReader<R, H: StreamingHash> {
  inner: R,
  hasher: H,
}

impl<R, H: StreamingHash> HashReader<R, H> {
  /// Create a new reader wrapper with a fresh default state.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self::with_hasher(inner, H::new())
  }

  /// Create a new reader wrapper around an existing (e.g. seeded) state.
  #[inline]
  #[must_use]
  pub fn with_hasher(inner: R, hasher: H) -> Self {
    Self { inner, hasher }
  }

  /// Hash of everything read so far.
  ///
  /// This does not finalize the state; further reads continue the message.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a reference to the underlying state.
  #[inline]
  pub fn hasher(&self) -> &H {
    &self.hasher
  }

  /// Unwrap, returning the inner reader and the hash.
  #[inline]
  pub fn into_parts(self) -> (R, H::Output) {
    let hash = self.hasher.finalize();
    (self.inner, hash)
  }

  /// Unwrap, returning the inner reader and discarding the hash.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  ///
  /// Bytes read directly from the inner reader are not hashed.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: Read, H: StreamingHash> Read for HashReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`] and hashes every byte the inner writer accepts.
///
/// Only the prefix reported as written is hashed, so a short write followed
/// by a retry of the remainder still hashes each byte exactly once.
#[derive(Clone, Debug)]
pub struct HashWriter<W, H: StreamingHash> {
  inner: W,
  hasher: H,
}

impl<W, H: StreamingHash> HashWriter<W, H> {
  /// Create a new writer wrapper with a fresh default state.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self::with_hasher(inner, H::new())
  }

  /// Create a new writer wrapper around an existing (e.g. seeded) state.
  #[inline]
  #[must_use]
  pub fn with_hasher(inner: W, hasher: H) -> Self {
    Self { inner, hasher }
  }

  /// Hash of everything written so far.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a reference to the underlying state.
  #[inline]
  pub fn hasher(&self) -> &H {
    &self.hasher
  }

  /// Unwrap, returning the inner writer and the hash.
  #[inline]
  pub fn into_parts(self) -> (W, H::Output) {
    let hash = self.hasher.finalize();
    (self.inner, hash)
  }

  /// Unwrap, returning the inner writer and discarding the hash.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: Write, H: StreamingHash> Write for HashWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    write_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

#[cfg(test)]
mod tests {
  use std::{io::Cursor, vec, vec::Vec};

  use super::*;

  /// Order-sensitive toy hash for adapter tests.
  #[derive(Clone, Default, Debug)]
  struct Fnv(u64);

  impl StreamingHash for Fnv {
    const OUTPUT_SIZE: usize = 8;
    type Output = u64;

    fn new() -> Self {
      Self(0xcbf2_9ce4_8422_2325)
    }

    fn update(&mut self, data: &[u8]) {
      for &b in data {
        self.0 = (self.0 ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3);
      }
    }

    fn finalize(&self) -> u64 {
      self.0
    }

    fn reset(&mut self) {
      *self = Self::new();
    }
  }

  /// Writer that accepts at most `cap` bytes per call.
  struct Trickle {
    out: Vec<u8>,
    cap: usize,
  }

  impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      let n = buf.len().min(self.cap);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  fn data() -> Vec<u8> {
    (0..1000u32).map(|i| (i.wrapping_mul(31) >> 2) as u8).collect()
  }

  #[test]
  fn reader_hashes_all_bytes() {
    let data = data();
    let mut reader: HashReader<_, Fnv> = HashReader::new(Cursor::new(data.clone()));
    let mut sink = Vec::new();
    io::copy(&mut reader, &mut sink).unwrap();
    assert_eq!(sink, data);
    assert_eq!(reader.hash(), Fnv::hash(&data));
  }

  #[test]
  fn reader_vectored() {
    let data = data();
    let mut reader: HashReader<_, Fnv> = HashReader::new(Cursor::new(data.clone()));
    let mut a = vec![0u8; 100];
    let mut b = vec![0u8; 50];
    let n = reader
      .read_vectored(&mut [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b)])
      .unwrap();
    assert_eq!(n, 150);
    assert_eq!(reader.hash(), Fnv::hash(&data[..150]));
  }

  #[test]
  fn writer_short_writes_hash_once() {
    let data = data();
    let mut writer: HashWriter<_, Fnv> = HashWriter::new(Trickle { out: Vec::new(), cap: 7 });
    writer.write_all(&data).unwrap();
    let (inner, hash) = writer.into_parts();
    assert_eq!(inner.out, data);
    assert_eq!(hash, Fnv::hash(&data));
  }

  #[test]
  fn writer_vectored_partial() {
    let mut writer: HashWriter<_, Fnv> = HashWriter::new(Trickle { out: Vec::new(), cap: 5 });
    let n = writer
      .write_vectored(&[IoSlice::new(b"abc"), IoSlice::new(b"defgh")])
      .unwrap();
    // default write_vectored writes the first non-empty buffer only
    assert_eq!(n, 3);
    assert_eq!(writer.hash(), Fnv::hash(b"abc"));
  }

  #[test]
  fn with_hasher_continues_state() {
    let mut h = Fnv::new();
    h.update(b"prefix");
    let mut writer = HashWriter::with_hasher(Vec::new(), h);
    writer.write_all(b"-suffix").unwrap();
    assert_eq!(writer.hash(), Fnv::hash(b"prefix-suffix"));
  }
}
