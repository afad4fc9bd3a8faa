#![cfg(feature = "std")]

use std::io::{self, Read, Write};

use spooky::{Akron, Alpha, Spooky128, SpookyHash, SpookyState, StreamingHash};

fn data(len: usize) -> Vec<u8> {
  (0..len).map(|i| (i as u8).wrapping_mul(29).wrapping_add(1)).collect()
}

#[test]
fn reader_hashes_what_it_reads() {
  let bytes = data(1000);
  let mut reader = SpookyState::<Alpha>::reader(&bytes[..]);
  let mut sink = Vec::new();
  reader.read_to_end(&mut sink).unwrap();
  assert_eq!(sink, bytes);
  assert_eq!(reader.hash(), Spooky128::oneshot(&bytes, 0, 0));
}

#[test]
fn writer_hashes_what_it_writes() {
  let bytes = data(777);
  let mut writer = SpookyState::<Akron>::writer(Vec::new());
  for chunk in bytes.chunks(50) {
    writer.write_all(chunk).unwrap();
  }
  writer.flush().unwrap();
  let (out, digest) = writer.into_parts();
  assert_eq!(out, bytes);
  assert_eq!(digest, SpookyHash::<Akron>::oneshot(&bytes, 0, 0));
}

#[test]
fn seeded_state_through_copy() {
  let bytes = data(321);
  let mut reader = spooky::io::HashReader::with_hasher(&bytes[..], Spooky128::init(8, 9));
  io::copy(&mut reader, &mut io::sink()).unwrap();
  assert_eq!(reader.hash(), Spooky128::oneshot(&bytes, 8, 9));
}
