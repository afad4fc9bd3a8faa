//! Fuzz target for the streaming API.
//!
//! Arbitrary sequences of update calls must match the one-shot digest.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spooky::{Akron, Alpha, BlockMix, Jasper, SpookyHash, SpookyState};

#[derive(Arbitrary, Debug)]
struct Input {
  seed: [u64; 2],
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  check::<Alpha>(&input);
  check::<Akron>(&input);
  check::<Jasper>(&input);
});

fn check<V: BlockMix>(input: &Input) {
  let data = &input.data;
  let expected = SpookyHash::<V>::oneshot(data, input.seed[0], input.seed[1]);

  let mut state = SpookyState::<V>::with_seed(input.seed);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      // Up to two blocks and a bit, so top-off and multi-block paths both run.
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    state.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;

    // finalize must not disturb the stream.
    if chunk_idx % 7 == 0 {
      let prefix = SpookyHash::<V>::oneshot(&data[..end], input.seed[0], input.seed[1]);
      assert_eq!(state.finalize(), prefix, "{} prefix {end} mismatch", V::VARIANT);
    }
  }

  assert_eq!(state.finalize(), expected, "{} streaming mismatch", V::VARIANT);
}
