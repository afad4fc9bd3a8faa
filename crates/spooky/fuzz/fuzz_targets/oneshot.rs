//! Fuzz target for one-shot and keyed hashing.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spooky::{Alpha, BLOCK_LEN, Digest128, FastHash, KEY_LEN_MAX, Spooky128, SpookyState, seed_from_key};
use traits::StreamingHash;

#[derive(Arbitrary, Debug)]
struct Input {
  key: Vec<u8>,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let digest = Spooky128::hash(&input.data);
  assert_eq!(digest, SpookyState::<Alpha>::hash(&input.data));
  assert_eq!(Digest128::from_le_bytes(digest.to_le_bytes()), digest);

  match seed_from_key(&input.key) {
    Ok(seed) => {
      assert!(input.key.len() <= KEY_LEN_MAX);
      let keyed = Spooky128::hash_keyed(&input.key, &input.data).unwrap();
      assert_eq!(keyed, Spooky128::hash_with_seed(seed, &input.data));
    }
    Err(err) => {
      assert!(input.key.len() > KEY_LEN_MAX);
      assert_eq!(err.len(), input.key.len());
      assert!(Spooky128::with_key(&input.key).is_err());
    }
  }

  // Prefix of a streamed message agrees with the one-shot path at the block boundary.
  if input.data.len() >= BLOCK_LEN {
    let (head, tail) = input.data.split_at(BLOCK_LEN);
    let mut state = Spooky128::init(0, 0);
    state.update(head);
    assert_eq!(state.finalize(), Spooky128::hash(head));
    state.update(tail);
    assert_eq!(state.finalize(), digest);
  }
});
