//! SpookyHash: an incremental 128-bit non-cryptographic hash.
//!
//! Messages are folded through a 12-lane, 96-byte block mixer. Messages
//! shorter than one block take a separate two-accumulator path that starts
//! faster. The state buffers at most one partial block, so `update` may be
//! called with any slicing of the message and the digest is the same.
//!
//! # Variants
//!
//! | Type | Mixer | Notes |
//! |------|-------|-------|
//! | [`Spooky128`] | [`Alpha`] | Canonical |
//! | [`Akron128`] | [`Akron`] | Rotate-then-xor wiring |
//! | [`Jasper128`] | [`Jasper`] | Multiply-in data |
//!
//! All three share the short path, priming, padding, and finalization. They
//! disagree on every message of 96 bytes or more.
//!
//! # Example
//!
//! ```rust
//! use spooky::{Digest128, FastHash, Spooky128, StreamingHash};
//!
//! // One-shot
//! let d = Spooky128::oneshot(b"hello world", 0, 0);
//! assert_eq!(d, Spooky128::hash(b"hello world"));
//!
//! // Streaming
//! let mut state = spooky::SpookyState::<spooky::Alpha>::new();
//! state.update(b"hello ");
//! state.update(b"world");
//! assert_eq!(state.finalize(), d);
//!
//! // Keyed
//! let keyed: Digest128 = Spooky128::hash_keyed(b"secret", b"hello world")?;
//! assert_ne!(keyed, d);
//! # Ok::<(), spooky::KeyLengthError>(())
//! ```
//!
//! # Output
//!
//! [`Digest128`] holds the two 64-bit lanes `(h1, h2)`. Use
//! [`Digest128::to_le_bytes`] for a portable byte form.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. The `std` feature (default) adds the
//! `reader`/`writer` adapters of [`StreamingHash`].
//!
//! ```toml
//! [dependencies]
//! spooky = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "diag")]
pub mod diag;
mod digest;
mod engine;
pub mod mix;
mod short;
mod state;

pub use digest::Digest128;
pub use engine::{Akron128, BuildSpooky, Jasper128, KEY_LEN_MAX, Spooky128, SpookyHash, seed_from_key};
pub use mix::{Akron, Alpha, BLOCK_LEN, BlockMix, Jasper, Variant};
pub use state::SpookyState;
// Re-export traits for convenience
#[cfg(feature = "std")]
pub use traits::io;
pub use traits::{FastHash, KeyLengthError, StreamingHash};
