//! Core hashing traits for the spooky workspace.
//!
//! This crate provides the traits that every hash in the workspace conforms
//! to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot seeded non-cryptographic hash | `Spooky128`, `Akron128` |
//! | [`StreamingHash`] | Incremental `update` / `finalize` state | `SpookyState` |
//!
//! # Error Types
//!
//! - [`KeyLengthError`] - Key material longer than a keyed hash accepts
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;
#[cfg(feature = "std")]
pub mod io;
mod streaming;

pub use error::KeyLengthError;
pub use fast_hash::FastHash;
pub use streaming::StreamingHash;
