//! Optional diagnostics for finalization path selection.
//!
//! This module is behind `cfg(feature = "diag")` and explains which path a
//! message of a given length takes without affecting normal builds.

use crate::{
  SpookyState,
  mix::{BLOCK_LEN, BlockMix, Variant},
};

/// Which finalization a message of this length goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinalizePath {
  /// Below one block: the two-accumulator short path.
  Short,
  /// One block or more: block mixer plus four-fold final remix.
  Block,
}

impl FinalizePath {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Short => "short",
      Self::Block => "block",
    }
  }

  #[inline]
  #[must_use]
  const fn for_len(len: u64) -> Self {
    if len < BLOCK_LEN as u64 { Self::Short } else { Self::Block }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionDiag {
  pub len: u64,
  pub path: FinalizePath,
  pub variant: Variant,
  /// Whole blocks run through the mixer before finalization. Zero on the
  /// short path.
  pub blocks: u64,
  /// Bytes left for the padded final block (or the whole message on the
  /// short path).
  pub tail: usize,
}

const fn diagnose(len: u64, variant: Variant) -> SelectionDiag {
  let path = FinalizePath::for_len(len);
  let (blocks, tail) = match path {
    FinalizePath::Short => (0, len as usize),
    FinalizePath::Block => (len / BLOCK_LEN as u64, (len % BLOCK_LEN as u64) as usize),
  };
  SelectionDiag {
    len,
    path,
    variant,
    blocks,
    tail,
  }
}

/// Diagnose a one-shot hash of `len` bytes under mixer `V`.
#[inline]
#[must_use]
pub const fn oneshot<V: BlockMix>(len: usize) -> SelectionDiag {
  diagnose(len as u64, V::VARIANT)
}

/// Diagnose what `state.finalize()` would do right now.
#[inline]
#[must_use]
pub const fn state<V: BlockMix>(state: &SpookyState<V>) -> SelectionDiag {
  diagnose(state.len(), V::VARIANT)
}
