use crate::error::StepOutcome;
use serde::Deserialize;
use serde::Serialize;

/// Whether a handle is known to terminate.
///
/// Consumers that must not run forever (`drain_all`) use this to reject sequences that declare
/// themselves unbounded. `Unknown` handles are drained on the caller's own responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundedness {
  Bounded,
  Unbounded,
  Unknown,
}

/// The iterator protocol: a stateful cursor over a sequence, advanced one value at a time.
///
/// Contract, for every implementor:
/// - `step` computes at most one value per call; nothing is precomputed ahead of the caller.
/// - Exhaustion is sticky. Once `Ok(Exhausted)` is returned, every later `step` on the same
///   handle returns `Ok(Exhausted)` with no side effects.
/// - After `Err(_)`, the handle must be treated as exhausted by the caller.
///
/// Handles are stepped through `&mut`, so a handle has exactly one logical owner at a time;
/// callers needing shared access must serialize it externally.
pub trait IteratorHandle {
  type Item;

  /// Advance by one value.
  fn step(&mut self) -> StepOutcome<Self::Item>;

  /// Size class of the remaining sequence. Defaults to `Unknown`.
  fn boundedness(&self) -> Boundedness {
    Boundedness::Unknown
  }
}

/// Owned, type-erased handle, used wherever handles of differing concrete types must flow through
/// one seam (delegation being the main one).
pub type BoxedHandle<T> = Box<dyn IteratorHandle<Item = T>>;

impl<H: IteratorHandle + ?Sized> IteratorHandle for Box<H> {
  type Item = H::Item;

  fn step(&mut self) -> StepOutcome<Self::Item> {
    (**self).step()
  }

  fn boundedness(&self) -> Boundedness {
    (**self).boundedness()
  }
}

impl<H: IteratorHandle + ?Sized> IteratorHandle for &mut H {
  type Item = H::Item;

  fn step(&mut self) -> StepOutcome<Self::Item> {
    (**self).step()
  }

  fn boundedness(&self) -> Boundedness {
    (**self).boundedness()
  }
}
