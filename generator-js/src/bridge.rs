use crate::error::StepError;
use crate::error::StepOutcome;
use crate::handle::IteratorHandle;
use crate::step::StepResult;
use std::iter::Fuse;

/// Adapts any `std::iter::Iterator` into an [`IteratorHandle`].
///
/// The iterator is fused so that exhaustion stays sticky even over iterators that would otherwise
/// resurrect after returning `None`.
pub struct IterHandle<I: Iterator> {
  inner: Fuse<I>,
}

/// Wraps a std iterator (or anything `IntoIterator`) as a handle.
pub fn from_iter<I: IntoIterator>(iter: I) -> IterHandle<I::IntoIter> {
  IterHandle {
    inner: iter.into_iter().fuse(),
  }
}

impl<I: Iterator> IteratorHandle for IterHandle<I> {
  type Item = I::Item;

  fn step(&mut self) -> StepOutcome<I::Item> {
    Ok(self.inner.next().into())
  }
}

/// Drives an [`IteratorHandle`] as a fallible `std::iter::Iterator`, so any handle can be
/// consumed by a plain `for` loop.
///
/// After the handle exhausts or fails, `next` returns `None` forever; the handle is never stepped
/// again.
pub struct Steps<H> {
  handle: H,
  done: bool,
}

pub fn steps<H: IteratorHandle>(handle: H) -> Steps<H> {
  Steps {
    handle,
    done: false,
  }
}

impl<H: IteratorHandle> Iterator for Steps<H> {
  type Item = Result<H::Item, StepError>;

  fn next(&mut self) -> Option<Result<H::Item, StepError>> {
    if self.done {
      return None;
    }
    match self.handle.step() {
      Ok(StepResult::Produced(value)) => Some(Ok(value)),
      Ok(StepResult::Exhausted) => {
        self.done = true;
        None
      }
      Err(err) => {
        self.done = true;
        Some(Err(err))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // An iterator that un-exhausts itself; the bridge must mask this.
  struct Flicker {
    calls: u32,
  }

  impl Iterator for Flicker {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
      self.calls += 1;
      match self.calls {
        1 => Some(1),
        2 => None,
        _ => Some(99),
      }
    }
  }

  #[test]
  fn bridged_iterator_exhaustion_is_sticky() {
    let mut handle = from_iter(Flicker { calls: 0 });
    assert_eq!(handle.step().unwrap(), StepResult::Produced(1));
    assert_eq!(handle.step().unwrap(), StepResult::Exhausted);
    assert_eq!(handle.step().unwrap(), StepResult::Exhausted);
    assert_eq!(handle.step().unwrap(), StepResult::Exhausted);
  }

  #[test]
  fn steps_drives_a_for_loop() {
    let handle = from_iter(vec![1, 2, 3]);
    let mut seen = Vec::new();
    for value in steps(handle) {
      seen.push(value.unwrap());
    }
    assert_eq!(seen, vec![1, 2, 3]);
  }
}
