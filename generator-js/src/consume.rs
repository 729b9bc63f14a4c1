use crate::error::StepError;
use crate::error::StepOutcome;
use crate::handle::Boundedness;
use crate::handle::IteratorHandle;
use crate::step::StepResult;

/// Bounded collection: step at most `n` times, collecting produced values in order.
///
/// Stops early on exhaustion. Never steps more than `n` times, which makes it the safe way to
/// consume an unbounded sequence.
pub fn take<H>(handle: &mut H, n: usize) -> Result<Vec<H::Item>, StepError>
where
  H: IteratorHandle + ?Sized,
{
  let mut out = Vec::new();
  for _ in 0..n {
    match handle.step()? {
      StepResult::Produced(value) => out.push(value),
      StepResult::Exhausted => break,
    }
  }
  Ok(out)
}

/// Full drain: step until exhaustion, collecting every produced value.
///
/// Only valid for finite sequences. A handle that advertises `Boundedness::Unbounded` is refused
/// with `StepError::Misuse`; on an `Unknown` handle that never terminates, this does not
/// terminate either (a precondition violation, not a handled failure).
pub fn drain_all<H>(handle: &mut H) -> Result<Vec<H::Item>, StepError>
where
  H: IteratorHandle + ?Sized,
{
  if handle.boundedness() == Boundedness::Unbounded {
    return Err(StepError::Misuse("drain_all on a handle that advertises itself unbounded"));
  }
  let mut out = Vec::new();
  loop {
    match handle.step()? {
      StepResult::Produced(value) => out.push(value),
      StepResult::Exhausted => return Ok(out),
    }
  }
}

/// Transform wrapper: one inner step per outer step, mapping produced values through `f`.
///
/// A failure from `f` surfaces as the step error and leaves the wrapper exhausted.
pub struct Map<H, F> {
  inner: H,
  f: F,
  failed: bool,
}

/// Wraps `handle` so produced values pass through the pure mapping `f`.
pub fn map<H, U>(
  handle: H,
  mut f: impl FnMut(H::Item) -> U,
) -> Map<H, impl FnMut(H::Item) -> Result<U, StepError>>
where
  H: IteratorHandle,
{
  try_map(handle, move |value| Ok(f(value)))
}

/// Fallible [`map`]: the mapping itself may fail, and its error propagates to the `step` caller
/// as a computation failure would.
pub fn try_map<H, U, F>(handle: H, f: F) -> Map<H, F>
where
  H: IteratorHandle,
  F: FnMut(H::Item) -> Result<U, StepError>,
{
  Map {
    inner: handle,
    f,
    failed: false,
  }
}

impl<H, U, F> IteratorHandle for Map<H, F>
where
  H: IteratorHandle,
  F: FnMut(H::Item) -> Result<U, StepError>,
{
  type Item = U;

  fn step(&mut self) -> StepOutcome<U> {
    if self.failed {
      return Ok(StepResult::Exhausted);
    }
    match self.inner.step() {
      Ok(StepResult::Produced(value)) => match (self.f)(value) {
        Ok(mapped) => Ok(StepResult::Produced(mapped)),
        Err(err) => {
          self.failed = true;
          Err(err)
        }
      },
      Ok(StepResult::Exhausted) => Ok(StepResult::Exhausted),
      Err(err) => {
        self.failed = true;
        Err(err)
      }
    }
  }

  fn boundedness(&self) -> Boundedness {
    self.inner.boundedness()
  }
}

/// Filter wrapper: steps the inner handle until a value satisfies the predicate or the inner
/// handle exhausts.
///
/// Note that one outer step may take many inner steps; on an unbounded inner sequence whose tail
/// never satisfies the predicate, a single step does not terminate.
pub struct Filter<H, P> {
  inner: H,
  predicate: P,
  failed: bool,
}

/// Wraps `handle` so only values satisfying `predicate` are produced.
pub fn filter<H>(
  handle: H,
  mut predicate: impl FnMut(&H::Item) -> bool,
) -> Filter<H, impl FnMut(&H::Item) -> Result<bool, StepError>>
where
  H: IteratorHandle,
{
  try_filter(handle, move |value| Ok(predicate(value)))
}

/// Fallible [`filter`]: the predicate itself may fail.
pub fn try_filter<H, P>(handle: H, predicate: P) -> Filter<H, P>
where
  H: IteratorHandle,
  P: FnMut(&H::Item) -> Result<bool, StepError>,
{
  Filter {
    inner: handle,
    predicate,
    failed: false,
  }
}

impl<H, P> IteratorHandle for Filter<H, P>
where
  H: IteratorHandle,
  P: FnMut(&H::Item) -> Result<bool, StepError>,
{
  type Item = H::Item;

  fn step(&mut self) -> StepOutcome<H::Item> {
    if self.failed {
      return Ok(StepResult::Exhausted);
    }
    loop {
      match self.inner.step() {
        Ok(StepResult::Produced(value)) => match (self.predicate)(&value) {
          Ok(true) => return Ok(StepResult::Produced(value)),
          Ok(false) => {}
          Err(err) => {
            self.failed = true;
            return Err(err);
          }
        },
        Ok(StepResult::Exhausted) => return Ok(StepResult::Exhausted),
        Err(err) => {
          self.failed = true;
          return Err(err);
        }
      }
    }
  }

  fn boundedness(&self) -> Boundedness {
    self.inner.boundedness()
  }
}

/// Sequential splice of two handles: all of `a`'s values, then all of `b`'s.
///
/// This is the handle-level counterpart of coroutine delegation, for callers composing sequences
/// outside any coroutine body.
pub struct Chain<A, B> {
  a: A,
  b: B,
  a_done: bool,
  failed: bool,
}

pub fn chain<A, B>(a: A, b: B) -> Chain<A, B>
where
  A: IteratorHandle,
  B: IteratorHandle<Item = A::Item>,
{
  Chain {
    a,
    b,
    a_done: false,
    failed: false,
  }
}

impl<A, B> IteratorHandle for Chain<A, B>
where
  A: IteratorHandle,
  B: IteratorHandle<Item = A::Item>,
{
  type Item = A::Item;

  fn step(&mut self) -> StepOutcome<A::Item> {
    if self.failed {
      return Ok(StepResult::Exhausted);
    }
    if !self.a_done {
      match self.a.step() {
        Ok(StepResult::Produced(value)) => return Ok(StepResult::Produced(value)),
        Ok(StepResult::Exhausted) => self.a_done = true,
        Err(err) => {
          self.failed = true;
          return Err(err);
        }
      }
    }
    match self.b.step() {
      Ok(result) => Ok(result),
      Err(err) => {
        self.failed = true;
        Err(err)
      }
    }
  }

  fn boundedness(&self) -> Boundedness {
    match (self.a.boundedness(), self.b.boundedness()) {
      (Boundedness::Unbounded, _) | (_, Boundedness::Unbounded) => Boundedness::Unbounded,
      (Boundedness::Bounded, Boundedness::Bounded) => Boundedness::Bounded,
      _ => Boundedness::Unknown,
    }
  }
}
