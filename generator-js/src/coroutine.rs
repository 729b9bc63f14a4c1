use crate::error::StepError;
use crate::error::StepOutcome;
use crate::handle::Boundedness;
use crate::handle::BoxedHandle;
use crate::handle::IteratorHandle;
use crate::source::IterableSource;
use crate::step::StepResult;
use serde::Deserialize;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::trace;

/// Externally observable state of a [`Coroutine`].
///
/// There is no observable `Running`: the engine only runs a body inside a `step` call, and by the
/// time the call returns the coroutine is `Suspended` or `Completed` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoroutineStatus {
  /// Created with its arguments captured, but no body code has run yet.
  NotStarted,
  /// Parked at a suspension point (or inside a delegation), ready to resume.
  Suspended,
  /// The body ran to its end or failed. Terminal.
  Completed,
}

/// What a body instructs the engine to do after running one segment.
pub enum Flow<Y> {
  /// Suspend here and hand the value to the caller.
  Yield(Y),
  /// Splice an entire child sequence into the output, then continue with the segment after the
  /// delegation point.
  Delegate(BoxedHandle<Y>),
  /// The body has run to its end.
  Return,
}

/// A suspendable routine, written as an explicit state machine.
///
/// This is the state-machine transform applied by hand: the implementor struct holds the program
/// counter (which suspension point to continue from, typically a small enum) and every local that
/// must survive suspension (loop counters, accumulators, captured parameters). `resume` runs from
/// the last suspension point until the next one and reports how it stopped.
///
/// The engine calls `resume` exactly once per produced value, so an implementor is free to sit in
/// an unbounded produce-one-value loop; laziness is preserved by construction.
pub trait CoroutineBody {
  type Yield;
  type Resume;

  /// Run from the last suspension point to the next one.
  ///
  /// `resume` is the value passed back into the suspension point by `step_with`, or `None` when
  /// the caller used plain `step` (the no-value sentinel).
  fn resume(&mut self, resume: Option<Self::Resume>) -> Result<Flow<Self::Yield>, StepError>;

  /// Size hint forwarded to consumers. Defaults to `Unknown`.
  fn boundedness(&self) -> Boundedness {
    Boundedness::Unknown
  }
}

/// The coroutine engine: drives a [`CoroutineBody`] through the iterator protocol.
///
/// The engine owns everything the body does not: observable status, sticky exhaustion after
/// completion, poisoning after an error, resume-value plumbing, and delegation bookkeeping. One
/// `step` performs exactly one unit of body work (one `resume` call), except when crossing a
/// delegation boundary, where the parent continues within the same step once the child exhausts.
pub struct Coroutine<B: CoroutineBody> {
  body: B,
  status: CoroutineStatus,
  delegate: Option<BoxedHandle<B::Yield>>,
  boundedness: Option<Boundedness>,
}

impl<B: CoroutineBody> Coroutine<B> {
  pub fn new(body: B) -> Coroutine<B> {
    Coroutine {
      body,
      status: CoroutineStatus::NotStarted,
      delegate: None,
      boundedness: None,
    }
  }

  pub fn status(&self) -> CoroutineStatus {
    self.status
  }

  /// Overrides the body's size hint, e.g. to mark a counter coroutine unbounded so `drain_all`
  /// refuses it.
  pub fn with_boundedness(mut self, hint: Boundedness) -> Coroutine<B> {
    self.boundedness = Some(hint);
    self
  }

  /// Advance one value, passing `resume` back into the suspension point being continued.
  ///
  /// The value is discarded in two cases: on the very first step (no suspension point has been
  /// reached yet, so there is nothing to evaluate it at), and while a delegation is active (the
  /// child speaks the plain handle protocol).
  pub fn step_with(&mut self, resume: B::Resume) -> StepOutcome<B::Yield> {
    let resume = match self.status {
      CoroutineStatus::NotStarted => None,
      _ if self.delegate.is_some() => None,
      _ => Some(resume),
    };
    self.advance(resume)
  }

  fn advance(&mut self, mut resume: Option<B::Resume>) -> StepOutcome<B::Yield> {
    if self.status == CoroutineStatus::Completed {
      return Ok(StepResult::Exhausted);
    }
    trace!(status = ?self.status, "resume");
    loop {
      // An active delegation shadows the parent body entirely until the child exhausts.
      if let Some(child) = self.delegate.as_mut() {
        match child.step() {
          Ok(StepResult::Produced(value)) => {
            self.status = CoroutineStatus::Suspended;
            return Ok(StepResult::Produced(value));
          }
          Ok(StepResult::Exhausted) => {
            trace!("delegated child exhausted, resuming parent");
            self.delegate = None;
            resume = None;
          }
          Err(err) => {
            trace!("delegated child failed, poisoning coroutine");
            self.complete();
            return Err(err);
          }
        }
        continue;
      }
      match self.body.resume(resume.take()) {
        Ok(Flow::Yield(value)) => {
          trace!("suspended at yield");
          self.status = CoroutineStatus::Suspended;
          return Ok(StepResult::Produced(value));
        }
        Ok(Flow::Delegate(child)) => {
          trace!("delegation started");
          self.status = CoroutineStatus::Suspended;
          self.delegate = Some(child);
        }
        Ok(Flow::Return) => {
          trace!("completed");
          self.complete();
          return Ok(StepResult::Exhausted);
        }
        Err(err) => {
          trace!("body failed, poisoning coroutine");
          self.complete();
          return Err(err);
        }
      }
    }
  }

  fn complete(&mut self) {
    self.status = CoroutineStatus::Completed;
    self.delegate = None;
  }
}

impl<B: CoroutineBody> IteratorHandle for Coroutine<B> {
  type Item = B::Yield;

  fn step(&mut self) -> StepOutcome<B::Yield> {
    self.advance(None)
  }

  fn boundedness(&self) -> Boundedness {
    match self.status {
      // Nothing left either way.
      CoroutineStatus::Completed => Boundedness::Bounded,
      _ => self.boundedness.unwrap_or_else(|| self.body.boundedness()),
    }
  }
}

/// Body adapter for coroutines whose program counter and locals live naturally in a closure.
pub struct FnBody<F, Y, R> {
  f: F,
  _types: PhantomData<fn(Option<R>) -> Y>,
}

impl<F, Y, R> CoroutineBody for FnBody<F, Y, R>
where
  F: FnMut(Option<R>) -> Result<Flow<Y>, StepError>,
{
  type Yield = Y;
  type Resume = R;

  fn resume(&mut self, resume: Option<R>) -> Result<Flow<Y>, StepError> {
    (self.f)(resume)
  }
}

impl<F, Y, R> Coroutine<FnBody<F, Y, R>>
where
  F: FnMut(Option<R>) -> Result<Flow<Y>, StepError>,
{
  /// Builds a coroutine from a closure body. Each call to the closure is one resumption segment.
  pub fn from_fn(f: F) -> Coroutine<FnBody<F, Y, R>> {
    Coroutine::new(FnBody {
      f,
      _types: PhantomData,
    })
  }
}

/// Gives coroutines the iterable capability: each `iterator()` call manufactures a fresh engine
/// (and body) via the factory closure, independent of all previously produced ones.
pub struct CoroutineFactory<F> {
  make: F,
}

impl<F> CoroutineFactory<F> {
  pub fn new(make: F) -> CoroutineFactory<F> {
    CoroutineFactory { make }
  }
}

impl<B, F> IterableSource for CoroutineFactory<F>
where
  B: CoroutineBody,
  F: Fn() -> Coroutine<B>,
{
  type Item = B::Yield;
  type Handle = Coroutine<B>;

  fn iterator(&self) -> Coroutine<B> {
    (self.make)()
  }
}
