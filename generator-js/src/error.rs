use crate::step::StepResult;
use std::error::Error;

/// Errors surfaced by `step` and the consumer helpers.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
  /// A coroutine body or a transform/filter stage failed while computing the next value.
  ///
  /// A handle that has reported this must be treated as exhausted; its behavior on further steps
  /// is not specified beyond "no resurrection" (this crate's own handles keep returning
  /// `Exhausted`).
  #[error("computation failed: {0}")]
  Computation(#[source] Box<dyn Error + Send + Sync>),

  /// An operation was invoked outside its documented preconditions, e.g. a full drain of a handle
  /// that advertises itself unbounded.
  #[error("misuse: {0}")]
  Misuse(&'static str),
}

impl StepError {
  /// Wraps an arbitrary failure from a coroutine body or transform stage.
  pub fn computation(err: impl Into<Box<dyn Error + Send + Sync>>) -> StepError {
    StepError::Computation(err.into())
  }
}

/// Result of one protocol step: a value, exhaustion, or a propagated failure.
pub type StepOutcome<T> = Result<StepResult<T>, StepError>;
