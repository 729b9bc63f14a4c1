use serde::Deserialize;
use serde::Serialize;

/// The outcome of advancing an iterator handle by one step.
///
/// This is the spec-shaped `{ value, done }` iterator-result record of ECMA-262, expressed as a
/// tagged enum so the "done with a value" confusion is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepResult<T> {
  /// The handle produced a value; more values may follow.
  Produced(T),
  /// The sequence has ended. Exhaustion is sticky: every later step on the same handle must
  /// return `Exhausted` again.
  Exhausted,
}

impl<T> StepResult<T> {
  pub fn is_exhausted(&self) -> bool {
    matches!(self, StepResult::Exhausted)
  }

  /// The produced value, if any.
  pub fn produced(self) -> Option<T> {
    match self {
      StepResult::Produced(value) => Some(value),
      StepResult::Exhausted => None,
    }
  }

  pub fn as_ref(&self) -> StepResult<&T> {
    match self {
      StepResult::Produced(value) => StepResult::Produced(value),
      StepResult::Exhausted => StepResult::Exhausted,
    }
  }

  /// Map the produced value, leaving `Exhausted` untouched.
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StepResult<U> {
    match self {
      StepResult::Produced(value) => StepResult::Produced(f(value)),
      StepResult::Exhausted => StepResult::Exhausted,
    }
  }
}

impl<T> From<Option<T>> for StepResult<T> {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(value) => StepResult::Produced(value),
      None => StepResult::Exhausted,
    }
  }
}
