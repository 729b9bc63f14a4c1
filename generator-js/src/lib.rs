//! Lazy-sequence iterator and coroutine execution core for `ecma-rs`.
//!
//! This crate is the iteration-protocol half of the JS execution model, standalone and generic
//! over the host's value type. It provides:
//! - The iterator protocol ([`IteratorHandle`], [`StepResult`]): a single step-forward operation
//!   with sticky exhaustion, the ECMA-262 iterator-result contract as a tagged enum
//! - The iterable capability ([`IterableSource`]): fresh, independent handles on demand over
//!   ordered, character, associative and unique-value containers
//! - A coroutine engine ([`Coroutine`], [`CoroutineBody`]): generator semantics without native
//!   suspension, via the explicit state-machine transform — bodies keep their program counter and
//!   live locals as struct fields, the engine drives resumption, delegation (`yield*`-style
//!   splicing), resume values and poisoning
//! - A consumer layer ([`take`], [`drain_all`], [`map`], [`filter`], [`chain`]) and std
//!   `Iterator` bridges ([`from_iter`], [`steps`])
//!
//! # Laziness
//!
//! Exactly one value is computed per `step` call; nothing runs ahead of the consumer. Unbounded
//! sequences are therefore safe to define, and [`take`] is the safe way to consume them.
//! [`drain_all`] is only valid on finite sequences and refuses handles that advertise themselves
//! unbounded.
//!
//! # Execution model
//!
//! Strictly single-threaded and cooperative. Suspension happens only at a body's explicit
//! suspension points (a [`Flow::Yield`] or [`Flow::Delegate`] return); handles are stepped
//! through `&mut`, so exclusive stepping is enforced at compile time.

mod bridge;
mod consume;
mod coroutine;
mod error;
mod handle;
mod source;
mod step;

pub use crate::bridge::from_iter;
pub use crate::bridge::steps;
pub use crate::bridge::IterHandle;
pub use crate::bridge::Steps;
pub use crate::consume::chain;
pub use crate::consume::drain_all;
pub use crate::consume::filter;
pub use crate::consume::map;
pub use crate::consume::take;
pub use crate::consume::try_filter;
pub use crate::consume::try_map;
pub use crate::consume::Chain;
pub use crate::consume::Filter;
pub use crate::consume::Map;
pub use crate::coroutine::Coroutine;
pub use crate::coroutine::CoroutineBody;
pub use crate::coroutine::CoroutineFactory;
pub use crate::coroutine::CoroutineStatus;
pub use crate::coroutine::Flow;
pub use crate::coroutine::FnBody;
pub use crate::error::StepError;
pub use crate::error::StepOutcome;
pub use crate::handle::Boundedness;
pub use crate::handle::BoxedHandle;
pub use crate::handle::IteratorHandle;
pub use crate::source::CharHandle;
pub use crate::source::EntrySource;
pub use crate::source::IterableSource;
pub use crate::source::SnapshotHandle;
pub use crate::source::StrSource;
pub use crate::source::UniqueSource;
pub use crate::source::VecSource;
pub use crate::step::StepResult;
