use crate::error::StepOutcome;
use crate::handle::Boundedness;
use crate::handle::IteratorHandle;
use crate::step::StepResult;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;

/// The iterable capability: a source that can manufacture a fresh iteration cursor on demand.
///
/// Every `iterator()` call returns a new handle positioned at the start. Handles over the same
/// source are fully independent (stepping one never advances or observes another), and obtaining
/// a handle never mutates the source.
pub trait IterableSource {
  type Item;
  type Handle: IteratorHandle<Item = Self::Item>;

  fn iterator(&self) -> Self::Handle;
}

/// Cursor over an immutable snapshot. All the container-backed sources in this module hand these
/// out; independence between handles falls out of each one holding its own cursor over a shared
/// `Arc` snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotHandle<T> {
  items: Arc<[T]>,
  next: usize,
}

impl<T: Clone> IteratorHandle for SnapshotHandle<T> {
  type Item = T;

  fn step(&mut self) -> StepOutcome<T> {
    match self.items.get(self.next) {
      Some(item) => {
        self.next += 1;
        Ok(StepResult::Produced(item.clone()))
      }
      None => Ok(StepResult::Exhausted),
    }
  }

  fn boundedness(&self) -> Boundedness {
    Boundedness::Bounded
  }
}

/// Finite ordered container source. Handles walk the elements front to back.
#[derive(Debug, Clone)]
pub struct VecSource<T> {
  items: Arc<[T]>,
}

impl<T> VecSource<T> {
  pub fn new(items: Vec<T>) -> VecSource<T> {
    VecSource {
      items: items.into(),
    }
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl<T> From<Vec<T>> for VecSource<T> {
  fn from(items: Vec<T>) -> VecSource<T> {
    VecSource::new(items)
  }
}

impl<T: Clone> IterableSource for VecSource<T> {
  type Item = T;
  type Handle = SnapshotHandle<T>;

  fn iterator(&self) -> SnapshotHandle<T> {
    SnapshotHandle {
      items: Arc::clone(&self.items),
      next: 0,
    }
  }
}

/// Character-like sequence source. Handles walk the text one `char` at a time (Unicode scalar
/// values, not bytes).
#[derive(Debug, Clone)]
pub struct StrSource {
  text: Arc<str>,
}

impl StrSource {
  pub fn new(text: impl Into<Arc<str>>) -> StrSource {
    StrSource { text: text.into() }
  }
}

impl IterableSource for StrSource {
  type Item = char;
  type Handle = CharHandle;

  fn iterator(&self) -> CharHandle {
    CharHandle {
      text: Arc::clone(&self.text),
      next_byte: 0,
    }
  }
}

/// Cursor over a shared string, advancing by whole `char`s.
#[derive(Debug, Clone)]
pub struct CharHandle {
  text: Arc<str>,
  next_byte: usize,
}

impl IteratorHandle for CharHandle {
  type Item = char;

  fn step(&mut self) -> StepOutcome<char> {
    match self.text[self.next_byte..].chars().next() {
      Some(c) => {
        self.next_byte += c.len_utf8();
        Ok(StepResult::Produced(c))
      }
      None => Ok(StepResult::Exhausted),
    }
  }

  fn boundedness(&self) -> Boundedness {
    Boundedness::Bounded
  }
}

/// Associative container source: enumerates `(key, value)` entries of a map snapshot in sorted
/// key order, so the order is repeatable for a given snapshot.
#[derive(Debug, Clone)]
pub struct EntrySource<K, V> {
  entries: Arc<[(K, V)]>,
}

impl<K: Ord, V> From<BTreeMap<K, V>> for EntrySource<K, V> {
  fn from(map: BTreeMap<K, V>) -> EntrySource<K, V> {
    EntrySource {
      entries: map.into_iter().collect(),
    }
  }
}

impl<K: Clone, V: Clone> IterableSource for EntrySource<K, V> {
  type Item = (K, V);
  type Handle = SnapshotHandle<(K, V)>;

  fn iterator(&self) -> SnapshotHandle<(K, V)> {
    SnapshotHandle {
      items: Arc::clone(&self.entries),
      next: 0,
    }
  }
}

/// Unique-value container source: enumerates the values of a set snapshot in sorted order.
#[derive(Debug, Clone)]
pub struct UniqueSource<T> {
  values: Arc<[T]>,
}

impl<T: Ord> From<BTreeSet<T>> for UniqueSource<T> {
  fn from(set: BTreeSet<T>) -> UniqueSource<T> {
    UniqueSource {
      values: set.into_iter().collect(),
    }
  }
}

impl<T: Clone> IterableSource for UniqueSource<T> {
  type Item = T;
  type Handle = SnapshotHandle<T>;

  fn iterator(&self) -> SnapshotHandle<T> {
    SnapshotHandle {
      items: Arc::clone(&self.values),
      next: 0,
    }
  }
}
