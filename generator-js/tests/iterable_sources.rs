use generator_js::{
  drain_all, take, Coroutine, CoroutineFactory, EntrySource, Flow, IterableSource, IteratorHandle,
  StepResult, StrSource, UniqueSource, VecSource,
};
use std::collections::{BTreeMap, BTreeSet};

#[test]
fn fresh_handles_are_independent() {
  let source = VecSource::new(vec![1, 2, 3]);
  let mut a = source.iterator();
  let mut b = source.iterator();

  // Fully stepping one handle must not advance the other.
  assert_eq!(drain_all(&mut a).unwrap(), vec![1, 2, 3]);
  assert_eq!(b.step().unwrap(), StepResult::Produced(1));
  assert_eq!(drain_all(&mut b).unwrap(), vec![2, 3]);
}

#[test]
fn obtaining_an_iterator_does_not_mutate_the_source() {
  let source = VecSource::new(vec![7, 8]);
  drain_all(&mut source.iterator()).unwrap();
  drain_all(&mut source.iterator()).unwrap();
  assert_eq!(drain_all(&mut source.iterator()).unwrap(), vec![7, 8]);
  assert_eq!(source.len(), 2);
  assert!(!source.is_empty());
}

#[test]
fn string_handles_are_independent_when_interleaved() {
  let source = StrSource::new("ab");
  let mut a = source.iterator();
  let mut b = source.iterator();

  assert_eq!(a.step().unwrap(), StepResult::Produced('a'));
  assert_eq!(b.step().unwrap(), StepResult::Produced('a'));
  assert_eq!(a.step().unwrap(), StepResult::Produced('b'));
  assert_eq!(a.step().unwrap(), StepResult::Exhausted);
  // `b` is unmoved by `a` reaching exhaustion.
  assert_eq!(b.step().unwrap(), StepResult::Produced('b'));
  assert_eq!(b.step().unwrap(), StepResult::Exhausted);
}

#[test]
fn entry_handles_are_independent_when_interleaved() {
  let mut map = BTreeMap::new();
  map.insert("a", 1);
  map.insert("b", 2);
  let source = EntrySource::from(map);
  let mut x = source.iterator();
  let mut y = source.iterator();

  assert_eq!(x.step().unwrap(), StepResult::Produced(("a", 1)));
  assert_eq!(x.step().unwrap(), StepResult::Produced(("b", 2)));
  assert_eq!(y.step().unwrap(), StepResult::Produced(("a", 1)));
  assert_eq!(x.step().unwrap(), StepResult::Exhausted);
  assert_eq!(y.step().unwrap(), StepResult::Produced(("b", 2)));
}

#[test]
fn unique_handles_are_independent_when_interleaved() {
  let set: BTreeSet<i32> = [2, 1].into_iter().collect();
  let source = UniqueSource::from(set);
  let mut x = source.iterator();
  let mut y = source.iterator();

  assert_eq!(x.step().unwrap(), StepResult::Produced(1));
  assert_eq!(y.step().unwrap(), StepResult::Produced(1));
  assert_eq!(x.step().unwrap(), StepResult::Produced(2));
  assert_eq!(x.step().unwrap(), StepResult::Exhausted);
  assert_eq!(y.step().unwrap(), StepResult::Produced(2));
  assert_eq!(y.step().unwrap(), StepResult::Exhausted);
}

#[test]
fn string_source_walks_chars_not_bytes() {
  let source = StrSource::new("aé☃");
  assert_eq!(drain_all(&mut source.iterator()).unwrap(), vec!['a', 'é', '☃']);
}

#[test]
fn entry_source_enumerates_in_repeatable_sorted_order() {
  let mut map = BTreeMap::new();
  map.insert("b", 2);
  map.insert("a", 1);
  map.insert("c", 3);
  let source = EntrySource::from(map);

  let first = drain_all(&mut source.iterator()).unwrap();
  let second = drain_all(&mut source.iterator()).unwrap();
  assert_eq!(first, vec![("a", 1), ("b", 2), ("c", 3)]);
  assert_eq!(first, second);
}

#[test]
fn unique_source_enumerates_values_in_sorted_order() {
  let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
  let source = UniqueSource::from(set);
  assert_eq!(drain_all(&mut source.iterator()).unwrap(), vec![1, 2, 3]);
}

#[test]
fn coroutine_factory_manufactures_independent_coroutines() {
  let factory = CoroutineFactory::new(|| {
    let mut n = 0;
    Coroutine::from_fn(move |_: Option<()>| {
      n += 1;
      Ok(Flow::Yield(n))
    })
  });

  let mut a = factory.iterator();
  let mut b = factory.iterator();
  assert_eq!(take(&mut a, 3).unwrap(), vec![1, 2, 3]);
  // `b` starts from scratch regardless of how far `a` was driven.
  assert_eq!(take(&mut b, 2).unwrap(), vec![1, 2]);
}
