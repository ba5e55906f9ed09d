//! Element lifetime accounting: every element constructed inside a
//! `StaticVector` is dropped exactly once, by the vector or by whoever it was
//! handed to.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use static_vector::StaticVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Constructed(u32),
    Cloned(u32),
    Dropped(u32),
}

#[derive(Debug, Default, Clone)]
struct Ledger(Rc<RefCell<Vec<Event>>>);

impl Ledger {
    fn make(&self, id: u32) -> Tracked {
        self.0.borrow_mut().push(Event::Constructed(id));
        Tracked {
            id,
            ledger: self.clone(),
            panic_on_drop: false,
        }
    }

    fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    fn count(&self, matches: impl Fn(&Event) -> bool) -> usize {
        self.0.borrow().iter().filter(|event| matches(event)).count()
    }

    fn live(&self) -> usize {
        let created = self.count(|e| matches!(e, Event::Constructed(_) | Event::Cloned(_)));
        let dropped = self.count(|e| matches!(e, Event::Dropped(_)));
        created - dropped
    }

    fn dropped(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Dropped(id) => Some(id),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug)]
struct Tracked {
    id: u32,
    ledger: Ledger,
    panic_on_drop: bool,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.ledger.0.borrow_mut().push(Event::Cloned(self.id));
        Tracked {
            id: self.id,
            ledger: self.ledger.clone(),
            panic_on_drop: false,
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.0.borrow_mut().push(Event::Dropped(self.id));
        if self.panic_on_drop {
            panic!("drop of {} failed", self.id);
        }
    }
}

fn ids<const N: usize>(v: &StaticVector<Tracked, N>) -> Vec<u32> {
    v.iter().map(|t| t.id).collect()
}

#[test]
fn scope_exit_drops_every_emplaced_element_once() {
    let ledger = Ledger::default();
    {
        let mut v = StaticVector::<Tracked, 4>::new();
        for id in 0..3 {
            v.emplace_back(|| ledger.make(id));
        }
        assert_eq!(ledger.live(), v.len());
    }

    assert_eq!(
        ledger.events(),
        vec![
            Event::Constructed(0),
            Event::Constructed(1),
            Event::Constructed(2),
            Event::Dropped(0),
            Event::Dropped(1),
            Event::Dropped(2),
        ]
    );
    assert_eq!(ledger.live(), 0);
}

#[test]
fn emplace_constructs_exactly_once_without_clones() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 2>::new();
    v.emplace_back(|| ledger.make(7));
    v.push_back(ledger.make(8));

    assert_eq!(ledger.count(|e| matches!(e, Event::Constructed(_))), 2);
    assert_eq!(ledger.count(|e| matches!(e, Event::Cloned(_))), 0);
    assert_eq!(ledger.count(|e| matches!(e, Event::Dropped(_))), 0);
}

#[test]
fn live_count_matches_len_through_mixed_operations() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 6>::new();

    for id in 0..6 {
        v.push_back(ledger.make(id));
        assert_eq!(ledger.live(), v.len());
    }

    v.erase(1..3);
    assert_eq!(ids(&v), [0, 3, 4, 5]);
    assert_eq!(ledger.dropped(), [1, 2]);
    assert_eq!(ledger.live(), v.len());

    drop(v.pop_back());
    assert_eq!(ledger.live(), v.len());

    v.erase_at(0);
    assert_eq!(ids(&v), [3, 4]);
    assert_eq!(ledger.live(), v.len());

    let removed = v.remove(0);
    assert_eq!(ledger.live(), v.len() + 1);
    drop(removed);

    v.clear();
    assert_eq!(v.len(), 0);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn erase_empty_range_drops_nothing() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 3>::new();
    for id in 0..3 {
        v.push_back(ledger.make(id));
    }
    v.erase(2..2);
    assert_eq!(ids(&v), [0, 1, 2]);
    assert!(ledger.dropped().is_empty());
}

#[test]
fn rejected_push_hands_the_element_back() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 1>::new();
    v.push_back(ledger.make(0));

    let rejected = v.push_within_capacity(ledger.make(1)).unwrap_err();
    assert!(ledger.dropped().is_empty());
    assert_eq!(rejected.into_inner().id, 1);
    assert_eq!(ledger.dropped(), [1]);
}

#[test]
fn panicking_constructor_leaves_no_phantom_element() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 3>::new();
    v.push_back(ledger.make(0));

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        v.emplace_back(|| panic!("constructor failed"));
    }));
    assert!(outcome.is_err());
    assert_eq!(v.len(), 1);

    drop(v);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn clone_copies_each_element_individually() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 4>::new();
    for id in 0..3 {
        v.push_back(ledger.make(id));
    }

    let copy = v.clone();
    assert_eq!(ledger.count(|e| matches!(e, Event::Cloned(_))), 3);
    assert_eq!(ids(&copy), [0, 1, 2]);

    drop(v);
    assert_eq!(ledger.live(), 3);
    drop(copy);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn partially_consumed_into_iter_drops_the_rest() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 4>::new();
    for id in 0..4 {
        v.push_back(ledger.make(id));
    }

    let mut iter = v.into_iter();
    let first = iter.next().unwrap();
    assert_eq!(first.id, 0);
    drop(iter);
    assert_eq!(ledger.dropped(), [1, 2, 3]);
    drop(first);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn panicking_drop_during_erase_keeps_survivors_intact() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 5>::new();
    for id in 0..5 {
        v.push_back(ledger.make(id));
    }
    v[1].panic_on_drop = true;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| v.erase(1..3)));
    assert!(outcome.is_err());

    // Both erased elements were dropped and the tail was still shifted down.
    assert_eq!(ledger.dropped(), [1, 2]);
    assert_eq!(ids(&v), [0, 3, 4]);

    drop(v);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn panicking_drop_during_clear_never_double_drops() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 3>::new();
    for id in 0..3 {
        v.push_back(ledger.make(id));
    }
    v[0].panic_on_drop = true;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| v.clear()));
    assert!(outcome.is_err());
    assert!(v.is_empty());
    assert_eq!(ledger.dropped(), [0, 1, 2]);
}

#[test]
fn panicking_drop_on_scope_exit_drops_the_rest() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 3>::new();
    for id in 0..3 {
        v.push_back(ledger.make(id));
    }
    v[0].panic_on_drop = true;

    let outcome = panic::catch_unwind(AssertUnwindSafe(move || drop(v)));
    assert!(outcome.is_err());
    assert_eq!(ledger.dropped(), [0, 1, 2]);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn panicking_drop_during_truncate_keeps_the_prefix() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 3>::new();
    for id in 0..3 {
        v.push_back(ledger.make(id));
    }
    v[1].panic_on_drop = true;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| v.truncate(1)));
    assert!(outcome.is_err());
    assert_eq!(ids(&v), [0]);
    assert_eq!(ledger.dropped(), [1, 2]);

    drop(v);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn panicking_predicate_in_retain_keeps_survivor_order() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 6>::new();
    for id in 1..=6 {
        v.push_back(ledger.make(id));
    }

    let mut calls = 0;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        v.retain(|t| {
            calls += 1;
            if calls == 4 {
                panic!("predicate failed");
            }
            t.id % 2 == 0
        })
    }));
    assert!(outcome.is_err());

    // 1 and 3 were rejected before the panic; 4, 5 and 6 were never visited.
    assert_eq!(ids(&v), [2, 4, 5, 6]);
    assert_eq!(ledger.dropped(), [1, 3]);
    assert_eq!(ledger.live(), v.len());

    drop(v);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn retain_drops_rejected_elements_once() {
    let ledger = Ledger::default();
    let mut v = StaticVector::<Tracked, 6>::new();
    for id in 0..6 {
        v.push_back(ledger.make(id));
    }

    v.retain(|t| t.id % 3 != 0);
    assert_eq!(ids(&v), [1, 2, 4, 5]);
    assert_eq!(ledger.dropped(), [0, 3]);
    assert_eq!(ledger.live(), v.len());
}
