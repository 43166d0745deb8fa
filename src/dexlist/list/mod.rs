//! # Positional Lists
//!
//! This module defines the [`PositionalList`] trait: an ordered container
//! addressed by 0-based position, with insert/remove anywhere plus front/back
//! shorthands and read-only traversal.
//!
//! ## Ownership
//!
//! Inserts take the element by reference and store a clone, so the caller's
//! value can be dropped or mutated afterwards without touching the list.
//! Removes hand the stored value back by move. Each slot owns its element
//! outright, so two positions can never alias one value, and dropping (or
//! [`clear`](PositionalList::clear)ing) a list releases each live element
//! exactly once.
//!
//! ## Implementations
//!
//! - [`bounded::BoundedList`]: fixed capacity, contiguous slots, shift-based
//!   insert/remove. O(1) indexed access, O(n) insert/remove.
//! - [`linked::LinkedList`]: singly-linked nodes with head and tail links,
//!   unbounded. O(1) front/back insert, O(pos) positional access.
//!
//! ## Errors
//!
//! Both implementations reject bad arguments the same way:
//! - insert: `pos > len` is `InvalidPosition` (checked before capacity),
//!   then a full bounded list is `CapacityExceeded`
//! - remove: an empty list is `EmptyList`, then `pos >= len` is
//!   `InvalidPosition`

use crate::error::{DexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod bounded;
pub mod linked;

pub use bounded::BoundedList;
pub use linked::LinkedList;

/// Abstract interface for positional list storage.
pub trait PositionalList<T: Clone> {
    /// Number of live elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of elements, or `None` when unbounded.
    fn capacity(&self) -> Option<usize>;

    /// Stores a copy of `item` at `pos`, shifting later elements back.
    fn insert(&mut self, item: &T, pos: usize) -> Result<()>;

    /// Takes the element at `pos` out of the list.
    fn remove(&mut self, pos: usize) -> Result<T>;

    fn get(&self, pos: usize) -> Result<&T>;

    /// Ordered, read-only traversal of the live elements.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Drops every element and returns the list to its freshly created state.
    fn clear(&mut self);

    fn insert_front(&mut self, item: &T) -> Result<()> {
        self.insert(item, 0)
    }

    fn insert_back(&mut self, item: &T) -> Result<()> {
        let len = self.len();
        self.insert(item, len)
    }

    fn remove_front(&mut self) -> Result<T> {
        self.remove(0)
    }

    fn remove_back(&mut self) -> Result<T> {
        match self.len().checked_sub(1) {
            Some(last) => self.remove(last),
            None => Err(DexError::EmptyList),
        }
    }
}

/// Which storage backs a list. Picked once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Bounded,
    Linked,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bounded => write!(f, "bounded"),
            Strategy::Linked => write!(f, "linked"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "bounded" | "array" => Ok(Strategy::Bounded),
            "linked" | "flexible" => Ok(Strategy::Linked),
            other => Err(format!("Unknown list strategy: {}", other)),
        }
    }
}

/// Checks an insert position against the current length.
pub(crate) fn check_insert_pos(pos: usize, len: usize) -> Result<()> {
    if pos > len {
        return Err(DexError::invalid_position(pos, len));
    }
    Ok(())
}

/// Checks a remove/get position against the current length.
pub(crate) fn check_remove_pos(pos: usize, len: usize) -> Result<()> {
    if len == 0 {
        return Err(DexError::EmptyList);
    }
    if pos >= len {
        return Err(DexError::invalid_position(pos, len));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod contract {
    //! Behavior every `PositionalList` must share. Each strategy's test module
    //! runs these against its own constructor.

    use super::*;
    use crate::catalog::fixtures::record;
    use crate::model::Record;
    use std::cell::Cell;
    use std::rc::Rc;

    /// An element that counts its live copies, for checking release discipline.
    #[derive(Debug)]
    pub struct Tracked {
        pub id: u32,
        live: Rc<Cell<isize>>,
        drops: Rc<Cell<usize>>,
    }

    #[derive(Default)]
    pub struct Tracker {
        live: Rc<Cell<isize>>,
        drops: Rc<Cell<usize>>,
    }

    impl Tracker {
        pub fn make(&self, id: u32) -> Tracked {
            self.live.set(self.live.get() + 1);
            Tracked {
                id,
                live: Rc::clone(&self.live),
                drops: Rc::clone(&self.drops),
            }
        }

        pub fn live(&self) -> isize {
            self.live.get()
        }

        pub fn drops(&self) -> usize {
            self.drops.get()
        }
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            self.live.set(self.live.get() + 1);
            Tracked {
                id: self.id,
                live: Rc::clone(&self.live),
                drops: Rc::clone(&self.drops),
            }
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
            self.drops.set(self.drops.get() + 1);
        }
    }

    pub fn names<L: PositionalList<Record>>(list: &L) -> Vec<String> {
        list.iter().map(|r| r.name.clone()).collect()
    }

    fn filled<L: PositionalList<Record>>(mut list: L, names: &[&str]) -> L {
        for (i, name) in names.iter().enumerate() {
            list.insert_back(&record(i as u16 + 1, name)).unwrap();
        }
        list
    }

    pub fn starts_empty<L: PositionalList<Record>>(list: L) {
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }

    pub fn insert_then_remove_restores<L: PositionalList<Record>>(make: impl Fn() -> L) {
        let base = ["A", "B", "C"];
        let probe = record(99, "Z");
        for pos in 0..=base.len() {
            let mut list = filled(make(), &base);
            list.insert(&probe, pos).unwrap();
            assert_eq!(list.len(), 4);
            assert_eq!(list.get(pos).unwrap(), &probe);
            let removed = list.remove(pos).unwrap();
            assert_eq!(removed, probe);
            assert_eq!(names(&list), vec!["A", "B", "C"]);
        }
    }

    pub fn copies_are_isolated<L: PositionalList<Record>>(mut list: L) {
        let mut original = record(1, "A");
        list.insert(&original, 0).unwrap();
        original.abilities.push("Extra".to_string());
        original.abilities[0].clear();
        original.name.push_str("-changed");

        let stored = list.get(0).unwrap();
        assert_eq!(stored.name, "A");
        assert_eq!(stored.abilities, vec!["A ability"]);
        drop(original);
        assert_eq!(list.get(0).unwrap().name, "A");
    }

    pub fn front_back_match_positional<L: PositionalList<Record>>(make: impl Fn() -> L) {
        let z = record(9, "Z");

        let mut a = filled(make(), &["A", "B"]);
        let mut b = filled(make(), &["A", "B"]);
        a.insert_front(&z).unwrap();
        b.insert(&z, 0).unwrap();
        assert_eq!(names(&a), names(&b));

        let mut a = filled(make(), &["A", "B"]);
        let mut b = filled(make(), &["A", "B"]);
        a.insert_back(&z).unwrap();
        let len = b.len();
        b.insert(&z, len).unwrap();
        assert_eq!(names(&a), names(&b));
        assert_eq!(names(&a), vec!["A", "B", "Z"]);

        let mut a = filled(make(), &["A", "B", "C"]);
        assert_eq!(a.remove_front().unwrap().name, "A");
        assert_eq!(a.remove_back().unwrap().name, "C");
        assert_eq!(names(&a), vec!["B"]);
    }

    pub fn rejects_bad_positions<L: PositionalList<Record>>(make: impl Fn() -> L) {
        let mut list = filled(make(), &["A", "B"]);
        let z = record(9, "Z");

        assert!(matches!(
            list.insert(&z, 3),
            Err(DexError::InvalidPosition { pos: 3, len: 2 })
        ));
        assert!(matches!(
            list.remove(2),
            Err(DexError::InvalidPosition { pos: 2, len: 2 })
        ));
        assert!(matches!(
            list.get(5),
            Err(DexError::InvalidPosition { pos: 5, len: 2 })
        ));
        assert_eq!(names(&list), vec!["A", "B"]);

        let mut empty = make();
        assert!(matches!(empty.remove(0), Err(DexError::EmptyList)));
        assert!(matches!(empty.remove_front(), Err(DexError::EmptyList)));
        assert!(matches!(empty.remove_back(), Err(DexError::EmptyList)));
        assert!(matches!(
            empty.insert(&z, 1),
            Err(DexError::InvalidPosition { pos: 1, len: 0 })
        ));
    }

    pub fn traversal_is_restartable<L: PositionalList<Record>>(make: impl Fn() -> L) {
        let list = filled(make(), &["A", "B", "C"]);
        let first: Vec<_> = list.iter().map(|r| r.id).collect();
        let second: Vec<_> = list.iter().map(|r| r.id).collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, second);
    }

    pub fn interleaved_ops<L: PositionalList<Record>>(mut list: L) {
        // [B, A, C] -> insert C at 1 -> [B, C, A, C] -> remove front -> [C, A, C]
        list.insert_back(&record(2, "B")).unwrap();
        list.insert_back(&record(1, "A")).unwrap();
        list.insert_back(&record(3, "C")).unwrap();
        list.insert(&record(3, "C"), 1).unwrap();
        assert_eq!(names(&list), vec!["B", "C", "A", "C"]);
        assert_eq!(list.remove_front().unwrap().name, "B");
        assert_eq!(names(&list), vec!["C", "A", "C"]);
        list.insert(&record(4, "D"), 3).unwrap();
        assert_eq!(list.remove(2).unwrap().name, "C");
        assert_eq!(names(&list), vec!["C", "A", "D"]);
    }

    /// Runs inserts and removes, then drops the list, checking every copy is
    /// released once and only once.
    pub fn releases_each_copy_once<L: PositionalList<Tracked>>(
        make: impl Fn() -> L,
        sizes: &[usize],
    ) {
        for &n in sizes {
            let tracker = Tracker::default();
            let source = tracker.make(0);
            {
                let mut list = make();
                for i in 0..n {
                    let mut item = source.clone();
                    item.id = i as u32;
                    list.insert_back(&item).unwrap();
                }
                assert_eq!(list.len(), n);
                // Source, the n stored clones (temporaries are already gone).
                assert_eq!(tracker.live(), 1 + n as isize);
            }
            assert_eq!(tracker.live(), 1);
            drop(source);
            assert_eq!(tracker.live(), 0);
        }

        // A mixed sequence: removed elements become the caller's to drop.
        let tracker = Tracker::default();
        let mut list = make();
        for i in 0..4 {
            list.insert_back(&tracker.make(i)).unwrap();
        }
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.id, 1);
        let front = list.remove_front().unwrap();
        assert_eq!(tracker.live(), 4);
        drop(removed);
        drop(front);
        assert_eq!(tracker.live(), 2);
        list.clear();
        assert_eq!(tracker.live(), 0);
        assert!(list.is_empty());
        drop(list);
        assert_eq!(tracker.live(), 0);
        // Four originals, four stored clones; each dropped exactly once.
        assert_eq!(tracker.drops(), 8);
    }
}
