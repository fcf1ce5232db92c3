//! A doubly linked sequence.
//!
//! The links of a [`List`] are stored in a slab: a vector of slots addressed by index, where
//! freed slots are recycled by later insertions. Each occupied slot records the slot indices of
//! its neighbours, so linking and unlinking at a known slot is `O(1)` and no reference counting
//! or unsafe pointer juggling is needed.
//!
//! ```
//! use calc_collections::List;
//!
//! let mut list: List<i32> = [1, 2, 4].into_iter().collect();
//! list.insert(2, 3).unwrap();
//! assert_eq!(list.get(2), Ok(&3));
//! assert_eq!(list.remove(), Ok(4));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use std::{fmt, iter::FusedIterator, mem};
use super::error::{CollectionError, EmptyContainer, IndexOutOfRange};

/// An element of the list, with the slot indices of its neighbours.
#[derive(Clone, Debug)]
struct Link<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A slot in the slab.
#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Link<T>),
    Vacant,
}

/// A doubly linked sequence with `O(1)` operations at both ends.
///
/// Indexed operations ([`List::get`], [`List::set`], [`List::insert`], [`List::delete`]) walk
/// from the front or the back, whichever is closer, so they are `O(1)` near either end and
/// `O(n)` only in the interior.
#[derive(Clone)]
pub struct List<T> {
    /// Storage for the links.
    slots: Vec<Slot<T>>,

    /// Indices of vacant slots in `slots`, reused before the slab grows.
    vacant: Vec<usize>,

    /// Slot of the first element.
    head: Option<usize>,

    /// Slot of the last element.
    tail: Option<usize>,

    /// Number of elements.
    len: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn link(&self, slot: usize) -> &Link<T> {
        match &self.slots[slot] {
            Slot::Occupied(link) => link,
            Slot::Vacant => unreachable!("list links only point at occupied slots"),
        }
    }

    fn link_mut(&mut self, slot: usize) -> &mut Link<T> {
        match &mut self.slots[slot] {
            Slot::Occupied(link) => link,
            Slot::Vacant => unreachable!("list links only point at occupied slots"),
        }
    }

    /// Stores the link in a vacant slot, or a new one, and returns its index.
    fn alloc(&mut self, link: Link<T>) -> usize {
        match self.vacant.pop() {
            Some(slot) => {
                self.slots[slot] = Slot::Occupied(link);
                slot
            },
            None => {
                self.slots.push(Slot::Occupied(link));
                self.slots.len() - 1
            },
        }
    }

    /// Vacates the slot and returns the link it held.
    fn release(&mut self, slot: usize) -> Link<T> {
        match mem::replace(&mut self.slots[slot], Slot::Vacant) {
            Slot::Occupied(link) => {
                self.vacant.push(slot);
                link
            },
            Slot::Vacant => unreachable!("list links only point at occupied slots"),
        }
    }

    /// Returns the slot holding the element at `index`, or [`None`] if `index >= len`.
    fn locate(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = self.link(cursor?).next;
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in index + 1..self.len {
                cursor = self.link(cursor?).prev;
            }
            cursor
        }
    }

    /// Links a new element in front of the element in slot `before`, or at the back if `before`
    /// is [`None`].
    fn attach(&mut self, before: Option<usize>, value: T) {
        let prev = match before {
            Some(next) => self.link(next).prev,
            None => self.tail,
        };
        let slot = self.alloc(Link { value, prev, next: before });

        match prev {
            Some(prev) => self.link_mut(prev).next = Some(slot),
            None => self.head = Some(slot),
        }
        match before {
            Some(next) => self.link_mut(next).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.len += 1;
    }

    /// Unlinks the element in the given slot and returns it.
    fn detach(&mut self, slot: usize) -> T {
        let Link { value, prev, next } = self.release(slot);

        match prev {
            Some(prev) => self.link_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.link_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;

        if self.len == 0 {
            // nothing is linked anymore, so the slab can start over
            self.slots.clear();
            self.vacant.clear();
        }

        value
    }

    fn out_of_range(&self, index: usize) -> CollectionError {
        IndexOutOfRange { index, len: self.len }.into()
    }

    /// Appends an element to the back of the list.
    pub fn add(&mut self, value: T) {
        self.attach(None, value);
    }

    /// Removes and returns the element at the back of the list.
    pub fn remove(&mut self) -> Result<T, CollectionError> {
        let tail = self.tail.ok_or(EmptyContainer)?;
        Ok(self.detach(tail))
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.locate(index)
            .map(|slot| &self.link(slot).value)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let slot = self.locate(index).ok_or_else(|| self.out_of_range(index))?;
        Ok(&mut self.link_mut(slot).value)
    }

    /// Replaces the element at `index`, returning the element that was there.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        let slot = self.locate(index).ok_or_else(|| self.out_of_range(index))?;
        Ok(mem::replace(&mut self.link_mut(slot).value, value))
    }

    /// Inserts an element so that it ends up at `index`, shifting later elements back by one.
    ///
    /// `index` may be equal to the length of the list, in which case the element is appended.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        // `locate` returns `None` exactly when `index == len`, which means "append"
        let before = self.locate(index);
        self.attach(before, value);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn delete(&mut self, index: usize) -> Result<T, CollectionError> {
        let slot = self.locate(index).ok_or_else(|| self.out_of_range(index))?;
        Ok(self.detach(slot))
    }

    /// Returns a reference to the first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.head.map(|slot| &self.link(slot).value)
    }

    /// Returns a reference to the last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|slot| &self.link(slot).value)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator over the elements, front to back.
    ///
    /// The iterator borrows the list, so the list cannot be modified while iterating.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl<T: PartialEq> List<T> {
    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns true if some element is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

/// Borrowing iterator over a [`List`], created by [`List::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.list.link(self.front?);
        self.front = link.next;
        self.remaining -= 1;
        Some(&link.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.list.link(self.back?);
        self.back = link.prev;
        self.remaining -= 1;
        Some(&link.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`List`].
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.list.head?;
        Some(self.list.detach(head))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn basic() -> List<&'static str> {
        ["a", "b", "c"].into_iter().collect()
    }

    fn contents<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn add_and_remove_at_back() {
        let mut list = List::new();
        list.add(1);
        list.add(2);
        list.add(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.remove(), Ok(3));
        assert_eq!(list.remove(), Ok(2));
        assert_eq!(list.remove(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn remove_from_empty() {
        let mut list = List::<i32>::new();
        assert_eq!(list.remove(), Err(CollectionError::EmptyContainer(EmptyContainer)));

        list.add(5);
        list.remove().unwrap();
        assert_eq!(list.remove(), Err(CollectionError::EmptyContainer(EmptyContainer)));
    }

    #[test]
    fn get_from_both_ends() {
        let list: List<i32> = (0..9).collect();
        for i in 0..9 {
            assert_eq!(list.get(i), Ok(&(i as i32)));
        }
    }

    #[test]
    fn get_out_of_range() {
        let list = basic();
        assert_eq!(
            list.get(3),
            Err(CollectionError::IndexOutOfRange(IndexOutOfRange { index: 3, len: 3 })),
        );
        assert!(List::<i32>::new().get(0).is_err());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut list: List<i32> = (0..7).collect();
        for i in 0..7 {
            list.set(i, 100 + i as i32).unwrap();
            assert_eq!(list.get(i), Ok(&(100 + i as i32)));
        }
        assert_eq!(list.len(), 7);
        assert!(list.set(7, 0).is_err());
    }

    #[test]
    fn set_returns_previous() {
        let mut list = basic();
        assert_eq!(list.set(1, "z"), Ok("b"));
        assert_eq!(contents(&list), vec!["a", "z", "c"]);
    }

    #[test]
    fn set_on_single_element() {
        let mut list = List::new();
        list.add(1);
        list.set(0, 2).unwrap();
        assert_eq!(list.first(), Some(&2));
        assert_eq!(list.last(), Some(&2));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn insert_everywhere() {
        let mut list = basic();
        list.insert(0, "front").unwrap();
        list.insert(4, "back").unwrap();
        list.insert(2, "middle").unwrap();
        list.insert(5, "near back").unwrap();
        assert_eq!(
            contents(&list),
            vec!["front", "a", "middle", "b", "c", "near back", "back"],
        );
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn insert_into_empty() {
        let mut list = List::new();
        list.insert(0, 'x').unwrap();
        assert_eq!(contents(&list), vec!['x']);
        assert!(list.insert(2, 'y').is_err());
    }

    #[test]
    fn delete_front_middle_back() {
        let mut list = basic();
        list.add("d");
        list.add("e");

        assert_eq!(list.delete(0), Ok("a"));
        assert_eq!(contents(&list), vec!["b", "c", "d", "e"]);

        assert_eq!(list.delete(1), Ok("c"));
        assert_eq!(contents(&list), vec!["b", "d", "e"]);

        assert_eq!(list.delete(2), Ok("e"));
        assert_eq!(contents(&list), vec!["b", "d"]);

        assert_eq!(list.delete(1), Ok("d"));
        assert_eq!(list.delete(0), Ok("b"));
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    fn delete_out_of_range() {
        let mut list = basic();
        assert!(list.delete(3).is_err());
        assert!(list.delete(usize::MAX).is_err());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn delete_tracks_size() {
        let mut list: List<usize> = (0..1000).collect();
        for i in (0..1000).rev() {
            assert_eq!(list.delete(list.len() - 1), Ok(i));
            assert_eq!(list.len(), i);
        }
        assert!(list.is_empty());
    }

    #[test]
    fn alternating_add_and_delete_front() {
        let mut list = List::new();
        for i in 0..1000 {
            list.add(i);
            assert_eq!(list.len(), 1);
            assert_eq!(list.delete(0), Ok(i));
            assert_eq!(list.len(), 0);
        }
    }

    #[test]
    fn slots_are_reused() {
        let mut list: List<i32> = (0..4).collect();
        list.delete(1).unwrap();
        list.delete(1).unwrap();
        list.insert(1, 10).unwrap();
        list.insert(1, 20).unwrap();
        assert_eq!(contents(&list), vec![0, 20, 10, 3]);
        assert_eq!(list.slots.len(), 4);
    }

    #[test]
    fn index_of_and_contains() {
        let list = basic();
        assert_eq!(list.index_of(&"b"), Some(1));
        assert_eq!(list.index_of(&"q"), None);
        assert!(list.contains(&"c"));
        assert!(!list.contains(&"q"));
    }

    #[test]
    fn absent_elements_only_match_each_other() {
        let list: List<Option<&str>> = [Some("a"), None, Some("b")].into_iter().collect();
        assert_eq!(list.index_of(&None), Some(1));
        assert_eq!(list.index_of(&Some("b")), Some(2));
        assert!(!List::from_iter([Some("a")]).contains(&None));
    }

    #[test]
    fn iterate_both_ways() {
        let list: List<i32> = (1..=5).collect();
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![&2, &3, &4]);
    }

    #[test]
    fn owning_iterator() {
        let list: List<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn structural_equality() {
        let mut a: List<i32> = (0..3).collect();
        let b: List<i32> = (0..3).collect();
        assert_eq!(a, b);

        // same contents reached through a different slot layout
        a.delete(0).unwrap();
        a.insert(0, 0).unwrap();
        assert_eq!(a, b);

        a.add(3);
        assert_ne!(a, b);
    }

    #[test]
    fn debug_lists_elements() {
        assert_eq!(format!("{:?}", basic()), r#"["a", "b", "c"]"#);
    }

    #[test]
    fn back_operations_are_constant_time() {
        let cap = 500_000;
        let mut list: List<i64> = (0..cap).collect();
        for _ in 0..cap {
            list.add(-1);
            assert_eq!(list.remove(), Ok(-1));
        }
        assert_eq!(list.len(), cap as usize);
        assert_eq!(list.last(), Some(&(cap - 1)));

        for _ in 0..cap {
            list.add(-1);
            list.delete(list.len() - 1).unwrap();
        }
        assert_eq!(list.len(), cap as usize);
    }

    #[test]
    fn front_operations_are_constant_time() {
        let cap = 500_000;
        let mut list: List<i64> = (0..cap).collect();
        for _ in 0..cap {
            list.insert(0, -1).unwrap();
            list.delete(0).unwrap();
        }
        assert_eq!(list.len(), cap as usize);

        for _ in 0..cap {
            list.add(-1);
            list.delete(0).unwrap();
        }
        assert_eq!(list.len(), cap as usize);
        assert_eq!(list.first(), Some(&-1));
    }
}
