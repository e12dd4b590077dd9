//! Capability traits over the containers the samplers accept.
//!
//! - [`SequenceView`]: ordered, index-addressable, O(1) get and swap. Covers
//!   arrays, `Vec`, `VecDeque`, and borrowed slices (including sub-slices).
//! - [`SetView`]: unordered unique members with O(1) size and a positional
//!   enumeration. Covers `HashSet`, `BTreeSet`, and the key sets of `HashMap`
//!   and `BTreeMap`.
//!
//! Each algorithm is written once against these traits.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::BuildHasher;

/// An ordered collection with O(1) indexed access.
pub trait SequenceView {
    /// Element type.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    ///
    /// Must return `Some` for every `index < self.len()`. Samplers treat the
    /// first `None` as the end of the sequence.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Swap the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    fn swap(&mut self, a: usize, b: usize);

    /// `true` when there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> SequenceView for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }
}

impl<T, const N: usize> SequenceView for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> SequenceView for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> SequenceView for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }
}

/// An unordered collection of unique members with a positional enumeration.
///
/// `members()` must yield the same order every time it is called on an
/// unmodified collection. The samplers borrow the set for the whole call, so
/// std hash and btree collections satisfy this.
pub trait SetView {
    /// Member type.
    type Item;

    /// Iterator over members in enumeration order.
    type Members<'a>: Iterator<Item = &'a Self::Item> + Clone
    where
        Self: 'a;

    /// Number of members.
    fn len(&self) -> usize;

    /// Members in enumeration order.
    fn members(&self) -> Self::Members<'_>;

    /// Member at enumeration position `n`. O(n) for the std collections.
    fn nth_member(&self, n: usize) -> Option<&Self::Item> {
        self.members().nth(n)
    }

    /// `true` when there are no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, H: BuildHasher> SetView for HashSet<T, H> {
    type Item = T;
    type Members<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn members(&self) -> Self::Members<'_> {
        self.iter()
    }
}

impl<T> SetView for BTreeSet<T> {
    type Item = T;
    type Members<'a>
        = std::collections::btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn members(&self) -> Self::Members<'_> {
        self.iter()
    }
}

/// A map viewed as the set of its keys.
impl<K, V, H: BuildHasher> SetView for HashMap<K, V, H> {
    type Item = K;
    type Members<'a>
        = std::collections::hash_map::Keys<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn members(&self) -> Self::Members<'_> {
        self.keys()
    }
}

/// A map viewed as the set of its keys.
impl<K, V> SetView for BTreeMap<K, V> {
    type Item = K;
    type Members<'a>
        = std::collections::btree_map::Keys<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn members(&self) -> Self::Members<'_> {
        self.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_and_subslices_share_one_view() {
        let mut v = vec![1, 2, 3, 4, 5];
        let span = &mut v[1..4];
        assert_eq!(SequenceView::len(&*span), 3);
        assert_eq!(SequenceView::get(&*span, 0), Some(&2));
        SequenceView::swap(span, 0, 2);
        assert_eq!(v, vec![1, 4, 3, 2, 5]);
    }

    #[test]
    fn deque_view_follows_logical_order() {
        let mut d: VecDeque<i32> = (0..4).collect();
        d.push_front(-1);
        assert_eq!(SequenceView::get(&d, 0), Some(&-1));
        SequenceView::swap(&mut d, 0, 4);
        assert_eq!(d.front(), Some(&3));
        assert_eq!(SequenceView::get(&d, 5), None);
    }

    #[test]
    fn array_view() {
        let mut a = ['a', 'b', 'c'];
        assert_eq!(SequenceView::len(&a), 3);
        SequenceView::swap(&mut a, 0, 1);
        assert_eq!(a, ['b', 'a', 'c']);
    }

    #[test]
    fn set_enumeration_is_stable_within_a_borrow() {
        let set: HashSet<u32> = (0..32).collect();
        let first: Vec<_> = set.members().collect();
        let second: Vec<_> = set.members().collect();
        assert_eq!(first, second);
        for (i, m) in first.iter().enumerate() {
            assert_eq!(set.nth_member(i), Some(*m));
        }
        assert_eq!(set.nth_member(32), None);
    }

    #[test]
    fn maps_expose_their_keys() {
        let map: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(SetView::len(&map), 2);
        assert_eq!(map.members().copied().collect::<Vec<_>>(), vec!["a", "b"]);

        let hmap: HashMap<char, ()> = HashMap::new();
        assert!(SetView::is_empty(&hmap));
    }
}
