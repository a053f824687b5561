use crate::error::SequenceError;
use crate::node::{Linked, Node};
use crate::position::Position;
use std::fmt;
use std::iter::FromIterator;
use std::usize;

// Arena indices of the two sentinels. Both are created by the
// constructor and are never freed.
const HEADER: usize = Position::HEADER.ix;
const TRAILER: usize = Position::TRAILER.ix;

/// A doubly linked list bounded by a header and a trailer sentinel.
///
/// Nodes live in an internal `Vec` and refer to their neighbors by
/// index. Removed nodes are put on a free list and reused by later
/// insertions before the `Vec` grows. The sentinels never hold data and
/// are never handed out: every `Position` returned by this type names a
/// data-bearing node.
pub struct LinkedSequence<T> {
    // Index of the first node on the free list. MAX when the free list
    // is empty.
    free_list: usize,
    // The next generation number. Starts at 1; 0 is the sentinels'.
    next_generation: usize,
    // The number of nodes currently holding data.
    len_used: usize,
    // The number of nodes currently on the free list.
    len_free: usize,
    // Sentinels at HEADER and TRAILER, followed by data and free nodes.
    nodes: Vec<Node<T>>,
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LinkedSequence<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.elements()).finish()
    }
}

impl<T> fmt::Display for LinkedSequence<T>
where
    T: fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("(H) <-> ")?;
        for e in self.elements() {
            write!(fmt, "{} <-> ", e)?;
        }
        fmt.write_str("(T)")
    }
}

impl<T> LinkedSequence<T> {
    /// Creates an empty `LinkedSequence` holding only its two
    /// sentinels.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::LinkedSequence;
    ///
    /// let s: LinkedSequence<u32> = LinkedSequence::new();
    /// assert!(s.is_empty());
    /// ```
    pub fn new() -> LinkedSequence<T> {
        Self::with_capacity(0)
    }

    /// Create a new `LinkedSequence` with a free list `capacity` nodes
    /// deep.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::LinkedSequence;
    ///
    /// let s: LinkedSequence<u32> = LinkedSequence::with_capacity(16);
    /// assert_eq!(16, s.len_freelist());
    /// ```
    pub fn with_capacity(capacity: usize) -> LinkedSequence<T> {
        let mut nodes = Vec::with_capacity(capacity + 2);
        nodes.push(Node::new_sentinel(usize::MAX, TRAILER));
        nodes.push(Node::new_sentinel(HEADER, usize::MAX));

        let mut next = usize::MAX;
        for _ in 0..capacity {
            nodes.push(Node::new_free(next));
            next = nodes.len() - 1;
        }

        LinkedSequence {
            free_list: next,
            next_generation: 1,
            len_used: 0,
            len_free: capacity,
            nodes,
        }
    }

    /// The number of elements in the sequence. Sentinels are not
    /// counted.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::LinkedSequence;
    ///
    /// let mut s = LinkedSequence::new();
    /// s.add_first(1);
    /// s.add_last(2);
    /// assert_eq!(2, s.len());
    /// ```
    pub fn len(&self) -> usize {
        self.len_used
    }

    /// True when the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        0 == self.len_used
    }

    /// The number of nodes on the sequence's free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::LinkedSequence;
    ///
    /// let mut s = LinkedSequence::new();
    /// let p = s.add_last(1);
    /// assert_eq!(0, s.len_freelist());
    ///
    /// s.remove(&p);
    /// assert_eq!(1, s.len_freelist());
    ///
    /// s.add_last(2);
    /// assert_eq!(0, s.len_freelist());
    /// ```
    pub fn len_freelist(&self) -> usize {
        self.len_free
    }

    /// The position of the first element, or `None` if the sequence is
    /// empty.
    pub fn first(&self) -> Option<Position> {
        if self.is_empty() {
            None
        } else {
            Some(self.position_of(self.link(HEADER).next()))
        }
    }

    /// The position of the last element, or `None` if the sequence is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::LinkedSequence;
    ///
    /// let mut s = LinkedSequence::new();
    /// assert_eq!(None, s.last());
    ///
    /// s.add_last(1);
    /// let p = s.add_last(2);
    /// assert_eq!(Some(p), s.last());
    /// ```
    pub fn last(&self) -> Option<Position> {
        if self.is_empty() {
            None
        } else {
            Some(self.position_of(self.link(TRAILER).prev()))
        }
    }

    /// The position of the element after `position`. `None` when
    /// `position` is the last element or is no longer live.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::LinkedSequence;
    ///
    /// let mut s = LinkedSequence::new();
    /// let a = s.add_last('a');
    /// let b = s.add_last('b');
    ///
    /// assert_eq!(Some(b), s.next(&a));
    /// assert_eq!(None, s.next(&b));
    /// ```
    pub fn next(&self, position: &Position) -> Option<Position> {
        let next = self.resolve(position)?.next();
        if next == TRAILER || next == usize::MAX {
            None
        } else {
            Some(self.position_of(next))
        }
    }

    /// The position of the element before `position`. `None` when
    /// `position` is the first element or is no longer live.
    pub fn prev(&self, position: &Position) -> Option<Position> {
        let prev = self.resolve(position)?.prev();
        if prev == HEADER || prev == usize::MAX {
            None
        } else {
            Some(self.position_of(prev))
        }
    }

    /// Get a reference to the element at `position`. If the element has
    /// been removed, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::LinkedSequence;
    ///
    /// let mut s = LinkedSequence::new();
    /// let p = s.add_first(10);
    /// assert_eq!(Some(&10), s.get(&p));
    ///
    /// s.remove(&p);
    /// assert_eq!(None, s.get(&p));
    /// ```
    pub fn get(&self, position: &Position) -> Option<&T> {
        self.resolve(position).and_then(|l| l.data())
    }

    /// Get a mutable reference to the element at `position`. If the
    /// element has been removed, `None` is returned.
    pub fn get_mut(&mut self, position: &Position) -> Option<&mut T> {
        let Position { ix, generation } = position;

        self.nodes
            .get_mut(*ix)
            .and_then(|n| n.get_linked_mut())
            .and_then(|l| l.as_generation_mut(*generation))
            .and_then(|l| l.data_mut())
    }

    /// Insert `data` directly after the element at `anchor` and return
    /// the new element's position.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::{LinkedSequence, SequenceError};
    ///
    /// let mut s = LinkedSequence::new();
    /// let a = s.add_last(1);
    /// s.add_last(3);
    /// s.insert_after(2, &a).unwrap();
    /// assert_eq!("(H) <-> 1 <-> 2 <-> 3 <-> (T)", s.to_string());
    ///
    /// s.remove(&a);
    /// assert_eq!(Err(SequenceError::StalePosition), s.insert_after(4, &a));
    /// ```
    pub fn insert_after(&mut self, data: T, anchor: &Position) -> Result<Position, SequenceError> {
        let next = self
            .resolve(anchor)
            .ok_or(SequenceError::StalePosition)?
            .next();
        if anchor.ix == TRAILER {
            return Err(SequenceError::OutsideSentinels);
        }

        Ok(self.link_between(anchor.ix, next, data))
    }

    /// Insert `data` directly before the element at `anchor` and
    /// return the new element's position.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::LinkedSequence;
    ///
    /// let mut s = LinkedSequence::new();
    /// let c = s.add_last('c');
    /// let a = s.insert_before('a', &c).unwrap();
    /// s.insert_before('b', &c).unwrap();
    ///
    /// assert_eq!(Some(a), s.first());
    /// assert_eq!("(H) <-> a <-> b <-> c <-> (T)", s.to_string());
    /// ```
    pub fn insert_before(&mut self, data: T, anchor: &Position) -> Result<Position, SequenceError> {
        let prev = self
            .resolve(anchor)
            .ok_or(SequenceError::StalePosition)?
            .prev();
        if anchor.ix == HEADER {
            return Err(SequenceError::OutsideSentinels);
        }

        Ok(self.link_between(prev, anchor.ix, data))
    }

    /// Insert `data` at the front of the sequence, directly after the
    /// header.
    pub fn add_first(&mut self, data: T) -> Position {
        let next = self.link(HEADER).next();
        self.link_between(HEADER, next, data)
    }

    /// Insert `data` at the back of the sequence, directly before the
    /// trailer.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::LinkedSequence;
    ///
    /// let mut s = LinkedSequence::new();
    /// s.add_last(1);
    /// s.add_first(0);
    /// s.add_last(2);
    /// assert_eq!("(H) <-> 0 <-> 1 <-> 2 <-> (T)", s.to_string());
    /// ```
    pub fn add_last(&mut self, data: T) -> Position {
        let prev = self.link(TRAILER).prev();
        self.link_between(prev, TRAILER, data)
    }

    /// Remove the element at `position` and return it. `None` is
    /// returned if the element was already removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::LinkedSequence;
    ///
    /// let mut s = LinkedSequence::new();
    /// let p = s.add_first(10);
    ///
    /// assert_eq!(Some(10), s.remove(&p));
    /// assert_eq!(None, s.remove(&p));
    /// ```
    pub fn remove(&mut self, position: &Position) -> Option<T> {
        self.try_remove(position).ok()
    }

    /// Remove the element at `position` and return it, reporting why
    /// nothing could be removed.
    pub fn try_remove(&mut self, position: &Position) -> Result<T, SequenceError> {
        let linked = self
            .resolve(position)
            .ok_or(SequenceError::StalePosition)?;
        if linked.is_sentinel() {
            return Err(SequenceError::Sentinel);
        }

        Ok(self.remove_unchecked(position.ix))
    }

    pub(crate) fn elements(&self) -> Elements<'_, T> {
        Elements {
            target: self,
            next_index: self.link(HEADER).next(),
        }
    }

    fn resolve(&self, position: &Position) -> Option<&Linked<T>> {
        let Position { ix, generation } = position;

        self.nodes
            .get(*ix)
            .and_then(|n| n.get_linked())
            .and_then(|l| l.as_generation(*generation))
    }

    fn position_of(&self, ix: usize) -> Position {
        Position {
            ix,
            generation: self.link(ix).generation(),
        }
    }

    fn link(&self, ix: usize) -> &Linked<T> {
        self.nodes[ix]
            .get_linked()
            .expect("self.nodes[ix] is expected to be linked")
    }

    fn link_mut(&mut self, ix: usize) -> &mut Linked<T> {
        self.nodes[ix]
            .get_linked_mut()
            .expect("self.nodes[ix] is expected to be linked")
    }

    // Relinks prev <-> new <-> next. `prev` and `next` must be adjacent.
    fn link_between(&mut self, prev: usize, next: usize, data: T) -> Position {
        debug_assert_eq!(next, self.link(prev).next());
        debug_assert_eq!(prev, self.link(next).prev());

        let (ix, generation) = self.allocate(prev, next, data);
        self.link_mut(prev).set_next(ix);
        self.link_mut(next).set_prev(ix);

        Position { ix, generation }
    }

    fn remove_unchecked(&mut self, ix: usize) -> T {
        debug_assert!(ix != HEADER && ix != TRAILER);

        let (prev, data, next) = self
            .free(ix)
            .into_linked()
            .expect("removed node is expected to be linked")
            .take();

        self.link_mut(prev).set_next(next);
        self.link_mut(next).set_prev(prev);

        data.expect("removed node is expected to hold data")
    }

    fn allocate(&mut self, prev: usize, next: usize, data: T) -> (usize, usize) {
        // A stale position could name the wrong element if the counter
        // wrapped, so overflow panics instead.
        let generation = self.next_generation;
        self.next_generation = self
            .next_generation
            .checked_add(1)
            .expect("generation counter overflowed");

        self.len_used += 1;

        let n = Node::new_data(prev, next, generation, data);

        let ix = if usize::MAX == self.free_list {
            self.nodes.push(n);
            self.nodes.len() - 1
        } else {
            let ix = self.free_list;
            self.free_list = self.nodes[ix]
                .get_free()
                .expect("free list entry is expected to be free")
                .next();
            self.nodes[ix] = n;
            self.len_free -= 1;
            ix
        };

        (ix, generation)
    }

    fn free(&mut self, ix: usize) -> Node<T> {
        debug_assert!(self.nodes[ix].get_linked().is_some());

        self.len_used -= 1;

        let mut n = Node::new_free(self.free_list);
        std::mem::swap(&mut n, &mut self.nodes[ix]);
        self.free_list = ix;
        self.len_free += 1;
        n
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut s = Self::new();
        for i in iter {
            s.add_last(i);
        }
        s
    }
}

/// Front-to-back walk over the elements, used for rendering.
pub(crate) struct Elements<'l, T> {
    target: &'l LinkedSequence<T>,
    next_index: usize,
}

impl<'l, T> Iterator for Elements<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        if TRAILER == self.next_index {
            return None;
        }

        let l = self.target.link(self.next_index);
        self.next_index = l.next();
        l.data()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn forward<T: Clone>(s: &LinkedSequence<T>) -> Vec<T> {
        let mut v = Vec::new();
        let mut p = s.first();
        while let Some(pos) = p {
            v.push(s.get(&pos).cloned().unwrap());
            p = s.next(&pos);
        }
        v
    }

    fn backward<T: Clone>(s: &LinkedSequence<T>) -> Vec<T> {
        let mut v = Vec::new();
        let mut p = s.last();
        while let Some(pos) = p {
            v.push(s.get(&pos).cloned().unwrap());
            p = s.prev(&pos);
        }
        v
    }

    #[test]
    fn new_sequence_is_empty() {
        let s: LinkedSequence<u8> = LinkedSequence::new();

        assert_eq!(0, s.len());
        assert!(s.is_empty());
        assert_eq!(None, s.first());
        assert_eq!(None, s.last());
        assert_eq!("(H) <-> (T)", s.to_string());
    }

    #[test]
    fn empty_sentinels_point_at_each_other() {
        let s: LinkedSequence<u8> = LinkedSequence::new();

        assert_eq!(TRAILER, s.link(HEADER).next());
        assert_eq!(HEADER, s.link(TRAILER).prev());
    }

    #[test]
    fn add_first_and_add_last_order() {
        let mut s = LinkedSequence::new();
        s.add_last(5u8);
        s.add_first(3);
        s.add_first(7);

        assert_eq!(vec![7, 3, 5], forward(&s));
        assert_eq!(vec![5, 3, 7], backward(&s));
        assert_eq!(3, s.len());
    }

    #[test]
    fn walks_visit_len_elements_both_ways() {
        let mut s: LinkedSequence<u32> = (0..10).collect();
        let mid = s.first().and_then(|p| s.next(&p)).unwrap();
        s.remove(&mid);
        s.add_first(100);

        let f = forward(&s);
        let mut b = backward(&s);
        b.reverse();

        assert_eq!(s.len(), f.len());
        assert_eq!(f, b);
        assert_eq!(vec![100, 0, 2, 3, 4, 5, 6, 7, 8, 9], f);
    }

    #[test]
    fn insert_in_middle() {
        let mut s = LinkedSequence::new();
        let a = s.add_last(1u8);
        let d = s.add_last(4);

        let b = s.insert_after(2, &a).unwrap();
        s.insert_before(3, &d).unwrap();

        assert_eq!(vec![1, 2, 3, 4], forward(&s));
        assert_eq!(Some(b), s.next(&a));
        assert_eq!(Some(a), s.prev(&b));
    }

    #[test]
    fn remove_only_element_restores_empty_links() {
        let mut s = LinkedSequence::new();
        let p = s.add_first(1u8);

        assert_eq!(Some(1), s.remove(&p));
        assert!(s.is_empty());
        assert_eq!(TRAILER, s.link(HEADER).next());
        assert_eq!(HEADER, s.link(TRAILER).prev());
    }

    #[test]
    fn sentinels_cannot_be_removed() {
        let mut s = LinkedSequence::new();
        s.add_last(1u8);

        assert_eq!(None, s.remove(&Position::HEADER));
        assert_eq!(Err(SequenceError::Sentinel), s.try_remove(&Position::HEADER));
        assert_eq!(
            Err(SequenceError::Sentinel),
            s.try_remove(&Position::TRAILER)
        );
        assert_eq!(1, s.len());
        assert_eq!("(H) <-> 1 <-> (T)", s.to_string());
    }

    #[test]
    fn sentinels_hold_no_data() {
        let mut s = LinkedSequence::new();
        s.add_last(1u8);

        assert_eq!(None, s.get(&Position::HEADER));
        assert_eq!(None, s.get(&Position::TRAILER));
        assert_eq!(None, s.get_mut(&Position::HEADER));
    }

    #[test]
    fn insertion_outside_sentinels_is_rejected() {
        let mut s: LinkedSequence<u8> = LinkedSequence::new();

        assert_eq!(
            Err(SequenceError::OutsideSentinels),
            s.insert_after(1, &Position::TRAILER)
        );
        assert_eq!(
            Err(SequenceError::OutsideSentinels),
            s.insert_before(1, &Position::HEADER)
        );
        assert!(s.is_empty());
    }

    #[test]
    fn insertion_against_sentinels_matches_add() {
        let mut s = LinkedSequence::new();
        s.insert_after(2u8, &Position::HEADER).unwrap();
        s.insert_after(1, &Position::HEADER).unwrap();
        s.insert_before(3, &Position::TRAILER).unwrap();

        assert_eq!(vec![1, 2, 3], forward(&s));
    }

    #[test]
    fn traversal_stops_at_sentinels() {
        let mut s = LinkedSequence::new();
        let p = s.add_last(1u8);

        assert_eq!(None, s.next(&p));
        assert_eq!(None, s.prev(&p));
        assert_eq!(Some(p), s.next(&Position::HEADER));
        assert_eq!(Some(p), s.prev(&Position::TRAILER));
    }

    #[test]
    fn stale_position_is_rejected_after_reuse() {
        let mut s = LinkedSequence::new();
        let p0 = s.add_last(1u8);
        s.remove(&p0);

        // The freed node is reused for the next element.
        let p1 = s.add_last(2);
        assert_eq!(p0.ix, p1.ix);

        assert_eq!(None, s.get(&p0));
        assert_eq!(None, s.get_mut(&p0));
        assert_eq!(None, s.next(&p0));
        assert_eq!(None, s.remove(&p0));
        assert_eq!(Err(SequenceError::StalePosition), s.try_remove(&p0));
        assert_eq!(Err(SequenceError::StalePosition), s.insert_after(3, &p0));
        assert_eq!(Err(SequenceError::StalePosition), s.insert_before(3, &p0));
        assert_eq!(Some(&2), s.get(&p1));
        assert_eq!(1, s.len());
    }

    #[test]
    fn foreign_index_is_rejected() {
        let mut s = LinkedSequence::new();
        s.add_last(1u8);

        let bogus = Position {
            ix: 99,
            generation: 1,
        };
        assert_eq!(None, s.get(&bogus));
        assert_eq!(Err(SequenceError::StalePosition), s.try_remove(&bogus));
    }

    #[test]
    fn counts_work_as_expected() {
        let mut s = LinkedSequence::new();
        let a = s.add_first(10u8);
        let b = s.add_first(11u8);
        assert_eq!(2, s.len());
        assert_eq!(0, s.len_freelist());

        s.remove(&a);
        assert_eq!(1, s.len());
        assert_eq!(1, s.len_freelist());

        s.remove(&b);
        assert_eq!(0, s.len());
        assert_eq!(2, s.len_freelist());

        s.add_last(12u8);
        assert_eq!(1, s.len());
        assert_eq!(1, s.len_freelist());
    }

    #[test]
    fn with_capacity_preallocates_free_list() {
        let mut s = LinkedSequence::with_capacity(3);
        assert_eq!(3, s.len_freelist());
        assert_eq!(0, s.len());

        s.add_last(1u8);
        s.add_last(2);
        s.add_last(3);
        assert_eq!(0, s.len_freelist());

        s.add_last(4);
        assert_eq!(0, s.len_freelist());
        assert_eq!(vec![1, 2, 3, 4], forward(&s));
    }

    #[test]
    fn get_mut_allows_values_to_be_replaced() {
        let mut s = LinkedSequence::new();
        s.add_last(10u8);
        let p = s.add_last(11u8);

        if let Some(v) = s.get_mut(&p) {
            *v = 20;
        }

        assert_eq!(vec![10, 20], forward(&s));
    }

    #[test]
    fn debug_string() {
        let s: LinkedSequence<u8> = (1..=3).collect();

        assert_eq!("[1, 2, 3]", format!("{:?}", s));
    }

    #[test]
    fn display_string() {
        let s: LinkedSequence<u8> = (1..=3).collect();

        assert_eq!("(H) <-> 1 <-> 2 <-> 3 <-> (T)", s.to_string());
    }
}
