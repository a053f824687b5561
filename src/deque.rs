use crate::linked_sequence::LinkedSequence;
use std::fmt;
use std::iter::FromIterator;

/// A double-ended queue adapted from a `LinkedSequence`. Every
/// operation is a single relink at one of the two ends and runs in
/// constant time.
///
/// Reading or removing from an empty deque returns `None`.
pub struct Deque<T> {
    sequence: LinkedSequence<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Deque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.sequence, fmt)
    }
}

impl<T> fmt::Display for Deque<T>
where
    T: fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sequence, fmt)
    }
}

impl<T> Deque<T> {
    /// Creates an empty `Deque`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::Deque;
    ///
    /// let deque: Deque<u32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Deque<T> {
        Deque {
            sequence: LinkedSequence::new(),
        }
    }

    /// Create a new `Deque` whose underlying sequence has `capacity`
    /// nodes ready for reuse.
    pub fn with_capacity(capacity: usize) -> Deque<T> {
        Deque {
            sequence: LinkedSequence::with_capacity(capacity),
        }
    }

    /// The number of items in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.add_first(1);
    /// d.add_last(2);
    /// assert_eq!(2, d.len());
    ///
    /// d.remove_first();
    /// assert_eq!(1, d.len());
    /// ```
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// True when the deque is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Get the first item of the deque. If the deque is empty, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::Deque;
    ///
    /// let mut d = Deque::new();
    /// assert_eq!(None, d.first());
    ///
    /// d.add_last(10);
    /// d.add_first(5);
    /// assert_eq!(Some(&5), d.first());
    /// ```
    pub fn first(&self) -> Option<&T> {
        self.sequence
            .first()
            .and_then(|p| self.sequence.get(&p))
    }

    /// Get the first item of the deque as a mutable reference.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        let p = self.sequence.first()?;
        self.sequence.get_mut(&p)
    }

    /// Get the last item of the deque. If the deque is empty, `None`
    /// is returned.
    pub fn last(&self) -> Option<&T> {
        self.sequence
            .last()
            .and_then(|p| self.sequence.get(&p))
    }

    /// Get the last item of the deque as a mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_last(10);
    ///
    /// if let Some(v) = d.last_mut() {
    ///     *v += 10;
    /// }
    /// assert_eq!(Some(&20), d.last());
    /// ```
    pub fn last_mut(&mut self) -> Option<&mut T> {
        let p = self.sequence.last()?;
        self.sequence.get_mut(&p)
    }

    /// Insert `data` at the front of the deque.
    pub fn add_first(&mut self, data: T) {
        self.sequence.add_first(data);
    }

    /// Insert `data` at the back of the deque.
    pub fn add_last(&mut self, data: T) {
        self.sequence.add_last(data);
    }

    /// Remove the first item of the deque and return it. If the deque
    /// is empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_last(10);
    /// d.add_last(20);
    ///
    /// assert_eq!(Some(10), d.remove_first());
    /// assert_eq!(Some(20), d.remove_first());
    /// assert_eq!(None, d.remove_first());
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        let p = self.sequence.first()?;
        self.sequence.remove(&p)
    }

    /// Remove the last item of the deque and return it. If the deque
    /// is empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_first(10);
    /// d.add_first(20);
    ///
    /// assert_eq!(Some(10), d.remove_last());
    /// assert_eq!(Some(20), d.remove_last());
    /// assert_eq!(None, d.remove_last());
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        let p = self.sequence.last()?;
        self.sequence.remove(&p)
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deque {
            sequence: LinkedSequence::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.add_last(i);
        }
    }
}
