use crate::stack::Stack;
use std::fmt;
use std::iter::FromIterator;

/// A first-in first-out queue built from two stacks.
///
/// New items are pushed onto the `incoming` stack. Items leave from
/// the `outgoing` stack, whose top is always the front of the queue.
/// When `outgoing` runs dry, the whole of `incoming` is popped onto it
/// in one go, which reverses it into queue order.
///
/// An item is moved between the stacks at most once, so a sequence of
/// `n` operations performs at most `n` moves in total: `enqueue` is
/// constant time, and `first`/`dequeue` are amortized constant time.
pub struct StackQueue<T> {
    // Newest item on top.
    incoming: Stack<T>,
    // Front of the queue on top.
    outgoing: Stack<T>,
    // Items across both stacks.
    len: usize,
    // Total items ever moved from `incoming` to `outgoing`.
    transferred: usize,
}

impl<T> Default for StackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for StackQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.elements()).finish()
    }
}

/// Renders front to back without moving anything between the stacks.
impl<T> fmt::Display for StackQueue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("StackQueue: ")?;
        for e in self.elements() {
            write!(fmt, "{} -> ", e)?;
        }
        Ok(())
    }
}

impl<T> StackQueue<T> {
    /// Creates an empty `StackQueue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::StackQueue;
    ///
    /// let q: StackQueue<u32> = StackQueue::new();
    /// assert!(q.is_empty());
    /// ```
    pub fn new() -> StackQueue<T> {
        StackQueue {
            incoming: Stack::new(),
            outgoing: Stack::new(),
            len: 0,
            transferred: 0,
        }
    }

    /// The number of items in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the queue is empty.
    pub fn is_empty(&self) -> bool {
        0 == self.len
    }

    /// The total number of items moved from the incoming stack to the
    /// outgoing stack over the life of the queue. Never exceeds the
    /// number of items ever enqueued.
    pub fn transferred(&self) -> usize {
        self.transferred
    }

    /// Insert `data` at the back of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::StackQueue;
    ///
    /// let mut q = StackQueue::new();
    /// q.enqueue(1);
    /// q.enqueue(2);
    ///
    /// assert_eq!(2, q.len());
    /// assert_eq!(Some(1), q.dequeue());
    /// ```
    pub fn enqueue(&mut self, data: T) {
        self.incoming.push(data);
        self.len += 1;
    }

    /// Remove the front of the queue and return it. If the queue is
    /// empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::StackQueue;
    ///
    /// let mut q = StackQueue::new();
    /// q.enqueue(1);
    /// q.enqueue(2);
    /// q.enqueue(3);
    ///
    /// assert_eq!(Some(1), q.dequeue());
    /// assert_eq!(Some(2), q.dequeue());
    /// assert_eq!(Some(3), q.dequeue());
    /// assert_eq!(None, q.dequeue());
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.transfer();
        self.len -= 1;
        self.outgoing.pop()
    }

    /// Get the front of the queue without removing it. If the queue is
    /// empty, `None` is returned.
    ///
    /// This may move the incoming stack onto the outgoing stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queues::StackQueue;
    ///
    /// let mut q = StackQueue::new();
    /// assert_eq!(None, q.first());
    ///
    /// q.enqueue(1);
    /// assert_eq!(Some(&1), q.first());
    /// q.enqueue(2);
    /// assert_eq!(Some(&1), q.first());
    /// ```
    pub fn first(&mut self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        self.transfer();
        self.outgoing.peek()
    }

    /// Get the front of the queue through a shared reference. Nothing
    /// is moved between the stacks.
    pub fn peek(&self) -> Option<&T> {
        self.outgoing.peek().or_else(|| self.incoming.bottom())
    }

    // Moves all of `incoming` onto `outgoing`, but only once `outgoing`
    // is empty. Otherwise the front of the queue is already on top.
    fn transfer(&mut self) {
        if !self.outgoing.is_empty() {
            return;
        }

        while let Some(data) = self.incoming.pop() {
            self.outgoing.push(data);
            self.transferred += 1;
        }

        debug_assert_eq!(self.len, self.outgoing.len());
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.outgoing.top_down().chain(self.incoming.bottom_up())
    }
}

impl<T> FromIterator<T> for StackQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

impl<T> Extend<T> for StackQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.enqueue(i);
        }
    }
}
