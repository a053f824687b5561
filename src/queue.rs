use crate::deque::Deque;
use crate::stack_queue::StackQueue;

/// A collection whose items are inserted and removed according to the
/// first-in first-out principle.
///
/// Both `StackQueue` and `Deque` implement this, which lets FIFO
/// behaviour be written once against either.
///
/// # Examples
///
/// ```
/// use linked_queues::{Deque, Queue, StackQueue};
///
/// fn drain<Q: Queue<u8>>(q: &mut Q) -> Vec<u8> {
///     let mut v = Vec::new();
///     while let Some(i) = q.dequeue() {
///         v.push(i);
///     }
///     v
/// }
///
/// let mut a: StackQueue<u8> = (1..=3).collect();
/// let mut b: Deque<u8> = (1..=3).collect();
/// assert_eq!(drain(&mut a), drain(&mut b));
/// ```
pub trait Queue<T> {
    /// The number of items in the queue.
    fn len(&self) -> usize;

    /// True when the queue is empty.
    fn is_empty(&self) -> bool {
        0 == self.len()
    }

    /// Insert `data` at the back of the queue.
    fn enqueue(&mut self, data: T);

    /// Remove and return the front of the queue, or `None` if empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Get the front of the queue without removing it, or `None` if
    /// empty.
    fn first(&mut self) -> Option<&T>;
}

impl<T> Queue<T> for StackQueue<T> {
    fn len(&self) -> usize {
        StackQueue::len(self)
    }

    fn enqueue(&mut self, data: T) {
        StackQueue::enqueue(self, data)
    }

    fn dequeue(&mut self) -> Option<T> {
        StackQueue::dequeue(self)
    }

    fn first(&mut self) -> Option<&T> {
        StackQueue::first(self)
    }
}

impl<T> Queue<T> for Deque<T> {
    fn len(&self) -> usize {
        Deque::len(self)
    }

    fn enqueue(&mut self, data: T) {
        self.add_last(data)
    }

    fn dequeue(&mut self) -> Option<T> {
        self.remove_first()
    }

    fn first(&mut self) -> Option<&T> {
        Deque::first(self)
    }
}
